//! Models command

use crate::app::OutputFormat;
use anyhow::Result;
use mediasearch_core::{available_models, Config};

pub fn run(config: &Config, format: OutputFormat) -> Result<()> {
    let models = available_models();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "models": models,
                "configured": config.ltr.model,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Csv => {
            println!("model,configured");
            for model in models {
                println!("{},{}", model, *model == config.ltr.model);
            }
        }
        OutputFormat::Cli => {
            for model in models {
                let marker = if *model == config.ltr.model { "*" } else { " " };
                println!("{} {}", marker, model);
            }
        }
    }
    Ok(())
}
