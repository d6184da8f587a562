//! Config command

use crate::app::{ConfigArgs, OutputFormat};
use crate::output::csv::escape_csv;
use anyhow::Result;
use mediasearch_core::Config;

pub fn run(args: ConfigArgs, config: &Config, format: OutputFormat) -> Result<()> {
    if args.path {
        println!("{}", Config::default_path().display());
        return Ok(());
    }

    if let Err(e) = config.validate() {
        tracing::warn!("{}", e);
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        OutputFormat::Csv => {
            println!("key,value");
            println!("default_language,{}", escape_csv(&config.default_language));
            println!("ltr.model,{}", escape_csv(&config.ltr.model));
        }
        OutputFormat::Cli => {
            println!("Config file:       {}", Config::default_path().display());
            println!("Default language:  {}", config.default_language);
            println!("LTR model:         {}", config.ltr.model);
        }
    }
    Ok(())
}
