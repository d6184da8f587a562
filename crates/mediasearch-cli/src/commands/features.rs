//! Feature parameters command

use crate::app::{FeaturesArgs, OutputFormat};
use crate::output::{format_feature_params, FormatOptions};
use anyhow::{Context, Result};
use mediasearch_core::{builder_for_model, Config, QueryNode};
use std::io::Read;
use std::path::Path;

pub fn run(args: FeaturesArgs, config: &Config, format: OutputFormat) -> Result<()> {
    let input = read_query_input(&args)?;
    let query = QueryNode::from_json_str(&input)?;

    let language = args
        .language
        .clone()
        .unwrap_or_else(|| config.default_language.clone());
    let model = args.model.as_deref().unwrap_or(config.ltr.model.as_str());
    let builder = builder_for_model(model)?;

    tracing::debug!(
        "Computing features with model {} for language '{}'",
        builder.model_name(),
        language
    );
    let params = builder.compute_feature_params(&query, &language);

    let format_opts = FormatOptions {
        terms_only: args.terms_only,
    };
    print!("{}", format_feature_params(&params, format, &format_opts)?);
    Ok(())
}

fn read_query_input(args: &FeaturesArgs) -> Result<String> {
    if let Some(ref inline) = args.query {
        return Ok(inline.clone());
    }

    match args.file.as_deref() {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read query file {}", path.display())),
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read query from stdin")?;
            Ok(buf)
        }
    }
}
