//! Output formatters

pub mod csv;
pub mod json;
pub mod terminal;

use crate::app::OutputFormat;
use anyhow::Result;
use mediasearch_core::{FeatureParams, TrackedProperty};

/// Format options
pub struct FormatOptions {
    /// Skip slots that hold a placeholder
    pub terms_only: bool,
}

/// Format feature parameters
pub fn format_feature_params(
    params: &FeatureParams,
    format: OutputFormat,
    options: &FormatOptions,
) -> Result<String> {
    match format {
        OutputFormat::Json => json::format_params(params, options),
        OutputFormat::Csv => Ok(csv::format_params(params, options)),
        OutputFormat::Cli => Ok(terminal::format_params(params, options)),
    }
}

/// Parameters selected for output, in wire order
fn selected<'a>(
    params: &'a FeatureParams,
    options: &FormatOptions,
) -> impl Iterator<Item = (String, &'a str)> {
    let terms_only = options.terms_only;
    params.iter().filter(move |(name, value)| {
        !terms_only
            || !TrackedProperty::ALL
                .iter()
                .any(|p| name.starts_with(p.param_prefix()) && *value == p.placeholder())
    })
}
