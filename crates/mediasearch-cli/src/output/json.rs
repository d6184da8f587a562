//! JSON output formatter

use super::{selected, FormatOptions};
use anyhow::Result;
use mediasearch_core::FeatureParams;

pub fn format_params(params: &FeatureParams, options: &FormatOptions) -> Result<String> {
    let output = if options.terms_only {
        let map: serde_json::Map<String, serde_json::Value> = selected(params, options)
            .map(|(name, value)| (name, serde_json::Value::from(value)))
            .collect();
        serde_json::to_string_pretty(&map)?
    } else {
        serde_json::to_string_pretty(params)?
    };

    Ok(output + "\n")
}
