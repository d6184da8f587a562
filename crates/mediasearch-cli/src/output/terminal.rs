//! Terminal output formatter

use super::{selected, FormatOptions};
use mediasearch_core::FeatureParams;

pub fn format_params(params: &FeatureParams, options: &FormatOptions) -> String {
    let mut output = String::new();

    for (name, value) in selected(params, options) {
        output.push_str(&format!("{:<18} = {}\n", name, value));
    }

    output
}
