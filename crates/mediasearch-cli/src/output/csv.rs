//! CSV output formatter

use super::{selected, FormatOptions};
use mediasearch_core::FeatureParams;

pub fn format_params(params: &FeatureParams, options: &FormatOptions) -> String {
    let mut output = String::from("name,value\n");

    for (name, value) in selected(params, options) {
        output.push_str(&format!("{},{}\n", name, escape_csv(value)));
    }

    output
}

pub(crate) fn escape_csv(s: &str) -> String {
    if s.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}
