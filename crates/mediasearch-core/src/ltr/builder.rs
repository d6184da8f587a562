//! LTR param builders keyed by ranking model version

use super::extract::compute_feature_params;
use super::params::FeatureParams;
use crate::error::{MediaSearchError, Result};
use crate::query::QueryNode;

/// Builds the parameter map a specific ranking model was trained on
pub trait LtrParamBuilder: Send + Sync {
    /// Model version this builder produces parameters for
    fn model_name(&self) -> &str;

    fn compute_feature_params(&self, query: &QueryNode, language_code: &str) -> FeatureParams;
}

/// Parameters of the 2021-08-26 media search model
#[derive(Debug, Clone, Copy, Default)]
pub struct MediaSearch20210826;

impl MediaSearch20210826 {
    pub const MODEL_NAME: &'static str = "20210826";
}

impl LtrParamBuilder for MediaSearch20210826 {
    fn model_name(&self) -> &str {
        Self::MODEL_NAME
    }

    fn compute_feature_params(&self, query: &QueryNode, language_code: &str) -> FeatureParams {
        compute_feature_params(query, language_code)
    }
}

const MODELS: &[&str] = &[MediaSearch20210826::MODEL_NAME];

/// Model names with a registered builder
pub fn available_models() -> &'static [&'static str] {
    MODELS
}

/// Look up the builder for a model name
pub fn builder_for_model(name: &str) -> Result<Box<dyn LtrParamBuilder>> {
    match name {
        MediaSearch20210826::MODEL_NAME => Ok(Box::new(MediaSearch20210826)),
        other => Err(MediaSearchError::UnknownModel(other.to_string())),
    }
}
