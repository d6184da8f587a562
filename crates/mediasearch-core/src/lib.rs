//! MediaSearch Core Library
//!
//! Learning-to-rank feature parameters for structured media search.
//!
//! # Features
//! - Nested query model converted from JSON in insertion order
//! - Free-text and statement term extraction with global deduplication
//! - Fixed-shape parameter map: 50 ranked slots per tracked property
//! - Param builders keyed by ranking model version

pub mod config;
pub mod error;
pub mod ltr;
pub mod query;

pub use config::{Config, LtrConfig};
pub use error::{Error, MediaSearchError, Result};
pub use ltr::{
    available_models, builder_for_model, collect_query_terms, compute_feature_params,
    FeatureParams, LtrParamBuilder, MediaSearch20210826, StatementTerm, TrackedProperty,
    DEPICTS, DIGITAL_REPRESENTATION_OF, MAX_STATEMENT_TERMS,
};
pub use query::{NestedQuery, QueryNode};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "mediasearch";
