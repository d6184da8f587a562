//! Learning-to-rank feature parameters
//!
//! Turns a nested structured query into the fixed-shape parameter map a
//! media search ranking model is trained against:
//! - `language` and `text_search_term`
//! - 50 ranked `DigRepOf_N` slots for "digital representation of" statements
//! - 50 ranked `Depicts_N` slots for "depicts" statements

mod builder;
mod extract;
mod params;

pub use builder::{available_models, builder_for_model, LtrParamBuilder, MediaSearch20210826};
pub use extract::{collect_query_terms, compute_feature_params};
pub use params::{FeatureParams, LANGUAGE_PARAM, TEXT_SEARCH_TERM_PARAM};

use lazy_static::lazy_static;
use regex::Regex;

/// Reserved key marking a search term leaf in the nested query
pub const QUERY_TERM_KEY: &str = "query";

/// Property id of "digital representation of"
pub const DIGITAL_REPRESENTATION_OF: &str = "P6243";

/// Property id of "depicts"
pub const DEPICTS: &str = "P180";

/// Number of ranked slots reported per tracked property
pub const MAX_STATEMENT_TERMS: usize = 50;

/// Shape of a statement term, e.g. `P180=Q146`
pub const PREDICATE_TERM_PATTERN: &str = r"^P[1-9][0-9]*=Q[1-9][0-9]*$";

lazy_static! {
    static ref PREDICATE_TERM_RE: Regex =
        Regex::new(r"^(P[1-9][0-9]*)=(Q[1-9][0-9]*)$").unwrap();
}

/// Statement properties with dedicated model slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TrackedProperty {
    DigitalRepresentationOf,
    Depicts,
}

impl TrackedProperty {
    /// Both tracked properties, in parameter order
    pub const ALL: [TrackedProperty; 2] = [
        TrackedProperty::DigitalRepresentationOf,
        TrackedProperty::Depicts,
    ];

    pub fn property_id(&self) -> &'static str {
        match self {
            TrackedProperty::DigitalRepresentationOf => DIGITAL_REPRESENTATION_OF,
            TrackedProperty::Depicts => DEPICTS,
        }
    }

    /// Parameter name prefix; slot N is named `{prefix}_{N}`
    pub fn param_prefix(&self) -> &'static str {
        match self {
            TrackedProperty::DigitalRepresentationOf => "DigRepOf",
            TrackedProperty::Depicts => "Depicts",
        }
    }

    /// Value used for slots with no matching term
    pub fn placeholder(&self) -> &'static str {
        match self {
            TrackedProperty::DigitalRepresentationOf => "P6243=NO_ENTITY",
            TrackedProperty::Depicts => "P180=NO_ENTITY",
        }
    }

    pub fn from_property_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.property_id() == id)
    }

    /// Parameter name of a 1-based slot
    pub fn slot_name(&self, index: usize) -> String {
        format!("{}_{}", self.param_prefix(), index)
    }
}

/// A `P<digits>=Q<digits>` statement term
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatementTerm<'a> {
    pub property_id: &'a str,
    pub entity_id: &'a str,
}

impl<'a> StatementTerm<'a> {
    /// Returns None unless the whole term has the statement shape
    pub fn parse(term: &'a str) -> Option<Self> {
        let caps = PREDICATE_TERM_RE.captures(term)?;
        Some(Self {
            property_id: caps.get(1)?.as_str(),
            entity_id: caps.get(2)?.as_str(),
        })
    }

    pub fn tracked_property(&self) -> Option<TrackedProperty> {
        TrackedProperty::from_property_id(self.property_id)
    }
}
