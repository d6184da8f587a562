//! Fixed-shape feature parameter map

use super::{TrackedProperty, MAX_STATEMENT_TERMS};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Parameter name of the language code
pub const LANGUAGE_PARAM: &str = "language";

/// Parameter name of the joined free-text terms
pub const TEXT_SEARCH_TERM_PARAM: &str = "text_search_term";

/// Named inputs of the ranking model
///
/// Always holds `language`, `text_search_term` and 50 slots for each
/// tracked property; slots without a term hold the property's placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureParams {
    language: String,
    text_search_term: String,
    digital_representation_of: Vec<String>,
    depicts: Vec<String>,
}

impl FeatureParams {
    /// Total number of parameters
    pub const LEN: usize = 2 + 2 * MAX_STATEMENT_TERMS;

    pub(crate) fn new(
        language: String,
        text_search_term: String,
        digital_representation_of: Vec<String>,
        depicts: Vec<String>,
    ) -> Self {
        Self {
            language,
            text_search_term,
            digital_representation_of: fill_slots(
                digital_representation_of,
                TrackedProperty::DigitalRepresentationOf,
            ),
            depicts: fill_slots(depicts, TrackedProperty::Depicts),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn text_search_term(&self) -> &str {
        &self.text_search_term
    }

    /// All 50 slot values of a tracked property, placeholders included
    pub fn statement_slots(&self, property: TrackedProperty) -> &[String] {
        match property {
            TrackedProperty::DigitalRepresentationOf => &self.digital_representation_of,
            TrackedProperty::Depicts => &self.depicts,
        }
    }

    /// Slot values holding a real statement term
    pub fn statement_terms(&self, property: TrackedProperty) -> impl Iterator<Item = &str> {
        self.statement_slots(property)
            .iter()
            .map(String::as_str)
            .filter(move |v| *v != property.placeholder())
    }

    /// True when no statement slot holds a real term
    pub fn is_all_placeholders(&self) -> bool {
        TrackedProperty::ALL
            .iter()
            .all(|p| self.statement_terms(*p).next().is_none())
    }

    /// Look up a parameter by its wire name
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            LANGUAGE_PARAM => return Some(self.language.as_str()),
            TEXT_SEARCH_TERM_PARAM => return Some(self.text_search_term.as_str()),
            _ => {}
        }

        let (prefix, index) = name.rsplit_once('_')?;
        let property = TrackedProperty::ALL
            .into_iter()
            .find(|p| p.param_prefix() == prefix)?;
        // Reject forms like "Depicts_01" that would otherwise parse
        if index.starts_with('0') {
            return None;
        }
        let index: usize = index.parse().ok()?;
        if index == 0 {
            return None;
        }
        self.statement_slots(property)
            .get(index - 1)
            .map(String::as_str)
    }

    /// Always `FeatureParams::LEN`
    pub fn len(&self) -> usize {
        Self::LEN
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// `(name, value)` pairs in wire order
    pub fn iter(&self) -> impl Iterator<Item = (String, &str)> {
        let head = [
            (LANGUAGE_PARAM.to_string(), self.language.as_str()),
            (
                TEXT_SEARCH_TERM_PARAM.to_string(),
                self.text_search_term.as_str(),
            ),
        ];
        let slots = TrackedProperty::ALL.into_iter().flat_map(move |property| {
            self.statement_slots(property)
                .iter()
                .enumerate()
                .map(move |(i, value)| (property.slot_name(i + 1), value.as_str()))
        });
        head.into_iter().chain(slots)
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(name, value)| (name, value.to_string()))
            .collect()
    }
}

fn fill_slots(mut terms: Vec<String>, property: TrackedProperty) -> Vec<String> {
    terms.truncate(MAX_STATEMENT_TERMS);
    terms.resize(MAX_STATEMENT_TERMS, property.placeholder().to_string());
    terms
}

impl Serialize for FeatureParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Self::LEN))?;
        for (name, value) in self.iter() {
            map.serialize_entry(&name, value)?;
        }
        map.end()
    }
}
