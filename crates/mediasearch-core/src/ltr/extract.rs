//! Query term extraction and classification

use super::params::FeatureParams;
use super::{StatementTerm, TrackedProperty, MAX_STATEMENT_TERMS, QUERY_TERM_KEY};
use crate::query::{NestedQuery, QueryNode};
use std::collections::HashSet;

/// Collect every string stored under the reserved `query` key
///
/// Walks mappings in insertion order and sequences in index order, so the
/// result is in first-seen order. Duplicates are dropped.
pub fn collect_query_terms(root: &QueryNode) -> Vec<String> {
    enum Step<'a> {
        Visit(&'a QueryNode),
        Emit(&'a str),
    }

    let mut seen: HashSet<&str> = HashSet::new();
    let mut terms = Vec::new();

    // Explicit stack so arbitrarily deep input cannot exhaust the call stack.
    // Children are pushed in reverse so they pop in natural order.
    let mut stack = vec![Step::Visit(root)];
    while let Some(step) = stack.pop() {
        match step {
            Step::Emit(term) => {
                if seen.insert(term) {
                    terms.push(term.to_string());
                }
            }
            Step::Visit(QueryNode::Mapping(entries)) => {
                for (key, value) in entries.iter().rev() {
                    match value {
                        QueryNode::String(term) if key == QUERY_TERM_KEY => {
                            stack.push(Step::Emit(term.as_str()))
                        }
                        _ => stack.push(Step::Visit(value)),
                    }
                }
            }
            Step::Visit(QueryNode::Sequence(items)) => {
                stack.extend(items.iter().rev().map(Step::Visit));
            }
            Step::Visit(QueryNode::String(_) | QueryNode::Other) => {}
        }
    }

    terms
}

/// Compute the LTR feature parameters of a query
///
/// Never fails: shapes that carry no usable terms produce empty text and
/// placeholder slots. `language_code` is passed through untouched.
pub fn compute_feature_params(query: &impl NestedQuery, language_code: &str) -> FeatureParams {
    let root = query.to_query_node();
    let candidates = collect_query_terms(&root);

    let mut text_terms: Vec<&str> = Vec::new();
    let mut digital_representation_of: Vec<String> = Vec::new();
    let mut depicts: Vec<String> = Vec::new();
    let mut overflow = 0usize;
    let mut untracked = 0usize;

    for candidate in &candidates {
        let Some(statement) = StatementTerm::parse(candidate) else {
            text_terms.push(candidate);
            continue;
        };

        let bucket = match statement.tracked_property() {
            Some(TrackedProperty::DigitalRepresentationOf) => &mut digital_representation_of,
            Some(TrackedProperty::Depicts) => &mut depicts,
            None => {
                tracing::trace!("Dropping untracked statement term '{}'", candidate);
                untracked += 1;
                continue;
            }
        };

        if bucket.len() < MAX_STATEMENT_TERMS {
            bucket.push(candidate.clone());
        } else {
            overflow += 1;
        }
    }

    if overflow > 0 {
        tracing::debug!(
            "{} statement terms exceeded the {}-slot cap and were dropped",
            overflow,
            MAX_STATEMENT_TERMS
        );
    }

    tracing::debug!(
        "LTR features from {} candidates: {} text terms, {} DigRepOf, {} Depicts, {} untracked",
        candidates.len(),
        text_terms.len(),
        digital_representation_of.len(),
        depicts.len(),
        untracked
    );

    FeatureParams::new(
        language_code.to_string(),
        text_terms.join(" "),
        digital_representation_of,
        depicts,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collect_only_query_key_strings() {
        let root = QueryNode::from(json!({
            "query": "cat",
            "ignore": "x",
            "nested": {"field": "y", "query": "dog"},
            "list": ["loose", {"query": "bird"}, 42]
        }));
        assert_eq!(collect_query_terms(&root), vec!["cat", "dog", "bird"]);
    }

    #[test]
    fn test_collect_recurses_into_non_string_query_value() {
        let root = QueryNode::from(json!({
            "query": {"bool": {"must": [{"query": "inner"}]}},
            "after": {"query": "later"}
        }));
        assert_eq!(collect_query_terms(&root), vec!["inner", "later"]);
    }

    #[test]
    fn test_collect_ignores_numeric_query_value() {
        let root = QueryNode::from(json!({"query": 5, "x": [{"query": null}]}));
        assert!(collect_query_terms(&root).is_empty());
    }

    #[test]
    fn test_collect_root_string_is_not_a_term() {
        assert!(collect_query_terms(&QueryNode::from("cat")).is_empty());
        assert!(collect_query_terms(&QueryNode::Other).is_empty());
    }

    #[test]
    fn test_collect_dedups_in_first_seen_order() {
        let root = QueryNode::from(json!([
            {"query": "b"},
            {"query": "a"},
            [{"query": "b"}, {"query": "c"}],
            {"query": "a"}
        ]));
        assert_eq!(collect_query_terms(&root), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_collect_sibling_query_before_nested() {
        let root = QueryNode::from(json!({
            "should": [{"match": {"query": "first"}}],
            "query": "second"
        }));
        assert_eq!(collect_query_terms(&root), vec!["first", "second"]);
    }

    #[test]
    fn test_duplicate_query_keys_in_mapping() {
        let root = QueryNode::Mapping(vec![
            ("query".to_string(), QueryNode::from("one")),
            ("query".to_string(), QueryNode::from("two")),
        ]);
        assert_eq!(collect_query_terms(&root), vec!["one", "two"]);
    }

    #[test]
    fn test_deeply_nested_query() {
        let mut node = QueryNode::Mapping(vec![("query".to_string(), QueryNode::from("deep"))]);
        for i in 0..1_000 {
            node = if i % 2 == 0 {
                QueryNode::Sequence(vec![node])
            } else {
                QueryNode::Mapping(vec![("bool".to_string(), node)])
            };
        }
        assert_eq!(collect_query_terms(&node), vec!["deep"]);
    }

    #[test]
    fn test_compute_on_deep_query_with_small_stack() {
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(|| {
                let mut node = QueryNode::Sequence(vec![
                    QueryNode::Mapping(vec![("query".to_string(), QueryNode::from("P180=Q146"))]),
                    QueryNode::Mapping(vec![("query".to_string(), QueryNode::from("cat"))]),
                ]);
                for _ in 0..200_000 {
                    node = QueryNode::Mapping(vec![("bool".to_string(), node)]);
                }
                compute_feature_params(&node, "en")
            })
            .unwrap();

        let params = handle.join().unwrap();
        assert_eq!(params.get("Depicts_1"), Some("P180=Q146"));
        assert_eq!(params.text_search_term(), "cat");
    }

    #[test]
    fn test_untracked_statement_dropped() {
        let params = compute_feature_params(&json!({"query": "P111=Q222"}), "en");
        assert_eq!(params.text_search_term(), "");
        assert!(params.is_all_placeholders());
    }

    #[test]
    fn test_dedup_is_global_before_classification() {
        let params = compute_feature_params(
            &json!([
                {"query": "P180=Q1"},
                {"query": "cat"},
                {"query": "P180=Q1"},
                {"query": "cat"}
            ]),
            "en",
        );
        assert_eq!(params.text_search_term(), "cat");
        assert_eq!(params.get("Depicts_1"), Some("P180=Q1"));
        assert_eq!(params.get("Depicts_2"), Some("P180=NO_ENTITY"));
    }

    #[test]
    fn test_overflow_does_not_spill_to_other_bucket() {
        let leaves: Vec<_> = (1..=55)
            .map(|i| json!({"query": format!("P180=Q{}", i)}))
            .chain(std::iter::once(json!({"query": "P6243=Q7"})))
            .collect();
        let params = compute_feature_params(&serde_json::Value::Array(leaves), "en");
        let depicts = params.statement_slots(TrackedProperty::Depicts);
        assert_eq!(depicts.len(), MAX_STATEMENT_TERMS);
        assert_eq!(depicts[49], "P180=Q50");
        assert_eq!(params.get("DigRepOf_1"), Some("P6243=Q7"));
        assert_eq!(params.get("DigRepOf_2"), Some("P6243=NO_ENTITY"));
        assert_eq!(params.text_search_term(), "");
    }

    #[test]
    fn test_language_passthrough() {
        for lang in ["", "zh-hant", "not a language!"] {
            let params = compute_feature_params(&QueryNode::empty(), lang);
            assert_eq!(params.language(), lang);
        }
    }
}
