//! Nested query representation
//!
//! The search query builder hands over an arbitrarily nested structure of
//! mappings and sequences. Only string leaves stored under the reserved
//! `query` key carry meaning for feature extraction; everything else is
//! walked through or ignored.

use crate::error::Result;
use serde_json::Value;
use std::borrow::Cow;

/// A node of a nested query structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryNode {
    /// Key/value pairs in insertion order
    Mapping(Vec<(String, QueryNode)>),
    /// Values in index order
    Sequence(Vec<QueryNode>),
    String(String),
    /// Numbers, booleans and nulls
    Other,
}

impl QueryNode {
    /// An empty mapping, what an absent query amounts to
    pub fn empty() -> Self {
        QueryNode::Mapping(Vec::new())
    }

    /// True for an empty mapping or sequence
    pub fn is_empty(&self) -> bool {
        match self {
            QueryNode::Mapping(entries) => entries.is_empty(),
            QueryNode::Sequence(items) => items.is_empty(),
            _ => false,
        }
    }

    /// Parse JSON text into a query node
    ///
    /// Blank input is treated as an absent query.
    pub fn from_json_str(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Ok(Self::empty());
        }
        let value: Value = serde_json::from_str(input)?;
        Ok(Self::from(value))
    }

    /// Look up a mapping entry by key (first match)
    pub fn get(&self, key: &str) -> Option<&QueryNode> {
        match self {
            QueryNode::Mapping(entries) => entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryNode::String(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

// Children are detached onto a heap stack so dropping a deeply nested
// query does not recurse.
impl Drop for QueryNode {
    fn drop(&mut self) {
        let mut pending: Vec<QueryNode> = Vec::new();
        detach_children(self, &mut pending);
        while let Some(mut node) = pending.pop() {
            detach_children(&mut node, &mut pending);
        }
    }
}

fn detach_children(node: &mut QueryNode, pending: &mut Vec<QueryNode>) {
    match node {
        QueryNode::Mapping(entries) => pending.extend(entries.drain(..).map(|(_, v)| v)),
        QueryNode::Sequence(items) => pending.append(items),
        QueryNode::String(_) | QueryNode::Other => {}
    }
}

impl Default for QueryNode {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Value> for QueryNode {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => QueryNode::Mapping(
                map.into_iter()
                    .map(|(k, v)| (k, QueryNode::from(v)))
                    .collect(),
            ),
            Value::Array(items) => {
                QueryNode::Sequence(items.into_iter().map(QueryNode::from).collect())
            }
            Value::String(s) => QueryNode::String(s),
            Value::Null | Value::Bool(_) | Value::Number(_) => QueryNode::Other,
        }
    }
}

impl From<&Value> for QueryNode {
    fn from(value: &Value) -> Self {
        match value {
            Value::Object(map) => QueryNode::Mapping(
                map.iter()
                    .map(|(k, v)| (k.clone(), QueryNode::from(v)))
                    .collect(),
            ),
            Value::Array(items) => QueryNode::Sequence(items.iter().map(QueryNode::from).collect()),
            Value::String(s) => QueryNode::String(s.clone()),
            Value::Null | Value::Bool(_) | Value::Number(_) => QueryNode::Other,
        }
    }
}

impl From<&str> for QueryNode {
    fn from(s: &str) -> Self {
        QueryNode::String(s.to_string())
    }
}

impl From<String> for QueryNode {
    fn from(s: String) -> Self {
        QueryNode::String(s)
    }
}

/// Anything the host can convert into a nested query structure
pub trait NestedQuery {
    /// Borrowed when the value already is a `QueryNode`
    fn to_query_node(&self) -> Cow<'_, QueryNode>;
}

impl NestedQuery for QueryNode {
    fn to_query_node(&self) -> Cow<'_, QueryNode> {
        Cow::Borrowed(self)
    }
}

impl NestedQuery for Value {
    fn to_query_node(&self) -> Cow<'_, QueryNode> {
        Cow::Owned(QueryNode::from(self))
    }
}

impl<T: NestedQuery> NestedQuery for Option<T> {
    fn to_query_node(&self) -> Cow<'_, QueryNode> {
        match self {
            Some(query) => query.to_query_node(),
            None => Cow::Owned(QueryNode::empty()),
        }
    }
}

impl<T: NestedQuery + ?Sized> NestedQuery for &T {
    fn to_query_node(&self) -> Cow<'_, QueryNode> {
        (**self).to_query_node()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_keeps_insertion_order() {
        let node = QueryNode::from(json!({"zeta": 1, "alpha": "a", "mid": [true, null]}));
        let QueryNode::Mapping(entries) = &node else {
            panic!("expected mapping");
        };
        let keys: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(entries[0].1, QueryNode::Other);
        assert_eq!(entries[1].1, QueryNode::String("a".to_string()));
        assert_eq!(
            entries[2].1,
            QueryNode::Sequence(vec![QueryNode::Other, QueryNode::Other])
        );
    }

    #[test]
    fn test_owned_and_borrowed_conversion_agree() {
        let value = json!({"bool": {"should": [{"match": {"query": "cat"}}]}});
        assert_eq!(QueryNode::from(&value), QueryNode::from(value.clone()));
        assert_eq!(value.to_query_node().into_owned(), QueryNode::from(value));
    }

    #[test]
    fn test_from_json_str_blank_is_empty() {
        assert_eq!(QueryNode::from_json_str("").unwrap(), QueryNode::empty());
        assert_eq!(QueryNode::from_json_str("  \n").unwrap(), QueryNode::empty());
        assert!(QueryNode::from_json_str("{not json").is_err());
    }

    #[test]
    fn test_absent_query_is_empty_mapping() {
        let absent: Option<Value> = None;
        let node = absent.to_query_node();
        assert!(node.is_empty());
        assert_eq!(*node, QueryNode::default());
    }

    #[test]
    fn test_query_node_is_borrowed_not_copied() {
        let node = QueryNode::from(json!({"query": "cat"}));
        assert!(matches!(node.to_query_node(), Cow::Borrowed(n) if std::ptr::eq(n, &node)));
        assert!(matches!(Some(&node).to_query_node(), Cow::Borrowed(_)));
    }

    #[test]
    fn test_drop_deeply_nested_node() {
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(|| {
                let mut node = QueryNode::from("leaf");
                for _ in 0..200_000 {
                    node = QueryNode::Sequence(vec![node]);
                }
                drop(node);
            })
            .unwrap();
        handle.join().unwrap();
    }

    #[test]
    fn test_get_and_as_str() {
        let node = QueryNode::from(json!({"query": "dog", "boost": 2}));
        assert_eq!(node.get("query").and_then(QueryNode::as_str), Some("dog"));
        assert_eq!(node.get("boost"), Some(&QueryNode::Other));
        assert_eq!(node.get("missing"), None);
        assert!(QueryNode::String("x".to_string()).get("query").is_none());
    }
}
