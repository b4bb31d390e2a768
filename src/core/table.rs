//! Nested translation table and dotted-key traversal.
//!
//! A table is the root object of a translation document. Keys such as
//! `ERROR.NOT_FOUND` are walked segment by segment through nested objects,
//! producing a [`Lookup`] that callers convert to display text at the boundary.

use std::borrow::Cow;

use log::warn;
use serde_json::{Map, Value};

/// Outcome of walking a key through the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// The key ends on a string value.
    Leaf(&'a str),
    /// The key ends on a nested object.
    Node(&'a Map<String, Value>),
    /// The key ends on an array.
    List(&'a [Value]),
    /// The key ends on a number, boolean or null.
    Scalar(&'a Value),
    /// Some segment of the key has no entry.
    Missing,
}

impl<'a> Lookup<'a> {
    fn from_value(value: &'a Value) -> Self {
        match value {
            Value::String(s) => Lookup::Leaf(s),
            Value::Object(map) => Lookup::Node(map),
            Value::Array(items) => Lookup::List(items),
            other => Lookup::Scalar(other),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Lookup::Missing)
    }

    /// Text to show for this lookup, or `None` when there is nothing to show.
    ///
    /// Strings are returned as-is (possibly empty). Truthy scalars render as
    /// their JSON text and string-only arrays are joined with `","`. Other
    /// non-empty objects and arrays render as compact JSON. `{}`, `[]`,
    /// `null`, `false` and `0` have no display text.
    pub fn display_text(&self) -> Option<Cow<'a, str>> {
        match *self {
            Lookup::Leaf(s) => Some(Cow::Borrowed(s)),
            Lookup::Scalar(value) => match value {
                Value::Bool(true) => Some(Cow::Borrowed("true")),
                Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => {
                    Some(Cow::Owned(n.to_string()))
                }
                _ => None,
            },
            Lookup::List([]) => None,
            Lookup::List(items) => {
                let strings: Option<Vec<&str>> = items.iter().map(Value::as_str).collect();
                match strings {
                    Some(values) => Some(Cow::Owned(values.join(","))),
                    None => serde_json::to_string(items).ok().map(Cow::Owned),
                }
            }
            Lookup::Node(map) if map.is_empty() => None,
            Lookup::Node(map) => serde_json::to_string(map).ok().map(Cow::Owned),
            Lookup::Missing => None,
        }
    }
}

/// Immutable nested mapping loaded from a translation document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationTable {
    root: Map<String, Value>,
}

impl TranslationTable {
    pub fn new(root: Map<String, Value>) -> Self {
        Self { root }
    }

    /// Build a table from a parsed document. Anything other than an object
    /// at the root yields an empty table.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(root) => Self::new(root),
            other => {
                warn!(
                    "Translation document root is {}, expected an object; using an empty table",
                    json_type_name(&other)
                );
                Self::default()
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Number of string leaves reachable from the root.
    pub fn leaf_count(&self) -> usize {
        self.root.values().map(count_leaves).sum()
    }

    /// Walk `key` through the table.
    ///
    /// A key with an empty segment (including the empty key) never matches.
    /// Otherwise a root entry whose name equals `key` verbatim and whose value
    /// is a string wins before any dotted traversal.
    pub fn lookup(&self, key: &str) -> Lookup<'_> {
        if key.split('.').any(str::is_empty) {
            return Lookup::Missing;
        }

        if let Some(Value::String(direct)) = self.root.get(key) {
            return Lookup::Leaf(direct);
        }

        key.split('.')
            .try_fold(Lookup::Node(&self.root), descend)
            .unwrap_or(Lookup::Missing)
    }
}

fn descend<'a>(current: Lookup<'a>, segment: &str) -> Option<Lookup<'a>> {
    match current {
        Lookup::Node(map) => map.get(segment).map(Lookup::from_value),
        _ => None,
    }
}

fn count_leaves(value: &Value) -> usize {
    match value {
        Value::String(_) => 1,
        Value::Object(map) => map.values().map(count_leaves).sum(),
        Value::Array(items) => items.iter().map(count_leaves).sum(),
        _ => 0,
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
