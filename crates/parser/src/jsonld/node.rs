//! Typed view of an expanded JSON-LD document
//!
//! [`Node`] makes the "key absent vs. present-but-empty" distinction
//! explicit and centralizes the first-element accessors the parsers use,
//! instead of ad hoc nested lookups into raw JSON.

use std::collections::BTreeMap;

use serde_json::Value;

/// A single statement value inside an expanded document.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    /// A literal, kept as it appeared under `"@value"`.
    Value(Value),
    /// A node object or an `{"@id": …}` reference.
    Node(Node),
}

impl Term {
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Term::Node(node) => Some(node),
            Term::Value(_) => None,
        }
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Term::Value(value) => Some(value),
            Term::Node(_) => None,
        }
    }
}

/// An expanded node object.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    /// `@id`, when present.
    pub id: Option<String>,
    /// `@type` IRIs, empty when absent.
    pub types: Vec<String>,
    /// All remaining properties, keyed by absolute IRI.
    pub properties: BTreeMap<String, Vec<Term>>,
}

impl Node {
    /// A node that is a bare IRI reference.
    pub fn reference(iri: impl Into<String>) -> Self {
        Node {
            id: Some(iri.into()),
            ..Node::default()
        }
    }

    /// All terms attached to `iri`; empty when the key is absent.
    pub fn get(&self, iri: &str) -> &[Term] {
        self.properties.get(iri).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn first(&self, iri: &str) -> Option<&Term> {
        self.get(iri).first()
    }

    /// The first literal attached to `iri`.
    pub fn first_value(&self, iri: &str) -> Option<&Value> {
        self.get(iri).iter().find_map(Term::as_value)
    }

    /// The first literal attached to `iri`, as a string.
    pub fn first_str(&self, iri: &str) -> Option<&str> {
        self.first_value(iri).and_then(Value::as_str)
    }

    /// The first literal attached to `iri`, as a boolean.
    pub fn first_bool(&self, iri: &str) -> Option<bool> {
        self.first_value(iri).and_then(Value::as_bool)
    }

    /// The first literal attached to `iri`, as an unsigned integer.
    pub fn first_u64(&self, iri: &str) -> Option<u64> {
        self.first_value(iri).and_then(Value::as_u64)
    }

    /// The `@id` of the first node attached to `iri`.
    pub fn first_id(&self, iri: &str) -> Option<&str> {
        self.nodes(iri).next().and_then(|node| node.id.as_deref())
    }

    /// All node objects attached to `iri`.
    pub fn nodes<'a>(&'a self, iri: &str) -> impl Iterator<Item = &'a Node> {
        self.get(iri).iter().filter_map(Term::as_node)
    }

    pub fn has_type(&self, iri: &str) -> bool {
        self.types.iter().any(|t| t == iri)
    }
}
