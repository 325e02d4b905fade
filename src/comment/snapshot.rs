//! Comment snapshot - a normalized representation of a parsed tree
//!
//! A canonical, format-agnostic rendering of a comment tree suitable for
//! serialization (JSON for tooling, debug snapshots in tests). The snapshot
//! captures node types, labels, attributes and children, so serializers
//! never reimplement tree traversal.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::comment::element::{Element, Node, TextToken};
use crate::comment::parser::DocComment;

/// A snapshot of one tree node in a normalized, serializable form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentSnapshot {
    /// The kind of node ("element", "text", "line-break").
    pub node_type: String,

    /// Tag name for elements, literal text for text fragments.
    pub label: String,

    /// Attributes for element nodes; empty otherwise.
    pub attributes: HashMap<String, String>,

    /// Child nodes in document order.
    pub children: Vec<CommentSnapshot>,
}

impl CommentSnapshot {
    pub fn new(node_type: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            label: label.into(),
            attributes: HashMap::new(),
            children: Vec::new(),
        }
    }

    /// Snapshot an entire parsed comment from its root.
    pub fn from_comment(comment: &DocComment) -> Self {
        Self::from_element(comment.root())
    }

    pub fn from_element(element: &Element) -> Self {
        let mut snapshot = CommentSnapshot::new("element", element.name.clone());
        for attribute in &element.attributes {
            snapshot
                .attributes
                .insert(attribute.name.clone(), attribute.value.clone());
        }
        for node in &element.children {
            match node {
                Node::Element(child) => snapshot.children.push(Self::from_element(child)),
                Node::Text(run) => {
                    for token in &run.tokens {
                        snapshot.children.push(match token {
                            TextToken::Text(text) => CommentSnapshot::new("text", text.clone()),
                            TextToken::LineBreak => CommentSnapshot::new("line-break", ""),
                        });
                    }
                }
            }
        }
        snapshot
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
