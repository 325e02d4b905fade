//! Tree node definitions for parsed documentation comments

use serde::Serialize;
use std::fmt;

/// A name/value attribute on an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One token inside a [`TextRun`].
///
/// Line breaks are structural markers, not just `\n` characters: the source
/// markup decorates every physical line, and that line structure must be
/// strippable without corrupting the remaining text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum TextToken {
    Text(String),
    LineBreak,
}

impl TextToken {
    pub fn is_line_break(&self) -> bool {
        matches!(self, TextToken::LineBreak)
    }

    /// The literal text of this token; a line break has none.
    pub fn literal(&self) -> Option<&str> {
        match self {
            TextToken::Text(text) => Some(text),
            TextToken::LineBreak => None,
        }
    }

    /// True for line breaks and for text tokens with no non-whitespace
    /// content.
    pub fn is_whitespace(&self) -> bool {
        match self {
            TextToken::Text(text) => text.trim().is_empty(),
            TextToken::LineBreak => true,
        }
    }
}

/// An ordered sequence of text tokens.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct TextRun {
    pub tokens: Vec<TextToken>,
}

impl TextRun {
    pub fn new(tokens: Vec<TextToken>) -> Self {
        Self { tokens }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            tokens: vec![TextToken::Text(text.into())],
        }
    }

    /// Concatenated literal text; line breaks contribute a single space so
    /// that words on adjacent lines stay separated.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for token in &self.tokens {
            match token {
                TextToken::Text(text) => out.push_str(text),
                TextToken::LineBreak => out.push(' '),
            }
        }
        out
    }

    /// True when the run carries no non-whitespace text.
    pub fn is_whitespace_only(&self) -> bool {
        self.tokens.iter().all(TextToken::is_whitespace)
    }
}

/// Any node that can appear in element content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Node {
    Text(TextRun),
    Element(Element),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(TextRun::from_text(text))
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Node::Text(_))
    }

    pub fn is_element(&self) -> bool {
        matches!(self, Node::Element(_))
    }

    pub fn as_text(&self) -> Option<&TextRun> {
        if let Node::Text(run) = self {
            Some(run)
        } else {
            None
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextRun> {
        if let Node::Text(run) = self {
            Some(run)
        } else {
            None
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        if let Node::Element(element) = self {
            Some(element)
        } else {
            None
        }
    }

    pub fn as_element_mut(&mut self) -> Option<&mut Element> {
        if let Node::Element(element) = self {
            Some(element)
        } else {
            None
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text(run) => write!(f, "Text('{}')", run.text()),
            Node::Element(element) => write!(f, "{}", element),
        }
    }
}

/// A tagged element: name, ordered attributes, ordered children.
///
/// Tag names are case-sensitive and matched exactly. An element with zero
/// children is a real, present element; absence of a comment is modelled as
/// `Option::None` at the [`DocComment`](crate::comment::DocComment) level,
/// never as a placeholder element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Element {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push(Attribute::new(name, value));
        self
    }

    pub fn with_child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    pub fn with_text(self, text: impl Into<String>) -> Self {
        self.with_child(Node::text(text))
    }

    /// Value of the first attribute with the given name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.name == name)
            .map(|attribute| attribute.value.as_str())
    }

    /// Every descendant element with the given tag, in document order.
    ///
    /// The element itself is not considered, only content below it.
    pub fn descendants_by_tag<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_by_tag(tag, &mut found);
        found
    }

    fn collect_by_tag<'a>(&'a self, tag: &str, found: &mut Vec<&'a Element>) {
        for node in &self.children {
            if let Node::Element(element) = node {
                if element.name == tag {
                    found.push(element);
                }
                element.collect_by_tag(tag, found);
            }
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Element('{}', {} attrs, {} children)",
            self.name,
            self.attributes.len(),
            self.children.len()
        )
    }
}
