//! Tolerant construction of the comment tree
//!
//! `DocComment::parse` turns raw comment text into a tree, or `None` on any
//! markup-level failure: a stray `<`, a mismatched or unterminated tag, a
//! tag whose internals do not decompose. Absence means "no comment
//! content"; it is never an error.
//!
//! All top-level content hangs off a synthetic root element, because
//! producers routinely supply fragments with several top-level sections and
//! no enclosing tag. Descendant queries never match the root itself, so the
//! synthetic wrapper cannot collide with a well-known section tag.

use serde::Serialize;

use crate::comment::element::{Element, Node, TextRun, TextToken};
use crate::comment::lexer::{close_tag_name, decode_entities, decompose_open_tag, tokenize, MarkupToken};

/// Tag name of the synthetic root element.
pub const ROOT_TAG: &str = "doc";

/// The root of a parsed documentation comment for one declaration.
///
/// Constructed on demand from raw comment text and discarded after the
/// caller's query or edit completes; cleaning and rewriting always produce
/// new values, never mutate a parsed tree in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocComment {
    root: Element,
}

impl DocComment {
    /// Parse raw comment text, yielding `None` for empty, whitespace-only
    /// or malformed input.
    pub fn parse(raw: &str) -> Option<DocComment> {
        if raw.trim().is_empty() {
            return None;
        }
        let tokens = tokenize(raw)?;
        let root = build_tree(tokens)?;
        Some(DocComment { root })
    }

    /// The synthetic root element wrapping all top-level sections.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Every element with the given tag, in document order. Empty when
    /// nothing matches; never an error.
    pub fn descendants_by_tag<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        self.root.descendants_by_tag(tag)
    }
}

/// Build the element tree from raw tokens. `None` on mismatched or
/// unterminated tags and on stray angle brackets.
fn build_tree(tokens: Vec<MarkupToken>) -> Option<Element> {
    // The stack holds every currently open element, root at the bottom.
    let mut stack: Vec<Element> = vec![Element::new(ROOT_TAG)];

    for token in tokens {
        match token {
            MarkupToken::Text(text) => {
                push_text_token(stack.last_mut()?, TextToken::Text(decode_entities(&text)));
            }
            MarkupToken::Newline => {
                push_text_token(stack.last_mut()?, TextToken::LineBreak);
            }
            MarkupToken::OpenTag(slice) => {
                let header = decompose_open_tag(&slice)?;
                let mut element = Element::new(header.name);
                element.attributes = header.attributes;
                if header.self_closing {
                    stack.last_mut()?.children.push(Node::Element(element));
                } else {
                    stack.push(element);
                }
            }
            MarkupToken::CloseTag(slice) => {
                let name = close_tag_name(&slice)?;
                // Closing the root or a tag that is not open is malformed.
                if stack.len() < 2 || stack.last()?.name != name {
                    return None;
                }
                let closed = stack.pop()?;
                stack.last_mut()?.children.push(Node::Element(closed));
            }
            MarkupToken::StrayAngle => return None,
        }
    }

    // Anything still open beyond the root is unterminated.
    if stack.len() != 1 {
        return None;
    }
    stack.pop()
}

/// Append a text token to the element's trailing text run, starting a new
/// run when the last child is an element (or there is no child yet).
fn push_text_token(parent: &mut Element, token: TextToken) {
    if let Some(Node::Text(run)) = parent.children.last_mut() {
        run.tokens.push(token);
        return;
    }
    parent.children.push(Node::Text(TextRun::new(vec![token])));
}
