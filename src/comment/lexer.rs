//! Tokenization of the documentation-markup surface
//!
//! Raw comment text is tokenized with logos into whole-tag units, newlines
//! and text spans; tag internals (name and attributes) are decomposed
//! afterwards with lazily compiled patterns. This keeps the logos grammar
//! regular and isolates all tag-shape validation in one place.
//!
//! Tokenization itself never fails on comment content: a `<` that does not
//! open a well-formed tag becomes a `StrayAngle` token, and the parser
//! treats it as a markup-level failure (absent comment), not a panic.

use logos::Logos;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::comment::element::Attribute;
use crate::textbuf::{replace_all_pairs, PooledBuffer};

/// Raw markup tokens. Tags are lexed as whole `<...>` units.
#[derive(Logos, Debug, Clone, PartialEq, Eq)]
pub enum MarkupToken {
    /// A closing tag, e.g. `</summary>`.
    #[regex(r"</[^<>]*>", |lex| lex.slice().to_owned())]
    CloseTag(String),

    /// An opening or self-closing tag, e.g. `<param name="x">` or `<see/>`.
    #[regex(r"<[A-Za-z][^<>]*>", |lex| lex.slice().to_owned())]
    OpenTag(String),

    /// A physical line break. Structural: one marker per source line.
    #[regex(r"\r\n|\n|\r")]
    Newline,

    /// A literal text span between markup.
    #[regex(r"[^<\r\n]+", |lex| lex.slice().to_owned())]
    Text(String),

    /// A `<` that opens no well-formed tag. Always a markup-level failure.
    #[token("<")]
    StrayAngle,
}

/// Tokenize raw comment text.
///
/// Returns `None` only when the lexer hits input no token covers, which is
/// itself a markup-level failure.
pub fn tokenize(raw: &str) -> Option<Vec<MarkupToken>> {
    let mut lexer = MarkupToken::lexer(raw);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        match result {
            Ok(token) => tokens.push(token),
            Err(()) => return None,
        }
    }
    Some(tokens)
}

/// A decomposed opening tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagHeader {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub self_closing: bool,
}

static TAG_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^<\s*([A-Za-z][A-Za-z0-9]*)").expect("tag name pattern"));

static TAG_ATTRIBUTE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z_][A-Za-z0-9:._-]*)\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
        .expect("tag attribute pattern")
});

static CLOSE_TAG_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^</\s*([A-Za-z][A-Za-z0-9]*)\s*>$").expect("close tag pattern"));

/// Decompose an `OpenTag` slice into name, attributes and self-closing flag.
///
/// Returns `None` when the tag carries anything that is not a name followed
/// by well-formed attributes - that is a markup-level failure.
pub fn decompose_open_tag(slice: &str) -> Option<TagHeader> {
    let captures = TAG_NAME.captures(slice)?;
    let name = captures.get(1)?.as_str().to_string();

    let self_closing = slice.ends_with("/>");
    let body_end = slice.len() - if self_closing { 2 } else { 1 };
    let body = &slice[captures.get(0)?.end()..body_end];

    let mut attributes = Vec::new();
    for attribute in TAG_ATTRIBUTE.captures_iter(body) {
        let attr_name = attribute.get(1).map(|m| m.as_str()).unwrap_or_default();
        let value = attribute
            .get(2)
            .or_else(|| attribute.get(3))
            .map(|m| m.as_str())
            .unwrap_or_default();
        attributes.push(Attribute::new(attr_name, decode_entities(value)));
    }

    let residue = TAG_ATTRIBUTE.replace_all(body, "");
    if !residue.trim().is_empty() {
        return None;
    }

    Some(TagHeader {
        name,
        attributes,
        self_closing,
    })
}

/// Extract the tag name from a `CloseTag` slice, or `None` when malformed.
pub fn close_tag_name(slice: &str) -> Option<&str> {
    CLOSE_TAG_NAME
        .captures(slice)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

/// Decode the five standard character entities. Unknown entities pass
/// through verbatim; malformed documentation is expected input.
pub fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }
    let mut buffer = PooledBuffer::acquire_with(text);
    replace_all_pairs(
        &mut buffer,
        &[
            ("&lt;", "<"),
            ("&gt;", ">"),
            ("&quot;", "\""),
            ("&apos;", "'"),
            ("&amp;", "&"),
        ],
    );
    buffer.finish()
}
