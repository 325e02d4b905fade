//! # doctext
//!
//! Extraction, cleaning and rewriting of structured documentation comments.
//!
//! The crate turns the raw markup text attached to a source declaration
//! into either cleaned plain text (read side: policy rules asking "what
//! does the summary say") or an edited content-node sequence (write side:
//! auto-fixers rewriting a phrase). Data flows one direction:
//!
//! raw text -> [`comment`] (tolerant parse) -> [`extract`] (clean) or
//! [`rewrite`] (edit), with [`textbuf`] and [`words`] as shared primitives.
//!
//! Everything is purely functional over immutable input: operations take a
//! tree or buffer and produce a new value. The only retained state is a
//! thread-local buffer pool that recycles allocation capacity, so the crate
//! is safe to call concurrently across independent comments.
//!
//! Malformed markup is expected input, not an error: parsing yields
//! "absent" and every accessor yields an empty result on absence. Nothing
//! in this crate raises for data-quality problems.

pub mod comment;
pub mod extract;
pub mod rewrite;
pub mod textbuf;
pub mod words;

// Re-export the core surface at crate root
pub use comment::{Attribute, CommentSnapshot, DocComment, Element, Node, TextRun, TextToken};
pub use extract::{
    clean_element, clean_text, documented_exceptions, extract_examples,
    extract_exception_comment, extract_overloads_summary, extract_parameter_comment,
    extract_remarks, extract_returns, extract_summaries, extract_value,
    list_documented_exception_types,
};
pub use words::{adjust_first_word, to_infinitive, FirstWordOptions};
