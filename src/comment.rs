//! Documentation-comment tree model
//!
//! A parsed doc comment is a tagged tree: elements carry a tag name, an
//! ordered set of attributes and ordered child content; content is either a
//! nested element or a text run made of literal text fragments and
//! structural line-break markers.
//!
//! Parsing is tolerant by contract. The raw comment text is wrapped in a
//! synthetic root (producers routinely hand over fragments with several
//! top-level sections), and any markup-level failure yields `None` rather
//! than an error: malformed documentation is expected input, and callers
//! must treat it as "no comment content", never as a crash.
//!
//! ## Modules
//!
//! - `element` - the tree node types (Element, Node, TextRun, tokens)
//! - `lexer` - logos tokenization of the markup surface
//! - `parser` - tolerant tree construction and descendant queries
//! - `tags` - well-known section tag and attribute names
//! - `snapshot` - normalized serializable rendering of a parsed tree

pub mod element;
pub mod lexer;
pub mod parser;
pub mod snapshot;
pub mod tags;

pub use element::{Attribute, Element, Node, TextRun, TextToken};
pub use parser::DocComment;
pub use snapshot::CommentSnapshot;
