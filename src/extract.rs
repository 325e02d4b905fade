//! Extraction and cleaning of documentation sections
//!
//! Given raw comment text and a section tag, this module produces cleaned
//! plain text: `code` blocks excised wholesale, `para` wrappers unwrapped,
//! whitespace collapsed, duplicates removed by rendered value. The pipeline
//! per requested tag:
//! 1. Parse (tolerantly) and gather every matching element, filtered by a
//!    discriminating attribute for `param` and `exception`
//! 2. Excise every descendant `code` element, subtree and all
//! 3. Flatten the remaining content into a text buffer
//! 4. Run the text-builder pipeline: strip stray para markers, collapse
//!    whitespace, trim
//! 5. Deduplicate by cleaned value, preserving encounter order
//!
//! Deduplication happens on the cleaned string, never on the raw tree: two
//! sections whose source markup differs only in whitespace must collapse to
//! one result. An empty cleaned string is a valid, distinct result - the
//! caller decides whether it counts as missing documentation.

pub mod clean;
pub mod sections;

pub use clean::{clean_element, clean_text};
pub use sections::{
    documented_exceptions, extract_examples, extract_exception_comment,
    extract_overloads_summary, extract_parameter_comment, extract_remarks, extract_returns,
    extract_section, extract_summaries, extract_value, list_documented_exception_types, sole,
};
