//! Element flattening and text cleaning

use crate::comment::element::{Element, Node, TextToken};
use crate::comment::tags;
use crate::textbuf::{collapse_whitespace, replace_all_any, trim, PooledBuffer};

/// Paragraph markers stripped from flat text. Parsed trees never produce
/// these (a `para` element flattens transparently), but cleaning also runs
/// over raw strings that may still carry them.
const PARA_MARKERS: &[&str] = &["<para>", "</para>", "<para/>"];

/// Clean one matched section element into flat plain text.
///
/// `code` descendants are excised wholesale - their entire subtree, not
/// just the tag wrapper. Everything else flattens transparently: `para`,
/// `c`, `see` and any other nested element contribute their text content
/// in document order.
pub fn clean_element(element: &Element) -> String {
    let mut buffer = PooledBuffer::acquire();
    flatten_into(element, &mut buffer);
    clean_buffer(&mut buffer);
    trim(&buffer).to_string()
}

/// Clean an already-flat string: strip paragraph markers, collapse
/// whitespace, trim. Idempotent - cleaning a cleaned string is a no-op.
pub fn clean_text(text: &str) -> String {
    let mut buffer = PooledBuffer::acquire_with(text);
    clean_buffer(&mut buffer);
    trim(&buffer).to_string()
}

/// The shared buffer stage of the pipeline.
fn clean_buffer(buffer: &mut String) {
    replace_all_any(buffer, PARA_MARKERS, " ");
    collapse_whitespace(buffer);
}

/// Flatten element content into `buffer`, skipping `code` subtrees.
///
/// A line-break token contributes a separating space: words on adjacent
/// source lines must not fuse, and whitespace collapse folds the extra
/// space away.
fn flatten_into(element: &Element, buffer: &mut String) {
    for node in &element.children {
        match node {
            Node::Text(run) => {
                for token in &run.tokens {
                    match token {
                        TextToken::Text(text) => buffer.push_str(text),
                        TextToken::LineBreak => buffer.push(' '),
                    }
                }
            }
            Node::Element(child) => {
                if child.name == tags::CODE {
                    continue;
                }
                // A paragraph boundary is whitespace, exactly as the string
                // pipeline turns each para marker into a space.
                if child.name == tags::PARA {
                    buffer.push(' ');
                }
                flatten_into(child, buffer);
                if child.name == tags::PARA {
                    buffer.push(' ');
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::DocComment;

    fn section(raw: &str, tag: &str) -> String {
        let comment = DocComment::parse(raw).expect("parses");
        clean_element(comment.descendants_by_tag(tag)[0])
    }

    #[test]
    fn test_clean_flattens_inline_elements() {
        assert_eq!(
            section("<summary>Gets <c>true</c> or <c>false</c>.</summary>", "summary"),
            "Gets true or false."
        );
    }

    #[test]
    fn test_clean_excises_code_blocks() {
        assert_eq!(
            section(
                "<example>Call it: <code>let x = f();\nuse(x);</code> done.</example>",
                "example"
            ),
            "Call it: done."
        );
    }

    #[test]
    fn test_clean_para_is_transparent() {
        assert_eq!(
            section("<summary><para>One.</para><para>Two.</para></summary>", "summary"),
            "One. Two."
        );
        assert_eq!(section("<summary>X</summary>", "summary"), section("<summary><para>X</para></summary>", "summary"));
    }

    #[test]
    fn test_clean_collapses_line_structure() {
        assert_eq!(
            section("<summary>\n  Gets the\n  value.\n</summary>", "summary"),
            "Gets the value."
        );
    }

    #[test]
    fn test_clean_whitespace_only_section_is_empty() {
        assert_eq!(section("<summary>   \n   </summary>", "summary"), "");
    }

    #[test]
    fn test_clean_text_idempotent() {
        let once = clean_text("  a  <para> b </para>  c  ");
        assert_eq!(clean_text(&once), once);
    }

    #[test]
    fn test_clean_text_strips_para_markers() {
        assert_eq!(clean_text("<para>X</para>"), clean_text("X"));
    }
}
