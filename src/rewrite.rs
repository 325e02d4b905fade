//! Structural rewrite operations over content-node sequences
//!
//! Auto-fix producers edit comment content by inserting, stripping or
//! replacing text fragments in a node sequence. Every operation takes the
//! sequence by value and returns a new, well-formed one, in keeping with
//! the one-way data flow of the rest of the crate:
//!
//! - removing text that leaves a text run with no non-whitespace tokens
//!   removes the run entirely, never leaving an empty husk
//! - inserting leading text in front of an element node inserts a fresh
//!   text run rather than mutating the element
//! - trailing removal scans tokens from the end backward, skipping
//!   structural line-break tokens, and stops at the first non-whitespace
//!   token it can trim
//! - tokens are never split or merged, except that removing a token takes
//!   its adjacent line-break token with it so no orphaned blank line
//!   remains
//!
//! Phrase arguments must be non-empty; an empty phrase is a programmer
//! error and asserts immediately rather than being silently tolerated.

use crate::comment::element::{Node, TextToken};
use crate::textbuf::{replace_all_pairs, PooledBuffer};

/// Insert `text` at the very start of the sequence.
///
/// When the sequence starts with a text run the text becomes its first
/// token; otherwise a new text run is inserted before the first node.
pub fn insert_leading_text(mut nodes: Vec<Node>, text: &str) -> Vec<Node> {
    assert!(!text.is_empty(), "inserted text must be non-empty");
    match nodes.first_mut() {
        Some(Node::Text(run)) => run.tokens.insert(0, TextToken::Text(text.to_string())),
        _ => nodes.insert(0, Node::text(text)),
    }
    nodes
}

/// Remove `phrase` from the start of the sequence's leading text.
///
/// The leading text is the first non-whitespace text token of the first
/// text run; leading whitespace inside that token survives, only the
/// matched phrase is removed. A no-op when the phrase is not there.
pub fn remove_leading_phrase(mut nodes: Vec<Node>, phrase: &str) -> Vec<Node> {
    assert!(!phrase.is_empty(), "phrase must be non-empty");
    edit_leading_token(&mut nodes, |text| {
        let whitespace_len = text.len() - text.trim_start().len();
        let core = &text[whitespace_len..];
        core.strip_prefix(phrase)
            .map(|rest| format!("{}{}", &text[..whitespace_len], rest))
    });
    nodes
}

/// Remove every character in `chars` from the start of the sequence's
/// leading text (after any leading whitespace).
pub fn remove_leading_chars(mut nodes: Vec<Node>, chars: &[char]) -> Vec<Node> {
    assert!(!chars.is_empty(), "character set must be non-empty");
    edit_leading_token(&mut nodes, |text| {
        let whitespace_len = text.len() - text.trim_start().len();
        let core = &text[whitespace_len..];
        let stripped = core.trim_start_matches(|c| chars.contains(&c));
        if stripped.len() == core.len() {
            None
        } else {
            Some(format!("{}{}", &text[..whitespace_len], stripped))
        }
    });
    nodes
}

/// Remove `phrase` from the end of the sequence's trailing text.
///
/// Scans backward from the end, skipping line-break and whitespace-only
/// tokens; only the first token that can be trimmed is considered, and
/// never more than the matched suffix is removed from it.
pub fn remove_trailing_phrase(mut nodes: Vec<Node>, phrase: &str) -> Vec<Node> {
    assert!(!phrase.is_empty(), "phrase must be non-empty");
    edit_trailing_token(&mut nodes, |text| {
        text.trim_end().strip_suffix(phrase).map(str::to_string)
    });
    nodes
}

/// Remove every character in `chars` from the end of the sequence's
/// trailing text.
pub fn remove_trailing_chars(mut nodes: Vec<Node>, chars: &[char]) -> Vec<Node> {
    assert!(!chars.is_empty(), "character set must be non-empty");
    edit_trailing_token(&mut nodes, |text| {
        let trimmed = text.trim_end();
        let stripped = trimmed.trim_end_matches(|c| chars.contains(&c));
        if stripped.len() == trimmed.len() {
            None
        } else {
            Some(stripped.to_string())
        }
    });
    nodes
}

/// Substring-replace every (phrase, replacement) pair in every text token,
/// recursing into nested elements. Tokens are edited in place, never split
/// or merged; tokens emptied by a replacement are dropped, and a text run
/// left without non-whitespace tokens is dropped with them.
pub fn replace_phrases(mut nodes: Vec<Node>, pairs: &[(&str, &str)]) -> Vec<Node> {
    replace_in_nodes(&mut nodes, pairs);
    nodes
}

fn replace_in_nodes(nodes: &mut Vec<Node>, pairs: &[(&str, &str)]) {
    let mut index = 0;
    while index < nodes.len() {
        let remove_run = match &mut nodes[index] {
            Node::Text(run) => {
                let mut changed = false;
                for token in &mut run.tokens {
                    if let TextToken::Text(text) = token {
                        let mut buffer = PooledBuffer::acquire_with(text);
                        if replace_all_pairs(&mut buffer, pairs) > 0 {
                            *text = buffer.finish();
                            changed = true;
                        }
                    }
                }
                if changed {
                    run.tokens
                        .retain(|token| token.literal().map_or(true, |text| !text.is_empty()));
                    run.is_whitespace_only()
                } else {
                    false
                }
            }
            Node::Element(element) => {
                replace_in_nodes(&mut element.children, pairs);
                false
            }
        };
        if remove_run {
            nodes.remove(index);
        } else {
            index += 1;
        }
    }
}

/// Apply `edit` to the first non-whitespace text token of the first text
/// run. `edit` returns the token's new text, or `None` for a no-op.
fn edit_leading_token(nodes: &mut Vec<Node>, edit: impl Fn(&str) -> Option<String>) {
    let Some(run_index) = nodes.iter().position(Node::is_text) else {
        return;
    };
    // Only a run at the very start holds leading text.
    if run_index != 0 {
        return;
    }
    let Some(Node::Text(run)) = nodes.first_mut() else {
        return;
    };

    let Some(token_index) = run.tokens.iter().position(|token| !token.is_whitespace()) else {
        return;
    };
    let TextToken::Text(text) = &run.tokens[token_index] else {
        return;
    };
    let Some(new_text) = edit(text) else {
        return;
    };

    if new_text.trim().is_empty() {
        run.tokens.remove(token_index);
        // Take the line break the token sat on with it.
        if matches!(run.tokens.get(token_index), Some(TextToken::LineBreak)) {
            run.tokens.remove(token_index);
        }
    } else {
        run.tokens[token_index] = TextToken::Text(new_text);
    }

    if run.is_whitespace_only() {
        nodes.remove(0);
    }
}

/// Apply `edit` to the last non-whitespace text token of the trailing text
/// run, scanning backward over line breaks and whitespace-only tokens.
fn edit_trailing_token(nodes: &mut Vec<Node>, edit: impl Fn(&str) -> Option<String>) {
    let Some(Node::Text(run)) = nodes.last_mut() else {
        return;
    };

    let Some(token_index) = run.tokens.iter().rposition(|token| !token.is_whitespace()) else {
        return;
    };
    let TextToken::Text(text) = &run.tokens[token_index] else {
        return;
    };
    let Some(new_text) = edit(text) else {
        return;
    };

    if new_text.trim().is_empty() {
        run.tokens.remove(token_index);
        if token_index > 0 && matches!(run.tokens.get(token_index - 1), Some(TextToken::LineBreak))
        {
            run.tokens.remove(token_index - 1);
        }
    } else {
        run.tokens[token_index] = TextToken::Text(new_text);
    }

    if run.is_whitespace_only() {
        nodes.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::element::{Element, TextRun};

    fn run(tokens: Vec<TextToken>) -> Node {
        Node::Text(TextRun::new(tokens))
    }

    fn text(value: &str) -> TextToken {
        TextToken::Text(value.to_string())
    }

    #[test]
    fn test_insert_leading_text_into_run() {
        let nodes = vec![Node::text("world")];
        let edited = insert_leading_text(nodes, "hello ");
        let first = edited[0].as_text().expect("text run");
        assert_eq!(first.tokens, vec![text("hello "), text("world")]);
    }

    #[test]
    fn test_insert_leading_text_before_element() {
        let nodes = vec![Node::Element(Element::new("see"))];
        let edited = insert_leading_text(nodes, "see ");
        assert_eq!(edited.len(), 2);
        assert!(edited[0].is_text());
        assert!(edited[1].is_element());
    }

    #[test]
    fn test_insert_into_empty_sequence() {
        let edited = insert_leading_text(Vec::new(), "only");
        assert_eq!(edited, vec![Node::text("only")]);
    }

    #[test]
    fn test_remove_leading_phrase() {
        let nodes = vec![Node::text("Gets the value")];
        let edited = remove_leading_phrase(nodes, "Gets ");
        assert_eq!(edited, vec![Node::text("the value")]);
    }

    #[test]
    fn test_remove_leading_phrase_keeps_leading_whitespace() {
        let nodes = vec![Node::text("  Gets the value")];
        let edited = remove_leading_phrase(nodes, "Gets ");
        assert_eq!(edited, vec![Node::text("  the value")]);
    }

    #[test]
    fn test_remove_leading_phrase_missing_is_noop() {
        let nodes = vec![Node::text("Sets the value")];
        let edited = remove_leading_phrase(nodes.clone(), "Gets ");
        assert_eq!(edited, nodes);
    }

    #[test]
    fn test_remove_leading_phrase_drops_emptied_run() {
        let nodes = vec![run(vec![text("Gets")]), Node::Element(Element::new("see"))];
        let edited = remove_leading_phrase(nodes, "Gets");
        assert_eq!(edited.len(), 1);
        assert!(edited[0].is_element());
    }

    #[test]
    fn test_remove_leading_phrase_takes_orphaned_break() {
        let nodes = vec![run(vec![text("Gets"), TextToken::LineBreak, text("value")])];
        let edited = remove_leading_phrase(nodes, "Gets");
        let first = edited[0].as_text().expect("text run");
        assert_eq!(first.tokens, vec![text("value")]);
    }

    #[test]
    fn test_remove_leading_chars() {
        let nodes = vec![Node::text("-- dashed")];
        let edited = remove_leading_chars(nodes, &['-']);
        assert_eq!(edited, vec![Node::text(" dashed")]);
    }

    #[test]
    fn test_remove_trailing_phrase() {
        let nodes = vec![Node::text("value.")];
        let edited = remove_trailing_phrase(nodes, ".");
        assert_eq!(edited, vec![Node::text("value")]);
    }

    #[test]
    fn test_remove_trailing_phrase_skips_line_breaks() {
        let nodes = vec![run(vec![
            text("value."),
            TextToken::LineBreak,
            text("   "),
            TextToken::LineBreak,
        ])];
        let edited = remove_trailing_phrase(nodes, ".");
        let first = edited[0].as_text().expect("text run");
        assert_eq!(
            first.tokens,
            vec![
                text("value"),
                TextToken::LineBreak,
                text("   "),
                TextToken::LineBreak,
            ]
        );
    }

    #[test]
    fn test_remove_trailing_phrase_never_removes_more_than_suffix() {
        let nodes = vec![Node::text("a.b.")];
        let edited = remove_trailing_phrase(nodes, ".");
        assert_eq!(edited, vec![Node::text("a.b")]);
    }

    #[test]
    fn test_remove_trailing_emptied_run_removed_with_break() {
        let nodes = vec![run(vec![text("keep"), TextToken::LineBreak, text("drop")])];
        let edited = remove_trailing_phrase(nodes, "drop");
        let first = edited[0].as_text().expect("text run");
        assert_eq!(first.tokens, vec![text("keep")]);
    }

    #[test]
    fn test_remove_trailing_ends_with_element_is_noop() {
        let nodes = vec![Node::text("text."), Node::Element(Element::new("see"))];
        let edited = remove_trailing_phrase(nodes.clone(), ".");
        assert_eq!(edited, nodes);
    }

    #[test]
    fn test_replace_phrases_across_tokens_and_elements() {
        let nodes = vec![
            Node::text("Gets a value"),
            Node::Element(Element::new("remarks").with_text("also Gets things")),
        ];
        let edited = replace_phrases(nodes, &[("Gets", "Returns")]);
        assert_eq!(edited[0], Node::text("Returns a value"));
        let element = edited[1].as_element().expect("element");
        assert_eq!(element.children, vec![Node::text("also Returns things")]);
    }

    #[test]
    fn test_replace_phrases_drops_emptied_run() {
        let nodes = vec![Node::text("noise"), Node::Element(Element::new("see"))];
        let edited = replace_phrases(nodes, &[("noise", "")]);
        assert_eq!(edited.len(), 1);
        assert!(edited[0].is_element());
    }

    #[test]
    #[should_panic(expected = "phrase must be non-empty")]
    fn test_empty_phrase_asserts() {
        remove_leading_phrase(vec![Node::text("x")], "");
    }
}
