//! Predicate-based trimming and whitespace collapsing
//!
//! The trim functions return subslices of the input, so callers pay for an
//! allocation only when they choose to keep the result. `collapse_whitespace`
//! rewrites a buffer so every run of whitespace (spaces, tabs, line breaks)
//! becomes a single plain space; it does not trim the ends, leaving that to
//! the trim functions so the two stages stay independently usable.

use super::pool::PooledBuffer;

/// Trim leading and trailing whitespace, returning a subslice.
pub fn trim(text: &str) -> &str {
    trim_end(trim_start(text))
}

/// Trim leading whitespace, returning a subslice.
pub fn trim_start(text: &str) -> &str {
    text.trim_start_matches(char::is_whitespace)
}

/// Trim trailing whitespace, returning a subslice.
pub fn trim_end(text: &str) -> &str {
    text.trim_end_matches(char::is_whitespace)
}

/// Collapse every whitespace run in `buffer` into a single space, in place.
///
/// "Whitespace" follows `char::is_whitespace`, so line breaks and tabs fold
/// into spaces as well. Leading and trailing runs collapse to one space each
/// rather than disappearing; pair with [`trim`] to remove them.
pub fn collapse_whitespace(buffer: &mut String) {
    let needs_collapse =
        buffer.contains("  ") || buffer.chars().any(|c| c.is_whitespace() && c != ' ');
    if !needs_collapse {
        return;
    }

    let mut out = PooledBuffer::acquire();
    let mut previous_was_whitespace = false;
    for ch in buffer.chars() {
        if ch.is_whitespace() {
            if !previous_was_whitespace {
                out.push(' ');
            }
            previous_was_whitespace = true;
        } else {
            out.push(ch);
            previous_was_whitespace = false;
        }
    }

    buffer.clear();
    buffer.push_str(&out);
}
