//! First-word adjustment entry point

use crate::textbuf::PooledBuffer;
use crate::words::verbalizer::to_infinitive;

/// What [`adjust_first_word`] should do to the start of a text run.
///
/// Options compose, e.g. lowercasing the first letter and converting the
/// first word to its infinitive form in one pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstWordOptions {
    /// Keep a single leading space when the text already had one.
    pub keep_leading_space: bool,
    /// Lowercase the first letter. Takes precedence over uppercasing when
    /// both are set.
    pub lowercase_first_letter: bool,
    /// Uppercase the first letter.
    pub uppercase_first_letter: bool,
    /// Convert the first word from third-person to base form.
    pub into_infinitive: bool,
}

impl FirstWordOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn keep_leading_space(mut self) -> Self {
        self.keep_leading_space = true;
        self
    }

    pub fn lowercase_first_letter(mut self) -> Self {
        self.lowercase_first_letter = true;
        self
    }

    pub fn uppercase_first_letter(mut self) -> Self {
        self.uppercase_first_letter = true;
        self
    }

    pub fn into_infinitive(mut self) -> Self {
        self.into_infinitive = true;
        self
    }
}

/// Adjust only the first word of `text` according to `options`.
///
/// Text whose first character opens a markup tag is returned unchanged;
/// rewriting must never produce output inside markup. Leading-space
/// normalization only fires when a leading space already existed, so text
/// that starts a new line flush-left is not misread as having a removable
/// space.
pub fn adjust_first_word(text: &str, options: FirstWordOptions) -> String {
    if text.starts_with('<') {
        return text.to_string();
    }

    let space_count = text.len() - text.trim_start_matches(' ').len();
    let body = &text[space_count..];

    let mut out = PooledBuffer::acquire();
    if space_count > 0 && options.keep_leading_space {
        out.push(' ');
    }

    let mut body = body.to_string();
    if options.lowercase_first_letter {
        change_first_letter(&mut body, |c| c.to_lowercase().collect());
    } else if options.uppercase_first_letter {
        change_first_letter(&mut body, |c| c.to_uppercase().collect());
    }

    if options.into_infinitive {
        let end = first_word_end(&body);
        let converted = to_infinitive(&body[..end]);
        body.replace_range(..end, &converted);
    }

    out.push_str(&body);
    out.finish()
}

/// Byte offset one past the first word.
///
/// The word is bounded by the first whitespace character or, absent
/// whitespace, by the next uppercase letter; compact symbol-like text such
/// as "GetsValue" treats the interior capital as a word boundary.
fn first_word_end(text: &str) -> usize {
    for (offset, ch) in text.char_indices() {
        if ch.is_whitespace() {
            return offset;
        }
        if offset > 0 && ch.is_uppercase() {
            return offset;
        }
    }
    text.len()
}

fn change_first_letter(text: &mut String, convert: impl Fn(char) -> String) {
    let Some(first) = text.chars().next() else {
        return;
    };
    if !first.is_alphabetic() {
        return;
    }
    let converted = convert(first);
    text.replace_range(..first.len_utf8(), &converted);
}
