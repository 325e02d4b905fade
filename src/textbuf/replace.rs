//! Multi-pattern in-place replacement with a quick-compare pre-check
//!
//! Cleaning applies tens of fixed marker phrases to every comment in a
//! codebase, and almost none of them occur in any given buffer. The
//! quick-compare pre-check rejects those attempts by comparing only the
//! boundary bytes of each candidate window, so a miss costs O(window)
//! byte comparisons instead of a full substring scan.
//!
//! The pre-check is allowed to pass a pair through to the real replace that
//! turns out not to match (false positive); it must never reject a pair
//! where a real match exists.

/// Patterns at or below this length skip the pre-check; the boundary scan
/// costs more than just attempting the replace.
const QUICK_COMPARE_MIN_LEN: usize = 4;

/// Quick-compare pre-check: can `pattern` possibly occur in `buffer`?
///
/// Byte-level boundary comparison. A `true` result is a hint, not a match;
/// a `false` result is definitive.
pub fn can_contain(buffer: &str, pattern: &str) -> bool {
    let b = buffer.len();
    let p = pattern.len();

    if p == 0 || p > b {
        return false;
    }

    let buf = buffer.as_bytes();
    let pat = pattern.as_bytes();

    if p == b {
        return buf[0] == pat[0] && buf[b - 1] == pat[p - 1];
    }

    if p <= QUICK_COMPARE_MIN_LEN {
        // Not worth scanning for very short patterns.
        return true;
    }

    let (first, last) = (pat[0], pat[p - 1]);
    (0..=b - p).any(|offset| buf[offset] == first && buf[offset + p - 1] == last)
}

/// Replace every occurrence of `pattern` in `buffer` with `replacement`,
/// in place. Returns the number of replacements performed.
///
/// An empty pattern and a missing match are both no-ops; nothing here
/// raises.
pub fn replace_all(buffer: &mut String, pattern: &str, replacement: &str) -> usize {
    if pattern.is_empty() || !can_contain(buffer, pattern) {
        return 0;
    }

    let mut count = 0;
    let mut search_from = 0;
    while let Some(found) = buffer[search_from..].find(pattern) {
        let start = search_from + found;
        buffer.replace_range(start..start + pattern.len(), replacement);
        // Resume after the inserted text so a replacement containing the
        // pattern cannot loop.
        search_from = start + replacement.len();
        count += 1;
    }
    count
}

/// Replace every occurrence of any pattern in `patterns` with the single
/// `replacement`. Empty patterns are skipped.
pub fn replace_all_any(buffer: &mut String, patterns: &[&str], replacement: &str) -> usize {
    patterns
        .iter()
        .map(|pattern| replace_all(buffer, pattern, replacement))
        .sum()
}

/// Apply each (pattern, replacement) pair in order. Empty patterns are
/// skipped.
pub fn replace_all_pairs(buffer: &mut String, pairs: &[(&str, &str)]) -> usize {
    pairs
        .iter()
        .map(|(pattern, replacement)| replace_all(buffer, pattern, replacement))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_contain_rejects_longer_pattern() {
        assert!(!can_contain("ab", "abc"));
    }

    #[test]
    fn test_can_contain_equal_length_boundary_check() {
        assert!(can_contain("abc", "abc"));
        // Same boundaries, different interior: false positive is allowed.
        assert!(can_contain("axc", "abc"));
        assert!(!can_contain("abc", "xbc"));
    }

    #[test]
    fn test_can_contain_short_patterns_skip_scan() {
        // <= 4 bytes: always passed through to the real replace.
        assert!(can_contain("zzzz zzzz", "abcd"));
    }

    #[test]
    fn test_can_contain_window_scan() {
        assert!(can_contain("say <para> now", "<para>"));
        assert!(!can_contain("nothing here at all", "<para>"));
    }

    #[test]
    fn test_can_contain_never_misses_real_match() {
        let buffer = "one marker phrase inside";
        assert!(buffer.contains("marker"));
        assert!(can_contain(buffer, "marker"));
    }

    #[test]
    fn test_replace_all_basic() {
        let mut buf = String::from("a one b one c");
        assert_eq!(replace_all(&mut buf, "one", "1"), 2);
        assert_eq!(buf, "a 1 b 1 c");
    }

    #[test]
    fn test_replace_all_empty_pattern_is_noop() {
        let mut buf = String::from("abc");
        assert_eq!(replace_all(&mut buf, "", "x"), 0);
        assert_eq!(buf, "abc");
    }

    #[test]
    fn test_replace_all_no_match_is_noop() {
        let mut buf = String::from("abc");
        assert_eq!(replace_all(&mut buf, "zzzzzz", "x"), 0);
        assert_eq!(buf, "abc");
    }

    #[test]
    fn test_replace_all_replacement_contains_pattern() {
        let mut buf = String::from("x");
        assert_eq!(replace_all(&mut buf, "x", "xx"), 1);
        assert_eq!(buf, "xx");
    }

    #[test]
    fn test_replace_all_any() {
        let mut buf = String::from("<para>text</para>");
        replace_all_any(&mut buf, &["<para>", "</para>"], " ");
        assert_eq!(buf, " text ");
    }

    #[test]
    fn test_replace_all_pairs_in_order() {
        let mut buf = String::from("&amp;lt;");
        replace_all_pairs(&mut buf, &[("&lt;", "<"), ("&amp;", "&")]);
        assert_eq!(buf, "&lt;");
    }
}
