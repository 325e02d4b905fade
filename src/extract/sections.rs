//! Public extraction accessors
//!
//! Every accessor takes the raw comment text and returns cleaned results:
//! an encounter-ordered, by-value deduplicated list for plural accessors,
//! an `Option` for accessors addressed by a discriminator. An absent or
//! malformed comment yields an empty list / `None`, never an error.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::comment::tags;
use crate::comment::{DocComment, Element};
use crate::extract::clean::clean_element;

/// The member-kind prefix on cross references, e.g. the `T:` in
/// `T:System.ArgumentNullException`.
static CREF_KIND_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]:").expect("cref prefix pattern"));

/// All cleaned renderings of the given section tag, encounter-ordered and
/// deduplicated by cleaned value.
pub fn extract_section(raw: &str, tag: &str) -> Vec<String> {
    let Some(comment) = DocComment::parse(raw) else {
        return Vec::new();
    };
    dedup_ordered(
        comment
            .descendants_by_tag(tag)
            .into_iter()
            .map(clean_element),
    )
}

pub fn extract_summaries(raw: &str) -> Vec<String> {
    extract_section(raw, tags::SUMMARY)
}

pub fn extract_remarks(raw: &str) -> Vec<String> {
    extract_section(raw, tags::REMARKS)
}

pub fn extract_returns(raw: &str) -> Vec<String> {
    extract_section(raw, tags::RETURNS)
}

pub fn extract_value(raw: &str) -> Vec<String> {
    extract_section(raw, tags::VALUE)
}

pub fn extract_examples(raw: &str) -> Vec<String> {
    extract_section(raw, tags::EXAMPLE)
}

/// Cleaned `summary` sections nested under an `overloads` element.
pub fn extract_overloads_summary(raw: &str) -> Vec<String> {
    let Some(comment) = DocComment::parse(raw) else {
        return Vec::new();
    };
    dedup_ordered(
        comment
            .descendants_by_tag(tags::OVERLOADS)
            .into_iter()
            .flat_map(|overloads| overloads.descendants_by_tag(tags::SUMMARY))
            .map(clean_element),
    )
}

/// The cleaned `param` section for the given parameter name.
///
/// `None` when the parameter is undocumented or documented with several
/// distinct renderings; the caller decides what to do with ambiguity.
pub fn extract_parameter_comment(raw: &str, parameter_name: &str) -> Option<String> {
    let comment = DocComment::parse(raw)?;
    let cleaned = dedup_ordered(
        comment
            .descendants_by_tag(tags::PARAM)
            .into_iter()
            .filter(|param| param.attribute(tags::NAME_ATTRIBUTE) == Some(parameter_name))
            .map(clean_element),
    );
    sole(cleaned)
}

/// The cleaned `exception` section for the given exception type.
///
/// The type is matched against the `cref` attribute with its member-kind
/// prefix stripped, so both `T:System.ArgumentException` and
/// `System.ArgumentException` address the same section.
pub fn extract_exception_comment(raw: &str, exception_type: &str) -> Option<String> {
    let comment = DocComment::parse(raw)?;
    let wanted = strip_cref_kind(exception_type);
    let cleaned = dedup_ordered(
        comment
            .descendants_by_tag(tags::EXCEPTION)
            .into_iter()
            .filter(|exception| {
                documented_exception_type(exception).as_deref() == Some(wanted.as_str())
            })
            .map(clean_element),
    );
    sole(cleaned)
}

/// Every documented exception as (type name, cleaned text), in encounter
/// order. Downstream consumers match documented exceptions against thrown
/// types, so the type name travels with the text.
pub fn documented_exceptions(raw: &str) -> Vec<(String, String)> {
    let Some(comment) = DocComment::parse(raw) else {
        return Vec::new();
    };
    comment
        .descendants_by_tag(tags::EXCEPTION)
        .into_iter()
        .filter_map(|exception| {
            documented_exception_type(exception)
                .map(|type_name| (type_name, clean_element(exception)))
        })
        .collect()
}

/// Every exception type name documented by an `exception` section, in
/// encounter order, deduplicated.
pub fn list_documented_exception_types(raw: &str) -> Vec<String> {
    let Some(comment) = DocComment::parse(raw) else {
        return Vec::new();
    };
    dedup_ordered(
        comment
            .descendants_by_tag(tags::EXCEPTION)
            .into_iter()
            .filter_map(documented_exception_type),
    )
}

/// The sole distinct value, if there is exactly one.
///
/// Several sections share a tag without a discriminator in real comments;
/// no single-winner rule is sound, so zero and many both yield `None` and
/// the plural accessors remain the authoritative answer.
pub fn sole(mut values: Vec<String>) -> Option<String> {
    if values.len() == 1 {
        values.pop()
    } else {
        None
    }
}

fn documented_exception_type(exception: &Element) -> Option<String> {
    exception
        .attribute(tags::CREF_ATTRIBUTE)
        .map(strip_cref_kind)
}

fn strip_cref_kind(reference: &str) -> String {
    CREF_KIND_PREFIX.replace(reference, "").into_owned()
}

fn dedup_ordered(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values.filter(|value| seen.insert(value.clone())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_summaries_single() {
        let raw = "<summary>Gets the value.</summary>";
        assert_eq!(extract_summaries(raw), vec!["Gets the value."]);
    }

    #[test]
    fn test_extract_dedupes_by_cleaned_value() {
        // Same rendered text, different source whitespace: one result.
        let raw = "<summary>Gets   the value.</summary><summary>\n Gets the value. </summary>";
        assert_eq!(extract_summaries(raw), vec!["Gets the value."]);
    }

    #[test]
    fn test_extract_keeps_distinct_sections_ordered() {
        let raw = "<example>first</example><example>second</example>";
        assert_eq!(extract_examples(raw), vec!["first", "second"]);
        assert_eq!(sole(extract_examples(raw)), None);
    }

    #[test]
    fn test_extract_empty_section_is_a_distinct_result() {
        let raw = "<summary>  </summary>";
        assert_eq!(extract_summaries(raw), vec![String::new()]);
    }

    #[test]
    fn test_extract_on_malformed_comment_is_empty() {
        assert!(extract_summaries("<summary>unterminated").is_empty());
        assert!(extract_summaries("").is_empty());
    }

    #[test]
    fn test_parameter_comment_by_name() {
        let raw = r#"<param name="x">the <para>value</para></param><param name="y">other</param>"#;
        assert_eq!(extract_parameter_comment(raw, "x").as_deref(), Some("the value"));
        assert_eq!(extract_parameter_comment(raw, "y").as_deref(), Some("other"));
        assert_eq!(extract_parameter_comment(raw, "z"), None);
    }

    #[test]
    fn test_exception_types_and_comments() {
        let raw = concat!(
            r#"<exception cref="T:System.ArgumentNullException">a</exception>"#,
            r#"<exception cref="T:System.ArgumentException">a</exception>"#,
        );
        assert_eq!(
            list_documented_exception_types(raw),
            vec!["System.ArgumentNullException", "System.ArgumentException"]
        );
        assert_eq!(
            extract_exception_comment(raw, "System.ArgumentNullException").as_deref(),
            Some("a")
        );
        assert_eq!(
            extract_exception_comment(raw, "T:System.ArgumentException").as_deref(),
            Some("a")
        );
        assert_eq!(extract_exception_comment(raw, "System.Exception"), None);
    }

    #[test]
    fn test_documented_exceptions_pairs_type_with_text() {
        let raw = concat!(
            r#"<exception cref="T:System.IO.IOException">on read failure</exception>"#,
            r#"<exception>no cref, skipped</exception>"#,
        );
        assert_eq!(
            documented_exceptions(raw),
            vec![("System.IO.IOException".to_string(), "on read failure".to_string())]
        );
    }

    #[test]
    fn test_overloads_summary() {
        let raw = "<overloads><summary>Shared intro.</summary></overloads><summary>One form.</summary>";
        assert_eq!(extract_overloads_summary(raw), vec!["Shared intro."]);
        // The plain summary accessor still sees both.
        assert_eq!(extract_summaries(raw).len(), 2);
    }
}
