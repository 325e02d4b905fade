//! Third-person verb form to base form conversion
//!
//! The rule table is consulted in order: exact irregular forms first, then
//! suffix rewrites, then the default trailing-"s" strip. The first matching
//! rule wins.

use once_cell::sync::Lazy;

/// A single conversion rule.
///
/// `Exact` matches a whole word (case-insensitively on the first letter);
/// `Suffix` rewrites a word ending.
#[derive(Debug, Clone, Copy)]
enum VerbRule {
    Exact {
        third_person: &'static str,
        base: &'static str,
    },
    Suffix {
        suffix: &'static str,
        replacement: &'static str,
    },
}

/// Prioritized conversion rules. Order matters: specific overrides come
/// before general suffix rules, and the bare "s" strip is last.
static RULES: Lazy<Vec<VerbRule>> = Lazy::new(|| {
    use VerbRule::*;
    vec![
        Exact { third_person: "does", base: "do" },
        Exact { third_person: "goes", base: "go" },
        Exact { third_person: "has", base: "have" },
        Exact { third_person: "is", base: "be" },
        Exact { third_person: "was", base: "be" },
        Exact { third_person: "are", base: "be" },
        Exact { third_person: "were", base: "be" },
        Suffix { suffix: "ies", replacement: "y" },
        Suffix { suffix: "sses", replacement: "ss" },
        Suffix { suffix: "ches", replacement: "ch" },
        Suffix { suffix: "shes", replacement: "sh" },
        Suffix { suffix: "xes", replacement: "x" },
        Suffix { suffix: "zes", replacement: "z" },
        Suffix { suffix: "oes", replacement: "o" },
        Suffix { suffix: "s", replacement: "" },
    ]
});

/// Convert a third-person verb form to its base (infinitive) form.
///
/// Words no rule applies to are returned unchanged. The case of the first
/// letter is preserved, so "Gets" becomes "Get" and "gets" becomes "get".
pub fn to_infinitive(word: &str) -> String {
    if word.is_empty() {
        return String::new();
    }

    let lowered = word.to_lowercase();
    for rule in RULES.iter() {
        match rule {
            VerbRule::Exact { third_person, base } => {
                if lowered == *third_person {
                    return match_first_letter_case(word, base);
                }
            }
            VerbRule::Suffix { suffix, replacement } => {
                if lowered.len() <= suffix.len() || !lowered.ends_with(suffix) {
                    continue;
                }
                // Slice the original when its ending matches literally, so
                // the stem keeps its case; otherwise rewrite the lowered
                // form and restore the first letter.
                if word.ends_with(suffix) {
                    let keep = word.len() - suffix.len();
                    let mut out = String::with_capacity(keep + replacement.len());
                    out.push_str(&word[..keep]);
                    out.push_str(replacement);
                    return out;
                }
                let mut out = lowered[..lowered.len() - suffix.len()].to_string();
                out.push_str(replacement);
                return match_first_letter_case(word, &out);
            }
        }
    }
    word.to_string()
}

/// Copy the case of `source`'s first letter onto `base`.
fn match_first_letter_case(source: &str, base: &str) -> String {
    let source_upper = source
        .chars()
        .next()
        .map(|c| c.is_uppercase())
        .unwrap_or(false);
    if !source_upper {
        return base.to_string();
    }
    let mut chars = base.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_s_strip() {
        assert_eq!(to_infinitive("gets"), "get");
        assert_eq!(to_infinitive("returns"), "return");
    }

    #[test]
    fn test_irregular_forms() {
        assert_eq!(to_infinitive("does"), "do");
        assert_eq!(to_infinitive("goes"), "go");
        assert_eq!(to_infinitive("has"), "have");
        assert_eq!(to_infinitive("is"), "be");
    }

    #[test]
    fn test_suffix_rules_before_default_strip() {
        assert_eq!(to_infinitive("copies"), "copy");
        assert_eq!(to_infinitive("passes"), "pass");
        assert_eq!(to_infinitive("matches"), "match");
        assert_eq!(to_infinitive("pushes"), "push");
        assert_eq!(to_infinitive("fixes"), "fix");
    }

    #[test]
    fn test_case_preserved() {
        assert_eq!(to_infinitive("Gets"), "Get");
        assert_eq!(to_infinitive("Does"), "Do");
    }

    #[test]
    fn test_non_third_person_unchanged() {
        assert_eq!(to_infinitive("value"), "value");
        assert_eq!(to_infinitive("return"), "return");
        assert_eq!(to_infinitive(""), "");
    }
}
