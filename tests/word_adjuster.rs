//! First-word adjustment cases, including the verbalizer table

use rstest::rstest;

use doctext::{adjust_first_word, to_infinitive, FirstWordOptions};

#[rstest]
#[case("Gets the value", "get the value")]
#[case("Returns the count", "return the count")]
#[case("Does the work", "do the work")]
#[case("Has a side effect", "have a side effect")]
#[case("Is a wrapper", "be a wrapper")]
#[case("Copies the buffer", "copy the buffer")]
#[case("Matches the pattern", "match the pattern")]
fn lowercase_infinitive_policy(#[case] input: &str, #[case] expected: &str) {
    let options = FirstWordOptions::new()
        .lowercase_first_letter()
        .into_infinitive();
    assert_eq!(adjust_first_word(input, options), expected);
}

#[rstest]
#[case("gets", "get")]
#[case("passes", "pass")]
#[case("pushes", "push")]
#[case("carries", "carry")]
#[case("goes", "go")]
#[case("was", "be")]
#[case("get", "get")]
#[case("new", "new")]
fn verbalizer_table(#[case] third_person: &str, #[case] base: &str) {
    assert_eq!(to_infinitive(third_person), base);
}

#[test]
fn markup_is_never_rewritten() {
    let options = FirstWordOptions::new()
        .lowercase_first_letter()
        .into_infinitive();
    let input = "<inheritdoc/>";
    assert_eq!(adjust_first_word(input, options), input);
}

#[test]
fn leading_space_policy() {
    let keep = FirstWordOptions::new().keep_leading_space();
    let drop = FirstWordOptions::new();
    assert_eq!(adjust_first_word("  word", keep), " word");
    assert_eq!(adjust_first_word("  word", drop), "word");
    // A word flush at line start has no removable space.
    assert_eq!(adjust_first_word("word", keep), "word");
}
