//! First-word adjustment for documentation text
//!
//! A common documentation defect is a member summary phrased in the third
//! person ("Gets the value of X") where a policy wants the imperative form
//! ("get the value of X"). This module rewrites only the first word of a
//! text run: leading-space normalization, first-letter case changes, and
//! third-person-to-infinitive verb conversion.
//!
//! The verb conversion is data-driven: a prioritized rule table where exact
//! irregular forms ("does" -> "do") are consulted before suffix rules
//! ("-ies" -> "-y") and the general trailing-"s" strip. New irregular forms
//! are added to the table, not as new branches.

pub mod adjust;
pub mod verbalizer;

pub use adjust::{adjust_first_word, FirstWordOptions};
pub use verbalizer::to_infinitive;
