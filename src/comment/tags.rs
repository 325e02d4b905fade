//! Well-known section tag and attribute names
//!
//! Tag names are case-sensitive; `<Summary>` is not a summary section.

pub const SUMMARY: &str = "summary";
pub const REMARKS: &str = "remarks";
pub const RETURNS: &str = "returns";
pub const VALUE: &str = "value";
pub const PARAM: &str = "param";
pub const EXCEPTION: &str = "exception";
pub const EXAMPLE: &str = "example";
pub const CODE: &str = "code";
pub const PARA: &str = "para";
pub const SEE: &str = "see";
pub const SEEALSO: &str = "seealso";
pub const INLINE_CODE: &str = "c";
pub const OVERLOADS: &str = "overloads";

/// Discriminating attribute on `param` sections.
pub const NAME_ATTRIBUTE: &str = "name";
/// Cross-reference attribute on `exception`, `see` and `seealso`.
pub const CREF_ATTRIBUTE: &str = "cref";
