//! Diagnostic ID constants.
//!
//! Use these instead of string literals to get compile-time typo detection
//! and IDE autocomplete. Every code listed here has an [`explain`](crate::explain)
//! entry.

/// A mandatory component is absent after parsing.
pub const MISSING_COMPONENT: &str = "MTF1001";

/// Serializing the parsed components does not reproduce the input.
pub const NON_CANONICAL_VALUE: &str = "MTF1002";

/// The field value was empty.
pub const EMPTY_VALUE: &str = "MTF1003";

/// A narrative line is longer than the field's line length.
pub const NARRATIVE_LINE_TOO_LONG: &str = "MTF2001";

/// All known codes, in ID order.
pub const ALL: &[&str] = &[
    MISSING_COMPONENT,
    NON_CANONICAL_VALUE,
    EMPTY_VALUE,
    NARRATIVE_LINE_TOO_LONG,
];
