//! Typed errors for misuse of the component model and invalid requests.
//!
//! Malformed field text is never an error: grammars leave unparsed components
//! absent. These variants cover the cases where the caller asked for
//! something that cannot be done.

/// Errors reported by component writes, line queries, and registry lookups.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// A component write addressed an index outside `1..=len`.
    #[error("component index {index} out of range (field has {len} components)")]
    ComponentOutOfRange {
        /// The rejected 1-based index.
        index: usize,
        /// Declared number of components.
        len: usize,
    },

    /// A line range was empty, inverted, or started at line 0.
    #[error("invalid line range {start}..={end}")]
    InvalidLineRange {
        /// Requested first line (1-based).
        start: usize,
        /// Requested last line (1-based, inclusive).
        end: usize,
    },

    /// No grammar is registered under the given field name.
    #[error("unknown field name: {0}")]
    UnknownField(String),

    /// The field does not carry narrative content.
    #[error("field {0} does not hold a structured narrative")]
    NotNarrative(String),

    /// A narrative needs more physical lines than the field has components.
    #[error("narrative needs {needed} lines but field {field} holds {available}")]
    NarrativeOverflow {
        /// Field name.
        field: String,
        /// Lines the serialized narrative occupies.
        needed: usize,
        /// Lines (components) the field can hold.
        available: usize,
    },
}

impl FieldError {
    /// Returns `true` for errors caused by a caller passing a bad index or range.
    pub fn is_misuse(&self) -> bool {
        matches!(
            self,
            FieldError::ComponentOutOfRange { .. } | FieldError::InvalidLineRange { .. }
        )
    }
}
