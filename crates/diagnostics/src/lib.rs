//! Diagnostics for MT field parsing.
//!
//! Provides [`Diagnostic`] and [`Severity`] used to report what a grammar had
//! to recover from while parsing a field value. Parsing itself never fails on
//! malformed text; diagnostics are how partial results are explained.
//! Diagnostic codes are defined in the [`codes`] module.

#![warn(missing_docs)]

/// Diagnostic ID constants.
pub mod codes;

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Severity level for a diagnostic message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum Severity {
    /// Hard error — the value cannot be used as-is.
    Error,
    /// Warning — the value was only partially understood.
    Warn,
    /// Informational note.
    Info,
}

/// A diagnostic message produced while parsing or inspecting a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Unique diagnostic code (e.g., `"MTF1001"`).
    pub id: Cow<'static, str>,
    /// Severity level.
    pub severity: Severity,
    /// Human-readable diagnostic message.
    pub message: String,
    /// 1-based component index this diagnostic relates to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<usize>,
    /// Machine-readable context for tooling. Keys and values are free-form strings.
    ///
    /// Uses `BTreeMap` for deterministic key ordering in serialized output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<BTreeMap<String, String>>,
}

impl Diagnostic {
    /// Create a diagnostic with the given fields.
    pub fn new(
        id: impl Into<Cow<'static, str>>,
        severity: Severity,
        message: impl Into<String>,
        component: Option<usize>,
    ) -> Self {
        Self {
            id: id.into(),
            severity,
            message: message.into(),
            component,
            context: None,
        }
    }

    /// Shorthand for an `Error` diagnostic.
    pub fn error(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        component: Option<usize>,
    ) -> Self {
        Self::new(id, Severity::Error, message, component)
    }

    /// Shorthand for a `Warn` diagnostic.
    pub fn warn(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        component: Option<usize>,
    ) -> Self {
        Self::new(id, Severity::Warn, message, component)
    }

    /// Shorthand for an `Info` diagnostic.
    pub fn info(
        id: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
        component: Option<usize>,
    ) -> Self {
        Self::new(id, Severity::Info, message, component)
    }

    /// Attach machine-readable context metadata (builder pattern).
    ///
    /// Keys are short descriptors like `"field"`, `"label"`, `"expected"`.
    pub fn with_context(mut self, ctx: BTreeMap<String, String>) -> Self {
        self.context = Some(ctx);
        self
    }

    /// Returns the human-readable explanation for this diagnostic's code, if available.
    pub fn explain(&self) -> Option<&'static str> {
        explain(&self.id)
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warn => write!(f, "warn"),
            Severity::Info => write!(f, "info"),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.id, self.message)
    }
}

/// Returns the human-readable explanation for a diagnostic code, if known.
pub fn explain(id: &str) -> Option<&'static str> {
    match id {
        codes::MISSING_COMPONENT => Some(
            "A component that the field format marks as mandatory is absent. \
             The value was too short or structurally unexpected, so the grammar \
             left the component unset instead of failing.",
        ),
        codes::NON_CANONICAL_VALUE => Some(
            "Serializing the parsed components does not reproduce the original \
             value. Some characters were not accounted for by the field grammar, \
             typically because the value does not follow the field format.",
        ),
        codes::EMPTY_VALUE => Some("The field value is empty; every component is absent."),
        codes::NARRATIVE_LINE_TOO_LONG => Some(
            "A narrative line is longer than the line length allowed by the field \
             format (usually 35 characters).",
        ),
        _ => None,
    }
}
