//! Parsing by field name, with diagnostics explaining partial results.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::diag::{Diagnostic, Severity, codes};
use crate::error::FieldError;
use crate::field::Field;
use crate::tokenize::lines;

/// Shorthand for building a `BTreeMap<String, String>` context from key-value pairs.
macro_rules! ctx {
    ($($k:expr => $v:expr),+ $(,)?) => {
        BTreeMap::from([$(($k.into(), $v.into())),+])
    };
}

/// Result of parsing one field value.
#[derive(Debug, Clone, Serialize)]
pub struct ParseResult {
    /// The parsed field. Components the grammar could not account for are absent.
    pub field: Field,
    /// What the grammar had to recover from.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    /// `true` if no errors were reported (warnings and info are allowed).
    pub fn is_ok(&self) -> bool {
        !self
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }
}

/// Parse `value` as the field type registered under `name`.
///
/// Only an unknown `name` is an error. Malformed values still produce a
/// field, with diagnostics for:
/// - an empty value
/// - mandatory components left absent
/// - a value the grammar does not reproduce on serialization
/// - lines longer than the field's line length
pub fn parse_field(name: &str, value: &str) -> Result<ParseResult, FieldError> {
    let field = Field::parse(name, value)?;
    let mut diagnostics = Vec::new();

    if value.trim().is_empty() {
        diagnostics.push(
            Diagnostic::warn(codes::EMPTY_VALUE, format!("{name}: empty value"), None)
                .with_context(ctx!("field" => name)),
        );
        return Ok(ParseResult { field, diagnostics });
    }

    let descriptor = field.descriptor();
    for i in 1..=descriptor.component_count() {
        if descriptor.is_optional(i) || field.components().get_non_empty(i).is_some() {
            continue;
        }
        let label = descriptor.label(i).unwrap_or_default();
        diagnostics.push(
            Diagnostic::error(
                codes::MISSING_COMPONENT,
                format!("{name}: missing mandatory component {i} ({label})"),
                Some(i),
            )
            .with_context(ctx!("field" => name, "label" => label)),
        );
    }

    let canonical = field.value();
    if canonical != value {
        diagnostics.push(
            Diagnostic::warn(
                codes::NON_CANONICAL_VALUE,
                format!("{name}: value does not serialize back unchanged"),
                None,
            )
            .with_context(ctx!("field" => name, "canonical" => canonical)),
        );
    }

    if let Some(max) = descriptor.line_length {
        for (n, line) in lines(value).into_iter().enumerate() {
            let len = line.chars().count();
            if len > max {
                diagnostics.push(
                    Diagnostic::warn(
                        codes::NARRATIVE_LINE_TOO_LONG,
                        format!("{name}: line {} has {len} characters (max {max})", n + 1),
                        None,
                    )
                    .with_context(ctx!(
                        "field" => name,
                        "line" => (n + 1).to_string(),
                        "length" => len.to_string(),
                        "max" => max.to_string(),
                    )),
                );
            }
        }
    }

    if !diagnostics.is_empty() {
        tracing::debug!(field = name, count = diagnostics.len(), "parsed with diagnostics");
    }
    Ok(ParseResult { field, diagnostics })
}
