//! MT field core library.
//!
//! Parses and serializes the values of individual MT (SWIFT FIN) message
//! fields. Every field type has a grammar that splits a raw value into
//! 1-indexed components and joins them back losslessly. On top of the
//! grammars sit a generic line extraction engine and a codec for the
//! `/CODEWORD/` narratives carried by free text fields.
//!
//! The main entry points are [`parse_field`] for parsing by name, [`Field`]
//! for working with a parsed value, and [`Narrative`] for structured text.

#![warn(missing_docs)]

/// The component model.
pub mod component;
/// Configuration for narratives and line queries.
pub mod config;
/// Per-field-type metadata.
pub mod descriptor;
/// Re-exports from the diagnostics crate.
pub mod diag;
/// Typed errors.
pub mod error;
/// Fields bound to their grammar.
pub mod field;
/// Field grammars.
pub mod grammar;
/// Line extraction.
pub mod lines;
/// Structured narrative codec.
pub mod narrative;
/// Parsing by field name, with diagnostics.
pub mod parse;
/// Field name to grammar lookup.
pub mod registry;
/// Tokenization primitives.
pub mod tokenize;

// ── Convenience re-exports ──────────────────────────────────────────────────
// Flat imports for the most common entry points. The full module paths
// remain available for less common types.

// Components and metadata
pub use component::ComponentSet;
pub use descriptor::{ComponentSpec, ComponentType, FieldDescriptor, GenericShape};

// Fields
pub use field::{ComponentEntry, Field, GenericView};
pub use grammar::Grammar;
pub use parse::{ParseResult, parse_field};

// Narratives
pub use narrative::{InlineData, Narrative, NarrativeBuilder, NarrativeFormat, StructuredSegment};

// Configuration and errors
pub use config::{LineBreak, LineQuery, NarrativeConfig};
pub use error::FieldError;

// Diagnostics (re-exported from the diagnostics crate)
pub use diag::{Diagnostic, Severity, codes};
