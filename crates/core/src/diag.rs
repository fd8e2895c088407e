//! Re-exports from the diagnostics crate.

pub use mt_fields_diagnostics::{Diagnostic, Severity, codes, explain};
