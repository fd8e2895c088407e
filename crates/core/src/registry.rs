//! Field name to grammar lookup.
//!
//! The table is explicit: adding a field type means adding its grammar here.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::grammar::{Grammar, amount, free_text, generic, party, statement};

/// Every registered grammar, in field-number order.
static GRAMMARS: &[&dyn Grammar] = &[
    &generic::F20C,
    &generic::F22F,
    &amount::F32A,
    &amount::F32B,
    &amount::F33B,
    &party::F35B,
    &party::F59,
    &amount::F60F,
    &statement::F61,
    &amount::F62F,
    &generic::F69B,
    &free_text::F71B,
    &free_text::F72,
    &free_text::F77B,
    &generic::F98A,
    &generic::F98C,
    &generic::F98E,
];

static BY_NAME: LazyLock<HashMap<String, &'static dyn Grammar>> =
    LazyLock::new(|| GRAMMARS.iter().map(|&g| (g.name(), g)).collect());

/// The grammar registered under `name` (e.g. `"98E"`), matched exactly.
pub fn lookup(name: &str) -> Option<&'static dyn Grammar> {
    BY_NAME.get(name).copied()
}

/// Names of all registered field types, in field-number order.
pub fn names() -> Vec<String> {
    GRAMMARS.iter().map(|g| g.name()).collect()
}

/// All registered grammars, in field-number order.
pub fn all() -> &'static [&'static dyn Grammar] {
    GRAMMARS
}
