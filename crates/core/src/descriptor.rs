//! Static, per-field-type metadata.

use serde::Serialize;

use crate::narrative::NarrativeFormat;

/// What kind of content a component slot holds.
///
/// Informational only; grammars never consult it while parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum ComponentType {
    /// Free text.
    Text,
    /// Integer or other digit string.
    Number,
    /// Decimal amount with comma decimal mark.
    Amount,
    /// Calendar date (`YYMMDD`, `MMDD` or `YYYYMMDD`).
    Date,
    /// Time of day (`HHMM` or `HHMMSS`).
    Time,
    /// ISO 4217 currency code.
    Currency,
    /// Business identifier code.
    Bic,
    /// Account number.
    Account,
    /// ISO 3166 country code.
    Country,
    /// Sign or debit/credit mark.
    Sign,
    /// Coded value (qualifier, indicator, codeword).
    Code,
    /// ISIN security identifier.
    Isin,
}

/// One component slot of a field type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentSpec {
    /// Human-readable label.
    pub label: &'static str,
    /// Content kind.
    pub kind: ComponentType,
    /// Whether the format allows the component to be absent.
    pub optional: bool,
}

impl ComponentSpec {
    /// A mandatory slot.
    pub const fn required(label: &'static str, kind: ComponentType) -> Self {
        Self {
            label,
            kind,
            optional: false,
        }
    }

    /// An optional slot.
    pub const fn optional(label: &'static str, kind: ComponentType) -> Self {
        Self {
            label,
            kind,
            optional: true,
        }
    }
}

/// Shape of a generic field (`:QUAL/[DSS]/...`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenericShape {
    /// The field carries a Data Source Scheme as component 2.
    pub dss: bool,
}

impl GenericShape {
    /// Index of the DSS component, when the shape has one.
    pub fn dss_index(self) -> Option<usize> {
        self.dss.then_some(2)
    }

    /// Index of the conditional qualifier: right after the DSS, or right
    /// after the qualifier when there is no DSS.
    pub fn conditional_qualifier_index(self) -> usize {
        if self.dss { 3 } else { 2 }
    }
}

/// Immutable metadata for one field type, shared by every instance.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FieldDescriptor {
    /// Field name without letter, e.g. `"32"`.
    pub number: &'static str,
    /// Letter option, e.g. `Some('A')` for 32A.
    pub letter: Option<char>,
    /// Component slots, in order.
    pub components: &'static [ComponentSpec],
    /// Present for generic fields.
    pub generic: Option<GenericShape>,
    /// Maximum characters per line for multi-line text fields.
    pub line_length: Option<usize>,
    /// Narrative layout, for fields holding codeword narratives.
    pub narrative: Option<NarrativeFormat>,
}

impl FieldDescriptor {
    /// Full field name, e.g. `"32A"`.
    pub fn name(&self) -> String {
        match self.letter {
            Some(l) => format!("{}{}", self.number, l),
            None => self.number.to_owned(),
        }
    }

    /// Declared component count.
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Slot metadata for component `i` (1-based).
    pub fn component(&self, i: usize) -> Option<&'static ComponentSpec> {
        let components: &'static [ComponentSpec] = self.components;
        i.checked_sub(1).and_then(|idx| components.get(idx))
    }

    /// Label for component `i`.
    pub fn label(&self, i: usize) -> Option<&'static str> {
        self.component(i).map(|c| c.label)
    }

    /// Whether component `i` may be absent. Out-of-range indices are optional.
    pub fn is_optional(&self, i: usize) -> bool {
        self.component(i).is_none_or(|c| c.optional)
    }

    /// Whether this is a generic field.
    pub fn is_generic(&self) -> bool {
        self.generic.is_some()
    }

    /// Whether this generic field carries a Data Source Scheme.
    pub fn has_dss(&self) -> bool {
        self.generic.is_some_and(|g| g.dss)
    }
}
