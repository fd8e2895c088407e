//! Multi-line free text fields that carry codeword narratives.
//!
//! The grammar only stores one line per component. Reading the lines as a
//! [`Narrative`](crate::narrative::Narrative) is done by
//! [`Field::narrative`](crate::Field::narrative), using the format from
//! the descriptor.

use super::{CRLF, Grammar, collect_lines, put_lines};
use crate::component::ComponentSet;
use crate::descriptor::{ComponentSpec, ComponentType as T, FieldDescriptor};
use crate::narrative::{InlineData, NarrativeFormat};
use crate::tokenize::lines;

/// `n*35x`: one component per line.
#[derive(Debug)]
pub struct NarrativeLines {
    descriptor: &'static FieldDescriptor,
}

impl Grammar for NarrativeLines {
    fn descriptor(&self) -> &'static FieldDescriptor {
        self.descriptor
    }

    fn parse(&self, value: &str) -> ComponentSet {
        let mut c = self.empty();
        put_lines(&mut c, 1, &lines(value));
        c
    }

    fn serialize(&self, c: &ComponentSet) -> String {
        collect_lines(c, 1).join(CRLF)
    }
}

const SIX_LINES: &[ComponentSpec] = &[
    ComponentSpec::required("Narrative", T::Text),
    ComponentSpec::optional("Narrative 2", T::Text),
    ComponentSpec::optional("Narrative 3", T::Text),
    ComponentSpec::optional("Narrative 4", T::Text),
    ComponentSpec::optional("Narrative 5", T::Text),
    ComponentSpec::optional("Narrative 6", T::Text),
];

const THREE_LINES: &[ComponentSpec] = &[
    ComponentSpec::required("Narrative", T::Text),
    ComponentSpec::optional("Narrative 2", T::Text),
    ComponentSpec::optional("Narrative 3", T::Text),
];

const fn narrative_field(
    number: &'static str,
    letter: Option<char>,
    components: &'static [ComponentSpec],
    inline: InlineData,
) -> FieldDescriptor {
    FieldDescriptor {
        number,
        letter,
        components,
        generic: None,
        line_length: Some(35),
        narrative: Some(NarrativeFormat::new(inline)),
    }
}

static D72: FieldDescriptor = narrative_field("72", None, SIX_LINES, InlineData::None);
static D71B: FieldDescriptor =
    narrative_field("71", Some('B'), SIX_LINES, InlineData::CurrencyAmount);
static D77B: FieldDescriptor = narrative_field("77", Some('B'), THREE_LINES, InlineData::Country);

/// Field 72, sender to receiver information.
pub static F72: NarrativeLines = NarrativeLines { descriptor: &D72 };

/// Field 71B, details of charges.
pub static F71B: NarrativeLines = NarrativeLines { descriptor: &D71B };

/// Field 77B, regulatory reporting.
pub static F77B: NarrativeLines = NarrativeLines { descriptor: &D77B };
