//! A field value bound to its grammar.

use serde::Serialize;
use serde::ser::SerializeStruct;

use crate::component::ComponentSet;
use crate::config::{LineBreak, LineQuery, NarrativeConfig};
use crate::descriptor::{FieldDescriptor, GenericShape};
use crate::error::FieldError;
use crate::grammar::Grammar;
use crate::lines::extract;
use crate::narrative::Narrative;
use crate::registry;
use crate::tokenize::lines;

/// One field: a grammar and the components it parsed or was given.
#[derive(Clone)]
pub struct Field {
    grammar: &'static dyn Grammar,
    components: ComponentSet,
}

/// One entry of [`Field::labelled_components`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentEntry {
    /// 1-based component index.
    pub index: usize,
    /// Label from the field descriptor.
    pub label: &'static str,
    /// Component value, if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

fn grammar_for(name: &str) -> Result<&'static dyn Grammar, FieldError> {
    registry::lookup(name).ok_or_else(|| FieldError::UnknownField(name.to_owned()))
}

impl Field {
    /// An empty field of the named type.
    pub fn new(name: &str) -> Result<Self, FieldError> {
        Ok(Self::with_grammar(grammar_for(name)?))
    }

    /// An empty field for `grammar`.
    pub fn with_grammar(grammar: &'static dyn Grammar) -> Self {
        Self {
            grammar,
            components: grammar.empty(),
        }
    }

    /// Parse `value` as the named field type.
    pub fn parse(name: &str, value: &str) -> Result<Self, FieldError> {
        Ok(Self::from_value(grammar_for(name)?, value))
    }

    /// Parse `value` with `grammar`.
    pub fn from_value(grammar: &'static dyn Grammar, value: &str) -> Self {
        tracing::trace!(field = %grammar.name(), len = value.len(), "parse field value");
        Self {
            grammar,
            components: grammar.parse(value),
        }
    }

    /// A named field holding `components`.
    ///
    /// Values are copied by index. A non-empty value past the declared
    /// component count is rejected.
    pub fn from_components(name: &str, components: &ComponentSet) -> Result<Self, FieldError> {
        let mut field = Self::new(name)?;
        for (i, value) in components.iter() {
            if value.is_some_and(|v| !v.is_empty()) || i <= field.components.len() {
                field.components.set(i, value)?;
            }
        }
        Ok(field)
    }

    /// The grammar this field uses.
    pub fn grammar(&self) -> &'static dyn Grammar {
        self.grammar
    }

    /// Static metadata of the field type.
    pub fn descriptor(&self) -> &'static FieldDescriptor {
        self.grammar.descriptor()
    }

    /// Field name, e.g. `"98E"`.
    pub fn name(&self) -> String {
        self.grammar.name()
    }

    /// Letter option, if the field type has one.
    pub fn letter(&self) -> Option<char> {
        self.descriptor().letter
    }

    /// Component `i` (1-based); `None` when unset or out of range.
    pub fn component(&self, i: usize) -> Option<&str> {
        self.components.get(i)
    }

    /// All components.
    pub fn components(&self) -> &ComponentSet {
        &self.components
    }

    /// Set component `i`. Out-of-range writes are rejected and change nothing.
    pub fn set_component(
        &mut self,
        i: usize,
        value: Option<impl Into<String>>,
    ) -> Result<(), FieldError> {
        self.components.set(i, value)
    }

    /// The serialized value.
    pub fn value(&self) -> String {
        self.grammar.serialize(&self.components)
    }

    /// `true` when every component is absent or blank.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Every component with its label, in order.
    pub fn labelled_components(&self) -> Vec<ComponentEntry> {
        let descriptor = self.descriptor();
        self.components
            .iter()
            .map(|(index, value)| ComponentEntry {
                index,
                label: descriptor.label(index).unwrap_or_default(),
                value: value.map(str::to_owned),
            })
            .collect()
    }

    /// Generic accessors, for generic field types only.
    pub fn as_generic(&self) -> Option<GenericView<'_>> {
        let shape = self.descriptor().generic?;
        Some(GenericView { field: self, shape })
    }

    /// Read the lines as a structured narrative.
    pub fn narrative(&self) -> Result<Narrative, FieldError> {
        let format = self
            .descriptor()
            .narrative
            .ok_or_else(|| FieldError::NotNarrative(self.name()))?;
        Ok(Narrative::parse(&self.value(), format))
    }

    /// Replace the lines with `narrative`.
    ///
    /// Fails with [`FieldError::NarrativeOverflow`] when the narrative needs
    /// more lines than the field holds; the field is left unchanged then.
    pub fn set_narrative(&mut self, narrative: &Narrative) -> Result<(), FieldError> {
        let descriptor = self.descriptor();
        if descriptor.narrative.is_none() {
            return Err(FieldError::NotNarrative(self.name()));
        }
        let config = NarrativeConfig::with_line_length(descriptor.line_length.unwrap_or(35))
            .line_break(LineBreak::CrLf);
        let text = narrative.serialize(&config);
        let needed = lines(&text).len();
        let available = descriptor.component_count();
        if needed > available {
            tracing::debug!(field = %self.name(), needed, available, "narrative does not fit");
            return Err(FieldError::NarrativeOverflow {
                field: self.name(),
                needed,
                available,
            });
        }
        self.components = self.grammar.parse(&text);
        Ok(())
    }

    /// Line `n` (1-based), or `None` when it does not exist.
    pub fn line(&self, n: usize) -> Option<String> {
        if n == 0 {
            return None;
        }
        self.query_lines(&LineQuery::line(n)).unwrap_or_default()
    }

    /// Lines `start..=end`, joined with CRLF. `end` past the last line is clamped.
    pub fn lines(&self, start: usize, end: usize) -> Result<Option<String>, FieldError> {
        self.query_lines(&LineQuery::range(start, end))
    }

    /// All lines produced by components `offset..`.
    pub fn lines_from_offset(&self, offset: usize) -> Option<String> {
        self.query_lines(&LineQuery::from_offset(offset))
            .unwrap_or_default()
    }

    /// Run an arbitrary line query.
    pub fn query_lines(&self, query: &LineQuery) -> Result<Option<String>, FieldError> {
        extract(self.grammar, &self.components, query)
    }
}

impl PartialEq for Field {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name() && self.components == other.components
    }
}

impl Eq for Field {}

impl std::hash::Hash for Field {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name().hash(state);
        self.components.hash(state);
    }
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name())
            .field("components", &self.components)
            .finish()
    }
}

impl Serialize for Field {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Field", 3)?;
        s.serialize_field("name", &self.name())?;
        s.serialize_field("value", &self.value())?;
        s.serialize_field("components", &self.labelled_components())?;
        s.end()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value())
    }
}

/// Qualifier, DSS and conditional qualifier of a generic field.
#[derive(Debug, Clone, Copy)]
pub struct GenericView<'a> {
    field: &'a Field,
    shape: GenericShape,
}

impl<'a> GenericView<'a> {
    /// The qualifier (component 1).
    pub fn qualifier(&self) -> Option<&'a str> {
        self.field.component(1)
    }

    /// The Data Source Scheme, for shapes that carry one.
    pub fn dss(&self) -> Option<&'a str> {
        self.shape.dss_index().and_then(|i| self.field.component(i))
    }

    /// The conditional qualifier.
    pub fn conditional_qualifier(&self) -> Option<&'a str> {
        self.field.component(self.shape.conditional_qualifier_index())
    }
}
