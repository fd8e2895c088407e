//! The component model: fixed-length, 1-indexed, nullable text slots.

use crate::error::FieldError;

/// Ordered component storage for one field value.
///
/// The length is fixed at construction. Indices start at 1. Reading outside
/// `1..=len` yields `None`; writing outside it is rejected with
/// [`FieldError::ComponentOutOfRange`] and leaves the set untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ComponentSet {
    slots: Vec<Option<String>>,
}

impl ComponentSet {
    /// An empty set of `len` absent components.
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Build a set from positional values; the length is `values.len()`.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            slots: values.into_iter().map(|v| v.map(Into::into)).collect(),
        }
    }

    /// Declared number of components.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Component `i`, or `None` when unset or out of range.
    pub fn get(&self, i: usize) -> Option<&str> {
        let slot = i.checked_sub(1).and_then(|idx| self.slots.get(idx))?;
        slot.as_deref()
    }

    /// Component `i` if set and not blank.
    pub fn get_non_empty(&self, i: usize) -> Option<&str> {
        self.get(i).filter(|v| !v.is_empty())
    }

    /// Set component `i`. `None` clears it.
    pub fn set(&mut self, i: usize, value: Option<impl Into<String>>) -> Result<(), FieldError> {
        let len = self.slots.len();
        match i.checked_sub(1).and_then(|idx| self.slots.get_mut(idx)) {
            Some(slot) => {
                *slot = value.map(Into::into);
                Ok(())
            }
            None => {
                tracing::warn!(index = i, len, "rejected out-of-range component write");
                Err(FieldError::ComponentOutOfRange { index: i, len })
            }
        }
    }

    /// Set component `i` to a value that is stored only when non-empty.
    ///
    /// Grammars use this so that an empty token stays absent.
    pub(crate) fn put(&mut self, i: usize, value: Option<&str>) {
        if let Some(slot) = i.checked_sub(1).and_then(|idx| self.slots.get_mut(idx)) {
            *slot = value.filter(|v| !v.is_empty()).map(str::to_owned);
        }
    }

    /// Clear component `i`.
    pub fn clear(&mut self, i: usize) -> Result<(), FieldError> {
        self.set(i, None::<String>)
    }

    /// `true` when every component is absent or blank.
    pub fn is_empty(&self) -> bool {
        self.slots
            .iter()
            .all(|s| s.as_deref().is_none_or(|v| v.trim().is_empty()))
    }

    /// Concatenate the non-empty components from `from` to the end.
    ///
    /// With `skip_last`, the last non-empty component is left out.
    pub fn join(&self, from: usize, skip_last: bool) -> String {
        let parts: Vec<&str> = (from.max(1)..=self.len())
            .filter_map(|i| self.get_non_empty(i))
            .collect();
        let take = if skip_last {
            parts.len().saturating_sub(1)
        } else {
            parts.len()
        };
        parts[..take].concat()
    }

    /// Concatenate the non-empty components `from..=to`.
    pub fn join_range(&self, from: usize, to: usize) -> String {
        (from.max(1)..=to.min(self.len()))
            .filter_map(|i| self.get_non_empty(i))
            .collect()
    }

    /// Iterate `(index, value)` pairs in order, 1-based.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<&str>)> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, s)| (i + 1, s.as_deref()))
    }

    /// All values in order.
    pub fn values(&self) -> Vec<Option<&str>> {
        self.slots.iter().map(|s| s.as_deref()).collect()
    }
}
