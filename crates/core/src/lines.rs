//! Line extraction over any grammar.
//!
//! Lines are not stored. To find out which text a component range puts on
//! which physical line, a working copy of the components is serialized with
//! every absent component at or after the offset replaced by a sentinel and
//! every component before the offset removed. The grammar then lays out the
//! lines as it always does, and the sentinels are stripped from the result.
//! This needs no per-grammar knowledge of line boundaries.

use uuid::Uuid;

use crate::component::ComponentSet;
use crate::config::LineQuery;
use crate::error::FieldError;
use crate::grammar::{CRLF, Grammar};
use crate::tokenize::lines;

/// Characters that separate components on a line.
fn is_separator(c: char) -> bool {
    matches!(c, '/' | ':' | ',') || c.is_ascii_whitespace()
}

/// A line that holds only separators once sentinels are gone.
fn is_structural(line: &str, sentinel: &str) -> bool {
    line.replace(sentinel, "").chars().all(is_separator)
}

/// Leading `://` as a unit, otherwise one leading `:` or `/`.
fn strip_leading_separator(line: &str) -> &str {
    line.strip_prefix("://")
        .or_else(|| line.strip_prefix(':'))
        .or_else(|| line.strip_prefix('/'))
        .unwrap_or(line)
}

/// Extract the lines selected by `query` from the serialized components.
///
/// Returns `Ok(None)` when nothing is left, and
/// [`FieldError::InvalidLineRange`] when `start` is 0 or `end < start`.
/// An `end` past the last line is clamped. `components` is never modified.
pub fn extract(
    grammar: &dyn Grammar,
    components: &ComponentSet,
    query: &LineQuery,
) -> Result<Option<String>, FieldError> {
    let start = query.start;
    let rejected = match query.end {
        Some(end) if end < start || start == 0 => Some(end),
        None if start == 0 => Some(0),
        _ => None,
    };
    if let Some(end) = rejected {
        tracing::warn!(field = %grammar.name(), start, end, "rejected line range");
        return Err(FieldError::InvalidLineRange { start, end });
    }

    let sentinel = Uuid::new_v4().simple().to_string();
    let mut work = components.clone();
    for i in 1..=work.len() {
        if i < query.offset {
            work.put(i, None);
        } else if work.get_non_empty(i).is_none() {
            work.put(i, Some(&sentinel));
        }
    }

    let text = grammar.serialize(&work);
    let all: Vec<&str> = lines(&text)
        .into_iter()
        .filter(|l| !is_structural(l, &sentinel))
        .collect();

    let end = query.end.unwrap_or(all.len()).min(all.len());
    if start > end {
        tracing::debug!(field = %grammar.name(), start, available = all.len(), "no lines in range");
        return Ok(None);
    }

    let marked = format!("/{sentinel}");
    let mut out: Vec<String> = Vec::with_capacity(end - start + 1);
    for (k, line) in all[start - 1..end].iter().enumerate() {
        let clean = line.replace(&marked, "").replace(&sentinel, "");
        let clean = if k == 0 && query.remove_separators {
            strip_leading_separator(&clean).to_owned()
        } else {
            clean
        };
        if !clean.is_empty() {
            out.push(clean);
        }
    }

    tracing::debug!(
        field = %grammar.name(),
        start,
        end,
        offset = query.offset,
        lines = out.len(),
        "extracted lines"
    );
    Ok((!out.is_empty()).then(|| out.join(CRLF)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::{generic, party};

    #[test]
    fn separator_classes() {
        assert!(is_structural("/:, ", "S"));
        assert!(is_structural("/S", "S"));
        assert!(is_structural("", "S"));
        assert!(!is_structural("/X", "S"));
    }

    #[test]
    fn leading_separator_rules() {
        assert_eq!(strip_leading_separator("://REF"), "REF");
        assert_eq!(strip_leading_separator(":QUAL"), "QUAL");
        assert_eq!(strip_leading_separator("//X"), "/X");
        assert_eq!(strip_leading_separator("X"), "X");
    }

    #[test]
    fn rejects_bad_ranges() {
        let c = party::F59.parse("A");
        let err = extract(&party::F59, &c, &LineQuery::range(3, 1)).unwrap_err();
        assert_eq!(err, FieldError::InvalidLineRange { start: 3, end: 1 });
        assert!(extract(&party::F59, &c, &LineQuery::range(0, 1)).is_err());
        let open = LineQuery { start: 0, ..LineQuery::default() };
        assert!(extract(&party::F59, &c, &open).is_err());
    }

    #[test]
    fn one_slash_goes_with_an_absent_component() {
        let c = generic::F20C.parse(":SEME//");
        assert_eq!(c.get(2), None);
        let line = extract(&generic::F20C, &c, &LineQuery::line(1)).unwrap();
        assert_eq!(line.as_deref(), Some(":SEME/"));
    }

    #[test]
    fn caller_components_untouched() {
        let c = generic::F20C.parse(":SEME//REF");
        let before = c.clone();
        let line = extract(&generic::F20C, &c, &LineQuery::from_offset(2)).unwrap();
        assert_eq!(line.as_deref(), Some("REF"));
        assert_eq!(c, before);
    }
}
