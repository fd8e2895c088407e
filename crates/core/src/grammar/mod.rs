//! Field grammars: one `parse`/`serialize` pair per field type.
//!
//! Grammars are grouped by strategy. Each strategy is a small struct that
//! holds the field's [`FieldDescriptor`]; every registered field type is a
//! `static` instance of one of them.

/// Remainder-consuming cursor used by composite grammars.
pub mod cursor;
/// Mark and sign dispatch tables shared by several grammars.
pub mod dispatch;

/// Amount-shaped fields (32A, 32B, 33B, 60F, 62F).
pub mod amount;
/// Multi-line free text and narrative fields (72, 71B, 77B).
pub mod free_text;
/// Generic `:QUAL//...` fields (20C, 22F, 98A, 98C, 98E, 69B).
pub mod generic;
/// Party and security identification fields (59, 35B).
pub mod party;
/// Statement line (61).
pub mod statement;

use crate::component::ComponentSet;
use crate::descriptor::FieldDescriptor;
use cursor::Cursor;

/// Line terminator emitted by every grammar.
pub const CRLF: &str = "\r\n";

/// The parse/serialize pair for one field type.
///
/// `parse` never fails: text it cannot account for leaves components absent.
/// For any value produced by `serialize`, `serialize(parse(v)) == v`.
pub trait Grammar: Send + Sync + std::fmt::Debug {
    /// Static metadata for the field type.
    fn descriptor(&self) -> &'static FieldDescriptor;

    /// Split a raw value into components.
    fn parse(&self, value: &str) -> ComponentSet;

    /// Join components back into a raw value.
    fn serialize(&self, components: &ComponentSet) -> String;

    /// Full field name, e.g. `"98E"`.
    fn name(&self) -> String {
        self.descriptor().name()
    }

    /// An empty component set of the declared length.
    fn empty(&self) -> ComponentSet {
        ComponentSet::new(self.descriptor().component_count())
    }
}

/// Split off the first physical line; the remainder keeps its terminators.
pub(crate) fn split_first_line(s: &str) -> (&str, Option<&str>) {
    match s.find(['\r', '\n']) {
        Some(i) => {
            let rest = &s[i..];
            let rest = rest
                .strip_prefix("\r\n")
                .or_else(|| rest.strip_prefix('\n'))
                .or_else(|| rest.strip_prefix('\r'))
                .unwrap_or(rest);
            (&s[..i], Some(rest))
        }
        None => (s, None),
    }
}

/// Store `lines` into components `from..=last`; lines beyond the last
/// component are kept in it, joined with CRLF.
pub(crate) fn put_lines(c: &mut ComponentSet, from: usize, lines: &[&str]) {
    let last = c.len();
    if from > last {
        return;
    }
    let slots = last - from + 1;
    for (k, line) in lines.iter().enumerate().take(slots.saturating_sub(1)) {
        c.put(from + k, Some(line));
    }
    if lines.len() >= slots {
        let overflow = lines[slots - 1..].join(CRLF);
        c.put(last, Some(&overflow));
    }
}

/// Component `i` as text, empty when absent.
pub(crate) fn part(c: &ComponentSet, i: usize) -> &str {
    c.get(i).unwrap_or("")
}

/// `true` when no component holds any text.
pub(crate) fn all_absent(c: &ComponentSet) -> bool {
    c.iter().all(|(_, v)| v.is_none_or(str::is_empty))
}

/// Slice `text` into components `from..` by character widths.
///
/// The last width takes whatever remains. When the text runs short, the
/// component being filled takes the rest and the following ones stay absent.
pub(crate) fn put_slices(c: &mut ComponentSet, from: usize, text: &str, widths: &[usize]) {
    let mut cur = Cursor::new(text);
    for (k, &width) in widths.iter().enumerate() {
        let token = if k + 1 == widths.len() {
            cur.take_rest()
        } else {
            cur.take(width).unwrap_or_else(|| cur.take_rest())
        };
        c.put(from + k, Some(token));
    }
}

/// Non-empty components `from..=len(c)`, one per output line.
pub(crate) fn collect_lines(c: &ComponentSet, from: usize) -> Vec<&str> {
    (from..=c.len()).filter_map(|i| c.get_non_empty(i)).collect()
}
