//! Field 61, the statement line.
//!
//! ```text
//! 6!n[4!n]2a[1!a]15d1!a3!c16x[//16x]
//! [34x]
//! ```
//!
//! Offsets on the first line depend on which optional parts are present, so
//! parsing runs a fixed sequence of steps over a shrinking remainder.

use super::cursor::Cursor;
use super::dispatch::mark_len;
use super::{CRLF, Grammar, split_first_line};
use crate::component::ComponentSet;
use crate::descriptor::{ComponentSpec, ComponentType as T, FieldDescriptor};
use crate::tokenize::numeric_prefix;

/// Statement line grammar.
#[derive(Debug)]
pub struct StatementLine {
    descriptor: &'static FieldDescriptor,
}

impl Grammar for StatementLine {
    fn descriptor(&self) -> &'static FieldDescriptor {
        self.descriptor
    }

    fn parse(&self, value: &str) -> ComponentSet {
        let mut c = self.empty();
        let (first, second) = split_first_line(value);
        c.put(10, second);

        let mut cur = Cursor::new(first);
        let Some(value_date) = cur.take(6) else {
            c.put(1, Some(cur.take_rest()));
            return c;
        };
        c.put(1, Some(value_date));
        c.put(2, cur.take_if(4, |ch| ch.is_ascii_digit()));
        let mark = mark_len(cur.rest());
        c.put(3, cur.take(mark));
        c.put(4, cur.take_if(1, |ch| ch.is_ascii_alphabetic()));
        c.put(5, Some(cur.take_with(numeric_prefix)));
        c.put(6, Some(cur.take_up_to(1)));
        c.put(7, Some(cur.take_up_to(3)));
        c.put(8, Some(cur.take_until("//")));
        if cur.eat("//") {
            c.put(9, Some(cur.take_rest()));
        }
        c
    }

    fn serialize(&self, c: &ComponentSet) -> String {
        let mut out = c.join_range(1, 8);
        if let Some(servicing) = c.get_non_empty(9) {
            out.push_str("//");
            out.push_str(servicing);
        }
        if let Some(details) = c.get_non_empty(10) {
            out.push_str(CRLF);
            out.push_str(details);
        }
        out
    }
}

static D61: FieldDescriptor = FieldDescriptor {
    number: "61",
    letter: None,
    components: &[
        ComponentSpec::required("Value Date", T::Date),
        ComponentSpec::optional("Entry Date", T::Date),
        ComponentSpec::required("D/C Mark", T::Sign),
        ComponentSpec::optional("Funds Code", T::Code),
        ComponentSpec::required("Amount", T::Amount),
        ComponentSpec::required("Transaction Type", T::Code),
        ComponentSpec::required("Identification Code", T::Code),
        ComponentSpec::required("Reference for the Account Owner", T::Text),
        ComponentSpec::optional("Reference of the Account Servicing Institution", T::Text),
        ComponentSpec::optional("Supplementary Details", T::Text),
    ],
    generic: None,
    line_length: None,
    narrative: None,
};

/// Field 61, statement line.
pub static F61: StatementLine = StatementLine { descriptor: &D61 };
