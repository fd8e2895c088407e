//! Multi-line party and security identification fields.

use super::{CRLF, Grammar, collect_lines, put_lines, split_first_line};
use crate::component::ComponentSet;
use crate::descriptor::{ComponentSpec, ComponentType as T, FieldDescriptor};
use crate::tokenize::lines;

const ISIN: &str = "ISIN";

/// `[/34x]` then `4*35x`: optional account line, then name and address.
#[derive(Debug)]
pub struct AccountLines {
    descriptor: &'static FieldDescriptor,
}

impl Grammar for AccountLines {
    fn descriptor(&self) -> &'static FieldDescriptor {
        self.descriptor
    }

    fn parse(&self, value: &str) -> ComponentSet {
        let mut c = self.empty();
        let mut rows = lines(value);
        if let Some(account) = rows.first().copied().and_then(|l| l.strip_prefix('/')) {
            c.put(1, Some(account));
            rows.remove(0);
        }
        put_lines(&mut c, 2, &rows);
        c
    }

    fn serialize(&self, c: &ComponentSet) -> String {
        let account = c.get_non_empty(1).map(|a| format!("/{a}"));
        account
            .iter()
            .map(String::as_str)
            .chain(collect_lines(c, 2))
            .collect::<Vec<_>>()
            .join(CRLF)
    }
}

/// `[ISIN1!e12!c]` then `[4*35x]`: optional ISIN line, then description.
#[derive(Debug)]
pub struct SecurityLines {
    descriptor: &'static FieldDescriptor,
}

impl Grammar for SecurityLines {
    fn descriptor(&self) -> &'static FieldDescriptor {
        self.descriptor
    }

    fn parse(&self, value: &str) -> ComponentSet {
        let mut c = self.empty();
        let (first, rest) = split_first_line(value);
        let isin = first
            .strip_prefix(ISIN)
            .filter(|code| code.is_empty() || code.starts_with(' '));
        match isin {
            Some(code) => {
                c.put(1, Some(ISIN));
                c.put(2, code.strip_prefix(' '));
                put_lines(&mut c, 3, &lines(rest.unwrap_or("")));
            }
            None => put_lines(&mut c, 3, &lines(value)),
        }
        c
    }

    fn serialize(&self, c: &ComponentSet) -> String {
        let head: Vec<&str> = [c.get_non_empty(1), c.get_non_empty(2)]
            .into_iter()
            .flatten()
            .collect();
        let head = head.join(" ");
        let mut rows = Vec::new();
        if !head.is_empty() {
            rows.push(head.as_str());
        }
        rows.extend(collect_lines(c, 3));
        rows.join(CRLF)
    }
}

static D59: FieldDescriptor = FieldDescriptor {
    number: "59",
    letter: None,
    components: &[
        ComponentSpec::optional("Account", T::Account),
        ComponentSpec::required("Name And Address", T::Text),
        ComponentSpec::optional("Name And Address 2", T::Text),
        ComponentSpec::optional("Name And Address 3", T::Text),
        ComponentSpec::optional("Name And Address 4", T::Text),
    ],
    generic: None,
    line_length: Some(35),
    narrative: None,
};

static D35B: FieldDescriptor = FieldDescriptor {
    number: "35",
    letter: Some('B'),
    components: &[
        ComponentSpec::optional("Identification of Security", T::Code),
        ComponentSpec::optional("ISIN", T::Isin),
        ComponentSpec::optional("Description", T::Text),
        ComponentSpec::optional("Description 2", T::Text),
        ComponentSpec::optional("Description 3", T::Text),
        ComponentSpec::optional("Description 4", T::Text),
    ],
    generic: None,
    line_length: Some(35),
    narrative: None,
};

/// Field 59, beneficiary customer.
pub static F59: AccountLines = AccountLines { descriptor: &D59 };

/// Field 35B, identification of the financial instrument.
pub static F35B: SecurityLines = SecurityLines { descriptor: &D35B };
