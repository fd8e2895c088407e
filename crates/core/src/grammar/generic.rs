//! Generic fields: a `:QUAL` qualifier, an optional Data Source Scheme,
//! and a payload after `//`.

use super::cursor::Cursor;
use super::dispatch::split_utc_offset;
use super::{Grammar, all_absent, part, put_slices};
use crate::component::ComponentSet;
use crate::descriptor::{ComponentSpec, ComponentType as T, FieldDescriptor, GenericShape};
use crate::tokenize::{token_first, token_second_last};

const NO_DSS: Option<GenericShape> = Some(GenericShape { dss: false });

/// Split `:QUAL//payload` into qualifier and payload.
fn split_qualified(value: &str) -> (Option<&str>, Option<&str>) {
    let body = value.strip_prefix(':').unwrap_or(value);
    (token_first(body, "//"), token_second_last(body, "//"))
}

// ── 20C ─────────────────────────────────────────────────────────────────

/// `:4!c//16x`: qualifier and a single payload component.
#[derive(Debug)]
pub struct Qualified {
    descriptor: &'static FieldDescriptor,
}

impl Grammar for Qualified {
    fn descriptor(&self) -> &'static FieldDescriptor {
        self.descriptor
    }

    fn parse(&self, value: &str) -> ComponentSet {
        let mut c = self.empty();
        let (qualifier, payload) = split_qualified(value);
        c.put(1, qualifier);
        c.put(2, payload);
        c
    }

    fn serialize(&self, c: &ComponentSet) -> String {
        if all_absent(c) {
            return String::new();
        }
        format!(":{}//{}", part(c, 1), part(c, 2))
    }
}

static D20C: FieldDescriptor = FieldDescriptor {
    number: "20",
    letter: Some('C'),
    components: &[
        ComponentSpec::required("Qualifier", T::Code),
        ComponentSpec::required("Reference", T::Text),
    ],
    generic: NO_DSS,
    line_length: None,
    narrative: None,
};

/// Field 20C, reference.
pub static F20C: Qualified = Qualified { descriptor: &D20C };

// ── 22F ─────────────────────────────────────────────────────────────────

/// `:4!c/[8c]/4!c`: qualifier, optional DSS, indicator.
#[derive(Debug)]
pub struct QualifiedDss {
    descriptor: &'static FieldDescriptor,
}

impl Grammar for QualifiedDss {
    fn descriptor(&self) -> &'static FieldDescriptor {
        self.descriptor
    }

    fn parse(&self, value: &str) -> ComponentSet {
        let mut c = self.empty();
        let body = value.strip_prefix(':').unwrap_or(value);
        c.put(1, token_first(body, "/"));
        if let Some(rest) = token_second_last(body, "/") {
            c.put(2, token_first(rest, "/"));
            c.put(3, token_second_last(rest, "/"));
        }
        c
    }

    fn serialize(&self, c: &ComponentSet) -> String {
        if all_absent(c) {
            return String::new();
        }
        format!(":{}/{}/{}", part(c, 1), part(c, 2), part(c, 3))
    }
}

static D22F: FieldDescriptor = FieldDescriptor {
    number: "22",
    letter: Some('F'),
    components: &[
        ComponentSpec::required("Qualifier", T::Code),
        ComponentSpec::optional("Data Source Scheme", T::Code),
        ComponentSpec::required("Indicator", T::Code),
    ],
    generic: Some(GenericShape { dss: true }),
    line_length: None,
    narrative: None,
};

/// Field 22F, indicator.
pub static F22F: QualifiedDss = QualifiedDss { descriptor: &D22F };

// ── 98A, 98C, 69B ───────────────────────────────────────────────────────

/// `:4!c//` followed by `/`-separated groups of fixed-width components.
#[derive(Debug)]
pub struct QualifiedSlices {
    descriptor: &'static FieldDescriptor,
    groups: &'static [&'static [usize]],
}

impl Grammar for QualifiedSlices {
    fn descriptor(&self) -> &'static FieldDescriptor {
        self.descriptor
    }

    fn parse(&self, value: &str) -> ComponentSet {
        let mut c = self.empty();
        let (qualifier, payload) = split_qualified(value);
        c.put(1, qualifier);

        let mut rest = payload.unwrap_or("");
        let mut index = 2;
        for (g, widths) in self.groups.iter().enumerate() {
            let (group, tail) = if g + 1 == self.groups.len() {
                (rest, "")
            } else {
                rest.split_once('/').unwrap_or((rest, ""))
            };
            put_slices(&mut c, index, group, widths);
            index += widths.len();
            rest = tail;
        }
        c
    }

    fn serialize(&self, c: &ComponentSet) -> String {
        if all_absent(c) {
            return String::new();
        }
        let mut index = 2;
        let mut groups: Vec<String> = self
            .groups
            .iter()
            .map(|widths| {
                let text = c.join_range(index, index + widths.len() - 1);
                index += widths.len();
                text
            })
            .collect();
        while groups.last().is_some_and(String::is_empty) {
            groups.pop();
        }
        format!(":{}//{}", part(c, 1), groups.join("/"))
    }
}

static D98A: FieldDescriptor = FieldDescriptor {
    number: "98",
    letter: Some('A'),
    components: &[
        ComponentSpec::required("Qualifier", T::Code),
        ComponentSpec::required("Date", T::Date),
    ],
    generic: NO_DSS,
    line_length: None,
    narrative: None,
};

static D98C: FieldDescriptor = FieldDescriptor {
    number: "98",
    letter: Some('C'),
    components: &[
        ComponentSpec::required("Qualifier", T::Code),
        ComponentSpec::required("Date", T::Date),
        ComponentSpec::required("Time", T::Time),
    ],
    generic: NO_DSS,
    line_length: None,
    narrative: None,
};

static D69B: FieldDescriptor = FieldDescriptor {
    number: "69",
    letter: Some('B'),
    components: &[
        ComponentSpec::required("Qualifier", T::Code),
        ComponentSpec::required("Start Date", T::Date),
        ComponentSpec::required("Start Time", T::Time),
        ComponentSpec::required("End Date", T::Date),
        ComponentSpec::required("End Time", T::Time),
    ],
    generic: NO_DSS,
    line_length: None,
    narrative: None,
};

/// Field 98A, date.
pub static F98A: QualifiedSlices = QualifiedSlices {
    descriptor: &D98A,
    groups: &[&[8]],
};

/// Field 98C, date and time.
pub static F98C: QualifiedSlices = QualifiedSlices {
    descriptor: &D98C,
    groups: &[&[8, 6]],
};

/// Field 69B, period between two date-times.
pub static F69B: QualifiedSlices = QualifiedSlices {
    descriptor: &D69B,
    groups: &[&[8, 6], &[8, 6]],
};

// ── 98E ─────────────────────────────────────────────────────────────────

/// `:4!c//8!n6!n[,3n][/[N]2!n[2!n]]`: date-time with optional decimals
/// and UTC offset.
#[derive(Debug)]
pub struct QualifiedDateTime {
    descriptor: &'static FieldDescriptor,
}

impl Grammar for QualifiedDateTime {
    fn descriptor(&self) -> &'static FieldDescriptor {
        self.descriptor
    }

    fn parse(&self, value: &str) -> ComponentSet {
        let mut c = self.empty();
        let (qualifier, payload) = split_qualified(value);
        c.put(1, qualifier);

        let payload = payload.unwrap_or("");
        let (main, offset) = match payload.split_once('/') {
            Some((main, offset)) => (main, Some(offset)),
            None => (payload, None),
        };

        let mut cur = Cursor::new(main);
        let date = cur.take(8).unwrap_or_else(|| cur.take_until(","));
        let time = cur.take(6).unwrap_or_else(|| cur.take_until(","));
        cur.eat(",");
        c.put(2, Some(date));
        c.put(3, Some(time));
        c.put(4, Some(cur.take_rest()));

        if let Some(token) = offset {
            let utc = split_utc_offset(token);
            c.put(5, utc.sign);
            c.put(6, utc.hours);
            c.put(7, utc.minutes);
        }
        c
    }

    fn serialize(&self, c: &ComponentSet) -> String {
        if all_absent(c) {
            return String::new();
        }
        let mut out = format!(":{}//{}{}", part(c, 1), part(c, 2), part(c, 3));
        if let Some(decimals) = c.get_non_empty(4) {
            out.push(',');
            out.push_str(decimals);
        }
        let offset = c.join_range(5, 7);
        if !offset.is_empty() {
            out.push('/');
            out.push_str(&offset);
        }
        out
    }
}

static D98E: FieldDescriptor = FieldDescriptor {
    number: "98",
    letter: Some('E'),
    components: &[
        ComponentSpec::required("Qualifier", T::Code),
        ComponentSpec::required("Date", T::Date),
        ComponentSpec::required("Time", T::Time),
        ComponentSpec::optional("Decimals", T::Number),
        ComponentSpec::optional("UTC Sign", T::Sign),
        ComponentSpec::optional("UTC Hours", T::Number),
        ComponentSpec::optional("UTC Minutes", T::Number),
    ],
    generic: NO_DSS,
    line_length: None,
    narrative: None,
};

/// Field 98E, date-time with decimals and UTC indicator.
pub static F98E: QualifiedDateTime = QualifiedDateTime { descriptor: &D98E };
