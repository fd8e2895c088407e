//! Amount-shaped fields.

use super::{Grammar, put_slices};
use crate::component::ComponentSet;
use crate::descriptor::{ComponentSpec, ComponentType as T, FieldDescriptor};
use crate::tokenize::{alpha_prefix, numeric_suffix};

/// Consecutive fixed-width components; the last one is open-ended.
#[derive(Debug)]
pub struct FixedWidth {
    descriptor: &'static FieldDescriptor,
    widths: &'static [usize],
}

impl Grammar for FixedWidth {
    fn descriptor(&self) -> &'static FieldDescriptor {
        self.descriptor
    }

    fn parse(&self, value: &str) -> ComponentSet {
        let mut c = self.empty();
        put_slices(&mut c, 1, value, self.widths);
        c
    }

    fn serialize(&self, c: &ComponentSet) -> String {
        c.join(1, false)
    }
}

/// `3!a15d`: currency as the alpha prefix, amount as the numeric suffix.
#[derive(Debug)]
pub struct CurrencyAmount {
    descriptor: &'static FieldDescriptor,
}

impl Grammar for CurrencyAmount {
    fn descriptor(&self) -> &'static FieldDescriptor {
        self.descriptor
    }

    fn parse(&self, value: &str) -> ComponentSet {
        let mut c = self.empty();
        c.put(1, Some(alpha_prefix(value)));
        c.put(2, Some(numeric_suffix(value)));
        c
    }

    fn serialize(&self, c: &ComponentSet) -> String {
        c.join(1, false)
    }
}

const CURRENCY_AMOUNT: &[ComponentSpec] = &[
    ComponentSpec::required("Currency", T::Currency),
    ComponentSpec::required("Amount", T::Amount),
];

const VALUE_DATE_AMOUNT: &[ComponentSpec] = &[
    ComponentSpec::required("Date", T::Date),
    ComponentSpec::required("Currency", T::Currency),
    ComponentSpec::required("Amount", T::Amount),
];

const BALANCE: &[ComponentSpec] = &[
    ComponentSpec::required("D/C Mark", T::Sign),
    ComponentSpec::required("Date", T::Date),
    ComponentSpec::required("Currency", T::Currency),
    ComponentSpec::required("Amount", T::Amount),
];

const fn plain(
    number: &'static str,
    letter: char,
    components: &'static [ComponentSpec],
) -> FieldDescriptor {
    FieldDescriptor {
        number,
        letter: Some(letter),
        components,
        generic: None,
        line_length: None,
        narrative: None,
    }
}

static D32A: FieldDescriptor = plain("32", 'A', VALUE_DATE_AMOUNT);
static D32B: FieldDescriptor = plain("32", 'B', CURRENCY_AMOUNT);
static D33B: FieldDescriptor = plain("33", 'B', CURRENCY_AMOUNT);
static D60F: FieldDescriptor = plain("60", 'F', BALANCE);
static D62F: FieldDescriptor = plain("62", 'F', BALANCE);

/// Field 32A, value date, currency and amount.
pub static F32A: FixedWidth = FixedWidth {
    descriptor: &D32A,
    widths: &[6, 3, 15],
};

/// Field 32B, currency and amount.
pub static F32B: CurrencyAmount = CurrencyAmount { descriptor: &D32B };

/// Field 33B, instructed currency and amount.
pub static F33B: CurrencyAmount = CurrencyAmount { descriptor: &D33B };

/// Field 60F, opening balance.
pub static F60F: FixedWidth = FixedWidth {
    descriptor: &D60F,
    widths: &[1, 6, 3, 15],
};

/// Field 62F, closing balance.
pub static F62F: FixedWidth = FixedWidth {
    descriptor: &D62F,
    widths: &[1, 6, 3, 15],
};
