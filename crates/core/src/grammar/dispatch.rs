use crate::tokenize::{alpha_prefix, non_empty, split_chars};

/// A debit/credit style mark followed by a letter code and a numeric part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkSplit<'a> {
    /// `D`, `C`, or a two-character reversal/expected mark (`RD`, `RC`, `ED`, `EC`).
    pub mark: Option<&'a str>,
    /// Leading letters after the mark.
    pub letters: Option<&'a str>,
    /// Everything after the letters.
    pub code: Option<&'a str>,
}

/// Length of the mark at the start of `s`, chosen by its first character.
///
/// `D` and `C` are one-character marks; `R` and `E` open a two-character
/// mark. Anything else is no mark.
pub fn mark_len(s: &str) -> usize {
    match s.as_bytes().first() {
        Some(b'D' | b'C') => 1,
        Some(b'R' | b'E') => s.chars().count().min(2),
        _ => 0,
    }
}

/// Split a marked token by first-character dispatch.
///
/// `"C"` gives mark `C` and no code, `"RD1234"` gives mark `RD` and code
/// `1234`, `"D5678"` gives mark `D` and code `5678`.
pub fn split_mark(s: &str) -> MarkSplit<'_> {
    let (mark, rest) = split_chars(s, mark_len(s)).unwrap_or(("", s));
    let letters = alpha_prefix(rest);
    MarkSplit {
        mark: non_empty(mark),
        letters: non_empty(letters),
        code: non_empty(&rest[letters.len()..]),
    }
}

/// A UTC offset `[N]HH[MM]`: optional sign, hours, optional minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UtcOffset<'a> {
    /// Sign indicator, `N` for negative.
    pub sign: Option<&'a str>,
    /// Two-digit hours.
    pub hours: Option<&'a str>,
    /// Two-digit minutes.
    pub minutes: Option<&'a str>,
}

/// Decode a UTC offset token, keyed on its length in characters.
///
/// | length | reading                 |
/// |--------|-------------------------|
/// | 0–1    | sign only               |
/// | 2      | hours                   |
/// | 3      | sign, hours             |
/// | 4      | hours, minutes          |
/// | ≥ 5    | sign, hours, minutes    |
///
/// The last row takes the sign as the token's alpha prefix and splits the
/// numeric remainder into two hour digits and the minutes.
pub fn split_utc_offset(token: &str) -> UtcOffset<'_> {
    match token.chars().count() {
        0 | 1 => UtcOffset {
            sign: non_empty(token),
            ..UtcOffset::default()
        },
        2 => UtcOffset {
            hours: Some(token),
            ..UtcOffset::default()
        },
        3 => {
            let (sign, hours) = split_chars(token, 1).unwrap_or(("", token));
            UtcOffset {
                sign: non_empty(sign),
                hours: non_empty(hours),
                minutes: None,
            }
        }
        4 => {
            let (hours, minutes) = split_chars(token, 2).unwrap_or((token, ""));
            UtcOffset {
                sign: None,
                hours: non_empty(hours),
                minutes: non_empty(minutes),
            }
        }
        _ => {
            let sign = alpha_prefix(token);
            let digits = &token[sign.len()..];
            let (hours, minutes) = split_chars(digits, 2).unwrap_or((digits, ""));
            UtcOffset {
                sign: non_empty(sign),
                hours: non_empty(hours),
                minutes: non_empty(minutes),
            }
        }
    }
}
