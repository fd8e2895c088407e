//! Tokenization primitives shared by every field grammar.
//!
//! All functions are total: they borrow from their input, never allocate,
//! and never panic. A missing match yields an empty slice or `None`, so a
//! grammar fed malformed text degrades to a partial result instead of
//! failing.
//!
//! "Numeric" here means an ASCII digit or `,`, the decimal mark of the
//! format, so that amounts such as `1234,56` are a single numeric run.

/// Returns `true` for characters that belong to a numeric run.
pub fn is_numeric_char(c: char) -> bool {
    c.is_ascii_digit() || c == ','
}

/// Longest leading run of letters; empty if the value starts with anything else.
pub fn alpha_prefix(s: &str) -> &str {
    leading(s, char::is_alphabetic)
}

/// Longest leading run of numeric characters.
pub fn numeric_prefix(s: &str) -> &str {
    leading(s, is_numeric_char)
}

/// Longest trailing run of letters.
pub fn alpha_suffix(s: &str) -> &str {
    trailing(s, char::is_alphabetic)
}

/// Longest trailing run of numeric characters.
pub fn numeric_suffix(s: &str) -> &str {
    trailing(s, is_numeric_char)
}

fn leading(s: &str, pred: impl Fn(char) -> bool) -> &str {
    let end = s
        .char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(s.len(), |(i, _)| i);
    &s[..end]
}

fn trailing(s: &str, pred: impl Fn(char) -> bool) -> &str {
    let start = s
        .char_indices()
        .rev()
        .find(|&(_, c)| !pred(c))
        .map_or(0, |(i, c)| i + c.len_utf8());
    &s[start..]
}

pub(crate) fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

/// Text before the first `delim`, or the whole value when `delim` is absent.
pub fn token_first<'a>(s: &'a str, delim: &str) -> Option<&'a str> {
    non_empty(s.split_once(delim).map_or(s, |(head, _)| head))
}

/// Text between the first and second `delim`.
///
/// When there is no second occurrence, everything after the first.
pub fn token_second<'a>(s: &'a str, delim: &str) -> Option<&'a str> {
    token_second_last(s, delim).and_then(|rest| token_first(rest, delim))
}

/// Everything after the first `delim`, later occurrences included.
pub fn token_second_last<'a>(s: &'a str, delim: &str) -> Option<&'a str> {
    s.split_once(delim).and_then(|(_, tail)| non_empty(tail))
}

/// Everything after the second `delim`, later occurrences included.
pub fn token_third_last<'a>(s: &'a str, delim: &str) -> Option<&'a str> {
    token_second_last(s, delim).and_then(|rest| token_second_last(rest, delim))
}

/// Split into physical lines.
///
/// Accepts CRLF, LF, or a lone CR as terminators. A trailing terminator
/// does not produce an extra empty line, and empty input yields no lines.
pub fn lines(s: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let b = s.as_bytes();
    let mut start = 0usize;
    let mut i = 0usize;
    while i < b.len() {
        match b[i] {
            b'\r' => {
                out.push(&s[start..i]);
                i += if b.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            b'\n' => {
                out.push(&s[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < b.len() {
        out.push(&s[start..]);
    }
    out
}

/// Split after the first `n` characters (not bytes).
///
/// Returns `None` when the value holds fewer than `n` characters.
pub fn split_chars(s: &str, n: usize) -> Option<(&str, &str)> {
    if n == 0 {
        return Some(("", s));
    }
    match s.char_indices().nth(n) {
        Some((i, _)) => Some(s.split_at(i)),
        None if s.chars().count() == n => Some((s, "")),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── prefixes / suffixes ─────────────────────────────────────────────

    #[test]
    fn alpha_and_numeric_prefix() {
        assert_eq!(alpha_prefix("EUR1234,56"), "EUR");
        assert_eq!(alpha_prefix("1234"), "");
        assert_eq!(alpha_prefix(""), "");
        assert_eq!(numeric_prefix("1234,56NTRF"), "1234,56");
        assert_eq!(numeric_prefix("ABC"), "");
    }

    #[test]
    fn alpha_and_numeric_suffix() {
        assert_eq!(numeric_suffix("EUR1234,56"), "1234,56");
        assert_eq!(numeric_suffix("EUR"), "");
        assert_eq!(alpha_suffix("1234XYZ"), "XYZ");
        assert_eq!(alpha_suffix("XYZ1"), "");
        assert_eq!(alpha_suffix("ABC"), "ABC");
    }

    #[test]
    fn multibyte_prefix_is_char_safe() {
        assert_eq!(alpha_prefix("€1"), "");
        assert_eq!(numeric_suffix("€12"), "12");
        assert_eq!(alpha_prefix("ÄÖ1"), "ÄÖ");
    }

    // ── tokens ──────────────────────────────────────────────────────────

    #[test]
    fn token_first_cases() {
        assert_eq!(token_first("QUAL//REF", "//"), Some("QUAL"));
        assert_eq!(token_first("NODELIM", "/"), Some("NODELIM"));
        assert_eq!(token_first("/LEADING", "/"), None);
        assert_eq!(token_first("", "/"), None);
    }

    #[test]
    fn token_second_cases() {
        assert_eq!(token_second("A/B/C", "/"), Some("B"));
        assert_eq!(token_second("A/B", "/"), Some("B"));
        assert_eq!(token_second("A//C", "/"), None);
        assert_eq!(token_second("A", "/"), None);
    }

    #[test]
    fn token_second_last_keeps_later_delimiters() {
        assert_eq!(token_second_last("A/B/C", "/"), Some("B/C"));
        assert_eq!(token_second_last("A/", "/"), None);
        assert_eq!(token_second_last("A", "/"), None);
    }

    #[test]
    fn token_third_last_cases() {
        assert_eq!(token_third_last("A/B/C/D", "/"), Some("C/D"));
        assert_eq!(token_third_last("A/B", "/"), None);
    }

    // ── lines ───────────────────────────────────────────────────────────

    #[test]
    fn lines_empty_input_is_empty() {
        assert!(lines("").is_empty());
    }

    #[test]
    fn lines_all_terminators() {
        assert_eq!(lines("a\r\nb\nc\rd"), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn lines_keep_inner_empty_lines() {
        assert_eq!(lines("a\r\n\r\nb"), vec!["a", "", "b"]);
        assert_eq!(lines("a\r\n"), vec!["a"]);
        assert_eq!(lines("\r\n"), vec![""]);
    }

    // ── split_chars ─────────────────────────────────────────────────────

    #[test]
    fn split_chars_cases() {
        assert_eq!(split_chars("090123EUR", 6), Some(("090123", "EUR")));
        assert_eq!(split_chars("0901", 4), Some(("0901", "")));
        assert_eq!(split_chars("09", 4), None);
        assert_eq!(split_chars("abc", 0), Some(("", "abc")));
        assert_eq!(split_chars("€€x", 2), Some(("€€", "x")));
    }
}
