//! Line-oriented parse and serialize for [`Narrative`].

use super::{InlineData, Narrative, NarrativeFormat, StructuredSegment};
use crate::tokenize::{lines, numeric_prefix};

const MAX_CODEWORD_LEN: usize = 8;

enum State {
    /// No segment seen yet.
    Start,
    /// Inside a segment; `supplement` once a supplement line was seen.
    Segment { supplement: bool },
    /// Every remaining line is unstructured.
    Unstructured,
}

/// Split `/CODEWORD/rest` into `("CODEWORD", "rest")`.
///
/// The codeword is 1 to 8 ASCII alphanumerics between the first two slashes.
pub(super) fn codeword_marker(line: &str) -> Option<(&str, &str)> {
    let body = line.strip_prefix('/')?;
    let (codeword, rest) = body.split_once('/')?;
    let valid = !codeword.is_empty()
        && codeword.len() <= MAX_CODEWORD_LEN
        && codeword.bytes().all(|b| b.is_ascii_alphanumeric());
    valid.then_some((codeword, rest))
}

pub(super) fn parse(text: &str, format: NarrativeFormat) -> Narrative {
    let mut segments: Vec<StructuredSegment> = Vec::new();
    let mut unstructured = Vec::new();
    let mut state = State::Start;

    for line in lines(text) {
        if matches!(state, State::Unstructured) {
            unstructured.push(line.to_owned());
            continue;
        }
        if let Some((codeword, rest)) = codeword_marker(line) {
            segments.push(open_segment(codeword, rest, format));
            state = State::Segment { supplement: false };
            continue;
        }
        let current = match (&state, segments.last_mut()) {
            (State::Segment { supplement }, Some(seg)) => Some((*supplement, seg)),
            _ => None,
        };
        match current {
            Some((supplement, seg)) if line.starts_with("//") => {
                let text = line[2..].to_owned();
                if supplement {
                    seg.supplement_fragments.push(text);
                } else {
                    seg.narrative_fragments.push(text);
                }
            }
            Some((_, seg)) if line.starts_with('/') => {
                seg.supplement_fragments.push(line[1..].to_owned());
                state = State::Segment { supplement: true };
            }
            _ => {
                unstructured.push(line.to_owned());
                state = State::Unstructured;
            }
        }
    }

    Narrative::new(segments, unstructured)
}

/// Build a segment from the text following its codeword marker.
fn open_segment(codeword: &str, rest: &str, format: NarrativeFormat) -> StructuredSegment {
    let mut seg = StructuredSegment::new(codeword);
    match format.inline {
        InlineData::None => seg.narrative_fragments.push(rest.to_owned()),
        InlineData::Country => match upper_code(rest, 2) {
            Some((country, after)) if after.is_empty() || after.starts_with("//") => {
                seg.country = Some(country.to_owned());
                let text = after.strip_prefix("//").unwrap_or("");
                seg.narrative_fragments.push(text.to_owned());
            }
            _ => seg.narrative_fragments.push(rest.to_owned()),
        },
        InlineData::CurrencyAmount => {
            let inline = upper_code(rest, 3).and_then(|(ccy, after)| {
                let amount = numeric_prefix(after);
                (!amount.is_empty()).then(|| (ccy, amount, &after[amount.len()..]))
            });
            match inline {
                Some((ccy, amount, text)) => {
                    seg.currency = Some(ccy.to_owned());
                    seg.amount = Some(amount.to_owned());
                    seg.narrative_fragments.push(text.to_owned());
                }
                None => seg.narrative_fragments.push(rest.to_owned()),
            }
        }
    }
    seg
}

/// Leading run of exactly `n` ASCII uppercase letters, and what follows.
fn upper_code(s: &str, n: usize) -> Option<(&str, &str)> {
    let b = s.as_bytes();
    (b.len() >= n && b[..n].iter().all(u8::is_ascii_uppercase)).then(|| s.split_at(n))
}

pub(super) fn serialize(narrative: &Narrative, line_break: &str) -> String {
    let mut out: Vec<String> = Vec::new();

    for seg in narrative.segments() {
        let mut first = format!("/{}/", seg.codeword);
        let mut fragments = seg.narrative_fragments.iter();
        if let Some(country) = &seg.country {
            first.push_str(country);
            if let Some(f) = fragments.next().filter(|f| !f.is_empty()) {
                first.push_str("//");
                first.push_str(f);
            }
        } else {
            if let Some(ccy) = &seg.currency {
                first.push_str(ccy);
            }
            if let Some(amount) = &seg.amount {
                first.push_str(amount);
            }
            if let Some(f) = fragments.next() {
                first.push_str(f);
            }
        }
        out.push(first);
        out.extend(fragments.map(|f| format!("//{f}")));

        for (i, s) in seg.supplement_fragments.iter().enumerate() {
            let marker = if i == 0 { "/" } else { "//" };
            out.push(format!("{marker}{s}"));
        }
    }

    out.extend(narrative.unstructured_fragments().iter().cloned());
    out.join(line_break)
}
