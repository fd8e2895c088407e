//! Incremental construction of a [`Narrative`] from whole strings.

use super::{Narrative, StructuredSegment};
use crate::config::NarrativeConfig;
use crate::tokenize::split_chars;

/// Width of the `//` continuation marker.
const CONTINUATION: usize = 2;

/// Builds a [`Narrative`], wrapping text into line-sized fragments.
///
/// Wrapping budgets account for the markers each physical line carries:
/// the first line of a segment loses `/CODEWORD/` plus any inline data,
/// every following line loses the two-character `//`.
#[derive(Debug, Clone, Default)]
pub struct NarrativeBuilder {
    config: NarrativeConfig,
    segments: Vec<StructuredSegment>,
    unstructured: Vec<String>,
}

impl NarrativeBuilder {
    /// Builder using `config.line_length` as the wrap width.
    pub fn new(config: NarrativeConfig) -> Self {
        Self {
            config,
            segments: Vec::new(),
            unstructured: Vec::new(),
        }
    }

    fn continuation_budget(&self) -> usize {
        self.config.line_length.saturating_sub(CONTINUATION)
    }

    /// Add a segment `/codeword/narrative`.
    pub fn codeword(self, codeword: &str, narrative: &str) -> Self {
        self.push_segment(StructuredSegment::new(codeword), 0, narrative)
    }

    /// Add a segment `/codeword/CCYAMOUNTnarrative`.
    pub fn codeword_with_amount(
        self,
        codeword: &str,
        currency: &str,
        amount: &str,
        narrative: &str,
    ) -> Self {
        let mut seg = StructuredSegment::new(codeword);
        seg.currency = Some(currency.to_owned());
        seg.amount = Some(amount.to_owned());
        let inline = currency.chars().count() + amount.chars().count();
        self.push_segment(seg, inline, narrative)
    }

    /// Add a segment `/codeword/CC//narrative`.
    pub fn codeword_with_country(self, codeword: &str, country: &str, narrative: &str) -> Self {
        let mut seg = StructuredSegment::new(codeword);
        seg.country = Some(country.to_owned());
        let inline = country.chars().count() + CONTINUATION;
        self.push_segment(seg, inline, narrative)
    }

    fn push_segment(mut self, mut seg: StructuredSegment, inline: usize, narrative: &str) -> Self {
        let marker = seg.codeword.chars().count() + 2;
        let first = self.config.line_length.saturating_sub(marker + inline);
        seg.narrative_fragments = wrap(narrative, first, self.continuation_budget());
        if seg.narrative_fragments.is_empty() {
            seg.narrative_fragments.push(String::new());
        }
        self.segments.push(seg);
        self
    }

    /// Attach supplementary text to the last segment.
    ///
    /// Without a preceding segment the text is added as unstructured.
    pub fn supplement(mut self, text: &str) -> Self {
        if self.segments.is_empty() {
            tracing::debug!("supplement without a codeword segment kept as unstructured");
            return self.unstructured(text);
        }
        let first = self.config.line_length.saturating_sub(1);
        let rest = self.continuation_budget();
        if let Some(seg) = self.segments.last_mut() {
            seg.supplement_fragments.extend(wrap(text, first, rest));
        }
        self
    }

    /// Add free text that belongs to no codeword.
    pub fn unstructured(mut self, text: &str) -> Self {
        let width = self.config.line_length;
        self.unstructured.extend(wrap(text, width, width));
        self
    }

    /// Freeze the narrative.
    pub fn build(self) -> Narrative {
        Narrative::new(self.segments, self.unstructured)
    }
}

/// Greedy word wrap into fragments of at most `first` characters for the
/// first fragment and `rest` for the others. Words longer than a whole line
/// are split. A zero `first` budget yields an empty first fragment.
fn wrap(text: &str, first: usize, rest: usize) -> Vec<String> {
    let rest = rest.max(1);
    let mut out: Vec<String> = Vec::new();
    if text.trim().is_empty() {
        return out;
    }
    if first == 0 {
        out.push(String::new());
    }
    let budget = |done: usize| if done == 0 { first } else { rest };

    let mut line = String::new();
    let mut line_len = 0usize;
    for word in text.split_whitespace() {
        let mut word = word;
        loop {
            let width = budget(out.len());
            let word_len = word.chars().count();
            let needed = if line_len == 0 {
                word_len
            } else {
                line_len + 1 + word_len
            };
            if needed <= width {
                if line_len > 0 {
                    line.push(' ');
                    line_len += 1;
                }
                line.push_str(word);
                line_len += word_len;
                break;
            }
            if line_len > 0 {
                out.push(std::mem::take(&mut line));
                line_len = 0;
                continue;
            }
            let (head, tail) = split_chars(word, width).unwrap_or((word, ""));
            out.push(head.to_owned());
            word = tail;
            if word.is_empty() {
                break;
            }
        }
    }
    if line_len > 0 {
        out.push(line);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrative::{InlineData, NarrativeFormat};

    #[test]
    fn wrap_fits_on_one_line() {
        assert_eq!(wrap("short text", 20, 20), vec!["short text"]);
        assert!(wrap("   ", 20, 20).is_empty());
    }

    #[test]
    fn wrap_uses_first_and_rest_budgets() {
        let out = wrap("aaaa bbbb cccc dddd", 9, 4);
        assert_eq!(out, vec!["aaaa bbbb", "cccc", "dddd"]);
    }

    #[test]
    fn wrap_hard_splits_long_words() {
        let out = wrap("abcdefghij", 4, 3);
        assert_eq!(out, vec!["abcd", "efg", "hij"]);
    }

    #[test]
    fn wrap_zero_first_budget() {
        let out = wrap("abc", 0, 5);
        assert_eq!(out, vec!["", "abc"]);
    }

    #[test]
    fn codeword_first_line_budget() {
        // 35 - "/BNF/" = 30 characters on the first line, 33 after "//".
        let text = "a".repeat(30) + " " + &"b".repeat(33) + " c";
        let n = NarrativeBuilder::new(NarrativeConfig::default())
            .codeword("BNF", &text)
            .build();
        let seg = &n.segments()[0];
        assert_eq!(seg.narrative_fragments[0].len(), 30);
        assert_eq!(seg.narrative_fragments[1].len(), 33);
        assert_eq!(seg.narrative_fragments[2], "c");
        for line in n.serialize(&NarrativeConfig::default()).lines() {
            assert!(line.len() <= 35, "line too long: {line:?}");
        }
    }

    #[test]
    fn inline_data_reduces_first_budget() {
        let cfg = NarrativeConfig::with_line_length(20);
        let n = NarrativeBuilder::new(cfg)
            .codeword_with_amount("CHGS", "EUR", "12,50", "fee for transfer")
            .codeword_with_country("ORDERRES", "BE", "GENT")
            .build();
        // 20 - "/CHGS/" - "EUR12,50" = 6
        assert_eq!(n.segments()[0].narrative_fragments, vec!["fee", "for transfer"]);
        // 20 - "/ORDERRES/" - "BE//" = 6
        assert_eq!(n.segments()[1].narrative_fragments, vec!["GENT"]);
    }

    #[test]
    fn empty_narrative_matches_parsed_codeword_line() {
        let cfg = NarrativeConfig::default();
        let n = NarrativeBuilder::new(cfg.clone())
            .codeword("X", "")
            .codeword_with_country("BENEFRES", "IT", "")
            .build();
        assert_eq!(n.segments()[0].narrative_fragments, vec![""]);
        let text = n.serialize(&cfg);
        assert_eq!(text, "/X/\n/BENEFRES/IT");
        let format = NarrativeFormat::new(InlineData::Country);
        assert_eq!(Narrative::parse(&text, format), n);
    }

    #[test]
    fn supplement_attaches_to_last_segment() {
        let n = NarrativeBuilder::new(NarrativeConfig::default())
            .codeword("REJT", "reason")
            .supplement("additional details")
            .build();
        assert_eq!(n.segments()[0].supplement_fragments, vec!["additional details"]);

        let orphan = NarrativeBuilder::default().supplement("alone").build();
        assert!(orphan.segments().is_empty());
        assert_eq!(orphan.unstructured_fragments(), &["alone"]);
    }
}
