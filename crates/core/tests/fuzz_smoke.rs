//! Fuzz smoke tests for the field grammars, diagnostics, and line extraction.
//!
//! These tests feed random, adversarial, and edge-case inputs to every
//! registered grammar and verify that parsing, serializing, diagnosing, and
//! extracting lines never panic and that basic structural invariants hold.
//!
//! A simple deterministic PRNG provides reproducible randomness.

mod common;

use common::SimpleRng;
use mt_fields_core::diag::explain;
use mt_fields_core::{LineQuery, NarrativeFormat, parse_field, registry};

// ─── Invariant checking ─────────────────────────────────────────────────────

/// Truncate a string for error messages (safe for multi-byte UTF-8).
fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let safe_end = (0..=max)
            .rev()
            .find(|&i| s.is_char_boundary(i))
            .unwrap_or(0);
        format!("{}…({} bytes total)", &s[..safe_end], s.len())
    }
}

/// Run one input through every grammar and check invariants.
fn fuzz_all(input: &str) {
    for grammar in registry::all() {
        let name = grammar.name();
        let result = parse_field(&name, input)
            .unwrap_or_else(|e| panic!("{name} is registered but failed: {e}"));

        assert_eq!(
            result.field.components().len(),
            grammar.descriptor().component_count(),
            "{name}: component count changed for input {:?}",
            truncate(input, 80)
        );
        for d in &result.diagnostics {
            assert!(
                explain(&d.id).is_some(),
                "{name}: undocumented diagnostic {} for input {:?}",
                d.id,
                truncate(input, 80)
            );
        }

        let value = result.field.value();
        let _ = grammar.serialize(&grammar.parse(&value));

        for k in 0..4 {
            let _ = result.field.line(k);
        }
        for offset in 0..=grammar.descriptor().component_count() + 1 {
            let _ = result.field.lines_from_offset(offset);
        }
        let _ = result.field.query_lines(&LineQuery::range(2, 3).with_offset(2));

        if grammar.descriptor().narrative.is_some() {
            let n = result.field.narrative().unwrap();
            let _ = n.to_string();
        }
    }
}

fn random_string(rng: &mut SimpleRng, alphabet: &[u8], len: usize) -> String {
    rng.string(alphabet, len)
}

// ═══════════════════════════════════════════════════════════════════════════════
// Category A: Random inputs
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn grammars_no_panic_random_bytes() {
    let mut rng = SimpleRng::new(0xDEAD_BEEF);
    for len in [0, 1, 2, 5, 10, 50, 200] {
        for _ in 0..20 {
            let bytes = rng.gen_bytes(len);
            let s = String::from_utf8_lossy(&bytes);
            fuzz_all(&s);
        }
    }
}

#[test]
fn grammars_no_panic_random_ascii() {
    let mut rng = SimpleRng::new(0xCAFE_BABE);
    let ascii: Vec<u8> = (0x20u8..0x7F).chain([b'\r', b'\n']).collect();
    for len in [1, 5, 20, 100] {
        for _ in 0..30 {
            let s = random_string(&mut rng, &ascii, len);
            fuzz_all(&s);
        }
    }
}

#[test]
fn grammars_no_panic_random_mt_like() {
    let mut rng = SimpleRng::new(0xBAAD_F00D);
    let alphabet: &[u8] = b"://,0123456789CDRENSTRFISINABCXYZ \r\n";
    for len in [1, 5, 20, 60, 200] {
        for _ in 0..40 {
            let s = random_string(&mut rng, alphabet, len);
            fuzz_all(&s);
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// Category B: Adversarial separators
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn grammars_no_panic_separator_runs() {
    let cases = [
        ":", "::", "/", "//", "///", "://", ":/:/", ",", ",,,", ":QUAL", ":QUAL/",
        ":QUAL//", ":QUAL///", ":QUAL//,", ":QUAL//20240131,", ":QUAL//20240131123045,/",
        ":Q//D/", ":Q//1/2/3/4", "/", "/\r\n/", "//\r\n//", "\r\n\r\n\r\n",
    ];
    for input in &cases {
        fuzz_all(input);
    }
}

#[test]
fn grammars_no_panic_marks_and_amounts() {
    let cases = [
        "C", "D", "R", "E", "RC", "ED", "2401310131R", "240131E", "240131RD",
        "240131C,", "240131C,,,,", "240131CR1,NTRF", "240131CR1,NTRF//", "240131CR1,N//X",
        "EUR", "EUR,", "1,5", "C240131", "C240131EUR", "240131EUR",
    ];
    for input in &cases {
        fuzz_all(input);
    }
}

#[test]
fn grammars_no_panic_long_inputs() {
    fuzz_all(&"A".repeat(10_000));
    fuzz_all(&"/".repeat(5_000));
    fuzz_all(&"line\r\n".repeat(1_000));
    fuzz_all(&format!(":SEME//{}", "9".repeat(5_000)));
}

// ═══════════════════════════════════════════════════════════════════════════════
// Category C: Unicode and control characters
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn grammars_no_panic_unicode_variety() {
    let cases = [
        "\u{0000}",
        ":QUAL//é",
        ":é//x",
        "é",
        "日本語テスト",
        "🎉🚀💻🔥",
        "2401310131C🎉1,N",
        "/ACC/مرحبا\r\n//שלום",
        "\u{FEFF}:SEME//REF",
        "N\u{200B}0130",
        ":PREP//20240131123045,1/Nü130",
    ];
    for input in &cases {
        fuzz_all(input);
    }
}

#[test]
fn grammars_no_panic_control_chars() {
    let s: String = (0u8..32).map(char::from).collect();
    fuzz_all(&s);
    fuzz_all("\r");
    fuzz_all("\r\r\n\n");
}

// ═══════════════════════════════════════════════════════════════════════════════
// Category D: Narrative codec
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn narrative_no_panic_random_lines() {
    use mt_fields_core::{InlineData, Narrative};

    let mut rng = SimpleRng::new(0x0BAD_CAFE);
    let alphabet: &[u8] = b"/ABCDEFGHIJ0123456789,. \n";
    for len in [1, 10, 40, 200] {
        for _ in 0..40 {
            let s = random_string(&mut rng, alphabet, len);
            for inline in [InlineData::None, InlineData::Country, InlineData::CurrencyAmount] {
                let _ = Narrative::parse(&s, NarrativeFormat::new(inline)).to_string();
            }
        }
    }
}
