//! Shared test helpers for `mt_fields_core` integration tests.

#![allow(unreachable_pub)]

use mt_fields_core::{ComponentSet, Diagnostic, Field};

// ─── Simple deterministic PRNG (LCG) ────────────────────────────────────────

pub struct SimpleRng(u64);

impl SimpleRng {
    pub fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 16
    }

    pub fn gen_range(&mut self, max: usize) -> usize {
        (self.next_u64() as usize) % max
    }

    /// Random length in `lo..=hi`.
    #[allow(dead_code)]
    pub fn between(&mut self, lo: usize, hi: usize) -> usize {
        lo + self.gen_range(hi - lo + 1)
    }

    #[allow(dead_code)]
    pub fn chance(&mut self, percent: usize) -> bool {
        self.gen_range(100) < percent
    }

    #[allow(dead_code)]
    pub fn gen_bytes(&mut self, len: usize) -> Vec<u8> {
        (0..len).map(|_| self.next_u64() as u8).collect()
    }

    /// `len` characters drawn from `alphabet`.
    #[allow(dead_code)]
    pub fn string(&mut self, alphabet: &[u8], len: usize) -> String {
        (0..len)
            .map(|_| alphabet[self.gen_range(alphabet.len())] as char)
            .collect()
    }

    #[allow(dead_code)]
    pub fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.gen_range(items.len())]
    }
}

// ─── Alphabets ───────────────────────────────────────────────────────────────

#[allow(dead_code)]
pub const DIGITS: &[u8] = b"0123456789";
#[allow(dead_code)]
pub const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
#[allow(dead_code)]
pub const ALNUM: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
/// Free text without `/`, so no line can be mistaken for a marker.
#[allow(dead_code)]
pub const TEXT: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789 .,-()?+'";

// ─── Field values ────────────────────────────────────────────────────────────

/// `15d`: digits, a comma, optional decimals.
#[allow(dead_code)]
pub fn amount(rng: &mut SimpleRng) -> String {
    let int = rng.between(1, 10);
    let dec = rng.between(0, 2);
    format!(
        "{}{}",
        rng.string(DIGITS, int),
        if dec == 0 {
            ",".to_string()
        } else {
            format!(",{}", rng.string(DIGITS, dec))
        }
    )
}

#[allow(dead_code)]
fn some(s: impl Into<String>) -> Option<String> {
    Some(s.into())
}

#[allow(dead_code)]
fn maybe(rng: &mut SimpleRng, value: String) -> Option<String> {
    if rng.chance(50) { Some(value) } else { None }
}

/// Up to `max` text lines, at least one, each 1..=`width` characters.
#[allow(dead_code)]
fn text_lines(rng: &mut SimpleRng, max: usize, width: usize) -> Vec<Option<String>> {
    let count = rng.between(1, max);
    (0..max)
        .map(|i| {
            (i < count).then(|| {
                let len = rng.between(1, width);
                rng.string(TEXT, len)
            })
        })
        .collect()
}

/// A well-formed random component set for the named field type.
#[allow(dead_code)]
pub fn random_components(name: &str, rng: &mut SimpleRng) -> ComponentSet {
    let values: Vec<Option<String>> = match name {
        "20C" => {
            let n = rng.between(1, 16);
            vec![some(rng.string(UPPER, 4)), some(rng.string(ALNUM, n))]
        }
        "22F" => {
            let dss_len = rng.between(1, 8);
            let dss = rng.string(ALNUM, dss_len);
            vec![
                some(rng.string(UPPER, 4)),
                maybe(rng, dss),
                some(rng.string(UPPER, 4)),
            ]
        }
        "98A" => vec![some(rng.string(UPPER, 4)), some(rng.string(DIGITS, 8))],
        "98C" => vec![
            some(rng.string(UPPER, 4)),
            some(rng.string(DIGITS, 8)),
            some(rng.string(DIGITS, 6)),
        ],
        "69B" => vec![
            some(rng.string(UPPER, 4)),
            some(rng.string(DIGITS, 8)),
            some(rng.string(DIGITS, 6)),
            some(rng.string(DIGITS, 8)),
            some(rng.string(DIGITS, 6)),
        ],
        "98E" => {
            let dec_len = rng.between(1, 3);
            let decimals = rng.string(DIGITS, dec_len);
            let mut v = vec![
                some(rng.string(UPPER, 4)),
                some(rng.string(DIGITS, 8)),
                some(rng.string(DIGITS, 6)),
                maybe(rng, decimals),
            ];
            let hours = rng.string(DIGITS, 2);
            let minutes = rng.string(DIGITS, 2);
            v.extend(match rng.gen_range(5) {
                0 => vec![None, None, None],
                1 => vec![None, some(hours), None],
                2 => vec![some("N"), some(hours), None],
                3 => vec![None, some(hours), some(minutes)],
                _ => vec![some("N"), some(hours), some(minutes)],
            });
            v
        }
        "32A" => vec![
            some(rng.string(DIGITS, 6)),
            some(rng.string(UPPER, 3)),
            some(amount(rng)),
        ],
        "32B" | "33B" => vec![some(rng.string(UPPER, 3)), some(amount(rng))],
        "60F" | "62F" => vec![
            some(rng.pick(&["C", "D"])),
            some(rng.string(DIGITS, 6)),
            some(rng.string(UPPER, 3)),
            some(amount(rng)),
        ],
        "61" => {
            let entry = rng.string(DIGITS, 4);
            let funds = rng.string(UPPER, 1);
            let owner_len = rng.between(1, 16);
            let servicing_len = rng.between(1, 16);
            let servicing = rng.string(ALNUM, servicing_len);
            let details_len = rng.between(1, 34);
            let details = rng.string(TEXT, details_len);
            vec![
                some(rng.string(DIGITS, 6)),
                maybe(rng, entry),
                some(rng.pick(&["C", "D", "RC", "RD", "EC", "ED"])),
                maybe(rng, funds),
                some(amount(rng)),
                some(rng.pick(&["S", "N", "F"])),
                some(rng.string(ALNUM, 3)),
                some(rng.string(ALNUM, owner_len)),
                maybe(rng, servicing),
                maybe(rng, details),
            ]
        }
        "59" => {
            let account_len = rng.between(1, 34);
            let account = rng.string(ALNUM, account_len);
            let mut v = vec![maybe(rng, account)];
            v.extend(text_lines(rng, 4, 35));
            v
        }
        "35B" => {
            let mut v = if rng.chance(50) {
                vec![some("ISIN"), some(rng.string(ALNUM, 12))]
            } else {
                vec![None, None]
            };
            v.extend(text_lines(rng, 4, 35));
            v
        }
        "72" | "71B" => text_lines(rng, 6, 35),
        "77B" => text_lines(rng, 3, 35),
        other => panic!("no generator for field {other}"),
    };
    ComponentSet::from_values(values)
}

// ─── Field helpers ───────────────────────────────────────────────────────────

/// Parse a registered field, panicking on an unknown name.
#[allow(dead_code)]
pub fn field(name: &str, value: &str) -> Field {
    Field::parse(name, value).unwrap_or_else(|e| panic!("cannot parse {name}: {e}"))
}

/// Collect diagnostic codes.
#[allow(dead_code)]
pub fn diag_codes(issues: &[Diagnostic]) -> Vec<String> {
    issues.iter().map(|d| d.id.to_string()).collect()
}
