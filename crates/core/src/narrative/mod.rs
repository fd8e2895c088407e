//! Structured narrative: free text mixing codeword segments and plain lines.
//!
//! ```text
//! /BNF/first line of beneficiary      <- codeword segment, fragment 0
//! //continued                         <- continuation, fragment 1
//! /supplement text                    <- supplement, first fragment
//! trailing free text                  <- unstructured from here on
//! ```
//!
//! [`Narrative::parse`] reads this layout line by line, and
//! [`Narrative::serialize`] writes it back. [`NarrativeBuilder`] produces a
//! narrative from whole strings, wrapping them to the configured line length.

mod builder;
mod codec;

pub use builder::NarrativeBuilder;

use serde::{Deserialize, Serialize};

use crate::config::NarrativeConfig;

/// Data carried inline on a codeword line, between the marker and the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InlineData {
    /// Text follows the marker directly (`/8c/[text]`).
    #[default]
    None,
    /// Two-letter country code, then `//` and the text (`/8c/2!a[//text]`).
    Country,
    /// Optional currency and amount, then the text (`/8c/[3!a15d][text]`).
    CurrencyAmount,
}

/// Per-field layout of codeword lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NarrativeFormat {
    /// What may follow the codeword marker on its line.
    pub inline: InlineData,
}

impl NarrativeFormat {
    /// Format with the given inline data.
    pub const fn new(inline: InlineData) -> Self {
        Self { inline }
    }
}

/// One codeword segment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StructuredSegment {
    /// Codeword without slashes, e.g. `"BNF"`.
    pub codeword: String,
    /// Inline country code.
    pub country: Option<String>,
    /// Inline currency code.
    pub currency: Option<String>,
    /// Inline amount in wire form (`1234,56`).
    pub amount: Option<String>,
    /// Narrative text, one entry per physical line.
    pub narrative_fragments: Vec<String>,
    /// Supplementary text, one entry per physical line.
    pub supplement_fragments: Vec<String>,
}

impl StructuredSegment {
    /// A segment with a codeword and nothing else.
    pub fn new(codeword: impl Into<String>) -> Self {
        Self {
            codeword: codeword.into(),
            ..Self::default()
        }
    }

    /// Narrative fragments joined with `delimiter`.
    pub fn narrative(&self, delimiter: &str) -> String {
        self.narrative_fragments.join(delimiter)
    }

    /// Supplement fragments joined with `delimiter`, if there are any.
    pub fn supplement(&self, delimiter: &str) -> Option<String> {
        if self.supplement_fragments.is_empty() {
            None
        } else {
            Some(self.supplement_fragments.join(delimiter))
        }
    }

    /// The amount as a number (comma decimal mark).
    pub fn amount_value(&self) -> Option<f64> {
        self.amount.as_deref()?.replace(',', ".").parse().ok()
    }
}

/// Codeword segments followed by unstructured lines.
///
/// Unstructured fragments always serialize after every segment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Narrative {
    segments: Vec<StructuredSegment>,
    unstructured_fragments: Vec<String>,
}

impl Narrative {
    /// Assemble a narrative from its parts.
    pub fn new(segments: Vec<StructuredSegment>, unstructured_fragments: Vec<String>) -> Self {
        Self {
            segments,
            unstructured_fragments,
        }
    }

    /// Start building a narrative with the given config.
    pub fn builder(config: NarrativeConfig) -> NarrativeBuilder {
        NarrativeBuilder::new(config)
    }

    /// Parse raw narrative text.
    pub fn parse(text: &str, format: NarrativeFormat) -> Self {
        codec::parse(text, format)
    }

    /// Serialize back to text, using `config.line_break` between lines.
    pub fn serialize(&self, config: &NarrativeConfig) -> String {
        codec::serialize(self, config.line_break.as_str())
    }

    /// Codeword segments in order.
    pub fn segments(&self) -> &[StructuredSegment] {
        &self.segments
    }

    /// First segment with the given codeword.
    pub fn segment(&self, codeword: &str) -> Option<&StructuredSegment> {
        self.segments.iter().find(|s| s.codeword == codeword)
    }

    /// Trailing lines not owned by any codeword.
    pub fn unstructured_fragments(&self) -> &[String] {
        &self.unstructured_fragments
    }

    /// Unstructured fragments joined with `delimiter`, if there are any.
    pub fn unstructured(&self, delimiter: &str) -> Option<String> {
        if self.unstructured_fragments.is_empty() {
            None
        } else {
            Some(self.unstructured_fragments.join(delimiter))
        }
    }

    /// `true` when there are neither segments nor unstructured fragments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && self.unstructured_fragments.is_empty()
    }
}

impl std::fmt::Display for Narrative {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.serialize(&NarrativeConfig::default()))
    }
}
