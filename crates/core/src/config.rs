//! Configuration types for serialization and line queries.
//!
//! All types implement `Default` and deserialize from partial JSON
//! (missing keys take their default).

use serde::{Deserialize, Serialize};

/// Line terminator used when emitting multi-line text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineBreak {
    /// `\r\n`, the wire convention for field values.
    CrLf,
    /// `\n`.
    #[default]
    Lf,
}

impl LineBreak {
    /// The terminator as text.
    pub fn as_str(self) -> &'static str {
        match self {
            LineBreak::CrLf => "\r\n",
            LineBreak::Lf => "\n",
        }
    }
}

/// Settings for building and serializing structured narratives.
///
/// Defaults:
/// - `line_length`: 35, the `35x` narrative line of the format
/// - `line_break`: LF
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    /// Maximum characters per physical line, markers included.
    pub line_length: usize,
    /// Terminator placed between physical lines.
    pub line_break: LineBreak,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            line_length: 35,
            line_break: LineBreak::Lf,
        }
    }
}

impl NarrativeConfig {
    /// Config with the given line length and the default terminator.
    pub fn with_line_length(line_length: usize) -> Self {
        Self {
            line_length,
            ..Self::default()
        }
    }

    /// Same config with a different terminator.
    pub fn line_break(mut self, line_break: LineBreak) -> Self {
        self.line_break = line_break;
        self
    }
}

/// A line extraction request.
///
/// Lines are 1-based and `end` is inclusive; `None` means "through the last
/// line". `offset` is the first component (1-based) that contributes to the
/// output: components before it are treated as absent.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineQuery {
    /// First line to return (1-based).
    pub start: usize,
    /// Last line to return (inclusive), or `None` for all remaining lines.
    pub end: Option<usize>,
    /// First component that contributes to the lines.
    pub offset: usize,
    /// Strip one leading separator from the first returned line.
    pub remove_separators: bool,
}

impl Default for LineQuery {
    fn default() -> Self {
        Self {
            start: 1,
            end: None,
            offset: 1,
            remove_separators: false,
        }
    }
}

impl LineQuery {
    /// A single line.
    pub fn line(n: usize) -> Self {
        Self {
            start: n,
            end: Some(n),
            ..Self::default()
        }
    }

    /// Lines `start..=end`.
    pub fn range(start: usize, end: usize) -> Self {
        Self {
            start,
            end: Some(end),
            ..Self::default()
        }
    }

    /// All lines produced by components `offset..`.
    ///
    /// Separator stripping is enabled when `offset > 1`, since the first
    /// contributing component then usually sits mid-line.
    pub fn from_offset(offset: usize) -> Self {
        Self {
            offset,
            remove_separators: offset > 1,
            ..Self::default()
        }
    }

    /// Same query starting at component `offset`, keeping the line window.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self.remove_separators = offset > 1;
        self
    }

    /// Override separator stripping.
    pub fn remove_separators(mut self, remove: bool) -> Self {
        self.remove_separators = remove;
        self
    }
}
