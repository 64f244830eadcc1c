// Round-trip comparison diagnostics.
//
// Locates the first point at which a reconstructed text diverges from the
// original: a differing line (reported with both values), a differing line
// count, or a raw-text difference with identical lines (a final-newline or
// line-ending artifact).

use std::fmt;

use crate::engine::split_lines;

// ---------------------------------------------------------------------------
// Comparison outcome
// ---------------------------------------------------------------------------

/// Outcome of comparing an original text against its reconstruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Comparison {
    /// The texts are byte-identical.
    Match,
    /// The first line at which the texts disagree, with both values.
    LineMismatch {
        index: usize,
        original: String,
        restored: String,
    },
    /// All compared lines agree but one text has more lines.
    LineCountMismatch { original: usize, restored: usize },
    /// Lines and counts agree but the raw texts differ (final newline or
    /// line-ending artifact).
    LineEndingMismatch,
}

impl Comparison {
    /// True only for [`Comparison::Match`].
    pub fn is_match(&self) -> bool {
        matches!(self, Comparison::Match)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Comparison::Match => write!(f, "texts match"),
            Comparison::LineMismatch {
                index,
                original,
                restored,
            } => write!(
                f,
                "line {index} differs: original {original:?}, restored {restored:?}"
            ),
            Comparison::LineCountMismatch { original, restored } => write!(
                f,
                "line count differs: original has {original}, restored has {restored}"
            ),
            Comparison::LineEndingMismatch => {
                write!(f, "texts differ only in line endings or final newline")
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Comparison scan
// ---------------------------------------------------------------------------

/// Compare `original` against `restored`, line by line first.
///
/// Reports the first differing line before any count or line-ending
/// diagnosis, so a localized corruption is always named by index. A
/// trailing `\r` is not part of a line's content: texts that differ only
/// in `\r\n` versus `\n` terminators fall through to
/// [`Comparison::LineEndingMismatch`].
pub fn compare(original: &str, restored: &str) -> Comparison {
    if original == restored {
        return Comparison::Match;
    }

    let original_lines = split_lines(original);
    let restored_lines = split_lines(restored);

    for (index, (o, r)) in original_lines
        .iter()
        .copied()
        .zip(restored_lines.iter().copied())
        .enumerate()
    {
        let o = o.strip_suffix('\r').unwrap_or(o);
        let r = r.strip_suffix('\r').unwrap_or(r);
        if o != r {
            return Comparison::LineMismatch {
                index,
                original: o.to_string(),
                restored: r.to_string(),
            };
        }
    }

    if original_lines.len() != restored_lines.len() {
        return Comparison::LineCountMismatch {
            original: original_lines.len(),
            restored: restored_lines.len(),
        };
    }

    Comparison::LineEndingMismatch
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
