// Text engine: ties prefix matching to the front-coding record format.
//
// Provides the high-level compress/decompress APIs that orchestrate:
//   - Line splitting of the raw text
//   - Record encoding (front module) driven by prefix matching (matcher)
//   - Record parsing and decoding to reconstruct the original lines

use std::fmt::Write;

use thiserror::Error;

use crate::front::decoder::{self, DecodeError};
use crate::front::record::{ParseError, RefRecord, SeqRecord};
use crate::front::{encode_best_match, encode_sequential};

// ---------------------------------------------------------------------------
// Mode
// ---------------------------------------------------------------------------

/// Reference strategy, passed explicitly into every compress/decompress call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Each line references the immediately preceding line.
    #[default]
    Sequential,
    /// Each line references whichever prior line shares the longest prefix.
    BestMatch,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Sequential => write!(f, "sequential"),
            Mode::BestMatch => write!(f, "best-match"),
        }
    }
}

// ---------------------------------------------------------------------------
// Line splitting
// ---------------------------------------------------------------------------

/// Split text into lines on `\n`, dropping one trailing empty segment.
///
/// Interior blank lines and `\r` bytes pass through untouched; only the
/// final newline is treated as a terminator rather than a separator. Empty
/// text yields no lines.
pub(crate) fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<&str> = text.split('\n').collect();
    if lines.last() == Some(&"") {
        lines.pop();
    }
    lines
}

// ---------------------------------------------------------------------------
// High-level compress
// ---------------------------------------------------------------------------

/// Compress `text` into the front-coded record format for `mode`.
///
/// One record line is emitted per input line, each `\n`-terminated. Empty
/// input produces empty output.
pub fn compress(text: &str, mode: Mode) -> String {
    let lines = split_lines(text);
    let mut out = String::with_capacity(text.len());

    match mode {
        Mode::Sequential => {
            for record in encode_sequential(&lines) {
                let _ = writeln!(out, "{record}");
            }
        }
        Mode::BestMatch => {
            for record in encode_best_match(&lines) {
                let _ = writeln!(out, "{record}");
            }
        }
    }

    out
}

// ---------------------------------------------------------------------------
// High-level decompress
// ---------------------------------------------------------------------------

/// Decompress front-coded `text` back into the original lines for `mode`.
///
/// Each reconstructed line is `\n`-terminated, so input whose final line
/// lacked a terminator comes back with one. Empty input produces empty
/// output.
pub fn decompress(text: &str, mode: Mode) -> Result<String, DecompressError> {
    let record_lines = split_lines(text);

    let lines = match mode {
        Mode::Sequential => {
            let records: Vec<SeqRecord> = parse_records(&record_lines)?;
            decoder::decode_sequential(&records)?
        }
        Mode::BestMatch => {
            let records: Vec<RefRecord> = parse_records(&record_lines)?;
            decoder::decode_best_match(&records)?
        }
    };

    let mut out = String::with_capacity(text.len());
    for line in &lines {
        out.push_str(line);
        out.push('\n');
    }
    Ok(out)
}

fn parse_records<R>(lines: &[&str]) -> Result<Vec<R>, DecompressError>
where
    R: std::str::FromStr<Err = ParseError>,
{
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            line.parse()
                .map_err(|source| DecompressError::Parse { index, source })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Failure to reconstruct text from front-coded records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecompressError {
    /// A record line does not match the text format.
    #[error("record {index}: {source}")]
    Parse { index: usize, source: ParseError },

    /// A record's counts violate the decode history.
    #[error(transparent)]
    Decode(#[from] DecodeError),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
