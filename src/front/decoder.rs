// Front-coding decoders.
//
// Reconstruction is search-free: each record names its reference directly,
// so decoding copies a prefix out of already-reconstructed output and
// appends the suffix. Best-match mode keeps the full ordered history of
// reconstructed lines since any record may reach arbitrarily far back.
//
// Bounds are enforced, never patched over: a record declaring a prefix its
// reference cannot supply, or a distance pointing before the start, stops
// decoding with the failing record's index.

use thiserror::Error;

use crate::matcher::prefix;

use super::record::{RefRecord, SeqRecord};

// ---------------------------------------------------------------------------
// Decoder error
// ---------------------------------------------------------------------------

/// A structurally valid record whose counts violate the decode history.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The declared shared prefix is longer than the reference line.
    #[error(
        "record {index}: shared prefix length {shared} exceeds reference line length {reference_len}"
    )]
    PrefixOutOfRange {
        index: usize,
        shared: usize,
        reference_len: usize,
    },

    /// The back-reference distance points before the first line.
    #[error("record {index}: back-reference distance {distance} reaches before the first line")]
    DistanceOutOfRange { index: usize, distance: usize },
}

// ---------------------------------------------------------------------------
// Sequential mode
// ---------------------------------------------------------------------------

/// Reconstruct lines from sequential-mode records.
///
/// The first record's suffix is taken verbatim; every later record copies
/// `shared` characters from the line just reconstructed and appends its
/// suffix.
pub fn decode_sequential(records: &[SeqRecord]) -> Result<Vec<String>, DecodeError> {
    let mut lines: Vec<String> = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let line = match lines.last() {
            None => record.suffix.clone(),
            Some(previous) => rebuild(index, previous, record.shared, &record.suffix)?,
        };
        lines.push(line);
    }

    Ok(lines)
}

// ---------------------------------------------------------------------------
// Best-match mode
// ---------------------------------------------------------------------------

/// Reconstruct lines from best-match-mode records.
///
/// Distance 0 marks a self-contained record (suffix is the full line).
/// Otherwise the donor sits `distance` positions back in the output built so
/// far; by construction the donor index is always strictly less than the
/// current index, so forward references cannot be expressed.
pub fn decode_best_match(records: &[RefRecord]) -> Result<Vec<String>, DecodeError> {
    let mut lines: Vec<String> = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let line = if record.distance == 0 {
            record.suffix.clone()
        } else {
            let donor_index = index.checked_sub(record.distance).ok_or(
                DecodeError::DistanceOutOfRange {
                    index,
                    distance: record.distance,
                },
            )?;
            rebuild(index, &lines[donor_index], record.shared, &record.suffix)?
        };
        lines.push(line);
    }

    Ok(lines)
}

/// Copy `shared` characters from `reference`, then append `suffix`.
fn rebuild(
    index: usize,
    reference: &str,
    shared: usize,
    suffix: &str,
) -> Result<String, DecodeError> {
    let end = prefix::prefix_end(reference, shared).ok_or(DecodeError::PrefixOutOfRange {
        index,
        shared,
        reference_len: reference.chars().count(),
    })?;

    let mut line = String::with_capacity(end + suffix.len());
    line.push_str(&reference[..end]);
    line.push_str(suffix);
    Ok(line)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
