// Front-coding encoders.
//
// Both modes walk the input once and emit one record per line, in order.
// Sequential mode measures each line against its immediate predecessor;
// best-match mode asks the donor selector for the prior line sharing the
// longest prefix, wherever it sits in the already-processed history.

use crate::matcher::prefix::{self, PrefixLen};
use crate::matcher::selector;

use super::record::{RefRecord, SeqRecord};

// ---------------------------------------------------------------------------
// Sequential mode
// ---------------------------------------------------------------------------

/// Encode `lines` against their immediate predecessors.
///
/// The first line (and any line sharing nothing with its predecessor) is
/// stored as `(0, full line)`. A line identical to its predecessor yields a
/// full-length prefix and an empty suffix.
pub fn encode_sequential<S: AsRef<str>>(lines: &[S]) -> Vec<SeqRecord> {
    let mut records = Vec::with_capacity(lines.len());
    let mut previous: Option<&str> = None;

    for line in lines {
        let line = line.as_ref();
        let shared = previous.map_or(PrefixLen::ZERO, |prev| prefix::common_prefix(prev, line));
        records.push(SeqRecord::new(shared.chars, &line[shared.bytes..]));
        previous = Some(line);
    }

    records
}

// ---------------------------------------------------------------------------
// Best-match mode
// ---------------------------------------------------------------------------

/// Encode `lines` against their best prefix donors.
///
/// Each line is matched against every prior line; the record stores how far
/// back the donor sits and how many characters it contributes. Lines with no
/// donor (the first line, or nothing shared) are stored self-contained as
/// `(0, 0, full line)`.
pub fn encode_best_match<S: AsRef<str>>(lines: &[S]) -> Vec<RefRecord> {
    let mut records = Vec::with_capacity(lines.len());

    for (i, line) in lines.iter().enumerate() {
        let line = line.as_ref();
        let record = match selector::select_donor(&lines[..i], line) {
            Some(donor) => RefRecord::new(
                i - donor.index,
                donor.prefix.chars,
                &line[donor.prefix.bytes..],
            ),
            None => RefRecord::new(0, 0, line),
        };
        records.push(record);
    }

    records
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
