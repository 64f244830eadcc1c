// Prefix-donor selection for best-match encoding.
//
// Scans every previously processed line for the one sharing the longest
// prefix with the current line. Quadratic over the line count; the scan is
// the reference selection semantics and its tie-break is part of the
// format's observable output, so it is kept as-is rather than replaced by
// an indexed lookup.

use super::prefix::{self, PrefixLen};

// ---------------------------------------------------------------------------
// Donor
// ---------------------------------------------------------------------------

/// A prior line chosen as the prefix source for the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Donor {
    /// Position of the donor within the history slice.
    pub index: usize,
    /// Shared prefix between donor and current line.
    pub prefix: PrefixLen,
}

// ---------------------------------------------------------------------------
// Selection scan
// ---------------------------------------------------------------------------

/// Find the best prefix donor for `line` among `history`.
///
/// Every entry is examined in increasing index order; a candidate reaching
/// the running maximum replaces it, so among equally good donors the latest
/// one wins. Returns `None` when `history` is empty or no entry shares at
/// least one leading character.
///
/// O(n * m) over history length and line length.
pub fn select_donor<S: AsRef<str>>(history: &[S], line: &str) -> Option<Donor> {
    let mut best: Option<Donor> = None;

    for (index, prior) in history.iter().enumerate() {
        let prefix = prefix::common_prefix(prior.as_ref(), line);
        if best.is_none_or(|b| prefix.chars >= b.prefix.chars) {
            best = Some(Donor { index, prefix });
        }
    }

    best.filter(|b| b.prefix.chars > 0)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
