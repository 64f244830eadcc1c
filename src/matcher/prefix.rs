// Longest-common-prefix primitive.
//
// Record fields count characters (Unicode scalar values), while Rust string
// slicing works in bytes. Every measurement here is taken in one pass and
// byte offsets always land on a char boundary of both inputs, so callers can
// slice without re-walking the string.

// ---------------------------------------------------------------------------
// Prefix length
// ---------------------------------------------------------------------------

/// Length of a shared prefix, measured both ways.
///
/// `chars` is the count stored in coded records; `bytes` is the slice
/// boundary for the same prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PrefixLen {
    pub chars: usize,
    pub bytes: usize,
}

impl PrefixLen {
    /// No shared prefix.
    pub const ZERO: PrefixLen = PrefixLen { chars: 0, bytes: 0 };
}

// ---------------------------------------------------------------------------
// Measurement
// ---------------------------------------------------------------------------

/// Measure the longest common prefix of `a` and `b` in one pass.
///
/// Scans position by position and stops at the first mismatch or the end of
/// the shorter string. The returned byte length is a valid slice boundary
/// into both `a` and `b`.
#[inline]
pub fn common_prefix(a: &str, b: &str) -> PrefixLen {
    let mut len = PrefixLen::ZERO;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        len.chars += 1;
        len.bytes += ca.len_utf8();
    }
    len
}

/// Count of leading characters at which `a` and `b` are identical.
///
/// Returns 0 if either string is empty or the first characters differ.
#[inline]
pub fn longest_common_prefix(a: &str, b: &str) -> usize {
    common_prefix(a, b).chars
}

/// Byte offset just past the first `chars` characters of `s`.
///
/// Returns `None` when `s` has fewer than `chars` characters. This is the
/// decoder's bounds probe: a record declaring a longer shared prefix than
/// its reference line holds is malformed.
#[inline]
pub fn prefix_end(s: &str, chars: usize) -> Option<usize> {
    if chars == 0 {
        return Some(0);
    }
    let mut seen = 0usize;
    for (pos, c) in s.char_indices() {
        seen += 1;
        if seen == chars {
            return Some(pos + c.len_utf8());
        }
    }
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
