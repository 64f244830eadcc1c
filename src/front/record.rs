// Coded record types and their line-oriented text format.
//
// One record per line, fields separated by single spaces:
//   sequential:  <shared> <suffix>
//   best-match:  <distance> <shared> <suffix>
//
// The suffix is everything after the last count field and may itself contain
// spaces. An empty suffix keeps its separating space, so `5 ` (trailing
// space) is a valid sequential record.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

/// Sequential-mode record: prefix shared with the immediately preceding line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeqRecord {
    /// Leading characters shared with the previous line.
    pub shared: usize,
    /// Remainder of the line after the shared prefix.
    pub suffix: String,
}

impl SeqRecord {
    pub fn new(shared: usize, suffix: impl Into<String>) -> Self {
        Self {
            shared,
            suffix: suffix.into(),
        }
    }
}

/// Best-match-mode record: prefix shared with an arbitrary prior line.
///
/// `distance` counts positions backward from the current line to the donor;
/// 0 means no donor (the suffix is the full line) and never "this line".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefRecord {
    /// Back-reference distance to the donor line, 0 for none.
    pub distance: usize,
    /// Leading characters shared with the donor line.
    pub shared: usize,
    /// Remainder of the line after the shared prefix.
    pub suffix: String,
}

impl RefRecord {
    pub fn new(distance: usize, shared: usize, suffix: impl Into<String>) -> Self {
        Self {
            distance,
            shared,
            suffix: suffix.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Text format
// ---------------------------------------------------------------------------

impl fmt::Display for SeqRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.shared, self.suffix)
    }
}

impl fmt::Display for RefRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.distance, self.shared, self.suffix)
    }
}

impl FromStr for SeqRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut fields = s.splitn(2, ' ');
        let shared = fields.next().unwrap_or_default();
        let Some(suffix) = fields.next() else {
            return Err(ParseError::FieldCount {
                expected: 2,
                found: field_count(s, 2),
            });
        };
        Ok(SeqRecord {
            shared: parse_count("shared prefix length", shared)?,
            suffix: suffix.to_string(),
        })
    }
}

impl FromStr for RefRecord {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, ParseError> {
        let mut fields = s.splitn(3, ' ');
        let distance = fields.next().unwrap_or_default();
        let (Some(shared), Some(suffix)) = (fields.next(), fields.next()) else {
            return Err(ParseError::FieldCount {
                expected: 3,
                found: field_count(s, 3),
            });
        };
        Ok(RefRecord {
            distance: parse_count("back-reference distance", distance)?,
            shared: parse_count("shared prefix length", shared)?,
            suffix: suffix.to_string(),
        })
    }
}

fn parse_count(field: &'static str, token: &str) -> Result<usize, ParseError> {
    token.parse().map_err(|_| ParseError::InvalidCount {
        field,
        value: token.to_string(),
    })
}

fn field_count(s: &str, limit: usize) -> usize {
    if s.is_empty() {
        0
    } else {
        s.splitn(limit, ' ').count()
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// A record line that does not match the text format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Wrong number of space-separated fields.
    #[error("expected {expected} space-separated fields, found {found}")]
    FieldCount { expected: usize, found: usize },

    /// A count field is not a valid non-negative integer.
    #[error("invalid {field} {value:?}")]
    InvalidCount { field: &'static str, value: String },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seq_display() {
        assert_eq!(SeqRecord::new(0, "apple").to_string(), "0 apple");
        assert_eq!(SeqRecord::new(4, "ication").to_string(), "4 ication");
    }

    #[test]
    fn seq_display_empty_suffix_keeps_space() {
        assert_eq!(SeqRecord::new(5, "").to_string(), "5 ");
    }

    #[test]
    fn ref_display() {
        assert_eq!(RefRecord::new(0, 0, "apple").to_string(), "0 0 apple");
        assert_eq!(RefRecord::new(2, 4, "iance").to_string(), "2 4 iance");
    }

    #[test]
    fn seq_parse() {
        let rec: SeqRecord = "4 ication".parse().unwrap();
        assert_eq!(rec, SeqRecord::new(4, "ication"));
    }

    #[test]
    fn seq_parse_empty_suffix() {
        let rec: SeqRecord = "5 ".parse().unwrap();
        assert_eq!(rec, SeqRecord::new(5, ""));
    }

    #[test]
    fn seq_parse_suffix_with_spaces() {
        let rec: SeqRecord = "3 le pie".parse().unwrap();
        assert_eq!(rec, SeqRecord::new(3, "le pie"));
    }

    #[test]
    fn ref_parse() {
        let rec: RefRecord = "2 4 iance".parse().unwrap();
        assert_eq!(rec, RefRecord::new(2, 4, "iance"));
    }

    #[test]
    fn ref_parse_suffix_with_spaces() {
        let rec: RefRecord = "0 0 new york".parse().unwrap();
        assert_eq!(rec, RefRecord::new(0, 0, "new york"));
    }

    #[test]
    fn seq_missing_suffix_field() {
        assert_eq!(
            "5".parse::<SeqRecord>(),
            Err(ParseError::FieldCount {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn seq_empty_line() {
        assert_eq!(
            "".parse::<SeqRecord>(),
            Err(ParseError::FieldCount {
                expected: 2,
                found: 0
            })
        );
    }

    #[test]
    fn ref_missing_fields() {
        assert_eq!(
            "2 4".parse::<RefRecord>(),
            Err(ParseError::FieldCount {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn seq_non_integer_count() {
        assert_eq!(
            "x apple".parse::<SeqRecord>(),
            Err(ParseError::InvalidCount {
                field: "shared prefix length",
                value: "x".to_string()
            })
        );
    }

    #[test]
    fn seq_negative_count() {
        assert!(matches!(
            "-1 apple".parse::<SeqRecord>(),
            Err(ParseError::InvalidCount { .. })
        ));
    }

    #[test]
    fn ref_non_integer_distance() {
        assert_eq!(
            "two 4 iance".parse::<RefRecord>(),
            Err(ParseError::InvalidCount {
                field: "back-reference distance",
                value: "two".to_string()
            })
        );
    }

    #[test]
    fn display_parse_roundtrip() {
        let cases = [
            SeqRecord::new(0, "apple"),
            SeqRecord::new(4, "ication"),
            SeqRecord::new(5, ""),
            SeqRecord::new(1, "with spaces inside"),
        ];
        for rec in cases {
            assert_eq!(rec.to_string().parse::<SeqRecord>().unwrap(), rec);
        }
    }

    #[test]
    fn ref_display_parse_roundtrip() {
        let cases = [
            RefRecord::new(0, 0, "apple"),
            RefRecord::new(2, 4, "iance"),
            RefRecord::new(1, 5, ""),
        ];
        for rec in cases {
            assert_eq!(rec.to_string().parse::<RefRecord>().unwrap(), rec);
        }
    }
}
