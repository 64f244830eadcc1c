// Front-coding format implementation.
//
// Lines that share leading characters with earlier lines are stored as a
// (reference, shared-prefix-length, suffix) record instead of full text.
// Decoding is exact: reference prefix + suffix reproduces the original line.
//
// # Modules
//
// - `record`  — coded record types and the line-oriented text format
// - `encoder` — sequential and best-match encoders
// - `decoder` — sequential and best-match decoders

pub mod decoder;
pub mod encoder;
pub mod record;

// Re-export key types for convenience.
pub use decoder::{DecodeError, decode_best_match, decode_sequential};
pub use encoder::{encode_best_match, encode_sequential};
pub use record::{ParseError, RefRecord, SeqRecord};
