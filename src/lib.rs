//! Frontcode: front coding (incremental encoding) for sorted word lists.
//!
//! The crate provides:
//! - The coded record format and codecs (`front`)
//! - Prefix matching and donor selection (`matcher`)
//! - High-level text compression APIs (`engine`)
//! - Round-trip comparison diagnostics (`verify`)
//! - File-oriented helpers (`io`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use frontcode::engine::{self, Mode};
//!
//! let words = "apple\napplication\napply\n";
//!
//! let encoded = engine::compress(words, Mode::Sequential);
//! assert_eq!(encoded, "0 apple\n4 ication\n4 y\n");
//!
//! let restored = engine::decompress(&encoded, Mode::Sequential).unwrap();
//! assert_eq!(restored, words);
//! ```

pub mod engine;
pub mod front;
pub mod io;
pub mod matcher;
pub mod verify;

#[cfg(feature = "cli")]
pub mod cli;
