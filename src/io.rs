// File-level I/O helpers for front coding.
//
// Provides `encode_file()`, `decode_file()` and `verify_file()` convenience
// functions around the text engine. Inputs are read fully into memory (the
// record format references arbitrary prior lines, so there is no streaming
// path). Optionally computes SHA-256 digests of the texts (feature-gated
// behind `file-io`).

use std::io;
use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::engine::{self, DecompressError, Mode};
use crate::verify::{self, Comparison};

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Statistics returned by `encode_file()`.
#[derive(Debug, Clone)]
pub struct EncodeStats {
    /// Input text size in bytes.
    pub input_size: u64,
    /// Encoded output size in bytes.
    pub output_size: u64,
    /// Number of lines encoded.
    pub lines: u64,
    /// SHA-256 of the input text (if `file-io` feature is enabled).
    pub input_sha256: Option<[u8; 32]>,
    /// SHA-256 of the encoded output (if `file-io` feature is enabled).
    pub output_sha256: Option<[u8; 32]>,
}

/// Statistics returned by `decode_file()`.
#[derive(Debug, Clone)]
pub struct DecodeStats {
    /// Encoded input size in bytes.
    pub input_size: u64,
    /// Reconstructed output size in bytes.
    pub output_size: u64,
    /// Number of records decoded.
    pub records: u64,
    /// SHA-256 of the reconstructed output (if `file-io` feature is enabled).
    pub output_sha256: Option<[u8; 32]>,
}

/// Statistics returned by `verify_file()`.
#[derive(Debug, Clone)]
pub struct VerifyStats {
    /// Original text size in bytes.
    pub input_size: u64,
    /// Encoded size in bytes.
    pub compressed_size: u64,
    /// Number of lines round-tripped.
    pub lines: u64,
    /// Outcome of comparing the original against the round-tripped text.
    pub comparison: Comparison,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for file I/O operations.
#[derive(Debug, Error)]
pub enum IoError {
    /// I/O error (file open, read, write, or non-UTF-8 content).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Record parsing or decoding error.
    #[error("decode error: {0}")]
    Decompress(#[from] DecompressError),
}

// ---------------------------------------------------------------------------
// encode_file
// ---------------------------------------------------------------------------

/// Front-code a word-list file, writing records to `output_path`.
///
/// When the `file-io` feature is enabled, SHA-256 digests of both texts are
/// included in the stats.
pub fn encode_file(
    input_path: &Path,
    output_path: &Path,
    mode: Mode,
) -> Result<EncodeStats, IoError> {
    let text = std::fs::read_to_string(input_path)?;
    let lines = engine::split_lines(&text).len() as u64;

    let encoded = engine::compress(&text, mode);
    std::fs::write(output_path, &encoded)?;

    debug!(
        "encoded {lines} lines ({mode}): {} -> {} bytes",
        text.len(),
        encoded.len()
    );

    Ok(EncodeStats {
        input_size: text.len() as u64,
        output_size: encoded.len() as u64,
        lines,
        input_sha256: sha256(&text),
        output_sha256: sha256(&encoded),
    })
}

// ---------------------------------------------------------------------------
// decode_file
// ---------------------------------------------------------------------------

/// Decode a front-coded file, writing the reconstructed text to `output_path`.
///
/// When the `file-io` feature is enabled, a SHA-256 digest of the output is
/// included in the stats.
pub fn decode_file(
    input_path: &Path,
    output_path: &Path,
    mode: Mode,
) -> Result<DecodeStats, IoError> {
    let text = std::fs::read_to_string(input_path)?;
    let records = engine::split_lines(&text).len() as u64;

    let restored = engine::decompress(&text, mode)?;
    std::fs::write(output_path, &restored)?;

    debug!(
        "decoded {records} records ({mode}): {} -> {} bytes",
        text.len(),
        restored.len()
    );

    Ok(DecodeStats {
        input_size: text.len() as u64,
        output_size: restored.len() as u64,
        records,
        output_sha256: sha256(&restored),
    })
}

// ---------------------------------------------------------------------------
// verify_file
// ---------------------------------------------------------------------------

/// Round-trip a word-list file in memory and compare, writing nothing.
pub fn verify_file(input_path: &Path, mode: Mode) -> Result<VerifyStats, IoError> {
    let text = std::fs::read_to_string(input_path)?;
    let lines = engine::split_lines(&text).len() as u64;

    let encoded = engine::compress(&text, mode);
    let restored = engine::decompress(&encoded, mode)?;
    let comparison = verify::compare(&text, &restored);

    debug!(
        "verified {lines} lines ({mode}): {} -> {} bytes, {comparison}",
        text.len(),
        encoded.len()
    );

    Ok(VerifyStats {
        input_size: text.len() as u64,
        compressed_size: encoded.len() as u64,
        lines,
        comparison,
    })
}

// ---------------------------------------------------------------------------
// Digests (used with file-io feature)
// ---------------------------------------------------------------------------

#[cfg(feature = "file-io")]
fn sha256(text: &str) -> Option<[u8; 32]> {
    use sha2::Digest;
    let mut hasher = sha2::Sha256::new();
    hasher.update(text.as_bytes());
    Some(hasher.finalize().into())
}

#[cfg(not(feature = "file-io"))]
fn sha256(_text: &str) -> Option<[u8; 32]> {
    None
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;

    fn write_temp_file(name: &str, data: &[u8]) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join("frontcode_io_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        let mut f = File::create(&path).unwrap();
        f.write_all(data).unwrap();
        path
    }

    fn cleanup_temp_files(paths: &[&Path]) {
        for p in paths {
            let _ = std::fs::remove_file(p);
        }
    }

    #[test]
    fn encode_decode_file_roundtrip() {
        let input_data = b"apple\napplication\napply\nbanana\nband\n";

        let input_path = write_temp_file("words.txt", input_data);
        let encoded_path = write_temp_file("words.fc", b"");
        let output_path = write_temp_file("words.out", b"");

        let enc_stats = encode_file(&input_path, &encoded_path, Mode::Sequential).unwrap();

        assert_eq!(enc_stats.input_size, input_data.len() as u64);
        assert_eq!(enc_stats.lines, 5);
        assert!(enc_stats.output_size > 0);

        let dec_stats = decode_file(&encoded_path, &output_path, Mode::Sequential).unwrap();

        assert_eq!(dec_stats.records, 5);
        assert_eq!(dec_stats.output_size, input_data.len() as u64);

        let output_data = std::fs::read(&output_path).unwrap();
        assert_eq!(output_data, input_data);

        cleanup_temp_files(&[&input_path, &encoded_path, &output_path]);
    }

    #[test]
    fn decode_file_mode_mismatch_reports_error() {
        let input_path = write_temp_file("mismatch.txt", b"apple\nappliance\n");
        let encoded_path = write_temp_file("mismatch.fc", b"");
        let output_path = write_temp_file("mismatch.out", b"");

        encode_file(&input_path, &encoded_path, Mode::Sequential).unwrap();

        // Sequential records have two fields; the best-match parser needs
        // three and must reject the file rather than guess.
        let result = decode_file(&encoded_path, &output_path, Mode::BestMatch);
        assert!(matches!(result, Err(IoError::Decompress(_))), "{result:?}");

        cleanup_temp_files(&[&input_path, &encoded_path, &output_path]);
    }

    #[test]
    fn verify_file_matches() {
        let input_path = write_temp_file("verify.txt", b"band\nbanana\nbandana\n");

        let stats = verify_file(&input_path, Mode::BestMatch).unwrap();
        assert!(stats.comparison.is_match());
        assert_eq!(stats.lines, 3);
        assert!(stats.compressed_size > 0);

        cleanup_temp_files(&[&input_path]);
    }

    #[test]
    fn missing_input_is_io_error() {
        let missing = std::env::temp_dir().join("frontcode_io_test/no_such_file.txt");
        let out = std::env::temp_dir().join("frontcode_io_test/no_such_out.txt");
        match encode_file(&missing, &out, Mode::Sequential) {
            Err(IoError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[cfg(feature = "file-io")]
    #[test]
    fn sha256_digests_computed() {
        let input_data = b"apple\napplication\n";
        let input_path = write_temp_file("sha_words.txt", input_data);
        let encoded_path = write_temp_file("sha_words.fc", b"");
        let output_path = write_temp_file("sha_words.out", b"");

        let enc_stats = encode_file(&input_path, &encoded_path, Mode::Sequential).unwrap();
        assert!(enc_stats.input_sha256.is_some());
        assert!(enc_stats.output_sha256.is_some());

        let dec_stats = decode_file(&encoded_path, &output_path, Mode::Sequential).unwrap();

        // The reconstructed output digest must match the original input digest.
        assert_eq!(dec_stats.output_sha256, enc_stats.input_sha256);

        cleanup_temp_files(&[&input_path, &encoded_path, &output_path]);
    }
}
