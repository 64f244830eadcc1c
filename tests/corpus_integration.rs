// Integration tests driving the full pipeline on generated word lists:
// compress -> records -> decompress, in both modes, in memory and through
// files on disk.

use frontcode::engine::{self, Mode};
use frontcode::front::{encode_best_match, encode_sequential};
use frontcode::io::{decode_file, encode_file, verify_file};
use frontcode::verify::{self, Comparison};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn letters(rng: &mut StdRng, len: usize) -> String {
    const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
    (0..len)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect()
}

/// Sorted dictionary-like corpus: groups of words sharing a random stem.
fn dictionary_corpus(stems: usize, seed: u64) -> String {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut words = Vec::new();
    for _ in 0..stems {
        let stem_len = rng.random_range(6..12);
        let stem = letters(&mut rng, stem_len);
        let group = rng.random_range(4..10);
        for _ in 0..group {
            let ext_len = rng.random_range(0..6);
            let ext = letters(&mut rng, ext_len);
            words.push(format!("{stem}{ext}"));
        }
    }
    words.sort();
    let mut text = words.join("\n");
    text.push('\n');
    text
}

fn roundtrip(text: &str, mode: Mode) {
    let compressed = engine::compress(text, mode);
    let restored = engine::decompress(&compressed, mode)
        .unwrap_or_else(|e| panic!("decode failed ({mode}): {e}"));
    assert_eq!(
        restored,
        text,
        "roundtrip mismatch ({mode}, input={}, compressed={})",
        text.len(),
        compressed.len()
    );
}

// ---------------------------------------------------------------------------
// In-memory roundtrips
// ---------------------------------------------------------------------------

#[test]
fn sorted_corpus_roundtrip_both_modes() {
    let text = dictionary_corpus(64, 0xF00D);
    roundtrip(&text, Mode::Sequential);
    roundtrip(&text, Mode::BestMatch);
}

#[test]
fn shuffled_corpus_roundtrip_both_modes() {
    let mut rng = StdRng::seed_from_u64(0xBEEF);
    let sorted = dictionary_corpus(64, 0xF00D);
    let mut words: Vec<&str> = sorted.lines().collect();
    words.shuffle(&mut rng);

    let mut text = words.join("\n");
    text.push('\n');
    roundtrip(&text, Mode::Sequential);
    roundtrip(&text, Mode::BestMatch);
}

#[test]
fn record_count_matches_line_count() {
    let text = dictionary_corpus(32, 7);
    let lines = text.lines().count();
    for mode in [Mode::Sequential, Mode::BestMatch] {
        let compressed = engine::compress(&text, mode);
        assert_eq!(compressed.lines().count(), lines, "mode {mode}");
    }
}

#[test]
fn sorted_corpus_compresses_smaller() {
    let text = dictionary_corpus(64, 0xF00D);
    for mode in [Mode::Sequential, Mode::BestMatch] {
        let compressed = engine::compress(&text, mode);
        assert!(
            compressed.len() < text.len(),
            "no gain ({mode}): {} -> {} bytes",
            text.len(),
            compressed.len()
        );
    }
}

#[test]
fn best_match_never_shares_less_than_sequential() {
    // The donor scan considers the previous line among its candidates, so
    // per line the shared prefix can only grow.
    let sorted = dictionary_corpus(48, 0xCAFE);
    let mut rng = StdRng::seed_from_u64(0xD1CE);
    let mut words: Vec<&str> = sorted.lines().collect();
    words.shuffle(&mut rng);

    let seq = encode_sequential(&words);
    let best = encode_best_match(&words);
    for (i, (s, b)) in seq.iter().zip(&best).enumerate() {
        assert!(
            b.shared >= s.shared,
            "line {i}: best-match shared {} < sequential shared {}",
            b.shared,
            s.shared
        );
    }
}

// ---------------------------------------------------------------------------
// Tampering
// ---------------------------------------------------------------------------

#[test]
fn tampered_record_is_caught_by_comparison() {
    let text = dictionary_corpus(16, 3);
    let compressed = engine::compress(&text, Mode::Sequential);

    // Extend the first record's suffix. The file stays well-formed but the
    // reconstructed text no longer matches the original.
    let mut records: Vec<String> = compressed.lines().map(str::to_owned).collect();
    records[0].push('x');
    let mut tampered_text = records.join("\n");
    tampered_text.push('\n');

    let restored = engine::decompress(&tampered_text, Mode::Sequential).unwrap();
    match verify::compare(&text, &restored) {
        Comparison::LineMismatch { index: 0, .. } => {}
        other => panic!("expected mismatch at line 0, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// File-level pipeline
// ---------------------------------------------------------------------------

#[test]
fn file_roundtrip_both_modes() {
    let dir = tempfile::tempdir().unwrap();
    let text = dictionary_corpus(48, 0xABCD);
    let input = dir.path().join("words.txt");
    std::fs::write(&input, &text).unwrap();

    for (mode, ext) in [(Mode::Sequential, "seq"), (Mode::BestMatch, "best")] {
        let encoded = dir.path().join(format!("words.{ext}.fc"));
        let restored = dir.path().join(format!("words.{ext}.out"));

        let enc = encode_file(&input, &encoded, mode).unwrap();
        let dec = decode_file(&encoded, &restored, mode).unwrap();

        assert_eq!(enc.lines, dec.records, "mode {mode}");
        assert_eq!(enc.input_size, dec.output_size, "mode {mode}");
        assert_eq!(std::fs::read_to_string(&restored).unwrap(), text);

        #[cfg(feature = "file-io")]
        assert_eq!(dec.output_sha256, enc.input_sha256, "mode {mode}");
    }
}

#[test]
fn verify_file_on_corpus() {
    let dir = tempfile::tempdir().unwrap();
    let text = dictionary_corpus(24, 11);
    let input = dir.path().join("verify.txt");
    std::fs::write(&input, &text).unwrap();

    for mode in [Mode::Sequential, Mode::BestMatch] {
        let stats = verify_file(&input, mode).unwrap();
        assert!(stats.comparison.is_match(), "mode {mode}");
        assert_eq!(stats.lines, text.lines().count() as u64, "mode {mode}");
    }
}
