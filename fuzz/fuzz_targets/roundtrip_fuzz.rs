#![no_main]
use frontcode::engine::{self, Mode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // Use first byte as control flags.
    let mode = if data[0] & 1 == 0 {
        Mode::Sequential
    } else {
        Mode::BestMatch
    };
    let text = String::from_utf8_lossy(&data[1..]);

    let compressed = engine::compress(&text, mode);

    // Decode and verify roundtrip. Output is normalized to end with a
    // newline, so the expectation gains one when the input lacked it.
    let restored = engine::decompress(&compressed, mode).unwrap();
    let mut expected = text.into_owned();
    if !expected.is_empty() && !expected.ends_with('\n') {
        expected.push('\n');
    }
    assert_eq!(restored, expected);
});
