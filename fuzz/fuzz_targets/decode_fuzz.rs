#![no_main]
use frontcode::engine::{self, Mode};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Fuzz the decoder with arbitrary text.
    // The decoder must never panic, only return errors.
    let text = String::from_utf8_lossy(data);
    let _ = engine::decompress(&text, Mode::Sequential);
    let _ = engine::decompress(&text, Mode::BestMatch);
});
