#![no_main]
use frontcode::front::{RefRecord, SeqRecord};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Record parsing must never panic, and any record that parses must
    // survive a display/reparse cycle unchanged.
    let text = String::from_utf8_lossy(data);
    for line in text.split('\n') {
        if let Ok(rec) = line.parse::<SeqRecord>() {
            let reparsed: SeqRecord = rec.to_string().parse().unwrap();
            assert_eq!(reparsed, rec);
        }
        if let Ok(rec) = line.parse::<RefRecord>() {
            let reparsed: RefRecord = rec.to_string().parse().unwrap();
            assert_eq!(reparsed, rec);
        }
    }
});
