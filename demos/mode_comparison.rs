use frontcode::engine::{self, Mode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Interleaved stems: sequential mode keeps falling back to (0, full line),
    // best-match mode reaches past the neighbor to the right donor.
    let words = "apple\nbanana\nappliance\nbandana\napplication\nbandit\n";

    for mode in [Mode::Sequential, Mode::BestMatch] {
        let compressed = engine::compress(words, mode);
        let restored = engine::decompress(&compressed, mode)?;
        assert_eq!(restored, words);

        println!("{mode}: {} -> {} bytes", words.len(), compressed.len());
        for record in compressed.lines() {
            println!("  {record}");
        }
    }

    Ok(())
}
