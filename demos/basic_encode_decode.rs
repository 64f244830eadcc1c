use frontcode::engine::{self, Mode};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let words = "apple\napplication\napply\nbanana\nband\nbandana\n";

    let compressed = engine::compress(words, Mode::Sequential);
    let restored = engine::decompress(&compressed, Mode::Sequential)?;
    assert_eq!(restored, words);

    println!(
        "encoded {} bytes -> {} bytes -> restored {} bytes",
        words.len(),
        compressed.len(),
        restored.len()
    );

    Ok(())
}
