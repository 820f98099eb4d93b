//! Basic usage example for the smsplit API

use smsplit_api::{split_text, Config, Input, MessageSplitter, SuffixSizing};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Method 1: Simplest usage with convenience function
    println!("=== Method 1: Convenience Function ===");
    let output = split_text(
        "Your parcel has left our warehouse and is on its way. Track it any time \
         from the app. Delivery is expected within three working days, and the \
         driver will call you before arriving at the address you gave us.",
    )?;

    println!("Produced {} part(s):", output.len());
    for part in &output.parts {
        println!("  [{} chars] {}", part.length, part.text);
    }

    // Method 2: Configuration presets
    println!("\n=== Method 2: Strict Preset ===");
    let splitter = MessageSplitter::with_config(Config::strict());
    let output = splitter.split(Input::from_text("x".repeat(400)))?;
    println!(
        "Strict mode sliced a 400-character word into {} parts",
        output.len()
    );

    // Method 3: Custom configuration
    println!("\n=== Method 3: Custom Configuration ===");
    let config = Config::builder()
        .budget(70)
        .sizing(SuffixSizing::Exact)
        .build()?;
    let output = MessageSplitter::with_config(config)
        .split_text("Short budgets leave little room once the part suffix is added.")?;

    for text in output.texts() {
        println!("  {text}");
    }

    Ok(())
}
