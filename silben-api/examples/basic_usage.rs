//! Basic usage example for silben-api

use silben_api::{check_syllable_answer, SyllableQuestion, SyllableSplitter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let splitter = SyllableSplitter::new()?;

    for (word, count) in [("Hund", 1), ("Sonne", 2), ("Schmetterling", 3), ("Brot", 3)] {
        let breakdown = splitter.split(word, count);
        println!("{word:>15}: {} ({})", breakdown.display, breakdown.method);
    }

    let question = SyllableQuestion {
        word: "Banane".to_string(),
        syllable_count: 3,
        difficulty: 2,
    };
    let verdict = check_syllable_answer(&splitter, &question, 3);
    println!("{} (+{} points)", verdict.feedback, verdict.points);

    Ok(())
}
