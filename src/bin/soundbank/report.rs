//! Plain-text summary for `--list`

use saavy_bank::SoundBank;

pub fn print_table(bank: &SoundBank) {
    let sample_rate = bank.config().sample_rate;

    println!("=== Sound Bank ===");
    println!("Sample rate: {} Hz", sample_rate);
    match bank.config().seed {
        Some(seed) => println!("Seed: {}", seed),
        None => println!("Seed: none"),
    }
    println!();
    println!(
        "  {:<12} {:>8} {:>9} {:>7} {:>7} {:>6}",
        "name", "samples", "seconds", "peak", "rms", "note"
    );

    for sound in bank.iter() {
        let note = sound
            .note_duration()
            .map(|d| format!("{d:.2}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<12} {:>8} {:>9.4} {:>7.3} {:>7.3} {:>6}",
            sound.name(),
            sound.len(),
            sound.duration_seconds(sample_rate),
            sound.peak(),
            sound.rms(),
            note
        );
    }
}
