use butterfly::{Butterfly, ButterflyError};

fn main() -> Result<(), ButterflyError> {
    // Seeded from the wall clock, machine ID 0
    let generator = Butterfly::now()?;

    let id1 = generator.generate()?;
    let id2 = generator.generate()?;
    let id3 = generator.generate()?;

    println!("Generated IDs (guaranteed to be increasing):");
    print_id(id1, &generator);
    print_id(id2, &generator);
    print_id(id3, &generator);

    // Or extract components individually
    let ts = generator.extract.timestamp(id3);
    let high = generator.extract.high_sequence(id3);
    let machine = generator.extract.machine(id3);
    let low = generator.extract.low_sequence(id3);
    println!("\nComponents of ID3 (extracted individually):");
    println!("  Timestamp: {ts} ms since epoch");
    println!("  High sequence: {high}");
    println!("  Machine ID: {machine}");
    println!("  Low sequence: {low}");

    Ok(())
}

fn print_id(id: i64, generator: &Butterfly) {
    let parts = generator.extract.decompose(id);
    let datetime = generator
        .extract
        .datetime(id)
        .map(|dt| dt.to_string())
        .unwrap_or_else(|| "out of range".into());

    println!(
        "  ID: {id}, Timestamp: {}, Human date: {datetime}, High: {}, Machine ID: {}, Low: {}",
        parts.timestamp, parts.high_sequence, parts.machine, parts.low_sequence
    );
}
