use butterfly::{Butterfly, ButterflyError};

fn main() {
    let generator = Butterfly::with_machine(1_700_000_000_000, 16).unwrap();

    match generator.generate_batch(5) {
        Ok(ids) => {
            println!("Batch of {}:", ids.len());
            for id in ids {
                println!("  {id}");
            }
        }
        Err(err) => eprintln!("batch failed: {err}"),
    }

    // A generator seeded at the last representable millisecond runs out after 2559 ids
    let last = Butterfly::new(Butterfly::MAX_TIMESTAMP).unwrap();
    let issued = last.generate_batch(2559).unwrap();
    println!("\nIssued {} ids at the final timestamp", issued.len());

    match last.generate_batch(10) {
        Err(ButterflyError::Exhausted) => println!("Generator exhausted, batch discarded"),
        other => println!("Unexpected result: {other:?}"),
    }
}
