use butterfly::{Butterfly, ButterflyConfig};
use rand::{rng, Rng};
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    // One shared generator per "machine", each with a distinct aligned machine ID
    let generators: Vec<Arc<Butterfly>> = (0..2u64)
        .map(|i| {
            let config = ButterflyConfig::builder().machine(i * 8).build().unwrap();
            Arc::new(Butterfly::with_config(config).unwrap())
        })
        .collect();

    let mut handles = vec![];

    // Spawn multiple threads per machine
    for thread_id in 0..4 {
        let generator = Arc::clone(&generators[thread_id % generators.len()]);
        handles.push(thread::spawn(move || {
            let mut ids = HashSet::new();
            let mut rng = rng();

            for i in 0..5 {
                let id = generator.generate().unwrap();
                let parts = generator.extract.decompose(id);

                println!(
                    "Thread {} generated ID {} (ts={}, high={}, machine={}, low={})",
                    thread_id, i, parts.timestamp, parts.high_sequence, parts.machine,
                    parts.low_sequence
                );

                assert!(ids.insert(id), "Duplicate ID generated!");

                // Random delay to simulate work
                let delay = rng.random_range(0..=9);
                thread::sleep(Duration::from_millis(delay));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        all_ids.extend(handle.join().unwrap());
    }

    println!("\nTotal unique IDs generated: {}", all_ids.len());
    assert_eq!(all_ids.len(), 20, "IDs collided across machines!");
    println!("All IDs are unique across machines!");
}
