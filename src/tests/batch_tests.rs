//! Batch generation tests

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{assert_ids_monotonic, generator_with_state};
    use crate::*;

    #[test]
    fn test_empty_batch() {
        let g = Butterfly::new(10).unwrap();
        let before = g.snapshot();
        assert_eq!(g.generate_batch(0), Ok(vec![]));
        assert_eq!(g.snapshot(), before);
    }

    #[test]
    fn test_empty_batch_on_exhausted_generator() {
        let g = generator_with_state(Butterfly::MAX_TIMESTAMP, 255, 0, 9);
        assert_eq!(g.generate_batch(0), Ok(vec![]));
    }

    #[test]
    fn test_batch_matches_sequential_calls() {
        let a = Butterfly::with_machine(500, 24).unwrap();
        let b = Butterfly::with_machine(500, 24).unwrap();

        let batch = a.generate_batch(5).unwrap();
        let sequential: Vec<i64> = (0..5).map(|_| b.generate().unwrap()).collect();

        assert_eq!(batch, sequential);
        assert_ids_monotonic(&batch);
    }

    #[test]
    fn test_batch_continues_from_previous_ids() {
        let g = Butterfly::new(500).unwrap();
        let single = g.generate().unwrap();
        let batch = g.generate_batch(3).unwrap();
        assert!(batch[0] > single);
    }

    #[test]
    fn test_large_batch_crosses_timestamp() {
        let g = Butterfly::new(500).unwrap();
        let ids = g.generate_batch(10_000).unwrap();

        assert_eq!(ids.len(), 10_000);
        assert_ids_monotonic(&ids);
        assert!(g.extract.timestamp(ids[9_999]) > 500);
    }

    #[test]
    fn test_batch_discards_partial_results_on_exhaustion() {
        let g = generator_with_state(Butterfly::MAX_TIMESTAMP, 255, 0, 5);
        assert_eq!(g.generate_batch(10), Err(ButterflyError::Exhausted));
        assert_eq!(g.generate_batch(1), Err(ButterflyError::Exhausted));
    }
}
