//! ID generation logic

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::error::ButterflyError;

use super::Butterfly;

impl Butterfly {
    /// Generate a new Butterfly ID
    ///
    /// Every id is strictly greater than the ones before it from the same generator, as long as
    /// the machine ID is aligned (see [`crate::layout::is_machine_aligned`]).
    ///
    /// # Errors
    /// * `InvariantViolation` - the machine ID was corrupted after construction
    /// * `Exhausted` - every field is at its maximum; all later calls fail the same way
    #[inline]
    pub fn generate(&self) -> Result<i64, ButterflyError> {
        let mut state = self.state.lock();
        state.advance()?;
        Ok(state.pack())
    }

    /// Generate `count` ids in issuance order
    ///
    /// Stops at the first error and returns it, dropping the ids collected so far. The lock is
    /// taken per id, so other callers may interleave with a batch.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn generate_batch(&self, count: usize) -> Result<Vec<i64>, ButterflyError> {
        (0..count).map(|_| self.generate()).collect()
    }
}
