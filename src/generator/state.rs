//! Composite counter: timestamp, high sequence, machine ID, low sequence
//!
//! Advanced as a three-level odometer: low sequence rolls into high sequence, which rolls into
//! the timestamp.

use crate::error::ButterflyError;
use crate::extractor::Components;
use crate::layout::{self, HIGH_SEQUENCE_MAX, LOW_SEQUENCE_MAX, MACHINE_MAX, TIMESTAMP_MAX};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct State {
    pub(crate) timestamp: u64,
    pub(crate) high_sequence: u64,
    pub(crate) machine: u64,
    pub(crate) low_sequence: u64,
}

impl State {
    /// Fresh state with both sequences at zero
    #[inline(always)]
    pub(crate) const fn new(timestamp: u64, machine: u64) -> Self {
        Self {
            timestamp,
            high_sequence: 0,
            machine,
            low_sequence: 0,
        }
    }

    /// Step the counter by one unit
    ///
    /// On error nothing has been mutated.
    #[inline]
    pub(crate) fn advance(&mut self) -> Result<(), ButterflyError> {
        if self.low_sequence < LOW_SEQUENCE_MAX {
            self.low_sequence += 1;
            return Ok(());
        }

        if self.machine > MACHINE_MAX {
            return Err(ButterflyError::InvariantViolation {
                machine: self.machine,
                max: MACHINE_MAX,
            });
        }

        if self.high_sequence < HIGH_SEQUENCE_MAX {
            self.high_sequence += 1;
        } else if self.timestamp < TIMESTAMP_MAX {
            self.timestamp += 1;
            self.high_sequence = 0;
            #[cfg(feature = "tracing")]
            tracing::trace!(timestamp = self.timestamp, "sequences rolled over into timestamp");
        } else {
            return Err(ButterflyError::Exhausted);
        }
        self.low_sequence = 0;
        Ok(())
    }

    /// Packed id for the current fields
    #[inline(always)]
    pub(crate) const fn pack(&self) -> i64 {
        layout::pack(
            self.timestamp,
            self.high_sequence,
            self.machine,
            self.low_sequence,
        )
    }

    #[inline(always)]
    pub(crate) const fn components(&self) -> Components {
        Components {
            timestamp: self.timestamp,
            high_sequence: self.high_sequence,
            machine: self.machine,
            low_sequence: self.low_sequence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(timestamp: u64, high_sequence: u64, machine: u64, low_sequence: u64) -> State {
        State {
            timestamp,
            high_sequence,
            machine,
            low_sequence,
        }
    }

    #[test]
    fn test_low_sequence_increments() {
        let mut s = State::new(100, 8);
        s.advance().unwrap();
        assert_eq!(s, state(100, 0, 8, 1));
    }

    #[test]
    fn test_low_rolls_into_high() {
        let mut s = state(100, 3, 8, LOW_SEQUENCE_MAX);
        s.advance().unwrap();
        assert_eq!(s, state(100, 4, 8, 0));
    }

    #[test]
    fn test_high_rolls_into_timestamp() {
        let mut s = state(100, HIGH_SEQUENCE_MAX, 8, LOW_SEQUENCE_MAX);
        s.advance().unwrap();
        assert_eq!(s, state(101, 0, 8, 0));
    }

    #[test]
    fn test_exhausted_leaves_state_untouched() {
        let full = state(TIMESTAMP_MAX, HIGH_SEQUENCE_MAX, 0, LOW_SEQUENCE_MAX);
        let mut s = full;
        assert_eq!(s.advance(), Err(ButterflyError::Exhausted));
        assert_eq!(s, full);
    }

    #[test]
    fn test_machine_guard_only_on_rollover() {
        let mut s = state(100, 0, MACHINE_MAX + 1, 0);
        assert!(s.advance().is_ok());
        assert_eq!(s.low_sequence, 1);

        let corrupt = state(100, 0, MACHINE_MAX + 1, LOW_SEQUENCE_MAX);
        let mut s = corrupt;
        assert_eq!(
            s.advance(),
            Err(ButterflyError::InvariantViolation {
                machine: MACHINE_MAX + 1,
                max: MACHINE_MAX,
            })
        );
        assert_eq!(s, corrupt);
    }

    #[test]
    fn test_machine_guard_precedes_exhaustion() {
        let mut s = state(TIMESTAMP_MAX, HIGH_SEQUENCE_MAX, MACHINE_MAX + 1, LOW_SEQUENCE_MAX);
        assert!(matches!(
            s.advance(),
            Err(ButterflyError::InvariantViolation { .. })
        ));
    }

    #[test]
    fn test_pack_matches_layout() {
        let s = state(5, 6, 8, 9);
        assert_eq!(s.pack(), (5 << 22) | (6 << 14) | (8 << 1) | 9);
    }
}
