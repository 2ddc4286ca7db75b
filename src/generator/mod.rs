//! Core Butterfly generator implementation
//!
//! Split into modules for testability:
//! - `state` - Composite counter and its overflow cascade
//! - `time` - Wall-clock time utilities
//! - `generate` - ID generation logic

mod generate;
mod state;
mod time;

use parking_lot::Mutex;

use crate::config::ButterflyConfig;
use crate::error::{ButterflyError, Field};
use crate::extractor::{ButterflyExtractor, Components};
use crate::layout;

pub(crate) use state::State;
use time::time_since_epoch;

/// Main ID generator with cache-line alignment
///
/// All four counters sit behind a single mutex, so a `Butterfly` can be shared between threads
/// with an `Arc`.
#[derive(Debug)]
#[repr(align(64))]
pub struct Butterfly {
    pub(crate) state: Mutex<State>,

    pub config: ButterflyConfig,
    pub extract: ButterflyExtractor,
}

impl Butterfly {
    pub const TIMESTAMP_BITS: u32 = layout::TIMESTAMP_BITS;
    pub const HIGH_SEQUENCE_BITS: u32 = layout::HIGH_SEQUENCE_BITS;
    pub const MACHINE_BITS: u32 = layout::MACHINE_BITS;
    pub const LOW_SEQUENCE_BITS: u32 = layout::LOW_SEQUENCE_BITS;

    pub const MAX_TIMESTAMP: u64 = layout::TIMESTAMP_MAX;
    pub const MAX_HIGH_SEQUENCE: u64 = layout::HIGH_SEQUENCE_MAX;
    pub const MAX_MACHINE: u64 = layout::MACHINE_MAX;
    pub const MAX_LOW_SEQUENCE: u64 = layout::LOW_SEQUENCE_MAX;

    /// Create with a seed timestamp and machine ID 0
    ///
    /// # Arguments
    ///
    /// * `timestamp` - Seed for the timestamp field, at most [`Self::MAX_TIMESTAMP`]
    ///
    /// # Returns
    /// * `Result<Butterfly, Error>` - New generator or `OutOfRange` if the timestamp is too large
    pub fn new(timestamp: u64) -> Result<Self, ButterflyError> {
        Self::with_machine(timestamp, 0)
    }

    /// Create with a seed timestamp and machine ID
    ///
    /// The machine ID is checked before the timestamp, so its error wins when both are invalid.
    pub fn with_machine(timestamp: u64, machine: u64) -> Result<Self, ButterflyError> {
        let config = ButterflyConfig::builder().machine(machine).build()?;
        Self::seeded(timestamp, config)
    }

    /// Create with machine ID 0, seeded from the current wall-clock time
    pub fn now() -> Result<Self, ButterflyError> {
        Self::with_config(ButterflyConfig::default())
    }

    /// Create from configuration, seeded from the wall clock relative to its epoch
    pub fn with_config(config: ButterflyConfig) -> Result<Self, ButterflyError> {
        Self::seeded(time_since_epoch(config.epoch()), config)
    }

    fn seeded(timestamp: u64, config: ButterflyConfig) -> Result<Self, ButterflyError> {
        Self::validate_timestamp(timestamp)?;
        Ok(Self::build(State::new(timestamp, config.machine()), config))
    }

    fn validate_timestamp(timestamp: u64) -> Result<(), ButterflyError> {
        if timestamp > layout::TIMESTAMP_MAX {
            return Err(ButterflyError::OutOfRange {
                field: Field::Timestamp,
                value: timestamp,
                max: layout::TIMESTAMP_MAX,
            });
        }
        Ok(())
    }

    pub(crate) fn build(state: State, config: ButterflyConfig) -> Self {
        Self {
            state: Mutex::new(state),
            config,
            extract: ButterflyExtractor::new(config),
        }
    }

    /// Machine ID stamped into every id from this generator
    #[inline(always)]
    pub const fn machine(&self) -> u64 {
        self.config.machine()
    }

    /// Current counter fields, read under the lock
    pub fn snapshot(&self) -> Components {
        self.state.lock().components()
    }
}
