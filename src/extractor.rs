use chrono::{DateTime, Utc};

use crate::config::ButterflyConfig;
use crate::layout::{
    HIGH_SEQUENCE_MAX, HIGH_SEQUENCE_SHIFT, LOW_SEQUENCE_MASK, MACHINE_MAX, MACHINE_OVERLAP_MASK,
    MACHINE_SHIFT, TIMESTAMP_MAX, TIMESTAMP_SHIFT,
};

/// The four fields of a Butterfly ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Components {
    pub timestamp: u64,
    pub high_sequence: u64,
    pub machine: u64,
    pub low_sequence: u64,
}

/// Butterfly component extractor
///
/// Decomposition is exact for aligned machine IDs. For any other machine ID the bits shared
/// with the low sequence are reported as part of the low sequence.
#[derive(Debug, Copy, Clone)]
pub struct ButterflyExtractor {
    config: ButterflyConfig,
}

impl ButterflyExtractor {
    /// Create a new Butterfly extractor with the given configuration
    pub(crate) fn new(config: ButterflyConfig) -> Self {
        Self { config }
    }

    /// Extract timestamp component from a Butterfly ID
    #[inline(always)]
    pub fn timestamp(&self, id: i64) -> u64 {
        (id as u64 >> TIMESTAMP_SHIFT) & TIMESTAMP_MAX
    }

    /// Extract high sequence component from a Butterfly ID
    #[inline(always)]
    pub fn high_sequence(&self, id: i64) -> u64 {
        (id as u64 >> HIGH_SEQUENCE_SHIFT) & HIGH_SEQUENCE_MAX
    }

    /// Extract machine component from a Butterfly ID
    #[inline(always)]
    pub fn machine(&self, id: i64) -> u64 {
        (id as u64 >> MACHINE_SHIFT) & MACHINE_MAX & !MACHINE_OVERLAP_MASK
    }

    /// Extract low sequence component from a Butterfly ID
    #[inline(always)]
    pub fn low_sequence(&self, id: i64) -> u64 {
        id as u64 & LOW_SEQUENCE_MASK
    }

    /// Decompose a Butterfly ID into its components
    #[inline]
    pub fn decompose(&self, id: i64) -> Components {
        Components {
            timestamp: self.timestamp(id),
            high_sequence: self.high_sequence(id),
            machine: self.machine(id),
            low_sequence: self.low_sequence(id),
        }
    }

    /// Wall-clock instant of the id's timestamp, offset by the configured epoch
    ///
    /// Once a generator has cascaded into its timestamp this is a logical time and may drift
    /// from when the id was actually issued.
    pub fn datetime(&self, id: i64) -> Option<DateTime<Utc>> {
        let millis = self.timestamp(id).checked_add(self.config.epoch())?;
        DateTime::<Utc>::from_timestamp_millis(i64::try_from(millis).ok()?)
    }
}
