//! ButterflyConfig builder for constructing configuration

use crate::error::{ButterflyError, Field};
use crate::layout::MACHINE_MAX;

use super::ButterflyConfig;

/// Default configuration values
pub(super) const DEFAULT_MACHINE: u64 = 0;
pub(super) const DEFAULT_EPOCH: u64 = 0; // Unix epoch

/// Builder for ButterflyConfig
#[derive(Debug)]
pub struct ButterflyConfigBuilder {
    pub(super) machine: u64,
    pub(super) epoch: u64,
}

impl ButterflyConfigBuilder {
    /// Create a new ButterflyConfigBuilder with default values
    pub const fn new() -> Self {
        Self {
            machine: DEFAULT_MACHINE,
            epoch: DEFAULT_EPOCH,
        }
    }

    /// Set the machine ID (0-8191), validated by [`build`](Self::build)
    pub const fn machine(mut self, machine: u64) -> Self {
        self.machine = machine;
        self
    }

    /// Set a custom epoch in milliseconds since the Unix epoch
    ///
    /// Clock-seeded generators count their timestamp from here.
    pub const fn epoch(mut self, epoch: u64) -> Self {
        self.epoch = epoch;
        self
    }

    /// Build the final ButterflyConfig
    pub fn build(self) -> Result<ButterflyConfig, ButterflyError> {
        if self.machine > MACHINE_MAX {
            return Err(ButterflyError::OutOfRange {
                field: Field::Machine,
                value: self.machine,
                max: MACHINE_MAX,
            });
        }
        Ok(ButterflyConfig::from_builder(self))
    }
}

impl Default for ButterflyConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
