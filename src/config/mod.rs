//! Configuration for Butterfly generator

mod builder;

pub use builder::ButterflyConfigBuilder;
use builder::{DEFAULT_EPOCH, DEFAULT_MACHINE};

/// Configuration for Butterfly generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButterflyConfig {
    machine: u64,
    epoch: u64,
}

impl ButterflyConfig {
    /// Create config from builder
    pub(crate) fn from_builder(b: ButterflyConfigBuilder) -> Self {
        Self {
            machine: b.machine,
            epoch: b.epoch,
        }
    }

    /// Create a new configuration builder
    pub const fn builder() -> ButterflyConfigBuilder {
        ButterflyConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn machine(&self) -> u64 {
        self.machine
    }

    #[inline(always)]
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }
}

impl Default for ButterflyConfig {
    fn default() -> Self {
        Self {
            machine: DEFAULT_MACHINE,
            epoch: DEFAULT_EPOCH,
        }
    }
}
