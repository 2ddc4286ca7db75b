//! # Butterfly
//!
//! A 64-bit unique ID generator built on a cascading composite counter.
//!
//! Each ID packs four fields into a non-negative `i64`:
//! - 41-bit timestamp, seeded from the clock and then advanced logically
//! - 8-bit high sequence
//! - 13-bit machine ID
//! - low sequence counting 0-9
//!
//! The generator is thread-safe. IDs from one generator are strictly increasing for machine IDs
//! that are multiples of 8; see [`layout`] for why other machine IDs overlap the low sequence.
//!
//! ```
//! use butterfly::Butterfly;
//!
//! let generator = Butterfly::with_machine(1_700_000_000_000, 8)?;
//! let first = generator.generate()?;
//! let second = generator.generate()?;
//! assert!(second > first);
//!
//! let batch = generator.generate_batch(3)?;
//! assert_eq!(batch.len(), 3);
//! # Ok::<(), butterfly::ButterflyError>(())
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
mod extractor;
mod generator;
pub mod layout;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{ButterflyConfig, ButterflyConfigBuilder};
pub use error::{ButterflyError, Field};
pub use extractor::{ButterflyExtractor, Components};
pub use generator::Butterfly;
