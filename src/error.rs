use std::fmt;

use thiserror::Error;

/// Identifies which seed value failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Timestamp,
    Machine,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Timestamp => f.write_str("Timestamp"),
            Field::Machine => f.write_str("Machine ID"),
        }
    }
}

/// Represents errors that can occur during Butterfly operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ButterflyError {
    /// A seed value exceeds the capacity of its field
    #[error("{field} {value} is out of range. Maximum allowed value is {max}")]
    OutOfRange { field: Field, value: u64, max: u64 },
    /// The machine ID was found out of range while generating
    #[error("Machine ID {machine} exceeds the maximum {max}. Refusing to generate id")]
    InvariantViolation { machine: u64, max: u64 },
    /// Every field is at its maximum; the generator can never issue again
    #[error("Generator exhausted. No more ids can be issued")]
    Exhausted,
}
