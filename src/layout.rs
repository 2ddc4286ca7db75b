//! Bit layout of a Butterfly ID
//!
//! From most to least significant bit:
//!
//! ```text
//! | sign (0) | timestamp (41) | high sequence (8) | machine (13) | low sequence (1) |
//! ```
//!
//! The low sequence is allotted a single bit but counts up to 9. Values 2-9 spill into the
//! three lowest bits of the shifted machine ID, so only machine IDs with those bits clear
//! (see [`is_machine_aligned`]) produce ids that are strictly ordered and decompose exactly.

/// Width of the timestamp field
pub const TIMESTAMP_BITS: u32 = 41;
/// Width of the high sequence field
pub const HIGH_SEQUENCE_BITS: u32 = 8;
/// Width of the machine ID field
pub const MACHINE_BITS: u32 = 13;
/// Width allotted to the low sequence field
pub const LOW_SEQUENCE_BITS: u32 = 1;

pub const TIMESTAMP_MAX: u64 = max_for(TIMESTAMP_BITS);
pub const HIGH_SEQUENCE_MAX: u64 = max_for(HIGH_SEQUENCE_BITS);
pub const MACHINE_MAX: u64 = max_for(MACHINE_BITS);
/// Decimal ceiling, intentionally wider than [`LOW_SEQUENCE_BITS`] allows
pub const LOW_SEQUENCE_MAX: u64 = 9;

pub const MACHINE_SHIFT: u32 = LOW_SEQUENCE_BITS;
pub const HIGH_SEQUENCE_SHIFT: u32 = MACHINE_BITS + LOW_SEQUENCE_BITS;
pub const TIMESTAMP_SHIFT: u32 = HIGH_SEQUENCE_BITS + MACHINE_BITS + LOW_SEQUENCE_BITS;

/// Bits actually occupied by a low sequence value up to [`LOW_SEQUENCE_MAX`]
pub const LOW_SEQUENCE_SPAN_BITS: u32 = u64::BITS - LOW_SEQUENCE_MAX.leading_zeros();
pub const LOW_SEQUENCE_MASK: u64 = max_for(LOW_SEQUENCE_SPAN_BITS);
/// Machine ID bits shadowed by the low sequence span
pub const MACHINE_OVERLAP_MASK: u64 = max_for(LOW_SEQUENCE_SPAN_BITS - MACHINE_SHIFT);

// Packed ids must leave the sign bit clear.
const _: () = assert!(TIMESTAMP_SHIFT + TIMESTAMP_BITS == i64::BITS - 1);

#[inline(always)]
const fn max_for(bits: u32) -> u64 {
    (1u64 << bits) - 1
}

/// Pack the four fields into an id
#[inline(always)]
pub const fn pack(timestamp: u64, high_sequence: u64, machine: u64, low_sequence: u64) -> i64 {
    ((timestamp << TIMESTAMP_SHIFT)
        | (high_sequence << HIGH_SEQUENCE_SHIFT)
        | (machine << MACHINE_SHIFT)
        | low_sequence) as i64
}

/// Whether `machine` stays clear of the bits the low sequence spills into
#[inline(always)]
pub const fn is_machine_aligned(machine: u64) -> bool {
    machine & MACHINE_OVERLAP_MASK == 0
}
