//! Long Int \
//! This crate provides:
//! - [`BigInt`]: Arbitrary-precision signed integers stored one decimal digit per slot, with
//!   addition, subtraction, multiplication and truncating division.
//! - [`Error`]: The failures of parsing and of division by zero.
//!
//! Enable the `serde` feature to (de)serialize [`BigInt`] as a decimal string.

mod big_int;
mod big_num_cache;
mod big_num_constants;
mod error;
#[cfg(feature = "serde")]
mod big_int_serde;

pub use big_int::BigInt;
pub use big_num_constants::BASE;
pub use error::Error;
