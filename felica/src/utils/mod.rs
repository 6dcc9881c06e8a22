//! Utilities: small, reusable helpers used across the crate.
//!
//! This module intentionally contains tiny, well-tested helpers that are
//! convenient for log output (hex) and timeout manipulation.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
