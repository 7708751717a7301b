//! Shared error taxonomy and fixed-point scalar types.

pub mod error;
pub mod fixed;
