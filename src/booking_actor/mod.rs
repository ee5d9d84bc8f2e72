//! Booking storage concerns: the `Entity` implementation and store-level errors.

pub mod entity;
pub mod error;

pub use error::*;
