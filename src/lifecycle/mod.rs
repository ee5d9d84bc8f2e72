//! Booking status transitions and the cached booking list behind each dashboard.

pub mod controller;
pub mod error;

pub use controller::*;
pub use error::*;
