//! Read-only reference collections: venues, menu items and staff profiles.

pub mod entity;
pub mod error;

pub use error::*;
