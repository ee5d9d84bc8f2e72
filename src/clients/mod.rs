#[macro_use]
mod macros;

pub mod booking_client;
pub mod catalog_client;

pub use booking_client::*;
pub use catalog_client::*;
