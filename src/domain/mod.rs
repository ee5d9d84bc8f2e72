pub mod booking;
pub mod catalog;
pub mod staff;
pub mod status;

pub use booking::*;
pub use catalog::*;
pub use staff::*;
pub use status::*;
