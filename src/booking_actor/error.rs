use thiserror::Error;

use crate::actor_framework::FrameworkError;

/// Errors that can occur while talking to the bookings collection.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BookingError {
    #[error("Booking not found: {0}")]
    NotFound(String),
    #[error("Booking write rejected: {0}")]
    Rejected(String),
    #[error("Booking store read failed: {0}")]
    StoreRead(String),
    #[error("Booking store write failed: {0}")]
    StoreWrite(String),
}

impl BookingError {
    pub fn from_read(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => BookingError::NotFound(id),
            other => BookingError::StoreRead(other.to_string()),
        }
    }

    pub fn from_write(err: FrameworkError) -> Self {
        match err {
            FrameworkError::NotFound(id) => BookingError::NotFound(id),
            FrameworkError::Rejected(reason) => BookingError::Rejected(reason),
            other => BookingError::StoreWrite(other.to_string()),
        }
    }
}
