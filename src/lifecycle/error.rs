use thiserror::Error;

use crate::booking_actor::BookingError;
use crate::domain::{BookingAction, BookingStatus, InvalidTransition};

/// A status change the store accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct AppliedTransition {
    pub booking_id: String,
    pub action: BookingAction,
    pub from: BookingStatus,
    pub to: BookingStatus,
}

/// Errors returned by the booking lifecycle controller.
///
/// Every variant except `RefreshFailed` guarantees the store was not written.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LifecycleError {
    #[error("Booking {id}: {source}")]
    InvalidTransition { id: String, source: InvalidTransition },
    #[error("Unknown booking: {0}")]
    UnknownBooking(String),
    #[error("Booking {id} was modified by someone else: {reason}")]
    Conflict { id: String, reason: String },
    #[error("Store read failed: {0}")]
    StoreRead(String),
    #[error("Store write failed: {0}")]
    StoreWrite(String),
    #[error(
        "Booking {} moved to {} but the list refresh failed: {reason}",
        .applied.booking_id,
        .applied.to
    )]
    RefreshFailed { applied: AppliedTransition, reason: String },
}

impl LifecycleError {
    pub(crate) fn from_read(err: BookingError) -> Self {
        match err {
            BookingError::NotFound(id) => LifecycleError::UnknownBooking(id),
            other => LifecycleError::StoreRead(other.to_string()),
        }
    }

    pub(crate) fn from_write(id: &str, err: BookingError) -> Self {
        match err {
            BookingError::NotFound(id) => LifecycleError::UnknownBooking(id),
            BookingError::Rejected(reason) => {
                LifecycleError::Conflict { id: id.to_string(), reason }
            }
            other => LifecycleError::StoreWrite(other.to_string()),
        }
    }

    /// Whether the store may hold a different record than before the call.
    pub fn store_was_written(&self) -> bool {
        matches!(self, LifecycleError::RefreshFailed { .. })
    }
}
