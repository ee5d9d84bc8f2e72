use std::fmt;

use crate::domain::BookingAction;
use crate::lifecycle::{AppliedTransition, LifecycleError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Error,
}

/// Operator-facing message produced by a dashboard action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    /// Underlying cause, for the operator's "details" view.
    pub detail: Option<String>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into(), detail: None }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into(), detail: None }
    }

    pub fn error(message: impl Into<String>, detail: impl fmt::Display) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            detail: Some(detail.to_string()),
        }
    }

    /// Translate a transition result into the message shown to the operator.
    pub fn for_transition(
        action: BookingAction,
        result: &Result<AppliedTransition, LifecycleError>,
    ) -> Self {
        match result {
            Ok(_) => Notice::success(success_message(action)),
            // The write landed; only the list is stale.
            Err(e) if e.store_was_written() => Self {
                level: NoticeLevel::Info,
                message: format!(
                    "{} The list could not be refreshed, reload to see the latest bookings.",
                    success_message(action)
                ),
                detail: Some(e.to_string()),
            },
            Err(e) => Notice::error(failure_message(action), e),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{} ({})", self.message, detail),
            None => f.write_str(&self.message),
        }
    }
}

fn success_message(action: BookingAction) -> &'static str {
    match action {
        BookingAction::Approve => "Booking approved successfully!",
        BookingAction::Accept => "Booking accepted, the event is now ongoing.",
        BookingAction::RecordPayment => "Payment recorded.",
        BookingAction::MarkReady => "Villa marked as ready.",
        BookingAction::MarkFinished => "Booking marked as finished.",
    }
}

fn failure_message(action: BookingAction) -> &'static str {
    match action {
        BookingAction::Approve => "Error approving booking. Please try again.",
        BookingAction::Accept => "Error updating booking status. Please try again.",
        BookingAction::RecordPayment => "Error recording payment. Please try again.",
        BookingAction::MarkReady => "Error updating villa status. Please try again.",
        BookingAction::MarkFinished => "Error marking booking as finished. Please try again.",
    }
}
