use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Lifecycle stage of a booking.
///
/// Statuses only move forward along
/// `pending -> approved -> ongoing -> paid -> ready -> finished`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Ongoing,
    Paid,
    Ready,
    Finished,
}

/// Operator or external event that moves a booking to its next status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingAction {
    /// Administrator approves a pending request.
    Approve,
    /// Owner accepts an approved booking and the event starts.
    Accept,
    /// Payment collaborator reports that the event was paid for.
    RecordPayment,
    /// Owner marks the villa ready.
    MarkReady,
    /// Owner closes the booking.
    MarkFinished,
}

/// Timestamp field written alongside a status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LifecycleStamp {
    ApprovedAt,
    StartedAt,
    ReadyAt,
    FinishedAt,
}

/// One row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRule {
    pub action: BookingAction,
    pub source: BookingStatus,
    pub target: BookingStatus,
    pub stamp: Option<LifecycleStamp>,
}

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("cannot {action} a booking that is {from}")]
pub struct InvalidTransition {
    pub from: BookingStatus,
    pub action: BookingAction,
}

impl BookingStatus {
    /// Every status the owner view lists.
    pub const ACTIVE_SET: [BookingStatus; 5] = [
        BookingStatus::Approved,
        BookingStatus::Ongoing,
        BookingStatus::Paid,
        BookingStatus::Ready,
        BookingStatus::Finished,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Ongoing => "ongoing",
            BookingStatus::Paid => "paid",
            BookingStatus::Ready => "ready",
            BookingStatus::Finished => "finished",
        }
    }

    /// Validate `action` against the transition table and return the target status.
    pub fn apply(self, action: BookingAction) -> Result<BookingStatus, InvalidTransition> {
        let rule = action.rule();
        if rule.source == self {
            Ok(rule.target)
        } else {
            Err(InvalidTransition { from: self, action: rule.action })
        }
    }

    pub fn is_terminal(self) -> bool {
        self == BookingStatus::Finished
    }

    /// Statuses whose amount counts towards revenue.
    pub fn is_revenue(self) -> bool {
        matches!(self, BookingStatus::Paid | BookingStatus::Ready | BookingStatus::Finished)
    }

    /// Action whose button the owner view shows for this status.
    ///
    /// Ongoing bookings wait on the payment collaborator, so they get no button.
    pub fn owner_action(self) -> Option<BookingAction> {
        match self {
            BookingStatus::Approved => Some(BookingAction::Accept),
            BookingStatus::Paid => Some(BookingAction::MarkReady),
            BookingStatus::Ready => Some(BookingAction::MarkFinished),
            _ => None,
        }
    }

    pub fn owner_label(self) -> &'static str {
        match self {
            BookingStatus::Pending => "Pending",
            BookingStatus::Approved => "Approved",
            BookingStatus::Ongoing => "Event Ongoing",
            BookingStatus::Paid => "Payment Received",
            BookingStatus::Ready => "Villa Ready",
            BookingStatus::Finished => "Event Completed",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl BookingAction {
    /// The transition table: source, target and timestamp for each action.
    pub fn rule(self) -> TransitionRule {
        use BookingStatus::*;
        use LifecycleStamp::*;

        let (source, target, stamp) = match self {
            BookingAction::Approve => (Pending, Approved, Some(ApprovedAt)),
            BookingAction::Accept => (Approved, Ongoing, Some(StartedAt)),
            BookingAction::RecordPayment => (Ongoing, Paid, None),
            BookingAction::MarkReady => (Paid, Ready, Some(ReadyAt)),
            BookingAction::MarkFinished => (Ready, Finished, Some(FinishedAt)),
        };
        TransitionRule { action: self, source, target, stamp }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            BookingAction::Approve => "Approve Booking",
            BookingAction::Accept => "Accept",
            BookingAction::RecordPayment => "Record Payment",
            BookingAction::MarkReady => "Mark Villa as Ready",
            BookingAction::MarkFinished => "Mark as Finished",
        }
    }
}

impl fmt::Display for BookingAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BookingAction::Approve => "approve",
            BookingAction::Accept => "accept",
            BookingAction::RecordPayment => "record payment for",
            BookingAction::MarkReady => "mark ready",
            BookingAction::MarkFinished => "mark finished",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ACTIONS: [BookingAction; 5] = [
        BookingAction::Approve,
        BookingAction::Accept,
        BookingAction::RecordPayment,
        BookingAction::MarkReady,
        BookingAction::MarkFinished,
    ];

    const ALL_STATUSES: [BookingStatus; 6] = [
        BookingStatus::Pending,
        BookingStatus::Approved,
        BookingStatus::Ongoing,
        BookingStatus::Paid,
        BookingStatus::Ready,
        BookingStatus::Finished,
    ];

    fn rank(status: BookingStatus) -> usize {
        ALL_STATUSES.iter().position(|s| *s == status).unwrap()
    }

    #[test]
    fn test_rule_belongs_to_its_action() {
        for action in ALL_ACTIONS {
            assert_eq!(action.rule().action, action);
        }
    }

    #[test]
    fn test_rule_rows() {
        assert_eq!(
            BookingAction::MarkReady.rule(),
            TransitionRule {
                action: BookingAction::MarkReady,
                source: BookingStatus::Paid,
                target: BookingStatus::Ready,
                stamp: Some(LifecycleStamp::ReadyAt),
            }
        );
        assert_eq!(BookingAction::Accept.rule().source, BookingStatus::Approved);
        assert_eq!(BookingAction::MarkFinished.rule().target, BookingStatus::Finished);
    }

    #[test]
    fn test_each_status_has_at_most_one_legal_action() {
        for status in ALL_STATUSES {
            let legal: Vec<_> = ALL_ACTIONS.iter().filter(|a| status.apply(**a).is_ok()).collect();
            if status.is_terminal() {
                assert!(legal.is_empty());
            } else {
                assert_eq!(legal.len(), 1, "{status}");
            }
        }
    }

    #[test]
    fn test_transitions_only_move_forward_one_step() {
        for status in ALL_STATUSES {
            for action in ALL_ACTIONS {
                if let Ok(target) = status.apply(action) {
                    assert_eq!(rank(target), rank(status) + 1);
                }
            }
        }
    }

    #[test]
    fn test_finished_rejects_everything() {
        for action in ALL_ACTIONS {
            assert_eq!(
                BookingStatus::Finished.apply(action),
                Err(InvalidTransition { from: BookingStatus::Finished, action })
            );
        }
    }

    #[test]
    fn test_payment_carries_no_stamp() {
        assert_eq!(BookingAction::RecordPayment.rule().stamp, None);
        assert_eq!(BookingAction::Approve.rule().stamp, Some(LifecycleStamp::ApprovedAt));
        assert_eq!(BookingAction::MarkFinished.rule().stamp, Some(LifecycleStamp::FinishedAt));
    }

    #[test]
    fn test_owner_buttons_match_legal_actions() {
        for status in ALL_STATUSES {
            if let Some(action) = status.owner_action() {
                assert!(status.apply(action).is_ok());
            }
        }
        assert_eq!(BookingStatus::Ongoing.owner_action(), None);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&BookingStatus::Finished).unwrap(), "\"finished\"");
        let parsed: BookingStatus = serde_json::from_str("\"paid\"").unwrap();
        assert_eq!(parsed, BookingStatus::Paid);
    }

    #[test]
    fn test_invalid_transition_message() {
        let err = BookingStatus::Pending.apply(BookingAction::MarkReady).unwrap_err();
        assert_eq!(err.to_string(), "cannot mark ready a booking that is pending");
    }
}
