//! Dashboard summary figures derived from an in-memory booking collection.
//!
//! Every function here is a pure, order-insensitive reduction.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::domain::{Booking, BookingStatus};

/// Sum of `total_amount` over paid, ready and finished bookings.
///
/// Saturates at `Decimal::MAX` instead of overflowing. Stored amounts are never
/// negative, so the saturated result does not depend on input order.
pub fn total_revenue(bookings: &[Booking]) -> Decimal {
    bookings
        .iter()
        .filter(|b| b.status.is_revenue())
        .fold(Decimal::ZERO, |acc, b| acc.saturating_add(b.total_amount))
}

/// Bookings approved but not yet accepted by the owner.
pub fn active_count(bookings: &[Booking]) -> usize {
    count_status(bookings, BookingStatus::Approved)
}

pub fn completed_count(bookings: &[Booking]) -> usize {
    count_status(bookings, BookingStatus::Finished)
}

/// Unfinished bookings whose event starts strictly after `now`.
pub fn upcoming_count(bookings: &[Booking], now: DateTime<Utc>) -> usize {
    bookings
        .iter()
        .filter(|b| !b.status.is_terminal() && b.start_date > now)
        .count()
}

fn count_status(bookings: &[Booking], status: BookingStatus) -> usize {
    bookings.iter().filter(|b| b.status == status).count()
}

/// All owner-dashboard figures computed in one go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    pub total_revenue: Decimal,
    pub active_bookings: usize,
    pub completed_bookings: usize,
    pub upcoming_bookings: usize,
}

impl DashboardStats {
    pub fn compute(bookings: &[Booking], now: DateTime<Utc>) -> Self {
        Self {
            total_revenue: total_revenue(bookings),
            active_bookings: active_count(bookings),
            completed_bookings: completed_count(bookings),
            upcoming_bookings: upcoming_count(bookings, now),
        }
    }
}
