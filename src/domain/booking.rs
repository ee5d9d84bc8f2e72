use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::status::{BookingStatus, LifecycleStamp};

/// A reservation tying a customer to a venue, a date range and selected menu items.
///
/// Lifecycle timestamps stay `None` until the matching transition happens.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: String,
    pub status: BookingStatus,
    pub user_name: String,
    pub user_email: String,
    pub venue_id: String,
    #[serde(default)]
    pub menu_items: Vec<String>,
    #[serde(default)]
    pub total_amount: Decimal,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approved_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finished_at: Option<DateTime<Utc>>,
}

/// Payload for creating a new booking request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCreate {
    pub user_name: String,
    pub user_email: String,
    pub venue_id: String,
    #[serde(default)]
    pub menu_items: Vec<String>,
    #[serde(default)]
    pub total_amount: Decimal,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

/// Partial write of one booking: a status change plus its side-effect timestamp.
///
/// The store applies it only while the stored status still equals `expected_status`.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingPatch {
    pub expected_status: BookingStatus,
    pub status: BookingStatus,
    pub stamp: Option<LifecycleStamp>,
}

/// Sort key for booking queries. Records missing the key are left out of the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingOrder {
    CreatedAtDesc,
    ApprovedAtDesc,
}

/// Filter + ordering for the bookings collection.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingQuery {
    pub statuses: Vec<BookingStatus>,
    pub order: BookingOrder,
}

impl BookingQuery {
    /// Requests awaiting administrator review, newest first.
    pub fn pending() -> Self {
        Self {
            statuses: vec![BookingStatus::Pending],
            order: BookingOrder::CreatedAtDesc,
        }
    }

    /// Everything from approval onwards, most recently approved first.
    pub fn active() -> Self {
        Self {
            statuses: BookingStatus::ACTIVE_SET.to_vec(),
            order: BookingOrder::ApprovedAtDesc,
        }
    }
}

impl Booking {
    pub fn set_stamp(&mut self, stamp: LifecycleStamp, at: DateTime<Utc>) {
        let slot = match stamp {
            LifecycleStamp::ApprovedAt => &mut self.approved_at,
            LifecycleStamp::StartedAt => &mut self.started_at,
            LifecycleStamp::ReadyAt => &mut self.ready_at,
            LifecycleStamp::FinishedAt => &mut self.finished_at,
        };
        *slot = Some(at);
    }

    pub fn order_key(&self, order: BookingOrder) -> Option<DateTime<Utc>> {
        match order {
            BookingOrder::CreatedAtDesc => self.created_at,
            BookingOrder::ApprovedAtDesc => self.approved_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_document_shape() {
        let raw = r#"{
            "id": "booking_1",
            "status": "paid",
            "userName": "Maria",
            "userEmail": "maria@example.com",
            "venueId": "venue_1",
            "totalAmount": 5000,
            "startDate": "2026-12-01T10:00:00Z",
            "endDate": "2026-12-01T18:00:00Z",
            "approvedAt": "2026-11-01T09:00:00Z"
        }"#;
        let booking: Booking = serde_json::from_str(raw).unwrap();
        assert_eq!(booking.status, BookingStatus::Paid);
        assert_eq!(booking.total_amount, Decimal::from(5000));
        assert!(booking.menu_items.is_empty());
        assert!(booking.created_at.is_none());
        assert!(booking.approved_at.is_some());

        let value = serde_json::to_value(&booking).unwrap();
        assert_eq!(value["userName"], "Maria");
        assert!(value.get("finishedAt").is_none());
    }

    #[test]
    fn test_set_stamp_fills_only_its_slot() {
        let raw = r#"{"id":"b","status":"ready","userName":"u","userEmail":"e","venueId":"v",
            "startDate":"2026-01-01T00:00:00Z","endDate":"2026-01-02T00:00:00Z"}"#;
        let mut booking: Booking = serde_json::from_str(raw).unwrap();
        let at = DateTime::from_timestamp(1_800_000_000, 0).unwrap();
        booking.set_stamp(LifecycleStamp::ReadyAt, at);
        assert_eq!(booking.ready_at, Some(at));
        assert_eq!(booking.finished_at, None);
        assert_eq!(booking.approved_at, None);
    }
}
