use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::actor_framework::Entity;
use crate::domain::{Booking, BookingCreate, BookingPatch, BookingQuery, BookingStatus};

impl Entity for Booking {
    type Id = String;
    type CreateParams = BookingCreate;
    type Patch = BookingPatch;
    type Query = BookingQuery;

    const COLLECTION: &'static str = "bookings";

    fn id(&self) -> &String { &self.id }

    /// Creates a new pending booking request.
    ///
    /// `createdAt` is taken from the store clock.
    fn from_create_params(
        id: String,
        params: BookingCreate,
        now: DateTime<Utc>,
    ) -> Result<Self, String> {
        Ok(Self {
            id,
            status: BookingStatus::Pending,
            user_name: params.user_name,
            user_email: params.user_email,
            venue_id: params.venue_id,
            menu_items: params.menu_items,
            total_amount: params.total_amount,
            start_date: params.start_date,
            end_date: params.end_date,
            created_at: Some(now),
            approved_at: None,
            started_at: None,
            ready_at: None,
            finished_at: None,
        })
    }

    fn on_create(&mut self) -> Result<(), String> {
        if self.total_amount < Decimal::ZERO {
            return Err(format!("Negative total amount: {}", self.total_amount));
        }
        Ok(())
    }

    /// Applies a conditional status write.
    ///
    /// # Errors
    /// Rejects the patch when the stored status no longer matches `expected_status`,
    /// which happens when another operator moved the booking first.
    fn on_update(&mut self, patch: BookingPatch, now: DateTime<Utc>) -> Result<(), String> {
        if self.status != patch.expected_status {
            return Err(format!(
                "Status changed concurrently: expected {}, found {}",
                patch.expected_status, self.status
            ));
        }
        self.status = patch.status;
        if let Some(stamp) = patch.stamp {
            self.set_stamp(stamp, now);
        }
        Ok(())
    }

    fn matches(&self, query: &BookingQuery) -> bool {
        query.statuses.contains(&self.status) && self.order_key(query.order).is_some()
    }

    fn compare(query: &BookingQuery, a: &Self, b: &Self) -> Ordering {
        b.order_key(query.order).cmp(&a.order_key(query.order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BookingOrder, LifecycleStamp};

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn booking(created: i64) -> Booking {
        let params = BookingCreate {
            user_name: "Ana".into(),
            user_email: "ana@example.com".into(),
            venue_id: "venue_1".into(),
            menu_items: vec![],
            total_amount: Decimal::from(100),
            start_date: at(2_000_000_000),
            end_date: at(2_000_086_400),
        };
        Booking::from_create_params(format!("booking_{created}"), params, at(created)).unwrap()
    }

    #[test]
    fn test_created_bookings_are_pending_and_stamped() {
        let b = booking(10);
        assert_eq!(b.status, BookingStatus::Pending);
        assert_eq!(b.created_at, Some(at(10)));
        assert!(b.approved_at.is_none());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut b = booking(1);
        b.total_amount = Decimal::from(-1);
        assert!(b.on_create().is_err());
    }

    #[test]
    fn test_conditional_update() {
        let mut b = booking(1);
        let approve = BookingPatch {
            expected_status: BookingStatus::Pending,
            status: BookingStatus::Approved,
            stamp: Some(LifecycleStamp::ApprovedAt),
        };
        b.on_update(approve.clone(), at(50)).unwrap();
        assert_eq!(b.status, BookingStatus::Approved);
        assert_eq!(b.approved_at, Some(at(50)));

        // Replaying the same patch must not succeed twice.
        let err = b.on_update(approve, at(60)).unwrap_err();
        assert!(err.contains("expected pending, found approved"));
        assert_eq!(b.approved_at, Some(at(50)));
    }

    #[test]
    fn test_query_skips_records_without_sort_key() {
        let mut b = booking(1);
        b.status = BookingStatus::Approved;
        assert!(!b.matches(&BookingQuery::active()));
        b.approved_at = Some(at(5));
        assert!(b.matches(&BookingQuery::active()));
        assert!(!b.matches(&BookingQuery::pending()));
    }

    #[test]
    fn test_compare_is_descending() {
        let older = booking(1);
        let newer = booking(2);
        let query = BookingQuery { statuses: vec![BookingStatus::Pending], order: BookingOrder::CreatedAtDesc };
        assert_eq!(Booking::compare(&query, &newer, &older), Ordering::Less);
    }
}
