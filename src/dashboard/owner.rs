use chrono::{DateTime, Utc};
use tracing::{instrument, warn};

use crate::catalog::ReferenceCatalog;
use crate::clients::{BookingClient, MenuClient, StaffClient, VenueClient};
use crate::domain::{BookingAction, StaffMember};
use crate::lifecycle::{BookingLifecycleController, BookingView};
use crate::statistics::DashboardStats;

use super::cards::BookingCard;
use super::notice::Notice;

pub const NO_APPROVED_BOOKINGS: &str = "No approved bookings found";
pub const NO_COMPLETED_BOOKINGS: &str = "No completed bookings found";

/// Greeting block for the signed-in owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerHeader {
    pub welcome: String,
    pub venue: String,
}

/// Venue owner view: works approved bookings through to completion.
pub struct OwnerDashboard {
    controller: BookingLifecycleController,
    venue_client: VenueClient,
    menu_client: MenuClient,
    staff_client: StaffClient,
    catalog: ReferenceCatalog,
    profile: Option<StaffMember>,
    currency: String,
}

impl OwnerDashboard {
    pub fn new(
        booking_client: BookingClient,
        venue_client: VenueClient,
        menu_client: MenuClient,
        staff_client: StaffClient,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            controller: BookingLifecycleController::new(booking_client, BookingView::Active),
            venue_client,
            menu_client,
            staff_client,
            catalog: ReferenceCatalog::default(),
            profile: None,
            currency: currency.into(),
        }
    }

    /// Load the owner's profile, the active booking list and the catalog.
    #[instrument(skip(self))]
    pub async fn load(&mut self, uid: &str) -> Vec<Notice> {
        let mut notices = Vec::new();
        match self.staff_client.find_by_uid(uid.to_string()).await {
            Ok(profile) => self.profile = profile,
            Err(e) => {
                warn!(error = %e, "Profile lookup failed");
                notices.push(Notice::error("Error loading your profile.", e));
            }
        }
        if let Err(e) = self.controller.refresh().await {
            notices.push(Notice::error("Error fetching bookings.", e));
        }
        match ReferenceCatalog::load(&self.venue_client, &self.menu_client).await {
            Ok(catalog) => self.catalog = catalog,
            Err(e) => {
                warn!(error = %e, "Catalog load failed");
                notices.push(Notice::error("Error loading venues and menu items.", e));
            }
        }
        notices
    }

    pub fn header(&self) -> Option<OwnerHeader> {
        self.profile.as_ref().map(|profile| OwnerHeader {
            welcome: format!("Welcome back, {}!", profile.full_name),
            venue: format!(
                "Venue: {}",
                self.catalog.assigned_venue_name(profile.venue_assigned.as_deref())
            ),
        })
    }

    pub fn stats(&self, now: DateTime<Utc>) -> DashboardStats {
        DashboardStats::compute(self.controller.bookings(), now)
    }

    pub fn active_cards(&self) -> Vec<BookingCard> {
        self.controller
            .active_bookings()
            .map(|b| BookingCard::for_owner(b, &self.catalog, &self.currency))
            .collect()
    }

    pub fn completed_cards(&self) -> Vec<BookingCard> {
        self.controller
            .completed_bookings()
            .map(|b| BookingCard::for_owner(b, &self.catalog, &self.currency))
            .collect()
    }

    pub fn active_empty_message(&self) -> Option<&'static str> {
        self.controller.active_bookings().next().is_none().then_some(NO_APPROVED_BOOKINGS)
    }

    pub fn completed_empty_message(&self) -> Option<&'static str> {
        self.controller.completed_bookings().next().is_none().then_some(NO_COMPLETED_BOOKINGS)
    }

    /// Run one of the owner's buttons against a booking.
    #[instrument(skip(self))]
    pub async fn perform(&mut self, booking_id: &str, action: BookingAction) -> Notice {
        let owner_action = matches!(
            action,
            BookingAction::Accept | BookingAction::MarkReady | BookingAction::MarkFinished
        );
        if !owner_action {
            warn!("Action not available to owners");
            return Notice::error("This action is not available on the owner dashboard.", action);
        }
        let result = self.controller.transition(booking_id, action).await;
        Notice::for_transition(action, &result)
    }

    pub async fn accept(&mut self, booking_id: &str) -> Notice {
        self.perform(booking_id, BookingAction::Accept).await
    }

    pub async fn mark_ready(&mut self, booking_id: &str) -> Notice {
        self.perform(booking_id, BookingAction::MarkReady).await
    }

    pub async fn mark_finished(&mut self, booking_id: &str) -> Notice {
        self.perform(booking_id, BookingAction::MarkFinished).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use tokio::sync::mpsc;

    use crate::actor_framework::{FrameworkError, ResourceRequest};
    use crate::catalog::VENUE_NOT_ASSIGNED;
    use crate::dashboard::cards::WAITING_FOR_PAYMENT;
    use crate::domain::{Booking, BookingStatus, MenuItem, StaffRole, Venue};
    use crate::mock_framework::{assert_no_request, create_mock_client, expect_query};

    fn at(secs: i64) -> DateTime<Utc> {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    fn booking(id: &str, status: BookingStatus, amount: i64) -> Booking {
        Booking {
            id: id.to_string(),
            status,
            user_name: "Ana".into(),
            user_email: "ana@example.com".into(),
            venue_id: "venue_1".into(),
            menu_items: vec![],
            total_amount: Decimal::from(amount),
            start_date: at(2_000_000_000),
            end_date: at(2_000_086_400),
            created_at: Some(at(100)),
            approved_at: Some(at(200)),
            started_at: None,
            ready_at: None,
            finished_at: (status == BookingStatus::Finished).then(|| at(300)),
        }
    }

    struct Harness {
        bookings: mpsc::Receiver<ResourceRequest<Booking>>,
        venues: mpsc::Receiver<ResourceRequest<Venue>>,
        menu: mpsc::Receiver<ResourceRequest<MenuItem>>,
        staff: mpsc::Receiver<ResourceRequest<StaffMember>>,
    }

    fn dashboard() -> (OwnerDashboard, Harness) {
        let (bookings, booking_rx) = create_mock_client::<Booking>(10);
        let (venues, venue_rx) = create_mock_client::<Venue>(10);
        let (menu, menu_rx) = create_mock_client::<MenuItem>(10);
        let (staff, staff_rx) = create_mock_client::<StaffMember>(10);
        let owner = OwnerDashboard::new(
            BookingClient::new(bookings),
            VenueClient::new(venues),
            MenuClient::new(menu),
            StaffClient::new(staff),
            "₱",
        );
        (owner, Harness { bookings: booking_rx, venues: venue_rx, menu: menu_rx, staff: staff_rx })
    }

    fn profile(venue: Option<&str>) -> StaffMember {
        StaffMember {
            id: "user_2".into(),
            uid: "uid-owner".into(),
            full_name: "Jose Reyes".into(),
            email: "jose@example.com".into(),
            role: StaffRole::Owner,
            venue_assigned: venue.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_load_partitions_and_computes_stats() {
        let (mut owner, mut h) = dashboard();
        let task = tokio::spawn(async move {
            let notices = owner.load("uid-owner").await;
            (owner, notices)
        });

        let (_, responder) = expect_query(&mut h.staff).await.expect("Expected staff query");
        responder.send(Ok(vec![profile(Some("venue_1"))])).unwrap();
        let (_, responder) = expect_query(&mut h.bookings).await.expect("Expected booking query");
        responder
            .send(Ok(vec![
                booking("b1", BookingStatus::Approved, 1000),
                booking("b2", BookingStatus::Ongoing, 1500),
                booking("b3", BookingStatus::Paid, 1000),
                booking("b4", BookingStatus::Finished, 2000),
            ]))
            .unwrap();
        let (_, responder) = expect_query(&mut h.venues).await.expect("Expected venue query");
        responder.send(Ok(vec![Venue { id: "venue_1".into(), name: "Garden Pavilion".into() }])).unwrap();
        let (_, responder) = expect_query(&mut h.menu).await.expect("Expected menu query");
        responder.send(Ok(vec![])).unwrap();

        let (owner, notices) = task.await.unwrap();
        assert!(notices.is_empty());

        let header = owner.header().unwrap();
        assert_eq!(header.welcome, "Welcome back, Jose Reyes!");
        assert_eq!(header.venue, "Venue: Garden Pavilion");

        let active = owner.active_cards();
        assert_eq!(active.len(), 3);
        let ongoing = active.iter().find(|c| c.booking_id == "b2").unwrap();
        assert!(ongoing.badges.contains(&WAITING_FOR_PAYMENT));
        assert!(ongoing.action.is_none());
        assert_eq!(owner.completed_cards().len(), 1);
        assert_eq!(owner.completed_empty_message(), None);

        let stats = owner.stats(at(1_000));
        assert_eq!(stats.total_revenue, Decimal::from(3000));
        assert_eq!(stats.active_bookings, 1);
        assert_eq!(stats.completed_bookings, 1);
        assert_eq!(stats.upcoming_bookings, 3);
    }

    #[tokio::test]
    async fn test_empty_sections_and_unassigned_venue() {
        let (mut owner, mut h) = dashboard();
        let task = tokio::spawn(async move {
            let notices = owner.load("uid-owner").await;
            (owner, notices)
        });

        let (_, responder) = expect_query(&mut h.staff).await.expect("Expected staff query");
        responder.send(Ok(vec![profile(None)])).unwrap();
        let (_, responder) = expect_query(&mut h.bookings).await.expect("Expected booking query");
        responder.send(Ok(vec![booking("b4", BookingStatus::Finished, 2000)])).unwrap();
        let (_, responder) = expect_query(&mut h.venues).await.expect("Expected venue query");
        responder.send(Err(FrameworkError::ActorClosed)).unwrap();
        // The menu query is skipped once the venue query fails.

        let (owner, notices) = task.await.unwrap();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].is_error());
        assert_eq!(owner.header().unwrap().venue, format!("Venue: {VENUE_NOT_ASSIGNED}"));
        assert_eq!(owner.active_empty_message(), Some(NO_APPROVED_BOOKINGS));
        assert_eq!(owner.completed_empty_message(), None);
        assert_no_request(&mut h.menu);
    }

    #[tokio::test]
    async fn test_admin_actions_are_refused() {
        let (mut owner, mut h) = dashboard();
        let notice = owner.perform("b1", BookingAction::Approve).await;
        assert!(notice.is_error());
        let notice = owner.perform("b1", BookingAction::RecordPayment).await;
        assert!(notice.is_error());
        assert_no_request(&mut h.bookings);
    }
}
