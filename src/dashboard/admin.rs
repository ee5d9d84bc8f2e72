use tracing::{info, instrument, warn};

use crate::catalog::ReferenceCatalog;
use crate::clients::{BookingClient, MenuClient, VenueClient};
use crate::domain::BookingAction;
use crate::lifecycle::{BookingLifecycleController, BookingView};

use super::cards::BookingCard;
use super::notice::Notice;

pub const NO_PENDING_BOOKINGS: &str = "No pending bookings found";

/// Summary tiles at the top of the administrator dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdminSummary {
    pub total_venues: usize,
    pub menu_items: usize,
    pub pending_bookings: usize,
}

/// Administrator view: reviews pending requests and approves them.
pub struct AdminDashboard {
    controller: BookingLifecycleController,
    venue_client: VenueClient,
    menu_client: MenuClient,
    catalog: ReferenceCatalog,
    currency: String,
}

impl AdminDashboard {
    pub fn new(
        booking_client: BookingClient,
        venue_client: VenueClient,
        menu_client: MenuClient,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            controller: BookingLifecycleController::new(booking_client, BookingView::Pending),
            venue_client,
            menu_client,
            catalog: ReferenceCatalog::default(),
            currency: currency.into(),
        }
    }

    /// Load pending bookings and the reference catalog. Failures come back as notices.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Vec<Notice> {
        let mut notices = Vec::new();
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

    pub fn summary(&self) -> AdminSummary {
        AdminSummary {
            total_venues: self.catalog.venue_count(),
            menu_items: self.catalog.menu_item_count(),
            pending_bookings: self.controller.bookings().len(),
        }
    }

    pub fn cards(&self) -> Vec<BookingCard> {
        self.controller
            .bookings()
            .iter()
            .map(|b| BookingCard::for_admin(b, &self.catalog, &self.currency))
            .collect()
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        self.controller.bookings().is_empty().then_some(NO_PENDING_BOOKINGS)
    }

    /// Approve a pending booking once the operator has confirmed.
    #[instrument(skip(self))]
    pub async fn approve(&mut self, booking_id: &str, confirmed: bool) -> Notice {
        if !confirmed {
            info!("Approval cancelled by operator");
            return Notice::info("Approval cancelled.");
        }
        let result = self.controller.approve(booking_id).await;
        Notice::for_transition(BookingAction::Approve, &result)
    }
}
