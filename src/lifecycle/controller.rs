use tracing::{debug, error, info, instrument, warn};

use crate::clients::BookingClient;
use crate::domain::{Booking, BookingAction, BookingPatch, BookingQuery, BookingStatus};

use super::error::{AppliedTransition, LifecycleError};

/// Which booking list a controller keeps cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingView {
    /// Requests awaiting administrator approval.
    Pending,
    /// Approved-onwards bookings shown to the venue owner.
    Active,
}

impl BookingView {
    pub fn query(self) -> BookingQuery {
        match self {
            BookingView::Pending => BookingQuery::pending(),
            BookingView::Active => BookingQuery::active(),
        }
    }
}

/// Drives booking status transitions and keeps a cached list in step with the store.
///
/// The cache reflects the store as of the last successful refresh. It is only ever
/// replaced wholesale, and `&mut self` keeps a refresh from interleaving with a
/// transition on the same controller.
pub struct BookingLifecycleController {
    client: BookingClient,
    view: BookingView,
    bookings: Vec<Booking>,
}

impl BookingLifecycleController {
    pub fn new(client: BookingClient, view: BookingView) -> Self {
        Self {
            client,
            view,
            bookings: Vec::new(),
        }
    }

    /// Cached bookings in store order.
    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// Cached bookings that still have work left.
    pub fn active_bookings(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter().filter(|b| !b.status.is_terminal())
    }

    pub fn completed_bookings(&self) -> impl Iterator<Item = &Booking> {
        self.bookings.iter().filter(|b| b.status.is_terminal())
    }

    /// Fresh read of pending bookings, newest request first.
    pub async fn list_pending(&self) -> Result<Vec<Booking>, LifecycleError> {
        self.client.list_pending().await.map_err(LifecycleError::from_read)
    }

    /// Fresh read of approved-onwards bookings, most recently approved first.
    pub async fn list_active(&self) -> Result<Vec<Booking>, LifecycleError> {
        self.client.list_active().await.map_err(LifecycleError::from_read)
    }

    /// Re-query the view and swap the cache. On failure the old cache is kept.
    #[instrument(skip(self), fields(view = ?self.view))]
    pub async fn refresh(&mut self) -> Result<(), LifecycleError> {
        let fresh = self.client.query_bookings(self.view.query()).await;
        match fresh.map_err(LifecycleError::from_read) {
            Ok(bookings) => {
                debug!(count = bookings.len(), "Booking list refreshed");
                self.bookings = bookings;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Booking list refresh failed, keeping cached list");
                Err(e)
            }
        }
    }

    /// Validate `action` against the booking's current status, write the new status
    /// and its timestamp, then refresh the cached list.
    ///
    /// Performs at most one write. Rejected transitions never reach the store.
    #[instrument(skip(self))]
    pub async fn transition(
        &mut self,
        booking_id: &str,
        action: BookingAction,
    ) -> Result<AppliedTransition, LifecycleError> {
        let from = self.current_status(booking_id).await?;

        let to = from.apply(action).map_err(|source| {
            warn!(status = %from, "Transition rejected");
            LifecycleError::InvalidTransition { id: booking_id.to_string(), source }
        })?;

        let patch = BookingPatch {
            expected_status: from,
            status: to,
            stamp: action.rule().stamp,
        };
        if let Err(e) = self.client.update_booking(booking_id.to_string(), patch).await {
            error!(error = %e, "Status write failed");
            return Err(LifecycleError::from_write(booking_id, e));
        }
        info!(%from, %to, "Booking status updated");

        let applied = AppliedTransition {
            booking_id: booking_id.to_string(),
            action,
            from,
            to,
        };
        if let Err(e) = self.refresh().await {
            return Err(LifecycleError::RefreshFailed { applied, reason: e.to_string() });
        }
        Ok(applied)
    }

    pub async fn approve(
        &mut self,
        booking_id: &str,
    ) -> Result<AppliedTransition, LifecycleError> {
        self.transition(booking_id, BookingAction::Approve).await
    }

    /// Entry point for the payment collaborator: `ongoing -> paid`.
    pub async fn record_payment(
        &mut self,
        booking_id: &str,
    ) -> Result<AppliedTransition, LifecycleError> {
        self.transition(booking_id, BookingAction::RecordPayment).await
    }

    async fn current_status(&self, booking_id: &str) -> Result<BookingStatus, LifecycleError> {
        if let Some(cached) = self.bookings.iter().find(|b| b.id == booking_id) {
            return Ok(cached.status);
        }
        debug!("Booking not cached, reading from store");
        match self.client.get_booking(booking_id.to_string()).await {
            Ok(Some(booking)) => Ok(booking.status),
            Ok(None) => Err(LifecycleError::UnknownBooking(booking_id.to_string())),
            Err(e) => Err(LifecycleError::from_read(e)),
        }
    }
}
