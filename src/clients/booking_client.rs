use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::booking_actor::BookingError;
use crate::domain::{Booking, BookingPatch, BookingQuery};

/// Client for the bookings collection.
#[derive(Clone)]
pub struct BookingClient {
    inner: ResourceClient<Booking>,
}

impl_basic_client!(BookingClient, Booking, BookingError, booking);

impl BookingClient {
    #[instrument(skip(self))]
    pub async fn query_bookings(&self, query: BookingQuery) -> Result<Vec<Booking>, BookingError> {
        debug!("Sending request");
        self.inner.query(query).await.map_err(BookingError::from_read)
    }

    /// Pending requests, newest first.
    pub async fn list_pending(&self) -> Result<Vec<Booking>, BookingError> {
        self.query_bookings(BookingQuery::pending()).await
    }

    /// Approved-onwards bookings, most recently approved first.
    pub async fn list_active(&self) -> Result<Vec<Booking>, BookingError> {
        self.query_bookings(BookingQuery::active()).await
    }

    #[instrument(skip(self))]
    pub async fn update_booking(
        &self,
        id: String,
        patch: BookingPatch,
    ) -> Result<Booking, BookingError> {
        debug!("Sending request");
        self.inner.update(id, patch).await.map_err(BookingError::from_write)
    }
}
