use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::actor_framework::{Entity, ResourceActor, ResourceClient};
use crate::clients::{BookingClient, MenuClient, StaffClient, VenueClient};
use crate::dashboard::{AdminDashboard, OwnerDashboard};
use crate::domain::{Booking, MenuItem, StaffMember, Venue};
use crate::lifecycle::{BookingLifecycleController, BookingView};

use super::config::DashboardConfig;
use super::seed::{SeedData, SeedError, SeedSummary};

/// Sequential ids of the form `<prefix>_<n>`, starting at 1.
fn sequential_ids(prefix: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    let counter = Arc::new(AtomicU64::new(1));
    move || format!("{}_{}", prefix, counter.fetch_add(1, Ordering::SeqCst))
}

fn spawn_store<T>(buffer: usize, prefix: &'static str) -> (JoinHandle<()>, ResourceClient<T>)
where
    T: Entity<Id = String>,
{
    let (actor, client) = ResourceActor::<T>::new(buffer, sequential_ids(prefix));
    (tokio::spawn(actor.run()), client)
}

/// Starts one store actor per collection and hands out the dashboards wired to them.
pub struct DashboardSystem {
    pub booking_client: BookingClient,
    pub venue_client: VenueClient,
    pub menu_client: MenuClient,
    pub staff_client: StaffClient,
    currency: String,
    handles: Vec<JoinHandle<()>>,
}

impl DashboardSystem {
    pub fn new(config: &DashboardConfig) -> Self {
        let buffer = config.channel_buffer;

        let (booking_handle, bookings) = spawn_store::<Booking>(buffer, "booking");
        let (venue_handle, venues) = spawn_store::<Venue>(buffer, "venue");
        let (menu_handle, menu) = spawn_store::<MenuItem>(buffer, "menu");
        let (staff_handle, staff) = spawn_store::<StaffMember>(buffer, "user");

        info!(buffer, "Store actors started");

        Self {
            booking_client: BookingClient::new(bookings),
            venue_client: VenueClient::new(venues),
            menu_client: MenuClient::new(menu),
            staff_client: StaffClient::new(staff),
            currency: config.currency_symbol.clone(),
            handles: vec![booking_handle, venue_handle, menu_handle, staff_handle],
        }
    }

    pub fn admin_dashboard(&self) -> AdminDashboard {
        AdminDashboard::new(
            self.booking_client.clone(),
            self.venue_client.clone(),
            self.menu_client.clone(),
            self.currency.clone(),
        )
    }

    pub fn owner_dashboard(&self) -> OwnerDashboard {
        OwnerDashboard::new(
            self.booking_client.clone(),
            self.venue_client.clone(),
            self.menu_client.clone(),
            self.staff_client.clone(),
            self.currency.clone(),
        )
    }

    /// Controller for the payment integration, which drives `ongoing -> paid`.
    pub fn payment_controller(&self) -> BookingLifecycleController {
        BookingLifecycleController::new(self.booking_client.clone(), BookingView::Active)
    }

    pub async fn seed(&self, data: SeedData) -> Result<SeedSummary, SeedError> {
        data.apply(&self.booking_client, &self.venue_client, &self.menu_client, &self.staff_client)
            .await
    }

    /// Drop the clients held here and wait for every store actor to drain.
    ///
    /// Actors only stop once all clones of their client are gone, so dashboards
    /// created from this system must be dropped first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.booking_client);
        drop(self.venue_client);
        drop(self.menu_client);
        drop(self.staff_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
