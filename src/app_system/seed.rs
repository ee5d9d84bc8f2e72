//! Initial store contents, loaded from JSON.
//!
//! Ids are assigned by the store in insertion order (`venue_1`, `menu_1`, ...),
//! so bookings in a seed file refer to venues and menu items by those ids.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, instrument};

use crate::booking_actor::BookingError;
use crate::catalog_actor::CatalogError;
use crate::clients::{BookingClient, MenuClient, StaffClient, VenueClient};
use crate::domain::{BookingCreate, MenuItemCreate, StaffCreate, StaffRole, VenueCreate};

/// Demo data bundled with the binary.
pub const DEFAULT_SEED: &str = include_str!("../../demos/seed.json");

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub venues: Vec<VenueCreate>,
    pub menu: Vec<MenuItemCreate>,
    pub staff: Vec<StaffCreate>,
    pub bookings: Vec<BookingCreate>,
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid seed data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Booking(#[from] BookingError),
}

/// Ids handed out while seeding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeedSummary {
    pub venue_ids: Vec<String>,
    pub menu_item_ids: Vec<String>,
    pub booking_ids: Vec<String>,
    /// uid of the first owner profile, if any.
    pub owner_uid: Option<String>,
}

impl SeedData {
    pub fn from_json(raw: &str) -> Result<Self, SeedError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Read `path`, or fall back to the bundled demo data.
    pub fn load(path: Option<&Path>) -> Result<Self, SeedError> {
        match path {
            Some(path) => Self::from_json(&fs::read_to_string(path)?),
            None => Self::from_json(DEFAULT_SEED),
        }
    }

    #[instrument(skip_all)]
    pub async fn apply(
        self,
        bookings: &BookingClient,
        venues: &VenueClient,
        menu: &MenuClient,
        staff: &StaffClient,
    ) -> Result<SeedSummary, SeedError> {
        let mut summary = SeedSummary::default();

        for venue in self.venues {
            summary.venue_ids.push(venues.create_venue(venue).await?);
        }
        for item in self.menu {
            summary.menu_item_ids.push(menu.create_menu_item(item).await?);
        }
        for member in self.staff {
            if summary.owner_uid.is_none() && member.role == StaffRole::Owner {
                summary.owner_uid = Some(member.uid.clone());
            }
            staff.create_staff_member(member).await?;
        }
        for booking in self.bookings {
            summary.booking_ids.push(bookings.create_booking(booking).await?);
        }

        info!(
            venues = summary.venue_ids.len(),
            menu_items = summary.menu_item_ids.len(),
            bookings = summary.booking_ids.len(),
            "Store seeded"
        );
        Ok(summary)
    }
}
