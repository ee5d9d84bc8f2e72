//! Id-keyed lookup of reference entities for display.
//!
//! Missing references never fail: they resolve to a placeholder label.

use std::collections::HashMap;

use rust_decimal::Decimal;
use tracing::{info, instrument};

use crate::catalog_actor::CatalogError;
use crate::clients::{MenuClient, VenueClient};
use crate::domain::{MenuItem, Venue};

pub const VENUE_NOT_FOUND: &str = "Venue not found";
pub const VENUE_NOT_ASSIGNED: &str = "Not assigned";
pub const ITEM_NOT_FOUND: &str = "Item not found";

#[derive(Debug, Clone, Default)]
pub struct ReferenceCatalog {
    venues: HashMap<String, Venue>,
    menu_items: HashMap<String, MenuItem>,
}

/// Display line for one selected menu item.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuLine {
    pub name: String,
    pub price: Decimal,
}

impl ReferenceCatalog {
    pub fn new(venues: Vec<Venue>, menu_items: Vec<MenuItem>) -> Self {
        Self {
            venues: venues.into_iter().map(|v| (v.id.clone(), v)).collect(),
            menu_items: menu_items.into_iter().map(|m| (m.id.clone(), m)).collect(),
        }
    }

    /// Bulk-load both reference collections.
    #[instrument(skip_all)]
    pub async fn load(
        venue_client: &VenueClient,
        menu_client: &MenuClient,
    ) -> Result<Self, CatalogError> {
        let venues = venue_client.list_venues().await?;
        let menu_items = menu_client.list_menu_items().await?;
        info!(venues = venues.len(), menu_items = menu_items.len(), "Catalog loaded");
        Ok(Self::new(venues, menu_items))
    }

    pub fn venue_count(&self) -> usize {
        self.venues.len()
    }

    pub fn menu_item_count(&self) -> usize {
        self.menu_items.len()
    }

    pub fn venue_name(&self, venue_id: &str) -> &str {
        self.venues.get(venue_id).map_or(VENUE_NOT_FOUND, |v| v.name.as_str())
    }

    /// Venue label for a staff profile, which may have no venue at all.
    pub fn assigned_venue_name(&self, venue_id: Option<&str>) -> &str {
        venue_id
            .and_then(|id| self.venues.get(id))
            .map_or(VENUE_NOT_ASSIGNED, |v| v.name.as_str())
    }

    pub fn menu_line(&self, item_id: &str) -> MenuLine {
        match self.menu_items.get(item_id) {
            Some(item) => MenuLine { name: item.name.clone(), price: item.price },
            None => MenuLine { name: ITEM_NOT_FOUND.to_string(), price: Decimal::ZERO },
        }
    }
}
