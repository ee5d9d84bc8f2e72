use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::actor_framework::Entity;
use crate::domain::{
    MenuItem, MenuItemCreate, StaffCreate, StaffMember, StaffQuery, Venue, VenueCreate,
};

// Reference collections are fetched in bulk and never written by the dashboards.

impl Entity for Venue {
    type Id = String;
    type CreateParams = VenueCreate;
    type Patch = ();
    type Query = ();

    const COLLECTION: &'static str = "venues";

    fn id(&self) -> &String { &self.id }

    fn from_create_params(
        id: String,
        params: VenueCreate,
        _now: DateTime<Utc>,
    ) -> Result<Self, String> {
        Ok(Self { id, name: params.name })
    }

    fn on_update(&mut self, _patch: (), _now: DateTime<Utc>) -> Result<(), String> {
        Err(format!("{} is read-only", Self::COLLECTION))
    }

    fn matches(&self, _query: &()) -> bool { true }

    fn compare(_query: &(), a: &Self, b: &Self) -> Ordering {
        a.name.cmp(&b.name)
    }
}

impl Entity for MenuItem {
    type Id = String;
    type CreateParams = MenuItemCreate;
    type Patch = ();
    type Query = ();

    const COLLECTION: &'static str = "menu";

    fn id(&self) -> &String { &self.id }

    fn from_create_params(
        id: String,
        params: MenuItemCreate,
        _now: DateTime<Utc>,
    ) -> Result<Self, String> {
        Ok(Self { id, name: params.name, price: params.price })
    }

    fn on_update(&mut self, _patch: (), _now: DateTime<Utc>) -> Result<(), String> {
        Err(format!("{} is read-only", Self::COLLECTION))
    }

    fn matches(&self, _query: &()) -> bool { true }
}

impl Entity for StaffMember {
    type Id = String;
    type CreateParams = StaffCreate;
    type Patch = ();
    type Query = StaffQuery;

    const COLLECTION: &'static str = "users";

    fn id(&self) -> &String { &self.id }

    fn from_create_params(
        id: String,
        params: StaffCreate,
        _now: DateTime<Utc>,
    ) -> Result<Self, String> {
        Ok(Self {
            id,
            uid: params.uid,
            full_name: params.full_name,
            email: params.email,
            role: params.role,
            venue_assigned: params.venue_assigned,
        })
    }

    fn on_create(&mut self) -> Result<(), String> {
        if self.uid.is_empty() {
            return Err("Staff profile requires a uid".to_string());
        }
        Ok(())
    }

    fn on_update(&mut self, _patch: (), _now: DateTime<Utc>) -> Result<(), String> {
        Err(format!("{} is read-only", Self::COLLECTION))
    }

    fn matches(&self, query: &StaffQuery) -> bool {
        match query {
            StaffQuery::ByUid(uid) => &self.uid == uid,
        }
    }
}
