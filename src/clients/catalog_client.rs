use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::catalog_actor::CatalogError;
use crate::domain::{MenuItem, StaffMember, StaffQuery, Venue};

/// Client for the venues collection.
#[derive(Clone)]
pub struct VenueClient {
    inner: ResourceClient<Venue>,
}

impl_basic_client!(VenueClient, Venue, CatalogError, venue);

impl VenueClient {
    #[instrument(skip(self))]
    pub async fn list_venues(&self) -> Result<Vec<Venue>, CatalogError> {
        debug!("Sending request");
        self.inner.query(()).await.map_err(CatalogError::from_read)
    }
}

/// Client for the menu collection.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl_basic_client!(MenuClient, MenuItem, CatalogError, menu_item);

impl MenuClient {
    #[instrument(skip(self))]
    pub async fn list_menu_items(&self) -> Result<Vec<MenuItem>, CatalogError> {
        debug!("Sending request");
        self.inner.query(()).await.map_err(CatalogError::from_read)
    }
}

/// Client for staff profiles.
#[derive(Clone)]
pub struct StaffClient {
    inner: ResourceClient<StaffMember>,
}

impl_basic_client!(StaffClient, StaffMember, CatalogError, staff_member);

impl StaffClient {
    /// Profile registered for an identity-provider uid, if any.
    #[instrument(skip(self))]
    pub async fn find_by_uid(&self, uid: String) -> Result<Option<StaffMember>, CatalogError> {
        debug!("Sending request");
        let matches = self
            .inner
            .query(StaffQuery::ByUid(uid))
            .await
            .map_err(CatalogError::from_read)?;
        Ok(matches.into_iter().next())
    }
}
