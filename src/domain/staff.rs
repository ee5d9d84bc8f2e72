use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Admin,
    Owner,
}

/// A dashboard operator's profile document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffMember {
    pub id: String,
    /// Identity-provider user id the profile belongs to.
    pub uid: String,
    pub full_name: String,
    pub email: String,
    pub role: StaffRole,
    #[serde(default)]
    pub venue_assigned: Option<String>,
}

/// Payload for registering a staff profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffCreate {
    pub uid: String,
    pub full_name: String,
    pub email: String,
    pub role: StaffRole,
    #[serde(default)]
    pub venue_assigned: Option<String>,
}

/// Lookup of staff profiles.
#[derive(Debug, Clone, PartialEq)]
pub enum StaffQuery {
    ByUid(String),
}
