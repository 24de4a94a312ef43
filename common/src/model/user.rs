use serde::{Deserialize, Serialize};

use crate::model::role::Role;

/// The logged-in user as stored by the login flow under `storage::SESSION_USER_KEY`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: Role,
}

impl SessionUser {
    /// Decodes a stored session, treating anything unreadable as "nobody logged in".
    pub fn from_stored(raw: Option<&str>) -> Option<Self> {
        raw.and_then(|raw| serde_json::from_str(raw).ok())
    }
}
