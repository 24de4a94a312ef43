use serde::{Deserialize, Serialize};

/// Role of the logged-in admin user.
///
/// Role strings the frontend does not know deserialize as `Guest`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Vendor,
    #[default]
    #[serde(other)]
    Guest,
}

/// The only distinction analytics scoping cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleScope {
    Vendor,
    Other,
}

impl Role {
    pub fn scope(self) -> RoleScope {
        match self {
            Role::Vendor => RoleScope::Vendor,
            Role::Admin | Role::Manager | Role::Guest => RoleScope::Other,
        }
    }
}
