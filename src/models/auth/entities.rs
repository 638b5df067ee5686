use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Role carried in the access token
#[derive(Debug, Clone, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "auth.ts")]
pub enum UserRole {
    Admin,   // maintains the criteria catalog
    Hrd,     // records employees and appraisals
    Manager, // triggers ranking computation
}

impl UserRole {
    pub const ADMIN: &'static str = "admin";
    pub const HRD: &'static str = "hrd";
    pub const MANAGER: &'static str = "manager";

    pub fn admin_roles() -> &'static [&'static UserRole] {
        &[&Self::Admin]
    }
    pub fn hrd_roles() -> &'static [&'static UserRole] {
        &[&Self::Hrd, &Self::Manager]
    }
    pub fn personnel_roles() -> &'static [&'static UserRole] {
        &[&Self::Hrd, &Self::Manager, &Self::Admin]
    }
    pub fn manager_roles() -> &'static [&'static UserRole] {
        &[&Self::Manager]
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<UserRole>().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::Admin => write!(f, "{}", Self::ADMIN),
            UserRole::Hrd => write!(f, "{}", Self::HRD),
            UserRole::Manager => write!(f, "{}", Self::MANAGER),
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            UserRole::ADMIN => Ok(UserRole::Admin),
            UserRole::HRD => Ok(UserRole::Hrd),
            UserRole::MANAGER => Ok(UserRole::Manager),
            _ => Err(format!("Invalid user role: {s}")),
        }
    }
}

/// Authenticated principal, placed in request extensions by `RequireJWT`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthUser {
    pub subject: String,
    pub role: UserRole,
}
