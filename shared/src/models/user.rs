//! User and role models

use serde::{Deserialize, Serialize};

/// Account roles known to the platform
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Government,
    AgriculturalOfficer,
    NgoPartner,
    MarketAnalyst,
    SystemAdmin,
    Farmer,
}

/// Roles that have a dedicated analytics projection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DashboardRole {
    Government,
    AgriculturalOfficer,
    Ngo,
    MarketAnalyst,
    Admin,
}

impl DashboardRole {
    pub const ALL: [DashboardRole; 5] = [
        DashboardRole::Government,
        DashboardRole::AgriculturalOfficer,
        DashboardRole::Ngo,
        DashboardRole::MarketAnalyst,
        DashboardRole::Admin,
    ];

    /// Parse a role query value. Only the exact dashboard names match.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "government" => Some(DashboardRole::Government),
            "agricultural_officer" => Some(DashboardRole::AgriculturalOfficer),
            "ngo" => Some(DashboardRole::Ngo),
            "market_analyst" => Some(DashboardRole::MarketAnalyst),
            "admin" => Some(DashboardRole::Admin),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DashboardRole::Government => "government",
            DashboardRole::AgriculturalOfficer => "agricultural_officer",
            DashboardRole::Ngo => "ngo",
            DashboardRole::MarketAnalyst => "market_analyst",
            DashboardRole::Admin => "admin",
        }
    }
}

/// Public view of an account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}
