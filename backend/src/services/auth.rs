//! Credential check against the demo accounts
//!
//! Every account shares one password, hashed once with bcrypt at startup.

use bcrypt::{hash, verify};
use shared::{UserProfile, UserRole};

use crate::error::{AppError, AppResult};

struct Account {
    profile: UserProfile,
    password_hash: String,
}

pub struct AuthService {
    accounts: Vec<Account>,
}

fn permissions(items: &[&str]) -> Vec<String> {
    items.iter().map(|p| p.to_string()).collect()
}

/// The five demo users, one per dashboard role
fn demo_profiles() -> Vec<UserProfile> {
    vec![
        UserProfile {
            id: "1".to_string(),
            email: "policy@gov.in".to_string(),
            name: "Dr. Rajesh Kumar".to_string(),
            role: UserRole::Government,
            district: None,
            state: Some("Maharashtra".to_string()),
            organization: None,
            permissions: permissions(&[
                "view_national_data",
                "view_policy_insights",
                "export_reports",
            ]),
        },
        UserProfile {
            id: "2".to_string(),
            email: "officer@agri.gov.in".to_string(),
            name: "Priya Sharma".to_string(),
            role: UserRole::AgriculturalOfficer,
            district: Some("Pune".to_string()),
            state: Some("Maharashtra".to_string()),
            organization: None,
            permissions: permissions(&[
                "verify_reports",
                "assign_field_visits",
                "view_district_data",
            ]),
        },
        UserProfile {
            id: "3".to_string(),
            email: "coordinator@ngo.org".to_string(),
            name: "Amit Patel".to_string(),
            role: UserRole::NgoPartner,
            district: None,
            state: None,
            organization: Some("Rural Development Foundation".to_string()),
            permissions: permissions(&["view_hotspots", "manage_outreach", "track_interventions"]),
        },
        UserProfile {
            id: "4".to_string(),
            email: "analyst@mandi.com".to_string(),
            name: "Sunita Reddy".to_string(),
            role: UserRole::MarketAnalyst,
            district: None,
            state: None,
            organization: None,
            permissions: permissions(&[
                "view_price_trends",
                "forecast_demand",
                "track_market_data",
            ]),
        },
        UserProfile {
            id: "5".to_string(),
            email: "admin@farm.system".to_string(),
            name: "Tech Admin".to_string(),
            role: UserRole::SystemAdmin,
            district: None,
            state: None,
            organization: None,
            permissions: permissions(&["manage_system", "view_all_data", "monitor_performance"]),
        },
    ]
}

impl AuthService {
    /// Demo accounts sharing `password`, hashed at `cost`
    pub fn with_demo_accounts(password: &str, cost: u32) -> AppResult<Self> {
        let password_hash = hash(password, cost)
            .map_err(|e| AppError::Internal(format!("Password hashing failed: {}", e)))?;

        let accounts = demo_profiles()
            .into_iter()
            .map(|profile| Account {
                profile,
                password_hash: password_hash.clone(),
            })
            .collect();

        Ok(Self { accounts })
    }

    /// Profile of the account matching `email` and `password`
    pub fn authenticate(&self, email: &str, password: &str) -> AppResult<UserProfile> {
        let email = email.trim();
        let account = self
            .accounts
            .iter()
            .find(|a| a.profile.email.eq_ignore_ascii_case(email))
            .ok_or(AppError::InvalidCredentials)?;

        let valid = verify(password, &account.password_hash)
            .map_err(|e| AppError::Internal(format!("Password verification failed: {}", e)))?;

        if !valid {
            tracing::warn!("Failed login attempt for {}", account.profile.email);
            return Err(AppError::InvalidCredentials);
        }

        Ok(account.profile.clone())
    }
}
