//! Integrated bundle and role-projected dashboard views

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::market::MarketPriceRecord;
use super::research::{KvkExtensionBundle, ResearchRecord};
use super::weather::WeatherBundle;

/// Merged snapshot of every upstream source for one location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IntegratedBundle {
    pub weather: WeatherBundle,
    pub market: Vec<MarketPriceRecord>,
    pub research: Vec<ResearchRecord>,
    pub extension: KvkExtensionBundle,
    pub last_updated: DateTime<Utc>,
}

/// The integrated bundle with a role's derived metrics merged into the same object
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoleView {
    #[serde(flatten)]
    pub bundle: IntegratedBundle,
    #[serde(flatten)]
    pub insights: Option<RoleInsights>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum RoleInsights {
    Government(GovernmentInsights),
    Officer(OfficerInsights),
    Ngo(NgoInsights),
    Market(MarketInsights),
    System(SystemInsights),
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GovernmentInsights {
    pub policy_metrics: PolicyMetrics,
    pub state_comparison: Vec<StateComparison>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PolicyMetrics {
    /// Percent of cropped land
    pub affected_area: f64,
    /// Forecasted yield loss, percent
    pub yield_loss: f64,
    /// Billion INR
    pub subsidy_impact: f64,
    /// Billion INR
    pub insurance_claims: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StateComparison {
    pub state: String,
    pub yield_index: f64,
    pub risk_level: Level,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OfficerInsights {
    pub field_metrics: FieldMetrics,
    pub district_health: DistrictHealth,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetrics {
    pub pending_reports: u32,
    pub verified_reports: u32,
    /// Hours
    pub avg_verification_time: f64,
    pub field_visits_scheduled: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DistrictHealth {
    pub overall_score: f64,
    pub pest_outbreaks: u32,
    /// Percent
    pub disease_incidence: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NgoInsights {
    pub outreach_metrics: OutreachMetrics,
    pub interventions: Vec<Intervention>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutreachMetrics {
    pub farmers_engaged: u32,
    pub programs_active: u32,
    pub hotspots_covered: u32,
    /// Percent
    pub success_rate: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Intervention {
    #[serde(rename = "type")]
    pub kind: String,
    pub count: u32,
    pub impact: Level,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketInsights {
    pub price_analytics: PriceAnalytics,
    pub market_trends: MarketTrends,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceAnalytics {
    pub volatility_index: f64,
    pub avg_price: f64,
    /// Percent
    pub price_change: f64,
    pub anomalies: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarketTrends {
    pub demand: String,
    pub supply: String,
    pub forecast: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SystemInsights {
    pub system_metrics: SystemMetrics,
    pub performance: Performance,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SystemMetrics {
    pub api_calls: u64,
    /// Percent
    pub ai_accuracy: f64,
    pub active_users: u64,
    pub system_health: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Performance {
    /// Milliseconds
    pub response_time: u32,
    /// Percent
    pub uptime: f64,
    /// Percent
    pub error_rate: f64,
}

/// Three-step qualitative scale used for risk and impact
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}
