//! Research (ICAR) and extension (KVK) models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Reference data about one released crop variety
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResearchRecord {
    pub crop_variety: CropVariety,
    pub characteristics: VarietyCharacteristics,
    pub cultivation: CultivationPractice,
    pub research: ResearchSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CropVariety {
    pub name: String,
    pub scientific_name: String,
    pub category: CropCategory,
    pub developed_by: String,
    pub release_year: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CropCategory {
    Cereal,
    Pulse,
    Oilseed,
    Vegetable,
    Fruit,
    Spice,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VarietyCharacteristics {
    /// kg/hectare
    pub yield_potential: u32,
    pub maturity_days: u32,
    pub resistant_to: Vec<String>,
    /// Agro-climatic zones
    pub suitable_for: Vec<String>,
    pub water_requirement: WaterRequirement,
    pub soil_type: Vec<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum WaterRequirement {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CultivationPractice {
    pub sowing_time: String,
    pub harvest_time: String,
    pub spacing: String,
    pub seed_rate: String,
    pub fertilizers: Vec<FertilizerDose>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FertilizerDose {
    #[serde(rename = "type")]
    pub nutrient: String,
    pub quantity: String,
    pub timing: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResearchSummary {
    pub trials: u32,
    pub locations: Vec<String>,
    pub avg_yield: u32,
    pub best_practices: Vec<String>,
    pub publications: Vec<Publication>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    pub title: String,
    pub authors: Vec<String>,
    pub year: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
}

/// Programs, advisories and technologies published by a district KVK
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KvkExtensionBundle {
    pub kvk_center: KvkCenter,
    pub programs: Vec<ExtensionProgram>,
    pub advisories: Vec<Advisory>,
    pub technologies: Vec<Technology>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KvkCenter {
    pub name: String,
    pub district: String,
    pub state: String,
    pub established: i32,
    pub contact: KvkContact,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct KvkContact {
    pub phone: String,
    pub email: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExtensionProgram {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub program_type: ProgramType,
    pub crop: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub participants: u32,
    pub status: ProgramStatus,
    pub description: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgramType {
    Training,
    Demonstration,
    Advisory,
    TechnologyTransfer,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProgramStatus {
    Upcoming,
    Ongoing,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Advisory {
    pub id: String,
    pub title: String,
    pub crop: String,
    pub season: String,
    pub content: String,
    pub published_date: NaiveDate,
    pub valid_until: NaiveDate,
    pub priority: AdvisoryPriority,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AdvisoryPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    pub name: String,
    pub description: String,
    pub applicable_crops: Vec<String>,
    /// Percent of farmers in the district using it
    pub adoption_rate: f64,
    pub cost_benefit: String,
    pub contact_expert: String,
}
