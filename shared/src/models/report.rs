//! Farmer incident report models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::location::Location;

/// A pest/disease observation submitted by a farmer, enriched on ingestion
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FarmerReport {
    pub id: String,
    pub farmer_id: String,
    pub location: Location,
    pub crop: String,
    pub issue: ReportedIssue,
    pub ai_analysis: AiAnalysis,
    pub verification: Verification,
    pub timestamp: DateTime<Utc>,
}

/// Partial report as submitted; `location` and `issue` are mandatory
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FarmerReportInput {
    #[serde(default)]
    pub farmer_id: Option<String>,
    #[validate(required(message = "location is required"))]
    #[serde(default)]
    pub location: Option<Location>,
    #[serde(default)]
    pub crop: Option<String>,
    #[validate(required(message = "issue is required"))]
    #[serde(default)]
    pub issue: Option<ReportedIssue>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportedIssue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub description: String,
    pub severity: IssueSeverity,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_note: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Pest,
    Disease,
    Nutrient,
    Weather,
    Other,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum IssueSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl IssueSeverity {
    /// Only critical issues trigger an officer visit
    pub fn requires_field_visit(&self) -> bool {
        matches!(self, IssueSeverity::Critical)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysis {
    /// 0.0 - 1.0
    pub confidence: f64,
    pub diagnosis: String,
    pub recommendations: Vec<String>,
    pub treatment_plan: String,
    /// Estimated crop loss, percent
    pub estimated_loss: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub status: VerificationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verification_date: Option<DateTime<Utc>>,
    pub field_visit_required: bool,
}

impl Verification {
    /// Initial state of every ingested report
    pub fn pending(severity: IssueSeverity) -> Self {
        Self {
            status: VerificationStatus::Pending,
            verified_by: None,
            verification_date: None,
            field_visit_required: severity.requires_field_visit(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_critical_requires_field_visit() {
        assert!(IssueSeverity::Critical.requires_field_visit());
        assert!(!IssueSeverity::High.requires_field_visit());
        assert!(!IssueSeverity::Medium.requires_field_visit());
        assert!(!IssueSeverity::Low.requires_field_visit());
    }

    #[test]
    fn test_partial_input_missing_issue_fails_validation() {
        let input: FarmerReportInput = serde_json::from_value(serde_json::json!({
            "farmerId": "f1",
            "location": { "state": "Maharashtra", "district": "Pune" },
            "crop": "Rice"
        }))
        .unwrap();
        assert!(input.issue.is_none());
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_issue_parses_from_wire_shape() {
        let issue: ReportedIssue = serde_json::from_value(serde_json::json!({
            "type": "pest",
            "description": "Stem borer in field",
            "severity": "critical"
        }))
        .unwrap();
        assert_eq!(issue.issue_type, IssueType::Pest);
        assert_eq!(issue.severity, IssueSeverity::Critical);
        assert!(issue.images.is_empty());
        assert!(issue.audio_note.is_none());
    }
}
