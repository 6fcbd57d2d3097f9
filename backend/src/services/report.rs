//! Farmer report ingestion
//!
//! Completes a partially filled report with defaults, a preliminary
//! analysis and a pending verification. Reports are not stored.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use rand::Rng;
use shared::{AiAnalysis, FarmerReport, FarmerReportInput, Verification};
use validator::Validate;

use super::synthetic::{floor2, SyntheticRng};
use crate::error::{AppError, AppResult};

const UNKNOWN: &str = "unknown";

pub struct ReportService {
    rng: Arc<SyntheticRng>,
    last_id_millis: AtomicI64,
}

impl ReportService {
    pub fn new(rng: Arc<SyntheticRng>) -> Self {
        Self {
            rng,
            last_id_millis: AtomicI64::new(0),
        }
    }

    pub fn process_farmer_report(&self, input: FarmerReportInput) -> AppResult<FarmerReport> {
        input.validate()?;

        let (location, issue) = match (input.location, input.issue) {
            (Some(location), Some(issue)) => (location.normalized(), issue),
            (None, _) => return Err(AppError::validation("location", "location is required")),
            (_, None) => return Err(AppError::validation("issue", "issue is required")),
        };
        location.validate()?;

        let report = FarmerReport {
            id: format!("report-{}", self.next_id_millis()),
            farmer_id: input.farmer_id.unwrap_or_else(|| UNKNOWN.to_string()),
            location,
            crop: input.crop.unwrap_or_else(|| UNKNOWN.to_string()),
            verification: Verification::pending(issue.severity),
            issue,
            ai_analysis: self.preliminary_analysis(),
            timestamp: Utc::now(),
        };

        tracing::info!(
            "Processed farmer report {} ({:?} / {:?}) from {}",
            report.id,
            report.issue.issue_type,
            report.issue.severity,
            report.location.district
        );

        Ok(report)
    }

    fn preliminary_analysis(&self) -> AiAnalysis {
        AiAnalysis {
            confidence: 0.85,
            diagnosis: "Preliminary AI analysis based on image and description".to_string(),
            recommendations: vec![
                "Apply recommended pesticide".to_string(),
                "Monitor field conditions".to_string(),
                "Consult local agricultural officer".to_string(),
            ],
            treatment_plan: "Immediate treatment required within 24-48 hours".to_string(),
            estimated_loss: floor2(self.rng.with(|rng| rng.gen_range(0.0..20.0))),
        }
    }

    /// Current epoch millis, bumped past the previous id when two reports
    /// land in the same millisecond
    fn next_id_millis(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let previous = self
            .last_id_millis
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(previous + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{IssueSeverity, IssueType, Location, ReportedIssue, VerificationStatus};

    fn service() -> ReportService {
        ReportService::new(Arc::new(SyntheticRng::seeded(3)))
    }

    fn input(severity: IssueSeverity) -> FarmerReportInput {
        FarmerReportInput {
            farmer_id: None,
            location: Some(Location::new("Maharashtra", "Pune")),
            crop: None,
            issue: Some(ReportedIssue {
                issue_type: IssueType::Pest,
                description: "Stem borer damage".to_string(),
                severity,
                images: vec![],
                audio_note: None,
            }),
        }
    }

    #[test]
    fn test_defaults_for_missing_fields() {
        let report = service().process_farmer_report(input(IssueSeverity::Low)).unwrap();
        assert_eq!(report.farmer_id, "unknown");
        assert_eq!(report.crop, "unknown");
        assert!(report.id.starts_with("report-"));
        assert_eq!(report.verification.status, VerificationStatus::Pending);
        assert!(!report.verification.field_visit_required);
        assert_eq!(report.ai_analysis.confidence, 0.85);
        assert_eq!(report.ai_analysis.recommendations.len(), 3);
    }

    #[test]
    fn test_critical_requires_field_visit() {
        let report = service().process_farmer_report(input(IssueSeverity::Critical)).unwrap();
        assert!(report.verification.field_visit_required);
    }

    #[test]
    fn test_missing_location_rejected() {
        let mut partial = input(IssueSeverity::High);
        partial.location = None;
        let err = service().process_farmer_report(partial).unwrap_err();
        assert!(matches!(err, AppError::Validation { ref field, .. } if field == "location"));
    }

    #[test]
    fn test_blank_district_rejected() {
        let mut partial = input(IssueSeverity::High);
        partial.location = Some(Location::new("Maharashtra", "  "));
        assert!(service().process_farmer_report(partial).is_err());
    }

    #[test]
    fn test_ids_strictly_increase() {
        let service = service();
        let ids: Vec<i64> = (0..50)
            .map(|_| {
                let report = service.process_farmer_report(input(IssueSeverity::Low)).unwrap();
                report.id.trim_start_matches("report-").parse().unwrap()
            })
            .collect();
        assert!(ids.windows(2).all(|pair| pair[1] > pair[0]));
    }
}
