//! Geographic scope of a data pull

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::Coordinates;

/// State/district (and optionally block) a request is scoped to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    #[validate(length(min = 1, message = "state must not be empty"))]
    pub state: String,
    #[validate(length(min = 1, message = "district must not be empty"))]
    pub district: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl Location {
    pub fn new(state: impl Into<String>, district: impl Into<String>) -> Self {
        Self {
            state: state.into(),
            district: district.into(),
            block: None,
            village: None,
            coordinates: None,
        }
    }

    /// Trims surrounding whitespace so that blank names fail validation
    pub fn normalized(mut self) -> Self {
        self.state = self.state.trim().to_string();
        self.district = self.district.trim().to_string();
        self
    }
}
