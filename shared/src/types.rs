//! Common types used across the platform

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Geographic point, serialized as `[longitude, latitude]`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Coordinates(pub f64, pub f64);

impl Coordinates {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self(longitude, latitude)
    }
}

/// Success envelope returned by the integrated data endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Envelope stamped with the response time
    pub fn timestamped(data: T, timestamp: DateTime<Utc>) -> Self {
        Self {
            success: true,
            data,
            timestamp: Some(timestamp),
            message: None,
        }
    }

    /// Envelope carrying a human-readable confirmation
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data,
            timestamp: None,
            message: Some(message.into()),
        }
    }
}

/// Failure envelope; `error` is always a fixed, user-facing string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiFailureBody {
    pub success: bool,
    pub error: String,
}

impl ApiFailureBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
