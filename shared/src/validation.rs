//! Validation utilities for the agricultural intelligence platform
//!
//! Request-level checks applied before anything is sent upstream.

use chrono::{Datelike, Utc};

// ============================================================================
// Upstream Query Validations
// ============================================================================

/// Validate a commodity or crop name used in an upstream path segment.
/// Letters, digits, spaces and hyphens only, 1-64 characters.
pub fn validate_commodity_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Commodity name must not be empty");
    }
    if trimmed.chars().count() > 64 {
        return Err("Commodity name must be at most 64 characters");
    }
    if !trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-')
    {
        return Err("Commodity name may only contain letters, digits, spaces and hyphens");
    }
    Ok(())
}

/// Validate a publication year filter (ICAR archive starts in 1929)
pub fn validate_publication_year(year: i32) -> Result<(), &'static str> {
    if year < 1929 {
        return Err("Publication year predates the ICAR archive");
    }
    if year > Utc::now().year() {
        return Err("Publication year is in the future");
    }
    Ok(())
}

// ============================================================================
// General Validations
// ============================================================================

/// Validate email format (basic check)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    if email.contains('@') && email.contains('.') && email.len() >= 5 {
        Ok(())
    } else {
        Err("Invalid email format")
    }
}
