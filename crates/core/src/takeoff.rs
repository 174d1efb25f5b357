//! Takeoff marker validation and workflow stage enum.
//!
//! Markers are pin placements on a drawing page, stored as coordinates
//! normalized to the page dimensions so they survive rescaling and zoom.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Coordinate validation
// ---------------------------------------------------------------------------

/// Validate that a normalized coordinate lies in `[0, 1]` inclusive.
///
/// `field` names the coordinate in the error message. NaN and infinities
/// are rejected before the range check.
pub fn validate_normalized(field: &str, value: f64) -> Result<(), CoreError> {
    if value.is_nan() || value.is_infinite() {
        return Err(CoreError::Validation(format!(
            "{field} must be a finite number"
        )));
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(CoreError::Validation(format!(
            "{field} must be between 0 and 1, got {value}"
        )));
    }
    Ok(())
}

/// Validate a marker's full position.
pub fn validate_marker_position(x: f64, y: f64) -> Result<(), CoreError> {
    validate_normalized("x", x)?;
    validate_normalized("y", y)
}

/// Validate that a page number is positive (pages are 1-based).
pub fn validate_page_number(page: i64) -> Result<(), CoreError> {
    if page < 1 {
        return Err(CoreError::Validation(format!(
            "page_number must be >= 1, got {page}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Workflow stage
// ---------------------------------------------------------------------------

/// Takeoff workflow stage tag carried by each marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerStage {
    Draft,
    Review,
    Approved,
}

const VALID_STAGES: &[&str] = &["draft", "review", "approved"];

impl MarkerStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Review => "review",
            Self::Approved => "approved",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "draft" => Ok(Self::Draft),
            "review" => Ok(Self::Review),
            "approved" => Ok(Self::Approved),
            _ => Err(CoreError::Validation(format!(
                "Invalid marker stage '{s}'. Must be one of: {}",
                VALID_STAGES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
