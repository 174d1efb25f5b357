//! Status vocabularies for projects, signs, and RFQs.
//!
//! Statuses persist as lowercase strings; these helpers keep the valid sets
//! in one place for the handlers that accept free-form status input.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Project status
// ---------------------------------------------------------------------------

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Active,
    Pending,
    Completed,
    OnHold,
}

const VALID_PROJECT_STATUSES: &[&str] = &["active", "pending", "completed", "on_hold"];

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Completed => "completed",
            Self::OnHold => "on_hold",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "active" => Ok(Self::Active),
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "on_hold" => Ok(Self::OnHold),
            _ => Err(CoreError::Validation(format!(
                "Invalid project status '{s}'. Must be one of: {}",
                VALID_PROJECT_STATUSES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Sign status
// ---------------------------------------------------------------------------

/// Production status of an individual sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SignStatus {
    #[default]
    Draft,
    InReview,
    Approved,
    InProduction,
}

const VALID_SIGN_STATUSES: &[&str] = &["draft", "in_review", "approved", "in_production"];

impl SignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::InReview => "in_review",
            Self::Approved => "approved",
            Self::InProduction => "in_production",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "draft" => Ok(Self::Draft),
            "in_review" => Ok(Self::InReview),
            "approved" => Ok(Self::Approved),
            "in_production" => Ok(Self::InProduction),
            _ => Err(CoreError::Validation(format!(
                "Invalid sign status '{s}'. Must be one of: {}",
                VALID_SIGN_STATUSES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// RFQ status
// ---------------------------------------------------------------------------

/// Status of a vendor request-for-quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RfqStatus {
    #[default]
    Open,
    Closed,
    Awarded,
}

const VALID_RFQ_STATUSES: &[&str] = &["open", "closed", "awarded"];

impl RfqStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Awarded => "awarded",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "open" => Ok(Self::Open),
            "closed" => Ok(Self::Closed),
            "awarded" => Ok(Self::Awarded),
            _ => Err(CoreError::Validation(format!(
                "Invalid RFQ status '{s}'. Must be one of: {}",
                VALID_RFQ_STATUSES.join(", ")
            ))),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_status_round_trips() {
        for s in VALID_PROJECT_STATUSES {
            assert_eq!(ProjectStatus::parse(s).unwrap().as_str(), *s);
        }
    }

    #[test]
    fn project_status_default_is_active() {
        assert_eq!(ProjectStatus::default(), ProjectStatus::Active);
    }

    #[test]
    fn sign_status_round_trips() {
        for s in VALID_SIGN_STATUSES {
            assert_eq!(SignStatus::parse(s).unwrap().as_str(), *s);
        }
    }

    #[test]
    fn rfq_status_default_is_open() {
        assert_eq!(RfqStatus::default().as_str(), "open");
    }

    #[test]
    fn unknown_statuses_are_rejected() {
        assert!(ProjectStatus::parse("archived").is_err());
        assert!(SignStatus::parse("shipped").is_err());
        assert!(RfqStatus::parse("draft-ish").is_err());
    }
}
