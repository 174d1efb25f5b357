//! Commentable entity kinds.
//!
//! Comments attach to an `(entity_type, entity_id)` pair rather than a
//! dedicated foreign key, so the valid set of entity kinds lives here and
//! the API layer resolves the id against the matching table before insert.

use crate::error::CoreError;

/// Entity kinds a comment can pin to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentEntity {
    Sign,
    Proof,
}

const VALID_ENTITIES: &[&str] = &["sign", "proof"];

impl CommentEntity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sign => "sign",
            Self::Proof => "proof",
        }
    }

    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "sign" => Ok(Self::Sign),
            "proof" => Ok(Self::Proof),
            _ => Err(CoreError::Validation(format!(
                "Invalid entity type '{s}'. Must be one of: {}",
                VALID_ENTITIES.join(", ")
            ))),
        }
    }
}
