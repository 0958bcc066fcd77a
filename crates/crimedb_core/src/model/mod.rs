//! Case domain model: criminals, their records, officers and crime scenes.
//!
//! # Responsibility
//! - Define the persisted row shapes and their insert-time inputs.
//! - Validate required fields before any value reaches storage.
//!
//! # Invariants
//! - Ids are assigned by the store and never change.
//! - Relationships are plain foreign-key fields; related rows are loaded by
//!   explicit queries, never implicitly.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use thiserror::Error;

pub mod crime_scene;
pub mod criminal;
pub mod criminal_record;
pub mod police_officer;

pub type CriminalId = i64;
pub type CriminalRecordId = i64;
pub type PoliceOfficerId = i64;
pub type CrimeSceneId = i64;

/// The four persisted entity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Criminal,
    CriminalRecord,
    PoliceOfficer,
    CrimeScene,
}

impl EntityKind {
    /// Backing table name.
    pub fn table(self) -> &'static str {
        match self {
            Self::Criminal => "criminals",
            Self::CriminalRecord => "criminal_records",
            Self::PoliceOfficer => "police_officers",
            Self::CrimeScene => "crime_scenes",
        }
    }

    /// Human-readable singular label used in messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Criminal => "criminal",
            Self::CriminalRecord => "criminal record",
            Self::PoliceOfficer => "police officer",
            Self::CrimeScene => "crime scene",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Input rejected before reaching storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{entity} field `{field}` is required")]
    MissingField {
        entity: EntityKind,
        field: &'static str,
    },
    #[error("{year:04}-{month:02}-{day:02} is not a calendar date")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// A write rejected because of a foreign-key relationship.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConstraintViolation {
    /// The referenced parent row does not exist.
    #[error("invalid reference: {field} points to {entity} {id}, which does not exist")]
    MissingReference {
        entity: EntityKind,
        field: &'static str,
        id: i64,
    },
    /// The row still has dependents and the delete is blocked.
    #[error("cannot delete {entity} {id}: still referenced by {count} {dependent} row(s)")]
    HasDependents {
        entity: EntityKind,
        id: i64,
        dependent: EntityKind,
        count: i64,
    },
    /// SQLite rejected the statement at the storage boundary.
    #[error("foreign key constraint failed")]
    Storage,
}

pub(crate) fn require_text(
    entity: EntityKind,
    field: &'static str,
    value: &str,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::MissingField { entity, field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{require_text, ConstraintViolation, EntityKind, ValidationError};

    #[test]
    fn blank_text_is_missing() {
        let err = require_text(EntityKind::Criminal, "first_name", "  \t").unwrap_err();
        assert_eq!(
            err,
            ValidationError::MissingField {
                entity: EntityKind::Criminal,
                field: "first_name",
            }
        );
        assert_eq!(err.to_string(), "criminal field `first_name` is required");
    }

    #[test]
    fn constraint_messages_name_the_reference() {
        let missing = ConstraintViolation::MissingReference {
            entity: EntityKind::PoliceOfficer,
            field: "investigating_officer_id",
            id: 9,
        };
        assert_eq!(
            missing.to_string(),
            "invalid reference: investigating_officer_id points to police officer 9, which does not exist"
        );

        let blocked = ConstraintViolation::HasDependents {
            entity: EntityKind::Criminal,
            id: 1,
            dependent: EntityKind::CriminalRecord,
            count: 2,
        };
        assert_eq!(
            blocked.to_string(),
            "cannot delete criminal 1: still referenced by 2 criminal record row(s)"
        );
    }

    #[test]
    fn entity_tables_match_schema() {
        assert_eq!(EntityKind::CriminalRecord.table(), "criminal_records");
        assert_eq!(EntityKind::CrimeScene.to_string(), "crime scene");
        assert_eq!(
            serde_json::to_string(&EntityKind::PoliceOfficer).unwrap(),
            "\"police_officer\""
        );
    }
}
