//! Police officer rows.

use super::{require_text, EntityKind, PoliceOfficerId, ValidationError};
use serde::{Deserialize, Serialize};

/// Persisted police officer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoliceOfficer {
    pub id: PoliceOfficerId,
    pub first_name: String,
    pub last_name: String,
    pub badge_number: String,
    pub rank: String,
    pub station: String,
}

impl PoliceOfficer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields accepted by `add_police_officer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPoliceOfficer {
    pub first_name: String,
    pub last_name: String,
    pub badge_number: String,
    pub rank: String,
    pub station: String,
}

impl NewPoliceOfficer {
    /// Badge numbers are free text and may repeat across stations.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text(EntityKind::PoliceOfficer, "first_name", &self.first_name)?;
        require_text(EntityKind::PoliceOfficer, "last_name", &self.last_name)?;
        require_text(EntityKind::PoliceOfficer, "badge_number", &self.badge_number)?;
        Ok(())
    }
}
