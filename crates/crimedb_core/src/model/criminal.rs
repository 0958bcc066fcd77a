//! Criminal rows.

use super::{require_text, CriminalId, EntityKind, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted criminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criminal {
    pub id: CriminalId,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub nationality: String,
    pub address: String,
    pub phone_number: String,
    pub email: String,
    pub wanted_level: i64,
}

impl Criminal {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields accepted by `add_criminal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCriminal {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub gender: String,
    pub nationality: String,
    pub address: String,
    pub phone_number: String,
    pub email: String,
    pub wanted_level: i64,
}

impl NewCriminal {
    /// Checks that both name parts are present. No uniqueness is implied.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text(EntityKind::Criminal, "first_name", &self.first_name)?;
        require_text(EntityKind::Criminal, "last_name", &self.last_name)?;
        Ok(())
    }
}
