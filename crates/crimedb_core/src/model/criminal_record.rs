//! Criminal record rows and the record-with-owner read model.

use super::criminal::Criminal;
use super::{require_text, CriminalId, CriminalRecordId, EntityKind, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted criminal record. `criminal_id` always referenced an existing
/// criminal when the row was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriminalRecord {
    pub id: CriminalRecordId,
    pub criminal_id: CriminalId,
    pub crime_type: String,
    pub crime_date: NaiveDate,
    pub description: String,
    pub sentence: String,
}

/// Fields accepted by `add_criminal_record`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCriminalRecord {
    pub criminal_id: CriminalId,
    pub crime_type: String,
    pub crime_date: NaiveDate,
    pub description: String,
    pub sentence: String,
}

impl NewCriminalRecord {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text(EntityKind::CriminalRecord, "crime_type", &self.crime_type)
    }
}

/// A record joined with its owning criminal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriminalRecordDetail {
    pub record: CriminalRecord,
    pub criminal: Criminal,
}
