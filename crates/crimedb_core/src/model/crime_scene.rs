//! Crime scene rows and the scene-with-references read model.

use super::criminal_record::CriminalRecord;
use super::police_officer::PoliceOfficer;
use super::{
    require_text, CrimeSceneId, CriminalRecordId, EntityKind, PoliceOfficerId, ValidationError,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted crime scene. Both references existed when the row was written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrimeScene {
    pub id: CrimeSceneId,
    pub location: String,
    pub date: NaiveDate,
    pub description: String,
    pub investigating_officer_id: PoliceOfficerId,
    pub criminal_record_id: CriminalRecordId,
}

/// Fields accepted by `add_crime_scene`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCrimeScene {
    pub location: String,
    pub date: NaiveDate,
    pub description: String,
    pub investigating_officer_id: PoliceOfficerId,
    pub criminal_record_id: CriminalRecordId,
}

impl NewCrimeScene {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text(EntityKind::CrimeScene, "location", &self.location)
    }
}

/// A crime scene joined with its investigating officer and its record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrimeSceneDetail {
    pub scene: CrimeScene,
    pub investigating_officer: PoliceOfficer,
    pub criminal_record: CriminalRecord,
}
