//! Sample case data.
//!
//! # Invariants
//! - The whole dataset is inserted in one transaction or not at all.
//! - Parents are inserted before the rows that reference them.
//! - Seeding is additive; existing rows are left untouched.

use crate::model::crime_scene::NewCrimeScene;
use crate::model::criminal::NewCriminal;
use crate::model::criminal_record::NewCriminalRecord;
use crate::model::police_officer::NewPoliceOfficer;
use crate::model::{
    CrimeSceneId, CriminalId, CriminalRecordId, PoliceOfficerId, ValidationError,
};
use crate::repo::crime_scene_repo::{CrimeSceneRepository, SqliteCrimeSceneRepository};
use crate::repo::criminal_record_repo::{
    CriminalRecordRepository, SqliteCriminalRecordRepository,
};
use crate::repo::criminal_repo::{CriminalRepository, SqliteCriminalRepository};
use crate::repo::police_officer_repo::{PoliceOfficerRepository, SqlitePoliceOfficerRepository};
use crate::repo::RepoResult;
use chrono::NaiveDate;
use rusqlite::{Connection, Transaction, TransactionBehavior};
use serde::Serialize;

/// Ids created by one seeding run, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub criminal_ids: Vec<CriminalId>,
    pub criminal_record_ids: Vec<CriminalRecordId>,
    pub police_officer_ids: Vec<PoliceOfficerId>,
    pub crime_scene_ids: Vec<CrimeSceneId>,
}

/// Inserts two criminals, one record each, two officers and one scene per
/// record.
pub fn seed_sample_data(conn: &Connection) -> RepoResult<SeedSummary> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
    let summary = insert_sample_rows(&tx)?;
    tx.commit()?;
    Ok(summary)
}

fn insert_sample_rows(conn: &Connection) -> RepoResult<SeedSummary> {
    let criminals = SqliteCriminalRepository::new(conn);
    let records = SqliteCriminalRecordRepository::new(conn);
    let officers = SqlitePoliceOfficerRepository::new(conn);
    let scenes = SqliteCrimeSceneRepository::new(conn);
    let mut summary = SeedSummary::default();

    let john = criminals.create_criminal(&NewCriminal {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        date_of_birth: date(1990, 1, 1)?,
        gender: "Male".to_string(),
        nationality: "US".to_string(),
        address: "123 Main St, City".to_string(),
        phone_number: "555-1234".to_string(),
        email: "john.doe@example.com".to_string(),
        wanted_level: 3,
    })?;
    let jane = criminals.create_criminal(&NewCriminal {
        first_name: "Jane".to_string(),
        last_name: "Smith".to_string(),
        date_of_birth: date(1985, 5, 15)?,
        gender: "Female".to_string(),
        nationality: "UK".to_string(),
        address: "456 Oak St, Town".to_string(),
        phone_number: "555-5678".to_string(),
        email: "jane.smith@example.com".to_string(),
        wanted_level: 5,
    })?;
    summary.criminal_ids = vec![john, jane];

    let robbery = records.create_criminal_record(&NewCriminalRecord {
        criminal_id: john,
        crime_type: "Robbery".to_string(),
        crime_date: date(2020, 3, 10)?,
        description: "Armed robbery at a convenience store".to_string(),
        sentence: "5 years imprisonment".to_string(),
    })?;
    let fraud = records.create_criminal_record(&NewCriminalRecord {
        criminal_id: jane,
        crime_type: "Fraud".to_string(),
        crime_date: date(2019, 8, 20)?,
        description: "Financial fraud scheme".to_string(),
        sentence: "3 years probation".to_string(),
    })?;
    summary.criminal_record_ids = vec![robbery, fraud];

    let johnson = officers.create_police_officer(&NewPoliceOfficer {
        first_name: "Officer".to_string(),
        last_name: "Johnson".to_string(),
        badge_number: "12345".to_string(),
        rank: "Detective".to_string(),
        station: "City Police Department".to_string(),
    })?;
    let smith = officers.create_police_officer(&NewPoliceOfficer {
        first_name: "Officer".to_string(),
        last_name: "Smith".to_string(),
        badge_number: "54321".to_string(),
        rank: "Sergeant".to_string(),
        station: "Town Police Department".to_string(),
    })?;
    summary.police_officer_ids = vec![johnson, smith];

    let main_street = scenes.create_crime_scene(&NewCrimeScene {
        location: "Main Street".to_string(),
        date: date(2020, 3, 10)?,
        description: "Crime scene related to the robbery".to_string(),
        investigating_officer_id: johnson,
        criminal_record_id: robbery,
    })?;
    let oak_street = scenes.create_crime_scene(&NewCrimeScene {
        location: "Oak Street".to_string(),
        date: date(2019, 8, 20)?,
        description: "Crime scene related to the fraud case".to_string(),
        investigating_officer_id: smith,
        criminal_record_id: fraud,
    })?;
    summary.crime_scene_ids = vec![main_street, oak_street];

    Ok(summary)
}

fn date(year: i32, month: u32, day: u32) -> RepoResult<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(ValidationError::InvalidDate { year, month, day })
        .map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::date;
    use crate::model::ValidationError;
    use crate::repo::RepoError;
    use chrono::NaiveDate;

    #[test]
    fn date_rejects_impossible_days() {
        assert_eq!(date(2020, 3, 10).unwrap(), NaiveDate::from_ymd_opt(2020, 3, 10).unwrap());

        let err = date(2021, 2, 30).unwrap_err();
        assert!(matches!(
            err,
            RepoError::Validation(ValidationError::InvalidDate { year: 2021, month: 2, day: 30 })
        ));
        assert_eq!(err.to_string(), "2021-02-30 is not a calendar date");
    }
}
