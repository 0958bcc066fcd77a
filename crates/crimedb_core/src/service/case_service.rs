//! Case file use-case service.
//!
//! # Responsibility
//! - Expose one add/delete/list operation per entity to command callers.
//! - Translate repository failures into the user-facing error kinds.
//!
//! # Invariants
//! - Service APIs never bypass repository validation or reference checks.
//! - "Not found" on delete is `Ok(false)`, never an error; lookups return
//!   `Ok(None)`.
//! - The connection is borrowed for the service lifetime; the service holds
//!   no other state.

use crate::db::DbError;
use crate::model::crime_scene::{CrimeScene, CrimeSceneDetail, NewCrimeScene};
use crate::model::criminal::{Criminal, NewCriminal};
use crate::model::criminal_record::{CriminalRecord, CriminalRecordDetail, NewCriminalRecord};
use crate::model::police_officer::{NewPoliceOfficer, PoliceOfficer};
use crate::model::{
    ConstraintViolation, CrimeSceneId, CriminalId, CriminalRecordId, PoliceOfficerId,
    ValidationError,
};
use crate::repo::crime_scene_repo::{CrimeSceneRepository, SqliteCrimeSceneRepository};
use crate::repo::criminal_record_repo::{
    CriminalRecordRepository, SqliteCriminalRecordRepository,
};
use crate::repo::criminal_repo::{CriminalRepository, SqliteCriminalRepository};
use crate::repo::police_officer_repo::{PoliceOfficerRepository, SqlitePoliceOfficerRepository};
use crate::repo::RepoError;
use crate::service::seed::{seed_sample_data, SeedSummary};
use log::info;
use rusqlite::Connection;
use thiserror::Error;

pub type CaseResult<T> = Result<T, CaseError>;

/// Errors reported by case file operations.
#[derive(Debug, Error)]
pub enum CaseError {
    /// Required input was missing; nothing was written.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// A foreign-key rule rejected the write; nothing was written.
    #[error(transparent)]
    ConstraintViolation(#[from] ConstraintViolation),
    /// The store could not be read or written.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[source] DbError),
}

impl CaseError {
    /// Returns whether retrying the same command later may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StorageUnavailable(err) if err.is_contention())
    }
}

impl From<RepoError> for CaseError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Validation(err),
            RepoError::Constraint(err) => Self::ConstraintViolation(err),
            RepoError::Db(err) => Self::StorageUnavailable(err),
        }
    }
}

impl From<DbError> for CaseError {
    fn from(value: DbError) -> Self {
        Self::StorageUnavailable(value)
    }
}

/// Case file service over one open connection.
pub struct CaseService<'conn> {
    conn: &'conn Connection,
    criminals: SqliteCriminalRepository<'conn>,
    records: SqliteCriminalRecordRepository<'conn>,
    officers: SqlitePoliceOfficerRepository<'conn>,
    scenes: SqliteCrimeSceneRepository<'conn>,
}

impl<'conn> CaseService<'conn> {
    /// Creates a service over a connection returned by `open_db`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self {
            conn,
            criminals: SqliteCriminalRepository::new(conn),
            records: SqliteCriminalRecordRepository::new(conn),
            officers: SqlitePoliceOfficerRepository::new(conn),
            scenes: SqliteCrimeSceneRepository::new(conn),
        }
    }

    pub fn add_criminal(&self, criminal: &NewCriminal) -> CaseResult<CriminalId> {
        Ok(self.criminals.create_criminal(criminal)?)
    }

    pub fn get_criminal(&self, id: CriminalId) -> CaseResult<Option<Criminal>> {
        Ok(self.criminals.get_criminal(id)?)
    }

    pub fn list_criminals(&self) -> CaseResult<Vec<Criminal>> {
        Ok(self.criminals.list_criminals()?)
    }

    /// Deletes one criminal.
    ///
    /// Returns `Ok(false)` when the id is absent. Fails with
    /// `ConstraintViolation` while criminal records reference the criminal.
    pub fn delete_criminal(&self, id: CriminalId) -> CaseResult<bool> {
        Ok(self.criminals.delete_criminal(id)?)
    }

    /// Adds a record for an existing criminal.
    pub fn add_criminal_record(&self, record: &NewCriminalRecord) -> CaseResult<CriminalRecordId> {
        Ok(self.records.create_criminal_record(record)?)
    }

    pub fn get_criminal_record(&self, id: CriminalRecordId) -> CaseResult<Option<CriminalRecord>> {
        Ok(self.records.get_criminal_record(id)?)
    }

    pub fn list_criminal_records(&self) -> CaseResult<Vec<CriminalRecord>> {
        Ok(self.records.list_criminal_records()?)
    }

    /// Loads one record together with its owning criminal.
    pub fn criminal_record_detail(
        &self,
        id: CriminalRecordId,
    ) -> CaseResult<Option<CriminalRecordDetail>> {
        Ok(self.records.get_criminal_record_detail(id)?)
    }

    pub fn list_criminal_record_details(&self) -> CaseResult<Vec<CriminalRecordDetail>> {
        Ok(self.records.list_criminal_record_details()?)
    }

    /// Blocked while crime scenes reference the record.
    pub fn delete_criminal_record(&self, id: CriminalRecordId) -> CaseResult<bool> {
        Ok(self.records.delete_criminal_record(id)?)
    }

    pub fn add_police_officer(&self, officer: &NewPoliceOfficer) -> CaseResult<PoliceOfficerId> {
        Ok(self.officers.create_police_officer(officer)?)
    }

    pub fn get_police_officer(&self, id: PoliceOfficerId) -> CaseResult<Option<PoliceOfficer>> {
        Ok(self.officers.get_police_officer(id)?)
    }

    pub fn list_police_officers(&self) -> CaseResult<Vec<PoliceOfficer>> {
        Ok(self.officers.list_police_officers()?)
    }

    /// Blocked while crime scenes name the officer as investigator.
    pub fn delete_police_officer(&self, id: PoliceOfficerId) -> CaseResult<bool> {
        Ok(self.officers.delete_police_officer(id)?)
    }

    /// Adds a scene for an existing officer and an existing record.
    pub fn add_crime_scene(&self, scene: &NewCrimeScene) -> CaseResult<CrimeSceneId> {
        Ok(self.scenes.create_crime_scene(scene)?)
    }

    pub fn get_crime_scene(&self, id: CrimeSceneId) -> CaseResult<Option<CrimeScene>> {
        Ok(self.scenes.get_crime_scene(id)?)
    }

    pub fn list_crime_scenes(&self) -> CaseResult<Vec<CrimeScene>> {
        Ok(self.scenes.list_crime_scenes()?)
    }

    pub fn crime_scene_detail(&self, id: CrimeSceneId) -> CaseResult<Option<CrimeSceneDetail>> {
        Ok(self.scenes.get_crime_scene_detail(id)?)
    }

    pub fn list_crime_scene_details(&self) -> CaseResult<Vec<CrimeSceneDetail>> {
        Ok(self.scenes.list_crime_scene_details()?)
    }

    pub fn delete_crime_scene(&self, id: CrimeSceneId) -> CaseResult<bool> {
        Ok(self.scenes.delete_crime_scene(id)?)
    }

    /// Inserts the sample dataset in one transaction.
    pub fn seed_sample_data(&self) -> CaseResult<SeedSummary> {
        let summary = seed_sample_data(self.conn)?;
        info!(
            "event=seed module=service status=ok criminals={} records={} officers={} scenes={}",
            summary.criminal_ids.len(),
            summary.criminal_record_ids.len(),
            summary.police_officer_ids.len(),
            summary.crime_scene_ids.len()
        );
        Ok(summary)
    }
}
