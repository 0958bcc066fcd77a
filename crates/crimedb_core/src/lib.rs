//! Core case-file logic for crimedb.
//! This crate owns the schema and every referential-integrity rule.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, DbError, DbResult};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::crime_scene::{CrimeScene, CrimeSceneDetail, NewCrimeScene};
pub use model::criminal::{Criminal, NewCriminal};
pub use model::criminal_record::{CriminalRecord, CriminalRecordDetail, NewCriminalRecord};
pub use model::police_officer::{NewPoliceOfficer, PoliceOfficer};
pub use model::{
    ConstraintViolation, CrimeSceneId, CriminalId, CriminalRecordId, EntityKind,
    PoliceOfficerId, ValidationError,
};
pub use repo::crime_scene_repo::{CrimeSceneRepository, SqliteCrimeSceneRepository};
pub use repo::criminal_record_repo::{CriminalRecordRepository, SqliteCriminalRecordRepository};
pub use repo::criminal_repo::{CriminalRepository, SqliteCriminalRepository};
pub use repo::police_officer_repo::{PoliceOfficerRepository, SqlitePoliceOfficerRepository};
pub use repo::{RepoError, RepoResult};
pub use service::case_service::{CaseError, CaseResult, CaseService};
pub use service::seed::SeedSummary;
