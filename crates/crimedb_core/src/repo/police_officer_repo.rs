//! Police officer repository contract and SQLite implementation.

use crate::model::police_officer::{NewPoliceOfficer, PoliceOfficer};
use crate::model::{EntityKind, PoliceOfficerId};
use crate::repo::{column_list, delete_restricted, Dependent, RepoResult};
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};

pub(crate) const POLICE_OFFICER_COLUMNS: &[&str] = &[
    "id",
    "first_name",
    "last_name",
    "badge_number",
    "rank",
    "station",
];

const POLICE_OFFICER_DEPENDENTS: &[Dependent] = &[Dependent {
    entity: EntityKind::CrimeScene,
    column: "investigating_officer_id",
}];

/// Repository interface for police officers.
pub trait PoliceOfficerRepository {
    fn create_police_officer(&self, officer: &NewPoliceOfficer) -> RepoResult<PoliceOfficerId>;
    fn get_police_officer(&self, id: PoliceOfficerId) -> RepoResult<Option<PoliceOfficer>>;
    fn list_police_officers(&self) -> RepoResult<Vec<PoliceOfficer>>;
    /// Blocked while crime scenes name the officer as investigator.
    fn delete_police_officer(&self, id: PoliceOfficerId) -> RepoResult<bool>;
}

/// SQLite-backed police officer repository.
pub struct SqlitePoliceOfficerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePoliceOfficerRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PoliceOfficerRepository for SqlitePoliceOfficerRepository<'_> {
    fn create_police_officer(&self, officer: &NewPoliceOfficer) -> RepoResult<PoliceOfficerId> {
        officer.validate()?;

        self.conn.execute(
            "INSERT INTO police_officers (
                first_name,
                last_name,
                badge_number,
                rank,
                station
            ) VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                officer.first_name.trim(),
                officer.last_name.trim(),
                officer.badge_number.trim(),
                officer.rank.as_str(),
                officer.station.as_str(),
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        info!("event=police_officer_create module=repo status=ok id={id}");
        Ok(id)
    }

    fn get_police_officer(&self, id: PoliceOfficerId) -> RepoResult<Option<PoliceOfficer>> {
        let officer = self
            .conn
            .query_row(
                &format!(
                    "SELECT {} FROM police_officers WHERE id = ?1;",
                    column_list(None, POLICE_OFFICER_COLUMNS)
                ),
                [id],
                |row| parse_police_officer_row(row, 0),
            )
            .optional()?;
        Ok(officer)
    }

    fn list_police_officers(&self) -> RepoResult<Vec<PoliceOfficer>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM police_officers ORDER BY id ASC;",
            column_list(None, POLICE_OFFICER_COLUMNS)
        ))?;
        let mut rows = stmt.query([])?;
        let mut officers = Vec::new();
        while let Some(row) = rows.next()? {
            officers.push(parse_police_officer_row(row, 0)?);
        }
        Ok(officers)
    }

    fn delete_police_officer(&self, id: PoliceOfficerId) -> RepoResult<bool> {
        let deleted = delete_restricted(
            self.conn,
            EntityKind::PoliceOfficer,
            id,
            POLICE_OFFICER_DEPENDENTS,
        )?;
        if deleted {
            info!("event=police_officer_delete module=repo status=ok id={id}");
        }
        Ok(deleted)
    }
}

pub(crate) fn parse_police_officer_row(
    row: &Row<'_>,
    offset: usize,
) -> rusqlite::Result<PoliceOfficer> {
    Ok(PoliceOfficer {
        id: row.get(offset)?,
        first_name: row.get(offset + 1)?,
        last_name: row.get(offset + 2)?,
        badge_number: row.get(offset + 3)?,
        rank: row.get(offset + 4)?,
        station: row.get(offset + 5)?,
    })
}
