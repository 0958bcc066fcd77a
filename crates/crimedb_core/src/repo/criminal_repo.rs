//! Criminal repository contract and SQLite implementation.
//!
//! # Invariants
//! - `create_criminal` performs no uniqueness check on any field.
//! - `delete_criminal` is blocked while criminal records reference the row.

use crate::model::criminal::{Criminal, NewCriminal};
use crate::model::{CriminalId, EntityKind};
use crate::repo::{column_list, delete_restricted, Dependent, RepoResult};
use log::info;
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Column order shared by every query that loads a [`Criminal`].
pub(crate) const CRIMINAL_COLUMNS: &[&str] = &[
    "id",
    "first_name",
    "last_name",
    "date_of_birth",
    "gender",
    "nationality",
    "address",
    "phone_number",
    "email",
    "wanted_level",
];

const CRIMINAL_DEPENDENTS: &[Dependent] = &[Dependent {
    entity: EntityKind::CriminalRecord,
    column: "criminal_id",
}];

/// Repository interface for criminals.
pub trait CriminalRepository {
    fn create_criminal(&self, criminal: &NewCriminal) -> RepoResult<CriminalId>;
    fn get_criminal(&self, id: CriminalId) -> RepoResult<Option<Criminal>>;
    fn list_criminals(&self) -> RepoResult<Vec<Criminal>>;
    fn delete_criminal(&self, id: CriminalId) -> RepoResult<bool>;
}

/// SQLite-backed criminal repository.
pub struct SqliteCriminalRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCriminalRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CriminalRepository for SqliteCriminalRepository<'_> {
    fn create_criminal(&self, criminal: &NewCriminal) -> RepoResult<CriminalId> {
        criminal.validate()?;

        self.conn.execute(
            "INSERT INTO criminals (
                first_name,
                last_name,
                date_of_birth,
                gender,
                nationality,
                address,
                phone_number,
                email,
                wanted_level
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9);",
            params![
                criminal.first_name.trim(),
                criminal.last_name.trim(),
                criminal.date_of_birth,
                criminal.gender.as_str(),
                criminal.nationality.as_str(),
                criminal.address.as_str(),
                criminal.phone_number.as_str(),
                criminal.email.as_str(),
                criminal.wanted_level,
            ],
        )?;

        let id = self.conn.last_insert_rowid();
        info!("event=criminal_create module=repo status=ok id={id}");
        Ok(id)
    }

    fn get_criminal(&self, id: CriminalId) -> RepoResult<Option<Criminal>> {
        let criminal = self
            .conn
            .query_row(
                &format!(
                    "SELECT {} FROM criminals WHERE id = ?1;",
                    column_list(None, CRIMINAL_COLUMNS)
                ),
                [id],
                |row| parse_criminal_row(row, 0),
            )
            .optional()?;
        Ok(criminal)
    }

    fn list_criminals(&self) -> RepoResult<Vec<Criminal>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM criminals ORDER BY id ASC;",
            column_list(None, CRIMINAL_COLUMNS)
        ))?;
        let mut rows = stmt.query([])?;
        let mut criminals = Vec::new();
        while let Some(row) = rows.next()? {
            criminals.push(parse_criminal_row(row, 0)?);
        }
        Ok(criminals)
    }

    fn delete_criminal(&self, id: CriminalId) -> RepoResult<bool> {
        let deleted = delete_restricted(self.conn, EntityKind::Criminal, id, CRIMINAL_DEPENDENTS)?;
        if deleted {
            info!("event=criminal_delete module=repo status=ok id={id}");
        }
        Ok(deleted)
    }
}

/// Reads a criminal whose columns start at `offset`, in
/// [`CRIMINAL_COLUMNS`] order.
pub(crate) fn parse_criminal_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<Criminal> {
    Ok(Criminal {
        id: row.get(offset)?,
        first_name: row.get(offset + 1)?,
        last_name: row.get(offset + 2)?,
        date_of_birth: row.get(offset + 3)?,
        gender: row.get(offset + 4)?,
        nationality: row.get(offset + 5)?,
        address: row.get(offset + 6)?,
        phone_number: row.get(offset + 7)?,
        email: row.get(offset + 8)?,
        wanted_level: row.get(offset + 9)?,
    })
}
