//! Criminal record repository contract and SQLite implementation.
//!
//! # Invariants
//! - A record is only written when its criminal exists at that moment.
//! - Owner lookups are explicit joins against `criminals`.
//! - `delete_criminal_record` is blocked while crime scenes reference it.

use crate::model::criminal_record::{CriminalRecord, CriminalRecordDetail, NewCriminalRecord};
use crate::model::{CriminalRecordId, EntityKind};
use crate::repo::criminal_repo::{parse_criminal_row, CRIMINAL_COLUMNS};
use crate::repo::{
    column_list, delete_restricted, ensure_reference, with_write_tx, Dependent, RepoResult,
};
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension, Row};

pub(crate) const CRIMINAL_RECORD_COLUMNS: &[&str] = &[
    "id",
    "criminal_id",
    "crime_type",
    "crime_date",
    "description",
    "sentence",
];

const CRIMINAL_RECORD_DEPENDENTS: &[Dependent] = &[Dependent {
    entity: EntityKind::CrimeScene,
    column: "criminal_record_id",
}];

/// Repository interface for criminal records.
pub trait CriminalRecordRepository {
    /// Fails with `MissingReference` when `criminal_id` does not exist.
    fn create_criminal_record(&self, record: &NewCriminalRecord) -> RepoResult<CriminalRecordId>;
    fn get_criminal_record(&self, id: CriminalRecordId) -> RepoResult<Option<CriminalRecord>>;
    fn list_criminal_records(&self) -> RepoResult<Vec<CriminalRecord>>;
    fn get_criminal_record_detail(
        &self,
        id: CriminalRecordId,
    ) -> RepoResult<Option<CriminalRecordDetail>>;
    fn list_criminal_record_details(&self) -> RepoResult<Vec<CriminalRecordDetail>>;
    fn delete_criminal_record(&self, id: CriminalRecordId) -> RepoResult<bool>;
}

/// SQLite-backed criminal record repository.
pub struct SqliteCriminalRecordRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCriminalRecordRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn detail_sql(filter: &str) -> String {
        format!(
            "SELECT {}, {}
             FROM criminal_records r
             INNER JOIN criminals c ON c.id = r.criminal_id
             {filter}
             ORDER BY r.id ASC;",
            column_list(Some("r"), CRIMINAL_RECORD_COLUMNS),
            column_list(Some("c"), CRIMINAL_COLUMNS),
        )
    }
}

impl CriminalRecordRepository for SqliteCriminalRecordRepository<'_> {
    fn create_criminal_record(&self, record: &NewCriminalRecord) -> RepoResult<CriminalRecordId> {
        record.validate()?;

        let result = with_write_tx(self.conn, |conn| {
            ensure_reference(
                conn,
                EntityKind::Criminal,
                "criminal_id",
                record.criminal_id,
            )?;

            conn.execute(
                "INSERT INTO criminal_records (
                    criminal_id,
                    crime_type,
                    crime_date,
                    description,
                    sentence
                ) VALUES (?1, ?2, ?3, ?4, ?5);",
                params![
                    record.criminal_id,
                    record.crime_type.trim(),
                    record.crime_date,
                    record.description.as_str(),
                    record.sentence.as_str(),
                ],
            )?;
            Ok(conn.last_insert_rowid())
        });

        match result {
            Ok(id) => {
                info!(
                    "event=criminal_record_create module=repo status=ok id={id} criminal_id={}",
                    record.criminal_id
                );
                Ok(id)
            }
            Err(err) => {
                warn!(
                    "event=criminal_record_create module=repo status=rejected criminal_id={} error={err}",
                    record.criminal_id
                );
                Err(err)
            }
        }
    }

    fn get_criminal_record(&self, id: CriminalRecordId) -> RepoResult<Option<CriminalRecord>> {
        let record = self
            .conn
            .query_row(
                &format!(
                    "SELECT {} FROM criminal_records WHERE id = ?1;",
                    column_list(None, CRIMINAL_RECORD_COLUMNS)
                ),
                [id],
                |row| parse_criminal_record_row(row, 0),
            )
            .optional()?;
        Ok(record)
    }

    fn list_criminal_records(&self) -> RepoResult<Vec<CriminalRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM criminal_records ORDER BY id ASC;",
            column_list(None, CRIMINAL_RECORD_COLUMNS)
        ))?;
        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_criminal_record_row(row, 0)?);
        }
        Ok(records)
    }

    fn get_criminal_record_detail(
        &self,
        id: CriminalRecordId,
    ) -> RepoResult<Option<CriminalRecordDetail>> {
        let detail = self
            .conn
            .query_row(&Self::detail_sql("WHERE r.id = ?1"), [id], parse_detail_row)
            .optional()?;
        Ok(detail)
    }

    fn list_criminal_record_details(&self) -> RepoResult<Vec<CriminalRecordDetail>> {
        let mut stmt = self.conn.prepare(&Self::detail_sql(""))?;
        let mut rows = stmt.query([])?;
        let mut details = Vec::new();
        while let Some(row) = rows.next()? {
            details.push(parse_detail_row(row)?);
        }
        Ok(details)
    }

    fn delete_criminal_record(&self, id: CriminalRecordId) -> RepoResult<bool> {
        let deleted = delete_restricted(
            self.conn,
            EntityKind::CriminalRecord,
            id,
            CRIMINAL_RECORD_DEPENDENTS,
        )?;
        if deleted {
            info!("event=criminal_record_delete module=repo status=ok id={id}");
        }
        Ok(deleted)
    }
}

pub(crate) fn parse_criminal_record_row(
    row: &Row<'_>,
    offset: usize,
) -> rusqlite::Result<CriminalRecord> {
    Ok(CriminalRecord {
        id: row.get(offset)?,
        criminal_id: row.get(offset + 1)?,
        crime_type: row.get(offset + 2)?,
        crime_date: row.get(offset + 3)?,
        description: row.get(offset + 4)?,
        sentence: row.get(offset + 5)?,
    })
}

fn parse_detail_row(row: &Row<'_>) -> rusqlite::Result<CriminalRecordDetail> {
    Ok(CriminalRecordDetail {
        record: parse_criminal_record_row(row, 0)?,
        criminal: parse_criminal_row(row, CRIMINAL_RECORD_COLUMNS.len())?,
    })
}
