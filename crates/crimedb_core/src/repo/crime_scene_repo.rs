//! Crime scene repository contract and SQLite implementation.
//!
//! # Invariants
//! - Officer and record existence checks and the insert run in one
//!   IMMEDIATE transaction; a concurrent delete cannot slip between them.
//! - The officer reference is checked before the record reference.

use crate::model::crime_scene::{CrimeScene, CrimeSceneDetail, NewCrimeScene};
use crate::model::{CrimeSceneId, EntityKind};
use crate::repo::criminal_record_repo::{parse_criminal_record_row, CRIMINAL_RECORD_COLUMNS};
use crate::repo::police_officer_repo::{parse_police_officer_row, POLICE_OFFICER_COLUMNS};
use crate::repo::{column_list, delete_restricted, ensure_reference, with_write_tx, RepoResult};
use log::{info, warn};
use rusqlite::{params, Connection, OptionalExtension, Row};

pub(crate) const CRIME_SCENE_COLUMNS: &[&str] = &[
    "id",
    "location",
    "date",
    "description",
    "investigating_officer_id",
    "criminal_record_id",
];

/// Repository interface for crime scenes.
pub trait CrimeSceneRepository {
    /// Fails with `MissingReference` naming the first reference that does not
    /// resolve.
    fn create_crime_scene(&self, scene: &NewCrimeScene) -> RepoResult<CrimeSceneId>;
    fn get_crime_scene(&self, id: CrimeSceneId) -> RepoResult<Option<CrimeScene>>;
    fn list_crime_scenes(&self) -> RepoResult<Vec<CrimeScene>>;
    fn get_crime_scene_detail(&self, id: CrimeSceneId) -> RepoResult<Option<CrimeSceneDetail>>;
    fn list_crime_scene_details(&self) -> RepoResult<Vec<CrimeSceneDetail>>;
    fn delete_crime_scene(&self, id: CrimeSceneId) -> RepoResult<bool>;
}

/// SQLite-backed crime scene repository.
pub struct SqliteCrimeSceneRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCrimeSceneRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn detail_sql(filter: &str) -> String {
        format!(
            "SELECT {}, {}, {}
             FROM crime_scenes s
             INNER JOIN police_officers o ON o.id = s.investigating_officer_id
             INNER JOIN criminal_records r ON r.id = s.criminal_record_id
             {filter}
             ORDER BY s.id ASC;",
            column_list(Some("s"), CRIME_SCENE_COLUMNS),
            column_list(Some("o"), POLICE_OFFICER_COLUMNS),
            column_list(Some("r"), CRIMINAL_RECORD_COLUMNS),
        )
    }
}

impl CrimeSceneRepository for SqliteCrimeSceneRepository<'_> {
    fn create_crime_scene(&self, scene: &NewCrimeScene) -> RepoResult<CrimeSceneId> {
        scene.validate()?;

        let result = with_write_tx(self.conn, |conn| {
            ensure_reference(
                conn,
                EntityKind::PoliceOfficer,
                "investigating_officer_id",
                scene.investigating_officer_id,
            )?;
            ensure_reference(
                conn,
                EntityKind::CriminalRecord,
                "criminal_record_id",
                scene.criminal_record_id,
            )?;

            conn.execute(
                "INSERT INTO crime_scenes (
                    location,
                    date,
                    description,
                    investigating_officer_id,
                    criminal_record_id
                ) VALUES (?1, ?2, ?3, ?4, ?5);",
                params![
                    scene.location.trim(),
                    scene.date,
                    scene.description.as_str(),
                    scene.investigating_officer_id,
                    scene.criminal_record_id,
                ],
            )?;
            Ok(conn.last_insert_rowid())
        });

        match result {
            Ok(id) => {
                info!(
                    "event=crime_scene_create module=repo status=ok id={id} officer_id={} criminal_record_id={}",
                    scene.investigating_officer_id, scene.criminal_record_id
                );
                Ok(id)
            }
            Err(err) => {
                warn!(
                    "event=crime_scene_create module=repo status=rejected officer_id={} criminal_record_id={} error={err}",
                    scene.investigating_officer_id, scene.criminal_record_id
                );
                Err(err)
            }
        }
    }

    fn get_crime_scene(&self, id: CrimeSceneId) -> RepoResult<Option<CrimeScene>> {
        let scene = self
            .conn
            .query_row(
                &format!(
                    "SELECT {} FROM crime_scenes WHERE id = ?1;",
                    column_list(None, CRIME_SCENE_COLUMNS)
                ),
                [id],
                |row| parse_crime_scene_row(row, 0),
            )
            .optional()?;
        Ok(scene)
    }

    fn list_crime_scenes(&self) -> RepoResult<Vec<CrimeScene>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {} FROM crime_scenes ORDER BY id ASC;",
            column_list(None, CRIME_SCENE_COLUMNS)
        ))?;
        let mut rows = stmt.query([])?;
        let mut scenes = Vec::new();
        while let Some(row) = rows.next()? {
            scenes.push(parse_crime_scene_row(row, 0)?);
        }
        Ok(scenes)
    }

    fn get_crime_scene_detail(&self, id: CrimeSceneId) -> RepoResult<Option<CrimeSceneDetail>> {
        let detail = self
            .conn
            .query_row(&Self::detail_sql("WHERE s.id = ?1"), [id], parse_detail_row)
            .optional()?;
        Ok(detail)
    }

    fn list_crime_scene_details(&self) -> RepoResult<Vec<CrimeSceneDetail>> {
        let mut stmt = self.conn.prepare(&Self::detail_sql(""))?;
        let mut rows = stmt.query([])?;
        let mut details = Vec::new();
        while let Some(row) = rows.next()? {
            details.push(parse_detail_row(row)?);
        }
        Ok(details)
    }

    fn delete_crime_scene(&self, id: CrimeSceneId) -> RepoResult<bool> {
        let deleted = delete_restricted(self.conn, EntityKind::CrimeScene, id, &[])?;
        if deleted {
            info!("event=crime_scene_delete module=repo status=ok id={id}");
        }
        Ok(deleted)
    }
}

fn parse_crime_scene_row(row: &Row<'_>, offset: usize) -> rusqlite::Result<CrimeScene> {
    Ok(CrimeScene {
        id: row.get(offset)?,
        location: row.get(offset + 1)?,
        date: row.get(offset + 2)?,
        description: row.get(offset + 3)?,
        investigating_officer_id: row.get(offset + 4)?,
        criminal_record_id: row.get(offset + 5)?,
    })
}

fn parse_detail_row(row: &Row<'_>) -> rusqlite::Result<CrimeSceneDetail> {
    let officer_offset = CRIME_SCENE_COLUMNS.len();
    let record_offset = officer_offset + POLICE_OFFICER_COLUMNS.len();
    Ok(CrimeSceneDetail {
        scene: parse_crime_scene_row(row, 0)?,
        investigating_officer: parse_police_officer_row(row, officer_offset)?,
        criminal_record: parse_criminal_record_row(row, record_offset)?,
    })
}
