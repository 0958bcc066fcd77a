//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define per-entity data access contracts.
//! - Isolate SQLite query details from service orchestration.
//! - Enforce referential integrity before writes reach storage.
//!
//! # Invariants
//! - Write paths call the input's `validate()` before SQL mutations.
//! - Reference checks and the write they guard share one IMMEDIATE
//!   transaction.
//! - Deletes of rows that still have dependents are rejected, never cascaded.
//! - Listings are ordered by `id ASC`, which is insertion order.

use crate::db::DbError;
use crate::model::{ConstraintViolation, EntityKind, ValidationError};
use rusqlite::{Connection, Transaction, TransactionBehavior};
use thiserror::Error;

pub mod crime_scene_repo;
pub mod criminal_record_repo;
pub mod criminal_repo;
pub mod police_officer_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for case persistence and query operations.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),
    #[error(transparent)]
    Db(#[from] DbError),
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        let err = DbError::Sqlite(value);
        if err.is_foreign_key_violation() {
            return Self::Constraint(ConstraintViolation::Storage);
        }
        Self::Db(err)
    }
}

/// A table whose rows point at another entity through `column`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Dependent {
    pub entity: EntityKind,
    pub column: &'static str,
}

/// Runs `body` inside an IMMEDIATE transaction, or inside the caller's
/// transaction when one is already open on `conn`.
pub(crate) fn with_write_tx<T>(
    conn: &Connection,
    body: impl FnOnce(&Connection) -> RepoResult<T>,
) -> RepoResult<T> {
    if !conn.is_autocommit() {
        return body(conn);
    }

    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
    let value = body(&tx)?;
    tx.commit()?;
    Ok(value)
}

pub(crate) fn row_exists(conn: &Connection, entity: EntityKind, id: i64) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        &format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE id = ?1);",
            entity.table()
        ),
        [id],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

/// Fails with `MissingReference` unless `entity` row `id` exists.
pub(crate) fn ensure_reference(
    conn: &Connection,
    entity: EntityKind,
    field: &'static str,
    id: i64,
) -> RepoResult<()> {
    if row_exists(conn, entity, id)? {
        return Ok(());
    }
    Err(ConstraintViolation::MissingReference { entity, field, id }.into())
}

/// Deletes one row by id unless it is still referenced.
///
/// Returns `false` when no row has `id`.
pub(crate) fn delete_restricted(
    conn: &Connection,
    entity: EntityKind,
    id: i64,
    dependents: &[Dependent],
) -> RepoResult<bool> {
    with_write_tx(conn, |conn| {
        if !row_exists(conn, entity, id)? {
            return Ok(false);
        }

        for dependent in dependents {
            let count: i64 = conn.query_row(
                &format!(
                    "SELECT COUNT(*) FROM {} WHERE {} = ?1;",
                    dependent.entity.table(),
                    dependent.column
                ),
                [id],
                |row| row.get(0),
            )?;
            if count > 0 {
                return Err(ConstraintViolation::HasDependents {
                    entity,
                    id,
                    dependent: dependent.entity,
                    count,
                }
                .into());
            }
        }

        conn.execute(
            &format!("DELETE FROM {} WHERE id = ?1;", entity.table()),
            [id],
        )?;
        Ok(true)
    })
}

/// Renders `columns` as a select list, qualified by `alias` when given.
pub(crate) fn column_list(alias: Option<&str>, columns: &[&str]) -> String {
    columns
        .iter()
        .map(|column| match alias {
            Some(alias) => format!("{alias}.{column}"),
            None => (*column).to_string(),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::column_list;

    #[test]
    fn column_list_qualifies_with_alias() {
        assert_eq!(column_list(None, &["id", "name"]), "id, name");
        assert_eq!(column_list(Some("c"), &["id", "name"]), "c.id, c.name");
    }
}
