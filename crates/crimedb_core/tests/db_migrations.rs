use crimedb_core::db::migrations::latest_version;
use crimedb_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    for table in [
        "criminals",
        "criminal_records",
        "police_officers",
        "crime_scenes",
    ] {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn open_db_enables_foreign_keys() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("criminals.db");

    let conn_first = open_db(&path).unwrap();
    conn_first
        .execute(
            "INSERT INTO police_officers (first_name, last_name, badge_number, rank, station)
             VALUES ('Ada', 'Reyes', '77', 'Inspector', 'North');",
            [],
        )
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let count: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM police_officers;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn opening_a_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(open_db(dir.path()), Err(DbError::Sqlite(_))));
}

#[test]
fn writer_blocked_past_busy_timeout_reports_contention() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("locked.db");

    let holder = open_db(&path).unwrap();
    holder.execute_batch("BEGIN EXCLUSIVE;").unwrap();

    let waiter = Connection::open(&path).unwrap();
    waiter
        .busy_timeout(std::time::Duration::from_millis(50))
        .unwrap();
    let err = waiter
        .execute_batch("BEGIN IMMEDIATE;")
        .map_err(DbError::from)
        .unwrap_err();
    assert!(err.is_contention());

    holder.execute_batch("ROLLBACK;").unwrap();
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
