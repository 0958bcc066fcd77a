use chrono::NaiveDate;
use crimedb_core::db::open_db_in_memory;
use crimedb_core::{
    CaseError, CaseService, ConstraintViolation, CrimeSceneId, CriminalId, CriminalRecordId,
    EntityKind, NewCrimeScene, NewCriminal, NewCriminalRecord, NewPoliceOfficer, PoliceOfficerId,
};
use rusqlite::Connection;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn add_john(service: &CaseService<'_>) -> CriminalId {
    service
        .add_criminal(&NewCriminal {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            date_of_birth: date(1990, 1, 1),
            gender: "Male".to_string(),
            nationality: "US".to_string(),
            address: "123 Main St, City".to_string(),
            phone_number: "555-1234".to_string(),
            email: "john.doe@example.com".to_string(),
            wanted_level: 3,
        })
        .unwrap()
}

fn robbery(criminal_id: CriminalId) -> NewCriminalRecord {
    NewCriminalRecord {
        criminal_id,
        crime_type: "Robbery".to_string(),
        crime_date: date(2020, 3, 10),
        description: "Armed robbery at a convenience store".to_string(),
        sentence: "5 years imprisonment".to_string(),
    }
}

fn add_johnson(service: &CaseService<'_>) -> PoliceOfficerId {
    service
        .add_police_officer(&NewPoliceOfficer {
            first_name: "Officer".to_string(),
            last_name: "Johnson".to_string(),
            badge_number: "12345".to_string(),
            rank: "Detective".to_string(),
            station: "City Police Department".to_string(),
        })
        .unwrap()
}

fn main_street(officer_id: PoliceOfficerId, record_id: CriminalRecordId) -> NewCrimeScene {
    NewCrimeScene {
        location: "Main Street".to_string(),
        date: date(2020, 3, 10),
        description: "Crime scene related to the robbery".to_string(),
        investigating_officer_id: officer_id,
        criminal_record_id: record_id,
    }
}

fn row_count(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}

#[test]
fn record_for_missing_criminal_is_rejected_and_not_inserted() {
    let conn = open_db_in_memory().unwrap();
    let service = CaseService::new(&conn);

    let err = service.add_criminal_record(&robbery(7)).unwrap_err();
    assert!(matches!(
        err,
        CaseError::ConstraintViolation(ConstraintViolation::MissingReference {
            entity: EntityKind::Criminal,
            field: "criminal_id",
            id: 7,
        })
    ));
    assert_eq!(row_count(&conn, "criminal_records"), 0);
}

#[test]
fn record_detail_joins_owning_criminal() {
    let conn = open_db_in_memory().unwrap();
    let service = CaseService::new(&conn);

    let criminal_id = add_john(&service);
    assert_eq!(criminal_id, 1);
    let record_id = service.add_criminal_record(&robbery(criminal_id)).unwrap();
    assert_eq!(record_id, 1);

    let detail = service.criminal_record_detail(record_id).unwrap().unwrap();
    assert_eq!(detail.record.crime_type, "Robbery");
    assert_eq!(detail.record.criminal_id, criminal_id);
    assert_eq!(detail.criminal.first_name, "John");

    let listed = service.list_criminal_record_details().unwrap();
    assert_eq!(listed, vec![detail]);
    assert!(service.criminal_record_detail(99).unwrap().is_none());
}

#[test]
fn delete_criminal_with_records_is_blocked() {
    let conn = open_db_in_memory().unwrap();
    let service = CaseService::new(&conn);

    let criminal_id = add_john(&service);
    service.add_criminal_record(&robbery(criminal_id)).unwrap();

    let err = service.delete_criminal(criminal_id).unwrap_err();
    assert!(matches!(
        err,
        CaseError::ConstraintViolation(ConstraintViolation::HasDependents {
            entity: EntityKind::Criminal,
            dependent: EntityKind::CriminalRecord,
            count: 1,
            ..
        })
    ));
    assert_eq!(row_count(&conn, "criminals"), 1);
    assert_eq!(row_count(&conn, "criminal_records"), 1);
}

#[test]
fn delete_criminal_succeeds_once_records_are_gone() {
    let conn = open_db_in_memory().unwrap();
    let service = CaseService::new(&conn);

    let criminal_id = add_john(&service);
    let record_id = service.add_criminal_record(&robbery(criminal_id)).unwrap();

    assert!(service.delete_criminal_record(record_id).unwrap());
    assert!(service.delete_criminal(criminal_id).unwrap());
    assert_eq!(row_count(&conn, "criminals"), 0);
}

#[test]
fn crime_scene_requires_existing_officer() {
    let conn = open_db_in_memory().unwrap();
    let service = CaseService::new(&conn);

    let criminal_id = add_john(&service);
    let record_id = service.add_criminal_record(&robbery(criminal_id)).unwrap();

    let err = service
        .add_crime_scene(&main_street(5, record_id))
        .unwrap_err();
    assert!(matches!(
        err,
        CaseError::ConstraintViolation(ConstraintViolation::MissingReference {
            entity: EntityKind::PoliceOfficer,
            field: "investigating_officer_id",
            id: 5,
        })
    ));
    assert_eq!(row_count(&conn, "crime_scenes"), 0);
}

#[test]
fn crime_scene_requires_existing_record() {
    let conn = open_db_in_memory().unwrap();
    let service = CaseService::new(&conn);

    let officer_id = add_johnson(&service);

    let err = service
        .add_crime_scene(&main_street(officer_id, 3))
        .unwrap_err();
    assert!(matches!(
        err,
        CaseError::ConstraintViolation(ConstraintViolation::MissingReference {
            entity: EntityKind::CriminalRecord,
            field: "criminal_record_id",
            id: 3,
        })
    ));
    assert_eq!(row_count(&conn, "crime_scenes"), 0);
}

#[test]
fn crime_scene_with_both_references_is_listed_with_matching_fields() {
    let conn = open_db_in_memory().unwrap();
    let service = CaseService::new(&conn);

    let criminal_id = add_john(&service);
    let record_id = service.add_criminal_record(&robbery(criminal_id)).unwrap();
    let officer_id = add_johnson(&service);

    let scene_id: CrimeSceneId = service
        .add_crime_scene(&main_street(officer_id, record_id))
        .unwrap();

    let scenes = service.list_crime_scenes().unwrap();
    assert_eq!(scenes.len(), 1);
    assert_eq!(scenes[0].id, scene_id);
    assert_eq!(scenes[0].location, "Main Street");
    assert_eq!(scenes[0].date, date(2020, 3, 10));
    assert_eq!(scenes[0].investigating_officer_id, officer_id);
    assert_eq!(scenes[0].criminal_record_id, record_id);

    let detail = service.crime_scene_detail(scene_id).unwrap().unwrap();
    assert_eq!(detail.investigating_officer.last_name, "Johnson");
    assert_eq!(detail.criminal_record.crime_type, "Robbery");
    assert_eq!(service.list_crime_scene_details().unwrap(), vec![detail]);
}

#[test]
fn officer_and_record_with_scenes_cannot_be_deleted() {
    let conn = open_db_in_memory().unwrap();
    let service = CaseService::new(&conn);

    let criminal_id = add_john(&service);
    let record_id = service.add_criminal_record(&robbery(criminal_id)).unwrap();
    let officer_id = add_johnson(&service);
    let scene_id = service
        .add_crime_scene(&main_street(officer_id, record_id))
        .unwrap();

    let officer_err = service.delete_police_officer(officer_id).unwrap_err();
    assert!(matches!(
        officer_err,
        CaseError::ConstraintViolation(ConstraintViolation::HasDependents {
            entity: EntityKind::PoliceOfficer,
            dependent: EntityKind::CrimeScene,
            ..
        })
    ));
    let record_err = service.delete_criminal_record(record_id).unwrap_err();
    assert!(matches!(
        record_err,
        CaseError::ConstraintViolation(ConstraintViolation::HasDependents {
            entity: EntityKind::CriminalRecord,
            dependent: EntityKind::CrimeScene,
            ..
        })
    ));

    assert!(service.delete_crime_scene(scene_id).unwrap());
    assert!(service.delete_police_officer(officer_id).unwrap());
    assert!(service.delete_criminal_record(record_id).unwrap());
    assert!(!service.delete_crime_scene(scene_id).unwrap());
}

#[test]
fn storage_rejects_dangling_reference_written_around_the_repository() {
    let conn = open_db_in_memory().unwrap();

    let err = conn
        .execute(
            "INSERT INTO criminal_records (criminal_id, crime_type, crime_date, description, sentence)
             VALUES (404, 'Arson', '2021-01-01', '', '');",
            [],
        )
        .unwrap_err();
    let err = crimedb_core::RepoError::from(err);
    assert!(matches!(
        err,
        crimedb_core::RepoError::Constraint(ConstraintViolation::Storage)
    ));
}
