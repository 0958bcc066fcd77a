use chrono::NaiveDate;
use crimedb_core::db::open_db_in_memory;
use crimedb_core::{
    CaseError, CaseService, CriminalRepository, EntityKind, NewCriminal, NewPoliceOfficer,
    SqliteCriminalRepository, ValidationError,
};

fn john_doe() -> NewCriminal {
    NewCriminal {
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        gender: "Male".to_string(),
        nationality: "US".to_string(),
        address: "123 Main St, City".to_string(),
        phone_number: "555-1234".to_string(),
        email: "john.doe@example.com".to_string(),
        wanted_level: 3,
    }
}

#[test]
fn add_then_list_shows_new_row_with_fresh_id() {
    let conn = open_db_in_memory().unwrap();
    let service = CaseService::new(&conn);

    let first = service.add_criminal(&john_doe()).unwrap();
    let second = service.add_criminal(&john_doe()).unwrap();
    assert_eq!(first, 1);
    assert_ne!(first, second);

    let listed = service.list_criminals().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id, first);
    assert_eq!(listed[0].first_name, "John");
    assert_eq!(listed[0].date_of_birth, NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
    assert_eq!(listed[0].wanted_level, 3);
    assert_eq!(listed[1].id, second);
}

#[test]
fn get_criminal_roundtrips_every_field() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCriminalRepository::new(&conn);

    let id = repo.create_criminal(&john_doe()).unwrap();
    let loaded = repo.get_criminal(id).unwrap().unwrap();
    let input = john_doe();
    assert_eq!(loaded.first_name, input.first_name);
    assert_eq!(loaded.last_name, input.last_name);
    assert_eq!(loaded.gender, input.gender);
    assert_eq!(loaded.nationality, input.nationality);
    assert_eq!(loaded.address, input.address);
    assert_eq!(loaded.phone_number, input.phone_number);
    assert_eq!(loaded.email, input.email);
    assert_eq!(loaded.full_name(), "John Doe");

    assert!(repo.get_criminal(id + 1).unwrap().is_none());
}

#[test]
fn dates_are_stored_as_iso_text() {
    let conn = open_db_in_memory().unwrap();
    let id = CaseService::new(&conn).add_criminal(&john_doe()).unwrap();

    let stored: String = conn
        .query_row(
            "SELECT date_of_birth FROM criminals WHERE id = ?1;",
            [id],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(stored, "1990-01-01");
}

#[test]
fn duplicate_fields_are_allowed() {
    let conn = open_db_in_memory().unwrap();
    let service = CaseService::new(&conn);

    service.add_criminal(&john_doe()).unwrap();
    service.add_criminal(&john_doe()).unwrap();
    assert_eq!(service.list_criminals().unwrap().len(), 2);
}

#[test]
fn blank_name_is_rejected_before_storage() {
    let conn = open_db_in_memory().unwrap();
    let service = CaseService::new(&conn);

    let mut input = john_doe();
    input.last_name = "   ".to_string();
    let err = service.add_criminal(&input).unwrap_err();
    assert!(matches!(
        err,
        CaseError::Validation(ValidationError::MissingField {
            entity: EntityKind::Criminal,
            field: "last_name",
        })
    ));
    assert!(service.list_criminals().unwrap().is_empty());
}

#[test]
fn delete_missing_criminal_reports_not_found_and_keeps_rows() {
    let conn = open_db_in_memory().unwrap();
    let service = CaseService::new(&conn);
    service.add_criminal(&john_doe()).unwrap();

    assert!(!service.delete_criminal(42).unwrap());
    assert_eq!(service.list_criminals().unwrap().len(), 1);
}

#[test]
fn delete_criminal_without_records_removes_row() {
    let conn = open_db_in_memory().unwrap();
    let service = CaseService::new(&conn);
    let id = service.add_criminal(&john_doe()).unwrap();

    assert!(service.delete_criminal(id).unwrap());
    assert!(service.list_criminals().unwrap().is_empty());
    assert!(!service.delete_criminal(id).unwrap());
}

#[test]
fn ids_are_not_reused_after_delete() {
    let conn = open_db_in_memory().unwrap();
    let service = CaseService::new(&conn);

    let first = service.add_criminal(&john_doe()).unwrap();
    assert!(service.delete_criminal(first).unwrap());
    let second = service.add_criminal(&john_doe()).unwrap();
    assert!(second > first);
}

#[test]
fn list_is_idempotent_without_mutation() {
    let conn = open_db_in_memory().unwrap();
    let service = CaseService::new(&conn);
    service.add_criminal(&john_doe()).unwrap();
    service
        .add_police_officer(&NewPoliceOfficer {
            first_name: "Officer".to_string(),
            last_name: "Johnson".to_string(),
            badge_number: "12345".to_string(),
            rank: "Detective".to_string(),
            station: "City Police Department".to_string(),
        })
        .unwrap();

    assert_eq!(
        service.list_criminals().unwrap(),
        service.list_criminals().unwrap()
    );
    assert_eq!(
        service.list_police_officers().unwrap(),
        service.list_police_officers().unwrap()
    );
}

#[test]
fn officer_requires_badge_number() {
    let conn = open_db_in_memory().unwrap();
    let service = CaseService::new(&conn);

    let err = service
        .add_police_officer(&NewPoliceOfficer {
            first_name: "Officer".to_string(),
            last_name: "Johnson".to_string(),
            badge_number: String::new(),
            rank: "Detective".to_string(),
            station: "City Police Department".to_string(),
        })
        .unwrap_err();
    assert!(matches!(
        err,
        CaseError::Validation(ValidationError::MissingField {
            field: "badge_number",
            ..
        })
    ));
}

#[test]
fn repository_delete_reports_absent_rows_as_false() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCriminalRepository::new(&conn);
    let id = repo.create_criminal(&john_doe()).unwrap();

    assert!(!repo.delete_criminal(id + 1).unwrap());
    assert!(repo.delete_criminal(id).unwrap());
    assert!(!repo.delete_criminal(id).unwrap());
    assert!(repo.get_criminal(id).unwrap().is_none());
}
