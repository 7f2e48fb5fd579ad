use birthday_core::db::open_db_in_memory;
use birthday_core::{PersonRepository, RepoError, SqlitePersonRepository};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn insert_and_list_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    let id = repo.insert("Alice", date(1990, 3, 10)).unwrap();

    let people = repo.list_all().unwrap();
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].id, id);
    assert_eq!(people[0].name, "Alice");
    assert_eq!(people[0].birth_date, date(1990, 3, 10));
}

#[test]
fn insert_assigns_fresh_increasing_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    let first = repo.insert("Alice", date(1990, 3, 10)).unwrap();
    let second = repo.insert("Bob", date(1985, 3, 15)).unwrap();

    assert!(second > first);

    let ids: Vec<_> = repo.list_all().unwrap().iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![first, second]);
}

#[test]
fn insert_trims_name_before_persisting() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    repo.insert("  Alice  ", date(1990, 3, 10)).unwrap();

    let people = repo.list_all().unwrap();
    assert_eq!(people[0].name, "Alice");
}

#[test]
fn insert_rejects_blank_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    let err = repo.insert("   ", date(1990, 3, 10)).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(repo.list_all().unwrap().is_empty());
}

#[test]
fn update_replaces_name_and_date() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    let id = repo.insert("Alice", date(1990, 3, 10)).unwrap();
    repo.update(id, "Alicia", date(1991, 4, 11)).unwrap();

    let people = repo.list_all().unwrap();
    assert_eq!(people[0].name, "Alicia");
    assert_eq!(people[0].birth_date, date(1991, 4, 11));
}

#[test]
fn update_missing_id_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    let err = repo.update(42, "Nobody", date(1990, 3, 10)).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(42)));
}

#[test]
fn update_rejects_blank_name_and_leaves_record_untouched() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    let id = repo.insert("Alice", date(1990, 3, 10)).unwrap();
    let err = repo.update(id, " ", date(1991, 4, 11)).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let people = repo.list_all().unwrap();
    assert_eq!(people[0].name, "Alice");
    assert_eq!(people[0].birth_date, date(1990, 3, 10));
}

#[test]
fn delete_removes_record() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    let id = repo.insert("Alice", date(1990, 3, 10)).unwrap();
    let keep = repo.insert("Bob", date(1985, 3, 15)).unwrap();

    repo.delete(id).unwrap();

    let people = repo.list_all().unwrap();
    assert_eq!(people.len(), 1);
    assert_eq!(people[0].id, keep);
}

#[test]
fn delete_missing_id_is_silent_noop() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqlitePersonRepository::new(&conn);

    repo.insert("Alice", date(1990, 3, 10)).unwrap();
    repo.delete(42).unwrap();

    assert_eq!(repo.list_all().unwrap().len(), 1);
}

#[test]
fn list_all_rejects_invalid_persisted_date() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO people (name, birth_date) VALUES ('Mallory', 'not-a-date');",
        [],
    )
    .unwrap();

    let repo = SqlitePersonRepository::new(&conn);
    let err = repo.list_all().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}
