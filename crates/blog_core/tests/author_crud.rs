use blog_core::db::open_db_in_memory;
use blog_core::{
    AuthorPatch, AuthorRepository, AuthorService, NewAuthor, RepoError, SqliteAuthorRepository,
    ValidationError,
};
use rusqlite::Connection;
use std::collections::BTreeSet;

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let service = AuthorService::new(SqliteAuthorRepository::try_new(&conn).unwrap());

    let id = service.create_author("Ada Lovelace", "5551234567").unwrap();
    let author = service.get_author(id).unwrap().unwrap();

    assert_eq!(author.id, id);
    assert_eq!(author.name, "Ada Lovelace");
    assert_eq!(author.phone_number, "5551234567");
    assert!(author.created_at > 0);
    assert_eq!(author.updated_at, None);
}

#[test]
fn duplicate_name_is_rejected_and_nothing_is_stored() {
    let conn = open_db_in_memory().unwrap();
    let service = AuthorService::new(SqliteAuthorRepository::try_new(&conn).unwrap());
    service.create_author("Ada Lovelace", "5551234567").unwrap();

    let err = service
        .create_author("Ada Lovelace", "5559999999")
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::DuplicateName)
    ));
    assert_eq!(service.list_authors().unwrap().len(), 1);
}

#[test]
fn invalid_phone_blocks_create() {
    let conn = open_db_in_memory().unwrap();
    let service = AuthorService::new(SqliteAuthorRepository::try_new(&conn).unwrap());

    let err = service.create_author("Alan Turing", "555-1234").unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::PhoneNumberLength)
    ));
    assert!(service.list_authors().unwrap().is_empty());
}

#[test]
fn list_author_names_reflects_current_rows() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAuthorRepository::try_new(&conn).unwrap();
    let service = AuthorService::new(SqliteAuthorRepository::try_new(&conn).unwrap());

    let first = service.create_author("Ada Lovelace", "5551234567").unwrap();
    service.create_author("Grace Hopper", "5557654321").unwrap();
    service.delete_author(first).unwrap();

    let expected: BTreeSet<String> = ["Grace Hopper".to_string()].into_iter().collect();
    assert_eq!(repo.list_author_names().unwrap(), expected);
}

#[test]
fn update_stamps_updated_at_and_applies_fields() {
    let conn = open_db_in_memory().unwrap();
    let service = AuthorService::new(SqliteAuthorRepository::try_new(&conn).unwrap());
    let id = service.create_author("Ada Lovelace", "5551234567").unwrap();

    service
        .update_author(
            id,
            AuthorPatch {
                phone_number: Some("5550000000".to_string()),
                ..AuthorPatch::default()
            },
        )
        .unwrap();

    let author = service.get_author(id).unwrap().unwrap();
    assert_eq!(author.name, "Ada Lovelace");
    assert_eq!(author.phone_number, "5550000000");
    assert!(author.updated_at.is_some());
}

#[test]
fn resubmitting_own_name_is_accepted() {
    let conn = open_db_in_memory().unwrap();
    let service = AuthorService::new(SqliteAuthorRepository::try_new(&conn).unwrap());
    let id = service.create_author("Ada Lovelace", "5551234567").unwrap();

    service
        .update_author(
            id,
            AuthorPatch {
                name: Some("Ada Lovelace".to_string()),
                ..AuthorPatch::default()
            },
        )
        .unwrap();
}

#[test]
fn rename_to_other_authors_name_leaves_row_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let service = AuthorService::new(SqliteAuthorRepository::try_new(&conn).unwrap());
    service.create_author("Ada Lovelace", "5551234567").unwrap();
    let id = service.create_author("Grace Hopper", "5557654321").unwrap();

    let err = service
        .update_author(
            id,
            AuthorPatch {
                name: Some("Ada Lovelace".to_string()),
                phone_number: Some("5550000000".to_string()),
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::DuplicateName)
    ));

    let author = service.get_author(id).unwrap().unwrap();
    assert_eq!(author.name, "Grace Hopper");
    assert_eq!(author.phone_number, "5557654321");
    assert_eq!(author.updated_at, None);
}

#[test]
fn update_and_delete_missing_author_return_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = AuthorService::new(SqliteAuthorRepository::try_new(&conn).unwrap());

    let err = service
        .update_author(42, AuthorPatch::default())
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::NotFound {
            entity: "author",
            id: 42
        }
    ));

    let err = service.delete_author(42).unwrap_err();
    assert!(matches!(err, RepoError::NotFound { id: 42, .. }));
    assert!(service.get_author(42).unwrap().is_none());
}

#[test]
fn storage_unique_constraint_catches_stale_name_check() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteAuthorRepository::try_new(&conn).unwrap();

    // Both writers validated against the same empty snapshot.
    let snapshot = BTreeSet::new();
    let first = NewAuthor::validate("Ada Lovelace", "5551234567", &snapshot).unwrap();
    let second = NewAuthor::validate("Ada Lovelace", "5557654321", &snapshot).unwrap();

    repo.create_author(&first).unwrap();
    let err = repo.create_author(&second).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
}

#[test]
fn repository_rejects_connection_without_schema() {
    let conn = Connection::open_in_memory().unwrap();
    assert!(matches!(
        SqliteAuthorRepository::try_new(&conn),
        Err(RepoError::MissingRequiredTable("authors"))
    ));
}
