use blog_core::db::open_db_in_memory;
use blog_core::{
    Category, CreatePostRequest, PostPatch, PostService, RepoError, SqlitePostRepository,
    ValidationError,
};
use rusqlite::Connection;

fn request(title: &str) -> CreatePostRequest {
    CreatePostRequest {
        title: title.to_string(),
        content: "c".repeat(300),
        summary: "A short summary.".to_string(),
        category: "Fiction".to_string(),
    }
}

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let service = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());

    let id = service.create_post(request("Top 10 Secrets")).unwrap();
    let post = service.get_post(id).unwrap().unwrap();

    assert_eq!(post.id, id);
    assert_eq!(post.title, "Top 10 Secrets");
    assert_eq!(post.content.len(), 300);
    assert_eq!(post.summary, "A short summary.");
    assert_eq!(post.category, Category::Fiction);
    assert_eq!(post.updated_at, None);
}

#[test]
fn invalid_fields_block_create() {
    let conn = open_db_in_memory().unwrap();
    let service = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());

    let err = service.create_post(request("A Quiet Afternoon")).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::MissingClickbaitKeyword)
    ));

    let mut short = request("Guess What");
    short.content = "c".repeat(249);
    let err = service.create_post(short).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::ContentTooShort)
    ));

    assert!(service.list_posts().unwrap().is_empty());
}

#[test]
fn update_applies_fields_and_stamps_updated_at() {
    let conn = open_db_in_memory().unwrap();
    let service = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());
    let id = service.create_post(request("Top Picks")).unwrap();

    service
        .update_post(
            id,
            PostPatch {
                title: Some("The Secret Life".to_string()),
                category: Some("Non-Fiction".to_string()),
                ..PostPatch::default()
            },
        )
        .unwrap();

    let post = service.get_post(id).unwrap().unwrap();
    assert_eq!(post.title, "The Secret Life");
    assert_eq!(post.category, Category::NonFiction);
    assert_eq!(post.summary, "A short summary.");
    assert!(post.updated_at.is_some());
}

#[test]
fn rejected_update_leaves_every_field_unchanged() {
    let conn = open_db_in_memory().unwrap();
    let service = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());
    let id = service.create_post(request("Top Picks")).unwrap();
    let before = service.get_post(id).unwrap().unwrap();

    let err = service
        .update_post(
            id,
            PostPatch {
                title: Some("You Won't Believe It".to_string()),
                category: Some("Sci-Fi".to_string()),
                ..PostPatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::InvalidCategory)
    ));

    assert_eq!(service.get_post(id).unwrap().unwrap(), before);
}

#[test]
fn list_orders_by_id_and_delete_removes_row() {
    let conn = open_db_in_memory().unwrap();
    let service = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());
    let first = service.create_post(request("Top One")).unwrap();
    let second = service.create_post(request("Top Two")).unwrap();

    let ids: Vec<_> = service
        .list_posts()
        .unwrap()
        .into_iter()
        .map(|post| post.id)
        .collect();
    assert_eq!(ids, vec![first, second]);

    service.delete_post(first).unwrap();
    assert!(service.get_post(first).unwrap().is_none());
    assert!(matches!(
        service.delete_post(first).unwrap_err(),
        RepoError::NotFound { entity: "post", .. }
    ));
}

#[test]
fn update_missing_post_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());

    let err = service
        .update_post(
            7,
            PostPatch {
                summary: Some("new".to_string()),
                ..PostPatch::default()
            },
        )
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound { id: 7, .. }));
}

#[test]
fn read_rejects_unknown_stored_category() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE posts (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            content TEXT NOT NULL,
            summary TEXT NOT NULL,
            category TEXT NOT NULL,
            created_at INTEGER NOT NULL,
            updated_at INTEGER
        );
        INSERT INTO posts (id, title, content, summary, category, created_at)
        VALUES (1, 'Top', 'body', 'sum', 'Sci-Fi', 0);",
    )
    .unwrap();

    let service = PostService::new(SqlitePostRepository::try_new(&conn).unwrap());
    assert!(matches!(
        service.get_post(1).unwrap_err(),
        RepoError::InvalidData(_)
    ));
}
