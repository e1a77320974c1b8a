use lendhub_database::{Database, DatabaseError, image, user};
use lendhub_image::ImageRead;

async fn mem_db() -> Database {
    Database::builder()
        .url("sqlite::memory:")
        .init()
        .await
        .expect("in-memory database")
}

#[tokio::test]
async fn read_model_projects_the_stored_record() {
    let db = mem_db().await;

    let mut session = db.begin().await.expect("session");
    let owner = user::create_user(&mut session, "Ada", "ada@example.com")
        .await
        .expect("user");
    let stored = image::create_image(&mut session, "abc123", owner.id).await.expect("image");

    let row = image::get_image(&mut session, "abc123").await.expect("get");
    let read = ImageRead::from(row);

    assert_eq!(read.id, stored.id);
    assert_eq!(read.name, "abc123");
    assert_eq!(read.owner_id, owner.id);
    assert_eq!(read.created_at, stored.created_at);
}

#[tokio::test]
async fn missing_record_is_reported_by_name() {
    let db = mem_db().await;

    let mut session = db.begin().await.expect("session");
    let err = image::get_image(&mut session, "missing").await.expect_err("absent");

    assert!(matches!(err, DatabaseError::NotFound { .. }));
}
