use lendhub_database::{Database, DatabaseError};
use lendhub_region::service;
use lendhub_region::{RegionCreate, RegionError, RegionUpdate};

async fn mem_db() -> Database {
    Database::builder()
        .url("sqlite::memory:")
        .init()
        .await
        .expect("in-memory database")
}

#[tokio::test]
async fn empty_table_lists_as_an_empty_sequence() {
    let db = mem_db().await;

    let mut session = db.begin().await.expect("session");
    let regions = service::list_regions(&mut session).await.expect("list");

    assert!(regions.is_empty());
}

#[tokio::test]
async fn listing_returns_one_read_model_per_row() {
    let db = mem_db().await;

    let mut session = db.begin().await.expect("session");
    let mut ids = Vec::new();
    for name in ["North", "Center", "South"] {
        let created = service::create_region(&mut session, &RegionCreate { name: name.to_owned() })
            .await
            .expect("region");
        ids.push(created.id);
    }
    session.commit().await.expect("commit");

    let mut session = db.begin().await.expect("session");
    let regions = service::list_regions(&mut session).await.expect("list");

    assert_eq!(regions.len(), 3);
    assert_eq!(regions.iter().map(|r| r.id).collect::<Vec<_>>(), ids);
}

#[tokio::test]
async fn duplicate_region_name_is_rejected() {
    let db = mem_db().await;

    let mut session = db.begin().await.expect("session");
    let create = RegionCreate { name: "North".to_owned() };
    service::create_region(&mut session, &create).await.expect("region");

    let err = service::create_region(&mut session, &create).await.expect_err("duplicate");
    assert!(matches!(err, RegionError::Database(DatabaseError::AlreadyExists { .. })));
}

#[tokio::test]
async fn renamed_region_is_visible_on_read() {
    let db = mem_db().await;

    let mut session = db.begin().await.expect("session");
    let created = service::create_region(&mut session, &RegionCreate { name: "North".to_owned() })
        .await
        .expect("region");

    let updated =
        service::update_region(&mut session, created.id, &RegionUpdate { name: "Far North".to_owned() })
            .await
            .expect("update");
    assert_eq!(updated.name, "Far North");

    let found = service::get_region(&mut session, created.id).await.expect("get");
    assert_eq!(found, updated);
}

#[tokio::test]
async fn deleted_region_is_gone_within_the_same_transaction() {
    let db = mem_db().await;

    let mut session = db.begin().await.expect("session");
    let created = service::create_region(&mut session, &RegionCreate { name: "North".to_owned() })
        .await
        .expect("region");

    service::delete_region(&mut session, created.id).await.expect("delete");

    let err = service::get_region(&mut session, created.id).await.expect_err("gone");
    assert!(matches!(err, RegionError::Database(DatabaseError::NotFound { .. })));
}
