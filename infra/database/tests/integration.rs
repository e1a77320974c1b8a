use lendhub_database::{Database, DatabaseError, Session, item, region, user};
use lendhub_domain::page::PageOptions;

async fn mem_db() -> Database {
    Database::builder().url("sqlite::memory:").init().await.expect("in-memory database")
}

async fn seed_user(session: &mut Session, email: &str) -> i64 {
    user::create_user(session, "Ada", email).await.expect("create user").id
}

#[tokio::test]
async fn user_roundtrip_and_delete() {
    let db = mem_db().await;
    let mut session = db.begin().await.unwrap();

    let created = user::create_user(&mut session, "Ada", "ada@example.org").await.unwrap();
    let fetched = user::get_user(&mut session, created.id).await.unwrap();
    assert_eq!(created, fetched);

    user::delete_user(&mut session, &created).await.unwrap();

    // Gone within the same uncommitted transaction.
    let err = user::get_user(&mut session, created.id).await.expect_err("deleted");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn duplicate_email_is_rejected() {
    let db = mem_db().await;
    let mut session = db.begin().await.unwrap();

    seed_user(&mut session, "ada@example.org").await;
    let err = user::create_user(&mut session, "Eve", "ada@example.org")
        .await
        .expect_err("duplicate email");
    assert!(err.is_already_exists());
}

#[tokio::test]
async fn item_delete_is_flushed_but_rollback_undoes_it() {
    let db = mem_db().await;

    let mut session = db.begin().await.unwrap();
    let owner = seed_user(&mut session, "owner@example.org").await;
    let item = item::create_item(&mut session, "Ladder", "3m aluminium", owner).await.unwrap();
    session.commit().await.unwrap();

    // Delete inside a transaction that is rolled back.
    let mut session = db.begin().await.unwrap();
    let loaded = item::get_item(&mut session, item.id).await.unwrap();
    item::delete_item(&mut session, &loaded).await.unwrap();
    let err = item::get_item(&mut session, item.id).await.expect_err("flushed delete");
    assert!(err.is_not_found());
    session.rollback().await.unwrap();

    // The rollback restored the row.
    let mut session = db.begin().await.unwrap();
    assert_eq!(item::get_item(&mut session, item.id).await.unwrap().id, item.id);
}

#[tokio::test]
async fn deleting_a_detached_item_is_a_state_error() {
    let db = mem_db().await;
    let mut session = db.begin().await.unwrap();

    let owner = seed_user(&mut session, "owner@example.org").await;
    let item = item::create_item(&mut session, "Drill", "", owner).await.unwrap();

    item::delete_item(&mut session, &item).await.unwrap();
    let err = item::delete_item(&mut session, &item).await.expect_err("already deleted");
    assert!(matches!(err, DatabaseError::NotFound { entity: "item", .. }));
}

#[tokio::test]
async fn like_and_save_rows_are_located_then_removed() {
    let db = mem_db().await;
    let mut session = db.begin().await.unwrap();

    let owner = seed_user(&mut session, "owner@example.org").await;
    let liker = seed_user(&mut session, "liker@example.org").await;
    let item = item::create_item(&mut session, "Tent", "", owner).await.unwrap();

    item::create_item_like(&mut session, liker, item.id).await.unwrap();
    item::create_item_save(&mut session, liker, item.id).await.unwrap();

    // Duplicate like is a conflict.
    let err = item::create_item_like(&mut session, liker, item.id).await.expect_err("dup");
    assert!(err.is_already_exists());

    item::delete_item_like(&mut session, liker, item.id).await.unwrap();
    item::delete_item_save(&mut session, liker, item.id).await.unwrap();

    // Removing an absent relationship row surfaces not-found unchanged.
    let err = item::delete_item_like(&mut session, liker, item.id).await.expect_err("absent");
    assert!(matches!(err, DatabaseError::NotFound { entity: "like", .. }));
    let err = item::delete_item_save(&mut session, liker, item.id).await.expect_err("absent");
    assert!(matches!(err, DatabaseError::NotFound { entity: "save", .. }));
}

#[tokio::test]
async fn list_items_honors_cursor_floor_and_limit() {
    let db = mem_db().await;
    let mut session = db.begin().await.unwrap();

    let owner = seed_user(&mut session, "owner@example.org").await;
    let mut ids = Vec::new();
    for n in 0..5 {
        let item =
            item::create_item(&mut session, &format!("item-{n}"), "", owner).await.unwrap();
        ids.push(item.id);
    }

    let all = item::list_items(&mut session, &PageOptions::default()).await.unwrap();
    assert_eq!(all.len(), 5);

    // Inclusive floor.
    let page = PageOptions { min_item_id: Some(ids[2]), ..PageOptions::default() };
    let tail = item::list_items(&mut session, &page).await.unwrap();
    assert_eq!(tail.iter().map(|i| i.id).collect::<Vec<_>>(), &ids[2..]);

    let page = PageOptions { limit: Some(2), min_item_id: Some(ids[1]), ..PageOptions::default() };
    let slice = item::list_items(&mut session, &page).await.unwrap();
    assert_eq!(slice.iter().map(|i| i.id).collect::<Vec<_>>(), &ids[1..3]);

    // Explicit zero limit is an empty page, not "unbounded".
    let page = PageOptions::with_limit(0);
    assert!(item::list_items(&mut session, &page).await.unwrap().is_empty());
}

#[tokio::test]
async fn count_items_ignores_the_limit_but_not_the_floor() {
    let db = mem_db().await;
    let mut session = db.begin().await.unwrap();

    let owner = seed_user(&mut session, "owner@example.org").await;
    let mut ids = Vec::new();
    for n in 0..5 {
        let item =
            item::create_item(&mut session, &format!("item-{n}"), "", owner).await.unwrap();
        ids.push(item.id);
    }

    assert_eq!(item::count_items(&mut session, None).await.unwrap(), 5);
    assert_eq!(item::count_items(&mut session, Some(ids[3])).await.unwrap(), 2);
    assert_eq!(item::count_items(&mut session, Some(ids[4] + 1)).await.unwrap(), 0);
}

#[tokio::test]
async fn regions_list_matches_visible_rows() {
    let db = mem_db().await;
    let mut session = db.begin().await.unwrap();

    assert!(region::list_regions(&mut session).await.unwrap().is_empty());

    let north = region::create_region(&mut session, "North").await.unwrap();
    let south = region::create_region(&mut session, "South").await.unwrap();

    let listed = region::list_regions(&mut session).await.unwrap();
    assert_eq!(listed.len(), 2);
    let ids: Vec<i64> = listed.iter().map(|r| r.id).collect();
    assert!(ids.contains(&north.id) && ids.contains(&south.id));

    let renamed = region::update_region(&mut session, north.id, "North-East").await.unwrap();
    assert_eq!(renamed.name, "North-East");

    region::delete_region(&mut session, &south).await.unwrap();
    assert_eq!(region::list_regions(&mut session).await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_a_user_cascades_to_relationship_rows() {
    let db = mem_db().await;
    let mut session = db.begin().await.unwrap();

    let owner = seed_user(&mut session, "owner@example.org").await;
    let liker_row = user::create_user(&mut session, "Eve", "eve@example.org").await.unwrap();
    let item = item::create_item(&mut session, "Bike", "", owner).await.unwrap();
    item::create_item_like(&mut session, liker_row.id, item.id).await.unwrap();

    user::delete_user(&mut session, &liker_row).await.unwrap();

    // FK cascade removed the like row as well.
    let err =
        item::delete_item_like(&mut session, liker_row.id, item.id).await.expect_err("cascaded");
    assert!(err.is_not_found());
}
