//! Catalog service tests against an in-memory sqlite database.

use sea_orm::{ConnectOptions, Database, DatabaseConnection, EntityTrait, PaginatorTrait};
use sea_orm_migration::MigratorTrait;

use scarlet_shop::catalog::{self, NewItem, SIZE_LABELS};
use scarlet_shop::entity::{item, item_size, size};
use scarlet_shop::error::AppError;
use scarlet_shop::migration::Migrator;

async fn test_db() -> DatabaseConnection {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    // One connection keeps every query on the same in-memory database
    opt.max_connections(1);

    let db = Database::connect(opt).await.expect("connect to sqlite");
    Migrator::fresh(&db).await.expect("run migrations");
    db
}

fn shoe_a() -> NewItem {
    NewItem {
        title: "Shoe A".to_string(),
        image: "a.png".to_string(),
        price: 100,
        text: "desc".to_string(),
        size_ids: vec![1, 2],
    }
}

#[tokio::test]
async fn seeding_is_idempotent() {
    let db = test_db().await;

    catalog::seed_sizes(&db).await.expect("first seed");
    catalog::seed_sizes(&db).await.expect("second seed");

    let sizes = catalog::list_sizes(&db).await.expect("list sizes");
    assert_eq!(sizes.len(), SIZE_LABELS.len());

    let labels: Vec<&str> = sizes.iter().map(|s| s.value.as_str()).collect();
    assert_eq!(labels, SIZE_LABELS);
}

#[tokio::test]
async fn create_then_list_then_delete() {
    let db = test_db().await;
    catalog::seed_sizes(&db).await.expect("seed");

    let stored = catalog::create_item(&db, shoe_a()).await.expect("create");

    let items = catalog::list_items(&db).await.expect("list");
    assert_eq!(items.len(), 1);

    let (listed, sizes) = &items[0];
    assert_eq!(listed.title, "Shoe A");
    assert_eq!(listed.image, "a.png");
    assert_eq!(listed.price, 100);
    assert_eq!(listed.text, "desc");

    let labels: Vec<&str> = sizes.iter().map(|s| s.value.as_str()).collect();
    assert_eq!(labels, ["36", "37"]);

    catalog::delete_item(&db, stored.id).await.expect("delete");
    assert!(catalog::list_items(&db).await.expect("list").is_empty());
}

#[tokio::test]
async fn unknown_size_ids_are_silently_dropped() {
    let db = test_db().await;
    catalog::seed_sizes(&db).await.expect("seed");

    let mut new_item = shoe_a();
    new_item.size_ids = vec![1, 999];

    catalog::create_item(&db, new_item).await.expect("create");

    let items = catalog::list_items(&db).await.expect("list");
    let (_, sizes) = &items[0];
    let labels: Vec<&str> = sizes.iter().map(|s| s.value.as_str()).collect();
    assert_eq!(labels, ["36"]);
}

#[tokio::test]
async fn item_may_have_no_sizes() {
    let db = test_db().await;
    catalog::seed_sizes(&db).await.expect("seed");

    let mut new_item = shoe_a();
    new_item.size_ids = Vec::new();

    catalog::create_item(&db, new_item).await.expect("create");

    let items = catalog::list_items(&db).await.expect("list");
    assert!(items[0].1.is_empty());
}

#[tokio::test]
async fn duplicate_titles_are_permitted() {
    let db = test_db().await;
    catalog::seed_sizes(&db).await.expect("seed");

    catalog::create_item(&db, shoe_a()).await.expect("first");
    catalog::create_item(&db, shoe_a()).await.expect("second");

    assert_eq!(catalog::list_items(&db).await.expect("list").len(), 2);
}

#[tokio::test]
async fn deleting_a_nonexistent_id_is_a_silent_no_op() {
    let db = test_db().await;
    catalog::seed_sizes(&db).await.expect("seed");
    catalog::create_item(&db, shoe_a()).await.expect("create");

    catalog::delete_item(&db, 999).await.expect("no-op delete");

    assert_eq!(
        item::Entity::find().count(&db).await.expect("count"),
        1,
        "item count must be unchanged"
    );
}

#[tokio::test]
async fn delete_removes_the_size_associations() {
    let db = test_db().await;
    catalog::seed_sizes(&db).await.expect("seed");
    let stored = catalog::create_item(&db, shoe_a()).await.expect("create");

    assert_eq!(item_size::Entity::find().count(&db).await.expect("count"), 2);

    catalog::delete_item(&db, stored.id).await.expect("delete");

    assert_eq!(item_size::Entity::find().count(&db).await.expect("count"), 0);
    // The sizes themselves stay
    assert_eq!(
        size::Entity::find().count(&db).await.expect("count"),
        SIZE_LABELS.len() as u64
    );
}

#[tokio::test]
async fn lookup_of_a_deleted_item_fails_loudly() {
    let db = test_db().await;
    catalog::seed_sizes(&db).await.expect("seed");
    let stored = catalog::create_item(&db, shoe_a()).await.expect("create");

    let (found, _) = catalog::find_item(&db, stored.id).await.expect("find");
    assert_eq!(found.id, stored.id);

    catalog::delete_item(&db, stored.id).await.expect("delete");

    let err = catalog::find_item(&db, stored.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound));
}

#[tokio::test]
async fn items_by_ids_skips_stale_ids() {
    let db = test_db().await;
    catalog::seed_sizes(&db).await.expect("seed");
    let stored = catalog::create_item(&db, shoe_a()).await.expect("create");

    let items = catalog::items_by_ids(&db, &[stored.id, 999])
        .await
        .expect("resolve");

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, stored.id);

    assert!(catalog::items_by_ids(&db, &[])
        .await
        .expect("empty resolve")
        .is_empty());
}
