//! Store-level behavior: join order, duplicate stars, unknown restaurants,
//! delete and comment-update flows.

use starred_restaurants_api::{Restaurant, RestaurantCatalog, StarredStore, StoreError};

fn catalog() -> RestaurantCatalog {
    RestaurantCatalog::new(vec![
        Restaurant {
            id: "r-1".to_string(),
            name: "Pho Bar".to_string(),
        },
        Restaurant {
            id: "r-2".to_string(),
            name: "Joe's Pizza".to_string(),
        },
        Restaurant {
            id: "r-3".to_string(),
            name: "Levain Bakery".to_string(),
        },
    ])
}

#[test]
fn listing_preserves_insertion_order_and_names() {
    let catalog = catalog();
    let mut store = StarredStore::new();
    let first = store.create(&catalog, "r-2").unwrap();
    let second = store.create(&catalog, "r-1").unwrap();

    let joined = store.list_joined(&catalog).unwrap();
    assert_eq!(joined.len(), 2);
    assert_eq!(joined[0].id, first.id);
    assert_eq!(joined[0].name, "Joe's Pizza");
    assert_eq!(joined[1].id, second.id);
    assert_eq!(joined[1].name, "Pho Bar");
}

#[test]
fn starring_twice_is_rejected_and_leaves_the_store_unchanged() {
    let catalog = catalog();
    let mut store = StarredStore::new();
    store.create(&catalog, "r-1").unwrap();

    let err = store.create(&catalog, "r-1").unwrap_err();
    assert!(matches!(err, StoreError::AlreadyStarred { .. }));
    assert_eq!(store.len(), 1);
}

#[test]
fn starring_an_unknown_restaurant_is_rejected() {
    let catalog = catalog();
    let mut store = StarredStore::new();

    let err = store.create(&catalog, "no-such-restaurant").unwrap_err();
    assert!(matches!(err, StoreError::RestaurantNotFound { .. }));
    assert!(store.is_empty());
}

#[test]
fn fresh_records_start_with_an_empty_comment_and_unique_ids() {
    let catalog = catalog();
    let mut store = StarredStore::new();
    let a = store.create(&catalog, "r-1").unwrap();
    let b = store.create(&catalog, "r-2").unwrap();

    assert_eq!(a.comment, "");
    assert_eq!(b.comment, "");
    assert_ne!(a.id, b.id);
}

#[test]
fn deleted_records_are_gone() {
    let catalog = catalog();
    let mut store = StarredStore::new();
    let created = store.create(&catalog, "r-1").unwrap();

    store.delete_by_id(&created.id).unwrap();

    let err = store.get_joined_by_id(&catalog, &created.id).unwrap_err();
    assert!(matches!(err, StoreError::StarredNotFound { .. }));
    assert!(matches!(
        store.delete_by_id(&created.id),
        Err(StoreError::StarredNotFound { .. })
    ));
}

#[test]
fn updating_a_comment_changes_only_the_comment() {
    let catalog = catalog();
    let mut store = StarredStore::new();
    let created = store.create(&catalog, "r-3").unwrap();

    store
        .update_comment(&created.id, "Best cookies in town".to_string())
        .unwrap();

    let joined = store.get_joined_by_id(&catalog, &created.id).unwrap();
    assert_eq!(joined.id, created.id);
    assert_eq!(joined.comment, "Best cookies in town");
    assert_eq!(joined.name, "Levain Bakery");
}

#[test]
fn updating_a_missing_record_is_an_error() {
    let mut store = StarredStore::new();
    let err = store
        .update_comment("missing", "x".to_string())
        .unwrap_err();
    assert!(matches!(err, StoreError::StarredNotFound { .. }));
}

#[test]
fn join_fails_when_the_catalog_lost_a_restaurant() {
    let catalog = catalog();
    let mut store = StarredStore::new();
    store.create(&catalog, "r-1").unwrap();
    store.create(&catalog, "r-2").unwrap();

    // Same store, shrunk catalog: r-2 is gone.
    let shrunk = RestaurantCatalog::new(vec![Restaurant {
        id: "r-1".to_string(),
        name: "Pho Bar".to_string(),
    }]);

    let err = store.list_joined(&shrunk).unwrap_err();
    assert!(matches!(err, StoreError::CatalogInconsistent { .. }));
}

#[test]
fn seeded_store_joins_against_the_builtin_catalog() {
    let catalog = RestaurantCatalog::builtin();
    let store = StarredStore::seeded();

    let joined = store.list_joined(&catalog).unwrap();
    assert_eq!(joined.len(), 2);
    assert!(joined
        .iter()
        .any(|entry| entry.comment == "Best pho in NYC" && entry.name == "Pho Bar"));
}
