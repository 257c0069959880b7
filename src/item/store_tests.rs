use super::*;

fn fields(name: &str) -> ItemCreate {
    ItemCreate {
        name: name.to_string(),
        description: None,
        price: None,
    }
}

#[test]
fn test_new_store_is_empty() {
    let store = ItemStore::new();
    assert!(store.is_empty());
    assert_eq!(store.len(), 0);
    assert!(store.list().is_empty());
}

#[test]
fn test_create_assigns_sequential_ids_from_one() {
    let mut store = ItemStore::new();
    let a = store.create(fields("A")).unwrap();
    let b = store.create(fields("B")).unwrap();
    assert_eq!(a.id, FIRST_ITEM_ID);
    assert_eq!(b.id, 2);
    assert_eq!(store.len(), 2);
}

#[test]
fn test_create_then_get_roundtrip() {
    let mut store = ItemStore::new();
    let input = ItemCreate {
        name: "Widget".to_string(),
        description: Some("A small widget".to_string()),
        price: Some(9.5),
    };
    let created = store.create(input.clone()).unwrap();
    let fetched = store.get(created.id).unwrap();
    assert_eq!(fetched, &Item::from_fields(created.id, input.clone()));
    assert_eq!(fetched.fields(), input);
}

#[test]
fn test_get_missing_is_not_found() {
    let store = ItemStore::new();
    assert_eq!(store.get(1), Err(StoreError::NotFound(1)));
}

#[test]
fn test_delete_then_list_and_get() {
    let mut store = ItemStore::new();
    store.create(fields("A")).unwrap();
    store.create(fields("B")).unwrap();

    let removed = store.delete(1).unwrap();
    assert_eq!(removed.name, "A");

    assert_eq!(store.list(), &[Item::from_fields(2, fields("B"))]);
    assert_eq!(store.get(1), Err(StoreError::NotFound(1)));
}

#[test]
fn test_deleted_id_is_never_reused() {
    let mut store = ItemStore::new();
    store.create(fields("A")).unwrap();
    store.create(fields("B")).unwrap();
    store.delete(2).unwrap();
    store.delete(1).unwrap();

    let c = store.create(fields("C")).unwrap();
    assert_eq!(c.id, 3);
}

#[test]
fn test_update_missing_is_not_found() {
    let mut store = ItemStore::new();
    assert_eq!(store.update(99, fields("X")), Err(StoreError::NotFound(99)));
    assert!(store.is_empty());
}

#[test]
fn test_update_replaces_fields_and_keeps_position() {
    let mut store = ItemStore::new();
    store.create(fields("A")).unwrap();
    store
        .create(ItemCreate {
            name: "B".to_string(),
            description: Some("old".to_string()),
            price: Some(1.0),
        })
        .unwrap();
    store.create(fields("C")).unwrap();

    let updated = store.update(2, fields("B2")).unwrap();
    assert_eq!(updated.id, 2);
    assert_eq!(updated.description, None);
    assert_eq!(updated.price, None);

    let names: Vec<&str> = store.list().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["A", "B2", "C"]);
    assert_eq!(store.get(2).unwrap(), &updated);
}

#[test]
fn test_delete_missing_is_not_found() {
    let mut store = ItemStore::new();
    store.create(fields("A")).unwrap();
    assert_eq!(store.delete(7), Err(StoreError::NotFound(7)));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_counter_exhaustion_does_not_wrap() {
    let mut store = ItemStore {
        items: Vec::new(),
        next_id: u64::MAX,
    };
    assert_eq!(store.create(fields("A")), Err(StoreError::IdExhausted));
    assert!(store.is_empty());
    assert_eq!(store.next_id, u64::MAX);
}

#[test]
fn test_store_error_messages() {
    assert_eq!(StoreError::NotFound(4).to_string(), "Item not found: 4");
    assert_eq!(
        StoreError::IdExhausted.to_string(),
        "Item id counter exhausted"
    );
}
