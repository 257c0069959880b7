#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use proptest::prelude::*;
use scaffold_backend::item::FIRST_ITEM_ID;
use scaffold_backend::{Item, ItemCreate, ItemStore, StoreError};

#[derive(Debug, Clone)]
enum Op {
    Create(String),
    Update(u64, String),
    Delete(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => "[a-z]{1,8}".prop_map(Op::Create),
        2 => (0u64..12, "[a-z]{1,8}").prop_map(|(id, name)| Op::Update(id, name)),
        2 => (0u64..12).prop_map(Op::Delete),
    ]
}

fn fields(name: &str) -> ItemCreate {
    ItemCreate {
        name: name.to_string(),
        description: None,
        price: None,
    }
}

proptest! {
    /// The store behaves like an insertion-ordered list whose ids come from
    /// a counter that never goes back.
    #[test]
    fn store_matches_ordered_model(ops in prop::collection::vec(op_strategy(), 0..60)) {
        let mut store = ItemStore::new();
        let mut model: Vec<Item> = Vec::new();
        let mut last_id: Option<u64> = None;
        let mut next_id = FIRST_ITEM_ID;

        for op in ops {
            match op {
                Op::Create(name) => {
                    let item = store.create(fields(&name)).unwrap();
                    if let Some(last) = last_id {
                        prop_assert!(item.id > last);
                    }
                    prop_assert_eq!(item.id, next_id);
                    last_id = Some(item.id);
                    next_id += 1;
                    model.push(item);
                }
                Op::Update(id, name) => {
                    let result = store.update(id, fields(&name));
                    match model.iter_mut().find(|i| i.id == id) {
                        Some(slot) => {
                            *slot = Item::from_fields(id, fields(&name));
                            prop_assert_eq!(result.unwrap(), slot.clone());
                        }
                        None => prop_assert_eq!(result, Err(StoreError::NotFound(id))),
                    }
                }
                Op::Delete(id) => {
                    let result = store.delete(id);
                    match model.iter().position(|i| i.id == id) {
                        Some(pos) => {
                            let removed = model.remove(pos);
                            prop_assert_eq!(result.unwrap(), removed);
                            prop_assert_eq!(store.get(id), Err(StoreError::NotFound(id)));
                        }
                        None => prop_assert_eq!(result, Err(StoreError::NotFound(id))),
                    }
                }
            }

            prop_assert_eq!(store.list(), model.as_slice());
        }

        for item in &model {
            prop_assert_eq!(store.get(item.id).unwrap(), item);
        }
    }
}
