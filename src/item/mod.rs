//! The item collection: record types and the in-memory store.

mod error;
mod model;
mod store;

pub use error::StoreError;
pub use model::{Item, ItemCreate};
pub use store::{ItemStore, FIRST_ITEM_ID};
