mod items;
mod status;

pub(super) use items::{create_item, delete_item, get_item, list_items, update_item};
pub use items::ITEM_DELETED_MESSAGE;
pub(super) use status::{health, not_found, root};
pub use status::{HealthResponse, MessageResponse};
