use serde::{Deserialize, Serialize};

/// User-supplied fields of an item.
///
/// This is the body of both create and update requests; the id is always
/// assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCreate {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
}

/// A stored item: the user fields plus the id the store assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub description: Option<String>,
    pub price: Option<f64>,
}

impl Item {
    /// Attach an id to a set of user fields.
    #[must_use]
    pub fn from_fields(id: u64, fields: ItemCreate) -> Self {
        let ItemCreate {
            name,
            description,
            price,
        } = fields;
        Self {
            id,
            name,
            description,
            price,
        }
    }

    /// The user fields of this item, without its id.
    #[must_use]
    pub fn fields(&self) -> ItemCreate {
        ItemCreate {
            name: self.name.clone(),
            description: self.description.clone(),
            price: self.price,
        }
    }
}
