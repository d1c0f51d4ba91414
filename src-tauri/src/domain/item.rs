//! Item Entity
//!
//! A single shopping-list entry.

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// The two detail fields that become editable once an item is purchased
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailField {
    Price,
    Quantity,
}

impl DetailField {
    pub fn as_str(&self) -> &'static str {
        match self {
            DetailField::Price => "price",
            DetailField::Quantity => "quantity",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "price" => Some(DetailField::Price),
            "quantity" => Some(DetailField::Quantity),
            _ => None,
        }
    }
}

/// A shopping-list item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier, assigned by the store on creation
    pub id: String,
    /// Item name
    pub name: String,
    /// Category id; dangling references are tolerated and rendered blank
    pub category: String,
    /// Purchase status; gates price/quantity editing
    pub completed: bool,
    /// Unit price, set once the item is purchased
    pub price: Option<f64>,
    /// Quantity, set once the item is purchased
    pub quantity: Option<f64>,
    /// Store-assigned creation timestamp (unix millis)
    pub created_at: Option<i64>,
}

impl Item {
    /// Create a new pending item with no details
    pub fn new(id: String, name: String, category: String) -> Self {
        Self {
            id,
            name,
            category,
            completed: false,
            price: None,
            quantity: None,
            created_at: None,
        }
    }
}

impl Entity for Item {
    type Id = String;

    fn id(&self) -> Self::Id {
        self.id.clone()
    }
}
