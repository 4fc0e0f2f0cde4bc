use serde::{Deserialize, Serialize};

use super::money::Money;
use crate::errors::MgwError;
use crate::rules::validation::check_name;

/// A menu item
///
/// Items carry no identity of their own; they are addressed by their
/// position on the menu. Deserializing applies the same name rules as
/// `additem`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "StoredItem")]
pub struct Item {
    /// Display name, 1 to 25 characters
    pub name: String,

    /// Unit price
    pub price: Money,
}

impl Item {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// An item as read from a snapshot, before its name is checked
#[derive(Deserialize)]
struct StoredItem {
    name: String,
    price: Money,
}

impl TryFrom<StoredItem> for Item {
    type Error = MgwError;

    fn try_from(stored: StoredItem) -> Result<Self, Self::Error> {
        if stored.name.trim() != stored.name {
            return Err(MgwError::Serialization {
                message: format!("item name {:?} has surrounding whitespace", stored.name),
            });
        }
        Ok(Item::new(check_name(&stored.name)?, stored.price))
    }
}
