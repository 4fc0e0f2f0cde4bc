use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::item::Item;
use super::money::Money;
use crate::errors::{MgwError, Result};

/// Lifecycle status of a placed order
///
/// The only transition is `Completed` → `Refunded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Completed,
    Refunded,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Completed => f.write_str("COMPLETED"),
            OrderStatus::Refunded => f.write_str("REFUNDED"),
        }
    }
}

/// One line of an order: a copy of the item as priced at order time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEntry {
    #[serde(flatten)]
    pub item: Item,
    pub quantity: u32,
}

impl OrderEntry {
    pub fn new(item: Item, quantity: u32) -> Self {
        Self { item, quantity }
    }

    pub fn line_total(&self) -> Money {
        self.item.price.times(self.quantity)
    }
}

/// A placed order
///
/// Entries are fixed at creation; only the status can change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredOrder")]
pub struct Order {
    id: String,
    created_at: DateTime<Utc>,
    entries: Vec<OrderEntry>,
    status: OrderStatus,
}

impl Order {
    /// Create a completed order with a fresh UUID v7 id
    ///
    /// # Errors
    /// * `EmptyOrder` - if `entries` is empty
    /// * `NonPositiveQuantity` - if any entry has quantity 0
    pub fn new(entries: Vec<OrderEntry>) -> Result<Self> {
        check_entries(&entries)?;

        Ok(Self {
            id: Uuid::now_v7().to_string(),
            created_at: Utc::now(),
            entries,
            status: OrderStatus::Completed,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn entries(&self) -> &[OrderEntry] {
        &self.entries
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Sum of price × quantity over all entries
    pub fn subtotal(&self) -> Money {
        self.entries.iter().map(OrderEntry::line_total).sum()
    }

    /// Flip the status to `Refunded`
    ///
    /// # Errors
    /// * `AlreadyRefunded` - if the order was refunded before
    pub fn mark_refunded(&mut self) -> Result<()> {
        if self.status == OrderStatus::Refunded {
            return Err(MgwError::AlreadyRefunded {
                order_id: self.id.clone(),
            });
        }
        self.status = OrderStatus::Refunded;
        Ok(())
    }
}

fn check_entries(entries: &[OrderEntry]) -> Result<()> {
    if entries.is_empty() {
        return Err(MgwError::EmptyOrder);
    }
    if entries.iter().any(|e| e.quantity == 0) {
        return Err(MgwError::NonPositiveQuantity { quantity: 0 });
    }
    Ok(())
}

/// An order as read from a snapshot, before its entries are checked
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredOrder {
    id: String,
    created_at: DateTime<Utc>,
    entries: Vec<OrderEntry>,
    status: OrderStatus,
}

impl TryFrom<StoredOrder> for Order {
    type Error = MgwError;

    fn try_from(stored: StoredOrder) -> Result<Self> {
        check_entries(&stored.entries)?;
        Ok(Self {
            id: stored.id,
            created_at: stored.created_at,
            entries: stored.entries,
            status: stored.status,
        })
    }
}
