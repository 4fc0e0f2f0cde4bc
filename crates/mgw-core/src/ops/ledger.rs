use crate::errors::{MgwError, Result};
use crate::model::Order;

/// How the user points at an order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderRef {
    /// 1-based position as shown by `listorder`
    Position(i64),
    /// Order id
    Id(String),
}

impl std::fmt::Display for OrderRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderRef::Position(position) => write!(f, "#{}", position),
            OrderRef::Id(id) => f.write_str(id),
        }
    }
}

/// Placed orders, in the order they were placed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderLedger {
    orders: Vec<Order>,
}

impl OrderLedger {
    pub fn new() -> Self {
        Self { orders: Vec::new() }
    }

    pub fn from_orders(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn append(&mut self, order: Order) {
        self.orders.push(order);
    }

    pub fn list(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    fn position_of(&self, reference: &OrderRef) -> Option<usize> {
        match reference {
            OrderRef::Position(position) => usize::try_from(*position)
                .ok()
                .filter(|p| (1..=self.orders.len()).contains(p))
                .map(|p| p - 1),
            OrderRef::Id(id) => self.orders.iter().position(|o| o.id() == id),
        }
    }

    /// Look up an order without changing it
    pub fn find(&self, reference: &OrderRef) -> Option<&Order> {
        self.position_of(reference).map(|p| &self.orders[p])
    }

    /// Mark an order as refunded
    ///
    /// # Errors
    /// * `OrderNotFound` - if no order matches `reference`
    /// * `AlreadyRefunded` - if the order was refunded before; status is unchanged
    pub fn refund(&mut self, reference: &OrderRef) -> Result<&Order> {
        let position = self
            .position_of(reference)
            .ok_or_else(|| MgwError::OrderNotFound {
                reference: reference.to_string(),
            })?;
        let order = &mut self.orders[position];
        order.mark_refunded()?;
        Ok(order)
    }
}
