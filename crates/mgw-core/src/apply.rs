//! Functional-boundary apply function
//!
//! `apply()` is the single place where a validated [`Command`] changes the
//! menu or the ledger. It does no I/O; the session persists whatever the
//! returned [`Outcome`] says was touched.
//!
//! ## Atomicity Contract
//!
//! Every command either changes state completely and returns `Ok`, or
//! returns `Err` and leaves state exactly as it was.

use crate::commands::Command;
use crate::errors::Result;
use crate::model::{Item, Order};
use crate::ops::{Menu, OrderLedger};

/// Everything a session owns in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    pub menu: Menu,
    pub ledger: OrderLedger,
}

impl State {
    pub fn new(menu: Menu, ledger: OrderLedger) -> Self {
        Self { menu, ledger }
    }
}

/// Which persisted collection a command changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Touched {
    Nothing,
    Menu,
    Ledger,
}

/// What happened, for the session to report
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Help,
    ItemAdded { index: usize },
    ItemUpdated { index: usize },
    ItemDeleted { index: usize, item: Item },
    ItemsFound { query: String, indices: Vec<usize> },
    ItemsListed,
    OrderPlaced { order_id: String },
    OrdersListed,
    OrderRefunded { order_id: String },
    Exit,
}

impl Outcome {
    pub fn touched(&self) -> Touched {
        match self {
            Outcome::ItemAdded { .. } | Outcome::ItemUpdated { .. } | Outcome::ItemDeleted { .. } => {
                Touched::Menu
            }
            Outcome::OrderPlaced { .. } | Outcome::OrderRefunded { .. } => Touched::Ledger,
            _ => Touched::Nothing,
        }
    }
}

/// Apply a command to the in-memory state
///
/// # Errors
/// * `IndexOutOfRange` - update/delete past the end of the menu
/// * `EmptyOrder` / `NonPositiveQuantity` - order without usable entries
/// * `OrderNotFound` / `AlreadyRefunded` - refund of a missing or refunded order
pub fn apply(state: &mut State, cmd: Command) -> Result<Outcome> {
    match cmd {
        Command::Help => Ok(Outcome::Help),

        Command::AddItem { name, price } => {
            state.menu.append(Item::new(name, price));
            Ok(Outcome::ItemAdded {
                index: state.menu.len() - 1,
            })
        }

        Command::UpdateItem { index, name, price } => {
            state.menu.update_at(index, name, price)?;
            Ok(Outcome::ItemUpdated { index })
        }

        Command::DeleteItem { index } => {
            let item = state.menu.remove_at(index)?;
            Ok(Outcome::ItemDeleted { index, item })
        }

        Command::FindItem { query } => {
            let indices = state.menu.find_matching_indices(&query);
            Ok(Outcome::ItemsFound { query, indices })
        }

        Command::ListItems => Ok(Outcome::ItemsListed),

        Command::AddOrder { entries } => {
            let order = Order::new(entries)?;
            let order_id = order.id().to_string();
            state.ledger.append(order);
            Ok(Outcome::OrderPlaced { order_id })
        }

        Command::ListOrders => Ok(Outcome::OrdersListed),

        Command::RefundOrder { reference } => {
            let order = state.ledger.refund(&reference)?;
            Ok(Outcome::OrderRefunded {
                order_id: order.id().to_string(),
            })
        }

        Command::Exit => Ok(Outcome::Exit),
    }
}
