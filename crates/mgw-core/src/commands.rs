//! Command inventory
//!
//! [`CommandKind`] names what the user asked for; [`Command`] is the
//! validated, strongly-typed form handed to `apply()`.

use crate::model::{Money, OrderEntry};
use crate::ops::OrderRef;
use crate::parser::CommandSet;

/// Every command the session understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    AddItem,
    UpdateItem,
    DeleteItem,
    FindItem,
    ListItems,
    AddOrder,
    ListOrders,
    RefundOrder,
    Exit,
}

impl CommandKind {
    /// Resolve a command name as typed
    ///
    /// `/`-prefixed names come from the power-user set, everything else from
    /// the guided set, which also accepts the digit shortcuts `1`..`7`.
    /// Refunds are only offered in the power-user set.
    pub fn lookup(name: &str) -> Option<(CommandKind, CommandSet)> {
        if let Some(power) = name.strip_prefix('/') {
            let kind = match power {
                "help" => CommandKind::Help,
                "additem" => CommandKind::AddItem,
                "updateitem" => CommandKind::UpdateItem,
                "deleteitem" => CommandKind::DeleteItem,
                "finditem" => CommandKind::FindItem,
                "listitem" => CommandKind::ListItems,
                "addorder" => CommandKind::AddOrder,
                "listorder" => CommandKind::ListOrders,
                "refundorder" => CommandKind::RefundOrder,
                "exit" => CommandKind::Exit,
                _ => return None,
            };
            return Some((kind, CommandSet::Power));
        }

        let kind = match name {
            "?" | "help" => CommandKind::Help,
            "1" | "additem" => CommandKind::AddItem,
            "2" | "deleteitem" => CommandKind::DeleteItem,
            "3" | "listitem" => CommandKind::ListItems,
            "4" | "updateitem" => CommandKind::UpdateItem,
            "5" | "finditem" => CommandKind::FindItem,
            "6" | "addorder" => CommandKind::AddOrder,
            "7" | "listorder" => CommandKind::ListOrders,
            "exit" => CommandKind::Exit,
            _ => return None,
        };
        Some((kind, CommandSet::Guided))
    }

    /// Canonical name, used as the logging `op`
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Help => "help",
            CommandKind::AddItem => "additem",
            CommandKind::UpdateItem => "updateitem",
            CommandKind::DeleteItem => "deleteitem",
            CommandKind::FindItem => "finditem",
            CommandKind::ListItems => "listitem",
            CommandKind::AddOrder => "addorder",
            CommandKind::ListOrders => "listorder",
            CommandKind::RefundOrder => "refundorder",
            CommandKind::Exit => "exit",
        }
    }
}

/// A validated command, ready to apply
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,

    /// Append an item to the menu
    AddItem { name: String, price: Money },

    /// Change the name and/or price of the item at `index`
    UpdateItem {
        index: usize,
        name: Option<String>,
        price: Option<Money>,
    },

    /// Remove the item at `index`; later items shift down by one
    DeleteItem { index: usize },

    /// Show the items matching `query`
    FindItem { query: String },

    ListItems,

    /// Place an order for already-resolved entries
    AddOrder { entries: Vec<OrderEntry> },

    ListOrders,

    /// Refund a completed order
    RefundOrder { reference: OrderRef },

    Exit,
}
