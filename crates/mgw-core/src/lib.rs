//! MoneyGoWhere Core - menu and order kernel
//!
//! This crate turns raw command lines into validated operations on an
//! in-memory menu and order ledger:
//! - Tokenizer and flag parser producing [`parser::RawCommand`]
//! - Per-command validators producing a typed [`Command`]
//! - Menu index with fuzzy name lookup and the add-order resolver
//! - Order ledger with one-way refunds
//! - The [`Session`] dispatcher, which persists through the [`Repository`] seam
//!
//! No file I/O happens here; see `mgw-store` for JSON snapshots.

pub mod apply;
pub mod assistant;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod order_resolver;
pub mod parser;
pub mod render;
pub mod rules;
pub mod session;

pub use mgw_core_types as core_types;

// Re-export commonly used types
pub use apply::{apply, Outcome, State};
pub use assistant::{Prompter, ScriptedPrompter};
pub use commands::{Command, CommandKind};
pub use errors::{ErrorCategory, ExError, ExErrorKind, MgwError, Result};
pub use model::{Item, Money, Order, OrderEntry, OrderStatus};
pub use ops::{InMemoryRepository, Menu, OrderLedger, OrderRef, Repository};
pub use session::{Response, Session};
