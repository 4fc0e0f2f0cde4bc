//! MoneyGoWhere Store - JSON snapshot persistence
//!
//! Provides:
//! - [`JsonFileRepository`], a `Repository` over one pretty-printed JSON array
//! - Atomic temp→rename writes, so a crash never leaves half a snapshot
//! - [`open_data_dir`] wiring `menu.json` and `transactions.json`

pub mod atomic;
pub mod errors;
pub mod json_repo;

pub use json_repo::{open_data_dir, JsonFileRepository, LEDGER_FILE, MENU_FILE};
