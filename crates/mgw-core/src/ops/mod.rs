pub mod ledger;
pub mod menu;
pub mod repository;

pub use ledger::{OrderLedger, OrderRef};
pub use menu::Menu;
pub use repository::{InMemoryRepository, Repository};
