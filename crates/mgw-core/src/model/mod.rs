pub mod item;
pub mod money;
pub mod order;

pub use item::Item;
pub use money::Money;
pub use order::{Order, OrderEntry, OrderStatus};
