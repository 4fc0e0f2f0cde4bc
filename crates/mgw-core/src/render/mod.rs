//! Text rendering for the console
//!
//! Everything here returns a `String`; printing is left to the caller.

pub mod help;
pub mod menu_render;
pub mod order_render;

pub use help::render_help;
pub use menu_render::{render_find_results, render_menu};
pub use order_render::render_orders;
