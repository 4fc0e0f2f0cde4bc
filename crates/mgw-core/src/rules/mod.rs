pub mod validation;

pub use validation::{validate, FlagSpec};
