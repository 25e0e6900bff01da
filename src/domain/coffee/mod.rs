pub mod entity;
pub mod invariants;

pub use entity::{Coffee, DEFAULT_ORIGIN};
pub use invariants::validate_coffee;
