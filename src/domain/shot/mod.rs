pub mod entity;
pub mod invariants;

pub use entity::Shot;
pub use invariants::validate_shot;
