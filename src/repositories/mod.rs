// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO event emission
// - NO cross-repository calls
// - Explicit SQL only

pub mod coffee_repository;
pub mod shot_repository;

pub use coffee_repository::{CoffeeRepository, SqliteCoffeeRepository};
pub use shot_repository::{ShotRepository, SqliteShotRepository};

#[cfg(test)]
pub use coffee_repository::MockCoffeeRepository;
#[cfg(test)]
pub use shot_repository::MockShotRepository;
