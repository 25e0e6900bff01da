// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between UI and Services
// - Commands accept forms or ids, return DTOs
// - Commands convert every failure into an ErrorResponse
// - Commands NEVER contain business logic

pub mod coffee_commands;
pub mod shot_commands;

pub use coffee_commands::*;
pub use shot_commands::*;
