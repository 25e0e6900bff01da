// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between a UI shell and the services
// - Owns the wiring of pool, repositories, services and live list
// - Translates domain entities and errors into DTOs

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
