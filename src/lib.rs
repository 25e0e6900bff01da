// src/lib.rs
// BrewBuddy - Local-first coffee and espresso shot tracker
//
// Architecture:
// - Domain-centric: coffees, shots and their invariants live in `domain`
// - Forms turn raw text fields into validated domain records
// - Event-driven: services emit one event per mutation; the live coffee
//   list re-reads the store on each
// - Local-first: a single SQLite file under the user's data directory
// - Application Layer: commands and DTOs for a UI shell

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod forms;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

#[cfg(test)]
mod test_support;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_coffee,
    validate_shot,
    // Shared
    BrewMethod,
    // Coffee
    Coffee,
    DomainError,
    Rating,
    // Shot
    Shot,
    Stars,
    DEFAULT_ORIGIN,
};

// ============================================================================
// PUBLIC API - Forms
// ============================================================================

pub use forms::{CoffeeForm, CoffeeValidationError, FormState, ShotForm, ShotValidationError};

// ============================================================================
// PUBLIC API - Error Types & Config
// ============================================================================

pub use config::StoreConfig;
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, CoffeeAdded, CoffeeDeleted, CoffeeRated, DomainEvent, EventBus,
    EventLogEntry, ShotLogged,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{
    create_connection_pool, initialize_database, localized_cmp, ConnectionPool,
    LOCALIZED_COLLATION,
};

// ============================================================================
// PUBLIC API - Repositories & Services
// ============================================================================

pub use repositories::{
    CoffeeRepository, ShotRepository, SqliteCoffeeRepository, SqliteShotRepository,
};

pub use services::{CoffeeService, LiveCoffeeList, ShotService};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, ErrorResponse, ErrorType};

pub use application::commands;
pub use application::dto;
