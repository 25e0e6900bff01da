// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod brew_method;
pub mod coffee;
pub mod rating;
pub mod samples;
pub mod shot;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Shared value objects
pub use brew_method::BrewMethod;
pub use rating::{Rating, Stars};

// Coffee Domain
pub use coffee::{validate_coffee, Coffee, DEFAULT_ORIGIN};

// Shot Domain
pub use shot::{validate_shot, Shot};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Rating {0} is outside 1..=5")]
    RatingOutOfRange(i64),

    #[error("Unknown brew method: {0}")]
    UnknownBrewMethod(String),

    #[error("Entity not found: {0}")]
    NotFound(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
