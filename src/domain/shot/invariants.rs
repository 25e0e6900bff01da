use super::entity::Shot;
use crate::domain::{DomainError, DomainResult};

/// Validates all Shot invariants
pub fn validate_shot(shot: &Shot) -> DomainResult<()> {
    validate_measure("Grams in", shot.grams_in)?;
    validate_measure("Grams out", shot.grams_out)?;
    validate_measure("Time", shot.time_seconds)?;
    Ok(())
}

/// Measurements are finite and >= 0
fn validate_measure(field: &str, value: f64) -> DomainResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DomainError::InvariantViolation(format!(
            "{} must be a non-negative number, got {}",
            field, value
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Shot domain:
///
/// 1. Measurements are finite and non-negative (blank input is 0)
/// 2. Rating is 1..=5 (enforced by `Stars`)
/// 3. A shot is only persisted with an owning coffee (enforced by ShotService)
/// 4. Created timestamp never changes
