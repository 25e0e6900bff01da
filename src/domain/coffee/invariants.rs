use super::entity::Coffee;
use crate::domain::{DomainError, DomainResult};

/// Validates all Coffee invariants
/// Checked again at the store boundary, whatever built the record
pub fn validate_coffee(coffee: &Coffee) -> DomainResult<()> {
    validate_not_blank("Coffee name", &coffee.name)?;
    validate_not_blank("Roaster name", &coffee.roaster_name)?;
    validate_price(coffee.price)?;
    Ok(())
}

fn validate_not_blank(field: &str, value: &str) -> DomainResult<()> {
    if value.trim().is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(())
}

/// Price must be a finite number >= 0
fn validate_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(DomainError::InvariantViolation(format!(
            "Price {} is not a valid amount",
            price
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Coffee domain:
///
/// 1. Name and roaster name are never blank
/// 2. Price is finite and non-negative
/// 3. Identity (UUID) is immutable
/// 4. Origin is never blank (defaulted at construction)
/// 5. Rating is the only field that changes after creation

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BrewMethod, Rating};

    fn coffee(name: &str, roaster: &str, price: f64) -> Coffee {
        Coffee::new(
            name.to_string(),
            roaster.to_string(),
            BrewMethod::Espresso,
            price,
            String::new(),
            Rating::Unrated,
        )
    }

    #[test]
    fn test_valid_coffee() {
        assert!(validate_coffee(&coffee("Kenya AA", "Counter Culture", 21.0)).is_ok());
    }

    #[test]
    fn test_blank_name_fails() {
        assert!(validate_coffee(&coffee("   ", "Counter Culture", 21.0)).is_err());
    }

    #[test]
    fn test_blank_roaster_fails() {
        assert!(validate_coffee(&coffee("Kenya AA", "", 21.0)).is_err());
    }

    #[test]
    fn test_bad_prices_fail() {
        assert!(validate_coffee(&coffee("Kenya AA", "Counter Culture", -1.0)).is_err());
        assert!(validate_coffee(&coffee("Kenya AA", "Counter Culture", f64::NAN)).is_err());
        assert!(validate_coffee(&coffee("Kenya AA", "Counter Culture", f64::INFINITY)).is_err());
    }

    #[test]
    fn test_blank_origin_is_defaulted() {
        let c = coffee("Kenya AA", "Counter Culture", 21.0);
        assert_eq!(c.origin, crate::domain::DEFAULT_ORIGIN);
    }
}
