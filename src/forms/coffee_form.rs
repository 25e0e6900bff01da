// src/forms/coffee_form.rs
//
// "Add coffee" form: raw text fields in, Coffee record out.

use serde::Serialize;
use thiserror::Error;

use super::parse_decimal;
use crate::domain::{BrewMethod, Coffee, Rating};

/// Reasons a coffee submission is rejected, in the order they are checked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CoffeeValidationError {
    #[error("Name cannot be empty")]
    NameEmpty,

    #[error("Roaster name cannot be empty")]
    RoasterNameEmpty,

    #[error("Price cannot be empty")]
    PriceEmpty,

    #[error("Price must be a valid number")]
    PriceInvalid,
}

/// Working state of the add-coffee form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoffeeForm {
    pub name: String,
    pub roaster_name: String,
    pub price: String,
    pub origin: String,
    pub brew_method: BrewMethod,
    pub rating: Rating,
}

impl CoffeeForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the current fields and build a Coffee.
    ///
    /// Checks run name, roaster name, price present, price numeric; the first
    /// failure is returned and the fields are left as typed. On success the
    /// form is reset for the next entry.
    pub fn submit(&mut self) -> Result<Coffee, CoffeeValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(CoffeeValidationError::NameEmpty);
        }

        let roaster_name = self.roaster_name.trim();
        if roaster_name.is_empty() {
            return Err(CoffeeValidationError::RoasterNameEmpty);
        }

        if self.price.trim().is_empty() {
            return Err(CoffeeValidationError::PriceEmpty);
        }
        let price = parse_decimal(&self.price).ok_or(CoffeeValidationError::PriceInvalid)?;

        let coffee = Coffee::new(
            name.to_string(),
            roaster_name.to_string(),
            self.brew_method,
            price,
            self.origin.trim().to_string(),
            self.rating,
        );

        self.reset();
        Ok(coffee)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
