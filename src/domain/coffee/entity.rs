use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{BrewMethod, Rating};

/// Origin recorded when the user leaves the field blank
pub const DEFAULT_ORIGIN: &str = "Unknown origin";

/// A bag of coffee the user owns
/// Shots are logged against it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coffee {
    /// Internal immutable identifier
    pub id: Uuid,

    pub name: String,

    pub roaster_name: String,

    pub brew_method: BrewMethod,

    /// Price paid, never negative
    pub price: f64,

    pub origin: String,

    /// The only field that changes after creation
    pub rating: Rating,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Coffee {
    /// Create a new Coffee with a fresh identifier
    /// A blank origin is replaced by `DEFAULT_ORIGIN`
    pub fn new(
        name: String,
        roaster_name: String,
        brew_method: BrewMethod,
        price: f64,
        origin: String,
        rating: Rating,
    ) -> Self {
        let origin = if origin.trim().is_empty() {
            DEFAULT_ORIGIN.to_string()
        } else {
            origin
        };

        Self {
            id: Uuid::new_v4(),
            name,
            roaster_name,
            brew_method,
            price,
            origin,
            rating,
            created_at: Utc::now(),
        }
    }

    pub fn rate(&mut self, rating: Rating) {
        self.rating = rating;
    }
}
