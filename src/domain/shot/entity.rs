use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{BrewMethod, Stars};

/// A single extraction logged against a coffee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    /// Internal immutable identifier
    pub id: Uuid,

    /// Owning coffee
    /// Only `None` while the shot is still being entered
    pub coffee_id: Option<Uuid>,

    pub brew_method: BrewMethod,

    /// Dose in grams
    pub grams_in: f64,

    /// Yield in grams
    pub grams_out: f64,

    /// Extraction time in seconds
    pub time_seconds: f64,

    pub rating: Stars,

    pub notes: String,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Shot {
    /// Create an unassigned shot stamped with the current time
    pub fn new(
        brew_method: BrewMethod,
        grams_in: f64,
        grams_out: f64,
        time_seconds: f64,
        rating: Stars,
        notes: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            coffee_id: None,
            brew_method,
            grams_in,
            grams_out,
            time_seconds,
            rating,
            notes,
            created_at: Utc::now(),
        }
    }

    /// Attach the shot to its owning coffee
    pub fn assign_to(mut self, coffee_id: Uuid) -> Self {
        self.coffee_id = Some(coffee_id);
        self
    }

    /// Yield divided by dose, if a dose was recorded
    pub fn brew_ratio(&self) -> Option<f64> {
        if self.grams_in > 0.0 {
            Some(self.grams_out / self.grams_in)
        } else {
            None
        }
    }
}
