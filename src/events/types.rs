// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react
// - No business logic in event types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Rating;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($event:ty, $name:literal) => {
        impl DomainEvent for $event {
            fn event_id(&self) -> Uuid {
                self.event_id
            }
            fn occurred_at(&self) -> DateTime<Utc> {
                self.occurred_at
            }
            fn event_type(&self) -> &'static str {
                $name
            }
        }
    };
}

// ============================================================================
// COFFEE EVENTS
// ============================================================================

/// Emitted when a coffee is stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoffeeAdded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub coffee_id: Uuid,
    pub name: String,
}

impl CoffeeAdded {
    pub fn new(coffee_id: Uuid, name: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            coffee_id,
            name,
        }
    }
}

impl_domain_event!(CoffeeAdded, "CoffeeAdded");

/// Emitted when a coffee (and its shots) is removed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoffeeDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub coffee_id: Uuid,
}

impl CoffeeDeleted {
    pub fn new(coffee_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            coffee_id,
        }
    }
}

impl_domain_event!(CoffeeDeleted, "CoffeeDeleted");

/// Emitted when the user re-rates a coffee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoffeeRated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub coffee_id: Uuid,
    pub rating: Rating,
}

impl CoffeeRated {
    pub fn new(coffee_id: Uuid, rating: Rating) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            coffee_id,
            rating,
        }
    }
}

impl_domain_event!(CoffeeRated, "CoffeeRated");

// ============================================================================
// SHOT EVENTS
// ============================================================================

/// Emitted when a shot is stored under a coffee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotLogged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub shot_id: Uuid,
    pub coffee_id: Uuid,
}

impl ShotLogged {
    pub fn new(shot_id: Uuid, coffee_id: Uuid) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            shot_id,
            coffee_id,
        }
    }
}

impl_domain_event!(ShotLogged, "ShotLogged");
