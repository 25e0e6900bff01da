// src/services/coffee_service.rs
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{validate_coffee, Coffee, Rating};
use crate::error::{AppError, AppResult};
use crate::events::{CoffeeAdded, CoffeeDeleted, CoffeeRated, EventBus};
use crate::repositories::CoffeeRepository;

pub struct CoffeeService {
    coffee_repo: Arc<dyn CoffeeRepository>,
    event_bus: Arc<EventBus>,
}

impl CoffeeService {
    pub fn new(coffee_repo: Arc<dyn CoffeeRepository>, event_bus: Arc<EventBus>) -> Self {
        Self {
            coffee_repo,
            event_bus,
        }
    }

    /// Store a coffee produced by `CoffeeForm::submit`
    pub fn add_coffee(&self, coffee: Coffee) -> AppResult<Coffee> {
        validate_coffee(&coffee).map_err(AppError::Domain)?;
        self.coffee_repo.insert(&coffee)?;

        self.event_bus
            .emit(CoffeeAdded::new(coffee.id, coffee.name.clone()));

        Ok(coffee)
    }

    /// Re-rate a coffee from its detail screen
    pub fn rate_coffee(&self, coffee_id: Uuid, rating: Rating) -> AppResult<()> {
        self.coffee_repo.update_rating(coffee_id, rating)?;
        self.event_bus.emit(CoffeeRated::new(coffee_id, rating));
        Ok(())
    }

    /// Remove a coffee; its shots go with it
    pub fn delete_coffee(&self, coffee_id: Uuid) -> AppResult<()> {
        self.coffee_repo.delete(coffee_id)?;
        self.event_bus.emit(CoffeeDeleted::new(coffee_id));
        Ok(())
    }

    pub fn get_coffee(&self, coffee_id: Uuid) -> AppResult<Option<Coffee>> {
        self.coffee_repo.get_by_id(coffee_id)
    }

    /// All coffees, ordered by name
    pub fn list_coffees(&self) -> AppResult<Vec<Coffee>> {
        self.coffee_repo.list_sorted()
    }
}
