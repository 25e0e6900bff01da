// src/application/state.rs

use std::sync::Arc;

use crate::config::StoreConfig;
use crate::db::{create_connection_pool, get_connection, initialize_database};
use crate::domain::samples::sample_coffees;
use crate::error::AppResult;
use crate::events::EventBus;
use crate::repositories::{
    CoffeeRepository, ShotRepository, SqliteCoffeeRepository, SqliteShotRepository,
};
use crate::services::{CoffeeService, LiveCoffeeList, ShotService};

/// Everything a UI shell needs to call the commands.
/// All fields are Arc-wrapped for sharing across threads.
pub struct AppState {
    pub config: StoreConfig,
    pub event_bus: Arc<EventBus>,
    pub coffee_service: Arc<CoffeeService>,
    pub shot_service: Arc<ShotService>,
    pub coffee_list: Arc<LiveCoffeeList>,
}

impl AppState {
    /// Open (or create) the store described by `config` and wire the services
    pub fn open(config: StoreConfig) -> AppResult<Self> {
        // 1. INFRASTRUCTURE
        let event_bus = Arc::new(EventBus::new());
        let pool = Arc::new(create_connection_pool(&config)?);
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
        }

        // 2. REPOSITORIES
        let coffee_repo: Arc<dyn CoffeeRepository> =
            Arc::new(SqliteCoffeeRepository::new(Arc::clone(&pool)));
        let shot_repo: Arc<dyn ShotRepository> =
            Arc::new(SqliteShotRepository::new(Arc::clone(&pool)));

        // 3. SERVICES
        let coffee_service = Arc::new(CoffeeService::new(
            Arc::clone(&coffee_repo),
            Arc::clone(&event_bus),
        ));
        let shot_service = Arc::new(ShotService::new(
            shot_repo,
            Arc::clone(&coffee_repo),
            Arc::clone(&event_bus),
        ));

        // 4. READ MODELS
        let coffee_list = LiveCoffeeList::attach(coffee_repo, &event_bus)?;

        log::info!("Coffee store ready with {} coffees", coffee_list.len());

        Ok(Self {
            config,
            event_bus,
            coffee_service,
            shot_service,
            coffee_list,
        })
    }

    /// Open the store at the location given by the environment
    pub fn from_env() -> AppResult<Self> {
        Self::open(StoreConfig::from_env()?)
    }

    /// Fill an empty store with the preview coffees.
    /// Returns how many were added; a non-empty store is left alone.
    pub fn seed_sample_data(&self) -> AppResult<usize> {
        if !self.coffee_list.is_empty() {
            return Ok(0);
        }
        let coffees = sample_coffees();
        let count = coffees.len();
        for coffee in coffees {
            self.coffee_service.add_coffee(coffee)?;
        }
        log::info!("Seeded {} sample coffees", count);
        Ok(count)
    }
}
