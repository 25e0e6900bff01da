// src/services/shot_service.rs
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::{validate_shot, DomainError, Shot};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, ShotLogged};
use crate::repositories::{CoffeeRepository, ShotRepository};

pub struct ShotService {
    shot_repo: Arc<dyn ShotRepository>,
    coffee_repo: Arc<dyn CoffeeRepository>,
    event_bus: Arc<EventBus>,
}

impl ShotService {
    pub fn new(
        shot_repo: Arc<dyn ShotRepository>,
        coffee_repo: Arc<dyn CoffeeRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            shot_repo,
            coffee_repo,
            event_bus,
        }
    }

    /// Append a shot to `owner`'s shots.
    ///
    /// The owner must exist, and a shot already assigned elsewhere is
    /// refused. Returns the shot with its owner set.
    pub fn log_shot(&self, shot: Shot, owner: Uuid) -> AppResult<Shot> {
        if let Some(assigned) = shot.coffee_id {
            if assigned != owner {
                return Err(AppError::Domain(DomainError::InvariantViolation(format!(
                    "Shot {} belongs to coffee {}, not {}",
                    shot.id, assigned, owner
                ))));
            }
        }
        validate_shot(&shot).map_err(AppError::Domain)?;

        if !self.coffee_repo.exists(owner)? {
            return Err(AppError::NotFound);
        }

        let shot = shot.assign_to(owner);
        self.shot_repo.insert(&shot, owner)?;

        self.event_bus.emit(ShotLogged::new(shot.id, owner));

        Ok(shot)
    }

    /// Shots of a coffee, oldest first
    pub fn list_shots(&self, coffee_id: Uuid) -> AppResult<Vec<Shot>> {
        self.shot_repo.list_for_coffee(coffee_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::samples::sample_shot;
    use crate::repositories::{MockCoffeeRepository, MockShotRepository};
    use mockall::predicate::*;

    fn service(
        shots: MockShotRepository,
        coffees: MockCoffeeRepository,
    ) -> (ShotService, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        (
            ShotService::new(Arc::new(shots), Arc::new(coffees), Arc::clone(&bus)),
            bus,
        )
    }

    #[test]
    fn test_log_shot_assigns_owner() {
        let owner = Uuid::new_v4();

        let mut coffees = MockCoffeeRepository::new();
        coffees.expect_exists().with(eq(owner)).returning(|_| Ok(true));
        let mut shots = MockShotRepository::new();
        shots
            .expect_insert()
            .withf(move |s, o| *o == owner && s.coffee_id == Some(owner))
            .times(1)
            .returning(|_, _| Ok(()));

        let (service, bus) = service(shots, coffees);
        let stored = service.log_shot(sample_shot(), owner).unwrap();

        assert_eq!(stored.coffee_id, Some(owner));
        assert_eq!(bus.get_event_log()[0].event_type, "ShotLogged");
    }

    #[test]
    fn test_unknown_owner_is_not_found() {
        let mut coffees = MockCoffeeRepository::new();
        coffees.expect_exists().returning(|_| Ok(false));
        let mut shots = MockShotRepository::new();
        shots.expect_insert().never();

        let (service, _) = service(shots, coffees);
        assert!(matches!(
            service.log_shot(sample_shot(), Uuid::new_v4()),
            Err(AppError::NotFound)
        ));
    }

    #[test]
    fn test_shot_owned_elsewhere_is_refused() {
        let shot = sample_shot().assign_to(Uuid::new_v4());

        let mut coffees = MockCoffeeRepository::new();
        coffees.expect_exists().never();
        let mut shots = MockShotRepository::new();
        shots.expect_insert().never();

        let (service, _) = service(shots, coffees);
        assert!(matches!(
            service.log_shot(shot, Uuid::new_v4()),
            Err(AppError::Domain(DomainError::InvariantViolation(_)))
        ));
    }

    #[test]
    fn test_invalid_measure_is_refused() {
        let mut shot = sample_shot();
        shot.grams_in = -4.0;

        let mut coffees = MockCoffeeRepository::new();
        coffees.expect_exists().never();
        let mut shots = MockShotRepository::new();
        shots.expect_insert().never();

        let (service, _) = service(shots, coffees);
        assert!(service.log_shot(shot, Uuid::new_v4()).is_err());
    }
}
