// src/services/live_coffee_list.rs
//
// Live, sorted view of all coffees.
//
// The list re-reads the store after every coffee or shot event, so a
// caller holding it always sees the current set in name order without
// polling. Each refresh bumps `revision`, which a UI can use to decide
// whether to re-render.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use uuid::Uuid;

use crate::domain::Coffee;
use crate::error::AppResult;
use crate::events::{CoffeeAdded, CoffeeDeleted, CoffeeRated, EventBus, ShotLogged};
use crate::repositories::CoffeeRepository;

pub struct LiveCoffeeList {
    coffee_repo: Arc<dyn CoffeeRepository>,
    snapshot: RwLock<Vec<Coffee>>,
    revision: AtomicU64,
}

impl LiveCoffeeList {
    /// Load the current coffees and keep them in sync with `event_bus`
    pub fn attach(
        coffee_repo: Arc<dyn CoffeeRepository>,
        event_bus: &EventBus,
    ) -> AppResult<Arc<Self>> {
        let initial = coffee_repo.list_sorted()?;
        let list = Arc::new(Self {
            coffee_repo,
            snapshot: RwLock::new(initial),
            revision: AtomicU64::new(0),
        });

        let on_added = Arc::clone(&list);
        event_bus.subscribe::<CoffeeAdded, _>(move |_| on_added.refresh_logged());

        let on_deleted = Arc::clone(&list);
        event_bus.subscribe::<CoffeeDeleted, _>(move |_| on_deleted.refresh_logged());

        let on_rated = Arc::clone(&list);
        event_bus.subscribe::<CoffeeRated, _>(move |_| on_rated.refresh_logged());

        let on_shot = Arc::clone(&list);
        event_bus.subscribe::<ShotLogged, _>(move |_| on_shot.refresh_logged());

        Ok(list)
    }

    /// Re-read the store now
    pub fn refresh(&self) -> AppResult<()> {
        let coffees = self.coffee_repo.list_sorted()?;
        *self.snapshot.write().unwrap_or_else(PoisonError::into_inner) = coffees;
        self.revision.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    // Event handlers cannot return errors; keep the stale snapshot.
    fn refresh_logged(&self) {
        if let Err(e) = self.refresh() {
            log::warn!("Coffee list refresh failed, keeping previous snapshot: {}", e);
        }
    }

    /// Current coffees in name order
    pub fn snapshot(&self) -> Vec<Coffee> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn find(&self, coffee_id: Uuid) -> Option<Coffee> {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|c| c.id == coffee_id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.snapshot
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of refreshes since attach
    pub fn revision(&self) -> u64 {
        self.revision.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::samples::sample_coffees;
    use crate::error::AppError;
    use crate::repositories::MockCoffeeRepository;
    use std::sync::Mutex;

    #[test]
    fn test_refreshes_on_each_event() {
        let coffees = sample_coffees();
        let first = vec![coffees[0].clone()];
        let both = vec![coffees[0].clone(), coffees[1].clone()];

        let responses = Mutex::new(vec![both, first]);
        let mut repo = MockCoffeeRepository::new();
        repo.expect_list_sorted()
            .times(2)
            .returning(move || Ok(responses.lock().unwrap().pop().unwrap_or_default()));

        let bus = EventBus::new();
        let list = LiveCoffeeList::attach(Arc::new(repo), &bus).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.revision(), 0);

        bus.emit(CoffeeAdded::new(coffees[1].id, coffees[1].name.clone()));

        assert_eq!(list.len(), 2);
        assert_eq!(list.revision(), 1);
        assert!(list.find(coffees[1].id).is_some());
    }

    #[test]
    fn test_failed_refresh_keeps_snapshot() {
        let coffees = sample_coffees();
        let initial = vec![coffees[0].clone()];
        let calls = Mutex::new(0);

        let mut repo = MockCoffeeRepository::new();
        repo.expect_list_sorted().returning(move || {
            let mut n = calls.lock().unwrap();
            *n += 1;
            if *n == 1 {
                Ok(initial.clone())
            } else {
                Err(AppError::Pool("closed".to_string()))
            }
        });

        let bus = EventBus::new();
        let list = LiveCoffeeList::attach(Arc::new(repo), &bus).unwrap();
        bus.emit(CoffeeDeleted::new(coffees[0].id));

        assert_eq!(list.len(), 1);
        assert_eq!(list.revision(), 0);
    }
}
