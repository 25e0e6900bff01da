// src/services/mod.rs
//
// Services Module - Orchestration Layer
//
// Services check invariants again at the store boundary, call the
// repositories and emit one event per successful mutation.

pub mod coffee_service;
pub mod live_coffee_list;
pub mod shot_service;


pub use coffee_service::CoffeeService;
pub use live_coffee_list::LiveCoffeeList;
pub use shot_service::ShotService;
