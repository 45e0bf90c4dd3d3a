pub mod hub;
pub mod service;
pub mod simulation;

pub use hub::{ChatHub, DeliveryError, EventForwarder, HubListener, LogListener};
pub use service::ChatService;
pub use simulation::Simulator;
