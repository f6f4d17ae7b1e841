//! # Resto Core
//! 
//! Domain entities, cart state, services, repository traits and the
//! headless views of the Resto application.

pub mod domain;
pub mod services;
pub mod repositories;
pub mod client;
pub mod cancel;
pub mod views;
pub mod error;

// Re-export domain entities
pub use domain::*;
pub use error::DomainError;
