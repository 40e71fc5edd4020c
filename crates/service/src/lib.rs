//! Business logic layer for the plant catalog.
//!
//! [`PlantService`] performs exactly one store operation per call and turns
//! the store's absence sentinel into a typed not-found error for the HTTP
//! boundary to classify.

mod error;
mod plant_service;

pub use error::ServiceError;
pub use plant_service::PlantService;
