//! HTTP handlers for government-service.

pub mod citizen;
pub mod docs;
pub mod health;
pub mod registration;
pub mod reservation;

pub use docs::{index, registration_usage, reservation_usage};
pub use health::{health_check, metrics_endpoint, readiness_check};
