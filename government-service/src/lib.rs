//! Reference implementation of the World Class Government APIs: citizen
//! registration, vaccine reservation and the citizen listing.
//!
//! Every business outcome is answered with HTTP 200 and a human readable
//! `feedback` message; clients discriminate results by message text only.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
pub mod utils;
pub mod validation;

pub use startup::{build_router, AppState, Application};
