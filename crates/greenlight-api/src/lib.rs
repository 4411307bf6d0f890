//! HTTP server for the Greenlight CI/CD status dashboard.
//!
//! Serves the dashboard page and the JSON API it polls.

pub mod aggregator;
pub mod error;
pub mod routes;
pub mod services;
pub mod state;

pub use state::AppState;
