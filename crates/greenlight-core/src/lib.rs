//! Core domain types for the Greenlight CI/CD status dashboard.
//!
//! This crate contains:
//! - Repository records and the platform enum
//! - The in-memory repository registry
//! - Normalized run/pipeline status shapes
//! - Error types

pub mod error;
pub mod registry;
pub mod repository;
pub mod status;

pub use error::{Error, Result};
pub use registry::RepoRegistry;
pub use repository::{Platform, REDACTED_TOKEN, RepoRecord};
pub use status::{AggregateStatus, RunSummary, SummaryEntry, success_rate};
