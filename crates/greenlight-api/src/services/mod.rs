//! Upstream CI/CD platform clients.

pub mod github;
pub mod gitlab;
pub mod provider;

pub use github::GitHubProvider;
pub use gitlab::GitLabProvider;
pub use provider::{CiProvider, ProviderError};
