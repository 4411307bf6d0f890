//! Status aggregation across registered repositories.

use std::sync::Arc;

use futures::future::join_all;
use greenlight_core::{
    AggregateStatus, Error, Platform, RepoRecord, RepoRegistry, Result, SummaryEntry, success_rate,
};
use tracing::warn;

use crate::services::{CiProvider, GitHubProvider, GitLabProvider};

/// Runs sampled per repository for the detailed view; the success rate is
/// computed over this whole window.
const RECENT_WINDOW: u32 = 10;

/// Runs returned to the client in the detailed view.
const DISPLAY_LIMIT: usize = 5;

/// Translates upstream run/pipeline lists into platform-agnostic status,
/// and fans out across all registered repositories for the summary view.
///
/// Stateless beyond its handles: every call is a single request/response
/// cycle with no retry, no cache, and no reuse of prior results.
pub struct StatusAggregator {
    registry: Arc<RepoRegistry>,
    github: Arc<dyn CiProvider>,
    gitlab: Arc<dyn CiProvider>,
}

impl StatusAggregator {
    pub fn new(registry: Arc<RepoRegistry>) -> Self {
        let client = reqwest::Client::new();
        Self::with_providers(
            registry,
            Arc::new(GitHubProvider::new(client.clone())),
            Arc::new(GitLabProvider::new(client)),
        )
    }

    /// Construct with explicit providers; lets callers substitute the
    /// upstream clients.
    pub fn with_providers(
        registry: Arc<RepoRegistry>,
        github: Arc<dyn CiProvider>,
        gitlab: Arc<dyn CiProvider>,
    ) -> Self {
        Self {
            registry,
            github,
            gitlab,
        }
    }

    fn provider_for(&self, platform: &Platform) -> Option<&dyn CiProvider> {
        match platform {
            Platform::Github => Some(self.github.as_ref()),
            Platform::Gitlab => Some(self.gitlab.as_ref()),
            Platform::Other(_) => None,
        }
    }

    /// Detailed status for one repository.
    ///
    /// `None` means the repository is registered under an unrecognized
    /// platform and has no status to report (not an error). An unknown id
    /// fails with `NotFound` before any upstream call is attempted.
    pub async fn detailed_status(&self, id: &str) -> Result<Option<AggregateStatus>> {
        let repo = self
            .registry
            .get(id)
            .ok_or_else(|| Error::NotFound("Repository not found".to_string()))?;

        let Some(provider) = self.provider_for(&repo.platform) else {
            return Ok(None);
        };

        let runs = provider
            .fetch_recent(&repo, RECENT_WINDOW)
            .await
            .map_err(|e| {
                warn!(repo = %repo.id, error = %e, "Upstream status fetch failed");
                Error::Upstream(e.to_string())
            })?;

        let success_rate = success_rate(&runs);
        let last_run = runs.first().cloned();
        let runs = runs.into_iter().take(DISPLAY_LIMIT).collect();

        Ok(Some(AggregateStatus {
            platform: repo.platform,
            last_run,
            success_rate,
            runs,
        }))
    }

    /// Latest-run summary for every registered repository, in registry
    /// listing order.
    ///
    /// Settle-all semantics: each repository's upstream call is issued
    /// concurrently and failures are contained per item as `status: "error"`
    /// entries; one hung or failing upstream never aborts its siblings.
    pub async fn summary(&self) -> Vec<SummaryEntry> {
        let repos = self.registry.snapshot();
        join_all(repos.iter().map(|r| self.summary_for(r))).await
    }

    async fn summary_for(&self, repo: &RepoRecord) -> SummaryEntry {
        let entry = SummaryEntry {
            id: repo.id.clone(),
            platform: repo.platform.clone(),
            owner: repo.owner.clone(),
            name: repo.name.clone(),
            status: "unknown".to_string(),
            timestamp: None,
            error: None,
        };

        let Some(provider) = self.provider_for(&repo.platform) else {
            return entry;
        };

        match provider.fetch_latest(repo).await {
            Ok(Some(run)) => SummaryEntry {
                status: run.status,
                timestamp: run.timestamp,
                ..entry
            },
            Ok(None) => entry,
            Err(e) => {
                warn!(repo = %repo.id, error = %e, "Upstream summary fetch failed");
                SummaryEntry {
                    status: "error".to_string(),
                    error: Some(e.to_string()),
                    ..entry
                }
            }
        }
    }
}
