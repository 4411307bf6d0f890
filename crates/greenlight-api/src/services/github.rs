//! GitHub Actions API client.

use async_trait::async_trait;
use greenlight_core::{RepoRecord, RunSummary};
use serde::Deserialize;

use super::provider::{CiProvider, ProviderError, elapsed_seconds};

const API_BASE: &str = "https://api.github.com";
const USER_AGENT: &str = "greenlight-dashboard";

/// GitHub Actions workflow-run provider.
pub struct GitHubProvider {
    client: reqwest::Client,
}

impl GitHubProvider {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CiProvider for GitHubProvider {
    async fn fetch_recent(
        &self,
        repo: &RepoRecord,
        limit: u32,
    ) -> Result<Vec<RunSummary>, ProviderError> {
        let url = format!(
            "{}/repos/{}/{}/actions/runs?per_page={}",
            API_BASE, repo.owner, repo.name, limit
        );

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", repo.token))
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api(format!(
                "GitHub returned {}: {}",
                status, text
            )));
        }

        let body: WorkflowRunsResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(body.workflow_runs.into_iter().map(normalize_run).collect())
    }
}

/// Envelope of the runs-list endpoint.
#[derive(Debug, Deserialize)]
struct WorkflowRunsResponse {
    #[serde(default)]
    workflow_runs: Vec<WorkflowRun>,
}

/// Raw workflow run, reduced to the fields the dashboard reads.
#[derive(Debug, Deserialize)]
struct WorkflowRun {
    id: i64,
    status: Option<String>,
    conclusion: Option<String>,
    run_started_at: Option<String>,
    updated_at: Option<String>,
    head_branch: Option<String>,
}

fn normalize_run(run: WorkflowRun) -> RunSummary {
    let duration = elapsed_seconds(run.run_started_at.as_deref(), run.updated_at.as_deref());

    RunSummary {
        id: run.id,
        // Conclusion is only set for finished runs; fall back to the
        // in-progress status field.
        status: run
            .conclusion
            .or(run.status)
            .unwrap_or_else(|| "unknown".to_string()),
        duration,
        timestamp: run.updated_at,
        branch: run.head_branch,
    }
}
