//! GitLab pipelines API client.

use async_trait::async_trait;
use greenlight_core::{RepoRecord, RunSummary};
use serde::Deserialize;

use super::provider::{CiProvider, ProviderError, elapsed_seconds};

const API_BASE: &str = "https://gitlab.com/api/v4";

/// GitLab pipeline provider.
pub struct GitLabProvider {
    client: reqwest::Client,
}

impl GitLabProvider {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CiProvider for GitLabProvider {
    async fn fetch_recent(
        &self,
        repo: &RepoRecord,
        limit: u32,
    ) -> Result<Vec<RunSummary>, ProviderError> {
        // GitLab addresses projects by their URL-encoded full path.
        let project_id = urlencoding::encode(&format!("{}/{}", repo.owner, repo.name)).into_owned();
        let url = format!(
            "{}/projects/{}/pipelines?per_page={}",
            API_BASE, project_id, limit
        );

        let response = self
            .client
            .get(&url)
            .header("PRIVATE-TOKEN", &repo.token)
            .send()
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(ProviderError::Api(format!(
                "GitLab returned {}: {}",
                status, text
            )));
        }

        let pipelines: Vec<Pipeline> = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        Ok(pipelines.into_iter().map(normalize_pipeline).collect())
    }
}

/// Raw pipeline, reduced to the fields the dashboard reads.
#[derive(Debug, Deserialize)]
struct Pipeline {
    id: i64,
    status: Option<String>,
    created_at: Option<String>,
    updated_at: Option<String>,
    r#ref: Option<String>,
}

fn normalize_pipeline(pipeline: Pipeline) -> RunSummary {
    let duration = elapsed_seconds(pipeline.created_at.as_deref(), pipeline.updated_at.as_deref());

    RunSummary {
        id: pipeline.id,
        status: pipeline.status.unwrap_or_else(|| "unknown".to_string()),
        duration,
        timestamp: pipeline.updated_at,
        branch: pipeline.r#ref,
    }
}
