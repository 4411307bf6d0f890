//! Shared contract for upstream CI/CD platforms.

use async_trait::async_trait;
use chrono::DateTime;
use greenlight_core::{RepoRecord, RunSummary};

/// A CI/CD platform that can be polled for run/pipeline status.
///
/// Closed contract with exactly two implementations (GitHub, GitLab); a
/// third platform is a new implementation, not a new conditional branch in
/// the aggregator.
#[async_trait]
pub trait CiProvider: Send + Sync {
    /// Up to `limit` most recent runs, newest first, normalized.
    async fn fetch_recent(
        &self,
        repo: &RepoRecord,
        limit: u32,
    ) -> Result<Vec<RunSummary>, ProviderError>;

    /// The single most recent run, if any. A reduced page-size-1 request.
    async fn fetch_latest(&self, repo: &RepoRecord) -> Result<Option<RunSummary>, ProviderError> {
        Ok(self.fetch_recent(repo, 1).await?.into_iter().next())
    }
}

/// Upstream API errors.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("Request failed: {0}")]
    Request(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// Whole seconds elapsed between two RFC 3339 timestamps.
///
/// Negative when the upstream reports an update time before the start time
/// (in-progress runs do this); passed through without clamping. Zero when
/// either timestamp is missing or unparseable.
pub(crate) fn elapsed_seconds(start: Option<&str>, end: Option<&str>) -> i64 {
    let parse = |s: &str| DateTime::parse_from_rfc3339(s).ok();
    match (start.and_then(parse), end.and_then(parse)) {
        (Some(start), Some(end)) => end.timestamp() - start.timestamp(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elapsed_seconds() {
        let secs = elapsed_seconds(
            Some("2024-03-01T10:00:00Z"),
            Some("2024-03-01T10:02:30Z"),
        );
        assert_eq!(secs, 150);
    }

    #[test]
    fn test_elapsed_seconds_negative_not_clamped() {
        let secs = elapsed_seconds(
            Some("2024-03-01T10:02:30Z"),
            Some("2024-03-01T10:00:00Z"),
        );
        assert_eq!(secs, -150);
    }

    #[test]
    fn test_elapsed_seconds_missing_or_garbage() {
        assert_eq!(elapsed_seconds(None, Some("2024-03-01T10:00:00Z")), 0);
        assert_eq!(elapsed_seconds(Some("not a date"), Some("2024-03-01T10:00:00Z")), 0);
    }
}
