//! Normalized, platform-agnostic status shapes.
//!
//! These are constructed per request from upstream API responses and never
//! stored.

use serde::{Deserialize, Serialize};

use crate::repository::Platform;

/// One normalized workflow run (GitHub) or pipeline (GitLab).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunSummary {
    /// Upstream run/pipeline identifier.
    pub id: i64,
    /// Free-form outcome string: `success`, `failure`, `running`, etc., or
    /// whatever the upstream conclusion/status field contained.
    pub status: String,
    /// Elapsed seconds between the upstream start and update times. May be
    /// negative or nonsensical for in-progress runs; not clamped.
    pub duration: i64,
    /// Upstream "updated" time, passed through as-is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
}

/// Detailed per-repository status.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateStatus {
    pub platform: Platform,
    /// Most recent run, or null when the upstream returned none.
    pub last_run: Option<RunSummary>,
    /// Integer percentage 0-100 over the sampled window.
    pub success_rate: u32,
    /// Most recent first, at most five entries.
    pub runs: Vec<RunSummary>,
}

/// One entry of the all-repositories summary view.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryEntry {
    pub id: String,
    pub platform: Platform,
    pub owner: String,
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Percentage of runs whose status is `success`, rounded to the nearest
/// integer. Zero when the window is empty.
pub fn success_rate(runs: &[RunSummary]) -> u32 {
    if runs.is_empty() {
        return 0;
    }
    let successes = runs.iter().filter(|r| r.status == "success").count();
    ((successes as f64 / runs.len() as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(status: &str) -> RunSummary {
        RunSummary {
            id: 1,
            status: status.to_string(),
            duration: 0,
            timestamp: None,
            branch: None,
        }
    }

    #[test]
    fn test_success_rate_rounds() {
        let runs = vec![run("success"), run("success"), run("failure")];
        assert_eq!(success_rate(&runs), 67);
    }

    #[test]
    fn test_success_rate_empty_window() {
        assert_eq!(success_rate(&[]), 0);
    }

    #[test]
    fn test_success_rate_ignores_non_terminal_statuses() {
        let runs = vec![run("success"), run("running"), run("pending"), run("failure")];
        assert_eq!(success_rate(&runs), 25);
    }
}
