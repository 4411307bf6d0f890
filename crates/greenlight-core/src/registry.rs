//! In-memory registry of tracked repositories.

use std::sync::RwLock;

use crate::repository::{Platform, RepoRecord};

/// Process-lifetime store of tracked repositories, in insertion order.
///
/// Owned by the application state and shared behind an `Arc`; nothing is
/// persisted across restarts. Duplicate `owner/name` registrations are
/// accepted and share one id; lookups resolve to the first match.
#[derive(Debug, Default)]
pub struct RepoRegistry {
    repos: RwLock<Vec<RepoRecord>>,
}

impl RepoRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order, tokens redacted.
    pub fn list(&self) -> Vec<RepoRecord> {
        self.read().iter().map(RepoRecord::redacted).collect()
    }

    /// Register a repository. No dedup and no field validation; returns the
    /// created record with its token redacted.
    pub fn add(&self, platform: Platform, owner: String, name: String, token: String) -> RepoRecord {
        let repo = RepoRecord::new(platform, owner, name, token);
        let redacted = repo.redacted();
        self.write().push(repo);
        redacted
    }

    /// Remove every record with the given id. Silently succeeds when
    /// nothing matched.
    pub fn remove(&self, id: &str) {
        self.write().retain(|r| r.id != id);
    }

    /// First record with the given id, token intact. For internal use by
    /// the aggregator; never serialized to a client.
    pub fn get(&self, id: &str) -> Option<RepoRecord> {
        self.read().iter().find(|r| r.id == id).cloned()
    }

    /// All records in insertion order with tokens intact.
    pub fn snapshot(&self) -> Vec<RepoRecord> {
        self.read().clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<RepoRecord>> {
        self.repos.read().expect("registry lock poisoned")
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<RepoRecord>> {
        self.repos.write().expect("registry lock poisoned")
    }
}
