//! Repository records for tracked CI/CD repositories.

use serde::{Deserialize, Serialize};

/// Placeholder substituted for the stored token in every read response.
pub const REDACTED_TOKEN: &str = "***";

/// CI/CD platform hosting a repository.
///
/// Registration does not validate the platform value, so anything other
/// than the two supported platforms is preserved as-is and yields an
/// empty status on later queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Github,
    Gitlab,
    #[serde(untagged)]
    Other(String),
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Github => write!(f, "github"),
            Platform::Gitlab => write!(f, "gitlab"),
            Platform::Other(s) => write!(f, "{}", s),
        }
    }
}

/// A tracked repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoRecord {
    /// Derived as `owner/name`; also the primary key.
    pub id: String,
    pub platform: Platform,
    pub owner: String,
    pub name: String,
    /// API access token. Never returned raw; see [`RepoRecord::redacted`].
    pub token: String,
}

impl RepoRecord {
    pub fn new(platform: Platform, owner: String, name: String, token: String) -> Self {
        let id = format!("{}/{}", owner, name);
        Self {
            id,
            platform,
            owner,
            name,
            token,
        }
    }

    /// Copy of this record with the token replaced by the redaction marker.
    pub fn redacted(&self) -> Self {
        Self {
            token: REDACTED_TOKEN.to_string(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_is_owner_slash_name() {
        let repo = RepoRecord::new(
            Platform::Github,
            "acme".to_string(),
            "widgets".to_string(),
            "secret".to_string(),
        );
        assert_eq!(repo.id, "acme/widgets");
    }

    #[test]
    fn test_platform_roundtrip() {
        let github: Platform = serde_json::from_str("\"github\"").unwrap();
        assert_eq!(github, Platform::Github);

        let other: Platform = serde_json::from_str("\"bitbucket\"").unwrap();
        assert_eq!(other, Platform::Other("bitbucket".to_string()));
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"bitbucket\"");
    }
}
