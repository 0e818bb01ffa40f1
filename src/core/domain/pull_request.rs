//! Pull request types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::types::Sha;

/// Body for pull request creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPullRequest {
    pub title: String,
    pub body: String,
    /// Branch holding the changes. `owner:branch` for cross-fork requests.
    pub head: String,
    /// Branch the changes should land on.
    pub base: String,
}

impl NewPullRequest {
    pub fn new(
        title: impl Into<String>,
        head: impl Into<String>,
        base: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: String::new(),
            head: head.into(),
            base: base.into(),
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }
}

/// One side of a pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestBranch {
    #[serde(rename = "ref")]
    pub name: String,
    #[serde(default)]
    pub sha: Option<Sha>,
}

/// A created pull request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    pub state: String,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub draft: bool,
    pub head: PullRequestBranch,
    pub base: PullRequestBranch,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pull_request_body() {
        let pr = NewPullRequest::new("Add CI", "ci-setup", "main").with_body("Adds workflows");
        let body = serde_json::to_value(pr).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "title": "Add CI",
                "body": "Adds workflows",
                "head": "ci-setup",
                "base": "main",
            })
        );
    }

    #[test]
    fn test_pull_request_deserializes() {
        let pr: PullRequest = serde_json::from_value(serde_json::json!({
            "number": 1,
            "title": "Add CI",
            "body": null,
            "state": "open",
            "html_url": "https://github.com/octo/hello/pull/1",
            "head": { "ref": "ci-setup", "sha": "abc" },
            "base": { "ref": "main", "sha": "def" },
            "created_at": "2024-01-01T00:00:00Z",
        }))
        .unwrap();
        assert_eq!(pr.number, 1);
        assert_eq!(pr.head.name, "ci-setup");
        assert!(pr.created_at.is_some());
        assert!(!pr.draft);
    }
}
