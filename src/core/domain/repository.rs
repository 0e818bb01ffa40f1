//! Repository resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository as returned by the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    #[serde(default)]
    pub private: bool,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Absent for some freshly created or empty repositories.
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Body for repository creation.
///
/// Built with fixed defaults: public, issues and discussions on, projects
/// and wiki off, initialized with a README, branches deleted on merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewRepository {
    pub name: String,
    pub private: bool,
    pub has_issues: bool,
    pub has_projects: bool,
    pub has_wiki: bool,
    pub has_discussions: bool,
    pub auto_init: bool,
    pub delete_branch_on_merge: bool,
    pub use_squash_pr_title_as_default: bool,
    pub allow_forking: bool,
}

impl NewRepository {
    /// Repositories are public because rulesets are unavailable on private
    /// repositories for free accounts.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            private: false,
            has_issues: true,
            has_projects: false,
            has_wiki: false,
            has_discussions: true,
            auto_init: true,
            delete_branch_on_merge: true,
            use_squash_pr_title_as_default: true,
            allow_forking: true,
        }
    }
}

/// Full set of topics, used for both request and response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topics {
    pub names: Vec<String>,
}
