//! Git references.

use serde::{Deserialize, Serialize};

use crate::core::constants::BRANCH_REF_PREFIX;
use crate::core::types::Sha;

/// A git reference such as `refs/heads/main`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    #[serde(rename = "ref")]
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    pub object: GitObject,
}

impl Reference {
    /// Branch name without the `refs/heads/` prefix, if this is a branch.
    pub fn branch(&self) -> Option<&str> {
        self.name.strip_prefix(BRANCH_REF_PREFIX)
    }
}

/// The object a reference points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitObject {
    /// Missing only in malformed responses; callers must check.
    #[serde(default)]
    pub sha: Option<Sha>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Body for reference creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewReference {
    #[serde(rename = "ref")]
    pub name: String,
    pub sha: Sha,
}

impl NewReference {
    /// A branch reference pointing at `sha`.
    pub fn branch(branch: &str, sha: impl Into<Sha>) -> Self {
        Self {
            name: branch_ref(branch),
            sha: sha.into(),
        }
    }
}

/// `refs/heads/<branch>`
pub fn branch_ref(branch: &str) -> String {
    format!("{}{}", BRANCH_REF_PREFIX, branch)
}
