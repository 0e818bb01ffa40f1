//! Branch references.

use tracing::debug;

use super::{Client, Request, Transport};
use crate::core::domain::{NewReference, Reference};
use crate::error::{ApiError, Error, Result};

impl<T: Transport> Client<T> {
    /// Get `refs/heads/<branch>` of `owner/repo`.
    pub fn get_branch_ref(&self, owner: &str, repo: &str, branch: &str) -> Result<Reference> {
        let _span = self.span.enter();
        debug!(owner, repo, branch, "getting branch reference");

        let resource = format!("branch {}/{}@{}", owner, repo, branch);
        let request = Request::get(format!("/repos/{}/{}/git/ref/heads/{}", owner, repo, branch));
        self.call(&resource, &request)
            .inspect_err(|e| debug!(owner, repo, branch, error = %e, "error getting branch reference"))
            .map_err(Error::from)
    }

    /// Create branch `branch` in `owner/repo` at the tip of the default branch.
    ///
    /// Nothing is created unless both the default branch and its tip commit
    /// resolve.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::MissingField` if the repository reports no default
    /// branch or the default branch reference carries no SHA, and the
    /// platform's error if the branch already exists.
    pub fn create_branch(&self, owner: &str, repo: &str, branch: &str) -> Result<Reference> {
        let _span = self.span.enter();
        debug!(owner, repo, branch, "creating branch");

        let repository = self.get_repository(owner, repo)?;
        let default_branch = repository
            .default_branch
            .filter(|b| !b.is_empty())
            .ok_or_else(|| ApiError::MissingField {
                resource: format!("repository {}/{}", owner, repo),
                field: "default_branch",
            })
            .inspect_err(|_| debug!(owner, repo, "repository has no default branch"))?;

        debug!(owner, repo, default_branch = %default_branch, "getting latest reference from default branch");
        let source = self.get_branch_ref(owner, repo, &default_branch)?;
        let sha = source
            .object
            .sha
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::MissingField {
                resource: format!("branch {}/{}@{}", owner, repo, default_branch),
                field: "object.sha",
            })?;

        let resource = format!("branch {}/{}@{}", owner, repo, branch);
        let request = Request::post(
            format!("/repos/{}/{}/git/refs", owner, repo),
            serde_json::to_value(NewReference::branch(branch, sha))?,
        );
        self.call(&resource, &request)
            .inspect_err(|e| debug!(owner, repo, branch, error = %e, "error creating new branch"))
            .map_err(Error::from)
    }
}
