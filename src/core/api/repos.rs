//! Repository lookup, creation and topics.

use tracing::debug;

use super::{Client, Request, Transport};
use crate::core::domain::{NewRepository, Repository, Topics};
use crate::error::{ApiError, Error, Result};

impl<T: Transport> Client<T> {
    /// Get the repository `owner/name`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::NotFound` if it does not exist (or is not visible
    /// to the token), other `ApiError`s for transport or decoding failures.
    pub fn get_repository(&self, owner: &str, name: &str) -> Result<Repository> {
        let _span = self.span.enter();
        debug!(owner, repo = name, "get repository");

        let resource = format!("repository {}/{}", owner, name);
        let request = Request::get(format!("/repos/{}/{}", owner, name));
        self.call(&resource, &request)
            .inspect_err(|e| match e {
                ApiError::NotFound { .. } => debug!(owner, repo = name, "repository not found"),
                _ => debug!(owner, repo = name, error = %e, "error getting repository"),
            })
            .map_err(Error::from)
    }

    /// Like [`get_repository`](Self::get_repository), with absence as `None`.
    pub fn find_repository(&self, owner: &str, name: &str) -> Result<Option<Repository>> {
        match self.get_repository(owner, name) {
            Ok(repo) => Ok(Some(repo)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Create a repository named `name`.
    ///
    /// Created under `organization` when given, otherwise under the
    /// authenticated user. See [`NewRepository`] for the fixed settings.
    /// The platform may take a moment to make the new repository fully
    /// available; nothing here waits for that.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::ValidationFailed` when the platform rejects the
    /// request (e.g. the name is taken).
    pub fn create_repository(&self, organization: Option<&str>, name: &str) -> Result<Repository> {
        let _span = self.span.enter();
        let org = organization.unwrap_or("");
        debug!(organization = org, name, "creating repository");

        let path = match organization {
            Some(org) => format!("/orgs/{}/repos", org),
            None => "/user/repos".to_string(),
        };
        let resource = match organization {
            Some(org) => format!("repository {}/{}", org, name),
            None => format!("repository {}", name),
        };
        let request = Request::post(path, serde_json::to_value(NewRepository::new(name))?);

        self.call(&resource, &request)
            .inspect_err(|e| match e {
                ApiError::ValidationFailed { message, .. } => {
                    debug!(organization = org, name, message = %message, "validation failed")
                }
                _ => debug!(organization = org, name, error = %e, "error creating repository"),
            })
            .map_err(Error::from)
    }

    /// Replace all topics of `owner/repo` with `topics`.
    ///
    /// Returns the topics the platform stored (normalized to lowercase).
    pub fn replace_topics(&self, owner: &str, repo: &str, topics: &[String]) -> Result<Vec<String>> {
        let _span = self.span.enter();
        debug!(owner, repo, ?topics, "replacing repository topics");

        let resource = format!("topics {}/{}", owner, repo);
        let body = Topics {
            names: topics.to_vec(),
        };
        let request = Request::put(
            format!("/repos/{}/{}/topics", owner, repo),
            serde_json::to_value(body)?,
        );

        let stored: Topics = self.call(&resource, &request).inspect_err(|e| {
            debug!(owner, repo, error = %e, "error replacing repository topics")
        })?;
        Ok(stored.names)
    }
}
