//! Pull requests.

use tracing::debug;

use super::{Client, Request, Transport};
use crate::core::domain::{NewPullRequest, PullRequest};
use crate::error::{Error, Result};

impl<T: Transport> Client<T> {
    /// Open a pull request from `pr.head` into `pr.base`.
    pub fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        pr: &NewPullRequest,
    ) -> Result<PullRequest> {
        let _span = self.span.enter();
        debug!(owner, repo, title = %pr.title, head = %pr.head, base = %pr.base, "creating pull request");

        let resource = format!("pull request {}/{} {}->{}", owner, repo, pr.head, pr.base);
        let request = Request::post(
            format!("/repos/{}/{}/pulls", owner, repo),
            serde_json::to_value(pr)?,
        );
        self.call(&resource, &request)
            .inspect_err(|e| {
                debug!(owner, repo, head = %pr.head, base = %pr.base, error = %e, "error creating pull request")
            })
            .map_err(Error::from)
    }
}
