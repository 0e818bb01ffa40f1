//! File reads and writes.

use serde::Deserialize;
use tracing::debug;

use super::{decode, Client, Request, Transport};
use crate::core::domain::{ContentEntry, Contents, FileCommit, FileWrite};
use crate::error::{ApiError, Error, Result};

/// A contents response is an object for a file and an array for a directory.
#[derive(Deserialize)]
#[serde(untagged)]
enum ContentsBody {
    Directory(Vec<ContentEntry>),
    File(Box<ContentEntry>),
}

fn contents_path(owner: &str, repo: &str, path: &str) -> String {
    let path = path.trim_matches('/');
    if path.is_empty() {
        format!("/repos/{}/{}/contents", owner, repo)
    } else {
        format!("/repos/{}/{}/contents/{}", owner, repo, path)
    }
}

impl<T: Transport> Client<T> {
    /// Create or replace a file on a branch.
    ///
    /// Use [`FileWrite::create`] for a new path and [`FileWrite::replace`]
    /// with the current blob SHA to overwrite an existing one.
    pub fn put_file(&self, owner: &str, repo: &str, write: &FileWrite) -> Result<FileCommit> {
        let _span = self.span.enter();
        let path = write.path();
        let branch = write.branch();
        debug!(owner, repo, branch, path, replacing = write.replacing().is_some(), "creating file");

        let resource = format!("file {}/{}:{}", owner, repo, path);
        let request = Request::put(
            contents_path(owner, repo, path),
            serde_json::to_value(write.body())?,
        );
        self.call(&resource, &request)
            .inspect_err(|e| debug!(owner, repo, branch, path, error = %e, "error creating file"))
            .map_err(Error::from)
    }

    /// Read the file or directory at `path`, at `git_ref` or the default
    /// branch. An empty path reads the repository root.
    ///
    /// A missing path is `Contents::NotFound`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` for any other failed response or malformed body.
    pub fn get_contents(
        &self,
        owner: &str,
        repo: &str,
        path: &str,
        git_ref: Option<&str>,
    ) -> Result<Contents> {
        let _span = self.span.enter();
        let ref_name = git_ref.unwrap_or("");
        debug!(owner, repo, git_ref = ref_name, path, "getting repository content");

        let resource = format!("contents {}/{}:{}", owner, repo, path);
        let mut request = Request::get(contents_path(owner, repo, path));
        if let Some(r) = git_ref.filter(|r| !r.is_empty()) {
            request = request.with_query("ref", r);
        }

        let response = match self.send(&resource, &request) {
            Ok(response) => response,
            Err(ApiError::NotFound { .. }) => {
                debug!(owner, repo, git_ref = ref_name, path, "file/path not found");
                return Ok(Contents::NotFound);
            }
            Err(e) => {
                debug!(owner, repo, git_ref = ref_name, path, error = %e, "error getting repository content");
                return Err(e.into());
            }
        };

        Ok(match decode::<ContentsBody>(&resource, &response.body)? {
            ContentsBody::File(entry) => Contents::File(*entry),
            ContentsBody::Directory(entries) => Contents::Directory(entries),
        })
    }
}
