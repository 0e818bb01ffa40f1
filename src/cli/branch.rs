//! Branch commands.

use tracing::info;

use crate::cli::{output, Session};
use crate::error::Result;

/// Create `branch` at the current tip of the default branch.
pub fn create(session: &Session, owner: &str, repo: &str, branch: &str) -> Result<()> {
    info!(owner, repo, branch, "creating branch");

    let client = session.client()?;
    let reference = client.create_branch(owner, repo, branch)?;

    let at = reference
        .object
        .sha
        .as_deref()
        .map(|sha| format!(" at {}", sha.get(..7).unwrap_or(sha)))
        .unwrap_or_default();
    output::success(&format!("created branch {}{}", output::name(branch), at));
    Ok(())
}
