//! Pull request commands.

use crate::cli::{output, Session};
use crate::core::domain::NewPullRequest;
use crate::error::Result;

/// Open a pull request from `head` into `base`.
pub fn create(
    session: &Session,
    owner: &str,
    repo: &str,
    title: &str,
    head: &str,
    base: &str,
    body: &str,
) -> Result<()> {
    let client = session.client()?;
    let pr = NewPullRequest::new(title, head, base).with_body(body);
    let created = client.create_pull_request(owner, repo, &pr)?;

    output::success(&format!(
        "opened #{} {} ({} → {})",
        created.number,
        created.title,
        output::name(&created.head.name),
        output::name(&created.base.name)
    ));
    if let Some(url) = &created.html_url {
        output::dimmed(&format!("  {}", url));
    }
    Ok(())
}
