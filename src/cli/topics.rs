//! Topics commands.

use crate::cli::{output, Session};
use crate::error::Result;

/// Replace the topics of a repository.
pub fn set(session: &Session, owner: &str, repo: &str, topics: &[String]) -> Result<()> {
    let client = session.client()?;
    let applied = client.replace_topics(owner, repo, topics)?;

    let full_name = format!("{}/{}", owner, repo);
    if applied.is_empty() {
        output::success(&format!("cleared topics on {}", output::name(&full_name)));
        return Ok(());
    }

    output::success(&format!(
        "set {} topic(s) on {}",
        applied.len(),
        output::name(&full_name)
    ));
    for topic in &applied {
        output::list_item(topic);
    }
    Ok(())
}
