//! Repository commands.

use tracing::info;

use crate::cli::{output, Session};
use crate::core::domain::Repository;
use crate::error::Result;

/// Show a repository.
pub fn get(session: &Session, owner: &str, name: &str, json: bool) -> Result<()> {
    let client = session.client()?;
    let repository = client.get_repository(owner, name)?;

    if json {
        return output::json(&repository);
    }
    print_repository(&repository);
    Ok(())
}

/// Create a public repository for the authenticated user or an organization.
pub fn create(session: &Session, organization: Option<&str>, name: &str) -> Result<()> {
    info!(organization, name, "creating repository");

    let client = session.client()?;
    let repository = client.create_repository(organization, name)?;

    output::success(&format!("created {}", output::name(&repository.full_name)));
    if let Some(url) = &repository.html_url {
        output::dimmed(&format!("  {}", url));
    }
    Ok(())
}

fn print_repository(repository: &Repository) {
    output::header(&repository.full_name);
    output::rule();
    output::kv(
        "visibility    ",
        if repository.private { "private" } else { "public" },
    );
    if let Some(branch) = &repository.default_branch {
        output::kv("default branch", branch);
    }
    if let Some(description) = &repository.description {
        output::kv("description   ", description);
    }
    if let Some(url) = &repository.html_url {
        output::kv("url           ", url);
    }
    if !repository.topics.is_empty() {
        output::kv("topics        ", repository.topics.join(", "));
    }
}
