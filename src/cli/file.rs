//! File and contents commands.

use std::fs;

use tracing::info;

use crate::cli::{output, FilePut, Session};
use crate::core::domain::{ContentEntry, Contents, EntryKind, FileWrite};
use crate::error::Result;

/// Create or replace a file on a branch.
pub fn put(session: &Session, args: &FilePut) -> Result<()> {
    let content = match (&args.from, &args.content) {
        (Some(path), _) => fs::read(path)?,
        (None, Some(text)) => text.clone().into_bytes(),
        (None, None) => Vec::new(),
    };
    info!(
        path = %args.path,
        branch = %args.branch,
        bytes = content.len(),
        "writing file"
    );

    let write = match &args.sha {
        Some(sha) => FileWrite::replace(&args.path, &args.branch, &args.message, content, sha),
        None => FileWrite::create(&args.path, &args.branch, &args.message, content),
    };

    let client = session.client()?;
    let commit = client.put_file(&args.owner, &args.repo, &write)?;

    let verb = if write.replacing().is_some() { "updated" } else { "created" };
    output::success(&format!(
        "{} {} on {}",
        verb,
        output::name(&args.path),
        output::name(&args.branch)
    ));
    if let Some(sha) = &commit.commit.sha {
        output::dimmed(&format!("  commit {}", sha));
    }
    Ok(())
}

/// Show the file or directory at `path`.
pub fn contents(
    session: &Session,
    owner: &str,
    repo: &str,
    path: &str,
    git_ref: Option<&str>,
    json: bool,
) -> Result<()> {
    let client = session.client()?;
    let contents = client.get_contents(owner, repo, path, git_ref)?;

    let shown = if path.is_empty() { "/" } else { path };
    match &contents {
        Contents::NotFound => {
            output::warn(&format!("nothing at {}", output::name(shown)));
        }
        Contents::File(entry) if json => output::json(entry)?,
        Contents::Directory(entries) if json => output::json(entries)?,
        Contents::File(entry) => print_file(entry)?,
        Contents::Directory(entries) => {
            output::header(shown);
            output::rule();
            for entry in entries {
                let marker = if entry.kind == EntryKind::Dir { "/" } else { "" };
                output::list_item(&format!("{}{}", entry.name, marker));
            }
        }
    }
    Ok(())
}

fn print_file(entry: &ContentEntry) -> Result<()> {
    match entry.decoded() {
        Some(Ok(bytes)) => {
            print!("{}", String::from_utf8_lossy(&bytes));
        }
        Some(Err(e)) => {
            output::warn(&format!("could not decode {}: {}", entry.path, e));
        }
        None => {
            output::kv("path", &entry.path);
            output::kv("size", entry.size);
            output::kv("sha ", &entry.sha);
        }
    }
    Ok(())
}
