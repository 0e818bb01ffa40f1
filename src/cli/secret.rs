//! Secret commands.
//!
//! The value is never taken from the command line: it is read from piped
//! stdin, or from a hidden prompt when stdin is a terminal.

use std::io::{self, IsTerminal, Read};

use dialoguer::Password;
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::{output, Session};
use crate::core::validation;
use crate::error::Result;

/// Seal and store a repository secret.
pub fn set(session: &Session, owner: &str, repo: &str, name: &str) -> Result<()> {
    info!(owner, repo, secret = name, "setting secret");
    validation::validate_secret_name(name)?;

    let value = read_value(name)?;
    validation::validate_value(name, &value)?;

    let client = session.client()?;
    client.put_secret(owner, repo, name, &value)?;

    output::success(&format!(
        "set {} on {}/{}",
        output::name(name),
        owner,
        repo
    ));
    Ok(())
}

fn read_value(name: &str) -> Result<Zeroizing<String>> {
    let stdin = io::stdin();
    if !stdin.is_terminal() {
        let mut input = Zeroizing::new(String::new());
        stdin.lock().read_to_string(&mut input)?;
        let trimmed = input.trim_end_matches(['\n', '\r']).len();
        input.truncate(trimmed);
        return Ok(input);
    }

    let value = Password::new()
        .with_prompt(format!("Value for {}", output::name(name)))
        .interact()?;
    Ok(Zeroizing::new(value))
}
