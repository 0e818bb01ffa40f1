//! ghkit - provision GitHub repositories from scripts.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ghkit::cli::output;
use ghkit::cli::{execute, Cli};
use ghkit::core::constants::LOG_ENV;
use ghkit::error::{ApiError, ConfigError, Error, ProvisionError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ghkit=debug")
        } else {
            EnvFilter::new("ghkit=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time().with_writer(std::io::stderr))
        .init();

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
        if let Some(hint) = suggestion(&e) {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

fn suggestion(e: &Error) -> Option<&'static str> {
    match e {
        Error::Config(ConfigError::MissingToken) => Some("set GITHUB_TOKEN or pass --token"),
        Error::Api(ApiError::NotFound { .. }) => {
            Some("check the owner and name, and that the token can see the repository")
        }
        Error::Provision(ProvisionError::FetchKey { .. }) => {
            Some("the token needs write access to repository secrets")
        }
        _ if e.is_retryable() => Some("the request may succeed if retried"),
        _ => None,
    }
}
