//! Command-line interface.

pub mod branch;
pub mod completions;
pub mod file;
pub mod output;
pub mod pr;
pub mod repo;
pub mod ruleset;
pub mod secret;
pub mod topics;

use std::path::PathBuf;

use clap::{ArgGroup, Args, Parser, Subcommand};
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::api::Client;
use crate::core::config::Config;
use crate::error::{ConfigError, Result};

/// ghkit - provision GitHub repositories from scripts.
#[derive(Parser)]
#[command(
    name = "ghkit",
    about = "Provision GitHub repositories, branches, files, secrets and rulesets",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// REST API root (overrides the config file)
    #[arg(long, global = true, env = "GHKIT_API_URL", value_name = "URL")]
    pub api_url: Option<String>,

    /// API token
    #[arg(long, global = true, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Look up or create repositories
    Repo {
        #[command(subcommand)]
        action: RepoAction,
    },

    /// Manage branches
    Branch {
        #[command(subcommand)]
        action: BranchAction,
    },

    /// Write files
    File {
        #[command(subcommand)]
        action: FileAction,
    },

    /// Show the file or directory at a path
    Contents {
        owner: String,
        repo: String,
        /// Path inside the repository (root if omitted)
        #[arg(default_value = "")]
        path: String,
        /// Branch, tag or commit to read from
        #[arg(long = "ref")]
        git_ref: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage repository topics
    Topics {
        #[command(subcommand)]
        action: TopicsAction,
    },

    /// Manage repository secrets
    Secret {
        #[command(subcommand)]
        action: SecretAction,
    },

    /// Open pull requests
    Pr {
        #[command(subcommand)]
        action: PrAction,
    },

    /// Manage default-branch rulesets
    Ruleset {
        #[command(subcommand)]
        action: RulesetAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[derive(Subcommand)]
pub enum RepoAction {
    /// Show a repository
    Get {
        owner: String,
        name: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Create a public repository initialized with a README
    Create {
        name: String,
        /// Create under this organization instead of the authenticated user
        #[arg(long)]
        org: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum BranchAction {
    /// Create a branch at the tip of the default branch
    Create {
        owner: String,
        repo: String,
        branch: String,
    },
}

#[derive(Subcommand)]
pub enum FileAction {
    /// Create or replace a file on a branch
    Put(FilePut),
}

#[derive(Args)]
#[command(group(ArgGroup::new("source").required(true).args(["from", "content"])))]
pub struct FilePut {
    pub owner: String,
    pub repo: String,
    /// Path inside the repository
    pub path: String,
    /// Branch to commit to
    #[arg(long)]
    pub branch: String,
    /// Commit message
    #[arg(short, long)]
    pub message: String,
    /// Read content from a local file
    #[arg(long, value_name = "FILE")]
    pub from: Option<PathBuf>,
    /// Literal content
    #[arg(long)]
    pub content: Option<String>,
    /// SHA of the blob being replaced (required to overwrite)
    #[arg(long)]
    pub sha: Option<String>,
}

#[derive(Subcommand)]
pub enum TopicsAction {
    /// Replace all topics
    Set {
        owner: String,
        repo: String,
        /// New topics (none clears them)
        topics: Vec<String>,
    },
}

#[derive(Subcommand)]
pub enum SecretAction {
    /// Create or update a secret; the value is read from stdin or a prompt
    Set {
        owner: String,
        repo: String,
        name: String,
    },
}

#[derive(Subcommand)]
pub enum PrAction {
    /// Open a pull request
    Create {
        owner: String,
        repo: String,
        #[arg(long)]
        title: String,
        /// Branch with the changes
        #[arg(long)]
        head: String,
        /// Branch to merge into
        #[arg(long)]
        base: String,
        #[arg(long, default_value = "")]
        body: String,
    },
}

#[derive(Subcommand)]
pub enum RulesetAction {
    /// Create an active ruleset on the default branch
    Create(RulesetCreate),
}

#[derive(Args)]
pub struct RulesetCreate {
    pub owner: String,
    pub repo: String,
    pub name: String,
    /// JSON file with an array of rules
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,
    /// Forbid deleting the branch
    #[arg(long)]
    pub deletion: bool,
    /// Forbid force pushes
    #[arg(long)]
    pub non_fast_forward: bool,
    /// Require linear history
    #[arg(long)]
    pub linear_history: bool,
    /// Require signed commits
    #[arg(long)]
    pub signatures: bool,
    /// Require pull requests with this many approvals
    #[arg(long, value_name = "APPROVALS")]
    pub require_pr: Option<u32>,
}

/// Connection settings shared by every command.
pub struct Session {
    config: Config,
    token: Option<Zeroizing<String>>,
}

impl Session {
    /// Resolve config file, API url override and token.
    pub fn new(
        config_path: Option<PathBuf>,
        api_url: Option<String>,
        token: Option<String>,
    ) -> Result<Self> {
        let mut config = Config::load(config_path.as_deref())?;
        if let Some(url) = api_url {
            config = config.with_api_url(url)?;
        }
        debug!(api_url = %config.api.url, "session configured");
        Ok(Self {
            config,
            token: token.map(Zeroizing::new),
        })
    }

    /// Build an authenticated client.
    pub fn client(&self) -> Result<Client> {
        let token = self.token.as_ref().ok_or(ConfigError::MissingToken)?;
        Client::from_config(&self.config, token)
    }
}

/// Execute a command.
pub fn execute(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Completions { shell } => completions::execute(shell),
        command => {
            let session = Session::new(cli.config, cli.api_url, cli.token)?;
            dispatch(&session, command)
        }
    }
}

fn dispatch(session: &Session, command: Command) -> Result<()> {
    use Command::*;

    match command {
        Repo { action } => match action {
            RepoAction::Get { owner, name, json } => repo::get(session, &owner, &name, json),
            RepoAction::Create { name, org } => repo::create(session, org.as_deref(), &name),
        },
        Branch { action } => match action {
            BranchAction::Create {
                owner,
                repo,
                branch,
            } => branch::create(session, &owner, &repo, &branch),
        },
        File { action } => match action {
            FileAction::Put(args) => file::put(session, &args),
        },
        Contents {
            owner,
            repo,
            path,
            git_ref,
            json,
        } => file::contents(session, &owner, &repo, &path, git_ref.as_deref(), json),
        Topics { action } => match action {
            TopicsAction::Set {
                owner,
                repo,
                topics,
            } => topics::set(session, &owner, &repo, &topics),
        },
        Secret { action } => match action {
            SecretAction::Set { owner, repo, name } => secret::set(session, &owner, &repo, &name),
        },
        Pr { action } => match action {
            PrAction::Create {
                owner,
                repo,
                title,
                head,
                base,
                body,
            } => pr::create(session, &owner, &repo, &title, &head, &base, &body),
        },
        Ruleset { action } => match action {
            RulesetAction::Create(args) => ruleset::create(session, &args),
        },
        Completions { shell } => completions::execute(shell),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_file_put_requires_a_source() {
        let result = Cli::try_parse_from([
            "ghkit", "file", "put", "octo", "hello", "README.md", "--branch", "main", "-m", "docs",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_session_without_token() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let session = Session::new(Some(path), None, None).unwrap();
        assert!(matches!(
            session.client(),
            Err(crate::error::Error::Config(ConfigError::MissingToken))
        ));
    }
}
