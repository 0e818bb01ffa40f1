//! Domain types exchanged with the platform.

mod content;
mod pull_request;
mod reference;
mod repository;
mod ruleset;
mod secret;

pub use content::{Commit, ContentEntry, Contents, EntryKind, FileCommit, FileWrite};
pub use pull_request::{NewPullRequest, PullRequest, PullRequestBranch};
pub use reference::{branch_ref, GitObject, NewReference, Reference};
pub use repository::{NewRepository, Repository, Topics};
pub use ruleset::{
    Enforcement, NewRuleset, PullRequestRule, RefNameCondition, Rule, Ruleset, RulesetConditions,
    RulesetTarget,
};
pub use secret::{EncryptedSecret, RepositoryPublicKey};
