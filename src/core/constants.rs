//! Constants used throughout ghkit.
//!
//! Centralizes platform URLs, headers and magic strings.

/// Default REST API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Media type requested on every call.
pub const ACCEPT: &str = "application/vnd.github+json";

/// Header pinning the REST API version.
pub const API_VERSION_HEADER: &str = "x-github-api-version";

/// REST API version sent with every call.
pub const API_VERSION: &str = "2022-11-28";

/// Prefix for branch references.
pub const BRANCH_REF_PREFIX: &str = "refs/heads/";

/// Ruleset ref-name pattern resolved by the platform to the default branch.
pub const DEFAULT_BRANCH_PATTERN: &str = "~DEFAULT_BRANCH";

/// Secret names the platform reserves for itself.
pub const RESERVED_SECRET_PREFIX: &str = "GITHUB_";

/// Config directory name under the user config dir.
pub const CONFIG_DIR: &str = "ghkit";

/// Config file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "GHKIT_LOG";

/// Default user agent, `ghkit/<version>`.
pub fn default_user_agent() -> String {
    format!("ghkit/{}", env!("CARGO_PKG_VERSION"))
}
