//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// An API root nothing listens on; requests fail fast with no response.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";

impl Test {
    /// Create a ghkit command isolated from the user's environment.
    ///
    /// HOME points at the temporary home, so the default config file is
    /// absent, and no token or API override is inherited.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("ghkit").expect("failed to find ghkit binary");
        cmd.env("HOME", self.home.path());
        cmd.env("USERPROFILE", self.home.path());
        cmd.env("XDG_CONFIG_HOME", self.home.path().join(".config"));
        cmd.env("NO_COLOR", "1");
        cmd.env_remove("GITHUB_TOKEN");
        cmd.env_remove("GHKIT_API_URL");
        cmd.env_remove("GHKIT_LOG");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// A command with a token and an API root that refuses connections.
    pub fn offline_cmd(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.env("GITHUB_TOKEN", "ghp_test");
        cmd.env("GHKIT_API_URL", UNREACHABLE_API);
        cmd
    }

    /// Run with the given args.
    pub fn run(&self, args: &[&str]) -> Output {
        self.cmd().args(args).output().expect("failed to run ghkit")
    }

    /// Run offline with the given args and stdin.
    pub fn run_offline(&self, args: &[&str], stdin: &str) -> Output {
        self.offline_cmd()
            .args(args)
            .write_stdin(stdin)
            .output()
            .expect("failed to run ghkit")
    }
}
