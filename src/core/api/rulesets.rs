//! Branch rulesets.

use tracing::debug;

use super::{Client, Request, Transport};
use crate::core::domain::{NewRuleset, Rule, Ruleset};
use crate::error::{Error, Result};

impl<T: Transport> Client<T> {
    /// Create an active ruleset named `name` on the default branch of
    /// `owner/repo`.
    ///
    /// Each call creates a new ruleset; existing ones are left untouched.
    pub fn create_ruleset(
        &self,
        owner: &str,
        repo: &str,
        name: &str,
        rules: Vec<Rule>,
    ) -> Result<Ruleset> {
        let _span = self.span.enter();
        debug!(owner, repo, ruleset = name, rules = rules.len(), "creating repository ruleset");

        let resource = format!("ruleset {}/{}/{}", owner, repo, name);
        let request = Request::post(
            format!("/repos/{}/{}/rulesets", owner, repo),
            serde_json::to_value(NewRuleset::default_branch(name, rules))?,
        );
        self.call(&resource, &request)
            .inspect_err(|e| debug!(owner, repo, ruleset = name, error = %e, "error creating repository ruleset"))
            .map_err(Error::from)
    }
}
