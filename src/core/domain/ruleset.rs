//! Branch rulesets.
//!
//! Rulesets created here always target the repository's default branch and
//! are enforced immediately. Existing rulesets are never read or merged.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::core::constants::DEFAULT_BRANCH_PATTERN;

/// A single ruleset rule, e.g. `{"type": "deletion"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Value>,
}

impl Rule {
    /// Any rule the platform understands.
    pub fn new(kind: impl Into<String>, parameters: Option<Value>) -> Self {
        Self {
            kind: kind.into(),
            parameters,
        }
    }

    /// Forbid deleting the branch.
    pub fn deletion() -> Self {
        Self::new("deletion", None)
    }

    /// Forbid force pushes.
    pub fn non_fast_forward() -> Self {
        Self::new("non_fast_forward", None)
    }

    pub fn required_linear_history() -> Self {
        Self::new("required_linear_history", None)
    }

    pub fn required_signatures() -> Self {
        Self::new("required_signatures", None)
    }

    /// Require changes to land through a pull request.
    pub fn pull_request(rule: PullRequestRule) -> Self {
        let parameters: Map<String, Value> = [
            (
                "required_approving_review_count",
                Value::from(rule.required_approving_review_count),
            ),
            (
                "dismiss_stale_reviews_on_push",
                Value::from(rule.dismiss_stale_reviews_on_push),
            ),
            (
                "require_code_owner_review",
                Value::from(rule.require_code_owner_review),
            ),
            (
                "require_last_push_approval",
                Value::from(rule.require_last_push_approval),
            ),
            (
                "required_review_thread_resolution",
                Value::from(rule.required_review_thread_resolution),
            ),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        Self::new("pull_request", Some(Value::Object(parameters)))
    }
}

/// Parameters of the `pull_request` rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullRequestRule {
    pub required_approving_review_count: u32,
    pub dismiss_stale_reviews_on_push: bool,
    pub require_code_owner_review: bool,
    pub require_last_push_approval: bool,
    pub required_review_thread_resolution: bool,
}

impl Default for PullRequestRule {
    fn default() -> Self {
        Self {
            required_approving_review_count: 1,
            dismiss_stale_reviews_on_push: true,
            require_code_owner_review: false,
            require_last_push_approval: false,
            required_review_thread_resolution: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RulesetTarget {
    Branch,
    Tag,
    Push,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Enforcement {
    Disabled,
    Active,
    Evaluate,
}

/// Ref-name include/exclude patterns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefNameCondition {
    pub include: Vec<String>,
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesetConditions {
    pub ref_name: RefNameCondition,
}

/// Body for ruleset creation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewRuleset {
    pub name: String,
    pub target: RulesetTarget,
    pub enforcement: Enforcement,
    pub conditions: RulesetConditions,
    pub rules: Vec<Rule>,
}

impl NewRuleset {
    /// An active branch ruleset scoped to the default branch.
    pub fn default_branch(name: impl Into<String>, rules: Vec<Rule>) -> Self {
        Self {
            name: name.into(),
            target: RulesetTarget::Branch,
            enforcement: Enforcement::Active,
            conditions: RulesetConditions {
                ref_name: RefNameCondition {
                    include: vec![DEFAULT_BRANCH_PATTERN.to_string()],
                    exclude: Vec::new(),
                },
            },
            rules,
        }
    }
}

/// A created ruleset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ruleset {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub target: Option<RulesetTarget>,
    pub enforcement: Enforcement,
    #[serde(default)]
    pub conditions: Option<RulesetConditions>,
    #[serde(default)]
    pub rules: Vec<Rule>,
}
