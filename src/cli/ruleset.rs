//! Ruleset commands.

use std::fs;
use std::path::Path;

use crate::cli::{output, RulesetCreate, Session};
use crate::core::domain::{PullRequestRule, Rule};
use crate::error::{Result, ValidationError};

/// Create a default-branch ruleset from a rules file and/or flags.
pub fn create(session: &Session, args: &RulesetCreate) -> Result<()> {
    let rules = collect_rules(args)?;

    let client = session.client()?;
    let ruleset = client.create_ruleset(&args.owner, &args.repo, &args.name, rules)?;

    output::success(&format!(
        "created ruleset {} (id {}) with {} rule(s)",
        output::name(&ruleset.name),
        ruleset.id,
        ruleset.rules.len()
    ));
    for rule in &ruleset.rules {
        output::list_item(&rule.kind);
    }
    Ok(())
}

/// Rules from `--rules` first, then one per flag.
pub fn collect_rules(args: &RulesetCreate) -> Result<Vec<Rule>> {
    let mut rules = match &args.rules {
        Some(path) => load_rules(path)?,
        None => Vec::new(),
    };

    if args.deletion {
        rules.push(Rule::deletion());
    }
    if args.non_fast_forward {
        rules.push(Rule::non_fast_forward());
    }
    if args.linear_history {
        rules.push(Rule::required_linear_history());
    }
    if args.signatures {
        rules.push(Rule::required_signatures());
    }
    if let Some(approvals) = args.require_pr {
        rules.push(Rule::pull_request(PullRequestRule {
            required_approving_review_count: approvals,
            ..PullRequestRule::default()
        }));
    }

    if rules.is_empty() {
        return Err(ValidationError::InvalidRules(
            "no rules given; pass --rules FILE or a rule flag".to_string(),
        )
        .into());
    }
    Ok(rules)
}

/// Read a JSON array of rules.
pub fn load_rules(path: &Path) -> Result<Vec<Rule>> {
    let contents = fs::read_to_string(path)?;
    parse_rules(&contents)
        .map_err(|reason| ValidationError::InvalidRules(format!("{}: {}", path.display(), reason)).into())
}

fn parse_rules(contents: &str) -> std::result::Result<Vec<Rule>, String> {
    let rules: Vec<Rule> = serde_json::from_str(contents).map_err(|e| e.to_string())?;
    if let Some(rule) = rules.iter().find(|r| r.kind.trim().is_empty()) {
        return Err(format!("rule with empty type: {:?}", rule));
    }
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn args() -> RulesetCreate {
        RulesetCreate {
            owner: "octo".into(),
            repo: "hello".into(),
            name: "protect".into(),
            rules: None,
            deletion: false,
            non_fast_forward: false,
            linear_history: false,
            signatures: false,
            require_pr: None,
        }
    }

    #[test]
    fn test_no_rules_is_rejected() {
        let err = collect_rules(&args()).unwrap_err();
        assert!(err.to_string().contains("no rules given"));
    }

    #[test]
    fn test_flags_become_rules() {
        let mut args = args();
        args.deletion = true;
        args.require_pr = Some(2);

        let rules = collect_rules(&args).unwrap();
        let kinds: Vec<_> = rules.iter().map(|r| r.kind.as_str()).collect();
        assert_eq!(kinds, vec!["deletion", "pull_request"]);
        assert_eq!(
            rules[1].parameters.as_ref().unwrap()["required_approving_review_count"],
            2
        );
    }

    #[test]
    fn test_rules_file_then_flags() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        fs::write(&path, r#"[{"type":"required_signatures"}]"#).unwrap();

        let mut args = args();
        args.rules = Some(path);
        args.non_fast_forward = true;

        let kinds: Vec<_> = collect_rules(&args)
            .unwrap()
            .into_iter()
            .map(|r| r.kind)
            .collect();
        assert_eq!(kinds, vec!["required_signatures", "non_fast_forward"]);
    }

    #[test]
    fn test_malformed_rules_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.json");
        fs::write(&path, r#"{"type":"deletion"}"#).unwrap();

        let err = load_rules(&path).unwrap_err();
        assert!(err.to_string().contains("rules.json"));
    }

    #[test]
    fn test_missing_rules_file() {
        assert!(load_rules(&PathBuf::from("/nonexistent/rules.json")).is_err());
    }

    #[test]
    fn test_empty_rule_type() {
        assert!(parse_rules(r#"[{"type":" "}]"#).is_err());
    }
}
