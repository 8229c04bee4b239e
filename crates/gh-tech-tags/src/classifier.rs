//! Technology classifier
//!
//! Derives an ordered set of technology labels from a repository record and a
//! rule table. Pure function: no I/O, deterministic for a given (repo, rules)
//! pair.

use std::collections::HashSet;

use crate::rules::{RuleSet, TechRule};
use crate::types::RepoRecord;

/// Classify a repository against a rule table
///
/// Rules are evaluated independently in table order; a repository may receive
/// any number of labels, including zero. Each label appears at most once in
/// the output even when several rules or several fields of one rule match it
/// (ordered-set accumulation: output vector plus membership set).
///
/// Missing description, language or topics degrade to "no match" for the
/// affected branches; the function never panics on partial records.
pub fn classify(repo: &RepoRecord, rules: &RuleSet) -> Vec<String> {
    let name = repo.name.to_lowercase();
    let description = repo
        .description
        .as_deref()
        .unwrap_or_default()
        .to_lowercase();
    let language = repo.language.as_deref().unwrap_or_default().to_lowercase();
    let topics: Vec<String> = repo.topics.iter().map(|t| t.to_lowercase()).collect();

    let mut labels: Vec<String> = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();

    for rule in rules.iter() {
        if !rule_matches(rule, &language, &topics, &name, &description) {
            continue;
        }
        if seen.insert(rule.label.as_str()) {
            labels.push(rule.label.clone());
        }
    }

    labels
}

fn rule_matches(
    rule: &TechRule,
    language: &str,
    topics: &[String],
    name: &str,
    description: &str,
) -> bool {
    if !language.is_empty() && rule.languages.iter().any(|l| l == language) {
        return true;
    }

    rule.keywords.iter().any(|keyword| {
        topics.iter().any(|topic| topic == keyword)
            || name.contains(keyword.as_str())
            || (!description.is_empty() && description.contains(keyword.as_str()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::TechRule;
    use chrono::Utc;

    fn repo(name: &str, description: Option<&str>, language: Option<&str>, topics: &[&str]) -> RepoRecord {
        RepoRecord {
            id: 1,
            name: name.to_string(),
            description: description.map(|s| s.to_string()),
            language: language.map(|s| s.to_string()),
            topics: topics.iter().map(|s| s.to_string()).collect(),
            created_at: Utc::now(),
            fork: false,
            private: false,
            stargazers_count: 0,
            html_url: String::new(),
            homepage: None,
        }
    }

    fn rules() -> RuleSet {
        RuleSet::new(vec![
            TechRule::new("React", &["javascript"], &["react"]),
            TechRule::new("Next.js", &[], &["next", "nextjs"]),
            TechRule::new("Jekyll", &["ruby"], &["jekyll"]),
        ])
        .unwrap()
    }

    #[test]
    fn test_label_emitted_once_despite_multiple_matching_conditions() {
        // language==javascript AND topic "react" both hit the React rule;
        // name contains "next" hits Next.js
        let repo = repo("my-next-app", None, Some("JavaScript"), &["react"]);
        assert_eq!(classify(&repo, &rules()), vec!["React", "Next.js"]);
    }

    #[test]
    fn test_detects_from_topics() {
        let repo = repo("site", None, None, &["jekyll"]);
        assert_eq!(classify(&repo, &rules()), vec!["Jekyll"]);
    }

    #[test]
    fn test_detects_from_name_substring() {
        let repo = repo("react-playground", None, None, &[]);
        assert_eq!(classify(&repo, &rules()), vec!["React"]);
    }

    #[test]
    fn test_detects_from_description_substring() {
        let repo = repo("site", Some("Built with Next.js"), None, &[]);
        assert_eq!(classify(&repo, &rules()), vec!["Next.js"]);
    }

    #[test]
    fn test_language_match_is_exact_and_case_insensitive() {
        let repo = repo("site", None, Some("RUBY"), &[]);
        assert_eq!(classify(&repo, &rules()), vec!["Jekyll"]);

        // "javascripting" is not "javascript"
        let repo = repo("site", None, Some("javascripting"), &[]);
        assert!(classify(&repo, &rules()).is_empty());
    }

    #[test]
    fn test_topic_match_is_exact() {
        // topic "reactjs" is not the keyword "react" for the topic branch,
        // and topics are not substring-matched
        let rules = RuleSet::new(vec![TechRule::new("React", &[], &["react"])]).unwrap();
        let r = repo("site", None, None, &["reactjs"]);
        assert!(classify(&r, &rules).is_empty());
    }

    #[test]
    fn test_missing_fields_never_panic() {
        let repo = repo("bare", None, None, &[]);
        assert!(classify(&repo, &rules()).is_empty());
    }

    #[test]
    fn test_output_preserves_rule_table_order() {
        let repo = repo("jekyll-react-next", None, None, &[]);
        assert_eq!(classify(&repo, &rules()), vec!["React", "Next.js", "Jekyll"]);
    }

    #[test]
    fn test_duplicate_label_across_rules_suppressed() {
        let rules = RuleSet::new(vec![
            TechRule::new("Next.js", &[], &["next"]),
            TechRule::new("Next.js", &[], &["nextjs"]),
        ])
        .unwrap();
        let repo = repo("next-app", None, None, &["nextjs"]);
        assert_eq!(classify(&repo, &rules), vec!["Next.js"]);
    }

    #[test]
    fn test_default_table_scenario() {
        let repo = repo("my-next-app", None, Some("JavaScript"), &["react"]);
        let labels = classify(&repo, &RuleSet::default());
        assert_eq!(labels, vec!["React", "Next.js"]);
    }
}
