//! Keyword rule table
//!
//! A `TechRule` maps field matches (language token, topic, name or description
//! keyword) to one canonical technology label. Rules are ordered; the
//! classifier emits labels in table order. The table is static configuration:
//! built once at startup, never mutated.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rule table validation error
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    /// A rule has no label to emit
    #[error("rule #{index} has an empty label")]
    EmptyLabel { index: usize },

    /// A rule can never match anything
    #[error("rule \"{label}\" has no languages and no keywords")]
    NoMatchTokens { label: String },
}

/// One classification rule
///
/// A repository matches the rule when its primary language equals one of
/// `languages` (case-insensitive exact), or one of `keywords` appears in its
/// topic set (case-insensitive exact) or as a case-insensitive substring of
/// its name or description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TechRule {
    /// Canonical display label, e.g. "Next.js"
    pub label: String,

    /// Language tokens, lowercase
    #[serde(default)]
    pub languages: Vec<String>,

    /// Keywords, lowercase; several keywords may feed the same label
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl TechRule {
    pub fn new(label: impl Into<String>, languages: &[&str], keywords: &[&str]) -> Self {
        Self {
            label: label.into(),
            languages: languages.iter().map(|s| s.to_string()).collect(),
            keywords: keywords.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Ordered, validated rule table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSet {
    rules: Vec<TechRule>,
}

impl RuleSet {
    /// Build a rule set, normalizing tokens and rejecting unusable rules
    ///
    /// Language tokens and keywords are lowercased; empty tokens are dropped.
    /// A rule with an empty label, or with no tokens left after cleanup, is an
    /// error: it could never contribute a label.
    pub fn new(rules: Vec<TechRule>) -> Result<Self, RuleError> {
        let mut cleaned = Vec::with_capacity(rules.len());

        for (index, rule) in rules.into_iter().enumerate() {
            let label = rule.label.trim().to_string();
            if label.is_empty() {
                return Err(RuleError::EmptyLabel { index });
            }

            let languages = normalize(rule.languages);
            let keywords = normalize(rule.keywords);
            if languages.is_empty() && keywords.is_empty() {
                return Err(RuleError::NoMatchTokens { label });
            }

            cleaned.push(TechRule {
                label,
                languages,
                keywords,
            });
        }

        Ok(Self { rules: cleaned })
    }

    /// Iterate rules in table order
    pub fn iter(&self) -> std::slice::Iter<'_, TechRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All labels in table order, duplicates removed
    ///
    /// This is the universe of filter toggles offered to the viewer.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::with_capacity(self.rules.len());
        for rule in &self.rules {
            if !labels.contains(&rule.label.as_str()) {
                labels.push(rule.label.as_str());
            }
        }
        labels
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        default_rules()
    }
}

fn normalize(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Built-in rule table
///
/// Covers the common web/backend stacks a portfolio is likely to mix. The
/// order is the display order of the filter bar.
pub fn default_rules() -> RuleSet {
    RuleSet::new(vec![
        TechRule::new("React", &["javascript"], &["react", "reactjs"]),
        TechRule::new("Next.js", &[], &["nextjs", "next.js", "next"]),
        TechRule::new("Jekyll", &["ruby"], &["jekyll"]),
        TechRule::new("HTML", &["html"], &["html"]),
        TechRule::new("Astro", &["astro"], &["astro"]),
        TechRule::new("TypeScript", &["typescript"], &["typescript"]),
        TechRule::new("TailwindCSS", &["tailwindcss"], &["tailwindcss", "tailwind"]),
        TechRule::new("Vue", &["vue"], &["vue", "vuejs"]),
        TechRule::new("Svelte", &["svelte"], &["svelte"]),
        TechRule::new("Angular", &[], &["angular"]),
        TechRule::new("Node.js", &[], &["nodejs", "express"]),
        TechRule::new("GraphQL", &[], &["graphql"]),
        TechRule::new("Sass", &["scss", "sass"], &["sass"]),
        TechRule::new("Bootstrap", &[], &["bootstrap"]),
        TechRule::new("Python", &["python"], &["django", "flask"]),
        TechRule::new("Rust", &["rust"], &["rustlang"]),
        TechRule::new("Go", &["go"], &["golang"]),
        TechRule::new("Docker", &["dockerfile"], &["docker", "kubernetes"]),
        TechRule::new("Flutter", &["dart"], &["flutter"]),
        TechRule::new("Swift", &["swift"], &["swiftui"]),
    ])
    .expect("built-in rule table is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_are_valid() {
        let rules = RuleSet::default();
        assert!(!rules.is_empty());
        // Display order starts with the original portfolio's filter set
        assert_eq!(rules.labels()[0], "React");
        assert_eq!(rules.labels()[1], "Next.js");
    }

    #[test]
    fn test_labels_deduplicated_in_order() {
        let rules = RuleSet::new(vec![
            TechRule::new("Next.js", &[], &["nextjs"]),
            TechRule::new("React", &[], &["react"]),
            TechRule::new("Next.js", &[], &["next"]),
        ])
        .unwrap();

        assert_eq!(rules.labels(), vec!["Next.js", "React"]);
        assert_eq!(rules.len(), 3);
    }

    #[test]
    fn test_empty_label_rejected() {
        let err = RuleSet::new(vec![TechRule::new("  ", &[], &["react"])]).unwrap_err();
        assert_eq!(err, RuleError::EmptyLabel { index: 0 });
    }

    #[test]
    fn test_rule_without_tokens_rejected() {
        let err = RuleSet::new(vec![TechRule::new("React", &[], &["", "  "])]).unwrap_err();
        assert_eq!(
            err,
            RuleError::NoMatchTokens {
                label: "React".to_string()
            }
        );
    }

    #[test]
    fn test_tokens_normalized_to_lowercase() {
        let rules = RuleSet::new(vec![TechRule::new("React", &["JavaScript"], &[" React "])]).unwrap();
        let rule = rules.iter().next().unwrap();
        assert_eq!(rule.languages, vec!["javascript"]);
        assert_eq!(rule.keywords, vec!["react"]);
    }

    #[test]
    fn test_rule_deserializes_from_toml() {
        let toml = r#"
            label = "Elixir"
            languages = ["elixir"]
            keywords = ["phoenix"]
        "#;
        let rule: TechRule = toml::from_str(toml).unwrap();
        assert_eq!(rule.label, "Elixir");
        assert_eq!(rule.languages, vec!["elixir"]);
    }

    #[test]
    fn test_rule_deserializes_with_defaults() {
        let rule: TechRule = toml::from_str(r#"label = "Zig""#).unwrap();
        assert!(rule.languages.is_empty());
        assert!(rule.keywords.is_empty());
        // ...and is rejected by RuleSet::new
        assert!(RuleSet::new(vec![rule]).is_err());
    }
}
