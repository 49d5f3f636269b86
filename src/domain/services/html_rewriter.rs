//! HTML rewrite rules
//!
//! Rewriting a staged page is an ordered list of literal substitutions. Each
//! rule replaces the first occurrence of its pattern and is a no-op when the
//! pattern is absent; rules never depend on each other's outcome.

use serde::{Deserialize, Serialize};

use crate::domain::entities::built_file_name;

/// Default non-minified loader script reference
pub const DEFAULT_LOADER: &str = "requirejs/require.js";
/// Default minified loader script reference
pub const DEFAULT_MINIFIED_LOADER: &str = "requirejs/require.min.js";

/// One literal substitution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRule {
    pub pattern: String,
    pub replacement: String,
}

impl RewriteRule {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }

    /// Apply to `text`. Returns the new text and whether the pattern matched.
    pub fn apply(&self, text: &str) -> (String, bool) {
        if self.pattern.is_empty() || !text.contains(&self.pattern) {
            return (text.to_string(), false);
        }
        (text.replacen(&self.pattern, &self.replacement, 1), true)
    }
}

/// Ordered rule set for one target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteRules {
    rules: Vec<RewriteRule>,
}

impl RewriteRules {
    pub fn new(rules: Vec<RewriteRule>) -> Self {
        Self { rules }
    }

    /// The built-in rules for a target:
    /// 1. `require(['<name>.js']);` to the built bundle
    /// 2. `require(["<name>.js"]);` to the built bundle
    /// 3. loader script to its minified variant
    pub fn for_target(target_name: &str, loader: &str, minified_loader: &str) -> Self {
        let built = format!("require([\"{}\"]);", built_file_name(target_name));
        Self::new(vec![
            RewriteRule::new(format!("require(['{}.js']);", target_name), built.clone()),
            RewriteRule::new(format!("require([\"{}.js\"]);", target_name), built),
            RewriteRule::new(loader, minified_loader),
        ])
    }

    /// Append extra rules after the existing ones
    pub fn with_extra(mut self, extra: &[RewriteRule]) -> Self {
        self.rules.extend_from_slice(extra);
        self
    }

    /// Apply every rule in order
    pub fn apply(&self, text: &str) -> RewriteOutcome {
        let mut current = text.to_string();
        let mut applied = Vec::new();
        for (index, rule) in self.rules.iter().enumerate() {
            let (next, matched) = rule.apply(&current);
            if matched {
                applied.push(index);
            }
            current = next;
        }
        RewriteOutcome {
            text: current,
            applied,
        }
    }
}

/// Result of applying a rule set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub text: String,
    /// Indices of rules whose pattern matched
    pub applied: Vec<usize>,
}

impl RewriteOutcome {
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}
