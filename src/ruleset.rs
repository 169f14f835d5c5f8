use crate::origin::ResolvedOrigin;
use crate::rule::CorsRule;
use std::collections::HashSet;
use thiserror::Error;

/// Domains are compared case-insensitively when matching, so the identity
/// key is the lowercased domain.
fn identity_key(domain: &str) -> String {
    if domain.is_ascii() {
        domain.to_ascii_lowercase()
    } else {
        domain.to_lowercase()
    }
}

/// Errors produced while loading a [`RuleSet`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleSetError {
    #[error("rule at position {index} has an empty domain")]
    EmptyDomain { index: usize },
    #[error("domain {domain:?} is configured more than once; domain is the rule identity key")]
    DuplicateDomain { domain: String },
}

/// An ordered, immutable collection of CORS rules.
///
/// Rule order is semantically significant: evaluation always takes the
/// first positional match, so a wildcard rule placed before specific-domain
/// rules shadows them. Ordering is the configuration author's concern; the
/// set only enforces that domains are unique.
///
/// Written once at startup and safe for unsynchronized concurrent reads.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<CorsRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<CorsRule>) -> Result<Self, RuleSetError> {
        let mut seen = HashSet::with_capacity(rules.len());
        for (index, rule) in rules.iter().enumerate() {
            if rule.domain.trim().is_empty() {
                return Err(RuleSetError::EmptyDomain { index });
            }
            if !seen.insert(identity_key(&rule.domain)) {
                return Err(RuleSetError::DuplicateDomain {
                    domain: rule.domain.clone(),
                });
            }
        }

        Ok(Self { rules })
    }

    /// First rule, in configured order, whose predicate accepts the origin.
    pub fn first_match(&self, origin: &ResolvedOrigin) -> Option<&CorsRule> {
        self.rules.iter().find(|rule| rule.is_match(origin))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CorsRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
#[path = "ruleset_test.rs"]
mod ruleset_test;
