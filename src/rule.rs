use crate::constants::domain;
use crate::origin::ResolvedOrigin;

/// Hosts come out of the origin resolver already ASCII-lowercased, so an
/// ASCII comparison covers ASCII-configured domains; non-ASCII domains
/// fall back to Unicode lowercasing.
fn domain_matches_host(domain: &str, host: &str) -> bool {
    if domain.is_ascii() {
        domain.eq_ignore_ascii_case(host)
    } else {
        domain.to_lowercase() == host.to_lowercase()
    }
}

/// The policy a rule applies once it matches.
///
/// Only `ALLOW` carries behavior. A matched rule with any other policy
/// value still wins the scan (later rules are never consulted) but applies
/// no headers and never short-circuits; there is deliberately no block
/// semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulePolicy {
    Allow,
    Unrecognized(String),
}

impl RulePolicy {
    /// Parses the configured policy string. The comparison is exact;
    /// `"allow"` is not `"ALLOW"`.
    pub fn parse(value: &str) -> Self {
        if value == "ALLOW" {
            Self::Allow
        } else {
            Self::Unrecognized(value.to_owned())
        }
    }

    pub fn is_allow(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// A single configured CORS rule: a target domain plus the header policy
/// to apply when it matches. Immutable once loaded into a
/// [`RuleSet`](crate::RuleSet).
#[derive(Debug, Clone)]
pub struct CorsRule {
    /// Exact hostname to match, or `"*"` to match every request.
    pub domain: String,
    pub policy: RulePolicy,
    /// Only origins using the `https` scheme satisfy this rule.
    pub require_https: bool,
    /// Raw comma-separated header names, emitted verbatim.
    pub expose_headers: Option<String>,
    /// Preflight only; seconds a preflight response may be cached.
    pub max_age: Option<u32>,
    pub allow_credentials: Option<bool>,
    /// Preflight only; raw comma-separated method list, emitted verbatim.
    pub allow_methods: Option<String>,
    /// Preflight only; raw comma-separated header list, emitted verbatim.
    pub allow_headers: Option<String>,
}

impl CorsRule {
    pub fn new(domain: impl Into<String>, policy: RulePolicy) -> Self {
        Self {
            domain: domain.into(),
            policy,
            require_https: false,
            expose_headers: None,
            max_age: None,
            allow_credentials: None,
            allow_methods: None,
            allow_headers: None,
        }
    }

    pub fn allow(domain: impl Into<String>) -> Self {
        Self::new(domain, RulePolicy::Allow)
    }

    pub fn is_wildcard(&self) -> bool {
        self.domain == domain::WILDCARD
    }

    /// Whether this rule matches the resolved origin.
    ///
    /// Branch order is part of the contract:
    /// 1. a wildcard domain matches unconditionally, including requests
    ///    with no `Origin` header at all;
    /// 2. `require_https` rejects non-https origins before the domain is
    ///    even compared;
    /// 3. otherwise a valid origin matches iff its host equals the
    ///    configured domain, case-insensitively;
    /// 4. no valid origin, no match.
    pub fn is_match(&self, origin: &ResolvedOrigin) -> bool {
        if self.is_wildcard() {
            return true;
        }
        if self.require_https && !origin.is_https() {
            return false;
        }
        match origin.host() {
            Some(host) => domain_matches_host(&self.domain, host),
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "rule_test.rs"]
mod rule_test;
