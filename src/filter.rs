use crate::constants::{domain, header, method, status};
use crate::context::RequestContext;
use crate::headers::{HeaderCollection, Headers};
use crate::result::{CorsDecision, PreflightResult, SimpleResult};
use crate::rule::CorsRule;
use crate::ruleset::RuleSet;

/// Evaluates inbound requests against an ordered [`RuleSet`] and produces
/// the header mutations to apply, first match wins.
pub struct CorsFilter {
    rules: RuleSet,
}

impl CorsFilter {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn check(&self, request: &RequestContext<'_>) -> CorsDecision {
        let origin = request.resolved_origin();
        match self.rules.first_match(origin) {
            Some(rule) => Self::apply(rule, request),
            None => CorsDecision::NotApplicable,
        }
    }

    fn apply(rule: &CorsRule, request: &RequestContext<'_>) -> CorsDecision {
        // A matched rule forecloses later rules even when its policy
        // applies nothing; the request continues with no headers set.
        if !rule.policy.is_allow() {
            return CorsDecision::Simple(SimpleResult {
                headers: Headers::new(),
            });
        }

        let mut headers = HeaderCollection::new();

        if rule.is_wildcard() {
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, domain::WILDCARD);
        } else {
            // A non-wildcard match implies the raw header was present and
            // parsed; if that invariant ever broke, skip rather than emit
            // an empty allow-origin.
            let Some(origin) = request.origin else {
                return CorsDecision::NotApplicable;
            };
            // Echo the origin string as received, not the configured
            // domain, and vary on Origin for cache correctness.
            headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
            headers.add_vary(header::ORIGIN);
        }

        if let Some(expose) = non_blank(rule.expose_headers.as_deref()) {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, expose);
        }

        if let Some(credentials) = rule.allow_credentials {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                if credentials { "true" } else { "false" },
            );
        }

        // Preflight detection is an exact match on the uppercase method.
        if request.method == method::OPTIONS {
            if let Some(methods) = non_blank(rule.allow_methods.as_deref()) {
                headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, methods);
            }
            if let Some(allowed) = non_blank(rule.allow_headers.as_deref()) {
                headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, allowed);
            }
            if let Some(max_age) = rule.max_age {
                headers.push(header::ACCESS_CONTROL_MAX_AGE, max_age.to_string());
            }

            return CorsDecision::Preflight(PreflightResult {
                headers: headers.into_headers(),
                status: status::NO_CONTENT,
                status_text: status::NO_CONTENT_TEXT,
            });
        }

        CorsDecision::Simple(SimpleResult {
            headers: headers.into_headers(),
        })
    }
}

/// Blank or whitespace-only optional strings are treated as absent; the
/// configured value is otherwise emitted verbatim.
fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;
