#![allow(dead_code)]

use cors_rules::constants::method;
use cors_rules::{CorsDecision, CorsFilter, CorsRule, RequestContext, RulePolicy, RuleSet};

pub struct RuleBuilder {
    rule: CorsRule,
}

impl RuleBuilder {
    pub fn policy(mut self, value: &str) -> Self {
        self.rule.policy = RulePolicy::parse(value);
        self
    }

    pub fn require_https(mut self, enabled: bool) -> Self {
        self.rule.require_https = enabled;
        self
    }

    pub fn expose_headers(mut self, value: impl Into<String>) -> Self {
        self.rule.expose_headers = Some(value.into());
        self
    }

    pub fn max_age(mut self, seconds: u32) -> Self {
        self.rule.max_age = Some(seconds);
        self
    }

    pub fn allow_credentials(mut self, enabled: bool) -> Self {
        self.rule.allow_credentials = Some(enabled);
        self
    }

    pub fn allow_methods(mut self, value: impl Into<String>) -> Self {
        self.rule.allow_methods = Some(value.into());
        self
    }

    pub fn allow_headers(mut self, value: impl Into<String>) -> Self {
        self.rule.allow_headers = Some(value.into());
        self
    }

    pub fn build(self) -> CorsRule {
        self.rule
    }
}

pub fn rule(domain: impl Into<String>) -> RuleBuilder {
    RuleBuilder {
        rule: CorsRule::allow(domain),
    }
}

pub fn filter<I>(rules: I) -> CorsFilter
where
    I: IntoIterator<Item = CorsRule>,
{
    CorsFilter::new(RuleSet::new(rules.into_iter().collect()).expect("valid rule set"))
}

pub struct SimpleRequestBuilder {
    method: String,
    origin: Option<String>,
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self {
            method: method::GET.into(),
            origin: None,
        }
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn check(self, filter: &CorsFilter) -> CorsDecision {
        let ctx = RequestContext::new(&self.method, self.origin.as_deref());
        filter.check(&ctx)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn check(self, filter: &CorsFilter) -> CorsDecision {
        let ctx = RequestContext::new(method::OPTIONS, self.origin.as_deref())
            .with_preflight_headers(self.request_method.as_deref(), self.request_headers.as_deref());
        filter.check(&ctx)
    }
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
