use crate::origin::ResolvedOrigin;
use once_cell::unsync::OnceCell;

/// Per-request view handed to the filter by the host.
///
/// The parsed origin is memoized on the context, so however many rules
/// inspect it during a scan the header is parsed at most once. The context
/// is transient; create one per request and discard it afterwards.
#[derive(Debug, Clone)]
pub struct RequestContext<'a> {
    pub method: &'a str,
    pub origin: Option<&'a str>,
    pub access_control_request_method: Option<&'a str>,
    pub access_control_request_headers: Option<&'a str>,
    resolved_origin: OnceCell<ResolvedOrigin>,
}

impl<'a> RequestContext<'a> {
    pub fn new(method: &'a str, origin: Option<&'a str>) -> Self {
        Self {
            method,
            origin,
            access_control_request_method: None,
            access_control_request_headers: None,
            resolved_origin: OnceCell::new(),
        }
    }

    /// Attaches the preflight request headers. They are carried for host
    /// middleware to inspect; the filter itself does not cross-check them
    /// against the configured allow-lists.
    pub fn with_preflight_headers(
        mut self,
        request_method: Option<&'a str>,
        request_headers: Option<&'a str>,
    ) -> Self {
        self.access_control_request_method = request_method;
        self.access_control_request_headers = request_headers;
        self
    }

    pub fn resolved_origin(&self) -> &ResolvedOrigin {
        self.resolved_origin
            .get_or_init(|| ResolvedOrigin::parse(self.origin))
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
