use crate::headers::Headers;

/// Headers applied to a non-preflight request; processing continues into
/// the rest of the host pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleResult {
    pub headers: Headers,
}

/// Terminal preflight response. The host must set the status and status
/// text, write the headers, and end the response with no body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreflightResult {
    pub headers: Headers,
    pub status: u16,
    pub status_text: &'static str,
}

/// Decision returned for each inbound request.
///
/// Short-circuiting a preflight is expressed as a value rather than by
/// terminating the transport from inside policy code, so the decision
/// logic stays unit-testable without a live connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsDecision {
    Simple(SimpleResult),
    Preflight(PreflightResult),
    /// No rule matched; the request proceeds unmodified.
    NotApplicable,
}
