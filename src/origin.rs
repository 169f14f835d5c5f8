use crate::constants::scheme;
use url::Url;

/// Outcome of parsing the `Origin` request header.
///
/// An unparsable or missing header degrades to [`ResolvedOrigin::Absent`],
/// which never compares equal to a real origin and therefore fails every
/// non-wildcard rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedOrigin {
    /// Syntactically valid absolute origin; only scheme and host are kept.
    Valid { scheme: String, host: String },
    /// Missing, empty, or malformed `Origin` header.
    Absent,
}

impl ResolvedOrigin {
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Absent;
        };
        if raw.trim().is_empty() {
            return Self::Absent;
        }

        match Url::parse(raw) {
            Ok(url) => match url.host_str() {
                Some(host) => Self::Valid {
                    scheme: url.scheme().to_string(),
                    host: host.to_string(),
                },
                None => Self::Absent,
            },
            Err(_) => Self::Absent,
        }
    }

    pub fn is_https(&self) -> bool {
        matches!(self, Self::Valid { scheme, .. } if scheme == scheme::HTTPS)
    }

    pub fn host(&self) -> Option<&str> {
        match self {
            Self::Valid { host, .. } => Some(host.as_str()),
            Self::Absent => None,
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
