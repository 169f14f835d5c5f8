use crate::constants::header;
use indexmap::IndexMap;

/// Response headers emitted by an applied rule, in insertion order.
pub type Headers = IndexMap<String, String>;

/// Appends a value to an existing `Vary` header the way hosts must when
/// merging an applied decision into a response that already varies:
/// `merge_vary(Some("Accept-Encoding"), "Origin")` yields
/// `"Accept-Encoding, Origin"`.
pub fn merge_vary(existing: Option<&str>, addition: &str) -> String {
    match existing {
        Some(value) if !value.trim().is_empty() => format!("{value}, {addition}"),
        _ => addition.to_owned(),
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct HeaderCollection {
    headers: Headers,
}

impl HeaderCollection {
    pub(crate) fn new() -> Self {
        Self {
            headers: Headers::new(),
        }
    }

    pub(crate) fn push(&mut self, name: &str, value: impl Into<String>) {
        self.headers.insert(name.to_owned(), value.into());
    }

    /// Adds a member to the `Vary` header, appending if one is present.
    pub(crate) fn add_vary(&mut self, value: &str) {
        let merged = merge_vary(self.headers.get(header::VARY).map(String::as_str), value);
        self.headers.insert(header::VARY.to_owned(), merged);
    }

    pub(crate) fn into_headers(self) -> Headers {
        self.headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
