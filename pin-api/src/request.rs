//! Outbound request descriptors.
//!
//! A `RequestDescriptor` is the complete call-scoped description of one
//! outbound API request: method, relative path, field-selection projection,
//! and parameters. Descriptors are built fresh per operation and never
//! shared between calls.

use std::collections::BTreeMap;

use reqwest::Method;

/// Description of one outbound API request.
///
/// The path is relative to the versioned API root (no leading slash, no
/// version prefix). The field list selects which attributes the server
/// includes in returned records; an empty list means no projection is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub path: String,
    pub fields: Vec<String>,
    pub params: BTreeMap<String, String>,
}

impl RequestDescriptor {
    fn new(method: Method, path: &str) -> Self {
        Self {
            method,
            path: path.to_string(),
            fields: Vec::new(),
            params: BTreeMap::new(),
        }
    }

    /// GET request for the given relative path.
    pub fn get(path: &str) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request for the given relative path.
    pub fn post(path: &str) -> Self {
        Self::new(Method::POST, path)
    }

    /// PATCH request for the given relative path.
    pub fn patch(path: &str) -> Self {
        Self::new(Method::PATCH, path)
    }

    /// DELETE request for the given relative path.
    pub fn delete(path: &str) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Set the field-selection list.
    pub fn with_fields(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Add one parameter.
    pub fn with_param(mut self, key: &str, value: impl Into<String>) -> Self {
        self.params.insert(key.to_string(), value.into());
        self
    }

    /// The field list joined for the `fields` query parameter, or None when
    /// no projection was selected.
    pub fn fields_param(&self) -> Option<String> {
        if self.fields.is_empty() {
            None
        } else {
            Some(self.fields.join(","))
        }
    }

    /// Whether this request carries its parameters in the body
    /// (POST/PATCH) rather than the query string.
    pub fn params_in_body(&self) -> bool {
        self.method == Method::POST || self.method == Method::PATCH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let req = RequestDescriptor::post("pins/")
            .with_fields(&["id", "note"])
            .with_param("board", "123")
            .with_param("note", "hello");
        assert_eq!(req.method, Method::POST);
        assert_eq!(req.path, "pins/");
        assert_eq!(req.fields_param().unwrap(), "id,note");
        assert_eq!(req.params["board"], "123");
        assert!(req.params_in_body());
    }

    #[test]
    fn test_empty_fields_yield_no_param() {
        let req = RequestDescriptor::get("me/");
        assert!(req.fields_param().is_none());
        assert!(!req.params_in_body());
    }

    #[test]
    fn test_params_are_ordered() {
        let req = RequestDescriptor::get("boards/5/pins/")
            .with_param("cursor", "abc")
            .with_param("another", "x");
        let keys: Vec<_> = req.params.keys().collect();
        assert_eq!(keys, ["another", "cursor"]);
    }
}
