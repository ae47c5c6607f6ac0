//! Client-wide constants.

/// Client library name.
pub const CLIENT_NAME: &str = "pinboard";

/// Client library version.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// REST API version prefix.
pub const API_VERSION: &str = "v1";

/// Default API base URL (scheme + host, no version prefix).
pub const DEFAULT_BASE_URL: &str = "https://api.pinterest.com";

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Query parameter carrying the access token on every request.
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Query parameter carrying the field-selection projection.
pub const FIELDS_PARAM: &str = "fields";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_version_has_no_slashes() {
        assert!(!API_VERSION.contains('/'));
    }

    #[test]
    fn test_default_base_url_has_no_trailing_slash() {
        assert!(!DEFAULT_BASE_URL.ends_with('/'));
    }
}
