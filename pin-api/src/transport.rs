//! Transport collaborator: the trait the execution core calls, and its
//! reqwest-based implementation.
//!
//! The transport owns credential attachment, URL construction, timeouts, and
//! transport-level retry with exponential backoff. It classifies every
//! response (ok / rate-limited / error) before handing the envelope back;
//! the execution core never re-classifies. Rate-limited responses are never
//! retried here.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use tracing::{debug, warn};

use pin_core::config::ApiConfig;
use pin_core::constants;
use pin_core::error::{Error, Result};

use crate::request::RequestDescriptor;
use crate::response::{ApiResponse, Classification};

/// Executes one outbound request and returns a classified envelope.
///
/// Implementations must attach credentials, classify the response from the
/// HTTP status code, and attach the raw body for the mapper to parse.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, descriptor: &RequestDescriptor) -> Result<ApiResponse>;
}

/// Retry configuration for HTTP requests.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of retry attempts.
    pub max_retries: u32,
    /// Base delay between retries (doubles each attempt).
    pub base_delay: Duration,
    /// Maximum delay cap.
    pub max_delay: Duration,
    /// HTTP status codes that trigger a retry. 429 is never retried,
    /// regardless of this list.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(4),
            retryable_statuses: vec![502, 503, 504],
        }
    }
}

/// Reqwest-based transport.
///
/// Builds `{base}/{version}/{path}` URLs, appends the access token and the
/// comma-joined field projection as query parameters, and sends descriptor
/// parameters as a JSON body for POST/PATCH or query parameters otherwise.
pub struct HttpTransport {
    inner: Client,
    base_url: String,
    api_version: String,
    access_token: String,
    timeout: Duration,
    retry_config: RetryConfig,
}

impl HttpTransport {
    /// Create a transport from client configuration.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_secs(15))
            .pool_max_idle_per_host(5)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(30));

        // Local proxies with self-signed certificates
        if config.accept_invalid_certs {
            builder = builder.danger_accept_invalid_certs(true);
        }

        let inner = builder
            .build()
            .map_err(|e| Error::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            inner,
            base_url: ApiConfig::sanitize_base_url(&config.base_url),
            api_version: config.api_version.clone(),
            access_token: config.access_token.clone(),
            timeout: Duration::from_millis(config.timeout_ms),
            retry_config: RetryConfig::default(),
        })
    }

    /// Set custom retry configuration.
    pub fn with_retry_config(mut self, config: RetryConfig) -> Self {
        self.retry_config = config;
        self
    }

    /// Build the full URL for a descriptor, including auth and projection
    /// query parameters.
    fn url_for(&self, descriptor: &RequestDescriptor) -> Result<reqwest::Url> {
        let raw = format!(
            "{}/{}/{}",
            self.base_url, self.api_version, descriptor.path
        );
        let mut url = reqwest::Url::parse(&raw)
            .map_err(|e| Error::Http(format!("invalid request URL {raw:?}: {e}")))?;

        {
            let mut query = url.query_pairs_mut();
            query.append_pair(constants::ACCESS_TOKEN_PARAM, &self.access_token);
            if let Some(fields) = descriptor.fields_param() {
                query.append_pair(constants::FIELDS_PARAM, &fields);
            }
            if !descriptor.params_in_body() {
                for (key, value) in &descriptor.params {
                    query.append_pair(key, value);
                }
            }
        }
        Ok(url)
    }

    /// The JSON body for a descriptor, when its method carries parameters
    /// in the body.
    fn body_for(descriptor: &RequestDescriptor) -> Option<serde_json::Value> {
        if !descriptor.params_in_body() {
            return None;
        }
        let map: serde_json::Map<String, serde_json::Value> = descriptor
            .params
            .iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::String(v.clone())))
            .collect();
        Some(serde_json::Value::Object(map))
    }

    /// Send a descriptor with exponential backoff retry on retryable
    /// statuses and transient transport failures.
    async fn send_with_retry(&self, descriptor: &RequestDescriptor) -> Result<Response> {
        let url = self.url_for(descriptor)?;
        let body = Self::body_for(descriptor);
        debug!("{} {}", descriptor.method, descriptor.path);

        let mut last_error: Option<Error> = None;

        for attempt in 0..=self.retry_config.max_retries {
            if attempt > 0 {
                let delay = self.calculate_retry_delay(attempt - 1);
                warn!(
                    "retrying {} {} (attempt {}/{}) after {:.1}s",
                    descriptor.method,
                    descriptor.path,
                    attempt + 1,
                    self.retry_config.max_retries + 1,
                    delay.as_secs_f64()
                );
                tokio::time::sleep(delay).await;
            }

            let mut builder = self
                .inner
                .request(descriptor.method.clone(), url.clone())
                .timeout(self.timeout);
            if let Some(ref b) = body {
                builder = builder.json(b);
            }

            match builder.send().await {
                Ok(response) => {
                    let status = response.status();
                    if self.is_retryable_status(status) && attempt < self.retry_config.max_retries
                    {
                        warn!("retryable status {} from {}", status.as_u16(), descriptor.path);
                        last_error = Some(Error::Http(format!(
                            "retryable status {status} from {}",
                            descriptor.path
                        )));
                        continue;
                    }
                    return Ok(response);
                }
                Err(e) => {
                    let is_retryable = e.is_timeout() || e.is_connect();
                    let err = Self::classify_send_error(e);

                    if is_retryable && attempt < self.retry_config.max_retries {
                        warn!("retryable error on {}: {}", descriptor.path, err);
                        last_error = Some(err);
                        continue;
                    }
                    return Err(err);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| Error::Http("max retries exceeded".into())))
    }

    /// Whether a status triggers a transport-level retry. Rate limiting is
    /// always surfaced, never retried.
    fn is_retryable_status(&self, status: StatusCode) -> bool {
        status != StatusCode::TOO_MANY_REQUESTS
            && self
                .retry_config
                .retryable_statuses
                .contains(&status.as_u16())
    }

    /// Calculate retry delay with exponential backoff.
    fn calculate_retry_delay(&self, attempt: u32) -> Duration {
        let base_ms = self.retry_config.base_delay.as_millis() as u64;
        let delay_ms = base_ms.saturating_mul(1u64 << attempt);
        let max_ms = self.retry_config.max_delay.as_millis() as u64;
        Duration::from_millis(delay_ms.min(max_ms))
    }

    /// Classify a reqwest send error into an Error variant.
    fn classify_send_error(e: reqwest::Error) -> Error {
        if e.is_timeout() {
            Error::Timeout(e.to_string())
        } else if e.is_connect() {
            Error::Http(format!("connection failed: {e}"))
        } else {
            Error::Http(e.to_string())
        }
    }

    /// Read the body and wrap the response in a classified envelope.
    async fn into_envelope(response: Response) -> Result<ApiResponse> {
        let status = response.status().as_u16();
        let retry_after = response
            .headers()
            .get(reqwest::header::RETRY_AFTER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok());
        let body = response
            .text()
            .await
            .map_err(|e| Error::Http(format!("failed to read response body: {e}")))?;

        let mut envelope = ApiResponse::new(status, body, classification_for(status));
        envelope.retry_after = retry_after;
        Ok(envelope)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, descriptor: &RequestDescriptor) -> Result<ApiResponse> {
        let response = self.send_with_retry(descriptor).await?;
        Self::into_envelope(response).await
    }
}

/// One-time classification from the HTTP status code.
pub(crate) fn classification_for(status: u16) -> Classification {
    match status {
        200..=299 => Classification::Ok,
        429 => Classification::RateLimited,
        _ => Classification::Error,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> ApiConfig {
        ApiConfig {
            base_url: "https://api.example.com".into(),
            api_version: "v1".into(),
            access_token: "token".into(),
            timeout_ms: 30_000,
            accept_invalid_certs: false,
        }
    }

    #[test]
    fn test_classification_boundaries() {
        assert_eq!(classification_for(200), Classification::Ok);
        assert_eq!(classification_for(201), Classification::Ok);
        assert_eq!(classification_for(429), Classification::RateLimited);
        assert_eq!(classification_for(404), Classification::Error);
        assert_eq!(classification_for(500), Classification::Error);
    }

    #[test]
    fn test_url_for_get_puts_params_in_query() {
        let transport = HttpTransport::new(&test_config()).unwrap();
        let descriptor = RequestDescriptor::get("boards/5/pins/")
            .with_fields(&["id", "note"])
            .with_param("cursor", "abc");
        let url = transport.url_for(&descriptor).unwrap();
        assert_eq!(url.path(), "/v1/boards/5/pins/");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("access_token".into(), "token".into())));
        assert!(pairs.contains(&("fields".into(), "id,note".into())));
        assert!(pairs.contains(&("cursor".into(), "abc".into())));
    }

    #[test]
    fn test_post_params_go_to_body() {
        let transport = HttpTransport::new(&test_config()).unwrap();
        let descriptor = RequestDescriptor::post("pins/")
            .with_param("board", "123")
            .with_param("note", "hello");
        let url = transport.url_for(&descriptor).unwrap();
        assert!(!url.query().unwrap_or("").contains("board"));

        let body = HttpTransport::body_for(&descriptor).unwrap();
        assert_eq!(body["board"], "123");
        assert_eq!(body["note"], "hello");
    }

    #[test]
    fn test_retry_delay_calculation() {
        let transport = HttpTransport::new(&test_config()).unwrap();
        assert_eq!(transport.calculate_retry_delay(0), Duration::from_secs(1));
        assert_eq!(transport.calculate_retry_delay(1), Duration::from_secs(2));
        assert_eq!(transport.calculate_retry_delay(2), Duration::from_secs(4));
    }

    #[test]
    fn test_retry_delay_capped() {
        let transport = HttpTransport::new(&test_config()).unwrap();
        assert!(transport.calculate_retry_delay(10) <= Duration::from_secs(4));
    }

    #[test]
    fn test_rate_limit_never_retryable() {
        let mut config = RetryConfig::default();
        config.retryable_statuses.push(429);
        let transport = HttpTransport::new(&test_config())
            .unwrap()
            .with_retry_config(config);
        assert!(!transport.is_retryable_status(StatusCode::TOO_MANY_REQUESTS));
        assert!(transport.is_retryable_status(StatusCode::BAD_GATEWAY));
    }
}
