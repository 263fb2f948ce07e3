use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::AppError;
use serde_json::Value;
use std::thread;
use std::time::Duration;

use super::endpoints;

const USER_AGENT: &str = "lol_data_fetcher/0.1.0";

const MAX_RETRIES: u32 = 3;
const RETRY_BASE_MS: u64 = 500;

/// A successful (2xx) HTTP response, before decoding.
#[derive(Debug, Clone)]
pub(crate) struct RawResponse {
    pub content_type: String,
    pub body: String,
}

/// A failed HTTP attempt, as seen by the retry loop.
#[derive(Debug, Clone)]
pub(crate) enum TransportFailure {
    /// The server answered with a non-2xx status.
    Status(u16),
    /// The request never completed: connection refused, timeout, I/O error.
    Network(String),
}

impl TransportFailure {
    /// Only network failures and 5xx responses are worth retrying.
    fn is_transient(&self) -> bool {
        matches!(
            self,
            TransportFailure::Network(_) | TransportFailure::Status(500..=599)
        )
    }

    fn into_app_error(self, path: &str) -> AppError {
        match self {
            TransportFailure::Status(404) => AppError::NotFound(path.to_string()),
            TransportFailure::Status(429) => AppError::RateLimited,
            TransportFailure::Status(code) => {
                AppError::ApiError(format!("{} returned status {}", path, code))
            }
            TransportFailure::Network(message) => {
                AppError::ApiError(format!("{} failed: {}", path, message))
            }
        }
    }
}

/// Minimal blocking HTTP seam. The production implementation wraps a ureq
/// agent; tests substitute scripted fakes.
pub(crate) trait Transport: Send + Sync + std::fmt::Debug {
    fn get(&self, url: &str) -> Result<RawResponse, TransportFailure>;
}

#[derive(Debug)]
struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(timeout).build();
        UreqTransport { agent }
    }
}

impl Transport for UreqTransport {
    fn get(&self, url: &str) -> Result<RawResponse, TransportFailure> {
        let response = self
            .agent
            .get(url)
            .set("User-Agent", USER_AGENT)
            .call();

        match response {
            Ok(resp) => {
                let content_type = resp.content_type().to_string();
                let body = resp
                    .into_string()
                    .map_err(|e| TransportFailure::Network(e.to_string()))?;
                Ok(RawResponse { content_type, body })
            }
            Err(ureq::Error::Status(code, _)) => Err(TransportFailure::Status(code)),
            Err(ureq::Error::Transport(transport)) => {
                Err(TransportFailure::Network(transport.to_string()))
            }
        }
    }
}

/// HTTP access layer for the Data Dragon endpoint.
///
/// Wraps the transport with the retry policy, JSON decoding, error mapping,
/// and the opt-in response cache. Every call is a blocking network round-trip
/// unless the cache answers first.
#[derive(Debug)]
pub struct Connection {
    transport: Box<dyn Transport>,
    cache: ResponseCache,
}

impl Connection {
    pub fn new(config: &Config) -> Self {
        Connection {
            transport: Box::new(UreqTransport::new(Duration::from_secs(config.timeout))),
            cache: ResponseCache::new(config.cache_enabled, config.cache_ttl),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_transport(transport: Box<dyn Transport>, cache: ResponseCache) -> Self {
        Connection { transport, cache }
    }

    /// Issue a GET against a CDN-relative path and return the decoded body.
    ///
    /// Responses with a JSON content type are parsed; anything else passes
    /// through as a raw string value. Fails with `NotFound` on 404,
    /// `RateLimited` on 429, and `ApiError` for any other non-2xx status,
    /// transport failure, or malformed JSON, after retries are exhausted.
    pub fn get(&self, path: &str, params: &[(&str, &str)]) -> Result<Value, AppError> {
        let url = build_url(path, params);

        if let Some(hit) = self.cache.lookup(&url) {
            return Ok(hit);
        }

        let response = fetch_with_retries(self.transport.as_ref(), &url, &|delay| {
            thread::sleep(delay)
        })
        .map_err(|failure| failure.into_app_error(path))?;

        let value = decode_body(response)?;
        self.cache.store(&url, &value);
        Ok(value)
    }
}

/// Run one GET with up to `MAX_RETRIES` additional attempts on transient
/// failures, sleeping `retry_delay(attempt)` between attempts.
fn fetch_with_retries(
    transport: &dyn Transport,
    url: &str,
    sleep: &dyn Fn(Duration),
) -> Result<RawResponse, TransportFailure> {
    let mut attempt = 0;

    loop {
        match transport.get(url) {
            Ok(response) => return Ok(response),
            Err(failure) if failure.is_transient() && attempt < MAX_RETRIES => {
                sleep(retry_delay(attempt));
                attempt += 1;
            }
            Err(failure) => return Err(failure),
        }
    }
}

/// Exponential backoff: 500ms, 1s, 2s.
fn retry_delay(attempt: u32) -> Duration {
    Duration::from_millis(RETRY_BASE_MS << attempt)
}

fn build_url(path: &str, params: &[(&str, &str)]) -> String {
    let mut url = format!("{}{}", endpoints::BASE_URL, path);
    for (idx, (key, value)) in params.iter().enumerate() {
        url.push(if idx == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(value);
    }
    url
}

fn decode_body(response: RawResponse) -> Result<Value, AppError> {
    if is_json_content_type(&response.content_type) {
        serde_json::from_str(&response.body)
            .map_err(|e| AppError::ApiError(format!("invalid JSON payload: {}", e)))
    } else {
        Ok(Value::String(response.body))
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .ends_with("json")
}
