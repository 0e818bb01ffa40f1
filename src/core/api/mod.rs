//! Platform client.
//!
//! [`Client`] is an immutable value: build it once and share it by
//! reference. Each operation is one or a few requests with no state kept
//! between calls, so a client can be used from several threads at once when
//! its transport allows it.
//!
//! Operations live next to the resource they touch:
//!
//! - `repos`: repository lookup, creation and topics
//! - `branches`: branch references
//! - `contents`: file reads and writes
//! - `secrets`: public key lookup and sealed secret provisioning
//! - `pulls`: pull requests
//! - `rulesets`: branch rulesets

mod branches;
mod contents;
mod pulls;
mod repos;
mod rulesets;
mod secrets;
pub mod transport;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug_span, Span};

use crate::core::config::Config;
use crate::error::{ApiError, Result, TransportError};

pub use transport::{HttpTransport, Method, Request, Response, Transport};

/// Client for the platform's REST API.
#[derive(Debug)]
pub struct Client<T = HttpTransport> {
    transport: T,
    span: Span,
}

impl Client<HttpTransport> {
    /// Client for the public API authenticated with `token`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the token is empty or the HTTP client
    /// cannot be built.
    pub fn new(token: &str) -> Result<Self> {
        Self::from_config(&Config::default(), token)
    }

    /// Client for the API described by `config`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config is invalid, the token is empty,
    /// or the HTTP client cannot be built.
    pub fn from_config(config: &Config, token: &str) -> Result<Self> {
        config.validate()?;
        let transport = HttpTransport::new(config, token)?;
        Ok(Self::with_transport(transport))
    }
}

impl<T: Transport> Client<T> {
    /// Client over any transport.
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            span: debug_span!("github"),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request and classify the response.
    ///
    /// The status is only inspected when a response was received; transport
    /// failures map straight to `ApiError::Transport`.
    fn send(&self, resource: &str, request: &Request) -> std::result::Result<Response, ApiError> {
        let response = self
            .transport
            .send(request)
            .map_err(|source| ApiError::Transport {
                resource: resource.to_string(),
                source,
            })?;

        if response.is_success() {
            return Ok(response);
        }

        let message = error_message(&response.body);
        Err(match response.status {
            404 => ApiError::NotFound {
                resource: resource.to_string(),
            },
            422 => ApiError::ValidationFailed {
                resource: resource.to_string(),
                message,
            },
            status => ApiError::Transport {
                resource: resource.to_string(),
                source: TransportError::Status { status, message },
            },
        })
    }

    /// Send a request and decode a JSON response body.
    fn call<R: DeserializeOwned>(
        &self,
        resource: &str,
        request: &Request,
    ) -> std::result::Result<R, ApiError> {
        let response = self.send(resource, request)?;
        decode(resource, &response.body)
    }
}

fn decode<R: DeserializeOwned>(resource: &str, body: &[u8]) -> std::result::Result<R, ApiError> {
    serde_json::from_slice(body).map_err(|e| ApiError::Decode {
        resource: resource.to_string(),
        message: e.to_string(),
    })
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    #[serde(default)]
    errors: Vec<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
    field: Option<String>,
    code: Option<String>,
}

/// Human-readable message from an error response body.
fn error_message(body: &[u8]) -> String {
    let Ok(parsed) = serde_json::from_slice::<ErrorBody>(body) else {
        let text = String::from_utf8_lossy(body).trim().to_string();
        return if text.is_empty() {
            "no message".to_string()
        } else {
            text
        };
    };

    let mut message = parsed.message.unwrap_or_else(|| "no message".to_string());
    let details: Vec<String> = parsed
        .errors
        .into_iter()
        .filter_map(|d| match (d.message, d.field, d.code) {
            (Some(m), _, _) => Some(m),
            (None, Some(f), Some(c)) => Some(format!("{} {}", f, c)),
            (None, None, Some(c)) => Some(c),
            _ => None,
        })
        .collect();
    if !details.is_empty() {
        message = format!("{} ({})", message, details.join("; "));
    }
    message
}
