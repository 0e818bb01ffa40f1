//! Error types.
//!
//! Each subsystem has its own error enum; [`Error`] wraps them so every
//! public operation can return the crate-wide [`Result`].

use std::fmt;

use thiserror::Error;

/// Crate-wide error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Seal(#[from] SealError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Provision(#[from] ProvisionError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl Error {
    /// Whether the platform reported the resource as absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Api(ApiError::NotFound { .. }))
    }

    /// Whether a caller may reasonably retry the same call unchanged.
    ///
    /// Nothing in this crate retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(e) => e.is_retryable(),
            Self::Provision(ProvisionError::FetchKey { source, .. })
            | Self::Provision(ProvisionError::Submit { source, .. }) => source.is_retryable(),
            _ => false,
        }
    }
}

/// Configuration loading and validation errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    NotFound(String),

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("missing API token")]
    MissingToken,

    #[error("failed to build http client: {0}")]
    HttpClient(String),
}

/// Sealed-box errors. Both variants are fatal for the key material at hand.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SealError {
    #[error("invalid recipient key: {0}")]
    InvalidKey(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
}

/// Failure of the transport itself, or a status the caller has no special
/// meaning for.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// No response was received (DNS, TLS, connect, timeout).
    #[error("request failed: {0}")]
    Connection(String),

    /// A response arrived with an unexpected status.
    #[error("unexpected status {status}: {message}")]
    Status { status: u16, message: String },
}

impl TransportError {
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Connection(_) => true,
            Self::Status { status, .. } => *status >= 500,
        }
    }
}

/// Platform API errors. `resource` names what was being addressed,
/// e.g. `repository octo/hello`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{resource}: not found")]
    NotFound { resource: String },

    #[error("{resource}: validation failed: {message}")]
    ValidationFailed { resource: String, message: String },

    #[error("{resource}: {source}")]
    Transport {
        resource: String,
        #[source]
        source: TransportError,
    },

    #[error("{resource}: malformed response: {message}")]
    Decode { resource: String, message: String },

    #[error("{resource}: response is missing {field}")]
    MissingField {
        resource: String,
        field: &'static str,
    },
}

impl ApiError {
    /// The resource the failing request addressed.
    pub fn resource(&self) -> &str {
        match self {
            Self::NotFound { resource }
            | Self::ValidationFailed { resource, .. }
            | Self::Transport { resource, .. }
            | Self::Decode { resource, .. }
            | Self::MissingField { resource, .. } => resource,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { source, .. } => source.is_retryable(),
            _ => false,
        }
    }
}

/// The step of secret provisioning that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProvisionStep {
    FetchKey,
    Seal,
    Submit,
}

impl fmt::Display for ProvisionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FetchKey => "fetching public key",
            Self::Seal => "sealing",
            Self::Submit => "submitting",
        })
    }
}

/// Secret provisioning failure, tagged with the step that failed.
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("secret {secret} on {repository}: fetching public key failed: {source}")]
    FetchKey {
        repository: String,
        secret: String,
        #[source]
        source: ApiError,
    },

    #[error("secret {secret} on {repository}: sealing failed: {source}")]
    Seal {
        repository: String,
        secret: String,
        #[source]
        source: SealError,
    },

    #[error("secret {secret} on {repository}: submitting failed: {source}")]
    Submit {
        repository: String,
        secret: String,
        #[source]
        source: ApiError,
    },
}

impl ProvisionError {
    pub fn step(&self) -> ProvisionStep {
        match self {
            Self::FetchKey { .. } => ProvisionStep::FetchKey,
            Self::Seal { .. } => ProvisionStep::Seal,
            Self::Submit { .. } => ProvisionStep::Submit,
        }
    }
}

/// Local input validation errors, raised before any request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("secret name cannot be empty")]
    EmptySecretName,

    #[error("invalid secret name '{name}': {reason}")]
    InvalidSecretName { name: String, reason: String },

    #[error("value for {0} cannot be empty")]
    EmptyValue(String),

    #[error("invalid rules: {0}")]
    InvalidRules(String),
}

pub type Result<T> = std::result::Result<T, Error>;
