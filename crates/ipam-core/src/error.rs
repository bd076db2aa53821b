//! Provider error taxonomy

use thiserror::Error;

/// Errors surfaced by the provider.
///
/// Nothing is retried internally; every failure maps to a terminal
/// diagnostic for the host framework. A soft API error is an application
/// failure embedded in an HTTP-200 body, distinct from transport failures.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("request failed with status {status}: {body}")]
    Http {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("network error: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    #[error("remote returned code {code}: {message}")]
    SoftApi { code: i64, message: String },

    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: String },

    #[error("multiple {resource} records matched, narrow the filter")]
    AmbiguousMatch { resource: &'static str },

    #[error("invalid VLAN range {range:?}, expected \"<min>-<max>\"")]
    InvalidRangeFormat { range: String },

    #[error("no unused VLAN number left in range {range:?}")]
    RangeExhausted { range: String },

    #[error("delete not acknowledged by remote: {value:?}")]
    AcknowledgmentMismatch { value: String },

    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}
