use thiserror::Error;

/// Unified failure type for every call made through the SDK.
///
/// Exactly one of these crosses the API boundary per failed call: transport
/// problems, remote-reported errors and decode failures are all folded into
/// this enum rather than leaking `reqwest` or `serde_json` error types.
#[derive(Error, Debug)]
pub enum HyperswitchError {
    /// Caller misuse detected before any network call was attempted.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Bad construction input, e.g. an empty API key or unparseable base URL.
    #[error("configuration error: {0}")]
    Config(String),

    /// The remote API answered with a non-2xx status. `code` and `message`
    /// come from the `{ "error": { "code", "message" } }` envelope when the
    /// body parses as that shape; `body` is the raw response text either way.
    #[error("{message} (status {status})")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
        body: String,
    },

    /// A 2xx response whose body did not deserialize as the expected type.
    /// The HTTP layer succeeded but the response contract was violated.
    #[error("{message} (status {status})")]
    Decode {
        status: u16,
        message: String,
        body: String,
    },

    /// Connection, TLS or body-read failure before a usable response was
    /// obtained. No HTTP status exists; [`status`](Self::status) reports 0.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The request timed out or was cancelled before the remote responded.
    /// Kept distinct from [`Transport`](Self::Transport) so callers can tell
    /// "we gave up" apart from "the network failed".
    #[error("request cancelled or timed out: {0}")]
    Cancelled(#[source] reqwest::Error),
}

impl HyperswitchError {
    /// HTTP status associated with this failure, or `0` when no response was
    /// obtained (transport failures, cancellation) or none applies.
    pub fn status(&self) -> u16 {
        match self {
            HyperswitchError::Api { status, .. } | HyperswitchError::Decode { status, .. } => {
                *status
            }
            _ => 0,
        }
    }

    /// Machine-readable error code reported by the remote API, if any.
    pub fn error_code(&self) -> Option<&str> {
        match self {
            HyperswitchError::Api { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Raw response body, preserved verbatim for diagnostics.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            HyperswitchError::Api { body, .. } | HyperswitchError::Decode { body, .. } => {
                Some(body)
            }
            _ => None,
        }
    }
}

/// Result alias used across the SDK.
pub type HyperswitchResult<T> = Result<T, HyperswitchError>;
