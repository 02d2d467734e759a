/// A caller-supplied argument or configuration value violates a precondition.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("amount too small: {amount} is below the minimum transfer of {min}")]
    AmountTooSmall { amount: f64, min: f64 },

    #[error("amount exceeds supply cap: {amount} is above the maximum transfer of {max}")]
    AmountExceedsCap { amount: f64, max: f64 },

    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("invalid transfer policy: {0}")]
    InvalidPolicy(String),
}

/// HTTP-level failure talking to the daemon.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Any status other than 200. `reason` is the canonical phrase for
    /// `status` (for example "Not Found"), not the text the server sent.
    #[error("HTTP status {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response body: {0}")]
    InvalidBody(String),

    #[error("response body is not a JSON object")]
    NotAnObject,
}

/// The response envelope is malformed or does not have the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("response envelope is not a JSON object")]
    NotAnObject,

    #[error("response envelope has no `result` member")]
    MissingResult,

    #[error("server error {code}: {message}")]
    Server { code: i64, message: String },

    #[error("non-standard JSON-RPC error: {0}")]
    NonStandardError(String),

    #[error("unexpected result shape: expected {expected}, got {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },
}

/// A field is present but cannot be converted to its target type, or a
/// required field is missing.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("missing field `{field}`")]
    MissingField { field: &'static str },

    #[error("field `{field}`: expected {expected}, got {found}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("field `{field}` out of range: {value}")]
    OutOfRange { field: &'static str, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Failure of one client operation, tagged with the RPC method that failed.
#[derive(Debug, thiserror::Error)]
#[error("{operation} failed: {source}")]
pub struct ClientError {
    pub operation: &'static str,
    #[source]
    pub source: CoreError,
}

impl ClientError {
    pub fn kind(&self) -> &CoreError {
        &self.source
    }

    /// HTTP status code, when the call failed on a response other than 200.
    pub fn http_status(&self) -> Option<u16> {
        match &self.source {
            CoreError::Transport(TransportError::Status { status, .. }) => Some(*status),
            CoreError::Transport(TransportError::Http(err)) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Short JSON type name for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
