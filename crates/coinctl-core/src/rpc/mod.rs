//! JSON-RPC plumbing between the client facade and the daemon.
//!
//! Defines the [`Transport`] seam, the production [`HttpTransport`], the
//! envelope codec, the result decoders and the table of supported methods.

pub mod decode;
mod http_adapter;
pub(crate) mod methods;
#[cfg(test)]
pub mod mock;
pub mod protocol;

pub use http_adapter::{Endpoint, HttpTransport, TransportConfig, DEFAULT_RPC_PORT};
pub use protocol::{build_request, extract_result, RequestEnvelope};

use crate::error::TransportError;

/// Sends one request envelope and returns the decoded response document.
///
/// Implementations must return a JSON object on success and release any
/// connection they opened before returning, whatever the outcome.
pub trait Transport {
    fn send(&self, request: &RequestEnvelope) -> Result<serde_json::Value, TransportError>;
}
