//! Blocking JSON-RPC transport over HTTP.
//!
//! Implements [`Transport`](super::Transport) with `reqwest::blocking`:
//! one POST per call, basic auth on every request, no pooling, no retries.

mod connection;
mod transport;

pub use connection::{Endpoint, TransportConfig, DEFAULT_RPC_PORT};
pub use transport::HttpTransport;
