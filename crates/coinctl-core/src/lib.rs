//! Blocking client for a coin daemon's JSON-RPC control API.
//!
//! [`Client`] exposes one method per remote call. Each call builds a
//! JSON-RPC envelope, posts it through a [`rpc::Transport`], extracts the
//! `result` and decodes it into a typed value.

pub mod amount;
pub mod client;
pub mod error;
pub mod rpc;
#[cfg(test)]
pub(crate) mod test_util;
pub mod types;

pub use amount::{round_to_two_cents, TransferPolicy};
pub use client::Client;
pub use error::{
    ClientError, CoreError, DecodeError, ProtocolError, TransportError, ValidationError,
};
pub use rpc::{Endpoint, TransportConfig};
pub use types::{AccountInfo, AddressInfo, LabelInfo, ServerInfo, ValidatedAddressInfo};
