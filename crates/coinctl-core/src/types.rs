//! Typed records decoded from daemon responses.

use serde::Serialize;

// ==============================================================================
// Received-Funds Summaries
// ==============================================================================

/// One row of `listreceivedbyaddress`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddressInfo {
    pub address: String,
    pub label: String,
    pub amount: f64,
    pub confirmations: u64,
}

/// One row of `listreceivedbylabel`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelInfo {
    pub label: String,
    pub amount: f64,
    pub confirmations: u64,
}

/// One row of `listreceivedbyaccount`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountInfo {
    pub account: String,
    pub amount: f64,
    pub confirmations: u64,
}

// ==============================================================================
// Server Info
// ==============================================================================

/// Daemon status from `getinfo`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServerInfo {
    pub version: String,
    pub balance: f64,
    pub blocks: u64,
    pub connections: u32,
    pub is_generating: bool,
    /// Processor limit for coin generation; `-1` means unlimited.
    pub used_cpus: i32,
    pub difficulty: f64,
    pub hashes_per_second: u64,
}

// ==============================================================================
// Address Validation
// ==============================================================================

/// Result of `validateaddress`. The daemon only reports the normalised
/// address and ownership for valid addresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ValidatedAddressInfo {
    Invalid,
    Valid { address: String, is_mine: bool },
}

impl ValidatedAddressInfo {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    pub fn address(&self) -> Option<&str> {
        match self {
            Self::Valid { address, .. } => Some(address),
            Self::Invalid => None,
        }
    }

    pub fn is_mine(&self) -> Option<bool> {
        match self {
            Self::Valid { is_mine, .. } => Some(*is_mine),
            Self::Invalid => None,
        }
    }
}
