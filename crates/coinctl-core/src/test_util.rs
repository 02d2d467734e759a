//! Shared JSON fixtures for `coinctl-core` unit tests.

use serde_json::{json, Value};

/// One `listreceivedbyaddress` row.
pub fn address_json(address: &str, label: &str, amount: f64, confirmations: u64) -> Value {
    json!({
        "address": address,
        "label": label,
        "amount": amount,
        "confirmations": confirmations,
    })
}

/// A complete `getinfo` result as an old-style daemon reports it.
pub fn server_info_json() -> Value {
    json!({
        "version": "0.3.20",
        "balance": 12.5,
        "blocks": 98_765,
        "connections": 8,
        "proxy": "",
        "generate": false,
        "genproclimit": -1,
        "difficulty": 14_484.162,
        "hashespersec": 0,
        "testnet": false,
    })
}
