use serde_json::{json, Value};
use tracing::debug;

use crate::amount::TransferPolicy;
use crate::error::{ClientError, CoreError};
use crate::rpc::methods::{self, RpcMethod};
use crate::rpc::protocol::{build_request, extract_result};
use crate::rpc::{Endpoint, HttpTransport, Transport, TransportConfig};
use crate::types::{AccountInfo, AddressInfo, LabelInfo, ServerInfo, ValidatedAddressInfo};

// ==============================================================================
// Client — one blocking method per daemon RPC
// ==============================================================================

/// Typed client for the daemon's control API.
///
/// Every method performs one full request/response round trip and blocks
/// until it completes. Nothing is retried or cached. The default transport
/// is not `Sync`; use one client per thread or guard it with a mutex.
pub struct Client<T = HttpTransport> {
    transport: T,
    policy: TransferPolicy,
}

impl Client<HttpTransport> {
    /// Client for `endpoint` with reqwest's default timeouts.
    pub fn new(endpoint: Endpoint) -> Result<Self, CoreError> {
        Self::with_config(endpoint, TransportConfig::default())
    }

    pub fn with_config(endpoint: Endpoint, config: TransportConfig) -> Result<Self, CoreError> {
        Ok(Self::with_transport(HttpTransport::new(endpoint, config)?))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            policy: TransferPolicy::default(),
        }
    }

    /// Replace the bounds applied to [`Client::send_to_address`].
    pub fn with_policy(mut self, policy: TransferPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn policy(&self) -> &TransferPolicy {
        &self.policy
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn call<R>(&self, method: RpcMethod<R>, params: Vec<Value>) -> Result<R, ClientError> {
        self.round_trip(method, params).map_err(|source| ClientError {
            operation: method.name,
            source,
        })
    }

    fn round_trip<R>(&self, method: RpcMethod<R>, params: Vec<Value>) -> Result<R, CoreError> {
        let request = build_request(method.name, params);
        let document = self.transport.send(&request)?;
        let result = extract_result(document)?;
        debug!(rpc.id = %request.id, rpc.method = method.name, "rpc result received");
        (method.decode)(result)
    }

    // --------------------------------------------------------------------------
    // Node status
    // --------------------------------------------------------------------------

    /// Number of blocks in the longest chain.
    pub fn get_block_count(&self) -> Result<u64, ClientError> {
        self.call(methods::GET_BLOCK_COUNT, Vec::new())
    }

    /// Block number of the latest block in the longest chain.
    pub fn get_block_number(&self) -> Result<u64, ClientError> {
        self.call(methods::GET_BLOCK_NUMBER, Vec::new())
    }

    /// Number of connections to other nodes.
    pub fn get_connection_count(&self) -> Result<u32, ClientError> {
        self.call(methods::GET_CONNECTION_COUNT, Vec::new())
    }

    /// Proof-of-work difficulty as a multiple of the minimum difficulty.
    pub fn get_difficulty(&self) -> Result<f64, ClientError> {
        self.call(methods::GET_DIFFICULTY, Vec::new())
    }

    /// Whether the daemon is generating coins.
    pub fn get_generate(&self) -> Result<bool, ClientError> {
        self.call(methods::GET_GENERATE, Vec::new())
    }

    /// Turn coin generation on or off. `processors = -1` means unlimited.
    pub fn set_generate(&self, generate: bool, processors: i32) -> Result<(), ClientError> {
        self.call(methods::SET_GENERATE, vec![json!(generate), json!(processors)])
    }

    pub fn get_server_info(&self) -> Result<ServerInfo, ClientError> {
        self.call(methods::GET_INFO, Vec::new())
    }

    /// Help text for `command`.
    pub fn help(&self, command: &str) -> Result<String, ClientError> {
        self.call(methods::HELP, vec![json!(command)])
    }

    /// Ask the daemon to shut down.
    pub fn stop(&self) -> Result<(), ClientError> {
        self.call(methods::STOP, Vec::new())
    }

    // --------------------------------------------------------------------------
    // Wallet
    // --------------------------------------------------------------------------

    /// The wallet's available balance.
    pub fn get_balance(&self) -> Result<f64, ClientError> {
        self.call(methods::GET_BALANCE, Vec::new())
    }

    pub fn get_balance_for_account(&self, account: &str) -> Result<f64, ClientError> {
        self.call(methods::GET_BALANCE, vec![json!(account)])
    }

    /// Send `amount` to `address` and return the transaction id.
    ///
    /// The amount is checked against the client's [`TransferPolicy`] and
    /// rounded to the nearest 0.01 (halves up) before it is sent.
    pub fn send_to_address(
        &self,
        address: &str,
        amount: f64,
        comment: Option<&str>,
    ) -> Result<String, ClientError> {
        let method = methods::SEND_TO_ADDRESS;
        let amount = self.policy.check(amount).map_err(|err| ClientError {
            operation: method.name,
            source: err.into(),
        })?;
        self.call(method, vec![json!(address), json!(amount), json!(comment)])
    }

    pub fn validate_address(&self, address: &str) -> Result<ValidatedAddressInfo, ClientError> {
        self.call(methods::VALIDATE_ADDRESS, vec![json!(address)])
    }

    /// Copy the wallet file to `destination` on the daemon's host.
    pub fn backup_wallet(&self, destination: &str) -> Result<(), ClientError> {
        self.call(methods::BACKUP_WALLET, vec![json!(destination)])
    }

    /// A fresh receiving address, filed under `label` when one is given.
    pub fn get_new_address(&self, label: Option<&str>) -> Result<String, ClientError> {
        self.call(methods::GET_NEW_ADDRESS, vec![json!(label)])
    }

    /// Total received by `address` in transactions with at least
    /// `min_confirmations` confirmations.
    pub fn get_received_by_address(
        &self,
        address: &str,
        min_confirmations: u64,
    ) -> Result<f64, ClientError> {
        self.call(
            methods::GET_RECEIVED_BY_ADDRESS,
            vec![json!(address), json!(min_confirmations)],
        )
    }

    pub fn list_received_by_address(
        &self,
        min_confirmations: u64,
        include_empty: bool,
    ) -> Result<Vec<AddressInfo>, ClientError> {
        self.call(
            methods::LIST_RECEIVED_BY_ADDRESS,
            vec![json!(min_confirmations), json!(include_empty)],
        )
    }

    // --------------------------------------------------------------------------
    // Labels
    // --------------------------------------------------------------------------

    pub fn get_label(&self, address: &str) -> Result<String, ClientError> {
        self.call(methods::GET_LABEL, vec![json!(address)])
    }

    /// Set the label of `address`; `None` removes it.
    pub fn set_label_for_address(
        &self,
        address: &str,
        label: Option<&str>,
    ) -> Result<(), ClientError> {
        self.call(methods::SET_LABEL, vec![json!(address), json!(label)])
    }

    pub fn get_addresses_by_label(&self, label: &str) -> Result<Vec<String>, ClientError> {
        self.call(methods::GET_ADDRESSES_BY_LABEL, vec![json!(label)])
    }

    pub fn get_received_by_label(
        &self,
        label: &str,
        min_confirmations: u64,
    ) -> Result<f64, ClientError> {
        self.call(
            methods::GET_RECEIVED_BY_LABEL,
            vec![json!(label), json!(min_confirmations)],
        )
    }

    pub fn list_received_by_label(
        &self,
        min_confirmations: u64,
        include_empty: bool,
    ) -> Result<Vec<LabelInfo>, ClientError> {
        self.call(
            methods::LIST_RECEIVED_BY_LABEL,
            vec![json!(min_confirmations), json!(include_empty)],
        )
    }

    // --------------------------------------------------------------------------
    // Accounts
    // --------------------------------------------------------------------------

    pub fn get_account(&self, address: &str) -> Result<String, ClientError> {
        self.call(methods::GET_ACCOUNT, vec![json!(address)])
    }

    /// The current receiving address of `account`; `None` is the default
    /// account.
    pub fn get_account_address(&self, account: Option<&str>) -> Result<String, ClientError> {
        self.call(methods::GET_ACCOUNT_ADDRESS, vec![json!(account)])
    }

    pub fn set_account_for_address(
        &self,
        address: &str,
        account: Option<&str>,
    ) -> Result<(), ClientError> {
        self.call(methods::SET_ACCOUNT, vec![json!(address), json!(account)])
    }

    pub fn get_addresses_by_account(&self, account: &str) -> Result<Vec<String>, ClientError> {
        self.call(methods::GET_ADDRESSES_BY_ACCOUNT, vec![json!(account)])
    }

    pub fn get_received_by_account(
        &self,
        account: &str,
        min_confirmations: u64,
    ) -> Result<f64, ClientError> {
        self.call(
            methods::GET_RECEIVED_BY_ACCOUNT,
            vec![json!(account), json!(min_confirmations)],
        )
    }

    pub fn list_received_by_account(
        &self,
        min_confirmations: u64,
        include_empty: bool,
    ) -> Result<Vec<AccountInfo>, ClientError> {
        self.call(
            methods::LIST_RECEIVED_BY_ACCOUNT,
            vec![json!(min_confirmations), json!(include_empty)],
        )
    }
}
