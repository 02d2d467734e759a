//! Remote methods the client knows about, each paired with its decoder.

use serde_json::Value;

use crate::error::CoreError;
use crate::types::{AccountInfo, AddressInfo, LabelInfo, ServerInfo, ValidatedAddressInfo};

use super::decode;

/// A daemon method name and the decoder for its `result`.
pub(crate) struct RpcMethod<R> {
    pub(crate) name: &'static str,
    pub(crate) decode: fn(Value) -> Result<R, CoreError>,
}

impl<R> Clone for RpcMethod<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for RpcMethod<R> {}

const fn method<R>(name: &'static str, decode: fn(Value) -> Result<R, CoreError>) -> RpcMethod<R> {
    RpcMethod { name, decode }
}

// Node status

pub(crate) const GET_BLOCK_COUNT: RpcMethod<u64> = method("getblockcount", decode::parse_u64);
pub(crate) const GET_BLOCK_NUMBER: RpcMethod<u64> = method("getblocknumber", decode::parse_u64);
pub(crate) const GET_CONNECTION_COUNT: RpcMethod<u32> =
    method("getconnectioncount", decode::parse_u32);
pub(crate) const GET_DIFFICULTY: RpcMethod<f64> = method("getdifficulty", decode::parse_f64);
pub(crate) const GET_GENERATE: RpcMethod<bool> = method("getgenerate", decode::parse_bool);
pub(crate) const SET_GENERATE: RpcMethod<()> = method("setgenerate", decode::parse_unit);
pub(crate) const GET_INFO: RpcMethod<ServerInfo> = method("getinfo", decode::parse_server_info);
pub(crate) const HELP: RpcMethod<String> = method("help", decode::parse_string);
pub(crate) const STOP: RpcMethod<()> = method("stop", decode::parse_unit);

// Wallet

pub(crate) const GET_BALANCE: RpcMethod<f64> = method("getbalance", decode::parse_f64);
pub(crate) const SEND_TO_ADDRESS: RpcMethod<String> =
    method("sendtoaddress", decode::parse_string);
pub(crate) const VALIDATE_ADDRESS: RpcMethod<ValidatedAddressInfo> =
    method("validateaddress", decode::parse_validated_address);
pub(crate) const BACKUP_WALLET: RpcMethod<()> = method("backupwallet", decode::parse_unit);
pub(crate) const GET_NEW_ADDRESS: RpcMethod<String> =
    method("getnewaddress", decode::parse_string);
pub(crate) const GET_RECEIVED_BY_ADDRESS: RpcMethod<f64> =
    method("getreceivedbyaddress", decode::parse_f64);
pub(crate) const LIST_RECEIVED_BY_ADDRESS: RpcMethod<Vec<AddressInfo>> =
    method("listreceivedbyaddress", decode::parse_address_infos);

// Labels

pub(crate) const GET_LABEL: RpcMethod<String> = method("getlabel", decode::parse_string);
pub(crate) const SET_LABEL: RpcMethod<()> = method("setlabel", decode::parse_unit);
pub(crate) const GET_ADDRESSES_BY_LABEL: RpcMethod<Vec<String>> =
    method("getaddressesbylabel", decode::parse_string_list);
pub(crate) const GET_RECEIVED_BY_LABEL: RpcMethod<f64> =
    method("getreceivedbylabel", decode::parse_f64);
pub(crate) const LIST_RECEIVED_BY_LABEL: RpcMethod<Vec<LabelInfo>> =
    method("listreceivedbylabel", decode::parse_label_infos);

// Accounts

pub(crate) const GET_ACCOUNT: RpcMethod<String> = method("getaccount", decode::parse_string);
pub(crate) const GET_ACCOUNT_ADDRESS: RpcMethod<String> =
    method("getaccountaddress", decode::parse_string);
pub(crate) const SET_ACCOUNT: RpcMethod<()> = method("setaccount", decode::parse_unit);
pub(crate) const GET_ADDRESSES_BY_ACCOUNT: RpcMethod<Vec<String>> =
    method("getaddressesbyaccount", decode::parse_string_list);
pub(crate) const GET_RECEIVED_BY_ACCOUNT: RpcMethod<f64> =
    method("getreceivedbyaccount", decode::parse_f64);
pub(crate) const LIST_RECEIVED_BY_ACCOUNT: RpcMethod<Vec<AccountInfo>> =
    method("listreceivedbyaccount", decode::parse_account_infos);
