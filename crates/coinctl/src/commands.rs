use coinctl_core::rpc::Transport;
use coinctl_core::{Client, ClientError};
use serde::Serialize;

use crate::cli::Command;

/// What a command prints on success.
#[derive(Debug, PartialEq)]
pub enum Output {
    Text(String),
    Json(serde_json::Value),
    Nothing,
}

impl Output {
    fn json(value: impl Serialize) -> Self {
        // Records are plain structs and enums; serialisation cannot fail.
        Self::Json(serde_json::to_value(value).unwrap_or(serde_json::Value::Null))
    }

    fn text(value: impl ToString) -> Self {
        Self::Text(value.to_string())
    }
}

pub fn run<T: Transport>(client: &Client<T>, command: &Command) -> Result<Output, ClientError> {
    let output = match command {
        Command::GetBalance { account: None } => Output::text(client.get_balance()?),
        Command::GetBalance {
            account: Some(account),
        } => Output::text(client.get_balance_for_account(account)?),
        Command::GetBlockCount => Output::text(client.get_block_count()?),
        Command::GetBlockNumber => Output::text(client.get_block_number()?),
        Command::GetConnectionCount => Output::text(client.get_connection_count()?),
        Command::GetDifficulty => Output::text(client.get_difficulty()?),
        Command::GetGenerate => Output::text(client.get_generate()?),
        Command::SetGenerate {
            generate,
            processors,
        } => {
            client.set_generate(*generate, *processors)?;
            Output::Nothing
        }
        Command::GetInfo => Output::json(client.get_server_info()?),
        Command::Help { command } => Output::Text(client.help(command)?),
        Command::Stop => {
            client.stop()?;
            Output::Nothing
        }
        Command::SendToAddress {
            address,
            amount,
            comment,
        } => Output::Text(client.send_to_address(address, *amount, comment.as_deref())?),
        Command::ValidateAddress { address } => Output::json(client.validate_address(address)?),
        Command::BackupWallet { destination } => {
            client.backup_wallet(destination)?;
            Output::Nothing
        }
        Command::GetNewAddress { label } => {
            Output::Text(client.get_new_address(label.as_deref())?)
        }
        Command::GetReceivedByAddress { address, min_conf } => {
            Output::text(client.get_received_by_address(address, *min_conf)?)
        }
        Command::ListReceivedByAddress {
            min_conf,
            include_empty,
        } => Output::json(client.list_received_by_address(*min_conf, *include_empty)?),
        Command::GetLabel { address } => Output::Text(client.get_label(address)?),
        Command::SetLabel { address, label } => {
            client.set_label_for_address(address, label.as_deref())?;
            Output::Nothing
        }
        Command::GetAddressesByLabel { label } => {
            Output::json(client.get_addresses_by_label(label)?)
        }
        Command::GetReceivedByLabel { label, min_conf } => {
            Output::text(client.get_received_by_label(label, *min_conf)?)
        }
        Command::ListReceivedByLabel {
            min_conf,
            include_empty,
        } => Output::json(client.list_received_by_label(*min_conf, *include_empty)?),
        Command::GetAccount { address } => Output::Text(client.get_account(address)?),
        Command::GetAccountAddress { account } => {
            Output::Text(client.get_account_address(account.as_deref())?)
        }
        Command::SetAccount { address, account } => {
            client.set_account_for_address(address, account.as_deref())?;
            Output::Nothing
        }
        Command::GetAddressesByAccount { account } => {
            Output::json(client.get_addresses_by_account(account)?)
        }
        Command::GetReceivedByAccount { account, min_conf } => {
            Output::text(client.get_received_by_account(account, *min_conf)?)
        }
        Command::ListReceivedByAccount {
            min_conf,
            include_empty,
        } => Output::json(client.list_received_by_account(*min_conf, *include_empty)?),
    };
    Ok(output)
}

/// Hints for the failures users most often hit when pointing the tool at
/// a daemon.
pub fn failure_hint(err: &ClientError) -> Option<&'static str> {
    use coinctl_core::{CoreError, ProtocolError, TransportError};

    match (err.http_status(), err.kind()) {
        (Some(401 | 403), _) => Some(
            "authentication failed; verify --rpc-user/--rpc-pass or the cookie file",
        ),
        // Bitcoin-style daemons also answer "method not found" with a 404.
        (Some(404), _) => Some(
            "the endpoint path is wrong or the daemon does not know this method; \
             verify --rpc-host/--rpc-port and the daemon version",
        ),
        (_, CoreError::Transport(TransportError::Http(e))) if e.is_connect() => {
            Some("could not connect; verify the daemon is running with RPC enabled")
        }
        (_, CoreError::Transport(TransportError::Http(e))) if e.is_timeout() => {
            Some("request timed out; raise --timeout-secs or check the daemon's load")
        }
        (_, CoreError::Protocol(ProtocolError::Server { code: -32601, .. })) => {
            Some("the daemon does not support this method")
        }
        _ => None,
    }
}
