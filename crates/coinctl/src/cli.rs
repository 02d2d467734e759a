use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use coinctl_core::amount::{DEFAULT_MAX_TRANSFER, DEFAULT_MIN_TRANSFER};
use coinctl_core::rpc::DEFAULT_RPC_PORT;

/// coinctl — command-line control client for a coin daemon's JSON-RPC API.
#[derive(Parser)]
#[command(version, about, disable_help_subcommand = true)]
pub struct Cli {
    /// Daemon RPC host.
    #[arg(long, default_value = "127.0.0.1", env = "COINCTL_RPC_HOST")]
    pub rpc_host: String,

    /// Daemon RPC port.
    #[arg(long, default_value_t = DEFAULT_RPC_PORT, env = "COINCTL_RPC_PORT")]
    pub rpc_port: u16,

    /// RPC username (must be paired with --rpc-pass).
    #[arg(long, env = "COINCTL_RPC_USER")]
    pub rpc_user: Option<String>,

    /// RPC password (must be paired with --rpc-user).
    #[arg(long, env = "COINCTL_RPC_PASS", hide_env_values = true)]
    pub rpc_pass: Option<String>,

    /// Cookie file holding `user:password`, used when no user/pass is given.
    #[arg(long, env = "COINCTL_RPC_COOKIE_FILE")]
    pub rpc_cookie_file: Option<PathBuf>,

    /// TCP connect timeout in seconds (HTTP client default if omitted).
    #[arg(long)]
    pub connect_timeout_secs: Option<u64>,

    /// Whole-request timeout in seconds (HTTP client default if omitted).
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Smallest amount `send-to-address` accepts.
    #[arg(long, default_value_t = DEFAULT_MIN_TRANSFER)]
    pub min_transfer: f64,

    /// Largest amount `send-to-address` accepts.
    #[arg(long, default_value_t = DEFAULT_MAX_TRANSFER)]
    pub max_transfer: f64,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Wallet balance, or the balance of one account.
    GetBalance { account: Option<String> },

    /// Number of blocks in the longest chain.
    GetBlockCount,

    /// Number of the latest block in the longest chain.
    GetBlockNumber,

    /// Number of peer connections.
    GetConnectionCount,

    /// Current proof-of-work difficulty.
    GetDifficulty,

    /// Whether the daemon is generating coins.
    GetGenerate,

    /// Turn coin generation on or off.
    SetGenerate {
        #[arg(action = ArgAction::Set)]
        generate: bool,

        /// Processor limit; -1 is unlimited.
        #[arg(default_value_t = -1, allow_negative_numbers = true)]
        processors: i32,
    },

    /// Daemon status summary.
    GetInfo,

    /// Daemon help text for an RPC command.
    Help { command: String },

    /// Shut the daemon down.
    Stop,

    /// Send funds; the amount is rounded to the nearest 0.01.
    SendToAddress {
        address: String,
        amount: f64,
        comment: Option<String>,
    },

    /// Check whether an address is valid and owned by this wallet.
    ValidateAddress { address: String },

    /// Copy the wallet file to a path on the daemon's host.
    BackupWallet { destination: String },

    /// New receiving address, optionally labelled.
    GetNewAddress {
        #[arg(long)]
        label: Option<String>,
    },

    /// Amount received by an address.
    GetReceivedByAddress {
        address: String,
        #[arg(long, default_value_t = 1)]
        min_conf: u64,
    },

    /// Received totals per address.
    ListReceivedByAddress {
        #[arg(long, default_value_t = 1)]
        min_conf: u64,
        #[arg(long)]
        include_empty: bool,
    },

    /// Label of an address.
    GetLabel { address: String },

    /// Set or (when omitted) remove the label of an address.
    SetLabel {
        address: String,
        label: Option<String>,
    },

    /// Addresses carrying a label.
    GetAddressesByLabel { label: String },

    /// Amount received by addresses carrying a label.
    GetReceivedByLabel {
        label: String,
        #[arg(long, default_value_t = 1)]
        min_conf: u64,
    },

    /// Received totals per label.
    ListReceivedByLabel {
        #[arg(long, default_value_t = 1)]
        min_conf: u64,
        #[arg(long)]
        include_empty: bool,
    },

    /// Account an address belongs to.
    GetAccount { address: String },

    /// Current receiving address of an account (default account if omitted).
    GetAccountAddress { account: Option<String> },

    /// Move an address to an account, or to the default account when omitted.
    SetAccount {
        address: String,
        account: Option<String>,
    },

    /// Addresses belonging to an account.
    GetAddressesByAccount { account: String },

    /// Amount received by an account.
    GetReceivedByAccount {
        account: String,
        #[arg(long, default_value_t = 1)]
        min_conf: u64,
    },

    /// Received totals per account.
    ListReceivedByAccount {
        #[arg(long, default_value_t = 1)]
        min_conf: u64,
        #[arg(long)]
        include_empty: bool,
    },
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_apply() {
        let cli = Cli::try_parse_from(["coinctl", "get-balance"]).expect("should parse");
        assert_eq!(cli.rpc_host, "127.0.0.1");
        assert_eq!(cli.rpc_port, 8332);
        assert_eq!(cli.min_transfer, 0.01);
        assert_eq!(cli.max_transfer, 21_000_000.0);
        assert!(matches!(cli.command, Command::GetBalance { account: None }));
    }

    #[test]
    fn parses_send_to_address() {
        let cli = Cli::try_parse_from([
            "coinctl",
            "--rpc-port",
            "18332",
            "send-to-address",
            "addr",
            "1.115",
            "for coffee",
        ])
        .expect("should parse");
        assert_eq!(cli.rpc_port, 18332);
        match cli.command {
            Command::SendToAddress {
                address,
                amount,
                comment,
            } => {
                assert_eq!(address, "addr");
                assert_eq!(amount, 1.115);
                assert_eq!(comment.as_deref(), Some("for coffee"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn parses_set_generate_with_negative_limit() {
        let cli = Cli::try_parse_from(["coinctl", "set-generate", "true", "-1"])
            .expect("should parse");
        assert!(matches!(
            cli.command,
            Command::SetGenerate {
                generate: true,
                processors: -1
            }
        ));
    }

    #[test]
    fn help_is_an_rpc_command() {
        let cli = Cli::try_parse_from(["coinctl", "help", "getbalance"]).expect("should parse");
        assert!(matches!(cli.command, Command::Help { ref command } if command == "getbalance"));
    }

    #[test]
    fn list_flags() {
        let cli = Cli::try_parse_from([
            "coinctl",
            "list-received-by-label",
            "--min-conf",
            "0",
            "--include-empty",
        ])
        .expect("should parse");
        assert!(matches!(
            cli.command,
            Command::ListReceivedByLabel {
                min_conf: 0,
                include_empty: true
            }
        ));
    }
}
