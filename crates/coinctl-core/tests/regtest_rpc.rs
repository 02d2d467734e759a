use std::env;
use std::sync::Once;

use coinctl_core::{Client, Endpoint, ValidatedAddressInfo};

static TRACING_INIT: Once = Once::new();

fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("coinctl_core=debug")),
            )
            .with_target(true)
            .try_init();
    });
}

fn client_from_env() -> Client {
    let host = env::var("COINCTL_TEST_RPC_HOST").unwrap_or_else(|_| "127.0.0.1".to_owned());
    let port = env::var("COINCTL_TEST_RPC_PORT")
        .expect("COINCTL_TEST_RPC_PORT must be set")
        .parse::<u16>()
        .expect("COINCTL_TEST_RPC_PORT must be a port number");
    let user = env::var("COINCTL_TEST_RPC_USER").expect("COINCTL_TEST_RPC_USER must be set");
    let pass = env::var("COINCTL_TEST_RPC_PASS").expect("COINCTL_TEST_RPC_PASS must be set");

    Client::new(Endpoint::new(&host, &user, &pass).with_port(port))
        .expect("rpc client must construct")
}

#[test]
#[ignore = "requires a local regtest daemon; set COINCTL_TEST_RPC_* to run"]
fn regtest_status_and_address_validation() {
    init_tracing();
    let client = client_from_env();

    let blocks = client
        .get_block_count()
        .expect("regtest getblockcount must succeed");
    eprintln!("[itest] regtest height {blocks}");

    let balance = client.get_balance().expect("regtest getbalance must succeed");
    assert!(balance >= 0.0, "wallet balance must not be negative");

    let bogus = client
        .validate_address("BogUsAddr3ss")
        .expect("validateaddress must answer for garbage input");
    assert_eq!(bogus, ValidatedAddressInfo::Invalid);

    let help = client.help("getbalance").expect("help must succeed");
    assert!(help.contains("getbalance"), "help text must mention the command");
}
