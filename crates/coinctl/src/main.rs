mod cli;
mod commands;
mod config;

use clap::Parser;
use eyre::{eyre, WrapErr};

use coinctl_core::Client;

use commands::Output;

fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr and default to warnings only, so command output on
    // stdout stays scriptable.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let endpoint = config::endpoint(&args).context("resolve rpc endpoint")?;
    let policy = config::transfer_policy(&args)?;
    tracing::debug!(
        host = endpoint.host(),
        port = endpoint.port(),
        user = endpoint.login(),
        "using rpc endpoint"
    );

    let client = Client::with_config(endpoint, config::transport_config(&args))
        .context("build rpc client")?
        .with_policy(policy);

    let output = commands::run(&client, &args.command).map_err(|err| {
        let mut message = err.to_string();
        if let Some(hint) = commands::failure_hint(&err) {
            message.push_str("\nhint: ");
            message.push_str(hint);
        }
        eyre!(message).wrap_err(format!(
            "rpc call to {}:{} failed",
            args.rpc_host, args.rpc_port
        ))
    })?;

    match output {
        Output::Text(text) => println!("{text}"),
        Output::Json(value) => println!(
            "{}",
            serde_json::to_string_pretty(&value).context("render result as JSON")?
        ),
        Output::Nothing => {}
    }

    Ok(())
}
