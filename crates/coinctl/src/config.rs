use std::path::Path;
use std::time::Duration;

use coinctl_core::{Endpoint, TransferPolicy, TransportConfig};
use eyre::{bail, eyre, WrapErr};

use crate::cli::Cli;

/// Resolve RPC credentials.
///
/// Precedence:
/// 1. explicit `user` + `pass`
/// 2. cookie file (`username:password`) from `cookie_file`
///
/// The daemon always requires authentication, so finding neither is an
/// error, as is supplying only one of `user` / `pass`.
pub fn resolve_auth(
    user: Option<&str>,
    pass: Option<&str>,
    cookie_file: Option<&Path>,
) -> eyre::Result<(String, String)> {
    match (user, pass) {
        (Some(u), Some(p)) => return Ok((u.to_owned(), p.to_owned())),
        (Some(_), None) | (None, Some(_)) => {
            bail!("both rpc user and rpc pass must be set together");
        }
        (None, None) => {}
    }

    let Some(cookie_file) = cookie_file else {
        bail!("no rpc credentials: pass --rpc-user/--rpc-pass or --rpc-cookie-file");
    };

    let content = std::fs::read_to_string(cookie_file)
        .wrap_err_with(|| format!("failed to read rpc cookie file {}", cookie_file.display()))?;
    let line = content
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .ok_or_else(|| eyre!("rpc cookie file {} is empty", cookie_file.display()))?;

    let (cookie_user, cookie_pass) = line.split_once(':').ok_or_else(|| {
        eyre!(
            "rpc cookie file {} must contain `username:password`",
            cookie_file.display()
        )
    })?;
    if cookie_user.is_empty() || cookie_pass.is_empty() {
        bail!(
            "rpc cookie file {} must contain non-empty `username:password`",
            cookie_file.display()
        );
    }

    Ok((cookie_user.to_owned(), cookie_pass.to_owned()))
}

pub fn endpoint(cli: &Cli) -> eyre::Result<Endpoint> {
    let (user, pass) = resolve_auth(
        cli.rpc_user.as_deref(),
        cli.rpc_pass.as_deref(),
        cli.rpc_cookie_file.as_deref(),
    )?;
    Ok(Endpoint::new(&cli.rpc_host, &user, &pass).with_port(cli.rpc_port))
}

pub fn transport_config(cli: &Cli) -> TransportConfig {
    TransportConfig {
        connect_timeout: cli.connect_timeout_secs.map(Duration::from_secs),
        timeout: cli.timeout_secs.map(Duration::from_secs),
    }
}

pub fn transfer_policy(cli: &Cli) -> eyre::Result<TransferPolicy> {
    TransferPolicy::new(cli.min_transfer, cli.max_transfer).wrap_err("invalid transfer bounds")
}
