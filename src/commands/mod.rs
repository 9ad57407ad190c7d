/// Command dispatch: routes `Command` enum variants to their implementations.
pub mod consumer_info;
pub mod login;
pub mod recharge_info;
pub mod send_otp;

use anyhow::{Context, Result};

use bpdb::{MeterClient, MeterClientBuilder};

use crate::cli::Command;
use crate::cli::session;

/// Environment variable overriding the provider base URL.
pub const BASE_URL_ENV: &str = "BPDB_API_URL";

/// Dispatch a parsed `Command` to its handler.
///
/// # Errors
///
/// Returns any client or I/O failure; `main` maps it to stderr + exit 1.
pub async fn dispatch(command: &Command) -> Result<()> {
    match command {
        Command::SendOtp(args) => send_otp::run(args).await,
        Command::Login(args) => login::run(args).await,
        Command::RechargeInfo(args) => recharge_info::run(args).await,
        Command::ConsumerInfo => consumer_info::run().await,
    }
}

fn client_builder() -> MeterClientBuilder {
    let mut builder =
        MeterClient::builder().user_agent(concat!("bpdb/", env!("CARGO_PKG_VERSION")));
    if let Ok(base_url) = std::env::var(BASE_URL_ENV) {
        builder = builder.base_url(base_url);
    }
    builder
}

/// A fresh client with no session, for the unauthenticated operations.
fn fresh_client() -> Result<MeterClient> {
    Ok(client_builder().build()?)
}

/// A client seeded with the persisted session token from a prior `login`.
fn authenticated_client() -> Result<MeterClient> {
    let token = session::load()?
        .context("not logged in; run `bpdb login <PHONE_NUMBER> <OTP>` first")?;
    Ok(client_builder().session_token(token).build()?)
}
