//! # Auth Commands

use std::process::ExitCode;

use anyhow::Context;
use tracing::debug;

use crate::context::AppContext;

/// Stores `token` for subsequent requests.
pub async fn login(ctx: &AppContext, token: &str) -> anyhow::Result<ExitCode> {
    let token = token.trim();
    if token.is_empty() {
        eprintln!("! Token must not be empty.");
        return Ok(ExitCode::FAILURE);
    }

    ctx.credentials
        .store_token(token)
        .await
        .context("saving token")?;
    println!("Logged in.");
    Ok(ExitCode::SUCCESS)
}

pub async fn logout(ctx: &AppContext) -> anyhow::Result<ExitCode> {
    if !ctx.credentials.has_token().await {
        debug!("No token stored");
    }
    ctx.credentials.clear_token().await.context("removing token")?;
    println!("Logged out.");
    Ok(ExitCode::SUCCESS)
}
