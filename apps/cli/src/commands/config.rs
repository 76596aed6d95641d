//! # Config Command

use std::process::ExitCode;

use crate::context::AppContext;

/// Prints the effective configuration as TOML, plus resolved paths.
pub fn show(ctx: &AppContext) -> anyhow::Result<ExitCode> {
    print!("{}", toml::to_string_pretty(&ctx.config)?);
    println!();

    let display = |path: Option<std::path::PathBuf>| {
        path.map(|p| p.display().to_string())
            .unwrap_or_else(|| "<unavailable>".to_string())
    };
    println!("# config file: {}", display(ctx.config_path.clone()));
    println!("# credentials: {}", display(ctx.config.credential_path()));
    Ok(ExitCode::SUCCESS)
}
