//! # Booktrack CLI Entry Point
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (logging to stderr)
//! 3. Load client configuration
//! 4. Build the credential store, API client and book store
//! 5. Dispatch the subcommand

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod commands;
mod context;

use context::AppContext;

#[derive(Debug, Parser)]
#[command(name = "booktrack")]
#[command(version, about = "Manage your book list from the terminal", long_about = None)]
#[command(after_help = "EXAMPLES:
    booktrack login eyJhbGciOi...        Store a token
    booktrack add --title Dune --author Herbert --genre SciFi --description 'Desert planet'
    booktrack edit 64f0c2 --genre Fantasy
    booktrack delete 64f0c2")]
pub struct Cli {
    /// Config file (defaults to the platform config directory)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the bearer token used for every request
    Login {
        #[arg(value_name = "TOKEN")]
        token: String,
    },
    /// Forget the stored token
    Logout,
    /// Fetch and print all books
    List {
        /// Print the collection as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add a new book
    Add(BookFields),
    /// Edit an existing book; omitted fields keep their current value
    Edit {
        #[arg(value_name = "ID")]
        id: String,
        #[command(flatten)]
        fields: FieldOverrides,
    },
    /// Delete a book
    Delete {
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Print the effective configuration
    Config,
}

/// Form fields for a new book. Empty values are rejected before any request.
#[derive(Debug, Args)]
pub struct BookFields {
    #[arg(long, default_value = "")]
    pub title: String,
    #[arg(long, default_value = "")]
    pub author: String,
    #[arg(long, default_value = "")]
    pub genre: String,
    #[arg(long, default_value = "")]
    pub description: String,
}

#[derive(Debug, Args)]
pub struct FieldOverrides {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub author: Option<String>,
    #[arg(long)]
    pub genre: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let ctx = AppContext::build(cli.config)?;
    debug!(base_url = %ctx.config.base_url(), "Client ready");

    match cli.command {
        Command::Login { token } => commands::auth::login(&ctx, &token).await,
        Command::Logout => commands::auth::logout(&ctx).await,
        Command::List { json } => commands::books::list(ctx, json).await,
        Command::Add(fields) => commands::books::add(ctx, fields).await,
        Command::Edit { id, fields } => commands::books::edit(ctx, &id, fields).await,
        Command::Delete { id } => commands::books::delete(ctx, &id).await,
        Command::Config => commands::config::show(&ctx),
    }
}

/// Log filter used when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "info";

/// Initializes the tracing subscriber.
///
/// Logs go to stderr so stdout stays parseable (`list --json`).
/// Default level is `info`; override with `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_edit_overrides() {
        let cli = Cli::try_parse_from(["booktrack", "edit", "64f0", "--genre", "Fantasy"]).unwrap();
        match cli.command {
            Command::Edit { id, fields } => {
                assert_eq!(id, "64f0");
                assert_eq!(fields.genre.as_deref(), Some("Fantasy"));
                assert!(fields.title.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_add_fields_default_to_empty() {
        let cli = Cli::try_parse_from(["booktrack", "add", "--title", "Dune"]).unwrap();
        match cli.command {
            Command::Add(fields) => {
                assert_eq!(fields.title, "Dune");
                assert_eq!(fields.author, "");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::try_parse_from(["booktrack", "list", "--config", "/tmp/c.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn test_default_log_level_is_info() {
        use tracing_subscriber::filter::LevelFilter;

        let filter = EnvFilter::new(DEFAULT_LOG_FILTER);
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
    }

    #[test]
    fn test_login_requires_token() {
        assert!(Cli::try_parse_from(["booktrack", "login"]).is_err());
    }
}
