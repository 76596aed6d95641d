//! # CLI Context
//!
//! Everything a command needs, built once per invocation.
//!
//! ```text
//! ClientConfig ──► FileCredentialStore ──► CredentialProvider ─┐
//!              └─► HttpBooksApi ───────────────────────────────┼──► BookStore
//!                                            ConsoleSink ──────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use booktrack_core::{Notice, NoticeKind};
use booktrack_sync::{
    BookStore, ClientConfig, CredentialProvider, CredentialStore, FileCredentialStore,
    HttpBooksApi, MemoryCredentialStore, NoticeSink,
};
use tracing::warn;

pub struct AppContext {
    pub config: ClientConfig,
    /// Config file in effect: `--config`, or the platform default.
    pub config_path: Option<PathBuf>,
    pub credentials: CredentialProvider,
    api: Arc<HttpBooksApi>,
}

impl AppContext {
    pub fn build(config_path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config_path = config_path.or_else(ClientConfig::default_config_path);
        let config =
            ClientConfig::load(config_path.clone()).context("loading client configuration")?;

        let store: Arc<dyn CredentialStore> = match config.credential_path() {
            Some(path) => Arc::new(FileCredentialStore::new(path)),
            None => {
                warn!("No data directory available, token will not persist");
                Arc::new(MemoryCredentialStore::new())
            }
        };

        let api = HttpBooksApi::from_config(&config).context("building HTTP client")?;

        Ok(AppContext {
            config,
            config_path,
            credentials: CredentialProvider::new(store),
            api: Arc::new(api),
        })
    }

    /// A fresh store that prints notices to the terminal.
    pub fn into_store(self) -> BookStore {
        BookStore::with_sink(self.api, self.credentials, Arc::new(ConsoleSink))
    }
}

/// Prints success notices to stdout and everything else to stderr.
pub struct ConsoleSink;

impl NoticeSink for ConsoleSink {
    fn notify(&self, notice: &Notice) {
        match notice.kind {
            NoticeKind::Success => println!("{}", render(notice)),
            NoticeKind::Failure | NoticeKind::Validation => eprintln!("{}", render(notice)),
        }
    }
}

pub fn render(notice: &Notice) -> String {
    let marker = match notice.kind {
        NoticeKind::Success => "✓",
        NoticeKind::Validation => "!",
        NoticeKind::Failure => "✗",
    };
    format!("{} {}", marker, notice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use booktrack_core::{BookOperation, SaveMode};

    #[test]
    fn test_render() {
        assert_eq!(
            render(&Notice::saved(&SaveMode::Create)),
            "✓ Added: Book added successfully!"
        );
        assert_eq!(
            render(&Notice::missing_fields(BookOperation::Create)),
            "! Missing fields: Please fill in all fields."
        );
        assert!(render(&Notice::unreachable(BookOperation::Delete)).starts_with("✗ Error:"));
    }

    #[test]
    fn test_explicit_config_path_is_reported() {
        let path = std::env::temp_dir().join("booktrack-absent-client.toml");
        let ctx = AppContext::build(Some(path.clone())).unwrap();
        assert_eq!(ctx.config_path, Some(path));
    }
}
