//! # Credential Provider
//!
//! Resolves the stored bearer token into an `Authorization` header value.
//!
//! ## Resolution Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Credential Resolution                              │
//! │                                                                         │
//! │  BookStore op ──► resolve_auth_header()                                │
//! │                         │                                               │
//! │                         ▼                                               │
//! │               store.get("authToken")                                   │
//! │                         │                                               │
//! │          ┌──────────────┼──────────────────┐                           │
//! │          ▼              ▼                  ▼                            │
//! │     Ok(Some(t))      Ok(None)            Err(e)                         │
//! │          │              │                  │                            │
//! │          ▼              ▼                  ▼                            │
//! │   "Bearer <t>"         ""          warn!(..) then ""                    │
//! │                                                                         │
//! │  The request is always attempted; the server decides whether an       │
//! │  empty credential is acceptable. Tokens are never refreshed here.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use async_trait::async_trait;
use booktrack_core::AUTH_TOKEN_KEY;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::error::{SyncError, SyncResult};

// =============================================================================
// Credential Store
// =============================================================================

/// Asynchronous key-value store holding the session credential.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn get(&self, key: &str) -> SyncResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> SyncResult<()>;

    async fn remove(&self, key: &str) -> SyncResult<()>;
}

/// In-memory store. Lives as long as the process.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store already holding `token` under the auth key.
    pub fn with_token(token: impl Into<String>) -> Self {
        let mut entries = HashMap::new();
        entries.insert(AUTH_TOKEN_KEY.to_string(), token.into());
        MemoryCredentialStore {
            entries: RwLock::new(entries),
        }
    }
}

#[async_trait]
impl CredentialStore for MemoryCredentialStore {
    async fn get(&self, key: &str) -> SyncResult<Option<String>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> SyncResult<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> SyncResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

/// JSON file holding a flat string map.
///
/// A missing file reads as an empty store. Writes rewrite the whole file.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process
    lock: tokio::sync::Mutex<()>,
}

impl FileCredentialStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileCredentialStore {
            path: path.into(),
            lock: tokio::sync::Mutex::new(()),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    async fn read_map(&self) -> SyncResult<HashMap<String, String>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| SyncError::CredentialRead(format!("{}: {}", self.path.display(), e))),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(SyncError::CredentialRead(format!(
                "{}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    async fn write_map(&self, map: &HashMap<String, String>) -> SyncResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| SyncError::CredentialWrite(e.to_string()))?;
        }
        let bytes =
            serde_json::to_vec_pretty(map).map_err(|e| SyncError::CredentialWrite(e.to_string()))?;
        tokio::fs::write(&self.path, bytes)
            .await
            .map_err(|e| SyncError::CredentialWrite(format!("{}: {}", self.path.display(), e)))
    }
}

#[async_trait]
impl CredentialStore for FileCredentialStore {
    async fn get(&self, key: &str) -> SyncResult<Option<String>> {
        let _guard = self.lock.lock().await;
        Ok(self.read_map().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> SyncResult<()> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_map().await.unwrap_or_else(|e| {
            warn!(error = %e, "Credential file unreadable, starting fresh");
            HashMap::new()
        });
        map.insert(key.to_string(), value.to_string());
        self.write_map(&map).await
    }

    async fn remove(&self, key: &str) -> SyncResult<()> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_map().await?;
        if map.remove(key).is_some() {
            self.write_map(&map).await?;
        }
        Ok(())
    }
}

// =============================================================================
// Credential Provider
// =============================================================================

/// Turns the stored token into a header value, on demand.
#[derive(Clone)]
pub struct CredentialProvider {
    store: Arc<dyn CredentialStore>,
}

impl CredentialProvider {
    pub fn new(store: Arc<dyn CredentialStore>) -> Self {
        CredentialProvider { store }
    }

    /// Returns `"Bearer <token>"`, or `""` when no token can be read.
    ///
    /// Never fails: a store error is logged and treated as no credential.
    pub async fn resolve_auth_header(&self) -> String {
        match self.store.get(AUTH_TOKEN_KEY).await {
            Ok(Some(token)) if !token.is_empty() => format!("Bearer {}", token),
            Ok(_) => {
                debug!("No auth token stored, sending unauthenticated request");
                String::new()
            }
            Err(e) => {
                warn!(error = %e, "Error getting token, sending unauthenticated request");
                String::new()
            }
        }
    }

    /// Persists a token for subsequent requests (login).
    pub async fn store_token(&self, token: &str) -> SyncResult<()> {
        self.store.set(AUTH_TOKEN_KEY, token).await?;
        info!("Auth token stored");
        Ok(())
    }

    /// Forgets the token (logout).
    pub async fn clear_token(&self) -> SyncResult<()> {
        self.store.remove(AUTH_TOKEN_KEY).await?;
        info!("Auth token cleared");
        Ok(())
    }

    /// Whether a token is currently stored. Read failures count as absent.
    pub async fn has_token(&self) -> bool {
        matches!(self.store.get(AUTH_TOKEN_KEY).await, Ok(Some(t)) if !t.is_empty())
    }
}

impl std::fmt::Debug for CredentialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialProvider").finish_non_exhaustive()
    }
}
