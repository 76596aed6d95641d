//! # Sync Error Types
//!
//! Error types for store, API and credential operations.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Sync Error Categories                             │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Validation     │  │   Transport     │  │     Protocol            │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  Validation     │  │  Transport      │  │  UnexpectedStatus       │ │
//! │  │  (empty field)  │  │  (send/connect) │  │  MissingData            │ │
//! │  │                 │  │                 │  │  MissingId              │ │
//! │  │                 │  │                 │  │  DeserializationFailed  │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐                              │
//! │  │   Credential    │  │  Configuration  │                              │
//! │  │                 │  │                 │                              │
//! │  │  CredentialRead │  │  InvalidConfig  │                              │
//! │  │  CredentialWrite│  │  InvalidUrl     │                              │
//! │  │                 │  │  ConfigLoad/Save│                              │
//! │  └─────────────────┘  └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every store operation turns these into a [`booktrack_core::Notice`];
//! none of them abort the application.

use booktrack_core::ValidationError;
use thiserror::Error;

/// Result type alias for sync operations.
pub type SyncResult<T> = Result<T, SyncError>;

/// Sync error type covering all possible client failures.
#[derive(Debug, Error)]
pub enum SyncError {
    // =========================================================================
    // Validation Errors
    // =========================================================================
    /// Draft rejected before any request was made.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    // =========================================================================
    // Transport Errors
    // =========================================================================
    /// The request could not be sent or the connection failed.
    #[error("Transport error: {0}")]
    Transport(String),

    // =========================================================================
    // Protocol Errors
    // =========================================================================
    /// The server answered with a non-success status.
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response had no usable `data` payload.
    #[error("Response has no data payload: {0}")]
    MissingData(String),

    /// A created or updated record came back without an id.
    #[error("Response record has no id")]
    MissingId,

    /// Failed to decode the response body.
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    // =========================================================================
    // Credential Errors
    // =========================================================================
    /// Reading the credential store failed.
    #[error("Failed to read credential: {0}")]
    CredentialRead(String),

    /// Writing the credential store failed.
    #[error("Failed to write credential: {0}")]
    CredentialWrite(String),

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid API base URL.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SyncError::DeserializationFailed(err.to_string())
        } else {
            SyncError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::DeserializationFailed(err.to_string())
    }
}

impl From<url::ParseError> for SyncError {
    fn from(err: url::ParseError) -> Self {
        SyncError::InvalidUrl(err.to_string())
    }
}

impl From<toml::de::Error> for SyncError {
    fn from(err: toml::de::Error) -> Self {
        SyncError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for SyncError {
    fn from(err: toml::ser::Error) -> Self {
        SyncError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl SyncError {
    /// Returns true if the request never completed.
    ///
    /// This is the only category that keeps a record visible after `remove`.
    pub fn is_transport(&self) -> bool {
        matches!(self, SyncError::Transport(_))
    }

    /// Returns true if a response arrived but could not be used.
    pub fn is_protocol(&self) -> bool {
        matches!(
            self,
            SyncError::UnexpectedStatus { .. }
                | SyncError::MissingData(_)
                | SyncError::MissingId
                | SyncError::DeserializationFailed(_)
        )
    }

    /// Returns true if the draft was rejected locally.
    pub fn is_validation(&self) -> bool {
        matches!(self, SyncError::Validation(_))
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            SyncError::InvalidConfig(_)
                | SyncError::InvalidUrl(_)
                | SyncError::ConfigLoadFailed(_)
                | SyncError::ConfigSaveFailed(_)
        )
    }
}
