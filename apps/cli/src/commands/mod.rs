//! # CLI Commands
//!
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── auth.rs     ◄─── login / logout
//! ├── books.rs    ◄─── list / add / edit / delete
//! └── config.rs   ◄─── effective configuration
//! ```
//!
//! Each command returns the process exit code. A failed store operation has
//! already been reported through the notice sink, so it maps to
//! `ExitCode::FAILURE` rather than an error; `Err` is reserved for problems
//! the sink never saw (config, credential file).

pub mod auth;
pub mod books;
pub mod config;
