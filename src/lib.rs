//! # Rollcall
//!
//! Project membership, roles and time-limited invitations behind a small
//! JSON API, usable both as a standalone binary and as a library.
//!
//! ## Library Usage
//!
//! ```toml
//! [dependencies]
//! rollcall = { version = "0.0.1", default-features = false }
//! ```
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use rollcall::server::{AppState, create_router};
//! use rollcall::store::{SqliteStore, Store};
//!
//! let store = SqliteStore::new("./data/rollcall.db").unwrap();
//! store.initialize().unwrap();
//!
//! let router = create_router(Arc::new(AppState::new(Arc::new(store))));
//! // Serve with axum...
//! ```
//!
//! The domain operations in [`access`] can also be called directly against any
//! [`store::Store`] implementation, without going through HTTP.
//!
//! ## Feature Flags
//!
//! - `cli` (default): Builds the `rollcall` binary. Disable with `default-features = false`.

pub mod access;
pub mod auth;
pub mod config;
pub mod error;
pub mod server;
pub mod store;
pub mod types;
pub mod validation;
