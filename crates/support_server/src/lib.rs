//! support_server - HTTP backend for the support assistant
//!
//! Serves the `/api` recording endpoints consumed by the dialog gateway,
//! computes freight quotes and persists every interaction in sqlite.

pub mod controllers;
pub mod quote;
pub mod server;
pub mod store;

pub use server::{run, AppState};
pub use store::{SqliteSupportStore, StoreError, StoreResult, SupportStore};
