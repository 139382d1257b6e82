//! Session token storage.
//!
//! This module provides `TokenStore`, which resolves the current
//! authentication token from one of two storage scopes:
//!
//! - persistent scope: retained across client sessions
//! - session scope: cleared when the login session ends
//!
//! The persistent scope takes precedence when both hold a value.

pub mod store;

pub use store::{Scope, TokenStore};
