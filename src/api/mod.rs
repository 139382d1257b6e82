//! REST API client module for the photo sharing service.
//!
//! This module provides the `ApiClient` for communicating with the
//! service to fetch feed, user, and comment data.
//!
//! Every authenticated request carries `Authorization: Bearer <token>`;
//! the header value is recomputed from the token store on demand.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
