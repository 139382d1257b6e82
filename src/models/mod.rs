//! Data models for the photo sharing service.
//!
//! This module contains the data structures used to represent service
//! data including:
//!
//! - `User`, `UserSearchResult`, `UserProfile`: account data
//! - `Photo`: a post with like and comment counts
//! - `Comment`: a single comment on a photo
//!
//! Serde renames mirror the service's JSON field names exactly. List
//! endpoints encode bare arrays (`null` when empty); the API client
//! normalizes those to empty vecs.

pub mod photo;
pub mod user;

pub use photo::{Comment, Photo};
pub use user::{User, UserProfile, UserSearchResult};
