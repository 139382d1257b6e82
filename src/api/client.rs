//! API client for communicating with the photo sharing service.
//!
//! This module provides the `ApiClient` struct: one shared HTTP client
//! configured with the service base URL and a fixed request timeout, plus
//! typed methods for every endpoint the views use.
//!
//! The service authenticates with a bearer token issued at login
//! (POST `/session`). The client keeps the Authorization header as its
//! only mutable piece of shared configuration: `refresh_auth_header`
//! recomputes it from the token store, and each request attaches the value
//! current at send time. Requests already in flight are not retroactively
//! updated.

use anyhow::{Context, Result};
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::models::{Comment, Photo, User, UserProfile, UserSearchResult};
use crate::session::TokenStore;

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// Fallback service endpoint when no base URL is injected at build time.
const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Base URL override injected at build time via `GRAMLINE_API_URL`.
const BUILD_API_BASE_URL: Option<&str> = option_env!("GRAMLINE_API_URL");

/// HTTP request timeout in seconds.
const REQUEST_TIMEOUT_SECS: u64 = 50;

#[derive(Serialize)]
struct LoginRequest<'a> {
    #[serde(rename = "Username")]
    username: &'a str,
}

#[derive(Serialize)]
struct RenameRequest<'a> {
    #[serde(rename = "Username")]
    username: &'a str,
}

#[derive(Serialize)]
struct CommentRequest<'a> {
    #[serde(rename = "Content")]
    content: &'a str,
}

/// API client for the photo sharing service.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    auth_header: Option<header::HeaderValue>,
}

impl ApiClient {
    /// Create a new API client against the configured base URL.
    pub fn new() -> Result<Self> {
        Self::with_base_url(BUILD_API_BASE_URL.unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Create a new API client against an explicit base URL.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_header: None,
        })
    }

    /// Recompute the default Authorization header from the token store.
    ///
    /// Must be called whenever the token may have changed (login, logout);
    /// the client does not observe storage changes on its own. With no
    /// token present the header is omitted entirely rather than sent with
    /// a placeholder value.
    pub fn refresh_auth_header(&mut self, store: &TokenStore) -> Result<()> {
        self.auth_header = match store.current_session() {
            Some(token) => Some(
                header::HeaderValue::from_str(&format!("Bearer {}", token))
                    .context("Token is not a valid header value")?,
            ),
            None => None,
        };
        debug!(present = self.auth_header.is_some(), "Auth header refreshed");
        Ok(())
    }

    /// The current default Authorization header value, if any.
    pub fn auth_header(&self) -> Option<&str> {
        self.auth_header.as_ref().and_then(|v| v.to_str().ok())
    }

    fn auth_headers(&self) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        if let Some(ref value) = self.auth_header {
            headers.insert(header::AUTHORIZATION, value.clone());
        }
        headers
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers())
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    /// GET a list endpoint. The service encodes empty lists as `null`.
    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>> {
        let items: Option<Vec<T>> = self.get(path).await?;
        Ok(items.unwrap_or_default())
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers())
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.url(path);
        let response = self
            .client
            .put(&url)
            .headers(self.auth_headers())
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send PUT request to {}", url))?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    /// PUT with no request body, discarding the response payload.
    async fn put_unit(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        let response = self
            .client
            .put(&url)
            .headers(self.auth_headers())
            .send()
            .await
            .with_context(|| format!("Failed to send PUT request to {}", url))?;

        Self::check_response(response).await?;
        Ok(())
    }

    /// DELETE, discarding the response payload.
    async fn delete_unit(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        let response = self
            .client
            .delete(&url)
            .headers(self.auth_headers())
            .send()
            .await
            .with_context(|| format!("Failed to send DELETE request to {}", url))?;

        Self::check_response(response).await?;
        Ok(())
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Log in with a username. The service creates the account on first
    /// login and returns it; the returned id doubles as the bearer token.
    pub async fn login(&self, username: &str) -> Result<User> {
        self.post("/session", &LoginRequest { username }).await
    }

    // =========================================================================
    // Feed
    // =========================================================================

    /// Fetch the authenticated user's feed: photos of followed users.
    pub async fn feed(&self) -> Result<Vec<Photo>> {
        self.get_list("/feed").await
    }

    // =========================================================================
    // Users
    // =========================================================================

    /// Search users by username fragment.
    pub async fn search_users(&self, query: &str) -> Result<Vec<UserSearchResult>> {
        let path = format!("/users?username={}", urlencode(query));
        self.get_list(&path).await
    }

    /// Fetch the extended profile for a user.
    pub async fn user_profile(&self, user_id: &str) -> Result<UserProfile> {
        self.get(&format!("/users/{}", user_id)).await
    }

    /// Fetch a user's posted photos.
    pub async fn user_photos(&self, user_id: &str) -> Result<Vec<Photo>> {
        self.get_list(&format!("/users/{}/photos", user_id)).await
    }

    /// Change the authenticated user's username.
    pub async fn set_username(&self, user_id: i64, username: &str) -> Result<User> {
        self.put(&format!("/users/{}", user_id), &RenameRequest { username })
            .await
    }

    pub async fn follow(&self, me: i64, them: i64) -> Result<()> {
        self.put_unit(&format!("/users/{}/follow/{}", me, them)).await
    }

    pub async fn unfollow(&self, me: i64, them: i64) -> Result<()> {
        self.delete_unit(&format!("/users/{}/follow/{}", me, them)).await
    }

    pub async fn ban(&self, me: i64, them: i64) -> Result<()> {
        self.put_unit(&format!("/users/{}/ban/{}", me, them)).await
    }

    pub async fn unban(&self, me: i64, them: i64) -> Result<()> {
        self.delete_unit(&format!("/users/{}/ban/{}", me, them)).await
    }

    // =========================================================================
    // Photos
    // =========================================================================

    pub async fn like(&self, photo_id: i64, me: i64) -> Result<()> {
        self.put_unit(&format!("/photos/{}/like/{}", photo_id, me)).await
    }

    pub async fn unlike(&self, photo_id: i64, me: i64) -> Result<()> {
        self.delete_unit(&format!("/photos/{}/like/{}", photo_id, me)).await
    }

    pub async fn delete_photo(&self, photo_id: i64) -> Result<()> {
        self.delete_unit(&format!("/photos/{}", photo_id)).await
    }

    // =========================================================================
    // Comments
    // =========================================================================

    pub async fn comments(&self, photo_id: i64) -> Result<Vec<Comment>> {
        self.get_list(&format!("/photos/{}/comments", photo_id)).await
    }

    pub async fn add_comment(&self, photo_id: i64, content: &str) -> Result<Comment> {
        self.post(
            &format!("/photos/{}/comments", photo_id),
            &CommentRequest { content },
        )
        .await
    }

    pub async fn delete_comment(&self, comment_id: i64) -> Result<()> {
        self.delete_unit(&format!("/comments/{}", comment_id)).await
    }
}

/// Percent-encode a query value. Covers the characters a username search
/// can realistically contain; everything unreserved passes through.
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Scope;

    /// Token store over throwaway directories unique to the test.
    fn scratch_store(name: &str) -> TokenStore {
        let base = std::env::temp_dir()
            .join("gramline-tests")
            .join(format!("client-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&base);
        TokenStore::new(base.join("persistent"), base.join("session"))
    }

    #[test]
    fn test_refresh_auth_header_sets_bearer() {
        let store = scratch_store("bearer");
        store.store(Scope::Persistent, "abc").unwrap();

        let mut client = ApiClient::with_base_url("http://example.test").unwrap();
        client.refresh_auth_header(&store).unwrap();

        assert_eq!(client.auth_header(), Some("Bearer abc"));
    }

    #[test]
    fn test_refresh_auth_header_prefers_persistent_scope() {
        let store = scratch_store("precedence");
        store.store(Scope::Persistent, "abc").unwrap();
        store.store(Scope::Session, "xyz").unwrap();

        let mut client = ApiClient::with_base_url("http://example.test").unwrap();
        client.refresh_auth_header(&store).unwrap();

        assert_eq!(client.auth_header(), Some("Bearer abc"));
    }

    #[test]
    fn test_refresh_auth_header_omitted_without_token() {
        let store = scratch_store("absent");

        let mut client = ApiClient::with_base_url("http://example.test").unwrap();
        client.refresh_auth_header(&store).unwrap();
        assert_eq!(client.auth_header(), None);
        assert!(client.auth_headers().is_empty());
    }

    #[test]
    fn test_refresh_auth_header_clears_after_logout() {
        let store = scratch_store("logout");
        store.store(Scope::Session, "xyz").unwrap();

        let mut client = ApiClient::with_base_url("http://example.test").unwrap();
        client.refresh_auth_header(&store).unwrap();
        assert_eq!(client.auth_header(), Some("Bearer xyz"));

        store.clear().unwrap();
        client.refresh_auth_header(&store).unwrap();
        assert_eq!(client.auth_header(), None);
    }

    #[test]
    fn test_url_building() {
        let client = ApiClient::with_base_url("http://example.test/").unwrap();
        assert_eq!(client.url("/feed"), "http://example.test/feed");
        assert_eq!(client.url("/users/42"), "http://example.test/users/42");
    }

    #[test]
    fn test_urlencode() {
        assert_eq!(urlencode("maria"), "maria");
        assert_eq!(urlencode("two words"), "two%20words");
        assert_eq!(urlencode("a&b=c"), "a%26b%3Dc");
    }
}
