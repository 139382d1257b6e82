//! Application state management for gramline.
//!
//! This module contains the core `App` struct that manages all application
//! state: the current route, per-view data, the shared API client, the
//! token store, and background fetch coordination.
//!
//! Views never reach for globals; they receive the `App` (which owns the
//! client and the session accessor) by reference.

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, info, warn};

use crate::api::ApiClient;
use crate::config::Config;
use crate::models::{Comment, Photo, User, UserProfile, UserSearchResult};
use crate::router::Route;
use crate::session::{Scope, TokenStore};

// ============================================================================
// Constants
// ============================================================================

/// Buffer size for the background fetch message channel.
/// A route load produces at most a couple of messages; 32 leaves headroom.
const CHANNEL_BUFFER_SIZE: usize = 32;

/// Maximum length for username input.
const MAX_USERNAME_LENGTH: usize = 50;

/// Maximum length for search query input.
const MAX_QUERY_LENGTH: usize = 50;

/// Maximum length for comment input.
const MAX_COMMENT_LENGTH: usize = 200;

/// Maximum length for the goto-path prompt.
const MAX_PATH_LENGTH: usize = 80;

/// Number of items to scroll on page up/down.
pub const PAGE_SCROLL_SIZE: usize = 10;

// ============================================================================
// UI State Types
// ============================================================================

/// Overall application state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Normal,
    Prompting(PromptKind),
    ShowingHelp,
    ConfirmingQuit,
    Quitting,
}

/// What a text prompt overlay is collecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    /// A fragment path to navigate to, e.g. `/users/42`
    Path,
    /// A comment on the selected photo
    Comment,
    /// A new username for the authenticated user
    Rename,
}

impl PromptKind {
    pub fn label(&self) -> &'static str {
        match self {
            PromptKind::Path => "Go to path",
            PromptKind::Comment => "Comment",
            PromptKind::Rename => "New username",
        }
    }

    fn max_len(&self) -> usize {
        match self {
            PromptKind::Path => MAX_PATH_LENGTH,
            PromptKind::Comment => MAX_COMMENT_LENGTH,
            PromptKind::Rename => MAX_USERNAME_LENGTH,
        }
    }
}

/// Login form focus state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Username,
    Remember,
    Button,
}

/// Current focus on the home and profile views (photo list or comment pane)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Comments,
}

// ============================================================================
// Background Fetch Results
// ============================================================================

/// Result types from background fetch tasks.
///
/// These variants are sent through an MPSC channel from spawned fetch
/// tasks back to the main application loop.
enum FetchResult {
    /// Feed photos for the home view
    Feed(Vec<Photo>),
    /// Search hits for the search view
    SearchResults(Vec<UserSearchResult>),
    /// Profile data plus the user's photos (profile view, fetched together)
    Profile(Box<UserProfile>, Vec<Photo>),
    /// Comments for a photo (photo_id, comments)
    Comments(i64, Vec<Comment>),
    /// A mutation (like, follow, ban, comment, rename) finished
    ActionDone,
    /// A fetch failed
    Error(String),
}

// ============================================================================
// Main Application Struct
// ============================================================================

/// Main application state container
pub struct App {
    // Core services
    pub config: Config,
    pub store: TokenStore,
    pub api: ApiClient,

    // Navigation
    pub route: Route,
    pub state: AppState,
    pub focus: Focus,

    // Prompt overlay input
    pub prompt_input: String,

    // Login form state
    pub login_username: String,
    pub login_remember: bool,
    pub login_focus: LoginFocus,
    pub login_error: Option<String>,

    // Authenticated user, known after login (or derived from the token)
    pub current_user: Option<User>,

    // Home view state
    pub feed: Vec<Photo>,
    pub feed_selection: usize,
    pub feed_loading: bool,

    // Search view state
    pub search_query: String,
    pub search_results: Vec<UserSearchResult>,
    pub search_selection: usize,
    pub search_loading: bool,
    /// Whether keystrokes edit the query (vs. browse the results)
    pub search_editing: bool,

    // Profile view state
    pub profile: Option<UserProfile>,
    pub profile_photos: Vec<Photo>,
    pub profile_selection: usize,
    pub profile_loading: bool,
    /// Whether the viewer follows the profiled user. The profile payload
    /// does not carry this; it is seeded from the search hit that led
    /// here and flipped locally on toggle.
    pub profile_followed: Option<bool>,

    // Comments pane (home and profile views)
    pub comments: Vec<Comment>,
    pub comments_photo_id: Option<i64>,
    pub comments_selection: usize,

    // Background fetch channel
    fetch_rx: mpsc::Receiver<FetchResult>,
    fetch_tx: mpsc::Sender<FetchResult>,

    // Transient error shown on the current view
    pub view_error: Option<String>,

    // Status message for the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new application instance over the platform default
    /// directories. This performs the session/token bootstrap: resolve the
    /// token from storage, attach it to the client, and pick the initial
    /// route by session presence.
    pub fn new() -> Result<Self> {
        let config = match Config::load() {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Config::default()
            }
        };

        let store = TokenStore::from_env()?;
        Self::with_parts(config, store)
    }

    /// Create an application instance over an explicit token store.
    pub fn with_parts(config: Config, store: TokenStore) -> Result<Self> {
        let mut api = ApiClient::new()?;
        api.refresh_auth_header(&store)?;

        let route = if store.has_session() {
            Route::Home
        } else {
            Route::Login
        };
        debug!(path = %route.path(), "Initial route resolved");

        let (tx, rx) = mpsc::channel(CHANNEL_BUFFER_SIZE);

        let login_username = config.last_username.clone().unwrap_or_default();
        let login_remember = config.remember_me;

        Ok(Self {
            config,
            store,
            api,

            route,
            state: AppState::Normal,
            focus: Focus::List,

            prompt_input: String::new(),

            login_username,
            login_remember,
            login_focus: LoginFocus::Username,
            login_error: None,

            current_user: None,

            feed: Vec::new(),
            feed_selection: 0,
            feed_loading: false,

            search_query: String::new(),
            search_results: Vec::new(),
            search_selection: 0,
            search_loading: false,
            search_editing: true,

            profile: None,
            profile_photos: Vec::new(),
            profile_selection: 0,
            profile_loading: false,
            profile_followed: None,

            comments: Vec::new(),
            comments_photo_id: None,
            comments_selection: 0,

            fetch_rx: rx,
            fetch_tx: tx,

            view_error: None,
            status_message: None,
        })
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Whether a session token is currently present in either scope.
    pub fn is_authenticated(&self) -> bool {
        self.store.has_session()
    }

    /// The authenticated user's id, parsed from the bearer token.
    /// The service issues the account id as the token at login.
    pub fn my_id(&self) -> Option<i64> {
        self.store.current_session()?.parse().ok()
    }

    /// Attempt login with the username from the login form.
    pub async fn attempt_login(&mut self) -> Result<()> {
        let username = self.login_username.trim().to_string();
        if username.is_empty() {
            self.login_error = Some("Username required".to_string());
            return Err(anyhow::anyhow!("Username required"));
        }

        self.login_error = None;

        match self.api.login(&username).await {
            Ok(user) => {
                let scope = if self.login_remember {
                    Scope::Persistent
                } else {
                    Scope::Session
                };
                self.store.store(scope, &user.id.to_string())?;
                self.api.refresh_auth_header(&self.store)?;

                self.config.last_username = Some(username);
                self.config.remember_me = self.login_remember;
                if let Err(e) = self.config.save() {
                    warn!(error = %e, "Failed to save config");
                }

                info!(user_id = user.id, "Login successful");
                self.current_user = Some(user);
                self.set_route(Route::Home);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Login failed");
                let text = e.to_string().to_lowercase();
                let user_message = if text.contains("network") || text.contains("connect") {
                    "Unable to connect to server. Check your connection.".to_string()
                } else if text.contains("timed out") || text.contains("timeout") {
                    "Connection timed out. Please try again.".to_string()
                } else {
                    format!("Login failed: {}", e)
                };
                self.login_error = Some(user_message);
                Err(e)
            }
        }
    }

    /// Clear the session from both scopes and return to the login view.
    pub fn logout(&mut self) {
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "Failed to clear token storage");
        }
        if let Err(e) = self.api.refresh_auth_header(&self.store) {
            warn!(error = %e, "Failed to refresh auth header");
        }
        self.current_user = None;
        self.feed.clear();
        self.status_message = Some("Logged out".to_string());
        self.set_route(Route::Login);
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Navigate to a fragment path.
    ///
    /// Unmapped paths are a no-op: the current view is retained and the
    /// failure is surfaced in the status bar.
    pub fn navigate(&mut self, path: &str) {
        match Route::parse(path) {
            Some(route) => self.set_route(route),
            None => {
                warn!(path, "No route matches path");
                self.status_message = Some(format!("No view for {}", path));
            }
        }
    }

    /// Switch to a route and kick off its data load.
    pub fn set_route(&mut self, route: Route) {
        // The home feed is meaningless without a session; land on login.
        let route = if matches!(route, Route::Home) && !self.is_authenticated() {
            Route::Login
        } else {
            route
        };

        debug!(path = %route.path(), "Navigating");
        self.view_error = None;
        self.focus = Focus::List;
        self.comments.clear();
        self.comments_photo_id = None;
        self.comments_selection = 0;

        match &route {
            Route::Home => {
                self.feed_selection = 0;
                self.load_feed();
            }
            Route::Login => {
                self.login_focus = if self.login_username.is_empty() {
                    LoginFocus::Username
                } else {
                    LoginFocus::Button
                };
                self.login_error = None;
            }
            Route::Search => {
                self.search_selection = 0;
                self.search_editing = true;
            }
            Route::Profile { user_id } => {
                self.profile = None;
                self.profile_photos.clear();
                self.profile_selection = 0;
                self.profile_followed = self
                    .search_results
                    .iter()
                    .find(|u| u.id.to_string() == *user_id)
                    .map(|u| u.followed);
                self.load_profile(user_id.clone());
            }
        }

        self.route = route;
    }

    // =========================================================================
    // Background Fetches
    // =========================================================================

    fn load_feed(&mut self) {
        self.feed_loading = true;
        let api = self.api.clone();
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = match api.feed().await {
                Ok(photos) => FetchResult::Feed(photos),
                Err(e) => FetchResult::Error(format!("Failed to load feed: {}", e)),
            };
            let _ = tx.send(result).await;
        });
    }

    fn load_profile(&mut self, user_id: String) {
        self.profile_loading = true;
        let api = self.api.clone();
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let profile = api.user_profile(&user_id);
            let photos = api.user_photos(&user_id);
            let result = match futures::join!(profile, photos) {
                (Ok(profile), Ok(photos)) => FetchResult::Profile(Box::new(profile), photos),
                (Err(e), _) | (_, Err(e)) => {
                    FetchResult::Error(format!("Failed to load profile: {}", e))
                }
            };
            let _ = tx.send(result).await;
        });
    }

    /// Run the current search query.
    pub fn run_search(&mut self) {
        let query = self.search_query.trim().to_string();
        if query.is_empty() {
            return;
        }
        self.search_loading = true;
        let api = self.api.clone();
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = match api.search_users(&query).await {
                Ok(users) => FetchResult::SearchResults(users),
                Err(e) => FetchResult::Error(format!("Search failed: {}", e)),
            };
            let _ = tx.send(result).await;
        });
    }

    /// Load comments for the selected photo and focus the comment pane.
    pub fn open_comments(&mut self) {
        let Some(photo) = self.selected_photo() else {
            return;
        };
        let photo_id = photo.id;
        self.focus = Focus::Comments;
        self.comments_photo_id = Some(photo_id);
        self.comments_selection = 0;

        let api = self.api.clone();
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = match api.comments(photo_id).await {
                Ok(comments) => FetchResult::Comments(photo_id, comments),
                Err(e) => FetchResult::Error(format!("Failed to load comments: {}", e)),
            };
            let _ = tx.send(result).await;
        });
    }

    /// Drain completed background fetches into view state.
    pub fn check_background_tasks(&mut self) {
        while let Ok(result) = self.fetch_rx.try_recv() {
            match result {
                FetchResult::Feed(photos) => {
                    self.feed_loading = false;
                    self.feed_selection = self.feed_selection.min(photos.len().saturating_sub(1));
                    self.feed = photos;
                }
                FetchResult::SearchResults(users) => {
                    self.search_loading = false;
                    self.search_selection = 0;
                    self.search_results = users;
                }
                FetchResult::Profile(profile, photos) => {
                    self.profile_loading = false;
                    self.profile_selection =
                        self.profile_selection.min(photos.len().saturating_sub(1));
                    self.profile = Some(*profile);
                    self.profile_photos = photos;
                }
                FetchResult::Comments(photo_id, comments) => {
                    if self.comments_photo_id == Some(photo_id) {
                        self.comments_selection = 0;
                        self.comments = comments;
                    }
                }
                FetchResult::ActionDone => {
                    self.reload();
                }
                FetchResult::Error(message) => {
                    self.feed_loading = false;
                    self.search_loading = false;
                    self.profile_loading = false;
                    error!(error = %message, "Background fetch failed");
                    self.view_error = Some(message);
                }
            }
        }
    }

    /// Refetch the data behind the current route.
    pub fn reload(&mut self) {
        match self.route.clone() {
            Route::Home => self.load_feed(),
            Route::Profile { user_id } => self.load_profile(user_id),
            Route::Login | Route::Search => {}
        }
        if let Some(photo_id) = self.comments_photo_id {
            let api = self.api.clone();
            let tx = self.fetch_tx.clone();
            tokio::spawn(async move {
                if let Ok(comments) = api.comments(photo_id).await {
                    let _ = tx.send(FetchResult::Comments(photo_id, comments)).await;
                }
            });
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Spawn a mutation, reporting completion (or failure) on the channel.
    fn spawn_action<F>(&self, action: F)
    where
        F: std::future::Future<Output = Result<()>> + Send + 'static,
    {
        let tx = self.fetch_tx.clone();
        tokio::spawn(async move {
            let result = match action.await {
                Ok(()) => FetchResult::ActionDone,
                Err(e) => FetchResult::Error(e.to_string()),
            };
            let _ = tx.send(result).await;
        });
    }

    /// Like or unlike the selected photo.
    pub fn toggle_like(&mut self) {
        let Some(me) = self.my_id() else {
            self.status_message = Some("Login to like photos".to_string());
            return;
        };
        let Some(photo) = self.selected_photo() else {
            return;
        };
        let (photo_id, liked) = (photo.id, photo.liked);
        let api = self.api.clone();
        self.spawn_action(async move {
            if liked {
                api.unlike(photo_id, me).await
            } else {
                api.like(photo_id, me).await
            }
        });
    }

    /// Follow or unfollow the profiled user.
    pub fn toggle_follow(&mut self) {
        let Some(me) = self.my_id() else {
            return;
        };
        let Some(profile) = self.profile.as_ref() else {
            return;
        };
        let them = profile.id;
        let following = self.profile_followed.unwrap_or(false);
        let api = self.api.clone();
        self.spawn_action(async move {
            if following {
                api.unfollow(me, them).await
            } else {
                api.follow(me, them).await
            }
        });
        self.profile_followed = Some(!following);
        self.status_message = Some(if following {
            "Unfollowed".to_string()
        } else {
            "Followed".to_string()
        });
    }

    /// Ban or unban the profiled user.
    pub fn toggle_ban(&mut self) {
        let Some(me) = self.my_id() else {
            return;
        };
        let Some(profile) = self.profile.as_ref() else {
            return;
        };
        let (them, banned) = (profile.id, profile.banned != 0);
        let api = self.api.clone();
        self.spawn_action(async move {
            if banned {
                api.unban(me, them).await
            } else {
                api.ban(me, them).await
            }
        });
    }

    /// Delete the selected photo on one's own profile.
    pub fn delete_selected_photo(&mut self) {
        if !self.viewing_own_profile() {
            return;
        }
        let Some(photo) = self.selected_photo() else {
            return;
        };
        let photo_id = photo.id;
        let api = self.api.clone();
        self.spawn_action(async move { api.delete_photo(photo_id).await });
        self.status_message = Some("Photo deleted".to_string());
    }

    /// Submit the comment prompt against the selected photo.
    pub fn submit_comment(&mut self) {
        let content = self.prompt_input.trim().to_string();
        if content.is_empty() {
            return;
        }
        let Some(photo) = self.selected_photo() else {
            return;
        };
        let photo_id = photo.id;
        self.comments_photo_id = Some(photo_id);
        let api = self.api.clone();
        self.spawn_action(async move {
            api.add_comment(photo_id, &content).await?;
            Ok(())
        });
    }

    /// Delete the selected comment, if it belongs to the viewer.
    pub fn delete_selected_comment(&mut self) {
        let Some(comment) = self.comments.get(self.comments_selection) else {
            return;
        };
        if Some(comment.user_id) != self.my_id() {
            self.status_message = Some("Only your own comments can be deleted".to_string());
            return;
        }
        let comment_id = comment.id;
        let api = self.api.clone();
        self.spawn_action(async move { api.delete_comment(comment_id).await });
    }

    /// Submit the rename prompt for the authenticated user.
    pub fn submit_rename(&mut self) {
        let username = self.prompt_input.trim().to_string();
        if username.is_empty() {
            return;
        }
        let Some(me) = self.my_id() else {
            return;
        };
        let api = self.api.clone();
        self.spawn_action(async move {
            api.set_username(me, &username).await?;
            Ok(())
        });
        self.status_message = Some("Username updated".to_string());
    }

    // =========================================================================
    // Selection helpers
    // =========================================================================

    /// The selected photo on the current view, if any.
    pub fn selected_photo(&self) -> Option<&Photo> {
        match self.route {
            Route::Profile { .. } => self.profile_photos.get(self.profile_selection),
            _ => self.feed.get(self.feed_selection),
        }
    }

    /// Whether the profile view is showing the authenticated user.
    pub fn viewing_own_profile(&self) -> bool {
        match (&self.profile, self.my_id()) {
            (Some(profile), Some(me)) => profile.id == me,
            _ => false,
        }
    }

    /// Move the active list selection by a signed amount, clamped.
    pub fn move_selection(&mut self, delta: isize) {
        let (selection, len) = match (&self.route, self.focus) {
            (_, Focus::Comments) => (&mut self.comments_selection, self.comments.len()),
            (Route::Home, _) => (&mut self.feed_selection, self.feed.len()),
            (Route::Search, _) => (&mut self.search_selection, self.search_results.len()),
            (Route::Profile { .. }, _) => (&mut self.profile_selection, self.profile_photos.len()),
            (Route::Login, _) => return,
        };
        if len == 0 {
            *selection = 0;
            return;
        }
        let max = len - 1;
        let next = selection.saturating_add_signed(delta);
        *selection = next.min(max);
    }

    // =========================================================================
    // Prompt overlay
    // =========================================================================

    /// Open a text prompt overlay.
    pub fn open_prompt(&mut self, kind: PromptKind) {
        self.prompt_input.clear();
        self.state = AppState::Prompting(kind);
    }

    /// Accept the prompt input and perform its action.
    pub fn submit_prompt(&mut self) {
        let AppState::Prompting(kind) = self.state else {
            return;
        };
        self.state = AppState::Normal;
        match kind {
            PromptKind::Path => {
                let path = self.prompt_input.trim().to_string();
                if !path.is_empty() {
                    self.navigate(&path);
                }
            }
            PromptKind::Comment => self.submit_comment(),
            PromptKind::Rename => self.submit_rename(),
        }
        self.prompt_input.clear();
    }

    /// Append a character to the prompt buffer, subject to length limits.
    pub fn push_prompt_char(&mut self, c: char) {
        if let AppState::Prompting(kind) = self.state {
            if self.prompt_input.len() < kind.max_len() && is_valid_input_char(c) {
                self.prompt_input.push(c);
            }
        }
    }
}

// ============================================================================
// Input guards
// ============================================================================

/// Reject control characters in text input.
fn is_valid_input_char(c: char) -> bool {
    !c.is_control()
}

/// Check if a username character should be accepted
pub fn can_add_username_char(current_len: usize, c: char) -> bool {
    current_len < MAX_USERNAME_LENGTH && is_valid_input_char(c)
}

/// Check if a search query character should be accepted
pub fn can_add_query_char(current_len: usize, c: char) -> bool {
    current_len < MAX_QUERY_LENGTH && is_valid_input_char(c)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// App over throwaway storage directories unique to the test.
    fn scratch_app(name: &str) -> App {
        let base = std::env::temp_dir()
            .join("gramline-tests")
            .join(format!("app-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&base);
        let store = TokenStore::new(base.join("persistent"), base.join("session"));
        App::with_parts(Config::default(), store).unwrap()
    }

    // -------------------------------------------------------------------------
    // Bootstrap Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_initial_route_without_session_is_login() {
        let app = scratch_app("no-session");
        assert_eq!(app.route, Route::Login);
        assert!(!app.is_authenticated());
        assert_eq!(app.api.auth_header(), None);
    }

    #[test]
    fn test_initial_route_with_session_is_home() {
        let base = std::env::temp_dir()
            .join("gramline-tests")
            .join(format!("app-session-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&base);
        let store = TokenStore::new(base.join("persistent"), base.join("session"));
        store.store(Scope::Persistent, "42").unwrap();

        let app = App::with_parts(Config::default(), store).unwrap();
        assert_eq!(app.route, Route::Home);
        assert_eq!(app.api.auth_header(), Some("Bearer 42"));
        assert_eq!(app.my_id(), Some(42));
    }

    // -------------------------------------------------------------------------
    // Navigation Tests
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_navigate_to_profile_path() {
        let mut app = scratch_app("nav-profile");
        app.navigate("/users/42");
        assert_eq!(
            app.route,
            Route::Profile {
                user_id: "42".to_string()
            }
        );
        assert!(app.profile_loading);
    }

    #[test]
    fn test_navigate_unmapped_path_is_noop() {
        let mut app = scratch_app("nav-unmapped");
        app.navigate("/does/not/exist");
        assert_eq!(app.route, Route::Login);
        assert!(app.status_message.as_deref().unwrap_or("").contains("/does/not/exist"));
    }

    #[test]
    fn test_navigate_home_without_session_lands_on_login() {
        let mut app = scratch_app("nav-home-guard");
        app.navigate("/");
        assert_eq!(app.route, Route::Login);
    }

    #[tokio::test]
    async fn test_navigate_accepts_hash_prefix() {
        let mut app = scratch_app("nav-hash");
        app.navigate("#/search");
        assert_eq!(app.route, Route::Search);
    }

    // -------------------------------------------------------------------------
    // Selection Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_move_selection_clamps() {
        let mut app = scratch_app("selection");
        app.route = Route::Search;
        app.search_results = vec![
            UserSearchResult {
                id: 1,
                username: "a".to_string(),
                followed: false,
                banned: false,
            },
            UserSearchResult {
                id: 2,
                username: "b".to_string(),
                followed: false,
                banned: false,
            },
        ];

        app.move_selection(1);
        assert_eq!(app.search_selection, 1);
        app.move_selection(10);
        assert_eq!(app.search_selection, 1);
        app.move_selection(-10);
        assert_eq!(app.search_selection, 0);
    }

    #[test]
    fn test_move_selection_empty_list() {
        let mut app = scratch_app("selection-empty");
        app.route = Route::Search;
        app.move_selection(1);
        assert_eq!(app.search_selection, 0);
    }

    // -------------------------------------------------------------------------
    // Prompt Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_prompt_path_navigation() {
        let mut app = scratch_app("prompt-path");
        app.open_prompt(PromptKind::Path);
        for c in "/search".chars() {
            app.push_prompt_char(c);
        }
        app.submit_prompt();
        assert_eq!(app.route, Route::Search);
        assert_eq!(app.state, AppState::Normal);
        assert!(app.prompt_input.is_empty());
    }

    #[test]
    fn test_prompt_rejects_control_chars() {
        let mut app = scratch_app("prompt-ctrl");
        app.open_prompt(PromptKind::Path);
        app.push_prompt_char('\x00');
        app.push_prompt_char('\t');
        app.push_prompt_char('a');
        assert_eq!(app.prompt_input, "a");
    }

    #[test]
    fn test_prompt_respects_max_length() {
        let mut app = scratch_app("prompt-max");
        app.open_prompt(PromptKind::Rename);
        for _ in 0..100 {
            app.push_prompt_char('x');
        }
        assert_eq!(app.prompt_input.len(), 50);
    }

    // -------------------------------------------------------------------------
    // Input Guard Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_can_add_username_char() {
        assert!(can_add_username_char(0, 'a'));
        assert!(can_add_username_char(49, 'z'));
        assert!(!can_add_username_char(50, 'a'));
        assert!(!can_add_username_char(0, '\n'));
    }

    #[test]
    fn test_can_add_query_char() {
        assert!(can_add_query_char(0, 'a'));
        assert!(!can_add_query_char(50, 'a'));
        assert!(!can_add_query_char(0, '\x00'));
    }

    // -------------------------------------------------------------------------
    // Logout Tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_logout_clears_session_and_header() {
        let base = std::env::temp_dir()
            .join("gramline-tests")
            .join(format!("app-logout-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&base);
        let store = TokenStore::new(base.join("persistent"), base.join("session"));
        store.store(Scope::Session, "7").unwrap();

        let mut app = App::with_parts(Config::default(), store).unwrap();
        assert!(app.is_authenticated());

        app.logout();
        assert!(!app.is_authenticated());
        assert_eq!(app.api.auth_header(), None);
        assert_eq!(app.route, Route::Login);
    }
}
