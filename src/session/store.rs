use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

/// Directory name under the data/runtime dirs
const APP_DIR: &str = "gramline";

/// Token file name within each scope directory
const TOKEN_FILE: &str = "token";

/// Which storage scope a token is written into.
///
/// `Persistent` survives across client sessions ("remember me");
/// `Session` lives in the runtime directory and is gone after logout or
/// reboot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Persistent,
    Session,
}

/// Two-scope token storage.
///
/// The store never validates, parses, or expires tokens; it only answers
/// "what is the current token, if any". Absence is a normal state, not an
/// error.
pub struct TokenStore {
    persistent_dir: PathBuf,
    session_dir: PathBuf,
}

impl TokenStore {
    /// Create a store over explicit scope directories.
    pub fn new(persistent_dir: PathBuf, session_dir: PathBuf) -> Self {
        Self {
            persistent_dir,
            session_dir,
        }
    }

    /// Create a store over the platform default directories.
    ///
    /// Persistent tokens live under the OS data directory; session tokens
    /// under the runtime directory, falling back to the system temp
    /// directory on platforms without one.
    pub fn from_env() -> Result<Self> {
        let data_dir = dirs::data_dir().context("Could not find data directory")?;
        let runtime_dir = dirs::runtime_dir().unwrap_or_else(std::env::temp_dir);

        Ok(Self::new(
            data_dir.join(APP_DIR),
            runtime_dir.join(APP_DIR),
        ))
    }

    /// Resolve the current session token.
    ///
    /// The persistent scope is checked first; if it holds no value, the
    /// session scope is checked. `None` when neither holds a value.
    pub fn current_session(&self) -> Option<String> {
        read_token(&self.token_path(Scope::Persistent))
            .or_else(|| read_token(&self.token_path(Scope::Session)))
    }

    /// Whether any scope currently holds a token.
    pub fn has_session(&self) -> bool {
        self.current_session().is_some()
    }

    /// Write a token into the named scope.
    pub fn store(&self, scope: Scope, token: &str) -> Result<()> {
        let path = self.token_path(scope);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(&path, token)
            .with_context(|| format!("Failed to write token to {}", path.display()))?;
        debug!(?scope, "Token stored");
        Ok(())
    }

    /// Remove the token from both scopes.
    pub fn clear(&self) -> Result<()> {
        for scope in [Scope::Persistent, Scope::Session] {
            let path = self.token_path(scope);
            if path.exists() {
                std::fs::remove_file(&path)
                    .with_context(|| format!("Failed to remove {}", path.display()))?;
            }
        }
        debug!("Token cleared from both scopes");
        Ok(())
    }

    fn token_path(&self, scope: Scope) -> PathBuf {
        let dir = match scope {
            Scope::Persistent => &self.persistent_dir,
            Scope::Session => &self.session_dir,
        };
        dir.join(TOKEN_FILE)
    }
}

/// Read a token file, treating any failure as absence.
fn read_token(path: &Path) -> Option<String> {
    let contents = std::fs::read_to_string(path).ok()?;
    let token = contents.trim();
    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a store over throwaway directories unique to the test.
    fn scratch_store(name: &str) -> TokenStore {
        let base = std::env::temp_dir()
            .join("gramline-tests")
            .join(format!("{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&base);
        TokenStore::new(base.join("persistent"), base.join("session"))
    }

    #[test]
    fn test_persistent_scope_wins_when_both_set() {
        let store = scratch_store("both");
        store.store(Scope::Persistent, "abc").unwrap();
        store.store(Scope::Session, "xyz").unwrap();
        assert_eq!(store.current_session().as_deref(), Some("abc"));
    }

    #[test]
    fn test_session_scope_used_when_persistent_empty() {
        let store = scratch_store("session-only");
        store.store(Scope::Session, "xyz").unwrap();
        assert_eq!(store.current_session().as_deref(), Some("xyz"));
    }

    #[test]
    fn test_absence_when_both_empty() {
        let store = scratch_store("empty");
        assert_eq!(store.current_session(), None);
        assert!(!store.has_session());
    }

    #[test]
    fn test_blank_token_file_is_absence() {
        let store = scratch_store("blank");
        store.store(Scope::Persistent, "  \n").unwrap();
        assert_eq!(store.current_session(), None);
    }

    #[test]
    fn test_token_trimmed_on_read() {
        let store = scratch_store("trim");
        store.store(Scope::Persistent, "abc\n").unwrap();
        assert_eq!(store.current_session().as_deref(), Some("abc"));
    }

    #[test]
    fn test_clear_removes_both_scopes() {
        let store = scratch_store("clear");
        store.store(Scope::Persistent, "abc").unwrap();
        store.store(Scope::Session, "xyz").unwrap();
        store.clear().unwrap();
        assert_eq!(store.current_session(), None);

        // Clearing an already-empty store is fine
        store.clear().unwrap();
    }
}
