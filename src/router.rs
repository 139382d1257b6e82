//! Hash-style route table.
//!
//! Navigation is addressed by fragment paths the way the service's web
//! client addresses them (`#/users/42`). Four static mappings, no nesting,
//! no guards:
//!
//! - `/`               → Home (feed)
//! - `/login`          → Login
//! - `/search`         → Search
//! - `/users/:user_id` → Profile
//!
//! The `:user_id` segment is passed through to the profile view as an
//! opaque string; the view resolves it against the API.

/// A resolved route. One variant per view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Login,
    Search,
    Profile { user_id: String },
}

impl Route {
    /// Parse a fragment path into a route.
    ///
    /// Accepts the path with or without the leading `#` and ignores a
    /// trailing slash. Returns `None` for anything outside the four
    /// mappings; callers decide the fallback.
    pub fn parse(fragment: &str) -> Option<Route> {
        let path = fragment.strip_prefix('#').unwrap_or(fragment);
        let path = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };

        match path {
            "/" | "" => Some(Route::Home),
            "/login" => Some(Route::Login),
            "/search" => Some(Route::Search),
            _ => {
                let user_id = path.strip_prefix("/users/")?;
                if user_id.is_empty() || user_id.contains('/') {
                    return None;
                }
                Some(Route::Profile {
                    user_id: user_id.to_string(),
                })
            }
        }
    }

    /// Canonical fragment path for this route, shown in the title bar.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "#/".to_string(),
            Route::Login => "#/login".to_string(),
            Route::Search => "#/search".to_string(),
            Route::Profile { user_id } => format!("#/users/{}", user_id),
        }
    }

}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_static_routes() {
        assert_eq!(Route::parse("/"), Some(Route::Home));
        assert_eq!(Route::parse("/login"), Some(Route::Login));
        assert_eq!(Route::parse("/search"), Some(Route::Search));
    }

    #[test]
    fn test_parse_profile_route() {
        assert_eq!(
            Route::parse("/users/42"),
            Some(Route::Profile {
                user_id: "42".to_string()
            })
        );
        // The parameter is untyped - non-numeric ids pass through
        assert_eq!(
            Route::parse("/users/maria"),
            Some(Route::Profile {
                user_id: "maria".to_string()
            })
        );
    }

    #[test]
    fn test_parse_accepts_hash_prefix() {
        assert_eq!(Route::parse("#/"), Some(Route::Home));
        assert_eq!(Route::parse("#/login"), Some(Route::Login));
        assert_eq!(
            Route::parse("#/users/42"),
            Some(Route::Profile {
                user_id: "42".to_string()
            })
        );
    }

    #[test]
    fn test_parse_trailing_slash() {
        assert_eq!(Route::parse("/login/"), Some(Route::Login));
        assert_eq!(
            Route::parse("/users/42/"),
            Some(Route::Profile {
                user_id: "42".to_string()
            })
        );
    }

    #[test]
    fn test_parse_unmapped_paths() {
        assert_eq!(Route::parse("/nope"), None);
        assert_eq!(Route::parse("/users"), None);
        assert_eq!(Route::parse("/users/"), None);
        assert_eq!(Route::parse("/users/42/photos"), None);
        assert_eq!(Route::parse("/login/extra"), None);
    }

    #[test]
    fn test_canonical_paths_round_trip() {
        for route in [
            Route::Home,
            Route::Login,
            Route::Search,
            Route::Profile {
                user_id: "42".to_string(),
            },
        ] {
            assert_eq!(Route::parse(&route.path()), Some(route.clone()));
        }
    }
}
