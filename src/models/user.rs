//! Account models: the bare user record, search results, and the extended
//! profile returned by the user endpoint.

use serde::{Deserialize, Serialize};

/// A user account as returned by login and lookup endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Username")]
    pub username: String,
}

/// A search hit, annotated with the searcher's relationship to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSearchResult {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Followed", default)]
    pub followed: bool,
    #[serde(rename = "Banned", default)]
    pub banned: bool,
}

impl UserSearchResult {
    /// Short relationship tag for list display.
    pub fn relationship_tag(&self) -> &'static str {
        match (self.followed, self.banned) {
            (_, true) => "banned",
            (true, _) => "following",
            _ => "",
        }
    }
}

/// Extended profile data: counts plus ban state relative to the viewer.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UserProfile {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Followers", default)]
    pub followers: i64,
    #[serde(rename = "Following", default)]
    pub following: i64,
    #[serde(rename = "Photos", default)]
    pub photos: i64,
    #[serde(rename = "Banned", default)]
    pub banned: i64,
}

impl UserProfile {
    /// One-line counts summary for the profile header.
    pub fn counts_line(&self) -> String {
        format!(
            "{} photos · {} followers · {} following",
            self.photos, self.followers, self.following
        )
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user() {
        let json = r#"{"ID": 7, "Username": "maria"}"#;
        let user: User = serde_json::from_str(json).expect("Failed to parse user JSON");
        assert_eq!(user.id, 7);
        assert_eq!(user.username, "maria");
    }

    #[test]
    fn test_parse_search_results() {
        let json = r#"[
            {"ID": 1, "Username": "maria", "Followed": true, "Banned": false},
            {"ID": 2, "Username": "marco", "Followed": false, "Banned": true}
        ]"#;

        let results: Vec<UserSearchResult> =
            serde_json::from_str(json).expect("Failed to parse search test JSON");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].relationship_tag(), "following");
        assert_eq!(results[1].relationship_tag(), "banned");
    }

    #[test]
    fn test_parse_profile() {
        let json = r#"{"ID": 3, "Username": "gio", "Followers": 12, "Following": 4, "Photos": 9, "Banned": 0}"#;
        let profile: UserProfile =
            serde_json::from_str(json).expect("Failed to parse profile JSON");
        assert_eq!(profile.followers, 12);
        assert_eq!(profile.counts_line(), "9 photos · 12 followers · 4 following");
    }

    #[test]
    fn test_missing_counts_default_to_zero() {
        let json = r#"{"ID": 3, "Username": "gio"}"#;
        let profile: UserProfile =
            serde_json::from_str(json).expect("Failed to parse sparse profile JSON");
        assert_eq!(profile.followers, 0);
        assert_eq!(profile.photos, 0);
    }
}
