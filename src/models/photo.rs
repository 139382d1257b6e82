//! Post models: photos and their comments.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A posted photo with its engagement counts.
///
/// `photo_url` is a service-side path; the client displays metadata only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "Username", default)]
    pub username: String,
    #[serde(rename = "Photourl", default)]
    pub photo_url: String,
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Description", default)]
    pub description: String,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "Comments", default)]
    pub comments: i64,
    #[serde(rename = "Likes", default)]
    pub likes: i64,
    #[serde(rename = "Liked", default)]
    pub liked: bool,
}

impl Photo {
    /// Title for display, falling back to the file name of the upload.
    pub fn display_title(&self) -> String {
        if !self.title.is_empty() {
            return self.title.clone();
        }
        self.photo_url
            .rsplit('/')
            .next()
            .unwrap_or("untitled")
            .to_string()
    }

    /// Posting date formatted for display.
    pub fn posted_display(&self) -> String {
        self.created_at.format("%b %d, %Y %H:%M").to_string()
    }

    /// Engagement summary line, e.g. `♥ 3 · 5 comments`.
    pub fn engagement_line(&self) -> String {
        let heart = if self.liked { "♥" } else { "♡" };
        format!("{} {} · {} comments", heart, self.likes, self.comments)
    }
}

/// A comment on a photo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    #[serde(rename = "ID")]
    pub id: i64,
    #[serde(rename = "PhotoID")]
    pub photo_id: i64,
    #[serde(rename = "UserID")]
    pub user_id: i64,
    #[serde(rename = "Username", default)]
    pub username: String,
    #[serde(rename = "Content", default)]
    pub content: String,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_photo_list() {
        let json = r#"[{
            "ID": 11,
            "UserID": 3,
            "Username": "gio",
            "Photourl": "service/api/images/3_1700000000.jpg",
            "Title": "Sunset",
            "Description": "from the pier",
            "CreatedAt": "2024-03-01T18:22:00Z",
            "Comments": 5,
            "Likes": 3,
            "Liked": true
        }]"#;

        let photos: Vec<Photo> =
            serde_json::from_str(json).expect("Failed to parse photos test JSON");
        assert_eq!(photos.len(), 1);

        let photo = &photos[0];
        assert_eq!(photo.display_title(), "Sunset");
        assert_eq!(photo.engagement_line(), "♥ 3 · 5 comments");
        assert_eq!(photo.posted_display(), "Mar 01, 2024 18:22");
    }

    #[test]
    fn test_display_title_falls_back_to_file_name() {
        let json = r#"{"ID": 1, "UserID": 2, "Photourl": "service/api/images/2_17.jpg", "CreatedAt": "2024-01-01T00:00:00Z"}"#;
        let photo: Photo = serde_json::from_str(json).expect("Failed to parse photo JSON");
        assert_eq!(photo.display_title(), "2_17.jpg");
    }

    #[test]
    fn test_parse_comment() {
        let json = r#"{"ID": 9, "PhotoID": 11, "UserID": 4, "Username": "anna", "Content": "bella!", "CreatedAt": "2024-03-02T09:00:00Z"}"#;
        let comment: Comment =
            serde_json::from_str(json).expect("Failed to parse comment JSON");
        assert_eq!(comment.photo_id, 11);
        assert_eq!(comment.content, "bella!");
    }

    #[test]
    fn test_empty_list_encodings() {
        let comments: Vec<Comment> =
            serde_json::from_str("[]").expect("Failed to parse empty list");
        assert!(comments.is_empty());

        // The service encodes a nil slice as null
        let comments: Option<Vec<Comment>> =
            serde_json::from_str("null").expect("Failed to parse null list");
        assert!(comments.unwrap_or_default().is_empty());
    }
}
