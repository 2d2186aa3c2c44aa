//! Post Entity
//!
//! A blog post and its partial-update rules.

use chrono::{DateTime, Utc};

use crate::domain::value_object::{PostId, PublicId, UserId};

/// Blog post entity
#[derive(Debug, Clone)]
pub struct Post {
    /// Internal UUID identifier
    pub post_id: PostId,
    /// Public-facing nanoid identifier (URL-safe)
    pub public_id: PublicId,
    pub title: String,
    /// Display name; defaults to the creating session's user name
    pub author: String,
    pub excerpt: String,
    pub content: String,
    /// Empty string when the post has no image
    pub image_url: String,
    /// Owning user. Immutable after creation.
    pub created_by: UserId,
    /// Owner's public id, for API responses
    pub created_by_public: PublicId,
    pub created_at: DateTime<Utc>,
    /// None until the first edit
    pub updated_at: Option<DateTime<Utc>>,
}

/// Partial update for a post
///
/// `None` leaves a field unchanged. For title/author/excerpt/content a
/// submitted empty string is ignored too; only `image_url` honors an
/// explicit empty string (it clears the image).
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub image_url: Option<String>,
}

impl PostChanges {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.excerpt.is_none()
            && self.content.is_none()
            && self.image_url.is_none()
    }
}

impl Post {
    /// Create a new post owned by `created_by`
    pub fn new(
        title: String,
        author: String,
        excerpt: String,
        content: String,
        image_url: String,
        created_by: UserId,
        created_by_public: PublicId,
    ) -> Self {
        Self {
            post_id: PostId::new(),
            public_id: PublicId::new(),
            title,
            author,
            excerpt,
            content,
            image_url,
            created_by,
            created_by_public,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Check whether `user_id` owns this post
    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        self.created_by == *user_id
    }

    /// Apply a partial update and stamp `updated_at`
    ///
    /// `created_by` is never touched here.
    pub fn apply_changes(&mut self, changes: PostChanges) {
        if let Some(title) = non_empty(changes.title) {
            self.title = title;
        }
        if let Some(author) = non_empty(changes.author) {
            self.author = author;
        }
        if let Some(excerpt) = non_empty(changes.excerpt) {
            self.excerpt = excerpt;
        }
        if let Some(content) = non_empty(changes.content) {
            self.content = content;
        }
        // Explicit empty string clears the image
        if let Some(image_url) = changes.image_url {
            self.image_url = image_url;
        }

        self.updated_at = Some(Utc::now());
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_post(owner: UserId) -> Post {
        Post::new(
            "T".to_string(),
            "alice".to_string(),
            "E".to_string(),
            "C".to_string(),
            "http://img".to_string(),
            owner,
            PublicId::new(),
        )
    }

    #[test]
    fn test_new_post_defaults() {
        let owner = UserId::new();
        let post = sample_post(owner);

        assert!(post.is_owned_by(&owner));
        assert!(post.updated_at.is_none());
    }

    #[test]
    fn test_apply_changes_partial() {
        let mut post = sample_post(UserId::new());

        post.apply_changes(PostChanges {
            title: Some("New title".to_string()),
            ..Default::default()
        });

        assert_eq!(post.title, "New title");
        // Untouched fields stay
        assert_eq!(post.author, "alice");
        assert_eq!(post.excerpt, "E");
        assert_eq!(post.content, "C");
        assert_eq!(post.image_url, "http://img");
        assert!(post.updated_at.is_some());
    }

    #[test]
    fn test_empty_image_url_clears_image() {
        let mut post = sample_post(UserId::new());

        post.apply_changes(PostChanges {
            image_url: Some(String::new()),
            ..Default::default()
        });

        assert_eq!(post.image_url, "");
        // Everything else untouched
        assert_eq!(post.title, "T");
        assert_eq!(post.author, "alice");
        assert_eq!(post.excerpt, "E");
        assert_eq!(post.content, "C");
    }

    #[test]
    fn test_empty_title_ignored() {
        let mut post = sample_post(UserId::new());

        post.apply_changes(PostChanges {
            title: Some(String::new()),
            content: Some("C2".to_string()),
            ..Default::default()
        });

        assert_eq!(post.title, "T");
        assert_eq!(post.content, "C2");
    }

    #[test]
    fn test_ownership_check() {
        let owner = UserId::new();
        let other = UserId::new();
        let post = sample_post(owner);

        assert!(post.is_owned_by(&owner));
        assert!(!post.is_owned_by(&other));
    }

    #[test]
    fn test_changes_is_empty() {
        assert!(PostChanges::default().is_empty());
        assert!(
            !PostChanges {
                image_url: Some(String::new()),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
