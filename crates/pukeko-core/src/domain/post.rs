use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Social platform a post can target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Facebook,
    Instagram,
    Linkedin,
}

impl Platform {
    /// Every platform the dashboard reports on, in stable order.
    pub const ALL: [Platform; 4] = [
        Platform::Twitter,
        Platform::Facebook,
        Platform::Instagram,
        Platform::Linkedin,
    ];
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Twitter => "twitter",
            Platform::Facebook => "facebook",
            Platform::Instagram => "instagram",
            Platform::Linkedin => "linkedin",
        };
        write!(f, "{}", name)
    }
}

/// Lifecycle state of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Scheduled,
    Published,
}

impl PostStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PostStatus::Scheduled => "scheduled",
            PostStatus::Published => "published",
        }
    }
}

impl std::str::FromStr for PostStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(PostStatus::Scheduled),
            "published" => Ok(PostStatus::Published),
            other => Err(format!("unknown post status: {}", other)),
        }
    }
}

/// Per-post engagement counters. Never negative; zeroed at creation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngagementCounts {
    pub views: u64,
    pub likes: u64,
    pub shares: u64,
    pub comments: u64,
}

impl EngagementCounts {
    pub fn new(views: u64, likes: u64, shares: u64, comments: u64) -> Self {
        Self {
            views,
            likes,
            shares,
            comments,
        }
    }

    /// Sum of all four counters.
    pub fn total(&self) -> u64 {
        self.views + self.likes + self.shares + self.comments
    }
}

/// Post entity - one scheduled or published social update.
///
/// The `id` is immutable after creation and `analytics` is only ever
/// mutated by the backing store, never through the update path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub platforms: Vec<Platform>,
    pub created_at: DateTime<Utc>,
    pub scheduled_for: DateTime<Utc>,
    pub status: PostStatus,
    #[serde(default)]
    pub analytics: EngagementCounts,
}

impl Post {
    /// Materialize a draft into a post with the given id, created now,
    /// analytics zeroed.
    pub fn from_draft(id: impl Into<String>, draft: PostDraft) -> Self {
        Self {
            id: id.into(),
            title: draft.title,
            content: draft.content,
            platforms: draft.platforms,
            created_at: Utc::now(),
            scheduled_for: draft.scheduled_for,
            status: draft.status,
            analytics: EngagementCounts::default(),
        }
    }

    /// Shallow-merge an update into this post. Only title, content,
    /// platforms, scheduled_for and status are reachable; id, created_at
    /// and analytics are untouched.
    pub fn apply(&mut self, updates: PostUpdate) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        if let Some(content) = updates.content {
            self.content = content;
        }
        if let Some(platforms) = updates.platforms {
            self.platforms = platforms;
        }
        if let Some(scheduled_for) = updates.scheduled_for {
            self.scheduled_for = scheduled_for;
        }
        if let Some(status) = updates.status {
            self.status = status;
        }
    }
}

/// Caller-supplied payload for creating a post.
///
/// Callers are expected to have validated non-empty `platforms` before
/// submission; the data layer does not re-check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub platforms: Vec<Platform>,
    pub scheduled_for: DateTime<Utc>,
    pub status: PostStatus,
}

/// Partial update for a post. `None` fields are left as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platforms: Option<Vec<Platform>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PostDraft {
        PostDraft {
            title: "Launch day".to_string(),
            content: "We are live!".to_string(),
            platforms: vec![Platform::Twitter, Platform::Linkedin],
            scheduled_for: Utc::now(),
            status: PostStatus::Scheduled,
        }
    }

    #[test]
    fn from_draft_zeroes_analytics() {
        let post = Post::from_draft("mock-1", draft());
        assert_eq!(post.id, "mock-1");
        assert_eq!(post.analytics, EngagementCounts::default());
        assert_eq!(post.analytics.total(), 0);
    }

    #[test]
    fn apply_merges_only_provided_fields() {
        let mut post = Post::from_draft("mock-1", draft());
        let before = post.clone();

        post.apply(PostUpdate {
            title: Some("Renamed".to_string()),
            ..PostUpdate::default()
        });

        assert_eq!(post.title, "Renamed");
        assert_eq!(post.content, before.content);
        assert_eq!(post.platforms, before.platforms);
        assert_eq!(post.status, before.status);
        assert_eq!(post.created_at, before.created_at);
    }

    #[test]
    fn platform_serializes_lowercase() {
        let json = serde_json::to_string(&Platform::Linkedin).unwrap();
        assert_eq!(json, "\"linkedin\"");
    }
}
