//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pukeko_core::domain::{Platform, PostStatus};

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub platforms: Vec<Platform>,
    pub scheduled_for: DateTime<Utc>,
    #[serde(default = "default_status")]
    pub status: PostStatus,
}

fn default_status() -> PostStatus {
    PostStatus::Scheduled
}

/// Request to partially update a post.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub platforms: Option<Vec<Platform>>,
    pub scheduled_for: Option<DateTime<Utc>>,
    pub status: Option<PostStatus>,
}

/// Query string for listing posts.
#[derive(Debug, Clone, Deserialize)]
pub struct ListPostsQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
    pub status: Option<String>,
}

fn default_limit() -> usize {
    10
}

/// Query string for trending-topic search.
#[derive(Debug, Clone, Deserialize)]
pub struct TrendingQuery {
    #[serde(default)]
    pub query: String,
}

/// Request for content suggestions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsRequest {
    pub topic: String,
}

/// The mock/live mode flag on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeResponse {
    pub mock: bool,
}

/// Request to switch the mode flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetModeRequest {
    pub mock: bool,
}

/// Result of a connection probe.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionResponse {
    pub connected: bool,
    /// The mode after the probe - a failed probe downgrades to mock.
    pub mock: bool,
}
