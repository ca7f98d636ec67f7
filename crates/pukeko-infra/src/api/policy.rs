//! Per-operation failure policy for the facade.
//!
//! Reads and create degrade silently to the mock engine when the remote
//! backend fails; delete and update must fail loud, since a silently
//! "successful" write against the wrong store would misreport durable
//! state.

/// The logical operations the facade exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    SearchTrendingTopics,
    CreatePost,
    GetPosts,
    DeletePost,
    UpdatePost,
    GetAnalytics,
    GenerateContentSuggestions,
}

/// What the facade does when the remote call for an operation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// One-shot substitution with the mock engine result. Not a retry
    /// loop: the mock call happens once and its outcome is final.
    FallbackToMock,
    /// Propagate the remote error to the caller unmodified.
    Propagate,
}

impl Operation {
    /// The policy table.
    pub fn failure_policy(self) -> FailurePolicy {
        match self {
            Operation::SearchTrendingTopics
            | Operation::CreatePost
            | Operation::GetPosts
            | Operation::GetAnalytics
            | Operation::GenerateContentSuggestions => FailurePolicy::FallbackToMock,
            Operation::DeletePost | Operation::UpdatePost => FailurePolicy::Propagate,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::SearchTrendingTopics => "search_trending_topics",
            Operation::CreatePost => "create_post",
            Operation::GetPosts => "get_posts",
            Operation::DeletePost => "delete_post",
            Operation::UpdatePost => "update_post",
            Operation::GetAnalytics => "get_analytics",
            Operation::GenerateContentSuggestions => "generate_content_suggestions",
        }
    }
}
