//! Domain entities - the core business objects.

mod analytics;
mod post;
mod suggestion;
mod trending;

pub use analytics::{AnalyticsSnapshot, TimeSeriesPoint};
pub use post::{EngagementCounts, Platform, Post, PostDraft, PostStatus, PostUpdate};
pub use suggestion::ContentSuggestion;
pub use trending::{TrendingCatalog, TrendingTopic};
