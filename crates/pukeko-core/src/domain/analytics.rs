use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::{Platform, Post};

/// One daily bucket of the 31-day engagement chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub engagement: u64,
    pub likes: u64,
    pub shares: u64,
    pub comments: u64,
}

/// Derived dashboard analytics. Has no identity of its own: every fetch
/// recomputes the whole snapshot from the current post list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    pub total_posts: usize,
    pub total_engagement: u64,
    pub avg_likes: u64,
    /// Per-platform score 0..100, drawn from the injected rng on each
    /// computation. Deliberately not stable across calls; seed the rng to
    /// pin it in tests.
    pub platform_performance: BTreeMap<Platform, u64>,
    /// 31 daily buckets, oldest first.
    pub time_series: Vec<TimeSeriesPoint>,
}

impl AnalyticsSnapshot {
    pub fn compute<R: Rng>(posts: &[Post], rng: &mut R) -> Self {
        let total_posts = posts.len();
        let total_engagement = posts.iter().map(|p| p.analytics.total()).sum();
        let total_likes: u64 = posts.iter().map(|p| p.analytics.likes).sum();
        let avg_likes = total_likes / total_posts.max(1) as u64;

        let platform_performance = Platform::ALL
            .iter()
            .map(|&platform| (platform, rng.gen_range(0..100)))
            .collect();

        let today = Utc::now().date_naive();
        let time_series = (0..=30)
            .rev()
            .map(|days_back| TimeSeriesPoint {
                date: today - Duration::days(days_back),
                engagement: rng.gen_range(200..1200),
                likes: rng.gen_range(50..250),
                shares: rng.gen_range(10..60),
                comments: rng.gen_range(5..45),
            })
            .collect();

        Self {
            total_posts,
            total_engagement,
            avg_likes,
            platform_performance,
            time_series,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::domain::{EngagementCounts, PostStatus};

    fn post(likes: u64, views: u64) -> Post {
        Post {
            id: format!("post-{}-{}", likes, views),
            title: "t".to_string(),
            content: "c".to_string(),
            platforms: vec![Platform::Twitter],
            created_at: Utc::now(),
            scheduled_for: Utc::now(),
            status: PostStatus::Published,
            analytics: EngagementCounts::new(views, likes, 0, 0),
        }
    }

    #[test]
    fn totals_reflect_post_list() {
        let posts = vec![post(10, 100), post(20, 200), post(30, 300)];
        let mut rng = StdRng::seed_from_u64(7);
        let snapshot = AnalyticsSnapshot::compute(&posts, &mut rng);

        assert_eq!(snapshot.total_posts, 3);
        assert_eq!(snapshot.total_engagement, 660);
        assert_eq!(snapshot.avg_likes, 20);
    }

    #[test]
    fn empty_post_list_yields_zeroes() {
        let mut rng = StdRng::seed_from_u64(7);
        let snapshot = AnalyticsSnapshot::compute(&[], &mut rng);

        assert_eq!(snapshot.total_posts, 0);
        assert_eq!(snapshot.total_engagement, 0);
        assert_eq!(snapshot.avg_likes, 0);
    }

    #[test]
    fn time_series_has_31_daily_buckets_oldest_first() {
        let mut rng = StdRng::seed_from_u64(7);
        let snapshot = AnalyticsSnapshot::compute(&[], &mut rng);

        assert_eq!(snapshot.time_series.len(), 31);
        let today = Utc::now().date_naive();
        assert_eq!(snapshot.time_series[0].date, today - Duration::days(30));
        assert_eq!(snapshot.time_series[30].date, today);
        for window in snapshot.time_series.windows(2) {
            assert!(window[0].date < window[1].date);
        }
    }

    #[test]
    fn platform_performance_is_deterministic_per_seed() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        let first = AnalyticsSnapshot::compute(&[], &mut a);
        let second = AnalyticsSnapshot::compute(&[], &mut b);

        assert_eq!(first.platform_performance, second.platform_performance);
        assert_eq!(first.platform_performance.len(), Platform::ALL.len());
        assert!(first.platform_performance.values().all(|&v| v < 100));
    }
}
