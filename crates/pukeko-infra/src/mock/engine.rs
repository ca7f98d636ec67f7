//! Latency-simulating mock data engine.
//!
//! Stands in for the remote backend: posts live in memory, are persisted
//! through the key-value store after every mutation, and every operation
//! sleeps for a fixed per-operation delay to mimic a remote round trip.
//! Single-consumer by design; there is no atomicity across concurrent
//! in-flight operations.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tokio::sync::RwLock;

use pukeko_core::DataError;
use pukeko_core::domain::{
    AnalyticsSnapshot, ContentSuggestion, Platform, Post, PostDraft, PostStatus, PostUpdate,
    TrendingCatalog, TrendingTopic,
};
use pukeko_core::ports::KeyValueStore;

use super::seed;

/// Storage key for the persisted post list.
const POSTS_KEY: &str = "mock_posts";

// Simulated round-trip latency per operation.
const SEARCH_DELAY: Duration = Duration::from_millis(500);
const GET_POSTS_DELAY: Duration = Duration::from_millis(600);
const DELETE_DELAY: Duration = Duration::from_millis(700);
const CREATE_DELAY: Duration = Duration::from_millis(800);
const UPDATE_DELAY: Duration = Duration::from_millis(800);
const ANALYTICS_DELAY: Duration = Duration::from_millis(900);
// Longer, emulating generative processing.
const SUGGESTIONS_DELAY: Duration = Duration::from_millis(1200);

/// Mock engine configuration.
#[derive(Debug, Clone)]
pub struct MockEngineConfig {
    /// Sleep for the per-operation delay before answering.
    pub simulate_latency: bool,
    /// Seed for the analytics rng. `None` seeds from entropy; tests pin a
    /// seed so the randomized snapshot fields are reproducible.
    pub rng_seed: Option<u64>,
}

impl Default for MockEngineConfig {
    fn default() -> Self {
        Self {
            simulate_latency: true,
            rng_seed: None,
        }
    }
}

/// In-memory mock of the remote data service.
pub struct MockDataEngine {
    posts: RwLock<Vec<Post>>,
    catalog: TrendingCatalog,
    store: Arc<dyn KeyValueStore>,
    rng: Mutex<StdRng>,
    config: MockEngineConfig,
}

impl MockDataEngine {
    /// Build the engine, loading previously persisted posts or seeding the
    /// default dataset on first use.
    pub fn new(store: Arc<dyn KeyValueStore>, config: MockEngineConfig) -> Self {
        let posts = match store.load(POSTS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Post>>(&raw) {
                Ok(posts) => posts,
                Err(err) => {
                    tracing::warn!(error = %err, "Persisted posts unreadable, reseeding");
                    let posts = seed::seed_posts();
                    persist(store.as_ref(), &posts);
                    posts
                }
            },
            Ok(None) => {
                // First use: put the seed dataset on disk right away.
                let posts = seed::seed_posts();
                persist(store.as_ref(), &posts);
                posts
            }
            Err(err) => {
                tracing::warn!(error = %err, "Post storage unavailable, seeding in memory");
                seed::seed_posts()
            }
        };

        Self {
            posts: RwLock::new(posts),
            catalog: seed::trending_catalog(),
            store,
            rng: Mutex::new(match config.rng_seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            }),
            config,
        }
    }

    async fn simulate(&self, delay: Duration) {
        if self.config.simulate_latency {
            tokio::time::sleep(delay).await;
        }
    }

    fn persist(&self, posts: &[Post]) {
        persist(self.store.as_ref(), posts);
    }

    /// Case-insensitive topic search. Empty queries yield an empty result.
    pub async fn search_trending_topics(&self, query: &str) -> Vec<TrendingTopic> {
        self.simulate(SEARCH_DELAY).await;
        self.catalog.search(query)
    }

    /// Create a post: fresh id, zeroed analytics, newest-first placement.
    pub async fn create_post(&self, draft: PostDraft) -> Post {
        self.simulate(CREATE_DELAY).await;

        let post = Post::from_draft(format!("mock-{}", uuid::Uuid::new_v4()), draft);

        let mut posts = self.posts.write().await;
        posts.insert(0, post.clone());
        self.persist(&posts);

        tracing::debug!(post_id = %post.id, "Mock post created");
        post
    }

    /// List posts, optionally filtered by status, newest first. A limit of
    /// zero means no truncation.
    pub async fn get_posts(&self, limit: usize, status: Option<PostStatus>) -> Vec<Post> {
        self.simulate(GET_POSTS_DELAY).await;

        let posts = self.posts.read().await;
        let mut filtered: Vec<Post> = posts
            .iter()
            .filter(|post| status.is_none_or(|wanted| post.status == wanted))
            .cloned()
            .collect();

        filtered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        if limit > 0 {
            filtered.truncate(limit);
        }
        filtered
    }

    /// Delete a post. Fails with `NotFound` when no post has the id.
    pub async fn delete_post(&self, id: &str) -> Result<(), DataError> {
        self.simulate(DELETE_DELAY).await;

        let mut posts = self.posts.write().await;
        let before = posts.len();
        posts.retain(|post| post.id != id);

        if posts.len() == before {
            return Err(DataError::post_not_found(id));
        }

        self.persist(&posts);
        tracing::debug!(post_id = %id, "Mock post deleted");
        Ok(())
    }

    /// Shallow-merge an update into a post and return the merged result.
    /// Fails with `NotFound` when no post has the id.
    pub async fn update_post(&self, id: &str, updates: PostUpdate) -> Result<Post, DataError> {
        self.simulate(UPDATE_DELAY).await;

        let mut posts = self.posts.write().await;
        let post = posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or_else(|| DataError::post_not_found(id))?;

        post.apply(updates);
        let merged = post.clone();

        self.persist(&posts);
        Ok(merged)
    }

    /// Recompute the full analytics snapshot from the current post list.
    pub async fn get_analytics(&self) -> AnalyticsSnapshot {
        self.simulate(ANALYTICS_DELAY).await;

        let posts = self.posts.read().await;
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        AnalyticsSnapshot::compute(&posts, &mut *rng)
    }

    /// Three templated suggestions interpolating the topic.
    pub async fn generate_content_suggestions(&self, topic: &str) -> Vec<ContentSuggestion> {
        self.simulate(SUGGESTIONS_DELAY).await;

        vec![
            ContentSuggestion {
                title: format!("5 Ways to Leverage {} in Your Business", topic),
                content: format!(
                    "Discover how {} is transforming industries and how your business can stay \
                     ahead of the curve.",
                    topic
                ),
                best_platforms: vec![Platform::Linkedin, Platform::Twitter],
            },
            ContentSuggestion {
                title: format!("The Future of {}: 2025 Predictions", topic),
                content: format!(
                    "Our experts analyze current trends and predict how {} will evolve in the \
                     coming year.",
                    topic
                ),
                best_platforms: vec![Platform::Facebook, Platform::Linkedin],
            },
            ContentSuggestion {
                title: format!("Quick Guide: Getting Started with {}", topic),
                content: format!(
                    "New to {}? Here's everything you need to know to get started and implement \
                     it in your workflow.",
                    topic
                ),
                best_platforms: vec![Platform::Instagram, Platform::Twitter],
            },
        ]
    }
}

/// Persistence is a side effect of a successful in-memory mutation:
/// failures are logged and swallowed, never failing the operation.
fn persist(store: &dyn KeyValueStore, posts: &[Post]) {
    let serialized = match serde_json::to_string(posts) {
        Ok(json) => json,
        Err(err) => {
            tracing::warn!(error = %err, "Could not serialize posts for persistence");
            return;
        }
    };
    if let Err(err) = store.save(POSTS_KEY, &serialized) {
        tracing::warn!(error = %err, "Could not persist posts, continuing in memory");
    }
}
