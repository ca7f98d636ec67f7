//! `ApiService` - single entry point for the logical data operations.
//!
//! Holds the persisted mock-mode flag and routes every operation to either
//! the mock engine or the remote gateway according to the policy table in
//! [`super::policy`]. Constructed once by the composition root and shared
//! by reference; nothing here is a global.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use pukeko_core::DataError;
use pukeko_core::domain::{
    AnalyticsSnapshot, ContentSuggestion, Post, PostDraft, PostStatus, PostUpdate, TrendingTopic,
};
use pukeko_core::ports::{DocumentStore, EventTracker, Filter, KeyValueStore, OrderBy,
    RemoteProcedures};

use super::policy::{FailurePolicy, Operation};
use crate::mock::MockDataEngine;

/// Storage key for the persisted mode flag.
const MODE_KEY: &str = "use_mock_api";

/// All posts live under the shared public user, as the dashboard has no
/// accounts.
const PUBLIC_USER_ID: &str = "public-user";

/// Collection written by the connection probe.
const CONNECTION_TEST_COLLECTION: &str = "_connection_test";

fn posts_collection() -> String {
    format!("users/{}/posts", PUBLIC_USER_ID)
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, DataError> {
    serde_json::from_value(value)
        .map_err(|err| DataError::Unreachable(format!("malformed remote payload: {}", err)))
}

/// Dual-mode data access facade.
pub struct ApiService {
    mock: MockDataEngine,
    documents: Arc<dyn DocumentStore>,
    functions: Arc<dyn RemoteProcedures>,
    events: Arc<dyn EventTracker>,
    store: Arc<dyn KeyValueStore>,
    use_mock: AtomicBool,
}

impl ApiService {
    /// Build the facade. The mode flag is hydrated from persisted storage;
    /// no other side effects happen at construction.
    pub fn new(
        mock: MockDataEngine,
        documents: Arc<dyn DocumentStore>,
        functions: Arc<dyn RemoteProcedures>,
        events: Arc<dyn EventTracker>,
        store: Arc<dyn KeyValueStore>,
    ) -> Self {
        let use_mock = match store.load(MODE_KEY) {
            Ok(value) => value.as_deref() == Some("true"),
            Err(err) => {
                tracing::warn!(error = %err, "Could not read persisted mode flag, assuming live");
                false
            }
        };

        Self {
            mock,
            documents,
            functions,
            events,
            store,
            use_mock: AtomicBool::new(use_mock),
        }
    }

    /// Switch between mock and live data. Synchronous; the persisted write
    /// is best effort.
    pub fn set_mock_mode(&self, enabled: bool) {
        self.use_mock.store(enabled, Ordering::SeqCst);
        let value = if enabled { "true" } else { "false" };
        if let Err(err) = self.store.save(MODE_KEY, value) {
            tracing::warn!(error = %err, "Could not persist mode flag");
        }
        tracing::info!(mock = enabled, "Data mode updated");
    }

    pub fn is_mock_mode_enabled(&self) -> bool {
        self.use_mock.load(Ordering::SeqCst)
    }

    /// Probe the remote store with a lightweight write. In mock mode this
    /// short-circuits to success; a failed probe force-enables mock mode
    /// and reports the backend as unreachable.
    pub async fn check_connection(&self) -> bool {
        if self.is_mock_mode_enabled() {
            return true;
        }

        let probe = json!({ "timestamp": chrono::Utc::now().to_rfc3339() });
        match self
            .documents
            .insert(CONNECTION_TEST_COLLECTION, probe)
            .await
        {
            Ok(_) => true,
            Err(err) => {
                tracing::warn!(error = %err, "Remote store unreachable, switching to mock mode");
                self.set_mock_mode(true);
                false
            }
        }
    }

    /// Core routing: mock mode goes straight to the engine; otherwise run
    /// the remote call and apply the operation's failure policy. Fallback
    /// is a single one-shot substitution, never a retry.
    async fn route<T>(
        &self,
        op: Operation,
        remote: impl Future<Output = Result<T, DataError>>,
        mock: impl Future<Output = Result<T, DataError>>,
    ) -> Result<T, DataError> {
        if self.is_mock_mode_enabled() {
            return mock.await;
        }

        match remote.await {
            Ok(value) => Ok(value),
            Err(err) => match op.failure_policy() {
                FailurePolicy::FallbackToMock => {
                    tracing::warn!(
                        operation = op.name(),
                        error = %err,
                        "Remote call failed, serving mock data"
                    );
                    mock.await
                }
                FailurePolicy::Propagate => {
                    tracing::error!(operation = op.name(), error = %err, "Remote call failed");
                    Err(err)
                }
            },
        }
    }

    pub async fn search_trending_topics(
        &self,
        query: &str,
    ) -> Result<Vec<TrendingTopic>, DataError> {
        self.route(
            Operation::SearchTrendingTopics,
            async {
                let result = self
                    .functions
                    .invoke("searchTrendingTopics", json!({ "query": query }))
                    .await
                    .map_err(|e| e.into_data_error("function", "searchTrendingTopics"))?;
                decode(result)
            },
            async { Ok(self.mock.search_trending_topics(query).await) },
        )
        .await
    }

    /// Create a post. The `post_created` tracking event fires before the
    /// dispatch, regardless of which path ends up serving the call.
    pub async fn create_post(&self, draft: PostDraft) -> Result<Post, DataError> {
        let platforms = draft
            .platforms
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.events.track(
            "post_created",
            json!({ "platforms": platforms, "user_id": PUBLIC_USER_ID }),
        );

        let remote_draft = draft.clone();
        self.route(
            Operation::CreatePost,
            async {
                // The stored document must decode as a full Post later, so
                // created_at and zeroed analytics are written with it. The
                // id is the store's to assign and stays off the wire.
                let post = Post::from_draft(String::new(), remote_draft.clone());
                let mut record = serde_json::to_value(&post)
                    .map_err(|err| DataError::Validation(err.to_string()))?;
                if let Some(fields) = record.as_object_mut() {
                    fields.remove("id");
                }
                let id = self
                    .documents
                    .insert(&posts_collection(), record)
                    .await
                    .map_err(|e| e.into_data_error("post", "new"))?;
                Ok(Post { id, ..post })
            },
            async { Ok(self.mock.create_post(draft.clone()).await) },
        )
        .await
    }

    pub async fn get_posts(
        &self,
        limit: usize,
        status: Option<PostStatus>,
    ) -> Result<Vec<Post>, DataError> {
        self.route(
            Operation::GetPosts,
            async {
                let filters: Vec<Filter> = status
                    .map(|s| vec![Filter::eq("status", s.as_str())])
                    .unwrap_or_default();
                let records = self
                    .documents
                    .query(
                        &posts_collection(),
                        &filters,
                        Some(OrderBy::desc("created_at")),
                        (limit > 0).then_some(limit),
                    )
                    .await
                    .map_err(|e| e.into_data_error("post", "query"))?;
                records.into_iter().map(decode::<Post>).collect()
            },
            async { Ok(self.mock.get_posts(limit, status).await) },
        )
        .await
    }

    pub async fn delete_post(&self, id: &str) -> Result<(), DataError> {
        self.route(
            Operation::DeletePost,
            async {
                self.documents
                    .delete(&posts_collection(), id)
                    .await
                    .map_err(|e| e.into_data_error("post", id))
            },
            async { self.mock.delete_post(id).await },
        )
        .await
    }

    pub async fn update_post(&self, id: &str, updates: PostUpdate) -> Result<Post, DataError> {
        let remote_updates = updates.clone();
        self.route(
            Operation::UpdatePost,
            async {
                let partial = serde_json::to_value(&remote_updates)
                    .map_err(|err| DataError::Validation(err.to_string()))?;
                let collection = posts_collection();
                self.documents
                    .update(&collection, id, partial)
                    .await
                    .map_err(|e| e.into_data_error("post", id))?;

                // Read the merged document back so the caller sees the
                // post-update state.
                let merged = self
                    .documents
                    .get(&collection, id)
                    .await
                    .map_err(|e| e.into_data_error("post", id))?;
                decode(merged)
            },
            async { self.mock.update_post(id, updates.clone()).await },
        )
        .await
    }

    pub async fn get_analytics(&self) -> Result<AnalyticsSnapshot, DataError> {
        self.route(
            Operation::GetAnalytics,
            async {
                let result = self
                    .functions
                    .invoke("getUserAnalytics", json!({ "userId": PUBLIC_USER_ID }))
                    .await
                    .map_err(|e| e.into_data_error("function", "getUserAnalytics"))?;
                decode(result)
            },
            async { Ok(self.mock.get_analytics().await) },
        )
        .await
    }

    pub async fn generate_content_suggestions(
        &self,
        topic: &str,
    ) -> Result<Vec<ContentSuggestion>, DataError> {
        self.route(
            Operation::GenerateContentSuggestions,
            async {
                let result = self
                    .functions
                    .invoke("generateContent", json!({ "topic": topic }))
                    .await
                    .map_err(|e| e.into_data_error("function", "generateContent"))?;
                decode(result)
            },
            async { Ok(self.mock.generate_content_suggestions(topic).await) },
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;
    use std::sync::atomic::AtomicUsize;

    use async_trait::async_trait;
    use chrono::Utc;
    use pukeko_core::domain::Platform;
    use pukeko_core::error::GatewayError;

    use super::*;
    use crate::mock::MockEngineConfig;
    use crate::storage::InMemoryStore;

    /// Document store whose every call fails as unreachable, counting
    /// the attempts.
    struct UnreachableDocuments {
        calls: AtomicUsize,
    }

    impl UnreachableDocuments {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
            })
        }

        fn fail<T>(&self) -> Result<T, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(GatewayError::Unreachable("connection refused".to_string()))
        }
    }

    #[async_trait]
    impl DocumentStore for UnreachableDocuments {
        async fn query(
            &self,
            _collection: &str,
            _filters: &[Filter],
            _order: Option<OrderBy>,
            _limit: Option<usize>,
        ) -> Result<Vec<Value>, GatewayError> {
            self.fail()
        }

        async fn get(&self, _collection: &str, _id: &str) -> Result<Value, GatewayError> {
            self.fail()
        }

        async fn insert(&self, _collection: &str, _record: Value) -> Result<String, GatewayError> {
            self.fail()
        }

        async fn update(
            &self,
            _collection: &str,
            _id: &str,
            _partial: Value,
        ) -> Result<(), GatewayError> {
            self.fail()
        }

        async fn delete(&self, _collection: &str, _id: &str) -> Result<(), GatewayError> {
            self.fail()
        }
    }

    /// Document store backed by a plain vec: inserts attach a sequential
    /// id and queries echo the stored documents back.
    #[derive(Default)]
    struct EchoingDocuments {
        docs: Mutex<Vec<Value>>,
    }

    #[async_trait]
    impl DocumentStore for EchoingDocuments {
        async fn query(
            &self,
            _collection: &str,
            _filters: &[Filter],
            _order: Option<OrderBy>,
            _limit: Option<usize>,
        ) -> Result<Vec<Value>, GatewayError> {
            Ok(self.docs.lock().unwrap().clone())
        }

        async fn get(&self, _collection: &str, id: &str) -> Result<Value, GatewayError> {
            self.docs
                .lock()
                .unwrap()
                .iter()
                .find(|doc| doc["id"] == id)
                .cloned()
                .ok_or(GatewayError::NotFound)
        }

        async fn insert(&self, _collection: &str, mut record: Value) -> Result<String, GatewayError> {
            let mut docs = self.docs.lock().unwrap();
            let id = format!("doc-{}", docs.len() + 1);
            record["id"] = Value::String(id.clone());
            docs.push(record);
            Ok(id)
        }

        async fn update(
            &self,
            _collection: &str,
            _id: &str,
            _partial: Value,
        ) -> Result<(), GatewayError> {
            Err(GatewayError::Unreachable("not wired".to_string()))
        }

        async fn delete(&self, _collection: &str, _id: &str) -> Result<(), GatewayError> {
            Err(GatewayError::Unreachable("not wired".to_string()))
        }
    }

    struct UnreachableFunctions;

    #[async_trait]
    impl RemoteProcedures for UnreachableFunctions {
        async fn invoke(&self, _name: &str, _payload: Value) -> Result<Value, GatewayError> {
            Err(GatewayError::Unreachable("connection refused".to_string()))
        }
    }

    #[derive(Default)]
    struct RecordingTracker {
        events: Mutex<Vec<String>>,
    }

    impl EventTracker for RecordingTracker {
        fn track(&self, event: &str, _properties: Value) {
            self.events.lock().unwrap().push(event.to_string());
        }
    }

    struct Fixture {
        service: ApiService,
        documents: Arc<UnreachableDocuments>,
        tracker: Arc<RecordingTracker>,
        store: Arc<InMemoryStore>,
    }

    fn fixture() -> Fixture {
        let store = Arc::new(InMemoryStore::new());
        let documents = UnreachableDocuments::new();
        let tracker = Arc::new(RecordingTracker::default());

        let engine = MockDataEngine::new(
            store.clone(),
            MockEngineConfig {
                simulate_latency: false,
                rng_seed: Some(42),
            },
        );

        let service = ApiService::new(
            engine,
            documents.clone(),
            Arc::new(UnreachableFunctions),
            tracker.clone(),
            store.clone(),
        );

        Fixture {
            service,
            documents,
            tracker,
            store,
        }
    }

    fn draft() -> PostDraft {
        PostDraft {
            title: "Launch".to_string(),
            content: "We are live".to_string(),
            platforms: vec![Platform::Twitter],
            scheduled_for: Utc::now(),
            status: PostStatus::Scheduled,
        }
    }

    #[tokio::test]
    async fn reads_fall_back_to_mock_when_remote_fails() {
        let f = fixture();
        assert!(!f.service.is_mock_mode_enabled());

        let posts = f.service.get_posts(10, None).await.unwrap();
        assert_eq!(posts.len(), 3);

        let snapshot = f.service.get_analytics().await.unwrap();
        assert_eq!(snapshot.total_posts, 3);

        let topics = f.service.search_trending_topics("AI").await.unwrap();
        assert!(!topics.is_empty());

        let suggestions = f
            .service
            .generate_content_suggestions("Rust")
            .await
            .unwrap();
        assert_eq!(suggestions.len(), 3);
    }

    #[tokio::test]
    async fn create_falls_back_and_tracks_the_event_first() {
        let f = fixture();

        let created = f.service.create_post(draft()).await.unwrap();
        assert!(created.id.starts_with("mock-"));

        let events = f.tracker.events.lock().unwrap();
        assert_eq!(events.as_slice(), ["post_created"]);
    }

    #[tokio::test]
    async fn remote_created_posts_decode_on_the_remote_read_path() {
        let store = Arc::new(InMemoryStore::new());
        let documents = Arc::new(EchoingDocuments::default());
        let engine = MockDataEngine::new(
            store.clone(),
            MockEngineConfig {
                simulate_latency: false,
                rng_seed: Some(42),
            },
        );
        let service = ApiService::new(
            engine,
            documents.clone(),
            Arc::new(UnreachableFunctions),
            Arc::new(RecordingTracker::default()),
            store,
        );

        let created = service.create_post(draft()).await.unwrap();
        assert_eq!(created.id, "doc-1");
        assert_eq!(created.analytics.total(), 0);

        // The stored document carries everything a Post needs, so the live
        // list path serves it instead of falling back to mock data.
        let posts = service.get_posts(10, None).await.unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "doc-1");
        assert_eq!(posts[0].title, "Launch");
        assert_eq!(posts[0].created_at, created.created_at);
        assert_eq!(posts[0].analytics, created.analytics);
    }

    #[tokio::test]
    async fn create_tracks_the_event_in_mock_mode_too() {
        let f = fixture();
        f.service.set_mock_mode(true);

        f.service.create_post(draft()).await.unwrap();
        assert_eq!(f.tracker.events.lock().unwrap().len(), 1);
        // Mock mode never touched the remote store.
        assert_eq!(f.documents.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn delete_and_update_propagate_remote_failures() {
        let f = fixture();

        let err = f.service.delete_post("mock-seed-1").await.unwrap_err();
        assert!(matches!(err, DataError::Unreachable(_)));

        let err = f
            .service
            .update_post("mock-seed-1", PostUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, DataError::Unreachable(_)));

        // The mock engine was never consulted: the seed post still exists.
        f.service.set_mock_mode(true);
        let posts = f.service.get_posts(0, None).await.unwrap();
        assert!(posts.iter().any(|p| p.id == "mock-seed-1"));
    }

    #[tokio::test]
    async fn mock_mode_routes_writes_to_the_engine() {
        let f = fixture();
        f.service.set_mock_mode(true);

        f.service.delete_post("mock-seed-1").await.unwrap();
        let err = f.service.delete_post("mock-seed-1").await.unwrap_err();
        assert!(matches!(err, DataError::NotFound { .. }));

        let updated = f
            .service
            .update_post(
                "mock-seed-2",
                PostUpdate {
                    title: Some("Renamed".to_string()),
                    ..PostUpdate::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.title, "Renamed");
    }

    #[tokio::test]
    async fn failed_connection_probe_downgrades_to_mock_mode() {
        let f = fixture();

        let reachable = f.service.check_connection().await;
        assert!(!reachable);
        assert!(f.service.is_mock_mode_enabled());
        // Downgrade is persisted for the next construction.
        assert_eq!(f.store.load("use_mock_api").unwrap().as_deref(), Some("true"));
    }

    #[tokio::test]
    async fn connection_probe_short_circuits_in_mock_mode() {
        let f = fixture();
        f.service.set_mock_mode(true);

        assert!(f.service.check_connection().await);
        assert_eq!(f.documents.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn mode_flag_is_hydrated_from_the_store() {
        let f = fixture();
        f.service.set_mock_mode(true);

        let engine = MockDataEngine::new(
            f.store.clone(),
            MockEngineConfig {
                simulate_latency: false,
                rng_seed: Some(42),
            },
        );
        let rebuilt = ApiService::new(
            engine,
            f.documents.clone(),
            Arc::new(UnreachableFunctions),
            Arc::new(RecordingTracker::default()),
            f.store.clone(),
        );
        assert!(rebuilt.is_mock_mode_enabled());
    }
}
