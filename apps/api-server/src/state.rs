//! Application state - the composition root wiring the facade together.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use pukeko_core::error::GatewayError;
use pukeko_core::ports::{DocumentStore, Filter, KeyValueStore, OrderBy, RemoteProcedures};
use pukeko_infra::{
    ApiService, InMemoryStore, JsonFileStore, MockDataEngine, MockEngineConfig,
    TracingEventTracker,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<ApiService>,
}

/// Gateway used when no remote backend is configured: every call fails as
/// unreachable, so the facade serves mock data throughout.
struct DisabledGateway;

#[async_trait]
impl DocumentStore for DisabledGateway {
    async fn query(
        &self,
        _collection: &str,
        _filters: &[Filter],
        _order: Option<OrderBy>,
        _limit: Option<usize>,
    ) -> Result<Vec<Value>, GatewayError> {
        Err(GatewayError::Unreachable(
            "remote backend not configured".to_string(),
        ))
    }

    async fn get(&self, _collection: &str, _id: &str) -> Result<Value, GatewayError> {
        Err(GatewayError::Unreachable(
            "remote backend not configured".to_string(),
        ))
    }

    async fn insert(&self, _collection: &str, _record: Value) -> Result<String, GatewayError> {
        Err(GatewayError::Unreachable(
            "remote backend not configured".to_string(),
        ))
    }

    async fn update(
        &self,
        _collection: &str,
        _id: &str,
        _partial: Value,
    ) -> Result<(), GatewayError> {
        Err(GatewayError::Unreachable(
            "remote backend not configured".to_string(),
        ))
    }

    async fn delete(&self, _collection: &str, _id: &str) -> Result<(), GatewayError> {
        Err(GatewayError::Unreachable(
            "remote backend not configured".to_string(),
        ))
    }
}

#[async_trait]
impl RemoteProcedures for DisabledGateway {
    async fn invoke(&self, _name: &str, _payload: Value) -> Result<Value, GatewayError> {
        Err(GatewayError::Unreachable(
            "remote backend not configured".to_string(),
        ))
    }
}

impl AppState {
    /// Build the application state with the configured implementations.
    pub fn new(config: &AppConfig) -> Self {
        let store: Arc<dyn KeyValueStore> = match &config.data_dir {
            Some(dir) => {
                tracing::info!(data_dir = %dir.display(), "Persisting mock data to disk");
                Arc::new(JsonFileStore::new(dir.clone()))
            }
            None => {
                tracing::info!("DATA_DIR not set. Mock data is in-memory only.");
                Arc::new(InMemoryStore::new())
            }
        };

        let engine = MockDataEngine::new(
            store.clone(),
            MockEngineConfig {
                simulate_latency: config.mock_latency,
                rng_seed: None,
            },
        );

        #[cfg(feature = "remote")]
        let (documents, functions): (Arc<dyn DocumentStore>, Arc<dyn RemoteProcedures>) =
            match &config.remote {
                Some(remote) => {
                    tracing::info!(api_url = %remote.api_url, "Remote backend configured");
                    (
                        Arc::new(pukeko_infra::HttpDocumentStore::new(&remote.api_url)),
                        Arc::new(pukeko_infra::HttpFunctions::new(&remote.functions_url)),
                    )
                }
                None => (Arc::new(DisabledGateway), Arc::new(DisabledGateway)),
            };

        #[cfg(not(feature = "remote"))]
        let (documents, functions): (Arc<dyn DocumentStore>, Arc<dyn RemoteProcedures>) = {
            tracing::info!("Built without remote feature - mock data only");
            (Arc::new(DisabledGateway), Arc::new(DisabledGateway))
        };

        let api = ApiService::new(
            engine,
            documents,
            functions,
            Arc::new(TracingEventTracker),
            store,
        );

        if config.remote.is_none() && !api.is_mock_mode_enabled() {
            tracing::warn!("REMOTE_API_URL not set. Running in mock mode.");
            api.set_mock_mode(true);
        }

        tracing::info!(
            mock = api.is_mock_mode_enabled(),
            "Application state initialized"
        );

        Self { api: Arc::new(api) }
    }
}
