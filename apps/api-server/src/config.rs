//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Remote backend endpoints.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the document-store API.
    pub api_url: String,
    /// Base URL of the remote functions; defaults to `api_url`.
    pub functions_url: String,
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Where the mock engine persists its data. Unset means in-memory only.
    pub data_dir: Option<PathBuf>,
    /// Remote backend; unset means the server runs on mock data alone.
    pub remote: Option<RemoteConfig>,
    /// Whether the mock engine sleeps to simulate round trips.
    pub mock_latency: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let remote = env::var("REMOTE_API_URL").ok().map(|api_url| {
            let functions_url =
                env::var("REMOTE_FUNCTIONS_URL").unwrap_or_else(|_| api_url.clone());
            RemoteConfig {
                api_url,
                functions_url,
            }
        });

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            data_dir: env::var("DATA_DIR").ok().map(PathBuf::from),
            remote,
            mock_latency: env::var("MOCK_LATENCY")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}
