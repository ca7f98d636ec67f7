use serde::{Deserialize, Serialize};

use super::Platform;

/// One generated content suggestion for a topic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSuggestion {
    pub title: String,
    pub content: String,
    pub best_platforms: Vec<Platform>,
}
