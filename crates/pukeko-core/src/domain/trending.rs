use serde::{Deserialize, Serialize};

/// One trending topic. Read-only: topics are generated when the mock
/// engine initializes and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingTopic {
    pub title: String,
    pub description: String,
    /// Display label, e.g. "LinkedIn".
    pub platform: String,
    pub trending_score: i64,
}

/// Trending topics grouped under category names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrendingCatalog {
    pub categories: Vec<(String, Vec<TrendingTopic>)>,
}

impl TrendingCatalog {
    /// Case-insensitive search. A query matching a category name pulls in
    /// every topic of that category; otherwise topics match individually
    /// on title or description. An empty query yields nothing.
    pub fn search(&self, query: &str) -> Vec<TrendingTopic> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        let mut results = Vec::new();

        for (category, topics) in &self.categories {
            if category.to_lowercase().contains(&needle) {
                results.extend(topics.iter().cloned());
            } else {
                results.extend(
                    topics
                        .iter()
                        .filter(|topic| {
                            topic.title.to_lowercase().contains(&needle)
                                || topic.description.to_lowercase().contains(&needle)
                        })
                        .cloned(),
                );
            }
        }

        results
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> TrendingCatalog {
        TrendingCatalog {
            categories: vec![
                (
                    "AI and Machine Learning".to_string(),
                    vec![TrendingTopic {
                        title: "Advancements in Generative AI".to_string(),
                        description: "New models everywhere.".to_string(),
                        platform: "LinkedIn".to_string(),
                        trending_score: 94,
                    }],
                ),
                (
                    "Remote Work".to_string(),
                    vec![TrendingTopic {
                        title: "Hybrid Office Solutions".to_string(),
                        description: "Balancing remote and office work.".to_string(),
                        platform: "Twitter".to_string(),
                        trending_score: 82,
                    }],
                ),
            ],
        }
    }

    #[test]
    fn empty_query_yields_nothing() {
        assert!(catalog().search("").is_empty());
    }

    #[test]
    fn category_match_pulls_whole_category() {
        let results = catalog().search("machine learning");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Advancements in Generative AI");
    }

    #[test]
    fn topic_match_is_case_insensitive() {
        let results = catalog().search("HYBRID");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Hybrid Office Solutions");
    }

    #[test]
    fn unmatched_query_yields_nothing() {
        assert!(catalog().search("quantum").is_empty());
    }
}
