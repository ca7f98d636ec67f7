//! Seed dataset for the mock engine: three example posts and the static
//! trending-topic catalog.

use chrono::{Duration, Utc};
use pukeko_core::domain::{
    EngagementCounts, Platform, Post, PostStatus, TrendingCatalog, TrendingTopic,
};

pub fn seed_posts() -> Vec<Post> {
    let now = Utc::now();
    vec![
        Post {
            id: "mock-seed-1".to_string(),
            title: "Our Latest Product Launch".to_string(),
            content: "Excited to announce our newest product line hitting the shelves next week!"
                .to_string(),
            platforms: vec![Platform::Twitter, Platform::Facebook, Platform::Instagram],
            created_at: now - Duration::days(2),
            scheduled_for: now + Duration::days(1),
            status: PostStatus::Scheduled,
            analytics: EngagementCounts::new(1245, 89, 32, 14),
        },
        Post {
            id: "mock-seed-2".to_string(),
            title: "Customer Appreciation Day".to_string(),
            content: "Join us this Friday for exclusive deals and giveaways as we celebrate YOU!"
                .to_string(),
            platforms: vec![Platform::Facebook, Platform::Instagram],
            created_at: now - Duration::days(2),
            scheduled_for: now - Duration::days(1),
            status: PostStatus::Published,
            analytics: EngagementCounts::new(3567, 241, 68, 47),
        },
        Post {
            id: "mock-seed-3".to_string(),
            title: "Industry Insights: AI Trends 2025".to_string(),
            content: "Our latest research shows how AI is transforming business operations. \
                      Check out the full report!"
                .to_string(),
            platforms: vec![Platform::Linkedin, Platform::Twitter],
            created_at: now - Duration::days(4),
            scheduled_for: now - Duration::days(3),
            status: PostStatus::Published,
            analytics: EngagementCounts::new(4892, 315, 112, 57),
        },
    ]
}

pub fn trending_catalog() -> TrendingCatalog {
    let topic = |title: &str, description: &str, platform: &str, score: i64| TrendingTopic {
        title: title.to_string(),
        description: description.to_string(),
        platform: platform.to_string(),
        trending_score: score,
    };

    TrendingCatalog {
        categories: vec![
            (
                "AI and Machine Learning".to_string(),
                vec![
                    topic(
                        "Advancements in Generative AI",
                        "New generative AI models are creating more realistic content than ever before.",
                        "LinkedIn",
                        94,
                    ),
                    topic(
                        "AI Ethics Guidelines",
                        "Industry leaders collaborate on new ethics framework for artificial intelligence development.",
                        "Twitter",
                        87,
                    ),
                ],
            ),
            (
                "Remote Work".to_string(),
                vec![
                    topic(
                        "New Work From Home Trends",
                        "The shift to remote work is creating new challenges and opportunities for businesses.",
                        "Twitter",
                        85,
                    ),
                    topic(
                        "Hybrid Office Solutions",
                        "Companies are adopting innovative approaches to balance remote and in-office work.",
                        "LinkedIn",
                        82,
                    ),
                ],
            ),
            (
                "Sustainability".to_string(),
                vec![
                    topic(
                        "Eco-Friendly Products Surge",
                        "Consumer interest in sustainable products continues to rise in 2024.",
                        "Instagram",
                        92,
                    ),
                    topic(
                        "Corporate Carbon Neutrality",
                        "Major corporations announce ambitious carbon neutrality goals for the coming decade.",
                        "Facebook",
                        79,
                    ),
                ],
            ),
            (
                "Health Tech".to_string(),
                vec![
                    topic(
                        "AI in Healthcare Advancements",
                        "Artificial intelligence is revolutionizing patient care and medical research.",
                        "LinkedIn",
                        88,
                    ),
                    topic(
                        "Wearable Health Monitoring",
                        "New wearable devices offer unprecedented health tracking capabilities.",
                        "Instagram",
                        76,
                    ),
                ],
            ),
        ],
    }
}
