//! Trending-topic search handler.

use actix_web::{HttpResponse, web};

use pukeko_shared::ApiResponse;
use pukeko_shared::dto::TrendingQuery;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/trending?query=
pub async fn search(
    state: web::Data<AppState>,
    query: web::Query<TrendingQuery>,
) -> AppResult<HttpResponse> {
    let topics = state.api.search_trending_topics(&query.query).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(topics)))
}
