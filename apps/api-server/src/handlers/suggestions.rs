//! Content-suggestion handler.

use actix_web::{HttpResponse, web};

use pukeko_shared::ApiResponse;
use pukeko_shared::dto::SuggestionsRequest;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/suggestions
pub async fn generate(
    state: web::Data<AppState>,
    body: web::Json<SuggestionsRequest>,
) -> AppResult<HttpResponse> {
    let topic = body.into_inner().topic;
    if topic.trim().is_empty() {
        return Err(AppError::BadRequest("Topic must not be empty".to_string()));
    }

    let suggestions = state.api.generate_content_suggestions(&topic).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(suggestions)))
}
