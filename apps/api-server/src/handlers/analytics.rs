//! Analytics snapshot handler.

use actix_web::{HttpResponse, web};

use pukeko_shared::ApiResponse;

use crate::middleware::error::AppResult;
use crate::state::AppState;

/// GET /api/analytics
pub async fn snapshot(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let snapshot = state.api.get_analytics().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(snapshot)))
}
