//! Mock/live mode handlers.

use actix_web::{HttpResponse, web};

use pukeko_shared::ApiResponse;
use pukeko_shared::dto::{ConnectionResponse, ModeResponse, SetModeRequest};

use crate::state::AppState;

/// GET /api/mode
pub async fn get_mode(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::ok(ModeResponse {
        mock: state.api.is_mock_mode_enabled(),
    }))
}

/// PUT /api/mode
pub async fn set_mode(state: web::Data<AppState>, body: web::Json<SetModeRequest>) -> HttpResponse {
    state.api.set_mock_mode(body.mock);
    HttpResponse::Ok().json(ApiResponse::ok(ModeResponse {
        mock: state.api.is_mock_mode_enabled(),
    }))
}

/// GET /api/connection
///
/// Probes the remote store; a failed probe downgrades the server to mock
/// mode, which is reflected in the response.
pub async fn check_connection(state: web::Data<AppState>) -> HttpResponse {
    let connected = state.api.check_connection().await;
    HttpResponse::Ok().json(ApiResponse::ok(ConnectionResponse {
        connected,
        mock: state.api.is_mock_mode_enabled(),
    }))
}
