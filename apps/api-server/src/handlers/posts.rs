//! Post CRUD handlers.
//!
//! Input validation lives here, at the calling layer: the data facade
//! assumes drafts it receives are already well-formed.

use actix_web::{HttpResponse, web};

use pukeko_core::domain::{PostDraft, PostStatus, PostUpdate};
use pukeko_shared::ApiResponse;
use pukeko_shared::dto::{CreatePostRequest, ListPostsQuery, UpdatePostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// POST /api/posts
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();

    // Validate input
    if req.title.trim().is_empty() {
        return Err(AppError::BadRequest("Title must not be empty".to_string()));
    }
    if req.content.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Content must not be empty".to_string(),
        ));
    }
    if req.platforms.is_empty() {
        return Err(AppError::BadRequest(
            "Select at least one platform".to_string(),
        ));
    }

    let draft = PostDraft {
        title: req.title,
        content: req.content,
        platforms: req.platforms,
        scheduled_for: req.scheduled_for,
        status: req.status,
    };

    let post = state.api.create_post(draft).await?;
    Ok(HttpResponse::Created().json(ApiResponse::ok(post)))
}

/// GET /api/posts?limit=&status=
pub async fn list(
    state: web::Data<AppState>,
    query: web::Query<ListPostsQuery>,
) -> AppResult<HttpResponse> {
    let status = match query.status.as_deref() {
        Some(raw) => Some(
            raw.parse::<PostStatus>()
                .map_err(AppError::BadRequest)?,
        ),
        None => None,
    };

    let posts = state.api.get_posts(query.limit, status).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// PATCH /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if req.platforms.as_ref().is_some_and(|p| p.is_empty()) {
        return Err(AppError::BadRequest(
            "Select at least one platform".to_string(),
        ));
    }

    let updates = PostUpdate {
        title: req.title,
        content: req.content,
        platforms: req.platforms,
        scheduled_for: req.scheduled_for,
        status: req.status,
    };

    let post = state.api.update_post(&id, updates).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(post)))
}

/// DELETE /api/posts/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.api.delete_post(&id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok_with_message(id, "Post deleted")))
}
