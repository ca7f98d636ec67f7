//! HTTP handlers and route configuration.

mod analytics;
mod health;
mod mode;
mod posts;
mod suggestions;
mod trending;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .route("/connection", web::get().to(mode::check_connection))
            .route("/mode", web::get().to(mode::get_mode))
            .route("/mode", web::put().to(mode::set_mode))
            .route("/trending", web::get().to(trending::search))
            .route("/analytics", web::get().to(analytics::snapshot))
            .route("/suggestions", web::post().to(suggestions::generate))
            .service(
                web::scope("/posts")
                    .route("", web::post().to(posts::create))
                    .route("", web::get().to(posts::list))
                    .route("/{id}", web::patch().to(posts::update))
                    .route("/{id}", web::delete().to(posts::delete)),
            ),
    );
}
