use super::{
    handlers::{health, posts},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, patch, post},
};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Post card
        .route("/api/v1/posts/card", post(posts::render_card))
        // Post actions
        .route(
            "/api/v1/posts/{id}",
            patch(posts::edit_post).delete(posts::delete_post),
        )
        .route("/api/v1/posts/{id}/like", post(posts::like_post))
        .route("/api/v1/posts/{id}/unlike", post(posts::unlike_post))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
