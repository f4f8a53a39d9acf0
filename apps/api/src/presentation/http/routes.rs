use super::{
    handlers::{comments, health},
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let collection = get(comments::list_comments).post(comments::create_comment);
    let item = get(comments::get_comment)
        .put(comments::replace_comment)
        .patch(comments::patch_comment)
        .delete(comments::delete_comment);
    let toggle = post(comments::toggle_like);

    Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Comments CRUD, with and without the trailing slash
        .route("/comments", collection.clone())
        .route("/comments/", collection)
        .route("/comments/{id}", item.clone())
        .route("/comments/{id}/", item)
        // Likes
        .route("/comments/{id}/toggle-like", toggle.clone())
        .route("/comments/{id}/toggle-like/", toggle)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}
