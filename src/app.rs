use crate::state::AppState;
use crate::{auth, handlers};
use axum::routing::{get, post, put};
use axum::Router;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/auth/register", post(auth::register))
        .route("/api/auth/login", post(auth::login))
        .route("/api/moods", post(handlers::create_mood).get(handlers::list_moods))
        .route("/api/moods/analytics", get(handlers::analytics))
        .route(
            "/api/moods/:id",
            put(handlers::update_mood).delete(handlers::delete_mood),
        )
        .with_state(state)
}
