//! HTTP API server

use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::store::AlbumStore;

pub mod error;
pub mod handlers;
pub mod response;
pub mod state;

pub use error::ApiError;
pub use response::IndentedJson;
pub use state::AppState;

/// Build the API router using the provided application state
pub fn create_router(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/albums",
            get(handlers::list_albums).post(handlers::create_album),
        )
        .route("/albums/:id", get(handlers::get_album));

    apply_middleware(router).with_state(state)
}

/// Request tracing and panic recovery shared by every route
pub fn apply_middleware<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(error::panic_response)),
    )
}

/// Convenience helper serving `store` with default response settings
pub fn create_album_router(store: Arc<AlbumStore>) -> Router {
    create_router(AppState::new(store))
}
