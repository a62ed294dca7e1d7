// src/routes/mod.rs
pub mod chat;

use crate::config::AllowedOrigins;
use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::{chat_handler, root_handler};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/", get(root_handler))
        .route("/chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}

/// Browser access policy. `Any` mirrors the caller's origin so credentials
/// stay allowed; a list only narrows the origins.
pub fn cors_layer(origins: &AllowedOrigins) -> CorsLayer {
    match origins {
        AllowedOrigins::Any => CorsLayer::very_permissive(),
        AllowedOrigins::List(list) => CorsLayer::new()
            .allow_origin(AllowOrigin::list(list.iter().cloned()))
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
            .allow_credentials(true),
    }
}

/// The full service: routes, shared state and CORS.
pub fn app(state: SharedState, origins: &AllowedOrigins) -> Router {
    create_router().with_state(state).layer(cors_layer(origins))
}
