pub mod config;
pub mod dto;
pub mod errors;
pub mod i18n;
pub mod models;
pub mod repository;
pub mod routes;
pub mod service;
pub mod states;

use axum::{
    Router,
    http::HeaderValue,
    middleware,
    routing::{get, post},
};
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, states::AppState};

/// Build the application router with a fresh state.
pub fn app(config: &Config) -> Router {
    let state = AppState::new();
    let catalog = state.catalog.clone();

    Router::new()
        .route("/health", get(routes::health::health_check))
        .route(
            "/posts",
            post(routes::post::create_post).get(routes::post::get_posts),
        )
        .route(
            "/posts/{id}",
            get(routes::post::get_post)
                .put(routes::post::update_post)
                .delete(routes::post::delete_post),
        )
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            catalog,
            errors::translate_errors,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.allowed_origin))
}

/// One allowed origin, every method and header (mirrored, since credentials
/// rule out wildcards), credentials allowed. Applied to every route.
fn cors_layer(allowed_origin: &str) -> CorsLayer {
    let origin = allowed_origin
        .parse::<HeaderValue>()
        .expect("CORS_ALLOWED_ORIGIN must be a valid origin");

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}
