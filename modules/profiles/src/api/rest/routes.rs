use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing::get,
    Extension, Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::api::rest::handlers::{self, ServerInfo};
use crate::domain::service::Service;

/// Build the profile store HTTP surface.
///
/// CORS permits any origin but only the methods the API actually serves
/// (GET/POST plus preflight) and the content-type header.
pub fn router(service: Arc<Service>, port: u16) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(handlers::index))
        .route("/api/health", get(handlers::health))
        .route(
            "/api/profiles",
            get(handlers::list_profiles).post(handlers::save_profile),
        )
        .route("/api/profiles/{id}", get(handlers::get_profile))
        .fallback(handlers::not_found)
        .layer(Extension(service))
        .layer(Extension(ServerInfo { port }))
        .layer(cors)
}
