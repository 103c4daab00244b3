use axum::{
    extract::Request,
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get},
    Router,
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::nomination::NominationStore;
use crate::omdb::MovieSearch;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<NominationStore>,
    pub searcher: Arc<dyn MovieSearch>,
}

impl AppState {
    pub fn new(
        config: Config,
        store: Arc<NominationStore>,
        searcher: Arc<dyn MovieSearch>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            store,
            searcher,
        }
    }
}

/// The router wrapped in path normalization. Rewriting has to happen before
/// routing, so the routes sit behind an outer router's fallback.
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .fallback_service(build_router(state))
        .layer(axum::middleware::from_fn(crate::middleware::normalize_path))
}

pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/api/search", get(crate::api::search))
        .route("/api/view", get(crate::api::get_view))
        .route(
            "/api/nominations",
            get(crate::api::list_nominations).post(crate::api::nominate),
        )
        .route(
            "/api/nominations/:title",
            delete(crate::api::remove_nomination),
        );

    let mut router = Router::new()
        .route("/robots.txt", get(robots_txt_handler))
        .merge(api_routes)
        .fallback(fallback_handler);

    if let Some(ref appdir) = state.config.appdir {
        router = router.fallback_service(ServeDir::new(appdir));
    }

    router
        .layer(axum::middleware::from_fn(crate::middleware::log_request))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn robots_txt_handler() -> &'static str {
    "User-agent: *\nDisallow: /\n"
}

async fn fallback_handler(req: Request<axum::body::Body>) -> impl IntoResponse {
    if req.method() == axum::http::Method::OPTIONS {
        return StatusCode::OK.into_response();
    }
    StatusCode::NOT_FOUND.into_response()
}
