pub mod config;
pub mod error;
pub mod state;
pub mod dispatch;
pub mod routes;
pub mod views;
pub mod waitlist;

use std::sync::Arc;

use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::dispatch::github::GithubDispatcher;
use crate::state::{AppState, SharedState};

/// Build the app with the GitHub `repository_dispatch` trigger from config.
pub fn build_app(config: Config) -> Result<Router, String> {
    let dispatcher = GithubDispatcher::from_config(&config)?;
    tracing::info!("Dispatching waitlist events to {}", config.dispatch_url);
    Ok(build_app_with_dispatcher(config, Arc::new(dispatcher)))
}

pub fn build_app_with_dispatcher(config: Config, dispatcher: Arc<dyn Dispatcher>) -> Router {
    let allowed_origin = config.allowed_origin.clone();
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState { config, dispatcher });

    let api = routes::api_routes()
        .layer(RequestBodyLimitLayer::new(max_body_size))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            allowed_origin,
        ));

    // Security headers
    Router::new()
        .merge(api)
        .merge(views::view_routes())
        .route("/health", axum::routing::get(health))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
