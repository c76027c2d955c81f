//! JSON HTTP surface over the classifier.

mod handlers;
mod state;

use axum::http::{header, HeaderValue};
use axum::routing::{get, post};
use axum::Router;
use chrono::Utc;
use state::AppState;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::ServerConfig;
use crate::error::{LocalityError, Result};
use crate::geo::Gazetteer;

pub use handlers::ApiError;

pub fn build_router() -> Router {
    build_router_with(Gazetteer::builtin())
}

pub fn build_router_with(gazetteer: &'static Gazetteer) -> Router {
    let state = Arc::new(AppState {
        gazetteer,
        started_at: Utc::now(),
    });

    // Reference tables never change while the process runs.
    let reference: Router<Arc<AppState>> = Router::new()
        .route("/api/countries", get(handlers::countries))
        .route("/api/countries/{name}/cities", get(handlers::country_cities))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CACHE_CONTROL,
            HeaderValue::from_static("public, max-age=3600"),
        ));

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/classify", get(handlers::classify))
        .route("/api/sort", post(handlers::sort))
        .merge(reference)
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn start(config: &ServerConfig) -> Result<()> {
    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| LocalityError::Bind {
            addr: addr.clone(),
            source,
        })?;

    tracing::info!("Locality server listening on http://{}", addr);

    axum::serve(listener, build_router()).await?;
    Ok(())
}
