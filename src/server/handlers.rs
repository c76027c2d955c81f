use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;

use crate::geo::{Badge, Listing, LocationPriority, Priority, Ranked};

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing '{0}' parameter")]
    MissingParam(&'static str),

    #[error("Unknown country: '{0}'")]
    UnknownCountry(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::MissingParam(_) => StatusCode::BAD_REQUEST,
            ApiError::UnknownCountry(_) => StatusCode::NOT_FOUND,
        };
        let body = ApiErrorBody {
            error: self.to_string(),
            code: status.as_u16(),
        };
        (status, Json(body)).into_response()
    }
}

// ─── GET /api/health ─────────────────────────────────────────────

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub uptime_secs: i64,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        uptime_secs: (Utc::now() - state.started_at).num_seconds(),
    })
}

// ─── GET /api/classify ───────────────────────────────────────────

#[derive(Deserialize)]
pub struct ClassifyQuery {
    pub location: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

#[derive(Serialize)]
pub struct ClassifyResponse {
    #[serde(flatten)]
    pub placement: LocationPriority,
    pub badge: Badge,
}

pub async fn classify(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ClassifyQuery>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let location = params.location.ok_or(ApiError::MissingParam("location"))?;

    let placement = state.gazetteer.classify(
        &location,
        params.city.as_deref(),
        params.country.as_deref(),
    );
    tracing::info!(
        location = %location,
        priority = %placement.priority,
        "GET /api/classify"
    );

    Ok(Json(ClassifyResponse {
        badge: placement.badge(),
        placement,
    }))
}

// ─── POST /api/sort ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SortRequest {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub max_priority: Option<Priority>,
    pub listings: Vec<Listing>,
}

#[derive(Serialize)]
pub struct SortResponse {
    pub count: usize,
    pub listings: Vec<Ranked<Listing>>,
}

pub async fn sort(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SortRequest>,
) -> Json<SortResponse> {
    let start = Instant::now();
    let received = req.listings.len();

    let listings = state.gazetteer.rank_within(
        req.listings,
        req.city.as_deref(),
        req.country.as_deref(),
        req.max_priority,
    );

    tracing::info!(
        received,
        returned = listings.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "POST /api/sort"
    );

    Json(SortResponse {
        count: listings.len(),
        listings,
    })
}

// ─── GET /api/countries ──────────────────────────────────────────

#[derive(Serialize)]
pub struct CountrySummary {
    pub name: &'static str,
    pub dial_code: &'static str,
    pub flag: &'static str,
    pub cities: usize,
}

pub async fn countries(State(state): State<Arc<AppState>>) -> Json<Vec<CountrySummary>> {
    Json(
        state
            .gazetteer
            .countries()
            .iter()
            .map(|c| CountrySummary {
                name: c.name,
                dial_code: c.dial_code,
                flag: c.flag,
                cities: c.cities.len(),
            })
            .collect(),
    )
}

// ─── GET /api/countries/{name}/cities ────────────────────────────

#[derive(Serialize)]
pub struct CityListResponse {
    pub country: &'static str,
    pub cities: &'static [&'static str],
}

pub async fn country_cities(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<CityListResponse>, ApiError> {
    let country = state
        .gazetteer
        .find_country(&name)
        .ok_or(ApiError::UnknownCountry(name))?;

    Ok(Json(CityListResponse {
        country: country.name,
        cities: country.cities,
    }))
}
