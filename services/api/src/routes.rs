use crate::infra::{shop_rate_profile, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use paintshop::error::AppError;
use paintshop::workflows::estimating::{
    compute, estimate_router, Area, CatalogSource, EstimateRepository, EstimateService,
    EstimateServiceError, QuoteDelivery, RateProfile, RateProfileSnapshot, SurfaceCatalog,
};

/// Ad-hoc pricing request. Leaving the profile out prices against the shop
/// defaults; nothing is persisted either way.
#[derive(Debug, Deserialize)]
pub(crate) struct EstimatePreviewRequest {
    #[serde(default)]
    pub(crate) profile: Option<RateProfile>,
    pub(crate) areas: Vec<Area>,
    #[serde(default)]
    pub(crate) crew_size: Option<u32>,
}

#[derive(Debug, Serialize)]
pub(crate) struct EstimatePreviewResponse {
    pub(crate) currency: String,
    pub(crate) crew_size: u32,
    pub(crate) labor_hours_total: f64,
    pub(crate) labor_cost: f64,
    pub(crate) material_cost: f64,
    pub(crate) total_cost: f64,
    pub(crate) estimated_duration_days: u32,
}

pub(crate) fn with_estimate_routes<R, D, C>(
    service: Arc<EstimateService<R, D, C>>,
) -> axum::Router
where
    R: EstimateRepository + 'static,
    D: QuoteDelivery + 'static,
    C: CatalogSource + 'static,
{
    estimate_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/estimates/preview",
            axum::routing::post(estimate_preview_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn estimate_preview_endpoint(
    Json(payload): Json<EstimatePreviewRequest>,
) -> Result<Json<EstimatePreviewResponse>, AppError> {
    let EstimatePreviewRequest {
        profile,
        areas,
        crew_size,
    } = payload;

    let profile = profile.unwrap_or_else(shop_rate_profile);
    let snapshot = RateProfileSnapshot::capture(&profile).map_err(EstimateServiceError::from)?;
    let crew_size = crew_size.unwrap_or(1).max(1);
    let catalog = SurfaceCatalog::standard();

    let totals = compute(snapshot.profile(), &areas, &catalog, crew_size)
        .map_err(EstimateServiceError::from)?;

    Ok(Json(EstimatePreviewResponse {
        currency: snapshot.profile().currency.clone(),
        crew_size,
        labor_hours_total: totals.labor_hours_total,
        labor_cost: totals.labor_cost,
        material_cost: totals.material_cost,
        total_cost: totals.total_cost,
        estimated_duration_days: totals.estimated_duration_days,
    }))
}
