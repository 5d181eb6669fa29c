use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use chrono::Local;
use serde_json::json;

use super::catalog::CatalogSource;
use super::domain::EstimateId;
use super::repository::{EstimateRepository, QuoteDelivery, RepositoryError};
use super::service::{
    EstimateRevision, EstimateService, EstimateServiceError, EstimateSubmission,
};

/// Router builder exposing HTTP endpoints for the estimate lifecycle.
pub fn estimate_router<R, D, C>(service: Arc<EstimateService<R, D, C>>) -> Router
where
    R: EstimateRepository + 'static,
    D: QuoteDelivery + 'static,
    C: CatalogSource + 'static,
{
    Router::new()
        .route("/api/v1/estimates", post(create_handler::<R, D, C>))
        .route(
            "/api/v1/estimates/:estimate_id",
            get(get_handler::<R, D, C>),
        )
        .route(
            "/api/v1/estimates/:estimate_id/revise",
            post(revise_handler::<R, D, C>),
        )
        .route(
            "/api/v1/estimates/:estimate_id/recompute",
            post(recompute_handler::<R, D, C>),
        )
        .route(
            "/api/v1/estimates/:estimate_id/send",
            post(send_handler::<R, D, C>),
        )
        .route(
            "/api/v1/estimates/:estimate_id/duplicate",
            post(duplicate_handler::<R, D, C>),
        )
        .with_state(service)
}

fn error_response(error: EstimateServiceError) -> Response {
    let status = match &error {
        EstimateServiceError::Profile(_) | EstimateServiceError::Compute(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        EstimateServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        EstimateServiceError::Repository(RepositoryError::Conflict)
        | EstimateServiceError::NotEditable { .. } => StatusCode::CONFLICT,
        EstimateServiceError::Repository(RepositoryError::Unavailable(_))
        | EstimateServiceError::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let payload = json!({ "error": error.to_string() });
    (status, axum::Json(payload)).into_response()
}

pub(crate) async fn create_handler<R, D, C>(
    State(service): State<Arc<EstimateService<R, D, C>>>,
    axum::Json(submission): axum::Json<EstimateSubmission>,
) -> Response
where
    R: EstimateRepository + 'static,
    D: QuoteDelivery + 'static,
    C: CatalogSource + 'static,
{
    let today = Local::now().date_naive();
    match service.create(submission, today) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.quote_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_handler<R, D, C>(
    State(service): State<Arc<EstimateService<R, D, C>>>,
    Path(estimate_id): Path<String>,
) -> Response
where
    R: EstimateRepository + 'static,
    D: QuoteDelivery + 'static,
    C: CatalogSource + 'static,
{
    let id = EstimateId(estimate_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.quote_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn revise_handler<R, D, C>(
    State(service): State<Arc<EstimateService<R, D, C>>>,
    Path(estimate_id): Path<String>,
    axum::Json(revision): axum::Json<EstimateRevision>,
) -> Response
where
    R: EstimateRepository + 'static,
    D: QuoteDelivery + 'static,
    C: CatalogSource + 'static,
{
    let id = EstimateId(estimate_id);
    match service.revise(&id, revision) {
        Ok(record) => (StatusCode::OK, axum::Json(record.quote_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn recompute_handler<R, D, C>(
    State(service): State<Arc<EstimateService<R, D, C>>>,
    Path(estimate_id): Path<String>,
) -> Response
where
    R: EstimateRepository + 'static,
    D: QuoteDelivery + 'static,
    C: CatalogSource + 'static,
{
    let id = EstimateId(estimate_id);
    match service.recompute(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.quote_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn send_handler<R, D, C>(
    State(service): State<Arc<EstimateService<R, D, C>>>,
    Path(estimate_id): Path<String>,
) -> Response
where
    R: EstimateRepository + 'static,
    D: QuoteDelivery + 'static,
    C: CatalogSource + 'static,
{
    let id = EstimateId(estimate_id);
    let today = Local::now().date_naive();
    match service.send(&id, today) {
        Ok(record) => (StatusCode::OK, axum::Json(record.quote_view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn duplicate_handler<R, D, C>(
    State(service): State<Arc<EstimateService<R, D, C>>>,
    Path(estimate_id): Path<String>,
) -> Response
where
    R: EstimateRepository + 'static,
    D: QuoteDelivery + 'static,
    C: CatalogSource + 'static,
{
    let id = EstimateId(estimate_id);
    let today = Local::now().date_naive();
    match service.duplicate(&id, today) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.quote_view())).into_response(),
        Err(error) => error_response(error),
    }
}
