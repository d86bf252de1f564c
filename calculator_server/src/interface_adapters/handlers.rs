use crate::domain::errors::{CalculationError, EtfError};
use crate::interface_adapters::protocol::{
    CalculationQuery, CalculationRequest, ErrorResponse, EtfInformationResponse, EtfQuery,
    HealthResponse, InvalidQueryField, YearDataResponse,
};
use crate::interface_adapters::state::AppState;
use crate::use_cases::calculate_projection::CalculateProjectionUseCase;
use crate::use_cases::suggest_etfs::SuggestEtfsUseCase;
use axum::{
    Json,
    extract::{
        Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{error, info, warn};

type ErrorReply = (StatusCode, Json<ErrorResponse>);

// Landing endpoint describing the available routes.
pub async fn index() -> Json<Value> {
    Json(json!({
        "message": "Welcome to Compound Interest Calculator API",
        "endpoints": {
            "calculate": "POST /calculate-compound-interest",
            "calculation": "/calculation?initial_investment=1000&monthly_contribution=100&saving_years=10&interest_rate=8&compound_frequency=monthly",
            "etf_information": "/etf_information?interest_rate=8.5",
            "health": "/health",
        }
    }))
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

// Handler for the JSON projection endpoint.
#[tracing::instrument(name = "calculate_compound_interest", skip_all)]
pub async fn calculate_compound_interest(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<Json<Vec<YearDataResponse>>, ErrorReply> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection, "rejected calculation payload");
        error_response(StatusCode::BAD_REQUEST, "Invalid request data")
    })?;

    run_projection(&state, request)
}

// Handler for the query-string projection endpoint.
#[tracing::instrument(name = "calculation", skip_all)]
pub async fn calculation(
    State(state): State<Arc<AppState>>,
    query: Result<Query<CalculationQuery>, QueryRejection>,
) -> Result<Json<Vec<YearDataResponse>>, ErrorReply> {
    let Query(query) = query.map_err(|rejection| {
        warn!(error = %rejection, "rejected calculation query");
        error_response(StatusCode::BAD_REQUEST, "Invalid request data")
    })?;

    let request = query.into_request().map_err(|InvalidQueryField(field)| {
        error_response(StatusCode::BAD_REQUEST, &format!("Invalid {field} value"))
    })?;

    run_projection(&state, request)
}

fn run_projection(
    state: &AppState,
    request: CalculationRequest,
) -> Result<Json<Vec<YearDataResponse>>, ErrorReply> {
    let requested_frequency = request.compound_frequency.clone();
    let use_case = CalculateProjectionUseCase {
        max_horizon_years: state.max_horizon_years,
    };

    let outcome = use_case.execute(request).map_err(map_calculation_error)?;

    if !outcome.frequency_recognized {
        warn!(
            requested = ?requested_frequency,
            "unrecognized compound frequency, defaulting to monthly"
        );
    }
    info!(
        years = outcome.input.horizon_years,
        frequency = outcome.input.frequency.label(),
        "projection computed"
    );

    Ok(Json(
        outcome
            .snapshots
            .into_iter()
            .map(YearDataResponse::from)
            .collect(),
    ))
}

// Handler for ETF suggestions near a requested rate of return.
#[tracing::instrument(name = "etf_information", skip_all)]
pub async fn etf_information(
    State(state): State<Arc<AppState>>,
    query: Result<Query<EtfQuery>, QueryRejection>,
) -> Result<Json<EtfInformationResponse>, (StatusCode, Json<EtfInformationResponse>)> {
    let Query(query) = query.map_err(|_| {
        etf_error_response(StatusCode::BAD_REQUEST, "interest_rate must be a valid number")
    })?;

    let raw_rate = query
        .interest_rate
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| {
            etf_error_response(StatusCode::BAD_REQUEST, "interest_rate parameter is required")
        })?;
    let interest_rate: f64 = raw_rate.trim().parse().map_err(|_| {
        etf_error_response(StatusCode::BAD_REQUEST, "interest_rate must be a valid number")
    })?;

    let use_case = SuggestEtfsUseCase {
        catalog: state.etf_catalog.clone(),
    };
    let etfs = use_case
        .execute(interest_rate)
        .await
        .map_err(map_etf_error)?;

    info!(interest_rate, count = etfs.len(), "etf suggestions served");

    Ok(Json(EtfInformationResponse::found(etfs)))
}

// Helper to build a JSON error response.
fn error_response(status: StatusCode, message: &str) -> ErrorReply {
    (
        status,
        Json(ErrorResponse {
            error: message.to_string(),
        }),
    )
}

fn etf_error_response(
    status: StatusCode,
    message: &str,
) -> (StatusCode, Json<EtfInformationResponse>) {
    (status, Json(EtfInformationResponse::failed(message)))
}

// Every validation failure is the caller's fault; the engine itself cannot fail.
fn map_calculation_error(err: CalculationError) -> ErrorReply {
    error_response(StatusCode::BAD_REQUEST, &err.to_string())
}

fn map_etf_error(err: EtfError) -> (StatusCode, Json<EtfInformationResponse>) {
    match err {
        EtfError::InvalidRate => etf_error_response(StatusCode::BAD_REQUEST, &err.to_string()),
        EtfError::CatalogUnavailable(_) => {
            error!(error = %err, "failed to load etf catalog");
            etf_error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
        }
    }
}
