use crate::interface_adapters::cors::permissive_cors;
use crate::interface_adapters::handlers::{
    calculate_compound_interest, calculation, etf_information, health, index,
};
use crate::interface_adapters::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

// Build the HTTP router for the calculator API.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route(
            "/calculate-compound-interest",
            post(calculate_compound_interest),
        )
        .route("/calculation", get(calculation))
        .route("/etf_information", get(etf_information))
        .layer(middleware::from_fn(permissive_cors))
        .with_state(state)
}
