use std::sync::Arc;

use crate::domain::ports::EtfCatalog;

// Shared application state for the HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    // Arc<dyn Trait> so tests can swap in another catalog.
    pub etf_catalog: Arc<dyn EtfCatalog>,
    // Upper bound on `lengthYears` accepted by the projection endpoints.
    pub max_horizon_years: u32,
}
