use crate::domain::errors::EtfError;
use crate::domain::etf::{Etf, closest_matches};
use crate::domain::ports::EtfCatalog;

const MAX_RATE_PERCENT: f64 = 100.0;

// ETF suggestion use case with an injected catalog.
pub struct SuggestEtfsUseCase<C> {
    pub catalog: C,
}

impl<C> SuggestEtfsUseCase<C>
where
    C: EtfCatalog,
{
    pub async fn execute(&self, interest_rate: f64) -> Result<Vec<Etf>, EtfError> {
        if !interest_rate.is_finite() || !(0.0..=MAX_RATE_PERCENT).contains(&interest_rate) {
            return Err(EtfError::InvalidRate);
        }

        let catalog = self
            .catalog
            .list()
            .await
            .map_err(EtfError::CatalogUnavailable)?;

        Ok(closest_matches(catalog, interest_rate))
    }
}
