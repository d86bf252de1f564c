use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::etf::Etf;

// Port for the ETF reference data consulted by the suggestion use case.
#[async_trait]
pub trait EtfCatalog: Send + Sync {
    async fn list(&self) -> Result<Vec<Etf>, String>;
}

#[async_trait]
impl<T> EtfCatalog for Arc<T>
where
    T: EtfCatalog + ?Sized,
{
    async fn list(&self) -> Result<Vec<Etf>, String> {
        (**self).list().await
    }
}
