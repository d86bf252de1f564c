use async_trait::async_trait;

use crate::domain::etf::Etf;
use crate::domain::ports::EtfCatalog;

// Catalog double serving a fixed list of funds.
#[derive(Clone, Default)]
pub(crate) struct FixedCatalog {
    etfs: Vec<Etf>,
}

impl FixedCatalog {
    pub(crate) fn with_returns(returns: &[(&str, f64)]) -> Self {
        let etfs = returns
            .iter()
            .map(|(symbol, avg_return)| Etf {
                symbol: symbol.to_string(),
                name: format!("{symbol} Test Fund"),
                avg_return: *avg_return,
                description: "Test fund".to_string(),
            })
            .collect();
        Self { etfs }
    }
}

#[async_trait]
impl EtfCatalog for FixedCatalog {
    async fn list(&self) -> Result<Vec<Etf>, String> {
        Ok(self.etfs.clone())
    }
}

// Catalog double whose lookups always fail.
#[derive(Clone, Copy)]
pub(crate) struct FailingCatalog;

#[async_trait]
impl EtfCatalog for FailingCatalog {
    async fn list(&self) -> Result<Vec<Etf>, String> {
        Err("catalog offline".to_string())
    }
}
