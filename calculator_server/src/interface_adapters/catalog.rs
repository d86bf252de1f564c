use async_trait::async_trait;

use crate::domain::etf::Etf;
use crate::domain::ports::EtfCatalog;

// (symbol, name, five-year average return in percent, description).
// Illustrative reference figures only, not live market data.
const REFERENCE_FUNDS: &[(&str, &str, f64, &str)] = &[
    (
        "SHV",
        "iShares Short Treasury Bond ETF",
        2.1,
        "Holds US Treasury bills maturing in under a year; a cash-like, low-volatility position.",
    ),
    (
        "BND",
        "Vanguard Total Bond Market ETF",
        1.0,
        "Broad exposure to investment-grade US bonds across government, corporate and mortgage-backed debt.",
    ),
    (
        "AGG",
        "iShares Core US Aggregate Bond ETF",
        1.1,
        "Tracks the Bloomberg US Aggregate index of investment-grade taxable bonds.",
    ),
    (
        "TIP",
        "iShares TIPS Bond ETF",
        2.4,
        "US Treasury Inflation-Protected Securities whose principal adjusts with CPI.",
    ),
    (
        "VWO",
        "Vanguard FTSE Emerging Markets ETF",
        4.2,
        "Large- and mid-cap stocks from emerging economies such as China, India and Brazil.",
    ),
    (
        "VNQ",
        "Vanguard Real Estate ETF",
        4.8,
        "US real estate investment trusts spanning office, residential, retail and industrial property.",
    ),
    (
        "EFA",
        "iShares MSCI EAFE ETF",
        7.6,
        "Developed-market equities outside North America, weighted toward Europe and Japan.",
    ),
    (
        "VEA",
        "Vanguard FTSE Developed Markets ETF",
        7.9,
        "Developed international stocks of all sizes across Europe and the Pacific region.",
    ),
    (
        "IWM",
        "iShares Russell 2000 ETF",
        8.9,
        "Small-cap US companies represented by the Russell 2000 index.",
    ),
    (
        "GLD",
        "SPDR Gold Shares",
        9.4,
        "Physically backed gold bullion trust used as an inflation and crisis hedge.",
    ),
    (
        "VYM",
        "Vanguard High Dividend Yield ETF",
        10.3,
        "US companies forecast to pay above-average dividends.",
    ),
    (
        "VIG",
        "Vanguard Dividend Appreciation ETF",
        11.2,
        "US companies with a record of growing their dividends year over year.",
    ),
    (
        "SCHD",
        "Schwab US Dividend Equity ETF",
        11.6,
        "Quality US dividend payers screened for cash-flow strength and dividend growth.",
    ),
    (
        "VTI",
        "Vanguard Total Stock Market ETF",
        13.4,
        "The entire investable US equity market, from mega-cap to micro-cap.",
    ),
    (
        "SPY",
        "SPDR S&P 500 ETF Trust",
        14.5,
        "Tracks the S&P 500 index, providing broad exposure to large-cap US equities.",
    ),
    (
        "VOO",
        "Vanguard S&P 500 ETF",
        14.6,
        "Low-cost S&P 500 index fund covering 500 leading US companies.",
    ),
    (
        "QQQ",
        "Invesco QQQ Trust",
        18.3,
        "The 100 largest non-financial companies listed on the Nasdaq, heavy in technology.",
    ),
    (
        "XLK",
        "Technology Select Sector SPDR Fund",
        20.1,
        "Technology companies from the S&P 500, including software, hardware and semiconductors.",
    ),
];

// Catalog adapter backed by the built-in reference table.
#[derive(Clone, Copy, Default)]
pub struct StaticEtfCatalog;

#[async_trait]
impl EtfCatalog for StaticEtfCatalog {
    async fn list(&self) -> Result<Vec<Etf>, String> {
        Ok(REFERENCE_FUNDS
            .iter()
            .map(|(symbol, name, avg_return, description)| Etf {
                symbol: symbol.to_string(),
                name: name.to_string(),
                avg_return: *avg_return,
                description: description.to_string(),
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[tokio::test]
    async fn when_listing_reference_funds_then_symbols_are_unique() {
        let funds = StaticEtfCatalog.list().await.expect("expected static list");

        let symbols: HashSet<&str> = funds.iter().map(|etf| etf.symbol.as_str()).collect();
        assert_eq!(symbols.len(), funds.len());
    }

    #[tokio::test]
    async fn when_listing_reference_funds_then_every_entry_is_described() {
        let funds = StaticEtfCatalog.list().await.expect("expected static list");

        assert!(funds.len() >= 4);
        assert!(funds.iter().all(|etf| !etf.name.is_empty() && !etf.description.is_empty()));
        assert!(funds.iter().all(|etf| etf.avg_return.is_finite()));
    }
}
