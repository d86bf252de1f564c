use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::{Etf, YearSnapshot};

// Request payload for the JSON projection endpoint. Every field is optional
// on the wire so presence can be reported as a 400 instead of a rejection.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    pub initial_investment: Option<f64>,
    pub monthly_contribution: Option<f64>,
    pub length_years: Option<i64>,
    pub interest_rate: Option<f64>,
    pub compound_frequency: Option<String>,
}

// Query parameters for `GET /calculation`, kept as raw strings so each
// field can report its own parse failure.
#[derive(Debug, Default, Deserialize)]
pub struct CalculationQuery {
    pub initial_investment: Option<String>,
    pub monthly_contribution: Option<String>,
    pub saving_years: Option<String>,
    pub interest_rate: Option<String>,
    pub compound_frequency: Option<String>,
}

// A query parameter that was present but could not be parsed.
#[derive(Debug, PartialEq)]
pub struct InvalidQueryField(pub &'static str);

impl CalculationQuery {
    pub fn into_request(self) -> Result<CalculationRequest, InvalidQueryField> {
        Ok(CalculationRequest {
            initial_investment: parse_param(self.initial_investment, "initial_investment")?,
            monthly_contribution: parse_param(self.monthly_contribution, "monthly_contribution")?,
            length_years: parse_param(self.saving_years, "saving_years")?,
            interest_rate: parse_param(self.interest_rate, "interest_rate")?,
            compound_frequency: self.compound_frequency,
        })
    }
}

// Blank parameters count as absent.
fn parse_param<T: FromStr>(
    raw: Option<String>,
    field: &'static str,
) -> Result<Option<T>, InvalidQueryField> {
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(|_| InvalidQueryField(field)),
    }
}

// One projected year on the wire.
#[derive(Debug, Serialize)]
pub struct YearDataResponse {
    pub year: u32,
    pub current_principal: f64,
    pub interest_earned: f64,
    pub total_amount: f64,
}

impl From<YearSnapshot> for YearDataResponse {
    fn from(snapshot: YearSnapshot) -> Self {
        Self {
            year: snapshot.year,
            current_principal: snapshot.current_principal,
            interest_earned: snapshot.interest_earned,
            total_amount: snapshot.total_amount,
        }
    }
}

// Query parameters for `GET /etf_information`.
#[derive(Debug, Default, Deserialize)]
pub struct EtfQuery {
    pub interest_rate: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct EtfInformation {
    pub etf_symbol: String,
    pub etf_name: String,
    pub etf_avg_return: f64,
    pub etf_description: String,
}

impl From<Etf> for EtfInformation {
    fn from(etf: Etf) -> Self {
        Self {
            etf_symbol: etf.symbol,
            etf_name: etf.name,
            etf_avg_return: etf.avg_return,
            etf_description: etf.description,
        }
    }
}

// Envelope for ETF suggestions; failures carry `error` and no data.
#[derive(Debug, Serialize)]
pub struct EtfInformationResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<EtfInformation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl EtfInformationResponse {
    pub fn found(etfs: Vec<Etf>) -> Self {
        let data: Vec<EtfInformation> = etfs.into_iter().map(EtfInformation::from).collect();
        Self {
            success: true,
            count: Some(data.len()),
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            count: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// Simple error envelope for JSON responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_query_has_all_fields_then_converts_to_request() {
        let query = CalculationQuery {
            initial_investment: Some("1000".to_string()),
            monthly_contribution: Some("-25.5".to_string()),
            saving_years: Some("10".to_string()),
            interest_rate: Some("8".to_string()),
            compound_frequency: Some("monthly".to_string()),
        };

        let request = query.into_request().expect("expected query to convert");

        assert_eq!(request.initial_investment, Some(1000.0));
        assert_eq!(request.monthly_contribution, Some(-25.5));
        assert_eq!(request.length_years, Some(10));
        assert_eq!(request.interest_rate, Some(8.0));
        assert_eq!(request.compound_frequency.as_deref(), Some("monthly"));
    }

    #[test]
    fn when_query_field_is_blank_then_it_is_treated_as_absent() {
        let query = CalculationQuery {
            monthly_contribution: Some("  ".to_string()),
            ..Default::default()
        };

        let request = query.into_request().expect("expected query to convert");

        assert_eq!(request.monthly_contribution, None);
    }

    #[test]
    fn when_saving_years_is_fractional_then_reports_that_field() {
        let query = CalculationQuery {
            initial_investment: Some("1000".to_string()),
            saving_years: Some("2.5".to_string()),
            ..Default::default()
        };

        let result = query.into_request();

        assert_eq!(result.err(), Some(InvalidQueryField("saving_years")));
    }
}
