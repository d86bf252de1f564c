use thiserror::Error;

// Boundary validation failures for a projection request.
#[derive(Debug, Error, PartialEq)]
pub enum CalculationError {
    #[error("Missing required fields")]
    MissingFields,
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },
    #[error("{field} must not be negative")]
    Negative { field: &'static str },
    #[error("lengthYears must be at least 1")]
    HorizonTooShort,
    #[error("lengthYears must not exceed {max}")]
    HorizonTooLong { max: u32 },
}

// Failures while looking up ETF suggestions.
#[derive(Debug, Error, PartialEq)]
pub enum EtfError {
    #[error("interest_rate must be between 0 and 100")]
    InvalidRate,
    #[error("ETF catalog unavailable: {0}")]
    CatalogUnavailable(String),
}
