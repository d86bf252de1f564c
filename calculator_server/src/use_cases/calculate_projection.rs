use crate::domain::errors::CalculationError;
use crate::domain::{CompoundFrequency, ProjectionInput, YearSnapshot, project};
use crate::interface_adapters::protocol::CalculationRequest;

// Result of a projection along with how the frequency label resolved.
#[derive(Debug)]
pub struct ProjectionOutcome {
    pub input: ProjectionInput,
    // False when the requested label was unrecognized and monthly was used.
    pub frequency_recognized: bool,
    pub snapshots: Vec<YearSnapshot>,
}

// Validates a projection request and runs the engine.
pub struct CalculateProjectionUseCase {
    pub max_horizon_years: u32,
}

impl CalculateProjectionUseCase {
    pub fn execute(&self, request: CalculationRequest) -> Result<ProjectionOutcome, CalculationError> {
        let (Some(initial), Some(years), Some(rate), Some(label)) = (
            request.initial_investment,
            request.length_years,
            request.interest_rate,
            request.compound_frequency.filter(|label| !label.trim().is_empty()),
        ) else {
            return Err(CalculationError::MissingFields);
        };
        let contribution = request.monthly_contribution.unwrap_or(0.0);

        let initial = non_negative(finite(initial, "initialInvestment")?, "initialInvestment")?;
        let contribution = finite(contribution, "monthlyContribution")?;
        let rate = non_negative(finite(rate, "interestRate")?, "interestRate")?;
        let horizon_years = self.horizon(years)?;

        let parsed = CompoundFrequency::parse(&label);
        let input = ProjectionInput {
            initial_principal: initial,
            periodic_contribution: contribution,
            horizon_years,
            annual_rate_percent: rate,
            frequency: parsed.unwrap_or_default(),
        };

        Ok(ProjectionOutcome {
            input,
            frequency_recognized: parsed.is_some(),
            snapshots: project(&input),
        })
    }

    fn horizon(&self, years: i64) -> Result<u32, CalculationError> {
        if years < 1 {
            return Err(CalculationError::HorizonTooShort);
        }
        u32::try_from(years)
            .ok()
            .filter(|years| *years <= self.max_horizon_years)
            .ok_or(CalculationError::HorizonTooLong {
                max: self.max_horizon_years,
            })
    }
}

fn finite(value: f64, field: &'static str) -> Result<f64, CalculationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalculationError::NotFinite { field })
    }
}

fn non_negative(value: f64, field: &'static str) -> Result<f64, CalculationError> {
    if value < 0.0 {
        Err(CalculationError::Negative { field })
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn use_case() -> CalculateProjectionUseCase {
        CalculateProjectionUseCase {
            max_horizon_years: 100,
        }
    }

    fn request() -> CalculationRequest {
        CalculationRequest {
            initial_investment: Some(1000.0),
            monthly_contribution: Some(100.0),
            length_years: Some(10),
            interest_rate: Some(8.0),
            compound_frequency: Some("Monthly".to_string()),
        }
    }

    #[test]
    fn when_request_is_complete_then_returns_one_snapshot_per_year_plus_start() {
        let outcome = use_case()
            .execute(request())
            .expect("expected projection to succeed");

        assert_eq!(outcome.snapshots.len(), 11);
        assert!(outcome.frequency_recognized);
        assert_eq!(outcome.input.frequency, CompoundFrequency::Monthly);
    }

    #[test]
    fn when_contribution_is_missing_then_defaults_to_zero() {
        let outcome = use_case()
            .execute(CalculationRequest {
                monthly_contribution: None,
                ..request()
            })
            .expect("expected projection to succeed");

        assert_eq!(outcome.input.periodic_contribution, 0.0);
        assert_eq!(outcome.snapshots[10].current_principal, 1000.0);
    }

    #[test]
    fn when_required_field_is_missing_then_returns_missing_fields() {
        let cases = [
            CalculationRequest {
                initial_investment: None,
                ..request()
            },
            CalculationRequest {
                length_years: None,
                ..request()
            },
            CalculationRequest {
                interest_rate: None,
                ..request()
            },
            CalculationRequest {
                compound_frequency: None,
                ..request()
            },
            CalculationRequest {
                compound_frequency: Some("   ".to_string()),
                ..request()
            },
        ];

        for case in cases {
            assert_eq!(use_case().execute(case).err(), Some(CalculationError::MissingFields));
        }
    }

    #[test]
    fn when_rate_is_zero_then_projection_still_runs() {
        let outcome = use_case()
            .execute(CalculationRequest {
                interest_rate: Some(0.0),
                ..request()
            })
            .expect("expected zero rate to be accepted");

        assert_eq!(outcome.snapshots[1].interest_earned, 0.0);
    }

    #[test]
    fn when_frequency_is_unknown_then_falls_back_to_monthly() {
        let outcome = use_case()
            .execute(CalculationRequest {
                compound_frequency: Some("Fortnightly".to_string()),
                ..request()
            })
            .expect("expected unknown frequency to be accepted");

        assert!(!outcome.frequency_recognized);
        assert_eq!(outcome.input.frequency, CompoundFrequency::Monthly);
    }

    #[test]
    fn when_horizon_is_zero_or_negative_then_returns_horizon_too_short() {
        for years in [0, -5] {
            let result = use_case().execute(CalculationRequest {
                length_years: Some(years),
                ..request()
            });

            assert_eq!(result.err(), Some(CalculationError::HorizonTooShort));
        }
    }

    #[test]
    fn when_horizon_exceeds_limit_then_returns_horizon_too_long() {
        let result = use_case().execute(CalculationRequest {
            length_years: Some(101),
            ..request()
        });

        assert_eq!(result.err(), Some(CalculationError::HorizonTooLong { max: 100 }));
    }

    #[test]
    fn when_initial_investment_is_negative_then_returns_negative() {
        let result = use_case().execute(CalculationRequest {
            initial_investment: Some(-1.0),
            ..request()
        });

        assert_eq!(
            result.err(),
            Some(CalculationError::Negative {
                field: "initialInvestment"
            })
        );
    }

    #[test]
    fn when_rate_is_not_finite_then_returns_not_finite() {
        let result = use_case().execute(CalculationRequest {
            interest_rate: Some(f64::INFINITY),
            ..request()
        });

        assert_eq!(
            result.err(),
            Some(CalculationError::NotFinite {
                field: "interestRate"
            })
        );
    }

    #[test]
    fn when_contribution_is_negative_then_it_is_accepted_as_withdrawal() {
        let outcome = use_case()
            .execute(CalculationRequest {
                monthly_contribution: Some(-50.0),
                interest_rate: Some(0.0),
                length_years: Some(1),
                ..request()
            })
            .expect("expected withdrawal to be accepted");

        assert_eq!(outcome.snapshots[1].current_principal, 400.0);
    }
}
