use crate::domain::frequency::CompoundFrequency;

// Validated scenario handed to the engine. Callers guarantee
// `horizon_years >= 1` and non-negative principal and rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionInput {
    pub initial_principal: f64,
    // Negative values are withdrawals.
    pub periodic_contribution: f64,
    pub horizon_years: u32,
    pub annual_rate_percent: f64,
    pub frequency: CompoundFrequency,
}

// Balance at the end of a projected year. `interest_earned` is cumulative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearSnapshot {
    pub year: u32,
    pub current_principal: f64,
    pub interest_earned: f64,
    pub total_amount: f64,
}

// Running totals threaded through the per-year reduction.
#[derive(Debug, Clone, Copy)]
struct Balance {
    principal: f64,
    total: f64,
}

impl Balance {
    fn snapshot(self, year: u32) -> YearSnapshot {
        YearSnapshot {
            year,
            current_principal: self.principal,
            interest_earned: self.total - self.principal,
            total_amount: self.total,
        }
    }
}

// Per-period parameters derived once from the input.
#[derive(Debug, Clone, Copy)]
struct Schedule {
    periods: u32,
    period_rate: f64,
    contribution_interval: u32,
    contribution: f64,
}

impl Schedule {
    fn from_input(input: &ProjectionInput) -> Self {
        let periods = input.frequency.periods_per_year();
        Self {
            periods,
            period_rate: input.annual_rate_percent / 100.0 / f64::from(periods),
            contribution_interval: input.frequency.contribution_interval(),
            contribution: input.periodic_contribution,
        }
    }

    fn contributes_in(&self, period: u32) -> bool {
        period % self.contribution_interval == 0
    }

    // Interest accrues on the running total first, then the contribution
    // (if due) lands at the end of the period.
    fn accrue_year(&self, start: Balance) -> Balance {
        (1..=self.periods).fold(start, |balance, period| {
            let total = balance.total + balance.total * self.period_rate;
            if self.contributes_in(period) {
                Balance {
                    principal: balance.principal + self.contribution,
                    total: total + self.contribution,
                }
            } else {
                Balance { total, ..balance }
            }
        })
    }
}

// Projects the scenario year by year. The result always holds
// `horizon_years + 1` snapshots; year 0 is the uncompounded starting state.
pub fn project(input: &ProjectionInput) -> Vec<YearSnapshot> {
    let schedule = Schedule::from_input(input);
    let start = Balance {
        principal: input.initial_principal,
        total: input.initial_principal,
    };

    let mut snapshots = Vec::with_capacity(input.horizon_years as usize + 1);
    snapshots.push(start.snapshot(0));

    let mut balance = start;
    for year in 1..=input.horizon_years {
        balance = schedule.accrue_year(balance);
        snapshots.push(balance.snapshot(year));
    }

    snapshots
}
