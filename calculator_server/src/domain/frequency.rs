// Number of times per year interest is calculated and added to the balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompoundFrequency {
    Annually,
    Semiannually,
    Quarterly,
    #[default]
    Monthly,
    Daily,
}

impl CompoundFrequency {
    pub const ALL: [CompoundFrequency; 5] = [
        CompoundFrequency::Annually,
        CompoundFrequency::Semiannually,
        CompoundFrequency::Quarterly,
        CompoundFrequency::Monthly,
        CompoundFrequency::Daily,
    ];

    pub fn periods_per_year(self) -> u32 {
        match self {
            CompoundFrequency::Annually => 1,
            CompoundFrequency::Semiannually => 2,
            CompoundFrequency::Quarterly => 4,
            CompoundFrequency::Monthly => 12,
            CompoundFrequency::Daily => 365,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompoundFrequency::Annually => "Annually",
            CompoundFrequency::Semiannually => "Semiannually",
            CompoundFrequency::Quarterly => "Quarterly",
            CompoundFrequency::Monthly => "Monthly",
            CompoundFrequency::Daily => "Daily",
        }
    }

    // Strict lookup; labels are matched case-insensitively after trimming.
    pub fn parse(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|frequency| frequency.label().eq_ignore_ascii_case(label))
    }

    // Total lookup: anything unrecognized compounds monthly.
    pub fn from_label(label: &str) -> Self {
        Self::parse(label).unwrap_or_default()
    }

    // Periods between two contributions. Contributions follow a monthly
    // cadence, so this is the truncated quotient periods/12. Frequencies
    // coarser than monthly contribute once per period.
    pub fn contribution_interval(self) -> u32 {
        (self.periods_per_year() / 12).max(1)
    }
}
