// Domain layer: projection math, compounding frequencies and ETF matching rules.

pub mod errors;
pub mod etf;
pub mod frequency;
pub mod ports;
pub mod projection;

pub use etf::Etf;
pub use frequency::CompoundFrequency;
pub use projection::{ProjectionInput, YearSnapshot, project};
