// Exchange-traded fund reference record. `avg_return` is a percentage.
#[derive(Debug, Clone, PartialEq)]
pub struct Etf {
    pub symbol: String,
    pub name: String,
    pub avg_return: f64,
    pub description: String,
}

// Percentage points an average return may sit away from the requested rate.
pub const RETURN_TOLERANCE: f64 = 3.0;
// A band thinner than this falls back to the closest entries overall.
pub const MIN_BAND_MATCHES: usize = 3;
pub const FALLBACK_MATCHES: usize = 4;

impl Etf {
    pub fn distance_from(&self, rate: f64) -> f64 {
        (self.avg_return - rate).abs()
    }
}

// Orders the catalog by closeness to `rate` and keeps the tolerance band,
// or the few closest funds when the band is too thin.
pub fn closest_matches(catalog: Vec<Etf>, rate: f64) -> Vec<Etf> {
    let mut ranked = catalog;
    ranked.sort_by(|a, b| {
        a.distance_from(rate)
            .total_cmp(&b.distance_from(rate))
            .then_with(|| a.symbol.cmp(&b.symbol))
    });

    let in_band = ranked
        .iter()
        .take_while(|etf| etf.distance_from(rate) <= RETURN_TOLERANCE)
        .count();

    let keep = if in_band >= MIN_BAND_MATCHES {
        in_band
    } else {
        FALLBACK_MATCHES
    };
    ranked.truncate(keep);
    ranked
}
