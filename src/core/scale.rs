use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Linear map from a data domain onto a pixel range.
///
/// Construction rejects zero-span and non-finite domains, so a `LinearScale`
/// value is always safe to map through. The range may be inverted (Y axes map
/// `[height, 0]`) or empty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::DegenerateDomain {
                min: domain_start,
                max: domain_end,
            });
        }
        let (range_start, range_end) = range;
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to pixels. Values outside the domain extrapolate.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let normalized = (value - self.domain_start) / (self.domain_end - self.domain_start);
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    pub fn domain_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        Ok(self.map(value))
    }

    /// Signed pixel distance covered by one domain unit.
    #[must_use]
    pub fn pixels_per_unit(self) -> f64 {
        (self.range_end - self.range_start) / (self.domain_end - self.domain_start)
    }
}
