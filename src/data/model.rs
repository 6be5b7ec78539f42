use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Observation – one (year, month) cell of the heat map
// ---------------------------------------------------------------------------

/// A single monthly reading: the offset from the base temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub year: i32,
    /// Calendar month, 1 = January.
    pub month: u32,
    /// Signed offset from [`Dataset::base_temperature`], in °C.
    pub variance: f64,
}

impl Observation {
    /// Absolute temperature of this observation.
    pub fn temperature(&self, base_temperature: f64) -> f64 {
        self.variance + base_temperature
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete fetched document
// ---------------------------------------------------------------------------

/// The full parsed dataset, in the order the source delivered it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    /// Baseline in °C that every variance is relative to.
    pub base_temperature: f64,
    /// Observations in source order.
    pub monthly_variance: Vec<Observation>,
}

impl Dataset {
    /// Number of observations.
    pub fn len(&self) -> usize {
        self.monthly_variance.len()
    }

    /// Whether the dataset has no observations.
    pub fn is_empty(&self) -> bool {
        self.monthly_variance.is_empty()
    }

    /// `(min, max)` year, or `None` for an empty dataset.
    pub fn year_extent(&self) -> Option<(i32, i32)> {
        extent(self.monthly_variance.iter().map(|o| o.year))
    }

    /// `(min, max)` month, or `None` for an empty dataset.
    pub fn month_extent(&self) -> Option<(u32, u32)> {
        extent(self.monthly_variance.iter().map(|o| o.month))
    }

    /// Distinct years, first occurrence wins.
    pub fn distinct_years(&self) -> Vec<i32> {
        let mut seen = std::collections::HashSet::new();
        self.monthly_variance
            .iter()
            .map(|o| o.year)
            .filter(|y| seen.insert(*y))
            .collect()
    }
}

fn extent<T: Ord + Copy>(values: impl Iterator<Item = T>) -> Option<(T, T)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
