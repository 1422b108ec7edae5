use crate::error::EngineError;
use serde::Deserialize;

/// The horizons (in years) a projection is evaluated at.
/// Always non-empty, strictly ascending, and free of zero.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<u32>")]
pub struct Durations(Vec<u32>);

impl Durations {
    pub fn new(mut years: Vec<u32>) -> Result<Self, EngineError> {
        if years.is_empty() {
            return Err(EngineError::ConfigError("Duration list cannot be empty".to_string()));
        }
        if years.contains(&0) {
            return Err(EngineError::ConfigError("Durations must be at least 1 year".to_string()));
        }
        years.sort_unstable();
        years.dedup();
        Ok(Durations(years))
    }

    /// 10 to 50 years in steps of 5.
    pub fn standard() -> Self {
        Durations((10..=50).step_by(5).collect())
    }

    /// 10 to 40 years in steps of 10.
    pub fn reduced() -> Self {
        Durations(vec![10, 20, 30, 40])
    }

    pub fn years(&self) -> &[u32] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Durations {
    fn default() -> Self {
        Durations::standard()
    }
}

impl TryFrom<Vec<u32>> for Durations {
    type Error = EngineError;

    fn try_from(years: Vec<u32>) -> Result<Self, Self::Error> {
        Durations::new(years)
    }
}
