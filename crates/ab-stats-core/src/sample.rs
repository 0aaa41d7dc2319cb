//! Cleaned observation samples and descriptive statistics
//!
//! A [`Sample`] is built once from raw observations (typically one group of
//! a tabular dataset after filtering on the grouping column), drops every
//! non-finite value, and is read-only from then on.

use serde::Serialize;
use statrs::distribution::{ContinuousCDF, StudentsT};

use crate::errors::{StatsError, StatsResult};

/// An immutable collection of finite observations for one group.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    values: Vec<f64>,
}

/// Descriptive summary of a sample
#[derive(Debug, Clone, Serialize)]
pub struct DescriptiveStats {
    pub n: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub median: f64,
    pub max: f64,
}

impl Sample {
    /// Build a sample from raw observations, dropping NaN and infinite
    /// values (the equivalent of `dropna()` on the source column).
    pub fn new(observations: impl IntoIterator<Item = f64>) -> Self {
        let values: Vec<f64> = observations.into_iter().filter(|v| v.is_finite()).collect();
        Self { values }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Arithmetic mean (NaN for an empty sample)
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return f64::NAN;
        }
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Unbiased sample variance (NaN for fewer than 2 observations)
    pub fn variance(&self) -> f64 {
        let n = self.values.len();
        if n < 2 {
            return f64::NAN;
        }
        let mean = self.mean();
        self.values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64
    }

    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// Median (NaN for an empty sample)
    pub fn median(&self) -> f64 {
        if self.values.is_empty() {
            return f64::NAN;
        }
        let mut sorted = self.values.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let n = sorted.len();
        if n % 2 == 1 {
            sorted[n / 2]
        } else {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
        }
    }

    /// Descriptive summary: count, mean, spread, and order statistics
    pub fn summary(&self) -> DescriptiveStats {
        let min = self
            .values
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        let max = self
            .values
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max);
        DescriptiveStats {
            n: self.len(),
            mean: self.mean(),
            std_dev: self.std_dev(),
            min: if self.values.is_empty() { f64::NAN } else { min },
            median: self.median(),
            max: if self.values.is_empty() { f64::NAN } else { max },
        }
    }

    /// t-based confidence interval for the population mean.
    ///
    /// # Arguments
    /// * `level` - Confidence level, e.g. 0.95
    ///
    /// # Returns
    /// `(lower, upper)` bounds of the interval
    pub fn mean_confidence_interval(&self, level: f64) -> StatsResult<(f64, f64)> {
        if !(level > 0.0 && level < 1.0) {
            return Err(StatsError::InvalidInput(format!(
                "confidence level must be in (0, 1), got {level}"
            )));
        }
        let n = self.values.len();
        if n < 2 {
            return Err(StatsError::InsufficientData {
                test: "Mean confidence interval",
                required: 2,
                actual: n,
            });
        }

        let se = self.std_dev() / (n as f64).sqrt();
        if se < 1e-300 {
            return Err(StatsError::DegenerateInput {
                test: "Mean confidence interval",
                reason: "zero standard error".into(),
            });
        }

        let dist = StudentsT::new(0.0, 1.0, (n - 1) as f64)
            .map_err(|e| StatsError::InvalidInput(e.to_string()))?;
        let t_crit = dist.inverse_cdf(1.0 - (1.0 - level) / 2.0);
        let mean = self.mean();
        Ok((mean - t_crit * se, mean + t_crit * se))
    }
}
