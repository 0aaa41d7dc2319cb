//! Statistical hypothesis tests
//!
//! Each module implements one family of tests used by the A/B decision
//! pipeline:
//! - `distributional`: Shapiro-Wilk normality test
//! - `homogeneity`: Levene's test for equality of variances
//! - `parametric`: two-sample t-test (Student, Welch)
//! - `nonparametric`: Mann-Whitney U test
//!
//! All tests are two-sided, filter NaN values before computing, and return
//! a [`TestResult`] or a [`crate::StatsError`] describing why the statistic
//! could not be computed.


use serde::Serialize;
use statrs::distribution::Normal;

use crate::errors::{StatsError, StatsResult};

/// Generic result structure for all statistical tests
#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    /// Test statistic (W, F, t, or U depending on test)
    pub statistic: f64,
    /// Two-sided p-value
    pub p_value: f64,
    /// Degrees of freedom (f64::NAN if not applicable, fractional for Welch)
    pub df: f64,
    /// Group 1 sample size
    pub n1: usize,
    /// Group 2 sample size (0 for one-sample tests)
    pub n2: usize,
    /// Test method name
    pub method: &'static str,
}

/// Filter NaN values from a slice
pub(crate) fn filter_nan(data: &[f64]) -> Vec<f64> {
    data.iter().copied().filter(|x| !x.is_nan()).collect()
}

/// Standard normal distribution for CDF/quantile evaluation
pub(crate) fn std_normal() -> StatsResult<Normal> {
    Normal::new(0.0, 1.0).map_err(|e| StatsError::InvalidInput(e.to_string()))
}
