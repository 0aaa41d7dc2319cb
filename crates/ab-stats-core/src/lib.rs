//! ab-stats-core: two-sample A/B hypothesis test pipeline
//!
//! Given two groups of numeric observations, this crate decides whether
//! their means/distributions differ, selecting the appropriate statistical
//! test automatically: Shapiro-Wilk normality checks route between a
//! parametric t-test (Student or Welch, chosen by a Levene homogeneity
//! check) and the nonparametric Mann-Whitney U test.
//!
//! ```
//! use ab_stats_core::{apply_ab_test, AbTestOptions, Sample};
//!
//! let control = Sample::new(vec![4.8, 5.0, 5.1, 4.9, 5.2, 5.0, 4.7, 5.3]);
//! let test = Sample::new(vec![5.0, 4.9, 5.2, 5.1, 4.8, 5.0, 5.1, 4.9]);
//! let report = apply_ab_test(&control, &test, &AbTestOptions::default()).unwrap();
//! assert!(report.verdict); // no significant difference
//! ```

pub mod errors;
pub mod pipeline;
pub mod sample;
pub mod tests;

pub use errors::{StatsError, StatsResult};
pub use pipeline::{
    apply_ab_test, check_homogeneity, check_normality, compare_nonparametric,
    compare_parametric, AbTestOptions, AbTestReport, StepVerdict, TestRoute,
};
pub use sample::{DescriptiveStats, Sample};
pub use tests::parametric::TTestKind;
pub use tests::TestResult;
