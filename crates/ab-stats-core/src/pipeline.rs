//! A/B decision pipeline
//!
//! Sequences the statistical steps and picks the correct comparison test
//! from the shape of the data:
//!
//! 1. Shapiro-Wilk normality check on each group.
//! 2. If both groups look normal: Levene homogeneity check, then a
//!    parametric t-test (Student when variances are homogeneous, Welch
//!    otherwise).
//! 3. Otherwise: Mann-Whitney U.
//!
//! Every step converts its p-value into a verdict with a single configured
//! significance level: `verdict = p_value >= alpha`, i.e. `true` means the
//! step's null hypothesis cannot be rejected.
//!
//! Degenerate inputs (zero variance, all ties) never abort the pipeline:
//! the affected step fails safe to a `false` verdict and the run continues.
//! That policy lives here, not in the individual tests, which report
//! degeneracy as [`StatsError::DegenerateInput`]. Insufficient data is the
//! exception: it is always surfaced to the caller.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::errors::{StatsError, StatsResult};
use crate::sample::Sample;
use crate::tests::distributional::shapiro_wilk;
use crate::tests::homogeneity::levene;
use crate::tests::nonparametric::mann_whitney_u;
use crate::tests::parametric::{t_test, TTestKind};
use crate::tests::TestResult;

/// Options for the A/B test pipeline
#[derive(Debug, Clone, Copy)]
pub struct AbTestOptions {
    /// Significance level shared by every decision step
    pub alpha: f64,
}

impl Default for AbTestOptions {
    fn default() -> Self {
        Self { alpha: 0.05 }
    }
}

impl AbTestOptions {
    pub fn validate(&self) -> StatsResult<()> {
        if !(self.alpha > 0.0 && self.alpha < 1.0) || !self.alpha.is_finite() {
            return Err(StatsError::InvalidAlpha(self.alpha));
        }
        Ok(())
    }
}

/// Which comparison test the pipeline routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TestRoute {
    /// Both groups passed the normality check
    Parametric,
    /// At least one normality check failed
    NonParametric,
}

/// Outcome of one decision step
#[derive(Debug, Clone, Serialize)]
pub struct StepVerdict {
    /// Diagnostics from the underlying test; `None` when the input was
    /// degenerate and the step failed safe
    pub result: Option<TestResult>,
    /// `true` = the step's null hypothesis cannot be rejected
    pub verdict: bool,
}

/// Full audit trail of one pipeline run
#[derive(Debug, Clone, Serialize)]
pub struct AbTestReport {
    pub normality_group1: StepVerdict,
    pub normality_group2: StepVerdict,
    /// Only present on the parametric route
    pub homogeneity: Option<StepVerdict>,
    pub comparison: StepVerdict,
    pub route: TestRoute,
    /// Significance level the verdicts were derived with
    pub alpha: f64,
    /// `true` = no significant difference detected between the groups
    pub verdict: bool,
}

// The one place where fail-safe policy is decided: a degenerate step is
// logged and counted as "rejected", anything else propagates.
fn fail_safe(
    step: &'static str,
    outcome: StatsResult<TestResult>,
    alpha: f64,
) -> StatsResult<StepVerdict> {
    match outcome {
        Ok(result) => {
            let verdict = result.p_value >= alpha;
            debug!(
                step,
                method = result.method,
                statistic = result.statistic,
                p_value = result.p_value,
                verdict,
                "hypothesis step completed"
            );
            Ok(StepVerdict {
                result: Some(result),
                verdict,
            })
        }
        Err(StatsError::DegenerateInput { test, reason }) => {
            warn!(step, test, %reason, "degenerate input, failing safe to rejected");
            Ok(StepVerdict {
                result: None,
                verdict: false,
            })
        }
        Err(e) => Err(e),
    }
}

/// Shapiro-Wilk normality check with the pipeline's verdict rule.
///
/// Returns `true` when the normality hypothesis cannot be rejected.
/// Degenerate samples fail safe to `false`; samples with fewer than 3
/// observations surface [`StatsError::InsufficientData`].
pub fn check_normality(sample: &Sample, options: &AbTestOptions) -> StatsResult<bool> {
    options.validate()?;
    Ok(fail_safe("normality", shapiro_wilk(sample.values()), options.alpha)?.verdict)
}

/// Levene homogeneity check with the pipeline's verdict rule.
///
/// Returns `true` when the equal-variance hypothesis cannot be rejected.
pub fn check_homogeneity(
    group1: &Sample,
    group2: &Sample,
    options: &AbTestOptions,
) -> StatsResult<bool> {
    options.validate()?;
    Ok(fail_safe(
        "homogeneity",
        levene(group1.values(), group2.values()),
        options.alpha,
    )?
    .verdict)
}

/// Difference-of-means comparison assuming normality.
///
/// Uses Student's t-test when `equal_variance`, Welch's otherwise.
/// Returns `true` when no significant difference is detected.
pub fn compare_parametric(
    group1: &Sample,
    group2: &Sample,
    equal_variance: bool,
    options: &AbTestOptions,
) -> StatsResult<bool> {
    options.validate()?;
    let kind = if equal_variance {
        TTestKind::Student
    } else {
        TTestKind::Welch
    };
    Ok(fail_safe(
        "comparison",
        t_test(group1.values(), group2.values(), kind),
        options.alpha,
    )?
    .verdict)
}

/// Rank-based comparison without a normality assumption.
///
/// Returns `true` when no significant difference is detected.
pub fn compare_nonparametric(
    group1: &Sample,
    group2: &Sample,
    options: &AbTestOptions,
) -> StatsResult<bool> {
    options.validate()?;
    Ok(fail_safe(
        "comparison",
        mann_whitney_u(group1.values(), group2.values()),
        options.alpha,
    )?
    .verdict)
}

/// Run the full A/B decision pipeline.
///
/// # Arguments
/// * `group1` - Cleaned observations for the first group (e.g. control)
/// * `group2` - Cleaned observations for the second group (e.g. test)
/// * `options` - Pipeline options (significance level)
///
/// # Returns
/// An [`AbTestReport`] with every step's diagnostics and the final verdict:
/// `true` when the no-difference hypothesis cannot be rejected.
///
/// # Errors
/// [`StatsError::InvalidAlpha`] for a bad significance level and
/// [`StatsError::InsufficientData`] when a group is too small for the
/// selected test. Degenerate data never errors; see the module docs.
pub fn apply_ab_test(
    group1: &Sample,
    group2: &Sample,
    options: &AbTestOptions,
) -> StatsResult<AbTestReport> {
    options.validate()?;
    let alpha = options.alpha;

    info!(n1 = group1.len(), n2 = group2.len(), alpha, "checking normality for group 1");
    let normality_group1 = fail_safe("normality group 1", shapiro_wilk(group1.values()), alpha)?;

    info!("checking normality for group 2");
    let normality_group2 = fail_safe("normality group 2", shapiro_wilk(group2.values()), alpha)?;

    let normal = normality_group1.verdict && normality_group2.verdict;

    let (route, homogeneity, comparison) = if normal {
        info!("checking variance homogeneity");
        let homogeneity = fail_safe(
            "homogeneity",
            levene(group1.values(), group2.values()),
            alpha,
        )?;

        let kind = if homogeneity.verdict {
            TTestKind::Student
        } else {
            TTestKind::Welch
        };
        info!(?kind, "running parametric comparison");
        let comparison = fail_safe(
            "parametric comparison",
            t_test(group1.values(), group2.values(), kind),
            alpha,
        )?;
        (TestRoute::Parametric, Some(homogeneity), comparison)
    } else {
        info!("normality rejected, running nonparametric comparison");
        let comparison = fail_safe(
            "nonparametric comparison",
            mann_whitney_u(group1.values(), group2.values()),
            alpha,
        )?;
        (TestRoute::NonParametric, None, comparison)
    };

    let verdict = comparison.verdict;
    info!(?route, verdict, "A/B test pipeline finished");

    Ok(AbTestReport {
        normality_group1,
        normality_group2,
        homogeneity,
        comparison,
        route,
        alpha,
        verdict,
    })
}
