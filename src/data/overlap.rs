//! Overlap statistics for two intervals on a shared axis.
//!
//! Each interval is read two ways:
//!
//! * as a uniform distribution over its extent, giving the **uniform overlap
//!   ratio** `|A ∩ B| / (|A| · |B|)`;
//! * as a 95 % Gaussian confidence interval (mean = midpoint, sd = half-width /
//!   1.96), giving the **squared t-statistic** of the mean difference and the
//!   **Gaussian overlap**, the density of `N(0, s1² + s2²)` at `m1 − m2`.
//!
//! Inputs are pixel positions. `pixels_per_unit` converts them into display
//! units; for the uniform ratio it only rescales the per-pixel density into a
//! per-unit one.

use serde::{Deserialize, Serialize};

/// Two-sided 95 % critical value of the standard normal distribution.
pub const Z_95: f64 = 1.96;

/// A closed interval with `left <= right` (unless an endpoint is NaN).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub left: f64,
    pub right: f64,
}

impl Interval {
    /// Build from two endpoints in either order.
    pub fn from_endpoints(a: f64, b: f64) -> Self {
        if a > b {
            Self { left: b, right: a }
        } else {
            Self { left: a, right: b }
        }
    }

    pub fn length(&self) -> f64 {
        self.right - self.left
    }

    pub fn midpoint(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Length of the intersection with `other`, `0` when disjoint.
    pub fn overlap_length(&self, other: &Interval) -> f64 {
        let len = self.right.min(other.right) - self.left.max(other.left);
        len.max(0.0)
    }

    /// Gaussian reading of this interval as a 95 % confidence interval.
    pub fn gaussian(&self, pixels_per_unit: f64) -> GaussianEstimate {
        GaussianEstimate {
            mean: self.midpoint() / pixels_per_unit,
            sd: self.length() / 2.0 / Z_95 / pixels_per_unit,
        }
    }
}

/// Mean and standard deviation in display units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GaussianEstimate {
    pub mean: f64,
    pub sd: f64,
}

impl GaussianEstimate {
    pub fn variance(&self) -> f64 {
        self.sd * self.sd
    }

    /// Normal probability density at `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        normal_pdf(x - self.mean, self.variance())
    }
}

/// Density of `N(0, variance)` at `x`.
pub fn normal_pdf(x: f64, variance: f64) -> f64 {
    (-(x * x) / (2.0 * variance)).exp() / (2.0 * std::f64::consts::PI * variance).sqrt()
}

/// The three statistics plus the Gaussian estimates they were derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OverlapStats {
    pub uniform_overlap: f64,
    pub t_stat_squared: f64,
    pub gaussian_overlap: f64,
    pub first: GaussianEstimate,
    pub second: GaussianEstimate,
}

impl OverlapStats {
    pub fn log10_gaussian_overlap(&self) -> f64 {
        self.gaussian_overlap.log10()
    }

    pub fn is_finite(&self) -> bool {
        self.uniform_overlap.is_finite()
            && self.t_stat_squared.is_finite()
            && self.gaussian_overlap.is_finite()
    }

    /// `(uniform_overlap, t_stat_squared, gaussian_overlap)`.
    pub fn triple(&self) -> (f64, f64, f64) {
        (
            self.uniform_overlap,
            self.t_stat_squared,
            self.gaussian_overlap,
        )
    }
}

/// Uniform overlap ratio scaled to display units.
///
/// Zero-length intervals have no uniform density; the ratio is `0` for them.
pub fn uniform_overlap_ratio(a: &Interval, b: &Interval, pixels_per_unit: f64) -> f64 {
    let (len_a, len_b) = (a.length(), b.length());
    if len_a == 0.0 || len_b == 0.0 {
        return 0.0;
    }
    a.overlap_length(b) / (len_a * len_b) * pixels_per_unit
}

/// Statistics for two intervals. Non-finite t² and Gaussian overlap are
/// returned as-is when both standard deviations are zero.
pub fn compute_interval_overlap(a: Interval, b: Interval, pixels_per_unit: f64) -> OverlapStats {
    let first = a.gaussian(pixels_per_unit);
    let second = b.gaussian(pixels_per_unit);
    let total_var = first.variance() + second.variance();
    let diff = first.mean - second.mean;

    OverlapStats {
        uniform_overlap: uniform_overlap_ratio(&a, &b, pixels_per_unit),
        t_stat_squared: diff * diff / total_var,
        gaussian_overlap: normal_pdf(diff, total_var),
        first,
        second,
    }
}

/// Statistics for the intervals `(x1, x2)` and `(x3, x4)`; endpoint order within
/// a pair does not matter.
pub fn compute_overlap(x1: f64, x2: f64, x3: f64, x4: f64, pixels_per_unit: f64) -> OverlapStats {
    compute_interval_overlap(
        Interval::from_endpoints(x1, x2),
        Interval::from_endpoints(x3, x4),
        pixels_per_unit,
    )
}

/// Four-decimal rendering used by every label; non-finite values print as-is.
pub fn format_stat(value: f64) -> String {
    format!("{value:.4}")
}
