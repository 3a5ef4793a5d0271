use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static CHECKER_OUTPUT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"tourcost = (\d+\.?\d*).*constraint violations = (\d+)",
    )
    .expect("valid checker pattern")
});

/// What the external solution checker reported for a solution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckerVerdict {
    /// Tour cost
    pub cost: f64,
    /// Number of violated constraints
    pub violations: u32,
}

/// Read the `tourcost = ... constraint violations = ...` line of the checker.
pub fn parse_checker_output(output: &str) -> Option<CheckerVerdict> {
    let captures = CHECKER_OUTPUT.captures(output)?;
    Some(CheckerVerdict {
        cost: captures[1].parse().ok()?,
        violations: captures[2].parse().ok()?,
    })
}

/// Equality of costs that may be reported at different scales, e.g. a
/// solver working on costs multiplied by 10 against an unscaled checker.
///
/// Only the declared factors are tried: `100.0` and `1.0` are different
/// costs unless 100 is a declared factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostComparison {
    /// Factors tried in both directions, 1 included for equal scales
    pub scale_factors: Vec<f64>,
    /// Relative tolerance
    pub tolerance: f64,
}

impl Default for CostComparison {
    fn default() -> Self {
        Self {
            scale_factors: vec![1.0, 10.0],
            tolerance: 1e-6,
        }
    }
}

impl CostComparison {
    /// True if `reported` equals `checked` once one of them is multiplied by
    /// a declared scale factor.
    ///
    /// ```
    /// use solver_log_stats::validation::CostComparison;
    ///
    /// let comparison = CostComparison::default();
    /// assert!(comparison.matches(123.4, 1234.0));
    /// assert!(!comparison.matches(100.0, 1.0));
    /// ```
    pub fn matches(&self, reported: f64, checked: f64) -> bool {
        self.scale_factors.iter().any(|&scale| {
            self.close(reported * scale, checked)
                || self.close(reported, checked * scale)
        })
    }

    fn close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.tolerance * a.abs().max(b.abs()).max(1.0)
    }
}

/// Outcome of checking one reported solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Verification {
    /// No constraint is violated
    pub valid: bool,
    /// Reported and checked costs agree
    pub same_cost: bool,
}

/// Compare a solver's reported cost with the checker's verdict.
pub fn verify(
    reported: f64,
    verdict: &CheckerVerdict,
    comparison: &CostComparison,
) -> Verification {
    Verification {
        valid: verdict.violations == 0,
        same_cost: comparison.matches(reported, verdict.cost),
    }
}

#[cfg(test)]
mod tests;
