#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::{Accuracy, Step, Thresholds, analytical};

/// Indicates how the stepper terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub enum Status {
    /// Reached `x_target`.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a run: the Euler trace and its error against the exact
/// solution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Solution {
    /// How the stepper terminated.
    pub status: Status,

    /// Every recorded point, starting with the initial condition.
    pub steps: Vec<Step>,

    /// Where the trace ends; `x_target` for a complete run.
    pub final_x: f64,

    /// Euler approximation at `final_x`.
    #[cfg_attr(feature = "serde-derive", serde(with = "crate::non_finite"))]
    pub final_y_approx: f64,

    /// Exact solution at `final_x`.
    #[cfg_attr(feature = "serde-derive", serde(with = "crate::non_finite"))]
    pub final_y_exact: f64,

    /// `|final_y_exact − final_y_approx|`.
    #[cfg_attr(feature = "serde-derive", serde(with = "crate::non_finite"))]
    pub absolute_error: f64,

    /// Absolute error as a percentage of `|final_y_exact|`, or 0 when the
    /// exact value is 0.
    #[cfg_attr(feature = "serde-derive", serde(with = "crate::non_finite"))]
    pub relative_error_percent: f64,
}

impl Solution {
    /// Builds a solution from a non-empty trace.
    ///
    /// The exact value is evaluated from the closed form at the last recorded
    /// `x`, never from the trace itself.
    #[allow(clippy::float_cmp)]
    pub(super) fn from_trace(steps: Vec<Step>, status: Status, k: f64, x0: f64, y0: f64) -> Self {
        let (final_x, final_y_approx) = steps
            .last()
            .map_or((x0, y0), |last| (last.x, last.y));

        let final_y_exact = analytical::solution(k, x0, y0, final_x);
        let absolute_error = (final_y_exact - final_y_approx).abs();
        let relative_error_percent = if final_y_exact == 0.0 {
            0.0
        } else {
            100.0 * absolute_error / final_y_exact.abs()
        };

        Self {
            status,
            steps,
            final_x,
            final_y_approx,
            final_y_exact,
            absolute_error,
            relative_error_percent,
        }
    }

    /// Returns the number of Euler increments taken (the trace length minus
    /// the initial point).
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Classifies the relative error.
    #[must_use]
    pub fn accuracy(&self, thresholds: &Thresholds) -> Accuracy {
        Accuracy::classify(self.relative_error_percent, thresholds)
    }

    /// Returns true if the approximation and exact value are both finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.final_y_approx.is_finite() && self.final_y_exact.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn point(index: usize, x: f64, y: f64) -> Step {
        Step {
            index,
            x,
            y,
            dy_dx: y,
        }
    }

    #[test]
    fn errors_measured_at_last_point() {
        let steps = vec![point(0, 0.0, 1.0), point(1, 1.0, 2.0)];
        let solution = Solution::from_trace(steps, Status::Complete, 1.0, 0.0, 1.0);

        let e = 1.0_f64.exp();
        assert_relative_eq!(solution.final_x, 1.0);
        assert_relative_eq!(solution.final_y_exact, e);
        assert_relative_eq!(solution.absolute_error, e - 2.0);
        assert_relative_eq!(solution.relative_error_percent, 100.0 * (e - 2.0) / e);
        assert_eq!(solution.step_count(), 1);
    }

    #[test]
    fn relative_error_zero_when_exact_is_zero() {
        let steps = vec![point(0, 0.0, 0.0), point(1, 1.0, 0.0)];
        let solution = Solution::from_trace(steps, Status::Complete, 1.0, 0.0, 0.0);

        assert_eq!(solution.relative_error_percent, 0.0);
        assert_eq!(solution.absolute_error, 0.0);
    }

    #[test]
    fn accuracy_uses_relative_error() {
        let steps = vec![point(0, 0.0, 1.0), point(1, 1.0, 2.0)];
        let solution = Solution::from_trace(steps, Status::Complete, 1.0, 0.0, 1.0);

        // About 26% relative error.
        assert_eq!(solution.accuracy(&Thresholds::default()), Accuracy::Poor);
    }
}
