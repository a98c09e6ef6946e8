#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

use crate::Error;

/// Distance from an integer, in units of that integer, within which a
/// span/step ratio is treated as rounding noise.
const STEP_COUNT_SNAP: f64 = 4.0 * f64::EPSILON;

/// Inputs to a single run of the stepper.
///
/// The equation is `dy/dx = k·y` with initial condition `y(x0) = y0`,
/// integrated toward `x_target` in increments of `h`. A negative `h` walks
/// backward when `x_target < x0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Parameters {
    /// Proportionality constant.
    pub k: f64,
    /// Initial value of the independent variable.
    pub x0: f64,
    /// Initial value of the dependent variable.
    pub y0: f64,
    /// Value of `x` at which the run ends.
    pub x_target: f64,
    /// Step size.
    pub h: f64,
}

impl Parameters {
    #[must_use]
    pub fn new(k: f64, x0: f64, y0: f64, x_target: f64, h: f64) -> Self {
        Self {
            k,
            x0,
            y0,
            x_target,
            h,
        }
    }

    /// Returns the signed distance from `x0` to `x_target`.
    #[must_use]
    pub fn span(&self) -> f64 {
        self.x_target - self.x0
    }

    /// Returns true if `x_target == x0`, in which case no steps are taken.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.x_target == self.x0
    }

    /// Checks that the parameters describe a run that can terminate.
    ///
    /// # Errors
    ///
    /// - [`Error::NonFinite`] if any parameter is NaN or infinite.
    /// - [`Error::InvalidStepSize`] if `h == 0`.
    /// - [`Error::DirectionMismatch`] if `h` points away from `x_target`.
    pub fn validate(&self) -> Result<(), Error> {
        for (name, value) in [
            ("k", self.k),
            ("x0", self.x0),
            ("y0", self.y0),
            ("x_target", self.x_target),
            ("h", self.h),
        ] {
            if !value.is_finite() {
                return Err(Error::NonFinite { name });
            }
        }

        if self.h == 0.0 {
            return Err(Error::InvalidStepSize);
        }

        if !self.is_degenerate() && self.span().is_sign_positive() != self.h.is_sign_positive() {
            return Err(Error::DirectionMismatch);
        }

        Ok(())
    }

    /// Returns the number of Euler steps needed to reach `x_target`.
    ///
    /// This is `ceil(|span| / |h|)`, except that a ratio within a few ulps of
    /// an integer counts as that integer so decimal spans such as
    /// `0.07 / 0.01` do not gain a vanishing extra step.
    ///
    /// A span too wide to represent is measured as `x_target/h − x0/h`.
    ///
    /// Assumes the parameters are valid; see [`Parameters::validate`].
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn step_count(&self) -> usize {
        let span = self.span();
        let ratio = if span.is_finite() {
            span.abs() / self.h.abs()
        } else {
            (self.x_target / self.h - self.x0 / self.h).abs()
        };
        let nearest = ratio.round();

        let count = if (ratio - nearest).abs() <= STEP_COUNT_SNAP * nearest.max(1.0) {
            nearest
        } else {
            ratio.ceil()
        };

        // Saturating cast; the step budget rejects huge counts.
        count as usize
    }
}
