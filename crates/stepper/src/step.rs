#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// One point of the Euler trace.
///
/// Step 0 is the initial condition; steps `1..=n` follow each increment.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
pub struct Step {
    /// Position in the trace, starting at 0.
    pub index: usize,

    /// Independent variable at this point.
    pub x: f64,

    /// Approximated dependent variable at this point.
    #[cfg_attr(feature = "serde-derive", serde(with = "crate::non_finite"))]
    pub y: f64,

    /// Slope `k·y` evaluated at this point.
    #[cfg_attr(feature = "serde-derive", serde(with = "crate::non_finite"))]
    pub dy_dx: f64,
}

impl Step {
    /// Creates the initial record of a trace.
    #[must_use]
    pub(crate) fn initial(k: f64, x0: f64, y0: f64) -> Self {
        Self {
            index: 0,
            x: x0,
            y: y0,
            dy_dx: k * y0,
        }
    }

    /// Advances by `dx` using the slope at this point, landing on `x_next`.
    ///
    /// `x_next` is passed in rather than computed as `x + dx` so the final
    /// step can land on the target exactly.
    #[must_use]
    pub(crate) fn advance(&self, k: f64, dx: f64, x_next: f64) -> Self {
        let y = self.y + dx * self.dy_dx;
        Self {
            index: self.index + 1,
            x: x_next,
            y,
            dy_dx: k * y,
        }
    }
}
