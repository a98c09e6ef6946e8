//! Accuracy bands for a run's relative error.
//!
//! Bands are a presentation aid and never affect the computation. A relative
//! error belongs to the first band whose upper threshold it is strictly below,
//! checked from best to worst, so a value sitting exactly on a threshold falls
//! into the next (worse) band. NaN is always [`Accuracy::Poor`].

use std::fmt;

use thiserror::Error;

#[cfg(feature = "serde-derive")]
use serde::{Deserialize, Serialize};

/// Qualitative label for a relative error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(rename_all = "lowercase"))]
pub enum Accuracy {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl Accuracy {
    /// Classifies a relative error given in percent.
    #[must_use]
    pub fn classify(relative_error_percent: f64, thresholds: &Thresholds) -> Self {
        let e = relative_error_percent;
        if e < thresholds.excellent {
            Self::Excellent
        } else if e < thresholds.good {
            Self::Good
        } else if e < thresholds.fair {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    /// Returns the lowercase name of the band.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
        }
    }

    /// Returns a short piece of advice to show next to the result.
    #[must_use]
    pub fn recommendation(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent accuracy; the step size is well chosen.",
            Self::Good => "Good accuracy.",
            Self::Fair => "Noticeable error; consider a smaller step size.",
            Self::Poor => "High relative error; use a smaller step size for better accuracy.",
        }
    }
}

impl fmt::Display for Accuracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Upper bounds, in percent, of the better accuracy bands.
///
/// Deserialized values go through [`Thresholds::new`] and are rejected if
/// they are out of range or out of order.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-derive", serde(try_from = "RawThresholds"))]
pub struct Thresholds {
    excellent: f64,
    good: f64,
    fair: f64,
}

#[cfg(feature = "serde-derive")]
#[derive(Deserialize)]
struct RawThresholds {
    excellent: f64,
    good: f64,
    fair: f64,
}

#[cfg(feature = "serde-derive")]
impl TryFrom<RawThresholds> for Thresholds {
    type Error = ThresholdsError;

    fn try_from(raw: RawThresholds) -> Result<Self, Self::Error> {
        Self::new(raw.excellent, raw.good, raw.fair)
    }
}

/// Errors that can occur when validating accuracy thresholds.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdsError {
    #[error("thresholds must be finite and non-negative")]
    OutOfRange,

    #[error("thresholds must be strictly ascending (excellent < good < fair)")]
    NotAscending,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            excellent: 1.0,
            good: 5.0,
            fair: 15.0,
        }
    }
}

impl Thresholds {
    /// Creates validated thresholds.
    ///
    /// # Errors
    ///
    /// Returns an error if any threshold is negative or non-finite, or if
    /// they are not strictly ascending.
    pub fn new(excellent: f64, good: f64, fair: f64) -> Result<Self, ThresholdsError> {
        if [excellent, good, fair]
            .iter()
            .any(|t| !t.is_finite() || *t < 0.0)
        {
            return Err(ThresholdsError::OutOfRange);
        }
        if !(excellent < good && good < fair) {
            return Err(ThresholdsError::NotAscending);
        }

        Ok(Self {
            excellent,
            good,
            fair,
        })
    }

    #[must_use]
    pub fn excellent(&self) -> f64 {
        self.excellent
    }

    #[must_use]
    pub fn good(&self) -> f64 {
        self.good
    }

    #[must_use]
    pub fn fair(&self) -> f64 {
        self.fair
    }
}
