//! Forward Euler stepping for the linear equation `dy/dx = k·y`.
//!
//! This crate approximates the solution of `dy/dx = k·y` with fixed-step
//! forward Euler and measures the approximation against the closed form
//! `y = y0·e^(k·(x − x0))`:
//!
//! - [`Parameters`]: the five numbers that define a run
//! - [`run`] / [`run_observed`]: walk from `x0` to `x_target` and return a
//!   [`Solution`] with the full [`Step`] trace and error metrics
//! - [`analytical`]: the closed-form solution and a sampled reference curve
//! - [`Accuracy`]: a label for the relative error, with configurable
//!   [`Thresholds`]
//!
//! # Example
//!
//! ```
//! use growth_stepper::{Parameters, run};
//!
//! let params = Parameters::new(0.3, 0.0, 10.0, 2.0, 0.5);
//! let solution = run(&params)?;
//!
//! assert_eq!(solution.steps.len(), 5);
//! assert!(solution.absolute_error < 1.0);
//! # Ok::<(), growth_stepper::Error>(())
//! ```

pub mod accuracy;
pub mod analytical;
pub mod stepper;

mod error;
#[cfg(feature = "serde-derive")]
mod non_finite;
mod observer;
mod parameters;
mod step;

pub use accuracy::{Accuracy, Thresholds, ThresholdsError};
pub use error::Error;
pub use observer::Observer;
pub use parameters::Parameters;
pub use step::Step;
pub use stepper::{Action, Config, ConfigError, Event, Solution, Status, run, run_observed};
