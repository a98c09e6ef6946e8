use thiserror::Error;

/// Errors that prevent a run from starting.
///
/// All of these are detected before the first step is taken, so a failed run
/// never produces a partial trace.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A parameter is NaN or infinite.
    #[error("parameter `{name}` must be finite")]
    NonFinite { name: &'static str },

    /// The step size is zero.
    #[error("step size must be non-zero")]
    InvalidStepSize,

    /// The step size points away from the target.
    #[error("step size sign does not match the direction from x0 to x_target")]
    DirectionMismatch,

    /// The run needs more steps than the configured budget allows.
    #[error("run requires {required} steps, exceeding the limit of {limit}")]
    TooManySteps { required: usize, limit: usize },
}
