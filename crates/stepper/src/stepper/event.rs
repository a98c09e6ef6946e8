use crate::Step;

/// Event emitted by the stepper for each recorded point.
///
/// Step 0 is the initial condition and carries a `step_size` of zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The point just appended to the trace.
    pub step: Step,

    /// The increment in `x` that produced this point.
    ///
    /// Equal to `h` for every step except the last, which lands exactly on
    /// `x_target` and may be shorter.
    pub step_size: f64,
}
