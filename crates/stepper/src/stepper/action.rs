/// Control actions an observer may return to the stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop stepping and return the trace recorded so far.
    StopEarly,
}
