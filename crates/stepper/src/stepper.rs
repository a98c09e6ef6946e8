//! Fixed-step forward Euler for `dy/dx = k·y`.
//!
//! Starting from `(x0, y0)`, the stepper advances `x` by `h` and `y` by
//! `h·k·y` until it reaches `x_target`:
//!
//! ```text
//! y_{n+1} = y_n + h · k · y_n
//! ```
//!
//! The number of steps is `ceil(|x_target − x0| / |h|)`. When the span is not
//! a whole multiple of `h`, the last step is shortened so the trace ends on
//! `x_target` exactly. The last step always lands on `x_target` by assignment,
//! so rounding in the accumulated `x` never pushes the trace past the target.
//!
//! # Observer
//!
//! [`run_observed`] emits an [`Event`] for the initial point and after every
//! step. Returning [`Action::StopEarly`] halts the run; the returned
//! [`Solution`] then ends at the last recorded point with
//! [`Status::StoppedByObserver`].

mod action;
mod config;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError, DEFAULT_MAX_STEPS};
pub use event::Event;
pub use solution::{Solution, Status};

use tracing::{debug, trace, warn};

use crate::{Error, Observer, Parameters, Step};

/// Runs forward Euler from `x0` to `x_target` with the default [`Config`].
///
/// # Errors
///
/// Returns an error if the parameters are invalid (see
/// [`Parameters::validate`]) or the run needs more than
/// [`DEFAULT_MAX_STEPS`] steps.
pub fn run(params: &Parameters) -> Result<Solution, Error> {
    run_observed(params, &Config::default(), ())
}

/// Runs forward Euler from `x0` to `x_target`, reporting each point to an
/// observer.
///
/// # Algorithm
///
/// 1. Validate the parameters and compute the step count `n`.
/// 2. Record the initial point `(x0, y0)` as step 0.
/// 3. For each step `i` in `1..=n`:
///    - Use `h` as the increment, or `x_target − x` when `i == n`.
///    - Advance `y` by `increment · k · y`.
///    - Record the new point and emit an [`Event`].
///    - If the observer returns [`Action::StopEarly`], stop.
/// 4. Compare the last point with the exact solution at the same `x`.
///
/// # Errors
///
/// Returns an error if the parameters are invalid or the run needs more than
/// `config.max_steps()` steps. No observer events are emitted in that case.
pub fn run_observed<Obs>(
    params: &Parameters,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    Obs: Observer<Event, Action>,
{
    params.validate()?;

    let &Parameters {
        k,
        x0,
        y0,
        x_target,
        h,
    } = params;

    let n = params.step_count();
    if n > config.max_steps() {
        return Err(Error::TooManySteps {
            required: n,
            limit: config.max_steps(),
        });
    }

    debug!(k, x0, y0, x_target, h, steps = n, "starting Euler run");

    let mut steps = Vec::with_capacity(n + 1);
    let mut current = Step::initial(k, x0, y0);
    steps.push(current);

    let initial = Event {
        step: current,
        step_size: 0.0,
    };
    if let Some(Action::StopEarly) = observer.observe(&initial) {
        debug!(step = 0, "stopped by observer");
        return Ok(Solution::from_trace(
            steps,
            Status::StoppedByObserver,
            k,
            x0,
            y0,
        ));
    }

    for i in 1..=n {
        let (dx, x_next) = if i == n {
            (x_target - current.x, x_target)
        } else {
            (h, current.x + h)
        };

        current = current.advance(k, dx, x_next);
        steps.push(current);
        trace!(index = current.index, x = current.x, y = current.y, dx, "step");

        let event = Event {
            step: current,
            step_size: dx,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!(step = i, "stopped by observer");
            return Ok(Solution::from_trace(
                steps,
                Status::StoppedByObserver,
                k,
                x0,
                y0,
            ));
        }
    }

    let solution = Solution::from_trace(steps, Status::Complete, k, x0, y0);

    if !solution.is_finite() {
        warn!(
            approx = solution.final_y_approx,
            exact = solution.final_y_exact,
            "Euler run produced a non-finite value"
        );
    }
    debug!(
        approx = solution.final_y_approx,
        exact = solution.final_y_exact,
        relative_error_percent = solution.relative_error_percent,
        "finished Euler run"
    );

    Ok(solution)
}
