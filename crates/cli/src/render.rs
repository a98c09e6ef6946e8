use std::fmt::Write;

use growth_stepper::{Accuracy, Parameters, Solution};
use serde::Serialize;

/// Everything `--json` prints.
#[derive(Debug, Serialize)]
pub(crate) struct Report<'a> {
    pub parameters: Parameters,
    pub solution: &'a Solution,
    pub accuracy: Accuracy,
    pub recommendation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<Vec<[f64; 2]>>,
}

/// Formats the step trace as a fixed-width table.
pub(crate) fn table(solution: &Solution) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>6}  {:>14}  {:>14}  {:>14}", "step", "x", "y", "dy/dx");
    for step in &solution.steps {
        let _ = writeln!(
            out,
            "{:>6}  {:>14.6}  {:>14.6}  {:>14.6}",
            step.index, step.x, step.y, step.dy_dx
        );
    }
    out
}

/// Formats the final values, errors, and accuracy guidance.
pub(crate) fn summary(params: &Parameters, solution: &Solution, accuracy: Accuracy) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "equation:        dy/dx = {}·y", params.k);
    let _ = writeln!(
        out,
        "exact solution:  y = {} · e^({} · (x − {}))",
        params.y0, params.k, params.x0
    );
    let _ = writeln!(out, "steps:           {}", solution.step_count());
    let _ = writeln!(out, "final x:         {:.6}", solution.final_x);
    let _ = writeln!(out, "euler:           {:.6}", solution.final_y_approx);
    let _ = writeln!(out, "exact:           {:.6}", solution.final_y_exact);
    let _ = writeln!(out, "absolute error:  {:.6}", solution.absolute_error);
    let _ = writeln!(out, "relative error:  {:.2}%", solution.relative_error_percent);
    let _ = writeln!(out, "accuracy:        {accuracy}");
    let _ = writeln!(out, "{}", accuracy.recommendation());
    out
}

/// Formats sampled points of the exact solution.
pub(crate) fn curve(points: &[[f64; 2]]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>14}  {:>14}", "x", "exact y");
    for [x, y] in points {
        let _ = writeln!(out, "{x:>14.6}  {y:>14.6}");
    }
    out
}
