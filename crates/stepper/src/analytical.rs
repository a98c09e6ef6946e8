//! Closed-form solution of `dy/dx = k·y`.
//!
//! The exact solution through `(x0, y0)` is `y = y0·e^(k·(x − x0))`. It is
//! the reference every Euler trace is measured against.

use crate::Parameters;

/// Evaluates `y0·e^(k·(x − x0))`.
#[must_use]
pub fn solution(k: f64, x0: f64, y0: f64, x: f64) -> f64 {
    y0 * (k * (x - x0)).exp()
}

/// Samples the exact solution at `samples` evenly spaced points from `x0` to
/// `x_target`, both ends included.
///
/// Returns `[x, y]` pairs, suitable for drawing the reference curve next to an
/// Euler trace. Zero samples yields an empty curve and one sample yields just
/// the starting point.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn curve(params: &Parameters, samples: usize) -> Vec<[f64; 2]> {
    let at = |x: f64| [x, solution(params.k, params.x0, params.y0, x)];

    match samples {
        0 => Vec::new(),
        1 => vec![at(params.x0)],
        _ => {
            let last = samples - 1;
            let dx = params.span() / last as f64;
            (0..samples)
                .map(|i| {
                    let x = if i == last {
                        params.x_target
                    } else {
                        params.x0 + i as f64 * dx
                    };
                    at(x)
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn solution_at_start_is_y0() {
        assert_relative_eq!(solution(0.7, 2.0, -3.0, 2.0), -3.0);
    }

    #[test]
    fn solution_growth_and_decay() {
        assert_relative_eq!(solution(0.3, 0.0, 10.0, 2.0), 10.0 * 0.6_f64.exp());
        assert_relative_eq!(solution(-0.5, 0.0, 100.0, 1.0), 100.0 * (-0.5_f64).exp());
    }

    #[test]
    fn solution_with_zero_k_is_constant() {
        assert_relative_eq!(solution(0.0, 0.0, 4.0, 100.0), 4.0);
    }

    #[test]
    fn curve_spans_start_to_target() {
        let params = Parameters::new(1.0, 0.0, 1.0, 2.0, 0.1);
        let points = curve(&params, 5);

        assert_eq!(points.len(), 5);
        assert_eq!(points[0], [0.0, 1.0]);
        assert_eq!(points[4][0], 2.0);
        assert_relative_eq!(points[4][1], 2.0_f64.exp());
        assert_relative_eq!(points[2][0], 1.0);
    }

    #[test]
    fn curve_walks_backward() {
        let params = Parameters::new(1.0, 1.0, 1.0, -1.0, -0.1);
        let points = curve(&params, 3);

        let xs: Vec<f64> = points.iter().map(|p| p[0]).collect();
        assert_eq!(xs, vec![1.0, 0.0, -1.0]);
    }

    #[test]
    fn curve_with_few_samples() {
        let params = Parameters::new(1.0, 0.0, 1.0, 2.0, 0.1);

        assert!(curve(&params, 0).is_empty());
        assert_eq!(curve(&params, 1), vec![[0.0, 1.0]]);
    }
}
