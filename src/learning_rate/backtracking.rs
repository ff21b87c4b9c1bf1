//! Backtracking line search with a floored trial step.
use crate::{
    errors::{OptError, OptResult},
    learning_rate::policy::{LearningRate, RateContext, RateOutcome, StepSize},
    validation::verify_rate_param,
};

/// Armijo-style backtracking: start at `t = 1`, multiply by `b` until
/// the trial point decreases the objective by at least
/// `a·∇f(x)·(−direction)`, independent of `t`.
///
/// Requires both callables on the [`RateContext`]. When no trial step
/// above the floor `t0` passes the test, the current sub-floor `t` is
/// returned with `converged: false` so the caller can stop or accept the
/// tiny step knowingly; running out of floor is a stall signal, not an
/// error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BacktrackingLineSearch {
    pub a: f64,
    pub b: f64,
    pub t0: f64,
}

impl BacktrackingLineSearch {
    /// Construct a line search from a sufficient-decrease coefficient
    /// `a`, shrink factor `b`, and floor `t0`.
    ///
    /// # Errors
    /// [`OptError::InvalidRateParam`] for non-finite or non-positive
    /// parameters, or when `b` does not lie strictly below 1.
    pub fn new(a: f64, b: f64, t0: f64) -> OptResult<Self> {
        verify_rate_param("a", a)?;
        verify_rate_param("b", b)?;
        if b >= 1.0 {
            return Err(OptError::InvalidRateParam {
                name: "b",
                value: b,
                reason: "Shrink factor must lie strictly below 1.",
            });
        }
        verify_rate_param("t0", t0)?;
        Ok(Self { a, b, t0 })
    }
}

impl Default for BacktrackingLineSearch {
    fn default() -> Self {
        Self {
            a: 0.1,
            b: 0.9,
            t0: 1e-12,
        }
    }
}

impl LearningRate for BacktrackingLineSearch {
    fn learning_rate(&mut self, ctx: &RateContext<'_>) -> OptResult<RateOutcome> {
        let objective = ctx.objective.ok_or(OptError::MissingObjective {
            policy: "backtracking line search",
        })?;
        let gradient_fn = ctx.objective_gradient.ok_or(OptError::MissingObjectiveGradient {
            policy: "backtracking line search",
        })?;

        let score = objective(ctx.point)?;
        let grad = gradient_fn(ctx.point)?;
        if grad.len() != ctx.direction.len() {
            return Err(OptError::ShapeMismatch {
                what: "line-search gradient",
                expected: ctx.direction.len(),
                found: grad.len(),
            });
        }
        // a·∇f(x)·(−d): negative for a descent direction, so acceptance
        // demands a real decrease.
        let sufficient_decrease = -(self.a * grad.dot(ctx.direction));

        let mut t = 1.0;
        loop {
            let trial = ctx.point - &(t * ctx.direction);
            if objective(&trial)? < score + sufficient_decrease {
                return Ok(RateOutcome {
                    step: StepSize::Scalar(t),
                    converged: true,
                });
            }
            if t < self.t0 {
                return Ok(RateOutcome {
                    step: StepSize::Scalar(t),
                    converged: false,
                });
            }
            t *= self.b;
        }
    }
}

#[cfg(test)]
mod tests {
    //! Scope
    //! -----
    //! These tests cover acceptance on a well-scaled quadratic, the
    //! floored stall path, and the missing-callable rejections. They
    //! intentionally DO NOT cover interaction with accumulating
    //! policies; the policies are independent.
    use ndarray::arr1;

    use super::*;
    use crate::types::{Grad, Point};

    fn quadratic_objective() -> (
        impl Fn(&Point) -> OptResult<f64>,
        impl Fn(&Point) -> OptResult<Grad>,
    ) {
        (
            |p: &Point| -> OptResult<f64> { Ok(p.dot(p)) },
            |p: &Point| -> OptResult<Grad> { Ok(2.0 * p) },
        )
    }

    #[test]
    fn accepts_a_step_that_sufficiently_decreases_a_quadratic() {
        let (objective, gradient) = quadratic_objective();
        let point = arr1(&[2.0]);
        let direction = arr1(&[4.0]);
        let ctx = RateContext::new(0, &point, &direction)
            .with_objective(&objective)
            .with_objective_gradient(&gradient);

        let outcome = BacktrackingLineSearch::default()
            .learning_rate(&ctx)
            .unwrap();

        // f(x) = x², x = 2, d = ∇f = 4: acceptance needs
        // (2 − 4t)² < 4 − 0.1·16, first satisfied at t = 0.9².
        assert!(outcome.converged);
        let t = outcome.step.as_scalar().unwrap();
        assert!((2.0 - 4.0 * t).powi(2) < 4.0 - 1.6);
        assert!((2.0 - 4.0 * (t / 0.9)).powi(2) >= 4.0 - 1.6);
    }

    #[test]
    fn stalls_at_the_floor_on_a_flat_objective() {
        let objective = |_p: &Point| -> OptResult<f64> { Ok(1.0) };
        let gradient = |p: &Point| -> OptResult<Grad> { Ok(p.clone()) };
        let point = arr1(&[1.0]);
        let direction = arr1(&[1.0]);
        let ctx = RateContext::new(0, &point, &direction)
            .with_objective(&objective)
            .with_objective_gradient(&gradient);

        let outcome = BacktrackingLineSearch::default()
            .learning_rate(&ctx)
            .unwrap();

        // A constant objective never satisfies the decrease test, so the
        // search walks down to the floor and reports the stall.
        assert!(!outcome.converged);
        assert!(outcome.step.as_scalar().unwrap() < 1e-12);
    }

    #[test]
    fn missing_callables_are_reported_by_name() {
        let point = arr1(&[1.0]);
        let direction = arr1(&[1.0]);
        let objective = |p: &Point| -> OptResult<f64> { Ok(p[0]) };

        let bare = RateContext::new(0, &point, &direction);
        assert_eq!(
            BacktrackingLineSearch::default().learning_rate(&bare),
            Err(OptError::MissingObjective {
                policy: "backtracking line search"
            })
        );

        let half = RateContext::new(0, &point, &direction).with_objective(&objective);
        assert_eq!(
            BacktrackingLineSearch::default().learning_rate(&half),
            Err(OptError::MissingObjectiveGradient {
                policy: "backtracking line search"
            })
        );
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        assert!(matches!(
            BacktrackingLineSearch::new(0.1, 1.0, 1e-12),
            Err(OptError::InvalidRateParam { name: "b", .. })
        ));
        assert!(matches!(
            BacktrackingLineSearch::new(-0.1, 0.9, 1e-12),
            Err(OptError::InvalidRateParam { name: "a", .. })
        ));
    }
}
