//! policy — the step-size contract shared by all rate policies.
//!
//! Purpose
//! -------
//! Define what a step-size policy consumes and produces, independent of
//! any particular schedule. Policies see one [`RateContext`] per
//! optimizer iteration and answer with a [`RateOutcome`]; the optimizer
//! applies the returned [`StepSize`] to its search direction and keeps
//! going.
//!
//! Key behaviors
//! -------------
//! - [`RateContext`] carries the iteration counter, the current point,
//!   and the search direction, plus optional objective/gradient
//!   callables for policies that probe the objective (line searches).
//! - [`StepSize`] is either one scalar for the whole direction or one
//!   multiplier per coordinate; [`StepSize::scale`] turns it into the
//!   actual displacement.
//! - [`RateOutcome::converged`] reports whether the policy is satisfied
//!   with the returned step; a line search that hit its floor returns
//!   the sub-floor step with `converged: false` instead of failing.
//!
//! Invariants & assumptions
//! ------------------------
//! - The direction follows the gradient convention: iterates move along
//!   `−direction`, so policies evaluate trial points as
//!   `point − t·direction`.
//! - Policies are stateful (`&mut self`); calling order matters for
//!   accumulating policies and is the optimizer's responsibility.
//! - Callables in the context report failures as [`OptError`]; policies
//!   propagate them unchanged.
//!
//! Conventions
//! -----------
//! - `iteration` starts at 0 on the first step, matching the schedules'
//!   closed forms.
//! - Policies that need a callable the context does not carry fail with
//!   [`OptError::MissingObjective`] /
//!   [`OptError::MissingObjectiveGradient`] naming themselves.
//!
//! Downstream usage
//! ----------------
//! - Concrete policies live beside this module: a deterministic schedule
//!   ([`super::decreasing`]), a backtracking line search
//!   ([`super::backtracking`]), and an accumulating per-coordinate rule
//!   ([`super::adagrad`]).
//! - Driver loops build one [`RateContext`] per iteration, attach
//!   closures over a [`crate::functions::Function`] when the policy
//!   wants them, and apply `outcome.step.scale(direction)`.
//!
//! Testing notes
//! -------------
//! - Unit tests here cover [`StepSize::scale`] shapes and the context
//!   builders; schedule-specific behavior is tested with each policy.
use ndarray::Array1;

use crate::{
    errors::{OptError, OptResult},
    types::{Grad, Point},
};

/// Objective callable handed to policies that probe trial points.
pub type ObjectiveFn<'a> = dyn Fn(&Point) -> OptResult<f64> + 'a;

/// Objective-gradient callable handed to policies that need slopes.
pub type GradientFn<'a> = dyn Fn(&Point) -> OptResult<Grad> + 'a;

/// Everything a policy may consult for one iteration.
pub struct RateContext<'a> {
    pub iteration: u64,
    pub point: &'a Point,
    pub direction: &'a Point,
    pub objective: Option<&'a ObjectiveFn<'a>>,
    pub objective_gradient: Option<&'a GradientFn<'a>>,
}

impl<'a> RateContext<'a> {
    /// Context with no callables attached; enough for pure schedules.
    pub fn new(iteration: u64, point: &'a Point, direction: &'a Point) -> Self {
        Self {
            iteration,
            point,
            direction,
            objective: None,
            objective_gradient: None,
        }
    }

    /// Attach an objective callable.
    pub fn with_objective(mut self, objective: &'a ObjectiveFn<'a>) -> Self {
        self.objective = Some(objective);
        self
    }

    /// Attach an objective-gradient callable.
    pub fn with_objective_gradient(mut self, gradient: &'a GradientFn<'a>) -> Self {
        self.objective_gradient = Some(gradient);
        self
    }
}

/// A step size: uniform over the direction or one multiplier per
/// coordinate.
#[derive(Debug, Clone, PartialEq)]
pub enum StepSize {
    Scalar(f64),
    PerCoordinate(Array1<f64>),
}

impl StepSize {
    /// The displacement `step ⊙ direction` to subtract from the current
    /// point.
    ///
    /// # Errors
    /// [`OptError::ShapeMismatch`] if a per-coordinate step disagrees
    /// with the direction's length.
    pub fn scale(&self, direction: &Point) -> OptResult<Point> {
        match self {
            StepSize::Scalar(t) => Ok(*t * direction),
            StepSize::PerCoordinate(multipliers) => {
                if multipliers.len() != direction.len() {
                    return Err(OptError::ShapeMismatch {
                        what: "per-coordinate step",
                        expected: direction.len(),
                        found: multipliers.len(),
                    });
                }
                Ok(multipliers * direction)
            }
        }
    }

    /// The scalar step, if this is one.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            StepSize::Scalar(t) => Some(*t),
            StepSize::PerCoordinate(_) => None,
        }
    }
}

/// What a policy hands back for one iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct RateOutcome {
    pub step: StepSize,
    pub converged: bool,
}

/// A step-size policy queried once per optimizer iteration.
pub trait LearningRate {
    /// Produce the step size for the given iteration context.
    ///
    /// # Errors
    /// Policies propagate callable failures and report missing callables
    /// or shape disagreements as [`OptError`] values.
    fn learning_rate(&mut self, ctx: &RateContext<'_>) -> OptResult<RateOutcome>;
}

#[cfg(test)]
mod tests {
    //! Scope
    //! -----
    //! These tests cover step-size scaling shapes and the context
    //! builders. They intentionally DO NOT cover concrete schedules;
    //! each policy module tests its own.
    use ndarray::arr1;

    use super::*;

    #[test]
    fn scalar_steps_scale_the_whole_direction() {
        let direction = arr1(&[2.0, -4.0]);

        let displacement = StepSize::Scalar(0.5).scale(&direction).unwrap();

        assert_eq!(displacement, arr1(&[1.0, -2.0]));
        assert_eq!(StepSize::Scalar(0.5).as_scalar(), Some(0.5));
    }

    #[test]
    fn per_coordinate_steps_scale_elementwise() {
        let direction = arr1(&[2.0, -4.0]);
        let step = StepSize::PerCoordinate(arr1(&[1.0, 0.25]));

        let displacement = step.scale(&direction).unwrap();

        assert_eq!(displacement, arr1(&[2.0, -1.0]));
        assert_eq!(step.as_scalar(), None);
    }

    #[test]
    fn per_coordinate_steps_reject_mismatched_directions() {
        let step = StepSize::PerCoordinate(arr1(&[1.0, 0.25]));

        assert!(matches!(
            step.scale(&arr1(&[1.0, 2.0, 3.0])),
            Err(OptError::ShapeMismatch { expected: 3, found: 2, .. })
        ));
    }

    #[test]
    fn context_builders_attach_callables() {
        let point = arr1(&[1.0]);
        let direction = arr1(&[1.0]);
        let objective = |p: &Point| -> OptResult<f64> { Ok(p[0]) };
        let gradient = |p: &Point| -> OptResult<Grad> { Ok(p.clone()) };

        let ctx = RateContext::new(3, &point, &direction)
            .with_objective(&objective)
            .with_objective_gradient(&gradient);

        assert_eq!(ctx.iteration, 3);
        assert!(ctx.objective.is_some());
        assert!(ctx.objective_gradient.is_some());
    }
}
