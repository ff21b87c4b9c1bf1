//! Final report of a solver run.
use argmin::core::TerminationStatus;
use argmin_math::ArgminL2Norm;

use crate::{
    errors::OptResult,
    types::{FnEvalMap, Grad, Point},
    validation::{validate_best_point, validate_value},
};

/// Outcome of a finished minimization.
///
/// Fields:
/// - `best_point: Point` — best iterate found.
/// - `value: f64` — objective value at `best_point`.
/// - `converged: bool` — whether the backend reported any termination
///   reason (`false` only for a run that stopped without terminating).
/// - `status: String` — human-readable termination status.
/// - `iterations: usize` — number of iterations performed.
/// - `fn_evals: FnEvalMap` — per-operation evaluation counts
///   (`"cost_count"`, `"gradient_count"`, ...).
/// - `grad_norm: Option<f64>` — L2 norm of the final gradient, when the
///   backend kept one.
#[derive(Debug, Clone, PartialEq)]
pub struct MinimizeOutcome {
    pub best_point: Point,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
    pub grad_norm: Option<f64>,
}

impl MinimizeOutcome {
    /// Assemble and validate an outcome from raw backend state.
    ///
    /// # Errors
    /// - [`OptError::MissingBestPoint`](crate::errors::OptError::MissingBestPoint)
    ///   if the backend produced no best parameter.
    /// - [`OptError::InvalidBestPoint`](crate::errors::OptError::InvalidBestPoint)
    ///   if the best parameter contains non-finite entries.
    /// - [`OptError::NonFiniteValue`](crate::errors::OptError::NonFiniteValue)
    ///   if the reported objective value is not finite.
    pub fn new(
        best_point: Option<Point>,
        value: f64,
        termination: TerminationStatus,
        iterations: u64,
        fn_evals: FnEvalMap,
        grad: Option<Grad>,
    ) -> OptResult<Self> {
        let best_point = validate_best_point(best_point)?;
        validate_value(value)?;
        let status: String;
        let converged = match termination {
            TerminationStatus::NotTerminated => {
                status = "Still running".to_string();
                false
            }
            _ => {
                status = format!("{termination:?}");
                true
            }
        };
        Ok(Self {
            best_point,
            value,
            converged,
            status,
            iterations: iterations as usize,
            fn_evals,
            grad_norm: grad.map(|g| g.l2_norm()),
        })
    }
}

#[cfg(test)]
mod tests {
    //! Scope
    //! -----
    //! These tests cover outcome assembly and its validation rules. They
    //! intentionally DO NOT cover producing the raw backend state; the
    //! runner tests own that.
    use argmin::core::TerminationReason;
    use ndarray::arr1;

    use super::*;
    use crate::errors::OptError;

    #[test]
    fn terminated_runs_are_marked_converged() {
        let outcome = MinimizeOutcome::new(
            Some(arr1(&[1.0, 2.0])),
            0.5,
            TerminationStatus::Terminated(TerminationReason::SolverConverged),
            12,
            FnEvalMap::new(),
            Some(arr1(&[3.0, 4.0])),
        )
        .unwrap();

        assert!(outcome.converged);
        assert_eq!(outcome.status, "Terminated(SolverConverged)");
        assert_eq!(outcome.iterations, 12);
        assert_eq!(outcome.grad_norm, Some(5.0));
    }

    #[test]
    fn unterminated_runs_are_not_converged() {
        let outcome = MinimizeOutcome::new(
            Some(arr1(&[0.0])),
            1.0,
            TerminationStatus::NotTerminated,
            3,
            FnEvalMap::new(),
            None,
        )
        .unwrap();

        assert!(!outcome.converged);
        assert_eq!(outcome.status, "Still running");
        assert_eq!(outcome.grad_norm, None);
    }

    #[test]
    fn missing_or_invalid_state_is_rejected() {
        assert_eq!(
            MinimizeOutcome::new(
                None,
                1.0,
                TerminationStatus::NotTerminated,
                0,
                FnEvalMap::new(),
                None,
            ),
            Err(OptError::MissingBestPoint)
        );
        assert!(matches!(
            MinimizeOutcome::new(
                Some(arr1(&[f64::NAN])),
                1.0,
                TerminationStatus::NotTerminated,
                0,
                FnEvalMap::new(),
                None,
            ),
            Err(OptError::InvalidBestPoint { .. })
        ));
        assert!(matches!(
            MinimizeOutcome::new(
                Some(arr1(&[1.0])),
                f64::INFINITY,
                TerminationStatus::NotTerminated,
                0,
                FnEvalMap::new(),
                None,
            ),
            Err(OptError::NonFiniteValue { .. })
        ));
    }
}
