//! Adapter that exposes a [`Function`] as an `argmin` problem.
//!
//! The function algebra already states objectives in *minimization* terms,
//! so the cost handed to the backend is the objective value itself, with no
//! sign convention in between. Gradients are resolved through
//! [`gradient_with_fallback`], so a function without an analytic gradient
//! is still usable by gradient-based solvers.
use argmin::core::{CostFunction, Error, Gradient};

use crate::{
    errors::OptError,
    functions::traits::Function,
    solver::finite_diff::gradient_with_fallback,
    types::{Grad, Point, Scalar},
};

/// Bridges a [`Function`] to `argmin`'s `CostFunction` and `Gradient`.
///
/// - `CostFunction::cost` returns `f(x)` and rejects non-finite values.
/// - `Gradient::gradient` returns the analytic gradient when one is
///   implemented, or a finite-difference gradient of the cost otherwise.
pub struct ArgminAdapter<'a, F: Function + ?Sized> {
    pub f: &'a F,
}

// Derives would demand `F: Sized + Clone + Debug`; the adapter only holds a
// shared reference, so implement by hand.
impl<F: Function + ?Sized> Clone for ArgminAdapter<'_, F> {
    fn clone(&self) -> Self {
        Self { f: self.f }
    }
}

impl<F: Function + ?Sized> std::fmt::Debug for ArgminAdapter<'_, F> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fmt.debug_struct("ArgminAdapter").finish_non_exhaustive()
    }
}

impl<F: Function + ?Sized> CostFunction for ArgminAdapter<'_, F> {
    type Param = Point;
    type Output = Scalar;

    /// Evaluate the objective at `x`.
    ///
    /// # Errors
    /// Propagates any `OptError` from the function's `evaluate` via `?`,
    /// and returns `NonFiniteValue` when the objective produces NaN or an
    /// infinity.
    fn cost(&self, x: &Self::Param) -> Result<Self::Output, Error> {
        let value = self.f.evaluate(x)?;
        if !value.is_finite() {
            return Err((OptError::NonFiniteValue { value }).into());
        }
        Ok(value)
    }
}

impl<F: Function + ?Sized> Gradient for ArgminAdapter<'_, F> {
    type Param = Point;
    type Gradient = Grad;

    /// Evaluate the gradient of the objective at `x`.
    ///
    /// Analytic gradients are validated and used directly; functions that
    /// report `GradientNotImplemented` are finite-differenced, central
    /// scheme first and forward as the rescue.
    ///
    /// # Errors
    /// Propagates derivative-resolution failures from
    /// [`gradient_with_fallback`].
    fn gradient(&self, x: &Self::Param) -> Result<Self::Gradient, Error> {
        Ok(gradient_with_fallback(self.f, x)?)
    }
}

impl<'a, F: Function + ?Sized> ArgminAdapter<'a, F> {
    /// Construct a new adapter over a function.
    pub fn new(f: &'a F) -> Self {
        Self { f }
    }
}
