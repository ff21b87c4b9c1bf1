//! finite_diff — numeric derivative cascade for objective functions.
//!
//! Purpose
//! -------
//! Approximate gradients and Hessians numerically, with validation and
//! symmetry cleanup, so the rest of the solver layer can ask any
//! [`Function`] for derivatives without caring whether analytic
//! implementations exist.
//!
//! Key behaviors
//! -------------
//! - [`fd_gradient`] differences the objective one-sidedly, captures
//!   errors raised mid-probe, and validates the result.
//! - [`fd_hessian`] differences a gradient centrally, retrying with the
//!   one-sided scheme when validation rejects the central estimate.
//! - Resolve derivatives for a whole [`Function`] with
//!   [`gradient_with_fallback`] and [`hessian_with_fallback`]: analytic
//!   implementations are used when present and validated, numeric
//!   approximations fill in when a function reports
//!   `GradientNotImplemented` / `HessianNotImplemented`.
//! - Build a full second-order model from values alone with
//!   [`fd_quadratic_approx`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Points, gradients, and Hessians are `ndarray` containers over `f64`
//!   ([`Point`], [`Grad`], [`Hessian`]).
//! - Any error raised by the objective during finite differencing is
//!   routed into a shared `closure_err` cell and treated as a hard
//!   failure for that derivative.
//! - Gradients and Hessians returned from this module have already
//!   passed [`validate_grad`] / [`validate_hessian`] for whichever
//!   difference scheme produced them.
//!
//! Conventions
//! -----------
//! - Central differences are preferred; forward differences are the
//!   fallback when the central approximation fails validation. The
//!   one-sided scheme rescues objectives that are only defined on one
//!   side of the evaluation point.
//! - Callers see [`OptError`] inside `OptResult<T>`; Argmin's [`Error`]
//!   exists only inside the probing closures and the capture cell.
//!
//! Downstream usage
//! ----------------
//! - The Argmin adapter calls [`gradient_with_fallback`] so that every
//!   [`Function`] is usable with L-BFGS, analytic gradient or not.
//! - [`fd_quadratic_approx`] is the numeric sibling of
//!   [`quadratic_approx`](crate::functions::quadratic_approx) for
//!   functions that expose no derivatives at all.
//!
//! Testing notes
//! -------------
//! - Unit tests below pin the happy paths, the rejection of non-finite
//!   results, the central-to-forward rescue, and the error channel.
//! - Integration tests exercise these helpers implicitly whenever a
//!   gradient-free function is minimized.
use std::cell::RefCell;

use argmin::core::Error;
use finitediff::FiniteDiff;
use ndarray::Array1;

use crate::{
    errors::{OptError, OptResult},
    functions::{quadratic::Quadratic, traits::Function},
    types::{Grad, Hessian, Point},
    validation::{validate_grad, validate_hessian},
};

/// Forward-difference gradient with error capture and validation.
///
/// Approximates the gradient of a scalar objective at `x` with one-sided
/// differences, while capturing any error raised inside the evaluation
/// closure and enforcing shape and finiteness invariants on the result.
///
/// `func` is assumed to route its own evaluation failures into
/// `closure_err` and return `NaN` in that case; the cell is cleared on
/// entry and inspected after the finite-difference call.
///
/// # Errors
/// - The captured error, converted back through `From<Error>`, when
///   `func` signaled a failure via `closure_err`.
/// - [`OptError::GradientDimMismatch`] when the finite-difference
///   gradient length does not match `x.len()`.
/// - [`OptError::InvalidGradient`] when any gradient element is NaN or
///   infinite.
///
/// # Examples
/// ```rust
/// # use std::cell::RefCell;
/// # use argmin::core::Error;
/// # use ndarray::Array1;
/// # use funcopt::solver::finite_diff::fd_gradient;
/// # use funcopt::types::Point;
/// let x: Point = Array1::from(vec![0.0_f64, 1.0]);
/// let closure_err: RefCell<Option<Error>> = RefCell::new(None);
///
/// // Smooth objective with no error side channel.
/// let f = |p: &Point| p.dot(p) + 2.0 * p[0];
///
/// let grad = fd_gradient(&x, &f, &closure_err).unwrap();
/// assert_eq!(grad.len(), x.len());
/// ```
pub fn fd_gradient<G: Fn(&Point) -> f64>(
    x: &Point,
    func: &G,
    closure_err: &RefCell<Option<Error>>,
) -> OptResult<Grad> {
    closure_err.replace(None);
    let fd_grad = x.forward_diff(func);
    let dim = x.len();
    if let Some(err) = closure_err.take() {
        return Err(err.into());
    }
    validate_grad(&fd_grad, dim)?;
    Ok(fd_grad)
}

/// Finite-difference Hessian with validation and symmetry cleanup.
///
/// Differentiates a gradient function numerically, preferring a
/// central-difference scheme and falling back to forward differences
/// when the central approximation fails validation. The result is
/// symmetrized in place before being returned.
///
/// The central-difference validation error is intentionally discarded;
/// only the forward-difference validation result is surfaced, so callers
/// are not coupled to the two-stage strategy. Symmetrization runs after
/// validation to keep the original entries in `InvalidHessian`
/// diagnostics.
///
/// # Errors
/// - [`OptError::HessianDimMismatch`] when the fallback Hessian is not
///   `dim × dim`.
/// - [`OptError::InvalidHessian`] when the fallback Hessian contains a
///   NaN or infinite entry.
///
/// # Examples
/// ```rust
/// # use ndarray::Array1;
/// # use funcopt::solver::finite_diff::fd_hessian;
/// # use funcopt::types::Point;
/// // Gradient of f(x) = ‖x‖²: g(x) = 2x.
/// let grad_fn = |x: &Point| x.mapv(|v| 2.0 * v);
///
/// let x: Point = Array1::from(vec![1.0_f64, 2.0]);
/// let hess = fd_hessian(&grad_fn, &x).unwrap();
/// assert_eq!((hess.nrows(), hess.ncols()), (2, 2));
/// ```
pub fn fd_hessian<F: Fn(&Point) -> Grad>(f: &F, x: &Point) -> OptResult<Hessian> {
    let dim = x.len();
    let mut cent_hess = x.central_hessian(f);
    match validate_hessian(&cent_hess, dim) {
        Ok(_) => {
            symmetrize(&mut cent_hess);
            Ok(cent_hess)
        }
        Err(_) => {
            let mut forward_hess = x.forward_hessian(f);
            validate_hessian(&forward_hess, dim)?;
            symmetrize(&mut forward_hess);
            Ok(forward_hess)
        }
    }
}

/// Resolve a gradient for `f` at `x`, numerically if necessary.
///
/// Analytic gradients are validated and returned as-is. When `f` reports
/// [`OptError::GradientNotImplemented`], the objective is wrapped in a
/// closure that records evaluation failures in a shared cell and returns
/// `NaN`; a central-difference gradient is attempted first, with
/// [`fd_gradient`] (forward differences) as the fallback when an error
/// was captured or the central result fails validation.
///
/// # Errors
/// - Any error other than `GradientNotImplemented` raised by the
///   analytic gradient, unchanged.
/// - [`OptError::GradientDimMismatch`] / [`OptError::InvalidGradient`]
///   when the analytic gradient is malformed.
/// - The objective's own error when evaluation fails on every
///   finite-difference path, or [`OptError::NonFiniteValue`] when it
///   produces a non-finite value there.
pub fn gradient_with_fallback<F: Function + ?Sized>(f: &F, x: &Point) -> OptResult<Grad> {
    let dim = x.len();
    match f.gradient(x) {
        Ok(grad) => {
            validate_grad(&grad, dim)?;
            Ok(grad)
        }
        Err(OptError::GradientNotImplemented) => {
            let closure_err: RefCell<Option<Error>> = RefCell::new(None);
            let cost = |p: &Point| -> Result<f64, Error> {
                let value = f.evaluate(p)?;
                if !value.is_finite() {
                    return Err((OptError::NonFiniteValue { value }).into());
                }
                Ok(value)
            };
            // The FD closure must return `f64`, so errors are captured in the
            // cell (first one wins) and surface as `NaN` evaluations.
            let objective = |p: &Point| -> f64 {
                match cost(p) {
                    Ok(value) => value,
                    Err(err) => {
                        let mut slot = closure_err.borrow_mut();
                        if slot.is_none() {
                            *slot = Some(err);
                        }
                        f64::NAN
                    }
                }
            };
            let central = x.central_diff(&objective);
            if closure_err.borrow().is_some() {
                return fd_gradient(x, &objective, &closure_err);
            }
            match validate_grad(&central, dim) {
                Ok(_) => Ok(central),
                Err(_) => fd_gradient(x, &objective, &closure_err),
            }
        }
        Err(err) => Err(err),
    }
}

/// Resolve a Hessian for `f` at `x`, numerically if necessary.
///
/// Analytic Hessians are validated and returned as-is. When `f` reports
/// [`OptError::HessianNotImplemented`], the Hessian is rebuilt by
/// finite-differencing [`gradient_with_fallback`], so a function with
/// only a gradient, or only values, still yields curvature. An error
/// captured from the inner gradient takes priority over the
/// finite-difference diagnostics it contaminates.
///
/// # Errors
/// - Any error other than `HessianNotImplemented` raised by the analytic
///   Hessian, unchanged.
/// - [`OptError::HessianDimMismatch`] / [`OptError::InvalidHessian`]
///   when the analytic Hessian is malformed.
/// - The inner gradient's error when it fails during differencing.
pub fn hessian_with_fallback<F: Function + ?Sized>(f: &F, x: &Point) -> OptResult<Hessian> {
    let dim = x.len();
    match f.hessian(x) {
        Ok(hess) => {
            validate_hessian(&hess, dim)?;
            Ok(hess)
        }
        Err(OptError::HessianNotImplemented) => {
            let closure_err: RefCell<Option<Error>> = RefCell::new(None);
            let grad_fn = |p: &Point| -> Grad {
                match gradient_with_fallback(f, p) {
                    Ok(grad) => grad,
                    Err(err) => {
                        let mut slot = closure_err.borrow_mut();
                        if slot.is_none() {
                            *slot = Some(err.into());
                        }
                        Array1::from_elem(p.len(), f64::NAN)
                    }
                }
            };
            let result = fd_hessian(&grad_fn, x);
            if let Some(err) = closure_err.take() {
                return Err(err.into());
            }
            result
        }
        Err(err) => Err(err),
    }
}

/// Build the local second-order model of `f` at `x` from whatever
/// derivatives are available.
///
/// Numeric sibling of
/// [`quadratic_approx`](crate::functions::quadratic_approx): the value is
/// always taken from `f`, while the gradient and Hessian come from
/// [`gradient_with_fallback`] and [`hessian_with_fallback`]. As with the
/// analytic builder, the returned model takes the displacement `d` from
/// `x` as its argument, so its [`solution`](Quadratic::solution) is the
/// Newton step.
///
/// # Errors
/// Propagates evaluation and derivative-resolution failures from the
/// helpers above, and [`Quadratic::new`] validation errors.
pub fn fd_quadratic_approx(f: &dyn Function, x: &Point) -> OptResult<Quadratic> {
    let value = f.evaluate(x)?;
    let gradient = gradient_with_fallback(f, x)?;
    let hessian = hessian_with_fallback(f, x)?;
    Quadratic::new(hessian, gradient, value)
}

// ---- Symmetry cleanup ----

/// Enforce symmetry of a Hessian matrix in place.
///
/// Replaces each off-diagonal pair `(i, j)` / `(j, i)` with their
/// average; the diagonal is untouched. Runs only on matrices that have
/// already passed [`validate_hessian`], so no shape check here.
fn symmetrize(hess: &mut Hessian) {
    for i in 0..hess.nrows() {
        for j in 0..i {
            let avg = 0.5 * (hess[[i, j]] + hess[[j, i]]);
            hess[[i, j]] = avg;
            hess[[j, i]] = avg;
        }
    }
}
