//! Validation helpers shared across the function algebra and the solver glue.
//!
//! One place for the consistency checks everything else leans on:
//!
//! - **Stopping thresholds**: [`verify_tol_grad`] and [`verify_tol_cost`]
//!   pass absent values through and insist present ones are finite and
//!   strictly positive.
//! - **Gradients**: [`validate_grad`] checks length against the point
//!   dimension and rejects NaN or infinite entries.
//! - **Hessians**: [`validate_hessian`] wants a square matrix of finite
//!   entries.
//! - **Points**: [`validate_point`] rejects non-finite input coordinates;
//!   [`validate_best_point`] unwraps and checks a solver's best estimate.
//! - **Objective values**: [`validate_value`] checks scalar outputs for
//!   finiteness.
//! - **Rate hyperparameters**: [`verify_rate_param`] enforces positive,
//!   finite policy settings.
//!
//! Every rejection carries the [`OptError`] variant matched to its cause, so
//! callers surface a concrete diagnosis rather than a generic failure.
use crate::{
    errors::{OptError, OptResult},
    types::{Grad, Hessian, Point},
};

/// Validate the optional gradient-norm tolerance.
///
/// `None` passes; it just means no gradient-based stopping rule. A present
/// value has to be finite and greater than zero.
///
/// # Errors
/// [`OptError::InvalidTolGrad`] when the value is NaN, infinite, or ≤ 0.
pub fn verify_tol_grad(tol: Option<f64>) -> OptResult<()> {
    if let Some(tol) = tol {
        if !tol.is_finite() {
            return Err(OptError::InvalidTolGrad {
                tol,
                reason: "Threshold must be a finite number.",
            });
        }
        if tol <= 0.0 {
            return Err(OptError::InvalidTolGrad {
                tol,
                reason: "Threshold must be strictly positive.",
            });
        }
    }
    Ok(())
}

/// Validate the optional cost-change tolerance (for convergence).
///
/// `None` passes; it just means no cost-based stopping rule. A present
/// value has to be finite and greater than zero.
///
/// # Errors
/// [`OptError::InvalidTolCost`] when the value is NaN, infinite, or ≤ 0.
pub fn verify_tol_cost(tol: Option<f64>) -> OptResult<()> {
    if let Some(tol) = tol {
        if !tol.is_finite() {
            return Err(OptError::InvalidTolCost {
                tol,
                reason: "Threshold must be a finite number.",
            });
        }
        if tol <= 0.0 {
            return Err(OptError::InvalidTolCost {
                tol,
                reason: "Threshold must be strictly positive.",
            });
        }
    }
    Ok(())
}

/// Validate a learning-rate hyperparameter.
///
/// The value must be **finite** and **strictly positive**; the policy
/// constructors call this for every scalar setting they accept.
///
/// # Errors
/// Returns [`OptError::InvalidRateParam`] naming the offending parameter.
pub fn verify_rate_param(name: &'static str, value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::InvalidRateParam {
            name,
            value,
            reason: "Parameter must be finite.",
        });
    }
    if value <= 0.0 {
        return Err(OptError::InvalidRateParam {
            name,
            value,
            reason: "Parameter must be positive.",
        });
    }
    Ok(())
}

/// Check a gradient's length and entries.
///
/// The vector must hold exactly `dim` entries, and each entry must be a
/// finite number.
///
/// # Errors
/// - [`OptError::GradientDimMismatch`] when the length is not `dim`.
/// - [`OptError::InvalidGradient`] carrying the index and value of the
///   first bad entry.
pub fn validate_grad(grad: &Grad, dim: usize) -> OptResult<()> {
    if grad.len() != dim {
        return Err(OptError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidGradient {
                index,
                value,
                reason: "Every entry must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate that all coordinates of an input point are finite.
///
/// # Errors
/// Returns [`OptError::InvalidPoint`] with the index and value of the first
/// non-finite coordinate.
pub fn validate_point(point: &Point) -> OptResult<()> {
    for (index, &value) in point.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidPoint { index, value });
        }
    }
    Ok(())
}

/// Validate and unwrap a solver's best point estimate.
///
/// The estimate must actually be present, and every coordinate must be
/// finite.
///
/// # Returns
/// The owned `Point` if valid.
///
/// # Errors
/// - [`OptError::MissingBestPoint`] if no vector was provided.
/// - [`OptError::InvalidBestPoint`] if any element is non-finite.
pub fn validate_best_point(best: Option<Point>) -> OptResult<Point> {
    match best {
        Some(p) => {
            for (index, &value) in p.iter().enumerate() {
                if !value.is_finite() {
                    return Err(OptError::InvalidBestPoint {
                        index,
                        value,
                        reason: "Best point coordinates must be finite.",
                    });
                }
            }
            Ok(p)
        }
        None => Err(OptError::MissingBestPoint),
    }
}

/// Validate that a scalar objective value is finite.
///
/// Sign does not matter; only NaN and infinities are rejected.
///
/// # Errors
/// Returns [`OptError::NonFiniteValue`] if the value is `NaN` or infinite.
pub fn validate_value(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteValue { value });
    }
    Ok(())
}

/// Check a Hessian's shape and entries.
///
/// The matrix must be `dim × dim`, and every entry must be a finite number.
///
/// # Errors
/// - [`OptError::HessianDimMismatch`] when the shape is not `dim × dim`.
/// - [`OptError::InvalidHessian`] carrying the row, column, and value of
///   the first bad entry.
pub fn validate_hessian(hessian: &Hessian, dim: usize) -> OptResult<()> {
    if hessian.nrows() != dim || hessian.ncols() != dim {
        return Err(OptError::HessianDimMismatch {
            expected: dim,
            found: (hessian.nrows(), hessian.ncols()),
        });
    }
    for ((i, j), &value) in hessian.indexed_iter() {
        if !value.is_finite() {
            return Err(OptError::InvalidHessian { row: i, col: j, value });
        }
    }
    Ok(())
}
