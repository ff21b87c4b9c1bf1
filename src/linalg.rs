//! linalg — dense linear solves on `ndarray` data via `nalgebra`.
//!
//! Purpose
//! -------
//! Provide the two solve policies the function algebra needs and keep the
//! `ndarray` ↔ `nalgebra` conversion in one place:
//!
//! - [`solve`]: exact LU solve of a square system, failing on singular
//!   matrices. Backs [`crate::functions::Quadratic::solution`].
//! - [`solve_least_squares`]: SVD-based least-squares solve that tolerates
//!   singular or rectangular systems and returns the minimum-norm
//!   solution. Backs the proximal operator of
//!   [`crate::functions::Quadratic`].
//!
//! Invariants & assumptions
//! ------------------------
//! - All public surfaces take and return `ndarray` containers; `nalgebra`
//!   types never escape this module.
//! - Singular values with magnitude at most [`LSTSQ_EPS`] are treated as
//!   zero when forming the pseudoinverse solution.
//!
//! Testing notes
//! -------------
//! - Unit tests cover the exact-solve happy path, singular rejection, and
//!   minimum-norm behavior of the least-squares path on singular and
//!   rectangular systems.
use nalgebra::{DMatrix, DVector};
use ndarray::{Array1, Array2};

use crate::errors::{OptError, OptResult};

/// Truncation threshold for singular values in the least-squares solve.
///
/// Singular values at or below this magnitude are treated as zero, which
/// turns the SVD solve into a pseudoinverse application and keeps
/// near-singular systems from amplifying noise.
pub const LSTSQ_EPS: f64 = 1e-12;

/// Solve the square linear system `A·x = b` by LU decomposition.
///
/// # Parameters
/// - `a`: square `n × n` coefficient matrix.
/// - `b`: right-hand side of length `n`.
///
/// # Returns
/// The unique solution `x` when `A` is nonsingular.
///
/// # Errors
/// - [`OptError::MatrixNotSquare`] if `a` is not square.
/// - [`OptError::ShapeMismatch`] if `b` does not match `a`'s dimension.
/// - [`OptError::SingularSystem`] if the LU factorization finds no
///   solution (singular `A`).
pub fn solve(a: &Array2<f64>, b: &Array1<f64>) -> OptResult<Array1<f64>> {
    if a.nrows() != a.ncols() {
        return Err(OptError::MatrixNotSquare { rows: a.nrows(), cols: a.ncols() });
    }
    if b.len() != a.nrows() {
        return Err(OptError::ShapeMismatch {
            what: "linear system right-hand side",
            expected: a.nrows(),
            found: b.len(),
        });
    }
    let lu = to_dmatrix(a).lu();
    match lu.solve(&to_dvector(b)) {
        Some(x) => Ok(from_dvector(&x)),
        None => Err(OptError::SingularSystem { dim: a.nrows() }),
    }
}

/// Solve `A·x ≈ b` in the least-squares sense via SVD.
///
/// Accepts rectangular and singular systems; small singular values are
/// truncated at [`LSTSQ_EPS`], so the result is the minimum-norm
/// least-squares solution (the pseudoinverse applied to `b`).
///
/// # Parameters
/// - `a`: `m × n` coefficient matrix.
/// - `b`: right-hand side of length `m`.
///
/// # Returns
/// The minimum-norm minimizer of `‖A·x − b‖²`, length `n`.
///
/// # Errors
/// - [`OptError::ShapeMismatch`] if `b` does not match `a`'s row count.
/// - [`OptError::LeastSquaresFailed`] if the SVD backend reports a
///   breakdown (it cannot for the full `U`/`V` computation used here, but
///   the contract is surfaced rather than unwrapped).
pub fn solve_least_squares(a: &Array2<f64>, b: &Array1<f64>) -> OptResult<Array1<f64>> {
    if b.len() != a.nrows() {
        return Err(OptError::ShapeMismatch {
            what: "least-squares right-hand side",
            expected: a.nrows(),
            found: b.len(),
        });
    }
    let svd = to_dmatrix(a).svd(true, true);
    match svd.solve(&to_dvector(b), LSTSQ_EPS) {
        Ok(x) => Ok(from_dvector(&x)),
        Err(reason) => Err(OptError::LeastSquaresFailed { reason }),
    }
}

// ---- Conversion helpers ----

/// Copy an `ndarray` matrix into a `nalgebra::DMatrix`.
///
/// The copy proceeds column by column, matching the internal storage of
/// `DMatrix` (column-major).
fn to_dmatrix(a: &Array2<f64>) -> DMatrix<f64> {
    let mut out = DMatrix::<f64>::zeros(a.nrows(), a.ncols());
    for j in 0..a.ncols() {
        for i in 0..a.nrows() {
            out[(i, j)] = a[[i, j]];
        }
    }
    out
}

fn to_dvector(v: &Array1<f64>) -> DVector<f64> {
    DVector::from_iterator(v.len(), v.iter().copied())
}

fn from_dvector(v: &DVector<f64>) -> Array1<f64> {
    Array1::from_iter(v.iter().copied())
}
