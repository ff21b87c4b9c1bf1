//! Stacking rules shared by the combinators.
//!
//! Composition's chain rule and Separable's shape checks both need the
//! same two constructions over an ordered function collection:
//!
//! - [`stacked_values`]: output components of every function, concatenated
//!   in declared order into one vector.
//! - [`stacked_jacobian`]: the true Jacobian of the stacked map, built by
//!   stacking each function's component gradients as rows, in the same
//!   declared order.
//!
//! Keeping both here makes the ordering discipline a single, tested rule:
//! row block `i` of the stacked Jacobian always corresponds to the value
//! block `i` produced by the same function, so a chain-rule product of two
//! stacked Jacobians combines matching index ranges.
use ndarray::{Array1, Array2, s};

use crate::{
    errors::{OptError, OptResult},
    functions::traits::Function,
    types::Point,
};

/// Concatenate every function's output components at `x`, in order.
///
/// Scalar functions contribute one component; vector-valued functions
/// contribute `outputs` components.
///
/// # Errors
/// Propagates the first evaluation failure.
pub fn stacked_values(functions: &[Box<dyn Function>], x: &Point) -> OptResult<Array1<f64>> {
    let mut parts = Vec::with_capacity(functions.len());
    let mut total = 0;
    for f in functions {
        let v = f.evaluate_stacked(x)?;
        total += v.len();
        parts.push(v);
    }
    let mut out = Array1::zeros(total);
    let mut offset = 0;
    for v in &parts {
        out.slice_mut(s![offset..offset + v.len()]).assign(v);
        offset += v.len();
    }
    Ok(out)
}

/// Build the Jacobian of the stacked map at `x`.
///
/// The result is `m × n` for `m` total output components over all
/// `functions` and `n = x.len()`: row `k` is the gradient of stacked
/// component `k`, with row blocks appearing in the declared function
/// order. This is the transpose of the per-function
/// [`Function::jacobian_t`] blocks, reassembled.
///
/// # Errors
/// - Propagates the first derivative failure.
/// - [`OptError::ShapeMismatch`] if any function's transposed Jacobian
///   does not have `n` rows.
pub fn stacked_jacobian(functions: &[Box<dyn Function>], x: &Point) -> OptResult<Array2<f64>> {
    let n = x.len();
    let mut blocks = Vec::with_capacity(functions.len());
    let mut rows = 0;
    for f in functions {
        let jt = f.jacobian_t(x)?;
        if jt.nrows() != n {
            return Err(OptError::ShapeMismatch {
                what: "stacked Jacobian block rows",
                expected: n,
                found: jt.nrows(),
            });
        }
        rows += jt.ncols();
        blocks.push(jt);
    }
    let mut out = Array2::zeros((rows, n));
    let mut offset = 0;
    for jt in &blocks {
        let m = jt.ncols();
        out.slice_mut(s![offset..offset + m, ..]).assign(&jt.t());
        offset += m;
    }
    Ok(out)
}
