//! types — shared numeric aliases and solver wiring.
//!
//! Purpose
//! -------
//! Give the function algebra and the minimization glue one vocabulary for
//! numeric data. Every other module speaks in these aliases, so swapping
//! the array backend or the Argmin generics would touch this file rather
//! than the whole crate.
//!
//! Key behaviors
//! -------------
//! - Name the derivative surfaces once: `Point`, `Grad`, `Jacobian`,
//!   `Hessian`, and the plain `Scalar` objective value.
//! - Alias the counter map Argmin hands back after a run (`FnEvalMap`).
//! - Pair L-BFGS with each supported line search as a ready-made solver
//!   type over the `(Point, Grad, Scalar)` triple.
//!
//! Invariants & assumptions
//! ------------------------
//! - All vectors and matrices are `ndarray` containers over `f64`.
//! - `Scalar` is always a plain `f64` objective value; objectives are
//!   minimized directly, no sign conventions apply.
//! - The line-search aliases follow the three-parameter generic shape the
//!   pinned Argmin release expects.
//!
//! Conventions
//! -----------
//! - `Point` and `Grad` are treated conceptually as column vectors with
//!   length equal to the domain dimension.
//! - `Jacobian` is the transposed Jacobian `n × m`: column `j` holds the
//!   gradient of output component `j`. Scalar-valued functions have a
//!   single column.
//! - `Hessian` is square, `point.len() × point.len()`.
//! - `DEFAULT_LBFGS_MEM` is the history size used when the caller leaves
//!   `lbfgs_mem` unset on the run options.
//!
//! Downstream usage
//! ----------------
//! - Other modules import these aliases instead of referring directly to
//!   `ndarray` or Argmin generics.
//! - The [`crate::functions::Function`] trait uses [`Point`], [`Grad`],
//!   [`Jacobian`], and [`Hessian`] as its derivative surfaces.
//! - The builders in [`crate::solver::builders`] instantiate
//!   [`LbfgsHagerZhang`] / [`LbfgsMoreThuente`] according to the
//!   configured line search.
//!
//! Testing notes
//! -------------
//! - Nothing here is executable, so there is no unit-test module.
//! - Correctness is exercised indirectly by tests in the function and
//!   solver modules that operate on these aliases.
use std::collections::HashMap;

use argmin::solver::{
    linesearch::{HagerZhangLineSearch, MoreThuenteLineSearch},
    quasinewton::LBFGS,
};
use ndarray::{Array1, Array2};

/// Domain point `x` for function evaluation and optimization.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical input type
/// throughout the crate.
pub type Point = Array1<f64>;

/// Gradient vector `∇f(x)` of a scalar-valued function.
///
/// Alias for `ndarray::Array1<f64>`, matching the shape of `Point`.
pub type Grad = Array1<f64>;

/// Transposed Jacobian of a (possibly vector-valued) function.
///
/// Alias for `ndarray::Array2<f64>`; `n × m` for `n = point.len()` and
/// `m` output components. Column `j` is the gradient of component `j`.
pub type Jacobian = Array2<f64>;

/// Second-derivative matrix of a scalar-valued function.
///
/// Alias for `ndarray::Array2<f64>`; `n × n` for `n = point.len()`.
pub type Hessian = Array2<f64>;

/// Scalar objective value.
pub type Scalar = f64;

/// Per-operation evaluation counters from a finished solver run.
///
/// Keys are Argmin's counter names (`"cost_count"`, `"gradient_count"`,
/// ...), values the number of calls.
pub type FnEvalMap = HashMap<String, u64>;

/// History size (`m`) used for L-BFGS when none is configured.
pub const DEFAULT_LBFGS_MEM: usize = 7;

/// Hager–Zhang line search specialized to this crate's numeric types.
pub type HagerZhangLS = HagerZhangLineSearch<Point, Grad, Scalar>;

/// More–Thuente line search specialized to this crate's numeric types.
pub type MoreThuenteLS = MoreThuenteLineSearch<Point, Grad, Scalar>;

/// L-BFGS over `(Point, Grad, Scalar)` with Hager–Zhang steps.
pub type LbfgsHagerZhang = LBFGS<HagerZhangLS, Point, Grad, Scalar>;

/// L-BFGS over `(Point, Grad, Scalar)` with More–Thuente steps.
pub type LbfgsMoreThuente = LBFGS<MoreThuenteLS, Point, Grad, Scalar>;
