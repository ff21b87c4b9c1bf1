//! Norm objectives with closed-form proximal operators.
//!
//! [`L1Norm`] is the canonical nonsmooth regularizer; its prox is the
//! soft-threshold, which is where sparsity comes from in proximal gradient
//! methods. [`SquaredL2Norm`] wraps [`Quadratic`] so that
//! `0.5·‖A·x − b‖²` terms join the algebra without callers hand-expanding
//! the Gram matrix.
use ndarray::{Array1, Array2};

use crate::{
    errors::{OptError, OptResult},
    functions::{
        quadratic::Quadratic,
        traits::{Function, Prox},
    },
    types::{Grad, Hessian, Point, Scalar},
};

/// `f(x) = ‖x‖₁ = Σ|xᵢ|`.
///
/// The reported gradient is the minimum-norm subgradient: the sign vector
/// with `sign(0) = 0`. No Hessian exists anywhere, so the default
/// [`OptError::HessianNotImplemented`] is left in place.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct L1Norm;

impl Function for L1Norm {
    fn evaluate(&self, x: &Point) -> OptResult<Scalar> {
        Ok(x.mapv(f64::abs).sum())
    }

    fn gradient(&self, x: &Point) -> OptResult<Grad> {
        Ok(x.mapv(|v| {
            if v > 0.0 {
                1.0
            } else if v < 0.0 {
                -1.0
            } else {
                0.0
            }
        }))
    }
}

impl Prox for L1Norm {
    /// Soft-threshold: each coordinate moves `eta` toward zero and stops
    /// there.
    fn prox(&self, x: &Point, eta: f64) -> OptResult<Point> {
        Ok(x.mapv(|v| (v - eta).max(0.0) - (-v - eta).max(0.0)))
    }
}

/// `f(x) = 0.5·‖A·x − b‖²`, stored in expanded quadratic form.
///
/// The expansion is `0.5·xᵀ(AᵀA)x − (Aᵀb)ᵀx + 0.5·bᵀb`, so evaluation,
/// derivatives, and the prox all delegate to [`Quadratic`]. `AᵀA` is
/// positive semi-definite by construction; for rank-deficient `A` the
/// delegated [`Quadratic::solution`] fails while the prox still returns
/// the minimum-norm point.
#[derive(Debug, Clone, PartialEq)]
pub struct SquaredL2Norm {
    inner: Quadratic,
}

impl SquaredL2Norm {
    /// Expand `0.5·‖A·x − b‖²` into its quadratic form.
    ///
    /// # Errors
    /// [`OptError::ShapeMismatch`] if `b.len() != a.nrows()`.
    pub fn new(a: Array2<f64>, b: Array1<f64>) -> OptResult<Self> {
        if b.len() != a.nrows() {
            return Err(OptError::ShapeMismatch {
                what: "squared-norm offset",
                expected: a.nrows(),
                found: b.len(),
            });
        }
        let gram = a.t().dot(&a);
        let lin = -a.t().dot(&b);
        let offset = 0.5 * b.dot(&b);
        Ok(Self {
            inner: Quadratic::new(gram, lin, offset)?,
        })
    }

    /// `0.5·‖x‖²` on a `dim`-dimensional domain.
    pub fn identity(dim: usize) -> Self {
        Self {
            inner: Quadratic {
                a: Array2::eye(dim),
                b: Array1::zeros(dim),
                c: 0.0,
            },
        }
    }

    /// The expanded quadratic backing this norm.
    pub fn as_quadratic(&self) -> &Quadratic {
        &self.inner
    }
}

impl Function for SquaredL2Norm {
    fn evaluate(&self, x: &Point) -> OptResult<Scalar> {
        self.inner.evaluate(x)
    }

    fn gradient(&self, x: &Point) -> OptResult<Grad> {
        self.inner.gradient(x)
    }

    fn hessian(&self, x: &Point) -> OptResult<Hessian> {
        self.inner.hessian(x)
    }
}

impl Prox for SquaredL2Norm {
    fn prox(&self, x: &Point, eta: f64) -> OptResult<Point> {
        self.inner.prox(x, eta)
    }
}
