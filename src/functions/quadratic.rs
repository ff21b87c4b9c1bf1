//! Quadratic objectives and the local second-order model builder.
//!
//! [`Quadratic`] is the workhorse of the algebra: it carries its own
//! curvature, knows its unconstrained minimizer, and supports the proximal
//! operator, which makes it the natural output type for
//! [`quadratic_approx`].
//!
//! Solve policies (deliberately asymmetric):
//! - [`Quadratic::solution`] uses the exact LU solve and fails on singular
//!   systems.
//! - [`Quadratic::prox`] uses the least-squares solve and degrades to the
//!   minimum-norm solution instead of failing.
use ndarray::Array2;

use crate::{
    errors::{OptError, OptResult},
    functions::traits::{Function, Prox},
    linalg::{solve, solve_least_squares},
    types::{Grad, Hessian, Point, Scalar},
    validation::{validate_grad, validate_hessian, validate_value},
};

/// `f(x) = 0.5·xᵀAx + bᵀx + c` with symmetric `A`.
///
/// Symmetry of `A` is an assumption, not a validated invariant: the
/// gradient uses the symmetric form `Ax + b`, so an asymmetric `A` yields
/// the gradient of `0.5·xᵀ(A + Aᵀ)/2·x` instead. Construction validates
/// shapes and finiteness only.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadratic {
    pub a: Array2<f64>,
    pub b: Point,
    pub c: f64,
}

impl Quadratic {
    /// Construct a validated quadratic.
    ///
    /// # Errors
    /// - [`OptError::HessianDimMismatch`] if `a` is not `n × n` for
    ///   `n = b.len()`.
    /// - [`OptError::InvalidHessian`] / [`OptError::InvalidGradient`] /
    ///   [`OptError::NonFiniteValue`] for non-finite coefficients.
    pub fn new(a: Array2<f64>, b: Point, c: f64) -> OptResult<Self> {
        validate_hessian(&a, b.len())?;
        validate_grad(&b, b.len())?;
        validate_value(c)?;
        Ok(Self { a, b, c })
    }

    /// Domain dimension.
    pub fn dim(&self) -> usize {
        self.b.len()
    }

    /// Unconstrained minimizer: the solution of `A·x = −b`.
    ///
    /// # Errors
    /// [`OptError::SingularSystem`] if `A` has no LU solution.
    pub fn solution(&self) -> OptResult<Point> {
        solve(&self.a, &(-&self.b))
    }

    fn check_dim(&self, x: &Point) -> OptResult<()> {
        if x.len() != self.dim() {
            return Err(OptError::ShapeMismatch {
                what: "quadratic input point",
                expected: self.dim(),
                found: x.len(),
            });
        }
        Ok(())
    }
}

impl Function for Quadratic {
    fn evaluate(&self, x: &Point) -> OptResult<Scalar> {
        self.check_dim(x)?;
        Ok(0.5 * x.dot(&self.a.dot(x)) + self.b.dot(x) + self.c)
    }

    fn gradient(&self, x: &Point) -> OptResult<Grad> {
        self.check_dim(x)?;
        Ok(self.a.dot(x) + &self.b)
    }

    fn hessian(&self, x: &Point) -> OptResult<Hessian> {
        self.check_dim(x)?;
        Ok(self.a.clone())
    }
}

impl Prox for Quadratic {
    /// Solves `(I + eta·A)·y = x − eta·b` in the least-squares sense, so a
    /// singular or near-singular coefficient matrix yields the
    /// minimum-norm step instead of an error.
    fn prox(&self, x: &Point, eta: f64) -> OptResult<Point> {
        self.check_dim(x)?;
        let coeff = Array2::eye(self.dim()) + &(&self.a * eta);
        let rhs = x - &(&self.b * eta);
        solve_least_squares(&coeff, &rhs)
    }
}

/// Build the local second-order model of `f` around `x`.
///
/// Returns `Quadratic(A = f.hessian(x), b = f.gradient(x), c = f.evaluate(x))`.
/// The model's argument is the **displacement** `d` from the expansion
/// point: at `d = 0` its value and gradient reproduce `f`'s value and
/// gradient at `x` exactly (they are constructed from those very numbers),
/// and its [`Quadratic::solution`] is the Newton step `−H⁻¹·g`, to be added
/// to `x`. The model is only locally valid; callers rebuild it whenever
/// the iterate moves.
///
/// # Errors
/// Propagates any evaluation or derivative failure, in particular
/// [`OptError::HessianNotImplemented`] for functions without curvature.
pub fn quadratic_approx(f: &dyn Function, x: &Point) -> OptResult<Quadratic> {
    let c = f.evaluate(x)?;
    let g = f.gradient(x)?;
    let h = f.hessian(x)?;
    Quadratic::new(h, g, c)
}
