//! Affine maps and constant objectives.
//!
//! [`Affine`] is the only built-in function that is natively vector-valued:
//! its scalar surface ([`Function::evaluate`] / [`Function::gradient`]) is
//! restricted to the single-output case, while the stacked surface
//! ([`Function::evaluate_stacked`] / [`Function::jacobian_t`]) serves any
//! output count. Composition pipelines consume the stacked surface, which
//! is why the restriction is an error and not a silent squeeze.
//!
//! [`Constant`] ignores its input entirely; its proximal operator is the
//! identity.
use ndarray::{Array1, Array2};

use crate::{
    errors::{OptError, OptResult},
    functions::traits::{Function, Prox},
    types::{Grad, Hessian, Jacobian, Point, Scalar},
    validation::validate_value,
};

/// `f(x) = A·x + b` with `A.nrows()` outputs.
///
/// Scalar-valued exactly when `A` has one row; the scalar accessors report
/// [`OptError::NotScalarValued`] otherwise. The Hessian of every output is
/// the zero matrix, so [`Function::hessian`] returns zeros for any output
/// count rather than failing.
#[derive(Debug, Clone, PartialEq)]
pub struct Affine {
    pub a: Array2<f64>,
    pub b: Array1<f64>,
}

impl Affine {
    /// Construct an affine map, checking that the offset matches the row
    /// count of `a`.
    ///
    /// # Errors
    /// [`OptError::ShapeMismatch`] if `b.len() != a.nrows()`.
    pub fn new(a: Array2<f64>, b: Array1<f64>) -> OptResult<Self> {
        if b.len() != a.nrows() {
            return Err(OptError::ShapeMismatch {
                what: "affine offset",
                expected: a.nrows(),
                found: b.len(),
            });
        }
        Ok(Self { a, b })
    }

    fn check_dim(&self, x: &Point) -> OptResult<()> {
        if x.len() != self.a.ncols() {
            return Err(OptError::ShapeMismatch {
                what: "affine input point",
                expected: self.a.ncols(),
                found: x.len(),
            });
        }
        Ok(())
    }

    fn check_scalar(&self) -> OptResult<()> {
        if self.a.nrows() != 1 {
            return Err(OptError::NotScalarValued {
                outputs: self.a.nrows(),
            });
        }
        Ok(())
    }
}

impl Function for Affine {
    fn evaluate(&self, x: &Point) -> OptResult<Scalar> {
        self.check_dim(x)?;
        self.check_scalar()?;
        Ok(self.a.row(0).dot(x) + self.b[0])
    }

    fn gradient(&self, x: &Point) -> OptResult<Grad> {
        self.check_dim(x)?;
        self.check_scalar()?;
        Ok(self.a.row(0).to_owned())
    }

    fn hessian(&self, x: &Point) -> OptResult<Hessian> {
        self.check_dim(x)?;
        Ok(Array2::zeros((self.a.ncols(), self.a.ncols())))
    }

    fn evaluate_stacked(&self, x: &Point) -> OptResult<Array1<f64>> {
        self.check_dim(x)?;
        Ok(self.a.dot(x) + &self.b)
    }

    fn jacobian_t(&self, x: &Point) -> OptResult<Jacobian> {
        self.check_dim(x)?;
        Ok(self.a.t().to_owned())
    }

    fn outputs(&self, _input_dim: usize) -> usize {
        self.a.nrows()
    }
}

/// `f(x) = c` for every `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constant {
    pub c: f64,
}

impl Constant {
    /// Construct a constant objective.
    ///
    /// # Errors
    /// [`OptError::NonFiniteValue`] if `c` is NaN or infinite.
    pub fn new(c: f64) -> OptResult<Self> {
        validate_value(c)?;
        Ok(Self { c })
    }
}

impl Function for Constant {
    fn evaluate(&self, _x: &Point) -> OptResult<Scalar> {
        Ok(self.c)
    }

    fn gradient(&self, x: &Point) -> OptResult<Grad> {
        Ok(Array1::zeros(x.len()))
    }

    fn hessian(&self, x: &Point) -> OptResult<Hessian> {
        Ok(Array2::zeros((x.len(), x.len())))
    }
}

impl Prox for Constant {
    /// `eta·c` does not depend on `y`, so the prox point is `x` itself.
    fn prox(&self, x: &Point, _eta: f64) -> OptResult<Point> {
        Ok(x.clone())
    }
}

#[cfg(test)]
mod tests {
    //! Scope
    //! -----
    //! These tests cover the scalar/stacked split of the affine map, its
    //! transposed-Jacobian contract, and the trivial calculus of constants.
    //! They intentionally DO NOT cover composition of affine maps; the
    //! composition tests own that.
    use approx::assert_abs_diff_eq;
    use ndarray::{arr1, arr2};

    use super::*;

    fn two_by_three() -> Affine {
        Affine::new(
            arr2(&[[1.0, 2.0, 0.0], [0.0, -1.0, 3.0]]),
            arr1(&[0.5, -0.5]),
        )
        .unwrap()
    }

    #[test]
    fn scalar_affine_evaluates_and_differentiates() {
        let f = Affine::new(arr2(&[[2.0, -1.0]]), arr1(&[3.0])).unwrap();
        let x = arr1(&[1.0, 4.0]);

        // 2·1 − 1·4 + 3 = 1.
        assert_abs_diff_eq!(f.evaluate(&x).unwrap(), 1.0, epsilon = 1e-12);
        assert_eq!(f.gradient(&x).unwrap(), arr1(&[2.0, -1.0]));
        assert_eq!(f.hessian(&x).unwrap(), Array2::zeros((2, 2)));
        assert_eq!(f.outputs(2), 1);
    }

    #[test]
    fn vector_affine_rejects_the_scalar_surface() {
        let f = two_by_three();
        let x = arr1(&[1.0, 1.0, 1.0]);

        assert_eq!(f.evaluate(&x), Err(OptError::NotScalarValued { outputs: 2 }));
        assert_eq!(f.gradient(&x), Err(OptError::NotScalarValued { outputs: 2 }));
    }

    #[test]
    fn stacked_surface_matches_the_matrix_algebra() {
        let f = two_by_three();
        let x = arr1(&[1.0, 1.0, 1.0]);

        // A·x + b = [3, 2] + [0.5, -0.5].
        assert_eq!(f.evaluate_stacked(&x).unwrap(), arr1(&[3.5, 1.5]));
        assert_eq!(f.jacobian_t(&x).unwrap(), f.a.t().to_owned());
        assert_eq!(f.outputs(3), 2);
    }

    #[test]
    fn affine_rejects_misshapen_inputs() {
        let f = two_by_three();

        assert!(matches!(
            f.evaluate_stacked(&arr1(&[1.0, 1.0])),
            Err(OptError::ShapeMismatch { expected: 3, found: 2, .. })
        ));
        assert!(matches!(
            Affine::new(arr2(&[[1.0, 0.0]]), arr1(&[1.0, 2.0])),
            Err(OptError::ShapeMismatch { expected: 1, found: 2, .. })
        ));
    }

    #[test]
    fn constant_has_flat_calculus_and_identity_prox() {
        let f = Constant::new(4.25).unwrap();
        let x = arr1(&[1.0, -2.0, 0.0]);

        assert_eq!(f.evaluate(&x).unwrap(), 4.25);
        assert_eq!(f.gradient(&x).unwrap(), arr1(&[0.0, 0.0, 0.0]));
        assert_eq!(f.hessian(&x).unwrap(), Array2::zeros((3, 3)));
        assert_eq!(f.prox(&x, 10.0).unwrap(), x);
    }

    #[test]
    fn constant_rejects_non_finite_values() {
        assert!(matches!(
            Constant::new(f64::NAN),
            Err(OptError::NonFiniteValue { .. })
        ));
    }
}
