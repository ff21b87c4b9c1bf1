//! Core capability contracts of the function algebra.
//!
//! - [`Function`]: value and derivative surface every objective implements.
//! - [`Prox`]: proximal-operator capability, implemented independently by
//!   the variants that support it.
//!
//! Shape contract
//! --------------
//! The algebra distinguishes scalar-valued and vector-valued functions
//! explicitly instead of squeezing singleton dimensions:
//!
//! - `evaluate` / `gradient` / `hessian` are the **scalar** surface: a
//!   function with one output component returns `f64` / length-`n` vector /
//!   `n × n` matrix. Calling them on a vector-valued function fails with
//!   [`OptError::NotScalarValued`].
//! - `evaluate_stacked` / `jacobian_t` are the **stacked** surface: output
//!   components concatenated into a length-`m` vector, and the transposed
//!   Jacobian `n × m` whose column `j` is component `j`'s gradient. For
//!   scalar functions the provided defaults wrap the scalar surface
//!   (length-1 vector, single-column matrix).
//!
//! Combinators consume the stacked surface so that chain-rule bookkeeping
//! is explicit; solvers consume the scalar surface.
use ndarray::{Array1, Axis};

use crate::{
    errors::{OptError, OptResult},
    types::{Grad, Hessian, Jacobian, Point, Scalar},
};

/// An objective function over dense `f64` vectors.
///
/// Implementors own whatever coefficients define them; instances share no
/// mutable state and every method is pure.
///
/// Required:
/// - `evaluate(&Point) -> OptResult<Scalar>`: the value at `x`.
///   Vector-valued implementors return [`OptError::NotScalarValued`] here
///   and override the stacked surface instead.
///
/// Optional:
/// - `gradient(&Point) -> OptResult<Grad>`: first derivative. The default
///   fails with [`OptError::GradientNotImplemented`] for functions without
///   a closed-form derivative.
/// - `hessian(&Point) -> OptResult<Hessian>`: second derivative. The
///   default fails with [`OptError::HessianNotImplemented`]; variants with
///   constant curvature (quadratic, affine) override it.
/// - `evaluate_stacked` / `jacobian_t` / `outputs`: the stacked surface,
///   overridden by vector-valued implementors (see module docs).
pub trait Function {
    // Required methods
    fn evaluate(&self, x: &Point) -> OptResult<Scalar>;

    // Optional methods
    fn gradient(&self, _x: &Point) -> OptResult<Grad> {
        Err(OptError::GradientNotImplemented)
    }

    fn hessian(&self, _x: &Point) -> OptResult<Hessian> {
        Err(OptError::HessianNotImplemented)
    }

    /// Output components at `x`, concatenated in declared order.
    ///
    /// Length 1 for scalar-valued functions; the default wraps
    /// [`Function::evaluate`].
    fn evaluate_stacked(&self, x: &Point) -> OptResult<Array1<f64>> {
        Ok(Array1::from_elem(1, self.evaluate(x)?))
    }

    /// Transposed Jacobian at `x`: `n × m`, column `j` holding the gradient
    /// of output component `j`.
    ///
    /// The default wraps [`Function::gradient`] as a single column.
    fn jacobian_t(&self, x: &Point) -> OptResult<Jacobian> {
        Ok(self.gradient(x)?.insert_axis(Axis(1)))
    }

    /// Number of output components for an input of dimension `input_dim`.
    fn outputs(&self, _input_dim: usize) -> usize {
        1
    }
}

/// Proximal-operator capability.
///
/// `prox(x, eta)` returns `argmin_y eta·f(y) + 0.5·‖y − x‖²` and must be
/// mathematically consistent with the same instance's `evaluate`. `eta`
/// must be positive; behavior for non-positive `eta` is unspecified and
/// deliberately not validated.
pub trait Prox {
    fn prox(&self, x: &Point, eta: f64) -> OptResult<Point>;
}

#[cfg(test)]
mod tests {
    //! Scope
    //! -----
    //! These tests cover the provided trait defaults: the stacked wrappers
    //! around a scalar implementor and the NotImplemented derivative
    //! fallbacks. They intentionally DO NOT cover concrete variants; each
    //! variant module carries its own conformance tests.
    use ndarray::arr1;

    use super::*;

    /// f(x) = ‖x‖² with an analytic gradient and no Hessian override.
    struct SumOfSquares;

    impl Function for SumOfSquares {
        fn evaluate(&self, x: &Point) -> OptResult<Scalar> {
            Ok(x.dot(x))
        }

        fn gradient(&self, x: &Point) -> OptResult<Grad> {
            Ok(2.0 * x)
        }
    }

    /// Value-only implementor; exercises every derivative default.
    struct ValueOnly;

    impl Function for ValueOnly {
        fn evaluate(&self, x: &Point) -> OptResult<Scalar> {
            Ok(x.sum())
        }
    }

    #[test]
    fn stacked_defaults_wrap_the_scalar_surface() {
        let f = SumOfSquares;
        let x = arr1(&[1.0, 2.0]);

        let stacked = f.evaluate_stacked(&x).unwrap();
        assert_eq!(stacked, arr1(&[5.0]));

        let jt = f.jacobian_t(&x).unwrap();
        assert_eq!(jt.dim(), (2, 1));
        assert_eq!(jt.column(0).to_owned(), arr1(&[2.0, 4.0]));

        assert_eq!(f.outputs(2), 1);
    }

    #[test]
    fn derivative_defaults_signal_not_implemented() {
        let f = ValueOnly;
        let x = arr1(&[1.0]);

        assert_eq!(f.gradient(&x), Err(OptError::GradientNotImplemented));
        assert_eq!(f.jacobian_t(&x), Err(OptError::GradientNotImplemented));
        assert_eq!(f.hessian(&x), Err(OptError::HessianNotImplemented));
    }

    #[test]
    fn trait_objects_allow_heterogeneous_collections() {
        let fs: Vec<Box<dyn Function>> = vec![Box::new(SumOfSquares), Box::new(ValueOnly)];
        let x = arr1(&[3.0, 4.0]);

        let values: Vec<f64> = fs.iter().map(|f| f.evaluate(&x).unwrap()).collect();
        assert_eq!(values, vec![25.0, 7.0]);
    }
}
