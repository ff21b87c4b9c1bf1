//! Pointwise sums of functions over a shared domain.
//!
//! [`Separable`] owns its components as trait objects, so heterogeneous
//! terms (a data loss plus a regularizer plus a constant) combine into a
//! single [`Function`]. Derivatives distribute over the sum; a component
//! that cannot produce one fails the whole sum, since a partial gradient
//! is not a gradient.
use ndarray::{Array1, Array2};

use crate::{
    errors::{OptError, OptResult},
    functions::traits::Function,
    types::{Grad, Hessian, Jacobian, Point, Scalar},
};

/// `f(x) = Σᵢ fᵢ(x)` over components sharing the input dimension.
///
/// Vector-valued components are summed elementwise on the stacked surface
/// and must agree on their output count; the scalar surface additionally
/// requires every component to be scalar-valued.
pub struct Separable {
    functions: Vec<Box<dyn Function>>,
}

impl Separable {
    /// Construct the sum.
    ///
    /// # Errors
    /// [`OptError::EmptyCollection`] if `functions` is empty; an empty sum
    /// has no defined output shape.
    pub fn new(functions: Vec<Box<dyn Function>>) -> OptResult<Self> {
        if functions.is_empty() {
            return Err(OptError::EmptyCollection { what: "Separable" });
        }
        Ok(Self { functions })
    }

    /// The component functions, in summation order.
    pub fn functions(&self) -> &[Box<dyn Function>] {
        &self.functions
    }
}

impl Function for Separable {
    fn evaluate(&self, x: &Point) -> OptResult<Scalar> {
        let mut total = 0.0;
        for f in &self.functions {
            total += f.evaluate(x)?;
        }
        Ok(total)
    }

    fn gradient(&self, x: &Point) -> OptResult<Grad> {
        let mut total = Array1::zeros(x.len());
        for f in &self.functions {
            let g = f.gradient(x)?;
            if g.len() != x.len() {
                return Err(OptError::ShapeMismatch {
                    what: "summed component gradient",
                    expected: x.len(),
                    found: g.len(),
                });
            }
            total += &g;
        }
        Ok(total)
    }

    fn hessian(&self, x: &Point) -> OptResult<Hessian> {
        let mut total = Array2::zeros((x.len(), x.len()));
        for f in &self.functions {
            let h = f.hessian(x)?;
            if h.dim() != (x.len(), x.len()) {
                return Err(OptError::HessianDimMismatch {
                    expected: x.len(),
                    found: h.dim(),
                });
            }
            total += &h;
        }
        Ok(total)
    }

    fn evaluate_stacked(&self, x: &Point) -> OptResult<Array1<f64>> {
        let mut total: Option<Array1<f64>> = None;
        for f in &self.functions {
            let v = f.evaluate_stacked(x)?;
            total = Some(match total {
                None => v,
                Some(acc) => {
                    if v.len() != acc.len() {
                        return Err(OptError::ShapeMismatch {
                            what: "summed component outputs",
                            expected: acc.len(),
                            found: v.len(),
                        });
                    }
                    acc + &v
                }
            });
        }
        total.ok_or(OptError::EmptyCollection { what: "Separable" })
    }

    fn jacobian_t(&self, x: &Point) -> OptResult<Jacobian> {
        let mut total: Option<Jacobian> = None;
        for f in &self.functions {
            let jt = f.jacobian_t(x)?;
            total = Some(match total {
                None => jt,
                Some(acc) => {
                    if jt.dim() != acc.dim() {
                        return Err(OptError::ShapeMismatch {
                            what: "summed component Jacobian columns",
                            expected: acc.ncols(),
                            found: jt.ncols(),
                        });
                    }
                    acc + &jt
                }
            });
        }
        total.ok_or(OptError::EmptyCollection { what: "Separable" })
    }

    fn outputs(&self, input_dim: usize) -> usize {
        self.functions
            .first()
            .map(|f| f.outputs(input_dim))
            .unwrap_or(1)
    }
}

#[cfg(test)]
mod tests {
    //! Scope
    //! -----
    //! These tests cover distribution of values and derivatives over the
    //! sum, elementwise summation of vector-valued components, and the
    //! empty/mismatch rejections. They intentionally DO NOT cover nesting
    //! sums inside compositions; the composition tests own that.
    use approx::assert_abs_diff_eq;
    use ndarray::{arr1, arr2};

    use super::*;
    use crate::functions::{
        affine::{Affine, Constant},
        quadratic::Quadratic,
    };

    fn quadratic_plus_constant() -> (Quadratic, Constant, Separable) {
        let q = Quadratic::new(arr2(&[[2.0, 0.0], [0.0, 4.0]]), arr1(&[1.0, -1.0]), 0.0).unwrap();
        let c = Constant::new(2.5).unwrap();
        let sum = Separable::new(vec![Box::new(q.clone()), Box::new(c)]).unwrap();
        (q, c, sum)
    }

    #[test]
    fn value_and_derivatives_distribute_over_the_sum() {
        let (q, c, sum) = quadratic_plus_constant();
        let x = arr1(&[0.5, -1.5]);

        assert_abs_diff_eq!(
            sum.evaluate(&x).unwrap(),
            q.evaluate(&x).unwrap() + c.evaluate(&x).unwrap(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            sum.gradient(&x).unwrap(),
            q.gradient(&x).unwrap(),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(sum.hessian(&x).unwrap(), q.a, epsilon = 1e-12);
    }

    #[test]
    fn vector_components_sum_elementwise() {
        let f = Affine::new(arr2(&[[1.0, 0.0], [0.0, 1.0]]), arr1(&[1.0, 2.0])).unwrap();
        let g = Affine::new(arr2(&[[0.0, 2.0], [3.0, 0.0]]), arr1(&[-1.0, 0.0])).unwrap();
        let sum = Separable::new(vec![Box::new(f), Box::new(g)]).unwrap();
        let x = arr1(&[1.0, 1.0]);

        // (A1 + A2)·x + (b1 + b2) = [3, 4] + [0, 2].
        assert_eq!(sum.evaluate_stacked(&x).unwrap(), arr1(&[3.0, 6.0]));
        assert_eq!(
            sum.jacobian_t(&x).unwrap(),
            arr2(&[[1.0, 3.0], [2.0, 1.0]])
        );
        assert_eq!(sum.outputs(2), 2);
    }

    #[test]
    fn scalar_surface_rejects_vector_components() {
        let f = Affine::new(arr2(&[[1.0, 0.0], [0.0, 1.0]]), arr1(&[0.0, 0.0])).unwrap();
        let sum = Separable::new(vec![Box::new(f)]).unwrap();

        assert_eq!(
            sum.evaluate(&arr1(&[1.0, 1.0])),
            Err(OptError::NotScalarValued { outputs: 2 })
        );
    }

    #[test]
    fn mismatched_component_outputs_are_rejected() {
        let one_output = Affine::new(arr2(&[[1.0, 0.0]]), arr1(&[0.0])).unwrap();
        let two_outputs = Affine::new(arr2(&[[1.0, 0.0], [0.0, 1.0]]), arr1(&[0.0, 0.0])).unwrap();
        let sum = Separable::new(vec![Box::new(one_output), Box::new(two_outputs)]).unwrap();

        assert!(matches!(
            sum.evaluate_stacked(&arr1(&[1.0, 1.0])),
            Err(OptError::ShapeMismatch { expected: 1, found: 2, .. })
        ));
    }

    #[test]
    fn empty_sums_are_rejected_at_construction() {
        assert!(matches!(
            Separable::new(Vec::new()),
            Err(OptError::EmptyCollection { what: "Separable" })
        ));
    }
}
