//! Function composition with the chain rule on the stacked surface.
//!
//! Either side of the composition is a list of functions treated as one
//! vertically stacked map (see [`crate::functions::stacking`]): the inner
//! list maps `R^n` to `R^m` with `m` the sum of component output counts,
//! and the outer list consumes that `m`-vector. Derivatives follow the
//! chain rule on true Jacobians and are transposed once at the end, so
//! the scalar case degenerates to the familiar `J_innerᵀ·∇outer`.
//!
//! No second-order rule is provided; the Hessian of a composition stays
//! [`OptError::HessianNotImplemented`].
use ndarray::Array1;

use crate::{
    errors::{OptError, OptResult},
    functions::{
        stacking::{stacked_jacobian, stacked_values},
        traits::Function,
    },
    types::{Grad, Jacobian, Point, Scalar},
};

/// `f(x) = outer(inner(x))` over stacked function lists.
pub struct Composition {
    outer: Vec<Box<dyn Function>>,
    inner: Vec<Box<dyn Function>>,
}

impl Composition {
    /// Compose two stacked lists.
    ///
    /// # Errors
    /// [`OptError::EmptyCollection`] if either list is empty.
    pub fn new(
        outer: Vec<Box<dyn Function>>,
        inner: Vec<Box<dyn Function>>,
    ) -> OptResult<Self> {
        if outer.is_empty() {
            return Err(OptError::EmptyCollection {
                what: "Composition outer",
            });
        }
        if inner.is_empty() {
            return Err(OptError::EmptyCollection {
                what: "Composition inner",
            });
        }
        Ok(Self { outer, inner })
    }

    /// Compose one function with another, no stacking involved.
    pub fn single(outer: Box<dyn Function>, inner: Box<dyn Function>) -> Self {
        Self {
            outer: vec![outer],
            inner: vec![inner],
        }
    }

    /// The outer stacked list.
    pub fn outer(&self) -> &[Box<dyn Function>] {
        &self.outer
    }

    /// The inner stacked list.
    pub fn inner(&self) -> &[Box<dyn Function>] {
        &self.inner
    }
}

impl Function for Composition {
    fn evaluate(&self, x: &Point) -> OptResult<Scalar> {
        let stacked = self.evaluate_stacked(x)?;
        if stacked.len() != 1 {
            return Err(OptError::NotScalarValued {
                outputs: stacked.len(),
            });
        }
        Ok(stacked[0])
    }

    fn gradient(&self, x: &Point) -> OptResult<Grad> {
        let jt = self.jacobian_t(x)?;
        if jt.ncols() != 1 {
            return Err(OptError::NotScalarValued {
                outputs: jt.ncols(),
            });
        }
        Ok(jt.column(0).to_owned())
    }

    fn evaluate_stacked(&self, x: &Point) -> OptResult<Array1<f64>> {
        let mid = stacked_values(&self.inner, x)?;
        stacked_values(&self.outer, &mid)
    }

    fn jacobian_t(&self, x: &Point) -> OptResult<Jacobian> {
        let mid = stacked_values(&self.inner, x)?;
        let outer_jac = stacked_jacobian(&self.outer, &mid)?;
        let inner_jac = stacked_jacobian(&self.inner, x)?;
        // Output counts reported by values and Jacobians agree for every
        // well-formed component; the check guards ill-formed ones.
        if outer_jac.ncols() != inner_jac.nrows() {
            return Err(OptError::ShapeMismatch {
                what: "composition chain dimensions",
                expected: inner_jac.nrows(),
                found: outer_jac.ncols(),
            });
        }
        Ok(outer_jac.dot(&inner_jac).reversed_axes())
    }

    fn outputs(&self, input_dim: usize) -> usize {
        let mid: usize = self.inner.iter().map(|f| f.outputs(input_dim)).sum();
        self.outer.iter().map(|f| f.outputs(mid)).sum()
    }
}

#[cfg(test)]
mod tests {
    //! Scope
    //! -----
    //! These tests cover the chain rule against hand-computed matrix
    //! products, stacking of scalar components into a vector-valued inner
    //! map, and the scalar-surface and emptiness rejections. They
    //! intentionally DO NOT cover second-order behavior; compositions
    //! have none.
    use approx::assert_abs_diff_eq;
    use ndarray::{arr1, arr2};

    use super::*;
    use crate::functions::{affine::Affine, quadratic::Quadratic};

    #[test]
    fn composed_affine_maps_differentiate_to_the_matrix_product() {
        // f(x) = A·(B·x + c) + d with a single-row A is scalar.
        let inner = Affine::new(arr2(&[[1.0, 2.0], [0.0, 1.0]]), arr1(&[0.0, 1.0])).unwrap();
        let outer = Affine::new(arr2(&[[3.0, -1.0]]), arr1(&[0.5])).unwrap();
        let f = Composition::single(Box::new(outer), Box::new(inner));
        let x = arr1(&[1.0, 1.0]);

        // B·x + c = [3, 2]; 3·3 − 1·2 + 0.5 = 7.5; ∇f = A·B = [3, 5].
        assert_abs_diff_eq!(f.evaluate(&x).unwrap(), 7.5, epsilon = 1e-12);
        assert_abs_diff_eq!(f.gradient(&x).unwrap(), arr1(&[3.0, 5.0]), epsilon = 1e-12);
        assert_eq!(f.outputs(2), 1);
    }

    #[test]
    fn stacked_jacobian_is_the_transposed_chain_product() {
        let b = arr2(&[[1.0, -1.0], [2.0, 0.0]]);
        let a = arr2(&[[0.0, 1.0], [1.0, 1.0]]);
        let inner = Affine::new(b.clone(), arr1(&[0.0, 0.0])).unwrap();
        let outer = Affine::new(a.clone(), arr1(&[0.0, 0.0])).unwrap();
        let f = Composition::single(Box::new(outer), Box::new(inner));

        let jt = f.jacobian_t(&arr1(&[0.3, 0.7])).unwrap();

        assert_abs_diff_eq!(jt, a.dot(&b).reversed_axes(), epsilon = 1e-12);
        assert_eq!(f.outputs(2), 2);
    }

    #[test]
    fn inner_lists_stack_scalar_components_into_a_vector() {
        // inner = (x₀ + 2·x₁, 3·x₀ − x₁), outer = 0.5·‖y‖².
        let h1 = Affine::new(arr2(&[[1.0, 2.0]]), arr1(&[0.0])).unwrap();
        let h2 = Affine::new(arr2(&[[3.0, -1.0]]), arr1(&[0.0])).unwrap();
        let outer = Quadratic::new(arr2(&[[1.0, 0.0], [0.0, 1.0]]), arr1(&[0.0, 0.0]), 0.0).unwrap();
        let f = Composition::new(
            vec![Box::new(outer)],
            vec![Box::new(h1), Box::new(h2)],
        )
        .unwrap();
        let x = arr1(&[1.0, 1.0]);

        // y = (3, 2): value 6.5, gradient J_innerᵀ·y = (9, 4).
        assert_abs_diff_eq!(f.evaluate(&x).unwrap(), 6.5, epsilon = 1e-12);
        assert_abs_diff_eq!(f.gradient(&x).unwrap(), arr1(&[9.0, 4.0]), epsilon = 1e-12);
    }

    #[test]
    fn multi_output_compositions_reject_the_scalar_surface() {
        let inner = Affine::new(arr2(&[[1.0, 0.0], [0.0, 1.0]]), arr1(&[0.0, 0.0])).unwrap();
        let outer = Affine::new(arr2(&[[1.0, 0.0], [0.0, 1.0]]), arr1(&[0.0, 0.0])).unwrap();
        let f = Composition::single(Box::new(outer), Box::new(inner));

        assert_eq!(
            f.evaluate(&arr1(&[1.0, 1.0])),
            Err(OptError::NotScalarValued { outputs: 2 })
        );
        assert_eq!(
            f.hessian(&arr1(&[1.0, 1.0])),
            Err(OptError::HessianNotImplemented)
        );
    }

    #[test]
    fn incompatible_chain_dimensions_are_rejected() {
        // inner produces 2 outputs, outer consumes 3 inputs.
        let inner = Affine::new(arr2(&[[1.0, 0.0], [0.0, 1.0]]), arr1(&[0.0, 0.0])).unwrap();
        let outer = Affine::new(arr2(&[[1.0, 1.0, 1.0]]), arr1(&[0.0])).unwrap();
        let f = Composition::single(Box::new(outer), Box::new(inner));

        assert!(matches!(
            f.evaluate(&arr1(&[1.0, 1.0])),
            Err(OptError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            f.gradient(&arr1(&[1.0, 1.0])),
            Err(OptError::ShapeMismatch { .. })
        ));
    }

    #[test]
    fn empty_sides_are_rejected_at_construction() {
        let id = Affine::new(arr2(&[[1.0]]), arr1(&[0.0])).unwrap();

        assert!(matches!(
            Composition::new(Vec::new(), vec![Box::new(id.clone())]),
            Err(OptError::EmptyCollection { what: "Composition outer" })
        ));
        assert!(matches!(
            Composition::new(vec![Box::new(id)], Vec::new()),
            Err(OptError::EmptyCollection { what: "Composition inner" })
        ));
    }
}
