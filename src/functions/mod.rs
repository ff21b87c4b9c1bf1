//! functions — composable objective functions with derivative propagation.
//!
//! Purpose
//! -------
//! Provide an algebra of objective functions for iterative optimization.
//! Every objective implements one small trait, [`Function`], exposing
//! values and derivatives as recoverable results; proximable objectives
//! additionally implement [`Prox`]. Combinators build structured
//! objectives (sums, compositions) out of simple parts without the parts
//! knowing about each other.
//!
//! Key behaviors
//! -------------
//! - Define the two core contracts: [`Function`] for values, gradients,
//!   Hessians, and the vector-valued stacked surface, and [`Prox`] for
//!   proximal operators.
//! - Supply the concrete building blocks: quadratics ([`Quadratic`]),
//!   affine and constant maps ([`Affine`], [`Constant`]), norms
//!   ([`L1Norm`], [`SquaredL2Norm`]), and classification losses
//!   ([`LogisticLoss`], [`HingeLoss`]).
//! - Combine functions by summation ([`Separable`]) and composition
//!   ([`Composition`]), propagating derivatives through the chain rule
//!   on vertically stacked Jacobians ([`stacking`]).
//! - Build local second-order models of arbitrary smooth functions via
//!   [`quadratic_approx`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Derivatives a function cannot produce are reported as
//!   [`OptError::GradientNotImplemented`] /
//!   [`OptError::HessianNotImplemented`](crate::errors::OptError), never
//!   approximated silently; numeric fallbacks live in the solver layer.
//! - Shape disagreements between components surface as
//!   [`OptError::ShapeMismatch`](crate::errors::OptError) rather than
//!   `ndarray` panics.
//! - Scalar-valued and vector-valued surfaces are kept separate: the
//!   scalar accessors fail with `NotScalarValued` on multi-output
//!   functions instead of squeezing.
//!
//! Conventions
//! -----------
//! - Inputs are [`Point`](crate::types::Point) vectors; transposed
//!   Jacobians follow the `n × m` column-per-output convention of
//!   [`crate::types::Jacobian`].
//! - `prox(x, eta)` minimizes `eta·f(y) + 0.5·‖y − x‖²`; `eta` is the
//!   caller's step size and is assumed positive.
//! - Constructors validate shapes and domain constraints once;
//!   evaluation re-checks only the input dimension.
//!
//! Downstream usage
//! ----------------
//! - The solver layer (`crate::solver`) accepts any `&dyn Function` and
//!   drives it through Argmin with finite-difference fallbacks.
//! - Step-size policies (`crate::learning_rate`) consume objectives and
//!   gradients as callables built from these functions.
//!
//! Testing notes
//! -------------
//! - Each submodule unit-tests its own closed forms, rejections, and
//!   calculus against hand-computed or finite-difference values.
//! - Cross-combinator behavior (losses inside sums inside a solver run)
//!   is covered by the integration tests.

pub mod affine;
pub mod composition;
pub mod losses;
pub mod norms;
pub mod quadratic;
pub mod separable;
pub mod stacking;
pub mod traits;

// ---- Public surface --------------------------------------------------------

pub use self::affine::{Affine, Constant};
pub use self::composition::Composition;
pub use self::losses::{HingeLoss, LogisticLoss};
pub use self::norms::{L1Norm, SquaredL2Norm};
pub use self::quadratic::{quadratic_approx, Quadratic};
pub use self::separable::Separable;
pub use self::stacking::{stacked_jacobian, stacked_values};
pub use self::traits::{Function, Prox};

// ---- Prelude ---------------------------------------------------------------
//
// A single glob,
//
//     use funcopt::functions::prelude::*;
//
// pulls in the whole function algebra.

pub mod prelude {
    pub use super::affine::{Affine, Constant};
    pub use super::composition::Composition;
    pub use super::losses::{HingeLoss, LogisticLoss};
    pub use super::norms::{L1Norm, SquaredL2Norm};
    pub use super::quadratic::{quadratic_approx, Quadratic};
    pub use super::separable::Separable;
    pub use super::traits::{Function, Prox};
}
