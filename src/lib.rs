//! funcopt — a composable algebra of objective functions with an
//! argmin-powered solver layer.
//!
//! Purpose
//! -------
//! Represent optimization objectives as first-class values: scalar and
//! vector-valued functions with optional analytic derivatives and proximal
//! operators, combinators that sum and compose them, local quadratic
//! models, and step-size policies for hand-rolled iterative schemes. A
//! high-level [`solver::minimize`] entry point runs L-BFGS on any function
//! in the algebra, falling back to finite differences when derivatives are
//! missing.
//!
//! Key behaviors
//! -------------
//! - [`functions`]: the [`Function`](functions::Function) and
//!   [`Prox`](functions::Prox) traits, concrete objectives (quadratics,
//!   affine maps, norms, classification losses), the
//!   [`Separable`](functions::Separable) sum and
//!   [`Composition`](functions::Composition) chain combinators, and the
//!   local second-order model builder.
//! - [`learning_rate`]: pluggable step-size policies (decreasing rates,
//!   backtracking line search, adaptive per-coordinate steps) behind the
//!   [`LearningRate`](learning_rate::LearningRate) trait.
//! - [`solver`]: the Argmin adapter, L-BFGS builders with Hager–Zhang and
//!   More–Thuente line searches, the shared runner, and the
//!   finite-difference derivative cascade.
//! - [`linalg`], [`stability`], [`validation`]: dense solves, numerically
//!   careful scalar kernels, and the shared input checks the rest of the
//!   crate leans on.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numeric data flows through the `ndarray` aliases in [`types`]
//!   ([`Point`](types::Point), [`Grad`](types::Grad),
//!   [`Hessian`](types::Hessian)); scalars are `f64`.
//! - Objectives are stated in minimization terms throughout; quantities
//!   that are naturally maximized must be negated before they enter the
//!   algebra.
//! - Fallible operations return [`OptResult`](errors::OptResult); the
//!   error type [`OptError`](errors::OptError) covers domain validation,
//!   derivative resolution, and backend failures.
//!
//! Conventions
//! -----------
//! - Derivatives are optional: `Function::gradient` and
//!   `Function::hessian` default to `GradientNotImplemented` /
//!   `HessianNotImplemented`, and the solver layer fills the gap
//!   numerically.
//! - Vector-valued functions report their output count via
//!   `Function::outputs` and expose stacked values and transposed
//!   Jacobians for composition.
//!
//! Downstream usage
//! ----------------
//! - Build objectives from the [`functions`] module, or implement
//!   [`Function`](functions::Function) directly, then either call
//!   [`solver::minimize`] or drive your own iteration with a
//!   [`learning_rate`] policy.
//! - Per-module preludes (`functions::prelude`, `learning_rate::prelude`,
//!   `solver::prelude`) import each surface in one line.
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each module and verify calculus identities,
//!   combinator algebra, validation rules, and policy behavior.
//! - Integration tests under `tests/` run full L-BFGS minimizations and a
//!   hand-rolled proximal-gradient loop over the public surface.

pub mod errors;
pub mod functions;
pub mod learning_rate;
pub mod linalg;
pub mod solver;
pub mod stability;
pub mod types;
pub mod validation;
