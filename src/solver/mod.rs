//! solver — argmin-powered L-BFGS minimization for objective functions.
//!
//! Purpose
//! -------
//! Provide a high-level, Argmin-backed solver layer for **minimizing**
//! objectives from the function algebra. Callers implement
//! [`Function`](crate::functions::Function), or compose one from the
//! combinators, and invoke [`minimize`] to run L-BFGS with a configurable
//! line search, tolerances, and finite-difference fallbacks.
//!
//! Key behaviors
//! -------------
//! - Expose any function to Argmin via [`adapter::ArgminAdapter`]; values
//!   are used directly as the cost, with no sign convention in between.
//! - Expose a single, user-facing entrypoint [`minimize`] that:
//!   - validates the initial point,
//!   - selects an L-BFGS solver via [`builders`] based on
//!     [`config::LineSearcher`],
//!   - executes the solver via [`run::run_solver`], and
//!   - normalizes results into a [`MinimizeOutcome`].
//! - Fall back to the finite-difference helpers in [`finite_diff`] for
//!   gradients, Hessians, and full second-order models whenever analytic
//!   derivatives are missing, validating each estimate after the fact.
//! - Centralize solver configuration ([`Tolerances`],
//!   [`MinimizeOptions`]) so downstream code can assume sane, finite
//!   inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - The solver **always minimizes**; objectives that are naturally
//!   maximized must be negated by the caller before they enter the
//!   algebra.
//! - Points, gradients, and Hessians use the crate-wide `ndarray` aliases
//!   [`Point`](crate::types::Point), [`Grad`](crate::types::Grad), and
//!   [`Hessian`](crate::types::Hessian).
//! - Derivative fallbacks report the objective's own failure rather than
//!   the NaN diagnostics it contaminates.
//!
//! Conventions
//! -----------
//! - Errors cross module boundaries as
//!   [`OptError`](crate::errors::OptError) inside `OptResult`; raw
//!   `argmin::core::Error` values are confined to the adapter and the
//!   finite-difference closures.
//! - Optional observability is gated behind the `obs_slog` feature and
//!   `MinimizeOptions::verbose`.
//!
//! Testing notes
//! -------------
//! - Each submodule carries its own unit tests:
//!   - [`builders`] checks solver construction and tolerance wiring,
//!   - [`finite_diff`] checks the numeric schemes and their fallbacks,
//!   - [`config`] and [`outcome`] check the validation of options and
//!     results.
//! - Integration tests exercise [`minimize`] on small analytic
//!   objectives, verifying that line-search choices are respected,
//!   finite-difference fallbacks engage for gradient-free functions, and
//!   [`MinimizeOutcome`] reports sensible values and diagnostics.

pub mod adapter;
pub mod api;
pub mod builders;
pub mod config;
pub mod finite_diff;
pub mod outcome;
pub mod run;

// ---- Public surface --------------------------------------------------------

pub use self::adapter::ArgminAdapter;
pub use self::api::minimize;
pub use self::config::{LineSearcher, MinimizeOptions, Tolerances};
pub use self::finite_diff::{fd_quadratic_approx, gradient_with_fallback, hessian_with_fallback};
pub use self::outcome::MinimizeOutcome;

// ---- Prelude ---------------------------------------------------------------
//
// A single glob,
//
//     use funcopt::solver::prelude::*;
//
// pulls in the main solver surface.

pub mod prelude {
    pub use super::api::minimize;
    pub use super::config::{LineSearcher, MinimizeOptions, Tolerances};
    pub use super::outcome::MinimizeOutcome;
}
