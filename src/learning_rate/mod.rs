//! learning_rate — pluggable step-size policies for descent loops.
//!
//! Purpose
//! -------
//! Separate the question "how far along the direction" from the question
//! "which direction". Optimizer loops pick directions; a
//! [`LearningRate`] policy answers the step-size question once per
//! iteration, from a deterministic schedule, a line search over the
//! objective, or accumulated history.
//!
//! Key behaviors
//! -------------
//! - [`policy`] defines the shared contract: [`RateContext`] in,
//!   [`RateOutcome`] out, with scalar or per-coordinate [`StepSize`]s.
//! - [`DecreasingRate`] implements the `a / (k + b)^p` schedule.
//! - [`BacktrackingLineSearch`] shrinks a trial step until a
//!   sufficient-decrease test passes, stalling gracefully at its floor.
//! - [`AdaptiveGradient`] accumulates squared directions and emits
//!   per-coordinate multipliers that only ever shrink.
//!
//! Invariants & assumptions
//! ------------------------
//! - Iterates move along `−direction`; all policies evaluate trial
//!   points as `point − t·direction`.
//! - Policies never panic on bad input; missing callables, bad
//!   hyperparameters, and shape disagreements surface as
//!   [`OptError`](crate::errors::OptError) values.
//! - Stateful policies (the accumulating one) are driven by exactly one
//!   loop at a time; they are not synchronized.
//!
//! Conventions
//! -----------
//! - Hyperparameters are validated at construction via
//!   [`crate::validation::verify_rate_param`]; `Default` implementations
//!   carry the conventional settings.
//! - A stalled line search reports `converged: false` on the outcome
//!   rather than an error; callers decide whether to stop.
//!
//! Downstream usage
//! ----------------
//! - Proximal-gradient and subgradient loops drive these policies
//!   directly; see the integration tests for a full descent loop wiring
//!   a policy to [`crate::functions::Function`] closures.
//!
//! Testing notes
//! -------------
//! - Each policy module pins its closed-form values and rejection
//!   behavior; the shared contract is tested in [`policy`].

pub mod adagrad;
pub mod backtracking;
pub mod decreasing;
pub mod policy;

// ---- Public surface --------------------------------------------------------

pub use self::adagrad::AdaptiveGradient;
pub use self::backtracking::BacktrackingLineSearch;
pub use self::decreasing::DecreasingRate;
pub use self::policy::{GradientFn, LearningRate, ObjectiveFn, RateContext, RateOutcome, StepSize};

// ---- Prelude ---------------------------------------------------------------
//
// A single glob,
//
//     use funcopt::learning_rate::prelude::*;
//
// pulls in the policy surface.

pub mod prelude {
    pub use super::adagrad::AdaptiveGradient;
    pub use super::backtracking::BacktrackingLineSearch;
    pub use super::decreasing::DecreasingRate;
    pub use super::policy::{LearningRate, RateContext, RateOutcome, StepSize};
}
