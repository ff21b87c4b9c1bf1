//! High-level entry point for minimizing a [`Function`].
//!
//! This selects an L-BFGS solver with either Hager–Zhang or More–Thuente
//! line search, wraps the objective in an `ArgminAdapter`, and delegates
//! the run to `run_solver`.
use crate::{
    errors::OptResult,
    functions::traits::Function,
    solver::{
        adapter::ArgminAdapter,
        builders::{build_lbfgs_hager_zhang, build_lbfgs_more_thuente},
        config::{LineSearcher, MinimizeOptions},
        outcome::MinimizeOutcome,
        run::run_solver,
    },
    types::Point,
    validation::validate_point,
};

/// Minimize an objective function using L-BFGS with the chosen line search.
///
/// # Behavior
/// - Validates the initial point for finiteness.
/// - Wraps the objective in an `ArgminAdapter`, which exposes its values
///   directly as the cost and resolves gradients analytically or by
///   finite differences.
/// - Builds an L-BFGS solver with either **Hager–Zhang** or
///   **More–Thuente** line search based on `opts.line_searcher`.
/// - Calls `run_solver`, which configures the executor (initial point,
///   max iters, optional observers) and returns a [`MinimizeOutcome`].
///
/// # Parameters
/// - `f`: The objective implementing [`Function`]; `dyn Function` works
///   too, so combinator-built objectives can be passed as-is.
/// - `x0`: Initial point. Consumed by the run.
/// - `opts`: Solver options (tolerances, line search choice, verbosity,
///   L-BFGS memory).
///
/// # Errors
/// - [`OptError::InvalidPoint`](crate::errors::OptError::InvalidPoint)
///   when `x0` contains a non-finite entry.
/// - Propagates builder errors from `build_lbfgs_*`.
/// - Propagates runtime errors from `run_solver` (e.g., line-search
///   failures).
///
/// # Returns
/// A [`MinimizeOutcome`] containing the best point, the objective value
/// there, termination status, iteration and evaluation counts, and
/// optionally the final gradient norm.
///
/// # Example
/// ```no_run
/// use funcopt::functions::Quadratic;
/// use funcopt::solver::{minimize, MinimizeOptions};
/// use ndarray::{arr2, array};
///
/// let objective = Quadratic::new(
///     arr2(&[[2.0, 0.0], [0.0, 4.0]]),
///     array![-2.0, 4.0],
///     0.0,
/// )?;
/// let out = minimize(&objective, array![0.0, 0.0], &MinimizeOptions::default())?;
/// println!("minimizer = {:?}, value = {}", out.best_point, out.value);
/// # Ok::<(), funcopt::errors::OptError>(())
/// ```
pub fn minimize<F: Function + ?Sized>(
    f: &F,
    x0: Point,
    opts: &MinimizeOptions,
) -> OptResult<MinimizeOutcome> {
    validate_point(&x0)?;
    let problem = ArgminAdapter::new(f);
    match opts.line_searcher {
        LineSearcher::MoreThuente => {
            let solver = build_lbfgs_more_thuente(opts)?;
            run_solver(x0, opts, problem, solver)
        }
        LineSearcher::HagerZhang => {
            let solver = build_lbfgs_hager_zhang(opts)?;
            run_solver(x0, opts, problem, solver)
        }
    }
}
