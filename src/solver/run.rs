//! Execution helper that runs an `argmin` solver on an adapted [`Function`]
//! and returns a crate-friendly [`MinimizeOutcome`].
#[cfg(feature = "obs_slog")]
use argmin::core::{CostFunction, Gradient};
use argmin::core::{Executor, State};
#[cfg(feature = "obs_slog")]
use argmin_math::ArgminL2Norm;

use crate::{
    errors::OptResult,
    functions::traits::Function,
    solver::{adapter::ArgminAdapter, config::MinimizeOptions, outcome::MinimizeOutcome},
    types::{Grad, Point},
};

/// Execute a prepared `argmin` solver against an adapted objective.
///
/// Both line-search variants of [`minimize`](crate::solver::minimize)
/// funnel through this one runner: it seeds the executor with `x0`,
/// applies the iteration cap from `opts`, attaches the optional progress
/// observer, runs the solver to termination, and condenses the final
/// state into a [`MinimizeOutcome`].
///
/// # Type Parameters
/// - `F`: The objective type implementing [`Function`]; `?Sized`, so
///   `dyn Function` works as well.
/// - `S`: Any `argmin` solver whose problem is `ArgminAdapter<'a, F>` and
///   whose `IterState` matches the aliases `Point` (parameters), `Grad`
///   (gradient), and `f64` as the float type.
///
/// # Arguments
/// - `x0`: Initial point, consumed and installed on the optimizer state.
/// - `opts`: Solver options; only `max_iter` and `verbose` matter here,
///   the tolerances were already baked into `solver` by the builders.
/// - `problem`: An [`ArgminAdapter`] wrapping the objective.
/// - `solver`: A configured solver from
///   [`build_lbfgs_hager_zhang`](crate::solver::builders::build_lbfgs_hager_zhang)
///   or
///   [`build_lbfgs_more_thuente`](crate::solver::builders::build_lbfgs_more_thuente).
///
/// # Feature flags
/// With the `obs_slog` feature enabled and `opts.verbose == true`, a
/// terminal slog observer watches every iteration, and one line with
/// `f(x0)` (plus the gradient norm when a gradient is computable) goes to
/// stderr before the run starts.
///
/// # Returns
/// A [`MinimizeOutcome`] carrying the best iterate and its value,
/// termination status, iteration and evaluation counts, and the norm of
/// the last gradient the backend kept.
///
/// # Errors
/// - Any `argmin` runtime failure (solver or line-search breakdown,
///   observer errors), mapped through the crate's
///   `From<argmin::core::Error>` conversion.
/// - Validation failures from [`MinimizeOutcome::new`] when the backend
///   state is missing or non-finite.
///
/// # Examples
/// ```ignore
/// let problem = ArgminAdapter::new(&objective);
/// let solver = build_lbfgs_more_thuente(&opts)?;
/// let outcome = run_solver(x0, &opts, problem, solver)?;
/// assert!(outcome.converged);
/// ```
pub fn run_solver<'a, F, S>(
    x0: Point,
    opts: &MinimizeOptions,
    problem: ArgminAdapter<'a, F>,
    solver: S,
) -> OptResult<MinimizeOutcome>
where
    F: Function + ?Sized,
    S: argmin::core::Solver<
            ArgminAdapter<'a, F>,
            argmin::core::IterState<Point, Grad, (), (), (), f64>,
        > + Send
        + 'static,
{
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        log_initial_state(&x0, &problem)?;
    }
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(x0));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    let grad = result.take_gradient();
    MinimizeOutcome::new(
        result.take_best_param(),
        result.get_best_cost(),
        termination,
        iterations,
        function_counts,
        grad,
    )
}

// ---- Verbose-mode logging ----

#[cfg(feature = "obs_slog")]
fn log_initial_state<F>(x0: &Point, problem: &ArgminAdapter<'_, F>) -> OptResult<()>
where
    F: Function + ?Sized,
{
    let f0 = problem.cost(x0)?;
    let grad_part = match problem.gradient(x0) {
        Ok(g) => format!(", ||grad|| = {:.6}", g.l2_norm()),
        Err(_) => String::new(),
    };

    eprintln!("init: f(x0) = {f0:.6}{grad_part}");
    Ok(())
}
