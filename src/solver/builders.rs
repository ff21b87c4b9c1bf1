//! builders — L-BFGS solver construction helpers.
//!
//! Purpose
//! -------
//! Provide small, focused builders for the L-BFGS solvers used by
//! [`minimize`](crate::solver::minimize). These helpers hide Argmin's
//! generic wiring and apply crate-level options (tolerances, memory size)
//! so that higher-level code can request a configured solver without
//! touching Argmin-specific types.
//!
//! Conventions
//! -----------
//! - [`HagerZhangLS`] and [`MoreThuenteLS`] are the crate's canonical
//!   line-search aliases; [`LbfgsHagerZhang`] and [`LbfgsMoreThuente`]
//!   pair them with the standard `(Point, Grad, Scalar)` triple.
//! - The builders do not set an initial point or `max_iters`; those are
//!   runtime concerns applied by the runner.
//! - Errors are always reported via [`OptResult`]; `argmin::core::Error`
//!   values never leak across module boundaries.
use argmin::solver::quasinewton::LBFGS;

use crate::{
    errors::OptResult,
    solver::config::MinimizeOptions,
    types::{
        DEFAULT_LBFGS_MEM, Grad, HagerZhangLS, LbfgsHagerZhang, LbfgsMoreThuente, MoreThuenteLS,
        Point, Scalar,
    },
};

/// Construct L-BFGS with Hager–Zhang line search.
///
/// Consults `opts.lbfgs_mem` for the history size, falling back to
/// [`DEFAULT_LBFGS_MEM`], and wires optional tolerances through
/// [`configure_lbfgs`]. The initial point and iteration limit are left to
/// the runner.
///
/// # Errors
/// `OptError` (via `From<argmin::core::Error>`) when Argmin rejects a
/// tolerance setting.
///
/// # Examples
/// ```ignore
/// let solver = build_lbfgs_hager_zhang(&opts)?;
/// let outcome = run_solver(x0, &opts, problem, solver)?;
/// ```
pub fn build_lbfgs_hager_zhang(opts: &MinimizeOptions) -> OptResult<LbfgsHagerZhang> {
    let hager_zhang = HagerZhangLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsHagerZhang::new(hager_zhang, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Construct L-BFGS with More–Thuente line search.
///
/// Mirrors [`build_lbfgs_hager_zhang`] with the More–Thuente strategy:
/// memory from `opts.lbfgs_mem` or [`DEFAULT_LBFGS_MEM`], tolerances via
/// [`configure_lbfgs`].
///
/// # Errors
/// `OptError` (via `From<argmin::core::Error>`) when Argmin rejects a
/// tolerance setting.
pub fn build_lbfgs_more_thuente(opts: &MinimizeOptions) -> OptResult<LbfgsMoreThuente> {
    let more_thuente = MoreThuenteLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsMoreThuente::new(more_thuente, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Apply optional tolerances to an L-BFGS solver.
///
/// Generic over the line-search type so both builders, and any future
/// L-BFGS variant, share one wiring path. When a tolerance is `None` the
/// corresponding `with_tolerance_*` call is skipped and Argmin's default
/// stays in effect.
///
/// # Errors
/// `OptError` (via `From<argmin::core::Error>`) when
/// `with_tolerance_grad` or `with_tolerance_cost` rejects a value.
pub fn configure_lbfgs<L>(
    mut solver: LBFGS<L, Point, Grad, Scalar>,
    opts: &MinimizeOptions,
) -> OptResult<LBFGS<L, Point, Grad, Scalar>> {
    if let Some(g) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(g)?;
    }
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_tolerance_cost(c)?;
    }
    Ok(solver)
}
