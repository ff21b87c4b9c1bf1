//! Solver configuration: stopping rules, line-search choice, verbosity.
use std::str::FromStr;

use crate::{
    errors::{OptError, OptResult},
    validation::{verify_tol_cost, verify_tol_grad},
};

/// Line-search strategy used inside L-BFGS.
///
/// Parsing:
/// `FromStr` is implemented so the choice can come from a config string;
/// `"MoreThuente"` and `"HagerZhang"` are matched without regard to
/// case, and anything else is [`OptError::InvalidLineSearch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSearcher {
    MoreThuente,
    HagerZhang,
}

impl FromStr for LineSearcher {
    type Err = OptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morethuente" => Ok(LineSearcher::MoreThuente),
            "hagerzhang" => Ok(LineSearcher::HagerZhang),
            _ => Err(OptError::InvalidLineSearch {
                name: s.to_string(),
                reason: "Expected 'MoreThuente' or 'HagerZhang' (case does not matter).",
            }),
        }
    }
}

/// Stopping rules for a solver run.
///
/// - `tol_grad`: stop once the gradient norm drops below this value.
/// - `tol_cost`: stop once successive objective values differ by less
///   than this value.
/// - `max_iter`: upper bound on the iteration count.
///
/// Each field is optional, but a run with no stopping rule at all would
/// never terminate, so [`Tolerances::new`] insists on at least one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_grad: Option<f64>,
    pub tol_cost: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// Validate and assemble a set of stopping rules.
    ///
    /// At least one of the three fields must be `Some`; tolerances, when
    /// given, must be finite and strictly positive, and `max_iter` must
    /// be nonzero.
    ///
    /// # Errors
    /// - [`OptError::NoTolerancesProvided`] when every field is `None`.
    /// - [`OptError::InvalidTolGrad`] / [`OptError::InvalidTolCost`] for
    ///   non-finite or non-positive thresholds.
    /// - [`OptError::InvalidMaxIter`] for `max_iter == 0`.
    pub fn new(
        tol_grad: Option<f64>,
        tol_cost: Option<f64>,
        max_iter: Option<usize>,
    ) -> OptResult<Self> {
        if tol_grad.is_none() && tol_cost.is_none() && max_iter.is_none() {
            return Err(OptError::NoTolerancesProvided);
        }
        verify_tol_cost(tol_cost)?;
        verify_tol_grad(tol_grad)?;
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(OptError::InvalidMaxIter {
                    max_iter,
                    reason: "The iteration cap must be at least one.",
                });
            }
        }
        Ok(Self {
            tol_grad,
            tol_cost,
            max_iter,
        })
    }
}

/// Full configuration for a [`minimize`](crate::solver::minimize) call.
///
/// Fields:
/// - `tols: Tolerances` — the stopping rules above.
/// - `line_searcher: LineSearcher` — which line search L-BFGS drives.
/// - `verbose: bool` — when `true` and the `obs_slog` feature is on,
///   progress is logged per iteration.
/// - `lbfgs_mem: Option<usize>` — L-BFGS history size; `None` means
///   [`DEFAULT_LBFGS_MEM`](crate::types::DEFAULT_LBFGS_MEM).
#[derive(Debug, Clone, PartialEq)]
pub struct MinimizeOptions {
    pub tols: Tolerances,
    pub line_searcher: LineSearcher,
    pub verbose: bool,
    pub lbfgs_mem: Option<usize>,
}

impl MinimizeOptions {
    /// Create a new set of solver options.
    ///
    /// Validation of numeric tolerance fields happens inside
    /// [`Tolerances::new`]; this constructor only checks the L-BFGS
    /// memory.
    ///
    /// # Errors
    /// [`OptError::InvalidLBFGSMem`] if `lbfgs_mem == Some(0)`.
    pub fn new(
        tols: Tolerances,
        line_searcher: LineSearcher,
        verbose: bool,
        lbfgs_mem: Option<usize>,
    ) -> OptResult<Self> {
        if let Some(mem) = lbfgs_mem {
            if mem == 0 {
                return Err(OptError::InvalidLBFGSMem {
                    mem,
                    reason: "The history size must be at least one.",
                });
            }
        }
        Ok(Self {
            tols,
            line_searcher,
            verbose,
            lbfgs_mem,
        })
    }
}

impl Default for MinimizeOptions {
    fn default() -> Self {
        Self {
            tols: Tolerances {
                tol_grad: Some(1e-6),
                tol_cost: None,
                max_iter: Some(300),
            },
            line_searcher: LineSearcher::MoreThuente,
            verbose: false,
            lbfgs_mem: None,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Scope
    //! -----
    //! These tests cover tolerance validation rules, line-search parsing,
    //! and option construction. They intentionally DO NOT cover how the
    //! solver consumes these settings; the builder and runner tests own
    //! that.
    use super::*;

    #[test]
    fn at_least_one_tolerance_is_required() {
        assert_eq!(
            Tolerances::new(None, None, None),
            Err(OptError::NoTolerancesProvided)
        );
        assert!(Tolerances::new(None, None, Some(10)).is_ok());
    }

    #[test]
    fn non_positive_tolerances_are_rejected() {
        assert!(matches!(
            Tolerances::new(Some(0.0), None, Some(10)),
            Err(OptError::InvalidTolGrad { .. })
        ));
        assert!(matches!(
            Tolerances::new(None, Some(f64::NAN), Some(10)),
            Err(OptError::InvalidTolCost { .. })
        ));
        assert!(matches!(
            Tolerances::new(Some(1e-6), None, Some(0)),
            Err(OptError::InvalidMaxIter { .. })
        ));
    }

    #[test]
    fn line_searcher_parses_case_insensitively() {
        assert_eq!(
            "morethuente".parse::<LineSearcher>().unwrap(),
            LineSearcher::MoreThuente
        );
        assert_eq!(
            "HAGERZHANG".parse::<LineSearcher>().unwrap(),
            LineSearcher::HagerZhang
        );
        assert!(matches!(
            "newton".parse::<LineSearcher>(),
            Err(OptError::InvalidLineSearch { .. })
        ));
    }

    #[test]
    fn zero_lbfgs_memory_is_rejected() {
        let tols = Tolerances::new(Some(1e-6), None, Some(50)).unwrap();

        assert!(matches!(
            MinimizeOptions::new(tols, LineSearcher::HagerZhang, false, Some(0)),
            Err(OptError::InvalidLBFGSMem { mem: 0, .. })
        ));
        assert!(MinimizeOptions::new(tols, LineSearcher::HagerZhang, false, Some(11)).is_ok());
    }

    #[test]
    fn default_options_satisfy_their_own_validation() {
        let opts = MinimizeOptions::default();

        let revalidated = Tolerances::new(
            opts.tols.tol_grad,
            opts.tols.tol_cost,
            opts.tols.max_iter,
        );

        assert!(revalidated.is_ok());
        assert_eq!(opts.line_searcher, LineSearcher::MoreThuente);
        assert!(!opts.verbose);
        assert_eq!(opts.lbfgs_mem, None);
    }
}
