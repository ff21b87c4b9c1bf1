use argmin::core::{ArgminError, Error};

/// Crate-wide result alias for function and optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Derivatives ----
    /// No closed-form gradient for this function.
    GradientNotImplemented,

    /// No closed-form Hessian for this function.
    HessianNotImplemented,

    /// Gradient dimensions do not match the input dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Gradient elements need to be finite.
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Hessian matrix dimensions do not match the input dimensions.
    HessianDimMismatch {
        expected: usize,
        found: (usize, usize),
    },

    /// A Hessian entry is NaN or infinite.
    InvalidHessian {
        row: usize,
        col: usize,
        value: f64,
    },

    // ---- Function algebra ----
    /// Scalar surface called on a function with more than one output component.
    NotScalarValued {
        outputs: usize,
    },

    /// Operand shapes are incompatible.
    ShapeMismatch {
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Combinators need at least one component function.
    EmptyCollection {
        what: &'static str,
    },

    /// Classification labels must be 0 or 1.
    InvalidLabel {
        index: usize,
        value: f64,
    },

    /// Function value needs to be finite.
    NonFiniteValue {
        value: f64,
    },

    /// Input point coordinates need to be finite.
    InvalidPoint {
        index: usize,
        value: f64,
    },

    // ---- Linear algebra ----
    /// Coefficient matrix must be square.
    MatrixNotSquare {
        rows: usize,
        cols: usize,
    },

    /// Linear system has no LU solution.
    SingularSystem {
        dim: usize,
    },

    /// SVD least-squares solve failed to converge.
    LeastSquaresFailed {
        reason: &'static str,
    },

    // ---- Learning rates ----
    /// Rate hyperparameter out of range.
    InvalidRateParam {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Policy needs an objective callable the caller did not supply.
    MissingObjective {
        policy: &'static str,
    },

    /// Policy needs an objective-gradient callable the caller did not supply.
    MissingObjectiveGradient {
        policy: &'static str,
    },

    // ---- MinimizeOptions ----
    /// Gradient-norm stopping threshold out of range.
    InvalidTolGrad {
        tol: f64,
        reason: &'static str,
    },
    /// Objective-change stopping threshold out of range.
    InvalidTolCost {
        tol: f64,
        reason: &'static str,
    },
    /// Iteration cap must be at least 1.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// A run needs at least one stopping rule.
    NoTolerancesProvided,

    /// Unrecognized line-search name.
    InvalidLineSearch {
        name: String,
        reason: &'static str,
    },

    /// L-BFGS history size must be at least 1.
    InvalidLBFGSMem {
        mem: usize,
        reason: &'static str,
    },

    // ---- Run outcome ----
    /// Best point coordinates must be finite.
    InvalidBestPoint {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Best point is missing.
    MissingBestPoint,

    // ---- Argmin bridge ----
    /// Mirror of argmin's `InvalidParameter` kind.
    InvalidParameter {
        text: String,
    },
    /// Mirror of argmin's `NotImplemented` kind.
    NotImplemented {
        text: String,
    },
    /// Mirror of argmin's `NotInitialized` kind.
    NotInitialized {
        text: String,
    },
    /// Mirror of argmin's `ConditionViolated` kind.
    ConditionViolated {
        text: String,
    },
    /// Mirror of argmin's `CheckpointNotFound` kind.
    CheckPointNotFound {
        text: String,
    },
    /// Mirror of argmin's `PotentialBug` kind.
    PotentialBug {
        text: String,
    },
    /// Mirror of argmin's `ImpossibleError` kind.
    ImpossibleError {
        text: String,
    },
    /// Any other backend failure, preserved as text.
    BackendError {
        text: String,
    },

    // ---- Catch-all ----
    UnknownError,
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Derivatives ----
            OptError::GradientNotImplemented => {
                write!(f, "Gradient not implemented for this function")
            }
            OptError::HessianNotImplemented => {
                write!(f, "Hessian not implemented for this function")
            }
            OptError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient has {found} entries, expected {expected}")
            }
            OptError::InvalidGradient { index, value, reason } => {
                write!(f, "Gradient entry {index} is {value}: {reason}")
            }
            OptError::HessianDimMismatch { expected, found } => {
                write!(
                    f,
                    "Hessian has shape {found:?}, expected ({expected}, {expected})"
                )
            }
            OptError::InvalidHessian { row, col, value } => {
                write!(f, "Non-finite Hessian entry at ({row}, {col}): {value}")
            }

            // ---- Function algebra ----
            OptError::NotScalarValued { outputs } => {
                write!(f, "Function has {outputs} output components, expected a scalar")
            }
            OptError::ShapeMismatch { what, expected, found } => {
                write!(f, "Shape mismatch for {what}: expected {expected}, found {found}")
            }
            OptError::EmptyCollection { what } => {
                write!(f, "Empty collection: {what} needs at least one function")
            }
            OptError::InvalidLabel { index, value } => {
                write!(f, "Invalid label at index {index}: {value}, must be 0 or 1")
            }
            OptError::NonFiniteValue { value } => {
                write!(f, "Non-finite function value: {value}")
            }
            OptError::InvalidPoint { index, value } => {
                write!(f, "Invalid point coordinate at index {index}: {value}, must be finite")
            }

            // ---- Linear algebra ----
            OptError::MatrixNotSquare { rows, cols } => {
                write!(f, "Matrix must be square, got ({rows}, {cols})")
            }
            OptError::SingularSystem { dim } => {
                write!(f, "Singular linear system of dimension {dim}")
            }
            OptError::LeastSquaresFailed { reason } => {
                write!(f, "Least-squares solve failed: {reason}")
            }

            // ---- Learning rates ----
            OptError::InvalidRateParam { name, value, reason } => {
                write!(f, "Invalid rate parameter {name}: {value}: {reason}")
            }
            OptError::MissingObjective { policy } => {
                write!(f, "{policy} needs an objective callable")
            }
            OptError::MissingObjectiveGradient { policy } => {
                write!(f, "{policy} needs an objective-gradient callable")
            }

            // ---- MinimizeOptions ----
            OptError::InvalidTolGrad { tol, reason } => {
                write!(f, "Bad gradient-norm tolerance {tol}: {reason}")
            }
            OptError::InvalidTolCost { tol, reason } => {
                write!(f, "Bad objective-change tolerance {tol}: {reason}")
            }
            OptError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Bad iteration cap {max_iter}: {reason}")
            }
            OptError::NoTolerancesProvided => {
                write!(f, "No stopping rule configured")
            }
            OptError::InvalidLineSearch { name, reason } => {
                write!(f, "Unrecognized line search '{name}': {reason}")
            }
            OptError::InvalidLBFGSMem { mem, reason } => {
                write!(f, "Bad L-BFGS memory {mem}: {reason}")
            }

            // ---- Run outcome ----
            OptError::InvalidBestPoint { index, value, reason } => {
                write!(f, "Invalid best point at index {index}: {value}: {reason}")
            }
            OptError::MissingBestPoint => {
                write!(f, "Missing best point")
            }

            // ---- Argmin bridge ----
            OptError::InvalidParameter { text } => {
                write!(f, "Solver rejected a parameter: {text}")
            }
            OptError::NotImplemented { text } => {
                write!(f, "Solver operation not implemented: {text}")
            }
            OptError::NotInitialized { text } => {
                write!(f, "Solver state not initialized: {text}")
            }
            OptError::ConditionViolated { text } => {
                write!(f, "Solver condition violated: {text}")
            }
            OptError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint lookup failed: {text}")
            }
            OptError::PotentialBug { text } => {
                write!(f, "Possible solver bug: {text}")
            }
            OptError::ImpossibleError { text } => {
                write!(f, "Unreachable solver state: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Solver backend failure: {text}")
            }

            // ---- Catch-all ----
            OptError::UnknownError => {
                write!(f, "Unclassified backend failure")
            }
        }
    }
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        // Errors of this crate round-trip through the backend unchanged.
        let original_err = match original_err.downcast::<OptError>() {
            Ok(own) => return own,
            Err(err) => err,
        };
        match original_err.downcast() {
            Ok(opt_err) => match opt_err {
                ArgminError::InvalidParameter { text } => OptError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => OptError::NotImplemented { text },
                ArgminError::NotInitialized { text } => OptError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => OptError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => OptError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => OptError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => OptError::ImpossibleError { text },
                _ => OptError::UnknownError,
            },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}
