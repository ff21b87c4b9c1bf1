//! Classification losses over a fixed design matrix.
//!
//! Both losses close over their data: construction takes a feature matrix
//! (one row per sample) and a label vector in `{0, 1}`, and the resulting
//! [`Function`] is a function of the weight vector only. [`HingeLoss`]
//! recodes labels to `±1` internally at each evaluation; callers always
//! pass `{0, 1}`.
//!
//! Margins are `X·w` throughout. The logistic value goes through
//! [`safe_softplus`] so large negative margins underflow to zero instead
//! of producing `ln(1 + e^m)` overflow on the positive side.
use ndarray::{Array1, Array2, Axis};
use statrs::function::logistic::logistic;

use crate::{
    errors::{OptError, OptResult},
    functions::traits::Function,
    stability::safe_softplus,
    types::{Grad, Hessian, Point, Scalar},
};

fn validate_design(
    features: &Array2<f64>,
    labels: &Array1<f64>,
    what: &'static str,
) -> OptResult<()> {
    if labels.len() != features.nrows() {
        return Err(OptError::ShapeMismatch {
            what,
            expected: features.nrows(),
            found: labels.len(),
        });
    }
    for (index, &value) in labels.iter().enumerate() {
        if value != 0.0 && value != 1.0 {
            return Err(OptError::InvalidLabel { index, value });
        }
    }
    Ok(())
}

/// Negative log-likelihood of logistic regression,
/// `Σᵢ softplus(mᵢ) − yᵢ·mᵢ` with margins `m = X·w`.
///
/// Smooth with full calculus: the gradient is `Xᵀ(σ(m) − y)` and the
/// Hessian the weighted Gram matrix `Xᵀ·diag(σ(m)·(1 − σ(m)))·X`.
#[derive(Debug, Clone, PartialEq)]
pub struct LogisticLoss {
    pub features: Array2<f64>,
    pub labels: Array1<f64>,
}

impl LogisticLoss {
    /// Construct the loss over a design matrix and `{0, 1}` labels.
    ///
    /// # Errors
    /// - [`OptError::ShapeMismatch`] if the label count differs from the
    ///   sample count.
    /// - [`OptError::InvalidLabel`] for any label outside `{0, 1}`.
    pub fn new(features: Array2<f64>, labels: Array1<f64>) -> OptResult<Self> {
        validate_design(&features, &labels, "logistic labels")?;
        Ok(Self { features, labels })
    }

    fn check_dim(&self, x: &Point) -> OptResult<()> {
        if x.len() != self.features.ncols() {
            return Err(OptError::ShapeMismatch {
                what: "logistic input point",
                expected: self.features.ncols(),
                found: x.len(),
            });
        }
        Ok(())
    }
}

impl Function for LogisticLoss {
    fn evaluate(&self, x: &Point) -> OptResult<Scalar> {
        self.check_dim(x)?;
        let margins = self.features.dot(x);
        let total = margins
            .iter()
            .zip(self.labels.iter())
            .map(|(&m, &y)| safe_softplus(m) - y * m)
            .sum();
        Ok(total)
    }

    fn gradient(&self, x: &Point) -> OptResult<Grad> {
        self.check_dim(x)?;
        let margins = self.features.dot(x);
        let preds = margins.mapv(logistic);
        Ok(self.features.t().dot(&(preds - &self.labels)))
    }

    fn hessian(&self, x: &Point) -> OptResult<Hessian> {
        self.check_dim(x)?;
        let margins = self.features.dot(x);
        let weights = margins.mapv(|m| {
            let p = logistic(m);
            p * (1.0 - p)
        });
        let weighted = &self.features * &weights.insert_axis(Axis(1));
        Ok(weighted.t().dot(&self.features))
    }
}

/// Hinge loss `Σᵢ max(0, 1 − ỹᵢ·mᵢ)` with `ỹ = 2y − 1` and margins
/// `m = X·w`.
///
/// Piecewise linear: the reported gradient is the subgradient
/// `Σ_{active} −ỹᵢ·xᵢ` over samples with `ỹᵢ·mᵢ < 1`, taking zero
/// exactly on the kink. There is no Hessian.
#[derive(Debug, Clone, PartialEq)]
pub struct HingeLoss {
    pub features: Array2<f64>,
    pub labels: Array1<f64>,
}

impl HingeLoss {
    /// Construct the loss over a design matrix and `{0, 1}` labels.
    ///
    /// # Errors
    /// - [`OptError::ShapeMismatch`] if the label count differs from the
    ///   sample count.
    /// - [`OptError::InvalidLabel`] for any label outside `{0, 1}`.
    pub fn new(features: Array2<f64>, labels: Array1<f64>) -> OptResult<Self> {
        validate_design(&features, &labels, "hinge labels")?;
        Ok(Self { features, labels })
    }

    fn check_dim(&self, x: &Point) -> OptResult<()> {
        if x.len() != self.features.ncols() {
            return Err(OptError::ShapeMismatch {
                what: "hinge input point",
                expected: self.features.ncols(),
                found: x.len(),
            });
        }
        Ok(())
    }
}

impl Function for HingeLoss {
    fn evaluate(&self, x: &Point) -> OptResult<Scalar> {
        self.check_dim(x)?;
        let margins = self.features.dot(x);
        let total = margins
            .iter()
            .zip(self.labels.iter())
            .map(|(&m, &y)| {
                let signed = 2.0 * y - 1.0;
                (1.0 - signed * m).max(0.0)
            })
            .sum();
        Ok(total)
    }

    fn gradient(&self, x: &Point) -> OptResult<Grad> {
        self.check_dim(x)?;
        let margins = self.features.dot(x);
        let mut coeffs = Array1::zeros(margins.len());
        for (i, (&m, &y)) in margins.iter().zip(self.labels.iter()).enumerate() {
            let signed = 2.0 * y - 1.0;
            if signed * m < 1.0 {
                coeffs[i] = -signed;
            }
        }
        Ok(self.features.t().dot(&coeffs))
    }
}
