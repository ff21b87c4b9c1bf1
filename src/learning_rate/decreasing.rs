//! Deterministic decreasing step-size schedule.
use crate::{
    errors::OptResult,
    learning_rate::policy::{LearningRate, RateContext, RateOutcome, StepSize},
    validation::verify_rate_param,
};

/// `step(k) = a / (k + b)^p` on iteration counter `k`.
///
/// The classic Robbins–Monro style schedule: with the default
/// `a = b = 1, p = 0.5` it starts at 1 and decays like `1/√k`. Purely
/// deterministic, so the outcome is always `converged: true`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecreasingRate {
    pub a: f64,
    pub b: f64,
    pub p: f64,
}

impl DecreasingRate {
    /// Construct a schedule from positive, finite parameters.
    ///
    /// # Errors
    /// [`OptError::InvalidRateParam`](crate::errors::OptError) for any
    /// non-finite or non-positive parameter.
    pub fn new(a: f64, b: f64, p: f64) -> OptResult<Self> {
        verify_rate_param("a", a)?;
        verify_rate_param("b", b)?;
        verify_rate_param("p", p)?;
        Ok(Self { a, b, p })
    }
}

impl Default for DecreasingRate {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 1.0,
            p: 0.5,
        }
    }
}

impl LearningRate for DecreasingRate {
    fn learning_rate(&mut self, ctx: &RateContext<'_>) -> OptResult<RateOutcome> {
        let step = self.a / (ctx.iteration as f64 + self.b).powf(self.p);
        Ok(RateOutcome {
            step: StepSize::Scalar(step),
            converged: true,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Scope
    //! -----
    //! These tests cover the closed-form schedule values and parameter
    //! rejection. They intentionally DO NOT cover driving an optimizer;
    //! the integration tests own that.
    use approx::assert_relative_eq;
    use ndarray::arr1;

    use super::*;
    use crate::errors::OptError;

    fn rate_at(policy: &mut DecreasingRate, iteration: u64) -> f64 {
        let point = arr1(&[0.0]);
        let direction = arr1(&[1.0]);
        let ctx = RateContext::new(iteration, &point, &direction);
        let outcome = policy.learning_rate(&ctx).unwrap();

        assert!(outcome.converged);
        outcome.step.as_scalar().unwrap()
    }

    #[test]
    fn default_schedule_hits_the_closed_form_values() {
        let mut policy = DecreasingRate::default();

        // a / (k + b)^p with a = b = 1, p = 0.5.
        assert_relative_eq!(rate_at(&mut policy, 0), 1.0, max_relative = 1e-12);
        assert_relative_eq!(rate_at(&mut policy, 3), 0.5, max_relative = 1e-12);
        assert_relative_eq!(rate_at(&mut policy, 99), 0.1, max_relative = 1e-12);
    }

    #[test]
    fn schedule_is_monotonically_decreasing() {
        let mut policy = DecreasingRate::new(2.0, 0.5, 1.0).unwrap();

        let earlier = rate_at(&mut policy, 1);
        let later = rate_at(&mut policy, 2);

        assert!(later < earlier);
    }

    #[test]
    fn non_positive_parameters_are_rejected() {
        assert!(matches!(
            DecreasingRate::new(0.0, 1.0, 0.5),
            Err(OptError::InvalidRateParam { name: "a", .. })
        ));
        assert!(matches!(
            DecreasingRate::new(1.0, -1.0, 0.5),
            Err(OptError::InvalidRateParam { name: "b", .. })
        ));
        assert!(matches!(
            DecreasingRate::new(1.0, 1.0, f64::NAN),
            Err(OptError::InvalidRateParam { name: "p", .. })
        ));
    }
}
