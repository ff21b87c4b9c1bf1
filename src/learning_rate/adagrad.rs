//! Accumulating per-coordinate step sizes.
use ndarray::Array1;

use crate::{
    errors::{OptError, OptResult},
    learning_rate::policy::{LearningRate, RateContext, RateOutcome, StepSize},
    validation::verify_rate_param,
};

/// AdaGrad-style rule: accumulate squared direction entries per
/// coordinate and step with `multiplier / √accumulator`.
///
/// The accumulator is created lazily on the first call, broadcast to
/// `smoothing` in every coordinate, and only ever grows, so the
/// per-coordinate steps form a non-increasing sequence and the square
/// root never sees zero. The policy is dimension-locked after the first
/// call.
#[derive(Debug, Clone, PartialEq)]
pub struct AdaptiveGradient {
    pub multiplier: f64,
    pub smoothing: f64,
    weights: Option<Array1<f64>>,
}

impl AdaptiveGradient {
    /// Construct the rule from a positive step multiplier and a positive
    /// smoothing floor.
    ///
    /// # Errors
    /// [`OptError::InvalidRateParam`] for non-finite or non-positive
    /// parameters.
    pub fn new(multiplier: f64, smoothing: f64) -> OptResult<Self> {
        verify_rate_param("multiplier", multiplier)?;
        verify_rate_param("smoothing", smoothing)?;
        Ok(Self {
            multiplier,
            smoothing,
            weights: None,
        })
    }

    /// The squared-direction accumulator, once the first call has sized
    /// it.
    pub fn accumulator(&self) -> Option<&Array1<f64>> {
        self.weights.as_ref()
    }
}

impl Default for AdaptiveGradient {
    fn default() -> Self {
        Self {
            multiplier: 1.0,
            smoothing: 0.1,
            weights: None,
        }
    }
}

impl LearningRate for AdaptiveGradient {
    fn learning_rate(&mut self, ctx: &RateContext<'_>) -> OptResult<RateOutcome> {
        let dim = ctx.direction.len();
        let smoothing = self.smoothing;
        let multiplier = self.multiplier;

        let weights = self
            .weights
            .get_or_insert_with(|| Array1::from_elem(dim, smoothing));
        if weights.len() != dim {
            return Err(OptError::ShapeMismatch {
                what: "adaptive-gradient accumulator",
                expected: weights.len(),
                found: dim,
            });
        }

        for (w, &d) in weights.iter_mut().zip(ctx.direction.iter()) {
            *w += d * d;
        }
        let step = weights.mapv(|w| multiplier / w.sqrt());

        Ok(RateOutcome {
            step: StepSize::PerCoordinate(step),
            converged: true,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Scope
    //! -----
    //! These tests cover lazy accumulator initialization, the strict
    //! per-coordinate decay under repeated directions, and the
    //! dimension lock. They intentionally DO NOT cover convergence of
    //! AdaGrad-driven descent; the integration tests own that.
    use approx::assert_abs_diff_eq;
    use ndarray::arr1;

    use super::*;

    fn step_for(policy: &mut AdaptiveGradient, direction: &Array1<f64>) -> Array1<f64> {
        let point = arr1(&[0.0, 0.0]);
        let ctx = RateContext::new(0, &point, direction);
        let outcome = policy.learning_rate(&ctx).unwrap();

        assert!(outcome.converged);
        match outcome.step {
            StepSize::PerCoordinate(step) => step,
            StepSize::Scalar(_) => panic!("adaptive policy must return per-coordinate steps"),
        }
    }

    #[test]
    fn first_call_broadcasts_the_smoothing_floor() {
        let mut policy = AdaptiveGradient::default();
        let direction = arr1(&[1.0, 2.0]);

        let step = step_for(&mut policy, &direction);

        // Accumulator starts at 0.1 everywhere, then takes d².
        assert_abs_diff_eq!(
            policy.accumulator().unwrap(),
            &arr1(&[1.1, 4.1]),
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            step,
            arr1(&[1.0 / 1.1_f64.sqrt(), 1.0 / 4.1_f64.sqrt()]),
            epsilon = 1e-12
        );
    }

    #[test]
    fn repeated_directions_strictly_shrink_the_step() {
        let mut policy = AdaptiveGradient::default();
        let direction = arr1(&[1.0, 2.0]);

        let first = step_for(&mut policy, &direction);
        let second = step_for(&mut policy, &direction);

        for (s2, s1) in second.iter().zip(first.iter()) {
            assert!(s2 < s1);
        }
    }

    #[test]
    fn zero_direction_entries_leave_their_coordinate_untouched() {
        let mut policy = AdaptiveGradient::default();

        let first = step_for(&mut policy, &arr1(&[1.0, 0.0]));
        let second = step_for(&mut policy, &arr1(&[1.0, 0.0]));

        assert!(second[0] < first[0]);
        assert_abs_diff_eq!(second[1], first[1], epsilon = 1e-15);
    }

    #[test]
    fn dimension_changes_after_the_first_call_are_rejected() {
        let mut policy = AdaptiveGradient::default();
        let point = arr1(&[0.0, 0.0]);
        let wide = arr1(&[1.0, 2.0]);
        let narrow = arr1(&[1.0]);

        policy
            .learning_rate(&RateContext::new(0, &point, &wide))
            .unwrap();

        assert!(matches!(
            policy.learning_rate(&RateContext::new(1, &point, &narrow)),
            Err(OptError::ShapeMismatch { expected: 2, found: 1, .. })
        ));
    }

    #[test]
    fn non_positive_parameters_are_rejected() {
        assert!(matches!(
            AdaptiveGradient::new(0.0, 0.1),
            Err(OptError::InvalidRateParam { name: "multiplier", .. })
        ));
        assert!(matches!(
            AdaptiveGradient::new(1.0, -0.1),
            Err(OptError::InvalidRateParam { name: "smoothing", .. })
        ));
    }
}
