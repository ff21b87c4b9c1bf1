//! Overflow-guarded scalar transforms.
//!
//! Home of the nonlinear maps that misbehave in naïve form. Each one uses
//! an explicit cutoff (`x > 20.0`) to keep `f64` arithmetic in a
//! well-conditioned regime, the same guard the softplus kernels of the
//! big ML frameworks apply.
//!
//! # Provided items
//! - [`safe_softplus`]: guarded `ln(1 + exp(x))`, finite over all of ℝ
//!   and positive everywhere.
//!
//! # Rationale
//! Softplus is the per-sample building block of the logistic loss:
//! `log(1 + exp(xᵢ·w))` overflows for moderately large margins if
//! evaluated directly, while the guarded form stays exact.

/// Softplus, `ln(1 + exp(x))`, guarded against overflow.
///
/// A bare `exp` blows up long before the result would leave `f64` range,
/// so the domain is split at a cutoff:
///
/// - past it (`x > 20.0`), the correction `ln1p(exp(-x))` sits below
///   machine epsilon relative to `x`, and `x` itself is returned;
/// - below it, `ln_1p(exp(x))` is evaluated directly, which is well
///   conditioned there and precise even for very negative `x`.
pub fn safe_softplus(x: f64) -> f64 {
    if x > 20.0 { x } else { x.exp().ln_1p() }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn safe_softplus_matches_naive_form_in_the_well_conditioned_range() {
        for &x in &[-5.0, -1.0, 0.0, 1.0, 5.0, 19.0] {
            assert_relative_eq!(safe_softplus(x), (1.0 + x.exp()).ln(), max_relative = 1e-12);
        }
    }

    #[test]
    fn safe_softplus_is_linear_and_finite_for_large_inputs() {
        // Naive ln(1 + exp(800)) overflows to infinity; the guard keeps it exact.
        assert_eq!(safe_softplus(800.0), 800.0);
        assert!(safe_softplus(1e6).is_finite());
    }

    #[test]
    fn safe_softplus_underflows_gracefully_for_large_negative_inputs() {
        let y = safe_softplus(-40.0);
        assert!(y > 0.0 && y < 1e-15);
    }
}
