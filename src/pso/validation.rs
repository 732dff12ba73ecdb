//! Validation helpers for swarm configuration and updates.
//!
//! This module centralizes the consistency checks used across the
//! optimizer interface:
//!
//! - **Option checks**: [`verify_population_size`],
//!   [`verify_cognitive_weight`], [`verify_social_weight`],
//!   [`verify_inertia`] ensure construction parameters are usable.
//! - **Stopping-rule checks**: [`verify_hysteresis`],
//!   [`verify_patience`], [`verify_round_limit`].
//! - **Bound validation**: [`validate_bounds`] enforces equal lengths,
//!   finite entries, and per-dimension ordering before any particle is
//!   created.
//! - **Update contract**: [`validate_global_best`] enforces dimension
//!   agreement for the global-best vector passed into a particle update.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`SwarmError`] variants, making higher-level code more uniform and
//! easier to debug.
use crate::pso::{
    errors::{SwarmError, SwarmResult},
    types::Position,
};
use ndarray::Array1;

/// Validate the swarm population size.
///
/// # Errors
/// Returns [`SwarmError::InvalidPopulationSize`] if `size == 0`.
pub fn verify_population_size(size: usize) -> SwarmResult<()> {
    if size == 0 {
        return Err(SwarmError::InvalidPopulationSize {
            size,
            reason: "Population must contain at least one particle.",
        });
    }
    Ok(())
}

/// Validate the cognitive weight.
///
/// The weight must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`SwarmError::InvalidCognitiveWeight`] otherwise.
pub fn verify_cognitive_weight(value: f64) -> SwarmResult<()> {
    if !value.is_finite() {
        return Err(SwarmError::InvalidCognitiveWeight {
            value,
            reason: "Weight must be finite.",
        });
    }
    if value <= 0.0 {
        return Err(SwarmError::InvalidCognitiveWeight {
            value,
            reason: "Weight must be positive.",
        });
    }
    Ok(())
}

/// Validate the social weight.
///
/// The weight must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`SwarmError::InvalidSocialWeight`] otherwise.
pub fn verify_social_weight(value: f64) -> SwarmResult<()> {
    if !value.is_finite() {
        return Err(SwarmError::InvalidSocialWeight { value, reason: "Weight must be finite." });
    }
    if value <= 0.0 {
        return Err(SwarmError::InvalidSocialWeight { value, reason: "Weight must be positive." });
    }
    Ok(())
}

/// Validate the inertia coefficient.
///
/// Any finite real is accepted; values in `[0.5, 1.0]` are typical.
///
/// # Errors
/// Returns [`SwarmError::InvalidInertia`] for NaN or infinite values.
pub fn verify_inertia(value: f64) -> SwarmResult<()> {
    if !value.is_finite() {
        return Err(SwarmError::InvalidInertia { value, reason: "Inertia must be finite." });
    }
    Ok(())
}

/// Validate the hysteresis threshold of a stopping rule.
///
/// The threshold must be **finite** and **non-negative**; zero means any
/// non-improving round counts as stagnant.
///
/// # Errors
/// Returns [`SwarmError::InvalidHysteresis`] otherwise.
pub fn verify_hysteresis(value: f64) -> SwarmResult<()> {
    if !value.is_finite() {
        return Err(SwarmError::InvalidHysteresis {
            value,
            reason: "Hysteresis must be finite.",
        });
    }
    if value < 0.0 {
        return Err(SwarmError::InvalidHysteresis {
            value,
            reason: "Hysteresis must be non-negative.",
        });
    }
    Ok(())
}

/// Validate the patience of a stopping rule.
///
/// # Errors
/// Returns [`SwarmError::InvalidPatience`] if `patience == 0`.
pub fn verify_patience(patience: usize) -> SwarmResult<()> {
    if patience == 0 {
        return Err(SwarmError::InvalidPatience {
            patience,
            reason: "Patience must allow at least one stagnant round.",
        });
    }
    Ok(())
}

/// Validate the optional hard round cap of a stopping rule.
///
/// - Accepts `None` (no cap; the patience rule alone stops the run).
/// - If `Some`, the cap must be `> 0`.
///
/// # Errors
/// Returns [`SwarmError::InvalidRoundLimit`] if a zero cap is supplied.
pub fn verify_round_limit(max_rounds: Option<usize>) -> SwarmResult<()> {
    if let Some(max_rounds) = max_rounds {
        if max_rounds == 0 {
            return Err(SwarmError::InvalidRoundLimit {
                max_rounds,
                reason: "Round limit must be greater than zero.",
            });
        }
    }
    Ok(())
}

/// Validate a pair of bound vectors and return the search-space dimension.
///
/// Checks:
/// - `lower.len() == upper.len()` (else [`SwarmError::BoundsMismatch`]),
/// - the vectors are non-empty,
/// - every entry is finite,
/// - `lower[j] <= upper[j]` for every dimension `j`.
///
/// # Returns
/// The common length of the two vectors.
///
/// # Errors
/// - [`SwarmError::BoundsMismatch`] on unequal lengths.
/// - [`SwarmError::EmptyBounds`] on zero-dimensional bounds.
/// - [`SwarmError::NonFiniteBound`] with the index/value of the first
///   offending entry.
/// - [`SwarmError::InvertedBound`] where a lower bound exceeds its upper
///   bound.
pub fn validate_bounds(lower: &Array1<f64>, upper: &Array1<f64>) -> SwarmResult<usize> {
    if lower.len() != upper.len() {
        return Err(SwarmError::BoundsMismatch {
            lower_len: lower.len(),
            upper_len: upper.len(),
        });
    }
    if lower.is_empty() {
        return Err(SwarmError::EmptyBounds);
    }
    for (index, (&lo, &hi)) in lower.iter().zip(upper.iter()).enumerate() {
        if !lo.is_finite() {
            return Err(SwarmError::NonFiniteBound {
                index,
                value: lo,
                reason: "Lower bounds must be finite.",
            });
        }
        if !hi.is_finite() {
            return Err(SwarmError::NonFiniteBound {
                index,
                value: hi,
                reason: "Upper bounds must be finite.",
            });
        }
        if lo > hi {
            return Err(SwarmError::InvertedBound { index, lower: lo, upper: hi });
        }
    }
    Ok(lower.len())
}

/// Validate a global-best vector against a particle's dimension.
///
/// # Errors
/// Returns [`SwarmError::DimensionMismatch`] if the lengths disagree.
pub fn validate_global_best(global_best: &Position, dimension: usize) -> SwarmResult<()> {
    if global_best.len() != dimension {
        return Err(SwarmError::DimensionMismatch {
            expected: dimension,
            found: global_best.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Accept/reject behavior of every verify_* helper.
    // - Bound validation: length, emptiness, finiteness, and ordering.
    // - Global-best dimension agreement.
    //
    // They intentionally DO NOT cover:
    // - The call sites that log and propagate these errors (particle and
    //   swarm test modules).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that option checks accept their documented defaults.
    //
    // Given
    // -----
    // - The default population size, weights, and inertia.
    //
    // Expect
    // ------
    // - Every helper returns Ok.
    fn option_checks_accept_defaults() {
        assert!(verify_population_size(50).is_ok());
        assert!(verify_cognitive_weight(2.0).is_ok());
        assert!(verify_social_weight(2.0).is_ok());
        assert!(verify_inertia(0.5).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Ensure a zero population is rejected.
    //
    // Given
    // -----
    // - `size == 0`.
    //
    // Expect
    // ------
    // - `SwarmError::InvalidPopulationSize`.
    fn zero_population_is_rejected() {
        match verify_population_size(0) {
            Err(SwarmError::InvalidPopulationSize { size: 0, .. }) => {}
            other => panic!("Expected InvalidPopulationSize, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Ensure non-positive and non-finite weights are rejected.
    //
    // Given
    // -----
    // - Zero, negative, and NaN weights for both pulls.
    //
    // Expect
    // ------
    // - The matching error variant for each.
    fn degenerate_weights_are_rejected() {
        assert!(matches!(
            verify_cognitive_weight(0.0),
            Err(SwarmError::InvalidCognitiveWeight { .. })
        ));
        assert!(matches!(
            verify_cognitive_weight(f64::NAN),
            Err(SwarmError::InvalidCognitiveWeight { .. })
        ));
        assert!(matches!(
            verify_social_weight(-1.0),
            Err(SwarmError::InvalidSocialWeight { .. })
        ));
        assert!(matches!(
            verify_inertia(f64::INFINITY),
            Err(SwarmError::InvalidInertia { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify hysteresis accepts zero and rejects negative or NaN values.
    //
    // Given
    // -----
    // - Hysteresis values 0.0, 1e-6, -1e-6, and NaN.
    //
    // Expect
    // ------
    // - Zero and 1e-6 pass; the others fail with InvalidHysteresis.
    fn hysteresis_bounds_are_enforced() {
        assert!(verify_hysteresis(0.0).is_ok());
        assert!(verify_hysteresis(1e-6).is_ok());
        assert!(matches!(
            verify_hysteresis(-1e-6),
            Err(SwarmError::InvalidHysteresis { .. })
        ));
        assert!(matches!(
            verify_hysteresis(f64::NAN),
            Err(SwarmError::InvalidHysteresis { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify patience and round-limit checks.
    //
    // Given
    // -----
    // - Zero and positive patience; absent, zero, and positive caps.
    //
    // Expect
    // ------
    // - Zero patience and a zero cap are rejected; the rest pass.
    fn patience_and_round_limit_are_enforced() {
        assert!(verify_patience(25).is_ok());
        assert!(matches!(verify_patience(0), Err(SwarmError::InvalidPatience { .. })));
        assert!(verify_round_limit(None).is_ok());
        assert!(verify_round_limit(Some(500)).is_ok());
        assert!(matches!(
            verify_round_limit(Some(0)),
            Err(SwarmError::InvalidRoundLimit { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify that well-formed bounds validate and report their dimension.
    //
    // Given
    // -----
    // - Bounds [-5, -5] to [5, 5].
    //
    // Expect
    // ------
    // - `validate_bounds` returns Ok(2).
    fn well_formed_bounds_report_dimension() {
        let lower = array![-5.0, -5.0];
        let upper = array![5.0, 5.0];
        assert_eq!(validate_bounds(&lower, &upper).unwrap(), 2);
    }

    #[test]
    // Purpose
    // -------
    // Ensure malformed bounds are rejected with the right variant.
    //
    // Given
    // -----
    // - Unequal lengths, empty vectors, a NaN entry, and an inverted pair.
    //
    // Expect
    // ------
    // - BoundsMismatch, EmptyBounds, NonFiniteBound, and InvertedBound
    //   respectively.
    fn malformed_bounds_are_rejected() {
        assert!(matches!(
            validate_bounds(&array![0.0], &array![1.0, 2.0]),
            Err(SwarmError::BoundsMismatch { lower_len: 1, upper_len: 2 })
        ));
        assert!(matches!(
            validate_bounds(&Array1::zeros(0), &Array1::zeros(0)),
            Err(SwarmError::EmptyBounds)
        ));
        assert!(matches!(
            validate_bounds(&array![f64::NAN], &array![1.0]),
            Err(SwarmError::NonFiniteBound { index: 0, .. })
        ));
        assert!(matches!(
            validate_bounds(&array![2.0], &array![1.0]),
            Err(SwarmError::InvertedBound { index: 0, .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify the global-best dimension contract.
    //
    // Given
    // -----
    // - A 2-vector checked against dimensions 2 and 3.
    //
    // Expect
    // ------
    // - Ok for 2; DimensionMismatch { expected: 3, found: 2 } for 3.
    fn global_best_dimension_is_enforced() {
        let gbest = array![0.0, 0.0];
        assert!(validate_global_best(&gbest, 2).is_ok());
        assert!(matches!(
            validate_global_best(&gbest, 3),
            Err(SwarmError::DimensionMismatch { expected: 3, found: 2 })
        ));
    }
}
