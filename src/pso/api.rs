//! High-level entry point for minimizing an objective with a particle
//! swarm.
//!
//! This constructs a [`Swarm`] over the supplied sampling box, runs the
//! convergence loop to completion, and returns the normalized
//! [`RunOutcome`].
use crate::pso::{
    errors::SwarmResult,
    swarm::Swarm,
    traits::{Objective, RunOutcome, StoppingRule, SwarmOptions},
};
use ndarray::Array1;

/// Minimize `objective` over the box `[lower_bounds, upper_bounds]`.
///
/// # Behavior
/// - Builds a [`Swarm`] with the given options (bounds validated, RNG
///   seeded, particles initialized uniformly in the box).
/// - Runs the patience-based convergence loop with `stop`.
///
/// # Parameters
/// - `objective`: Your objective implementing [`Objective`] (plain
///   closures `Fn(&Position) -> f64` qualify via the blanket impl).
/// - `lower_bounds`, `upper_bounds`: Per-dimension sampling box used for
///   initialization only; equal lengths required.
/// - `options`: Swarm configuration (population, weights, inertia, init
///   strategy, seed, verbosity).
/// - `stop`: Stopping rule (hysteresis, patience, optional round cap).
///
/// # Errors
/// - Propagates bound and construction errors from [`Swarm::new`].
/// - Propagates run-time errors from [`Swarm::run`] (dimension
///   mismatches, objective failures, non-finite outcomes).
///
/// # Returns
/// A [`RunOutcome`] with the best position and value found, convergence
/// status, and round/evaluation counters.
///
/// # Example
/// ```
/// use ndarray::array;
/// use swarm_optim::pso::{Position, StoppingRule, SwarmOptions, minimize};
///
/// let sphere = |x: &Position| x.dot(x);
/// let options = SwarmOptions::default().with_seed(42);
/// let outcome = minimize(
///     sphere,
///     array![-5.0, -5.0],
///     array![5.0, 5.0],
///     options,
///     &StoppingRule::default(),
/// )?;
/// assert!(outcome.best_value < 1e-2);
/// # Ok::<(), swarm_optim::pso::SwarmError>(())
/// ```
///
/// [`Position`]: crate::pso::types::Position
pub fn minimize<F: Objective>(
    objective: F, lower_bounds: Array1<f64>, upper_bounds: Array1<f64>, options: SwarmOptions,
    stop: &StoppingRule,
) -> SwarmResult<RunOutcome> {
    let mut swarm = Swarm::new(objective, lower_bounds, upper_bounds, options)?;
    swarm.run(stop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pso::types::Position;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The construct-and-run wrapper on a quick seeded sphere problem.
    //
    // They intentionally DO NOT cover:
    // - Swarm construction and loop details (swarm tests) or convergence
    //   quality (integration tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify the one-call wrapper wires construction and the run loop
    // together.
    //
    // Given
    // -----
    // - A seeded sphere minimization with modest patience.
    //
    // Expect
    // ------
    // - A converged outcome whose best value improves on the worst
    //   possible seeded value for the box.
    fn minimize_runs_end_to_end() {
        // Arrange
        let sphere = |x: &Position| x.dot(x);
        let options = SwarmOptions {
            population_size: 20,
            seed: Some(5),
            ..SwarmOptions::default()
        };
        let stop = StoppingRule::new(1e-6, 10, Some(500)).unwrap();

        // Act
        let outcome = minimize(sphere, array![-5.0, -5.0], array![5.0, 5.0], options, &stop)
            .expect("sphere minimization should succeed");

        // Assert
        assert!(outcome.converged);
        assert!(outcome.best_value < 50.0);
        assert!(outcome.evaluations >= 20);
    }
}
