//! pso::particle — one candidate solution and its update dynamics.
//!
//! Purpose
//! -------
//! Implement the leaf of the optimizer: a particle owns one candidate
//! solution's position, velocity, and personal-best record, and knows how
//! to advance itself one step given the swarm's current global best.
//!
//! Key behaviors
//! -------------
//! - Seed the initial velocity with independent uniform draws from
//!   [`INITIAL_VELOCITY_RANGE`] (the closed interval `[-1, 1]`).
//! - Seed the personal best by evaluating the objective at the initial
//!   position, propagating any objective error (e.g. an arity
//!   rejection) to the caller.
//! - Apply the velocity/position update per dimension with fresh
//!   `U(0, 1)` draws, then re-evaluate and fold the result into the
//!   personal best, with ties favoring the new position.
//! - Enforce the global-best dimension contract up front, so a failed
//!   update leaves the particle untouched.
//!
//! Invariants & assumptions
//! ------------------------
//! - `position`, `velocity`, and `best_position` share one length, fixed
//!   at construction; every update preserves it.
//! - `best_value` is monotonically non-increasing over the particle's
//!   lifetime.
//! - No bound clamping is applied after an update; particles may leave
//!   the initialization box.
//!
//! Conventions
//! -----------
//! - The objective and the random source are passed into each call
//!   rather than stored, keeping the particle free of lifetimes and the
//!   randomness explicitly injected and seedable.
//! - Errors bubble up as [`SwarmResult`]; this module never panics in
//!   non-test code.
//!
//! Downstream usage
//! ----------------
//! - [`Swarm`](crate::pso::swarm::Swarm) creates particles during its own
//!   construction and drives `update` once per particle per round,
//!   passing the global best as an explicit value.
//!
//! Testing notes
//! -------------
//! - Unit tests here cover construction, the length invariant, personal
//!   best monotonicity and tie handling, atomic failure on dimension
//!   mismatch, and seeded determinism.
//! - Swarm-level ordering semantics are covered by the swarm and
//!   integration tests.
use crate::pso::{
    errors::SwarmResult,
    traits::Objective,
    types::{Fitness, INITIAL_VELOCITY_RANGE, Position, Velocity},
    validation::validate_global_best,
};
use ndarray::Array1;
use rand::Rng;

/// One candidate solution in the search space.
///
/// Carries the current position and velocity plus the best position this
/// particle has visited and the objective value there. The dynamics
/// coefficients (`cognitive`, `social`, `inertia`) are fixed at
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    position: Position,
    velocity: Velocity,
    best_position: Position,
    best_value: Fitness,
    cognitive: f64,
    social: f64,
    inertia: f64,
}

impl Particle {
    /// Create a particle at `position`.
    ///
    /// The velocity is seeded with independent uniform draws from
    /// `[-1, 1]` per dimension, and the personal best is seeded by
    /// evaluating `objective` at the initial position.
    ///
    /// The caller is responsible for validating the dynamics
    /// coefficients; [`SwarmOptions::new`] does so for swarm-created
    /// particles.
    ///
    /// # Errors
    /// Propagates any error from `objective.evaluate`, e.g.
    /// [`SwarmError::DimensionMismatch`] from an objective that rejects
    /// the position's arity. The error is never swallowed.
    ///
    /// [`SwarmOptions::new`]: crate::pso::traits::SwarmOptions::new
    /// [`SwarmError::DimensionMismatch`]: crate::pso::errors::SwarmError::DimensionMismatch
    pub fn new<F: Objective>(
        objective: &F, position: Position, cognitive: f64, social: f64, inertia: f64,
        rng: &mut impl Rng,
    ) -> SwarmResult<Self> {
        let (v_lo, v_hi) = INITIAL_VELOCITY_RANGE;
        let velocity = Array1::from_shape_fn(position.len(), |_| rng.random_range(v_lo..=v_hi));
        let best_value = objective.evaluate(&position)?;
        let best_position = position.clone();
        Ok(Self { position, velocity, best_position, best_value, cognitive, social, inertia })
    }

    /// Advance the particle one step toward its personal best and the
    /// swarm's global best.
    ///
    /// # Behavior
    /// - Validates that `global_best` has exactly `dimension` entries;
    ///   on mismatch a diagnostic warning is written to stderr and the
    ///   error is returned with the particle's position, velocity, and
    ///   personal best untouched (atomic failure).
    /// - For each dimension `i` independently, with fresh draws
    ///   `r1, r2 ~ U(0, 1)`:
    ///
    ///   ```text
    ///   v[i] = inertia·v[i]
    ///        + cognitive·(best_position[i] − position[i])·r1
    ///        + social·(global_best[i] − position[i])·r2
    ///   x[i] = x[i] + v[i]
    ///   ```
    /// - Evaluates the objective at the new position. On
    ///   `fitness <= best_value` the personal best is overwritten — the
    ///   tie deliberately favors the newer position.
    /// - No bound clamping is applied; the particle may leave the
    ///   initialization box.
    ///
    /// # Errors
    /// - [`SwarmError::DimensionMismatch`] when `global_best` has the
    ///   wrong length (logged, then propagated; the run must abort).
    /// - Any error raised by `objective.evaluate` at the new position.
    ///
    /// [`SwarmError::DimensionMismatch`]: crate::pso::errors::SwarmError::DimensionMismatch
    pub fn update<F: Objective>(
        &mut self, objective: &F, global_best: &Position, rng: &mut impl Rng,
    ) -> SwarmResult<()> {
        if let Err(err) = validate_global_best(global_best, self.dimension()) {
            eprintln!(
                "warning: global best has {} entries but the particle dimension is {}",
                global_best.len(),
                self.dimension()
            );
            return Err(err);
        }

        for i in 0..self.dimension() {
            let r1: f64 = rng.random();
            let r2: f64 = rng.random();
            self.velocity[i] = self.inertia * self.velocity[i]
                + self.cognitive * (self.best_position[i] - self.position[i]) * r1
                + self.social * (global_best[i] - self.position[i]) * r2;
            self.position[i] += self.velocity[i];
        }

        let fitness = objective.evaluate(&self.position)?;
        if fitness <= self.best_value {
            self.best_value = fitness;
            self.best_position.assign(&self.position);
        }
        Ok(())
    }

    /// The search-space dimension this particle was constructed with.
    pub fn dimension(&self) -> usize {
        self.position.len()
    }

    /// Current candidate position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Current per-dimension step.
    pub fn velocity(&self) -> &Velocity {
        &self.velocity
    }

    /// Best position this particle has visited.
    pub fn best_position(&self) -> &Position {
        &self.best_position
    }

    /// Objective value at [`Particle::best_position`].
    pub fn best_value(&self) -> Fitness {
        self.best_value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pso::errors::SwarmError;
    use ndarray::array;
    use rand::{SeedableRng, rngs::StdRng};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Construction: velocity sampling range, personal-best seeding, and
    //   propagation of objective arity rejections.
    // - The length invariant across updates.
    // - Personal-best monotonicity and <= tie handling.
    // - Atomic failure on a wrong-length global best.
    // - Seeded determinism of the update dynamics.
    //
    // They intentionally DO NOT cover:
    // - Global-best bookkeeping across a population (swarm tests).
    // - End-to-end convergence (integration tests).
    // -------------------------------------------------------------------------

    fn sphere(x: &Position) -> f64 {
        x.dot(x)
    }

    /// Objective that insists on two-dimensional positions.
    struct TwoDimensionalOnly;

    impl Objective for TwoDimensionalOnly {
        fn evaluate(&self, position: &Position) -> SwarmResult<Fitness> {
            if position.len() != 2 {
                return Err(SwarmError::DimensionMismatch {
                    expected: 2,
                    found: position.len(),
                });
            }
            Ok(position.dot(position))
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that construction seeds the personal best at the initial
    // position and draws the velocity inside the documented range.
    //
    // Given
    // -----
    // - A sphere objective and the initial position (1, 2).
    //
    // Expect
    // ------
    // - best_value == 5.0, best_position == position, and every velocity
    //   component lies in [-1, 1].
    fn construction_seeds_personal_best_and_velocity() {
        // Arrange
        let mut rng = StdRng::seed_from_u64(0);
        let position = array![1.0, 2.0];

        // Act
        let particle = Particle::new(&sphere, position.clone(), 2.0, 2.0, 0.5, &mut rng)
            .expect("construction with a well-formed position should succeed");

        // Assert
        assert_eq!(particle.best_value(), 5.0);
        assert_eq!(particle.best_position(), &position);
        assert_eq!(particle.position(), &position);
        assert_eq!(particle.velocity().len(), 2);
        assert!(particle.velocity().iter().all(|v| (-1.0..=1.0).contains(v)));
    }

    #[test]
    // Purpose
    // -------
    // Ensure an objective that rejects the position's arity fails
    // construction with the propagated error.
    //
    // Given
    // -----
    // - A strictly 2-D objective and a 3-D initial position.
    //
    // Expect
    // ------
    // - `Particle::new` returns DimensionMismatch { expected: 2, found: 3 }.
    fn construction_propagates_objective_arity_rejection() {
        // Arrange
        let mut rng = StdRng::seed_from_u64(0);

        // Act
        let result =
            Particle::new(&TwoDimensionalOnly, array![1.0, 2.0, 3.0], 2.0, 2.0, 0.5, &mut rng);

        // Assert
        assert!(matches!(
            result,
            Err(SwarmError::DimensionMismatch { expected: 2, found: 3 })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Verify the length invariant survives repeated updates.
    //
    // Given
    // -----
    // - A 3-D particle updated ten times against a fixed global best.
    //
    // Expect
    // ------
    // - position, velocity, and best_position all keep length 3.
    fn update_preserves_length_invariant() {
        // Arrange
        let mut rng = StdRng::seed_from_u64(1);
        let mut particle =
            Particle::new(&sphere, array![1.0, -2.0, 3.0], 2.0, 2.0, 0.5, &mut rng).unwrap();
        let global_best = array![0.0, 0.0, 0.0];

        // Act
        for _ in 0..10 {
            particle.update(&sphere, &global_best, &mut rng).unwrap();
        }

        // Assert
        assert_eq!(particle.position().len(), 3);
        assert_eq!(particle.velocity().len(), 3);
        assert_eq!(particle.best_position().len(), 3);
    }

    #[test]
    // Purpose
    // -------
    // Verify that the personal best never regresses across updates.
    //
    // Given
    // -----
    // - A sphere-objective particle updated fifty times while tracking
    //   best_value after each step.
    //
    // Expect
    // ------
    // - The recorded sequence is non-increasing.
    fn personal_best_is_non_increasing() {
        // Arrange
        let mut rng = StdRng::seed_from_u64(2);
        let mut particle =
            Particle::new(&sphere, array![4.0, -3.0], 2.0, 2.0, 0.5, &mut rng).unwrap();
        let global_best = array![0.0, 0.0];
        let mut previous = particle.best_value();

        // Act + Assert
        for _ in 0..50 {
            particle.update(&sphere, &global_best, &mut rng).unwrap();
            assert!(particle.best_value() <= previous);
            previous = particle.best_value();
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a tie in fitness adopts the newer position (the update
    // compares with <=, not <).
    //
    // Given
    // -----
    // - A constant objective, so every evaluation ties the seeded best.
    //
    // Expect
    // ------
    // - After one update the personal best equals the moved position, not
    //   the starting one.
    fn tie_in_fitness_favors_new_position() {
        // Arrange
        let constant = |_: &Position| 1.0;
        let mut rng = StdRng::seed_from_u64(3);
        let start = array![1.0, 1.0];
        let mut particle = Particle::new(&constant, start.clone(), 2.0, 2.0, 0.5, &mut rng).unwrap();

        // Act
        particle.update(&constant, &array![0.0, 0.0], &mut rng).unwrap();

        // Assert
        assert_eq!(particle.best_value(), 1.0);
        assert_eq!(particle.best_position(), particle.position());
        assert_ne!(particle.best_position(), &start);
    }

    #[test]
    // Purpose
    // -------
    // Ensure a wrong-length global best fails without mutating the
    // particle (atomic failure).
    //
    // Given
    // -----
    // - A 2-D particle and a 3-entry global best.
    //
    // Expect
    // ------
    // - DimensionMismatch is returned and position/velocity/personal best
    //   are bitwise unchanged.
    fn wrong_length_global_best_fails_atomically() {
        // Arrange
        let mut rng = StdRng::seed_from_u64(4);
        let mut particle =
            Particle::new(&sphere, array![1.0, 2.0], 2.0, 2.0, 0.5, &mut rng).unwrap();
        let before = particle.clone();

        // Act
        let result = particle.update(&sphere, &array![0.0, 0.0, 0.0], &mut rng);

        // Assert
        assert!(matches!(
            result,
            Err(SwarmError::DimensionMismatch { expected: 2, found: 3 })
        ));
        assert_eq!(particle, before);
    }

    #[test]
    // Purpose
    // -------
    // Verify that identically seeded random sources reproduce identical
    // trajectories.
    //
    // Given
    // -----
    // - Two particles constructed and updated with rngs seeded to the
    //   same value and otherwise identical inputs.
    //
    // Expect
    // ------
    // - position, velocity, and personal best agree exactly after every
    //   update.
    fn seeded_updates_are_deterministic() {
        // Arrange
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        let start = array![2.5, -1.5];
        let mut a = Particle::new(&sphere, start.clone(), 2.0, 2.0, 0.5, &mut rng_a).unwrap();
        let mut b = Particle::new(&sphere, start, 2.0, 2.0, 0.5, &mut rng_b).unwrap();
        let global_best = array![0.0, 0.0];

        // Act + Assert
        for _ in 0..20 {
            a.update(&sphere, &global_best, &mut rng_a).unwrap();
            b.update(&sphere, &global_best, &mut rng_b).unwrap();
            assert_eq!(a.position(), b.position());
            assert_eq!(a.velocity(), b.velocity());
            assert_eq!(a.best_value(), b.best_value());
        }
    }
}
