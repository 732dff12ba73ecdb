//! pso::swarm — population ownership, global-best tracking, and the
//! convergence loop.
//!
//! Purpose
//! -------
//! Implement the orchestrator of the optimizer: a swarm owns a fixed
//! population of particles, initializes them inside the sampling box,
//! tracks the best (position, value) pair seen by any particle, and runs
//! the iterate-until-stagnant loop.
//!
//! Key behaviors
//! -------------
//! - Validate bounds before any particle is created; construction fails
//!   entirely on malformed bounds (no partially initialized swarm).
//! - Initialize each particle's position uniformly within
//!   `[lower[j], upper[j]]` per dimension (the `Random` strategy, the
//!   only one implemented).
//! - Seed the global best from the first particle unconditionally, then
//!   replace it only on strictly smaller personal bests while the rest
//!   of the population is created.
//! - Run rounds until the global best has failed to improve by more than
//!   the hysteresis for `patience` consecutive rounds, or until the
//!   optional hard round cap fires.
//! - Record every global-best improvement in a history vector and
//!   report it on stderr when verbose.
//!
//! Invariants & assumptions
//! ------------------------
//! - `lower_bounds.len() == upper_bounds.len()` equals the dimension of
//!   every particle; fixed at construction.
//! - The population is created at construction and never resized.
//! - `best_value` never regresses: each round it either decreases or
//!   stays equal.
//! - Bounds constrain initialization only; updates are not clamped.
//!
//! Conventions
//! -----------
//! - **Ordering is semantic**: each round updates particles strictly
//!   sequentially, and every particle reads the global best as of the
//!   start of its own turn — improvements made by earlier particles in a
//!   round are visible to later ones (immediate-update PSO). Do not
//!   parallelize the inner loop; a concurrent variant would have to
//!   choose and document round-buffered semantics instead, which
//!   produces different trajectories.
//! - The random source is a single seedable `StdRng` owned by the swarm
//!   and threaded explicitly through every draw, so a seed fully
//!   determines a run.
//! - Errors bubble up as [`SwarmResult`]; a dimension mismatch mid-round
//!   aborts the run.
//!
//! Downstream usage
//! ----------------
//! - Construct via [`Swarm::new`] with an objective, bounds, and
//!   validated [`SwarmOptions`]; call [`Swarm::run`] with a
//!   [`StoppingRule`] to obtain a [`RunOutcome`].
//! - Repeated `run` calls continue from the current swarm state, which
//!   is occasionally useful for staged stopping rules.
//! - The one-call wrapper [`minimize`](crate::pso::api::minimize) covers
//!   the common construct-and-run case.
//!
//! Testing notes
//! -------------
//! - Unit tests here cover bound rejection before any evaluation,
//!   in-box initialization, global-best seeding, monotone improvement,
//!   evaluation accounting, the round cap, and seeded determinism.
//! - Convergence quality on benchmark objectives is exercised by the
//!   integration suite.
use crate::pso::{
    errors::SwarmResult,
    particle::Particle,
    traits::{InitStrategy, Objective, RunOutcome, StoppingRule, SwarmOptions, Termination},
    types::{Fitness, Position},
    validation::validate_bounds,
};
use ndarray::Array1;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// The population of particles plus the shared global-best tracker and
/// the iteration control loop.
///
/// The objective is held for the swarm's lifetime and evaluated once per
/// particle at construction and once per particle per round.
#[derive(Debug, Clone)]
pub struct Swarm<F: Objective> {
    objective: F,
    lower_bounds: Array1<f64>,
    upper_bounds: Array1<f64>,
    particles: Vec<Particle>,
    best_position: Position,
    best_value: Fitness,
    history: Vec<Fitness>,
    evaluations: usize,
    rounds: usize,
    rng: StdRng,
    options: SwarmOptions,
}

impl<F: Objective> Swarm<F> {
    /// Create a swarm of `options.population_size` particles initialized
    /// inside the sampling box.
    ///
    /// # Behavior
    /// - Bounds are validated first; on any bound error the swarm is not
    ///   constructed and the objective is never evaluated.
    /// - The random source is seeded from `options.seed`, or from the
    ///   operating system when no seed is given.
    /// - Particles are created one at a time; the first seeds the global
    ///   best unconditionally, each later one replaces it only when its
    ///   personal best is strictly smaller.
    ///
    /// # Errors
    /// - [`SwarmError::BoundsMismatch`] (and the other bound variants)
    ///   from bound validation.
    /// - Any error propagated from the objective while seeding particle
    ///   personal bests.
    ///
    /// [`SwarmError::BoundsMismatch`]: crate::pso::errors::SwarmError::BoundsMismatch
    pub fn new(
        objective: F, lower_bounds: Array1<f64>, upper_bounds: Array1<f64>,
        options: SwarmOptions,
    ) -> SwarmResult<Self> {
        if let Err(err) = validate_bounds(&lower_bounds, &upper_bounds) {
            eprintln!("warning: rejecting swarm bounds: {err}");
            return Err(err);
        }

        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut particles = Vec::with_capacity(options.population_size);

        // The first particle seeds the global best unconditionally.
        let first =
            Self::spawn_particle(&objective, &lower_bounds, &upper_bounds, &options, &mut rng)?;
        let mut best_position = first.best_position().clone();
        let mut best_value = first.best_value();
        particles.push(first);

        for _ in 1..options.population_size {
            let particle =
                Self::spawn_particle(&objective, &lower_bounds, &upper_bounds, &options, &mut rng)?;
            if particle.best_value() < best_value {
                best_value = particle.best_value();
                best_position = particle.best_position().clone();
            }
            particles.push(particle);
        }

        let evaluations = particles.len();
        let history = vec![best_value];
        Ok(Self {
            objective,
            lower_bounds,
            upper_bounds,
            particles,
            best_position,
            best_value,
            history,
            evaluations,
            rounds: 0,
            rng,
            options,
        })
    }

    /// Run the convergence loop until the stopping rule fires.
    ///
    /// # Behavior
    /// - Each round updates every particle strictly sequentially and
    ///   ingests its personal best into the global best on `<=`
    ///   immediately, so later particles in the same round chase
    ///   improvements made by earlier ones. This ordering is part of the
    ///   algorithm's semantics (see the module docs).
    /// - A round whose improvement `previous_best − best_value` is at
    ///   most `stop.hysteresis` increments the stagnation counter; an
    ///   improving round resets it to zero and records the new best. The
    ///   loop ends once the counter reaches `stop.patience`.
    /// - `stop.max_rounds`, when present, caps the rounds executed by
    ///   this call; reaching it yields a non-converged outcome. Without
    ///   a cap, an objective that keeps improving keeps the loop alive.
    /// - When `options.verbose` is set, the starting best and every
    ///   improvement are reported on stderr.
    ///
    /// # Returns
    /// A validated [`RunOutcome`] carrying the swarm's cumulative round
    /// and evaluation counters.
    ///
    /// # Errors
    /// - Propagates any particle-update error; a
    ///   [`DimensionMismatch`](crate::pso::errors::SwarmError::DimensionMismatch)
    ///   or objective failure aborts the run mid-round.
    /// - Propagates outcome validation errors for non-finite best state.
    pub fn run(&mut self, stop: &StoppingRule) -> SwarmResult<RunOutcome> {
        if self.options.verbose {
            eprintln!(
                "init: best = {:.6e} after {} evaluations",
                self.best_value, self.evaluations
            );
        }

        let mut executed = 0usize;
        let mut stagnant = 0usize;
        let termination = loop {
            if stagnant >= stop.patience {
                break Termination::Stagnated;
            }
            if let Some(cap) = stop.max_rounds {
                if executed >= cap {
                    break Termination::RoundLimit;
                }
            }

            let previous_best = self.best_value;
            {
                let Self { objective, particles, best_position, best_value, rng, .. } = self;
                for particle in particles.iter_mut() {
                    particle.update(objective, best_position, rng)?;
                    if particle.best_value() <= *best_value {
                        *best_value = particle.best_value();
                        best_position.assign(particle.best_position());
                    }
                }
            }
            self.evaluations += self.particles.len();
            executed += 1;
            self.rounds += 1;

            let delta = previous_best - self.best_value;
            if delta <= stop.hysteresis {
                stagnant += 1;
            } else {
                stagnant = 0;
                self.history.push(self.best_value);
                if self.options.verbose {
                    eprintln!("round {}: best = {:.6e}", self.rounds, self.best_value);
                }
            }
        };

        RunOutcome::new(
            self.best_position.clone(),
            self.best_value,
            termination,
            self.rounds,
            self.evaluations,
        )
    }

    /// Best objective value observed by any particle so far.
    pub fn best_value(&self) -> Fitness {
        self.best_value
    }

    /// Position that produced [`Swarm::best_value`].
    pub fn best_position(&self) -> &Position {
        &self.best_position
    }

    /// Global-best values recorded at seeding and after each improving
    /// round, in order. Strictly a diagnostic; the values are
    /// non-increasing.
    pub fn history(&self) -> &[Fitness] {
        &self.history
    }

    /// Objective evaluations performed so far, including the one per
    /// particle at construction.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Rounds executed so far across all `run` calls.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// The particles, in update order.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Search-space dimension shared by all particles.
    pub fn dimension(&self) -> usize {
        self.lower_bounds.len()
    }

    /// Per-dimension lower sampling bounds (initialization only).
    pub fn lower_bounds(&self) -> &Array1<f64> {
        &self.lower_bounds
    }

    /// Per-dimension upper sampling bounds (initialization only).
    pub fn upper_bounds(&self) -> &Array1<f64> {
        &self.upper_bounds
    }

    // ---- Helper methods ----

    /// Draw one particle according to the initialization strategy.
    fn spawn_particle(
        objective: &F, lower_bounds: &Array1<f64>, upper_bounds: &Array1<f64>,
        options: &SwarmOptions, rng: &mut StdRng,
    ) -> SwarmResult<Particle> {
        let position = match options.init {
            InitStrategy::Random => Array1::from_shape_fn(lower_bounds.len(), |j| {
                rng.random_range(lower_bounds[j]..=upper_bounds[j])
            }),
        };
        Particle::new(objective, position, options.cognitive, options.social, options.inertia, rng)
    }
}
