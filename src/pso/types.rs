//! pso::types — shared numeric aliases and default parameters.
//!
//! Purpose
//! -------
//! Centralize the core numeric types and default constants used by the
//! particle swarm optimizer. By defining these in one place, the rest of
//! the crate can stay agnostic to `ndarray` and can more easily evolve if
//! the vector backend changes.
//!
//! Key behaviors
//! -------------
//! - Define canonical aliases for positions, velocities, and scalar
//!   objective values (`Position`, `Velocity`, `Fitness`).
//! - Collect the documented defaults for swarm construction and the
//!   stopping rule in one block of constants.
//!
//! Invariants & assumptions
//! ------------------------
//! - All positions and velocities are represented as `ndarray`
//!   containers over `f64` with equal length (the particle dimension).
//! - `Fitness` is a scalar `f64` where lower is better; the optimizer
//!   always minimizes.
//!
//! Conventions
//! -----------
//! - `Position` and `Velocity` are treated conceptually as vectors with
//!   length equal to the search-space dimension.
//! - Default constants encode the typical values documented on
//!   [`SwarmOptions`](crate::pso::traits::SwarmOptions) and
//!   [`StoppingRule`](crate::pso::traits::StoppingRule); callers may
//!   override any of them per run.
//!
//! Downstream usage
//! ----------------
//! - Other crate modules import these aliases instead of referring
//!   directly to `ndarray` generics.
//! - User code implementing [`Objective`](crate::pso::traits::Objective)
//!   receives a `&Position` and returns a `Fitness`.
//!
//! Testing notes
//! -------------
//! - This module only defines type aliases and constants; there are no
//!   dedicated unit tests. Correctness is exercised by the modules that
//!   instantiate these types.
use ndarray::Array1;

/// Candidate-solution position vector.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical position type
/// throughout the optimizer.
pub type Position = Array1<f64>;

/// Per-dimension step vector paired with a [`Position`].
///
/// Alias for `ndarray::Array1<f64>`, matching the shape of `Position`.
pub type Velocity = Array1<f64>;

/// Scalar objective value; lower is better.
pub type Fitness = f64;

/// Default number of particles in a swarm.
pub const DEFAULT_POPULATION_SIZE: usize = 50;

/// Default cognitive weight (pull toward a particle's personal best).
pub const DEFAULT_COGNITIVE_WEIGHT: f64 = 2.0;

/// Default social weight (pull toward the swarm's global best).
pub const DEFAULT_SOCIAL_WEIGHT: f64 = 2.0;

/// Default inertia (damping on the previous velocity).
pub const DEFAULT_INERTIA: f64 = 0.5;

/// Range for the uniform draw seeding each initial velocity component.
///
/// Initial velocities are sampled independently per dimension from the
/// closed interval `[-1, 1]`.
pub const INITIAL_VELOCITY_RANGE: (f64, f64) = (-1.0, 1.0);

/// Default hysteresis: minimum global-best improvement that counts as
/// progress for the stopping rule.
pub const DEFAULT_HYSTERESIS: f64 = 1e-6;

/// Default patience: consecutive stagnant rounds tolerated before a run
/// terminates.
pub const DEFAULT_PATIENCE: usize = 25;
