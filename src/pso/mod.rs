//! pso — particle swarm minimization over bounded continuous spaces.
//!
//! Purpose
//! -------
//! Provide a self-contained particle swarm optimizer for **minimizing** a
//! scalar objective `f(x)` over a continuous, box-bounded, real-valued
//! parameter space, without derivatives. Callers implement a single
//! trait, [`Objective`] (or hand in a plain closure), and either drive a
//! [`Swarm`] directly or invoke [`minimize`] to construct and run one in
//! a single call.
//!
//! Key behaviors
//! -------------
//! - Represent one candidate solution as a [`Particle`] owning its
//!   position, velocity, and personal-best record, advanced one step at
//!   a time against an explicitly passed global best.
//! - Represent the population as a [`Swarm`] that validates its sampling
//!   box, initializes particles uniformly within it, tracks the global
//!   best, and runs the patience-based convergence loop
//!   ([`StoppingRule`]).
//! - Centralize configuration ([`SwarmOptions`], [`StoppingRule`]) and
//!   validation logic ([`validation`]) so downstream code can assume
//!   sane, finite inputs.
//! - Normalize results into a [`RunOutcome`] with convergence status and
//!   round/evaluation counters.
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer **always minimizes**; lower fitness is better.
//! - Position, velocity, and personal-best vectors share one length per
//!   particle, fixed at construction; bounds constrain initialization
//!   only.
//! - The global best never regresses, and each particle's personal best
//!   is non-increasing over its lifetime.
//! - [`Objective::evaluate`] must treat invalid inputs as recoverable
//!   [`SwarmError`] values, not panics; objective errors propagate to
//!   the caller uncaught.
//! - Randomness is injected: a single seedable `StdRng` is owned by the
//!   swarm and threaded explicitly through every draw, so identical
//!   seeds reproduce identical runs.
//!
//! Conventions
//! -----------
//! - Positions and velocities use the canonical aliases [`Position`] and
//!   [`Velocity`] (`Array1<f64>`).
//! - Rounds update particles strictly sequentially with immediate
//!   global-best ingestion; this asynchronous-update ordering is part of
//!   the algorithm's semantics and must not be parallelized silently
//!   (see the [`swarm`] module docs).
//! - Errors bubble up as [`SwarmResult<T>`] / [`SwarmError`]; this
//!   module and its children never intentionally panic in non-test code
//!   and use no `unsafe`.
//! - Progress reporting is opt-in via `SwarmOptions::verbose` and goes
//!   to stderr; the library performs no other I/O.
//!
//! Downstream usage
//! ----------------
//! - Implement [`Objective`] for your model type (or use a closure), then
//!   call [`minimize`] with:
//!   - per-dimension lower/upper sampling bounds,
//!   - a [`SwarmOptions`] configuration (population, weights, inertia,
//!     seed, verbosity), and
//!   - a [`StoppingRule`] (hysteresis, patience, optional round cap).
//! - Benchmark and residual objectives live in
//!   [`crate::objectives`]; any user-supplied model can be substituted
//!   without touching the optimizer.
//! - Long-lived callers can hold a [`Swarm`] and invoke
//!   [`Swarm::run`] repeatedly with different stopping rules.
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover:
//!   - construction, update dynamics, tie handling, and atomic
//!     dimension-mismatch failure in [`particle`],
//!   - bound rejection, best seeding, loop accounting, and determinism
//!     in [`swarm`],
//!   - accept/reject tables in [`validation`] and configuration
//!     invariants in [`traits`].
//! - Integration tests exercise end-to-end convergence on the sphere and
//!   Ackley benchmarks, the population-of-one degeneracy, and whole-run
//!   determinism.

pub mod api;
pub mod errors;
pub mod particle;
pub mod swarm;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::minimize;
pub use self::errors::{SwarmError, SwarmResult};
pub use self::particle::Particle;
pub use self::swarm::Swarm;
pub use self::traits::{
    InitStrategy, Objective, RunOutcome, StoppingRule, SwarmOptions, Termination,
};
pub use self::types::{Fitness, Position, Velocity};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use swarm_optim::pso::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::api::minimize;
    pub use super::errors::{SwarmError, SwarmResult};
    pub use super::swarm::Swarm;
    pub use super::traits::{Objective, RunOutcome, StoppingRule, SwarmOptions};
    pub use super::types::{Fitness, Position, Velocity};
}
