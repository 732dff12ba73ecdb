//! swarm_optim — particle swarm optimization over bounded continuous
//! parameter spaces.
//!
//! Purpose
//! -------
//! Serve as the crate root for a derivative-free minimizer: a particle
//! swarm optimizer for scalar objectives over box-bounded, real-valued
//! search spaces, together with benchmark and curve-fitting objective
//! collaborators.
//!
//! Key behaviors
//! -------------
//! - Re-export the core modules (`pso` and `objectives`) as the public
//!   crate surface.
//! - `pso` owns the particle/swarm update dynamics, the patience-based
//!   convergence loop, configuration, validation, and the unified error
//!   surface.
//! - `objectives` supplies plug-in objective functions (sphere, Ackley,
//!   dataset residual fitting) that exercise the optimizer without being
//!   part of it.
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer minimizes; lower fitness is better.
//! - All numerical work is `f64` over `ndarray` vectors; randomness is
//!   injected through a seedable source so runs are reproducible.
//! - Fallible paths return `SwarmResult`; the crate never intentionally
//!   panics in non-test code and contains no `unsafe`.
//!
//! Conventions
//! -----------
//! - Single-threaded and synchronous: each round updates particles
//!   strictly sequentially with immediate global-best ingestion, which
//!   is part of the algorithm's semantics (see `pso::swarm`).
//! - Callers needing wall-clock or evaluation budgets compose them on
//!   top of the stopping rule's round cap.
//!
//! Downstream usage
//! ----------------
//! - Most callers want `pso::minimize` with a closure or an
//!   `objectives` type, or `use swarm_optim::pso::prelude::*` for the
//!   curated surface.
//! - Long-lived callers construct a `pso::Swarm` directly and drive
//!   `run` themselves.
//!
//! Testing notes
//! -------------
//! - Unit tests live beside each module; end-to-end convergence,
//!   determinism, and degenerate-population behavior are covered by the
//!   integration suite under `tests/`.

pub mod objectives;
pub mod pso;
