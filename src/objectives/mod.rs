//! objectives — objective-function collaborators for the optimizer.
//!
//! Purpose
//! -------
//! Supply ready-made [`Objective`](crate::pso::Objective) implementations
//! that plug into the swarm without touching the optimizer itself:
//! benchmark functions for validation and a residual sum-of-squares
//! objective for fitting surface models to observed data.
//!
//! Key behaviors
//! -------------
//! - [`benchmarks`]: the sphere bowl and the two-dimensional Ackley
//!   egg-crate, both minimized at the origin with value 0 and cheap
//!   enough to evaluate millions of times.
//! - [`residual`]: [`SurfaceFit`], binding a `(x, y, z)` dataset and a
//!   parametric surface model into a fitness function, plus the
//!   two-parameter Rosenbrock-style surface recovered by curve fitting.
//!
//! Conventions
//! -----------
//! - Objectives that have a fixed arity reject other arities with
//!   `DimensionMismatch`; the optimizer propagates such errors instead
//!   of catching them.
//! - Everything here is a plain collaborator: any user-supplied
//!   [`Objective`](crate::pso::Objective) (including a closure) can be
//!   substituted without changes to the swarm.

pub mod benchmarks;
pub mod residual;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::benchmarks::{Ackley, Sphere};
pub use self::residual::{SurfaceFit, rosenbrock_surface};
