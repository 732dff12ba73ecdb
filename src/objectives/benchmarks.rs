//! Benchmark objectives used to validate the optimizer.
//!
//! Both functions are smooth, cheap to evaluate (the optimizer may call
//! them millions of times), and have their global minimum of 0 at the
//! origin:
//!
//! - [`Sphere`]: the convex bowl `f(x) = Σ xᵢ²`, any dimension.
//! - [`Ackley`]: the two-dimensional egg-crate Ackley function, a
//!   standard multimodal stress test with many shallow local minima
//!   around a single global basin.
use crate::pso::{
    errors::{SwarmError, SwarmResult},
    traits::Objective,
    types::{Fitness, Position},
};
use std::f64::consts::{E, PI};

/// The sphere function `f(x) = Σ xᵢ²`.
///
/// Convex, separable, minimized at the origin with value 0. Accepts any
/// dimension.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sphere;

impl Objective for Sphere {
    fn evaluate(&self, position: &Position) -> SwarmResult<Fitness> {
        Ok(position.dot(position))
    }
}

/// The two-dimensional Ackley function.
///
/// ```text
/// f(x, y) = e + 20
///         − 20·exp(−0.2·√(0.5·(x² + y²)))
///         − exp(0.5·(cos 2πx + cos 2πy))
/// ```
///
/// Global minimum 0 at the origin, surrounded by rings of shallow local
/// minima. Positions of any other arity are rejected with
/// [`SwarmError::DimensionMismatch`], which particle construction and
/// updates propagate.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ackley;

impl Objective for Ackley {
    fn evaluate(&self, position: &Position) -> SwarmResult<Fitness> {
        if position.len() != 2 {
            return Err(SwarmError::DimensionMismatch { expected: 2, found: position.len() });
        }
        let (x, y) = (position[0], position[1]);
        let radial = -20.0 * (-0.2 * (0.5 * (x * x + y * y)).sqrt()).exp();
        let periodic = -(0.5 * ((2.0 * PI * x).cos() + (2.0 * PI * y).cos())).exp();
        Ok(E + 20.0 + radial + periodic)
    }
}
