//! Residual sum-of-squares objectives for fitting a surface model to
//! observed data.
//!
//! Purpose
//! -------
//! Turn a dataset of `(x, y, z)` observations and a parametric surface
//! model `z ≈ model(params, x, y)` into an [`Objective`] the optimizer
//! can minimize:
//!
//! ```text
//! fitness(params) = Σᵢ (zᵢ − model(params, xᵢ, yᵢ))²
//! ```
//!
//! Key behaviors
//! -------------
//! - Bind the dataset into the objective at construction, so the
//!   optimizer sees a plain position-to-fitness function.
//! - Validate the parameter arity declared at construction and reject
//!   other arities with [`SwarmError::DimensionMismatch`].
//! - Ship the two-parameter Rosenbrock-style surface
//!   [`rosenbrock_surface`] as a ready-made model.
//!
//! Conventions
//! -----------
//! - `z` is the observed response; lower fitness means a better fit, so
//!   a perfect fit scores 0.
//! - The model receives the full parameter vector; its arity contract is
//!   whatever `dimension` was declared at construction.
use crate::pso::{
    errors::{SwarmError, SwarmResult},
    traits::Objective,
    types::{Fitness, Position},
};

/// The two-parameter Rosenbrock-style surface
/// `model((a, b), x, y) = (a − x)² + b·(y − x²)²`.
///
/// Callers must pass exactly two parameters; [`SurfaceFit::rosenbrock`]
/// declares that arity so the fit objective enforces it before this
/// function indexes the vector.
pub fn rosenbrock_surface(params: &Position, x: f64, y: f64) -> f64 {
    let (a, b) = (params[0], params[1]);
    (a - x).powi(2) + b * (y - x * x).powi(2)
}

/// Residual sum-of-squares fit of a parametric surface to `(x, y, z)`
/// observations.
///
/// The dataset and model are bound at construction; evaluation sums the
/// squared residuals over every observation. An empty dataset scores 0
/// for any parameters.
#[derive(Debug, Clone)]
pub struct SurfaceFit<M>
where
    M: Fn(&Position, f64, f64) -> f64,
{
    model: M,
    dataset: Vec<(f64, f64, f64)>,
    dimension: usize,
}

impl<M> SurfaceFit<M>
where
    M: Fn(&Position, f64, f64) -> f64,
{
    /// Bind `model` and `dataset` into a fit objective expecting
    /// `dimension` parameters.
    pub fn new(model: M, dataset: Vec<(f64, f64, f64)>, dimension: usize) -> Self {
        Self { model, dataset, dimension }
    }

    /// The bound observations.
    pub fn dataset(&self) -> &[(f64, f64, f64)] {
        &self.dataset
    }

    /// The declared parameter arity.
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}

impl SurfaceFit<fn(&Position, f64, f64) -> f64> {
    /// Fit objective for [`rosenbrock_surface`] over `dataset`.
    pub fn rosenbrock(dataset: Vec<(f64, f64, f64)>) -> Self {
        Self::new(rosenbrock_surface, dataset, 2)
    }
}

impl<M> Objective for SurfaceFit<M>
where
    M: Fn(&Position, f64, f64) -> f64,
{
    /// Sum of squared residuals of the model against the dataset.
    ///
    /// # Errors
    /// Returns [`SwarmError::DimensionMismatch`] when `position` does not
    /// match the arity declared at construction.
    fn evaluate(&self, position: &Position) -> SwarmResult<Fitness> {
        if position.len() != self.dimension {
            return Err(SwarmError::DimensionMismatch {
                expected: self.dimension,
                found: position.len(),
            });
        }
        let mut fit = 0.0;
        for &(x, y, z) in &self.dataset {
            let residual = z - (self.model)(position, x, y);
            fit += residual * residual;
        }
        Ok(fit)
    }
}
