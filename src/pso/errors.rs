//! Errors for swarm construction, configuration, and particle updates.
//!
//! This module defines the unified error type, [`SwarmError`], used across
//! the crate, together with the crate-wide result alias [`SwarmResult`].
//!
//! ## Conventions
//! - Dimension indices are 0-based.
//! - Every failure is a construction-time or call-time logical
//!   inconsistency; there are no transient conditions and no retries.
//! - Dimension mismatches during an update abort the run — continuing
//!   would silently corrupt results.

/// Crate-wide result alias for swarm operations.
pub type SwarmResult<T> = Result<T, SwarmError>;

/// Unified error type for particle swarm optimization.
///
/// Covers bound validation at swarm construction, option and
/// stopping-rule validation, dimension agreement during updates, and
/// outcome finiteness checks. Implements `Display`/`Error`.
#[derive(Debug, Clone, PartialEq)]
pub enum SwarmError {
    // ---- Bounds ----
    /// Lower and upper bound vectors differ in length.
    BoundsMismatch { lower_len: usize, upper_len: usize },

    /// Bound vectors are empty; the search space needs at least one dimension.
    EmptyBounds,

    /// A bound entry is NaN/±inf.
    NonFiniteBound { index: usize, value: f64, reason: &'static str },

    /// A lower bound exceeds its upper bound.
    InvertedBound { index: usize, lower: f64, upper: f64 },

    // ---- Options ----
    /// Population size must be at least one particle.
    InvalidPopulationSize { size: usize, reason: &'static str },

    /// Cognitive weight must be finite and strictly positive.
    InvalidCognitiveWeight { value: f64, reason: &'static str },

    /// Social weight must be finite and strictly positive.
    InvalidSocialWeight { value: f64, reason: &'static str },

    /// Inertia must be finite.
    InvalidInertia { value: f64, reason: &'static str },

    /// Unknown initialization strategy tag.
    UnknownInitStrategy { name: String, reason: &'static str },

    // ---- Stopping rule ----
    /// Hysteresis threshold must be finite and non-negative.
    InvalidHysteresis { value: f64, reason: &'static str },

    /// Patience must allow at least one stagnant round.
    InvalidPatience { patience: usize, reason: &'static str },

    /// The optional round cap must be positive when present.
    InvalidRoundLimit { max_rounds: usize, reason: &'static str },

    // ---- Updates ----
    /// A supplied position's length disagrees with the particle dimension.
    DimensionMismatch { expected: usize, found: usize },

    // ---- Outcome ----
    /// Best objective value was NaN/±inf at the end of a run.
    NonFiniteFitness { value: f64 },

    /// Best position contained a non-finite coordinate at the end of a run.
    InvalidBestPosition { index: usize, value: f64, reason: &'static str },

    // ---- Objective ----
    /// Failure raised by a user-supplied objective function.
    ObjectiveFailure { reason: String },
}

impl std::error::Error for SwarmError {}

impl std::fmt::Display for SwarmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Bounds ----
            SwarmError::BoundsMismatch { lower_len, upper_len } => {
                write!(
                    f,
                    "Bound length mismatch: {lower_len} lower bounds, {upper_len} upper bounds"
                )
            }
            SwarmError::EmptyBounds => {
                write!(f, "Bound vectors are empty; at least one dimension is required")
            }
            SwarmError::NonFiniteBound { index, value, reason } => {
                write!(f, "Invalid bound at index {index}: {value}: {reason}")
            }
            SwarmError::InvertedBound { index, lower, upper } => {
                write!(
                    f,
                    "Inverted bound at index {index}: lower {lower} exceeds upper {upper}"
                )
            }

            // ---- Options ----
            SwarmError::InvalidPopulationSize { size, reason } => {
                write!(f, "Invalid population size {size}: {reason}")
            }
            SwarmError::InvalidCognitiveWeight { value, reason } => {
                write!(f, "Invalid cognitive weight {value}: {reason}")
            }
            SwarmError::InvalidSocialWeight { value, reason } => {
                write!(f, "Invalid social weight {value}: {reason}")
            }
            SwarmError::InvalidInertia { value, reason } => {
                write!(f, "Invalid inertia {value}: {reason}")
            }
            SwarmError::UnknownInitStrategy { name, reason } => {
                write!(f, "Unknown initialization strategy '{name}': {reason}")
            }

            // ---- Stopping rule ----
            SwarmError::InvalidHysteresis { value, reason } => {
                write!(f, "Invalid hysteresis {value}: {reason}")
            }
            SwarmError::InvalidPatience { patience, reason } => {
                write!(f, "Invalid patience {patience}: {reason}")
            }
            SwarmError::InvalidRoundLimit { max_rounds, reason } => {
                write!(f, "Invalid round limit {max_rounds}: {reason}")
            }

            // ---- Updates ----
            SwarmError::DimensionMismatch { expected, found } => {
                write!(f, "Dimension mismatch: expected {expected}, found {found}")
            }

            // ---- Outcome ----
            SwarmError::NonFiniteFitness { value } => {
                write!(f, "Non-finite best objective value: {value}")
            }
            SwarmError::InvalidBestPosition { index, value, reason } => {
                write!(f, "Invalid best position at index {index}: {value}: {reason}")
            }

            // ---- Objective ----
            SwarmError::ObjectiveFailure { reason } => {
                write!(f, "Objective function failure: {reason}")
            }
        }
    }
}
