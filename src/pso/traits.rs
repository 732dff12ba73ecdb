//! Public API surface for particle swarm minimization.
//!
//! - [`Objective`]: trait users implement for their objective function.
//! - [`SwarmOptions`] and [`StoppingRule`]: configuration for the swarm
//!   and its convergence loop.
//! - [`InitStrategy`]: choice of particle initialization.
//! - [`RunOutcome`]: normalized result returned by [`Swarm::run`] and the
//!   high-level `minimize` API.
//!
//! Convention: the optimizer always *minimizes*. An objective maps a
//! position vector to a scalar fitness where lower is better; callers
//! wanting to maximize should negate their function.
//!
//! [`Swarm::run`]: crate::pso::swarm::Swarm::run
use crate::pso::{
    errors::{SwarmError, SwarmResult},
    types::{
        DEFAULT_COGNITIVE_WEIGHT, DEFAULT_HYSTERESIS, DEFAULT_INERTIA, DEFAULT_PATIENCE,
        DEFAULT_POPULATION_SIZE, DEFAULT_SOCIAL_WEIGHT, Fitness, Position,
    },
    validation::{
        verify_cognitive_weight, verify_hysteresis, verify_inertia, verify_patience,
        verify_population_size, verify_round_limit, verify_social_weight,
    },
};
use std::str::FromStr;

/// User-implemented objective interface.
///
/// An objective evaluates a candidate position and returns its scalar
/// fitness (lower is better). The swarm holds the objective for its
/// entire lifetime and calls it once per particle per round.
///
/// Required:
/// - `evaluate(&Position) -> SwarmResult<Fitness>`: evaluate the
///   objective at a position.
///   - Errors: return a descriptive [`SwarmError`] for invalid inputs —
///     e.g. [`SwarmError::DimensionMismatch`] when the position's arity
///     is wrong. Errors are propagated by the optimizer, never caught.
///
/// A blanket implementation covers plain closures
/// `Fn(&Position) -> f64`, so `|x: &Position| x.dot(x)` is a valid
/// objective.
pub trait Objective {
    fn evaluate(&self, position: &Position) -> SwarmResult<Fitness>;
}

impl<F> Objective for F
where
    F: Fn(&Position) -> f64,
{
    fn evaluate(&self, position: &Position) -> SwarmResult<Fitness> {
        Ok(self(position))
    }
}

/// Choice of particle initialization used at swarm construction.
///
/// Variants:
/// - `Random`: each particle's initial position is drawn independently
///   and uniformly within `[lower[j], upper[j]]` per dimension `j`.
///
/// Parsing:
/// This enum implements `FromStr` and accepts the case-insensitive tag
/// `"random"`. Unknown tags return [`SwarmError::UnknownInitStrategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InitStrategy {
    #[default]
    Random,
}

impl FromStr for InitStrategy {
    type Err = SwarmError;

    /// Parse an initialization strategy from a tag (case-insensitive).
    ///
    /// Accepts:
    /// - `"random"` in any case variant (e.g., `"Random"`, `"RANDOM"`).
    ///
    /// Any other value returns [`SwarmError::UnknownInitStrategy`] with a
    /// helpful message.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random" => Ok(InitStrategy::Random),
            _ => Err(SwarmError::UnknownInitStrategy {
                name: s.to_string(),
                reason: "The only implemented strategy is the case insensitive 'random'.",
            }),
        }
    }
}

/// Swarm-level configuration.
///
/// Fields:
/// - `population_size: usize` — number of particles, fixed for the
///   swarm's lifetime.
/// - `cognitive: f64` — pull toward each particle's personal best.
/// - `social: f64` — pull toward the swarm's global best.
/// - `inertia: f64` — damping on the previous velocity.
/// - `init: InitStrategy` — particle initialization strategy.
/// - `seed: Option<u64>` — seed for the swarm's random source; `None`
///   seeds from the operating system. Identical seeds reproduce
///   identical runs.
/// - `verbose: bool` — if `true`, the run loop reports the starting
///   global best and every improvement on stderr.
///
/// Constructor:
/// - `new(...) -> SwarmResult<Self>` — validates every numeric field via
///   the shared validation helpers.
///
/// Default:
/// - `population_size`: 50, `cognitive`: 2.0, `social`: 2.0,
///   `inertia`: 0.5, `init`: `Random`, `seed`: `None`,
///   `verbose`: `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct SwarmOptions {
    pub population_size: usize,
    pub cognitive: f64,
    pub social: f64,
    pub inertia: f64,
    pub init: InitStrategy,
    pub seed: Option<u64>,
    pub verbose: bool,
}

impl SwarmOptions {
    /// Create a validated set of swarm options.
    ///
    /// # Rules
    /// - `population_size` must be `> 0`.
    /// - `cognitive` and `social` must be finite and strictly positive.
    /// - `inertia` must be finite.
    ///
    /// # Errors
    /// - [`SwarmError::InvalidPopulationSize`],
    ///   [`SwarmError::InvalidCognitiveWeight`],
    ///   [`SwarmError::InvalidSocialWeight`], or
    ///   [`SwarmError::InvalidInertia`] for the first failing field.
    pub fn new(
        population_size: usize, cognitive: f64, social: f64, inertia: f64, init: InitStrategy,
        seed: Option<u64>, verbose: bool,
    ) -> SwarmResult<Self> {
        verify_population_size(population_size)?;
        verify_cognitive_weight(cognitive)?;
        verify_social_weight(social)?;
        verify_inertia(inertia)?;
        Ok(Self { population_size, cognitive, social, inertia, init, seed, verbose })
    }

    /// Return a copy of these options with the given seed.
    ///
    /// Convenience for reproducing a run without rebuilding the whole
    /// option set.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for SwarmOptions {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            cognitive: DEFAULT_COGNITIVE_WEIGHT,
            social: DEFAULT_SOCIAL_WEIGHT,
            inertia: DEFAULT_INERTIA,
            init: InitStrategy::Random,
            seed: None,
            verbose: false,
        }
    }
}

/// Patience-based stopping rule for the convergence loop.
///
/// - `hysteresis`: minimum improvement in the global best that counts as
///   progress; a round improving by no more than this is stagnant.
/// - `patience`: consecutive stagnant rounds tolerated before the run
///   terminates. Any improving round resets the count to zero.
/// - `max_rounds`: optional hard cap on total rounds, a safety net for
///   objectives that never stop improving. `None` means the patience
///   rule alone decides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StoppingRule {
    pub hysteresis: f64,
    pub patience: usize,
    pub max_rounds: Option<usize>,
}

impl StoppingRule {
    /// Construct a validated stopping rule.
    ///
    /// # Rules
    /// - `hysteresis` must be finite and non-negative.
    /// - `patience` must be `> 0`.
    /// - If provided, `max_rounds` must be `> 0`.
    ///
    /// # Errors
    /// - [`SwarmError::InvalidHysteresis`],
    ///   [`SwarmError::InvalidPatience`], or
    ///   [`SwarmError::InvalidRoundLimit`] for the first failing field.
    pub fn new(hysteresis: f64, patience: usize, max_rounds: Option<usize>) -> SwarmResult<Self> {
        verify_hysteresis(hysteresis)?;
        verify_patience(patience)?;
        verify_round_limit(max_rounds)?;
        Ok(Self { hysteresis, patience, max_rounds })
    }
}

impl Default for StoppingRule {
    fn default() -> Self {
        Self { hysteresis: DEFAULT_HYSTERESIS, patience: DEFAULT_PATIENCE, max_rounds: None }
    }
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The global best failed to improve by more than the hysteresis for
    /// `patience` consecutive rounds.
    Stagnated,
    /// The hard round cap was reached before the patience rule fired.
    RoundLimit,
}

/// Canonical result returned by a completed run.
///
/// - `best_position`: best position found across all particles and
///   rounds.
/// - `best_value`: objective value at `best_position`.
/// - `converged`: `true` iff the patience rule terminated the run.
/// - `status`: human-readable termination description.
/// - `rounds`: total rounds executed across the run.
/// - `evaluations`: objective evaluations performed, including the one
///   per particle at swarm construction.
#[derive(Debug, Clone, PartialEq)]
pub struct RunOutcome {
    pub best_position: Position,
    pub best_value: Fitness,
    pub converged: bool,
    pub status: String,
    pub rounds: usize,
    pub evaluations: usize,
}

impl RunOutcome {
    /// Build a validated [`RunOutcome`] from raw swarm state.
    ///
    /// Performs:
    /// - `best_position` check (all coordinates finite).
    /// - `best_value` check (finite).
    /// - Maps [`Termination`] into `(converged, status)`.
    ///
    /// # Errors
    /// - [`SwarmError::InvalidBestPosition`] if any coordinate is
    ///   non-finite.
    /// - [`SwarmError::NonFiniteFitness`] if the best value is NaN or
    ///   infinite (e.g., an objective that only ever produced NaN).
    pub fn new(
        best_position: Position, best_value: Fitness, termination: Termination, rounds: usize,
        evaluations: usize,
    ) -> SwarmResult<Self> {
        for (index, &value) in best_position.iter().enumerate() {
            if !value.is_finite() {
                return Err(SwarmError::InvalidBestPosition {
                    index,
                    value,
                    reason: "Best position coordinates must be finite.",
                });
            }
        }
        if !best_value.is_finite() {
            return Err(SwarmError::NonFiniteFitness { value: best_value });
        }
        let (converged, status) = match termination {
            Termination::Stagnated => (true, "Stagnated past patience".to_string()),
            Termination::RoundLimit => (false, "Round limit reached".to_string()),
        };
        Ok(Self { best_position, best_value, converged, status, rounds, evaluations })
    }
}
