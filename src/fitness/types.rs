//! Core trait definitions for fitness evaluation.
//!
//! [`FitnessValue`] describes what a fitness is, and [`FitnessFunction`]
//! describes what scores a phenotype. Individuals depend only on these
//! traits, never on a concrete problem.

/// Marker trait for fitness values.
///
/// Fitness must support comparison. Unlike a plain minimisation framework,
/// the optimisation direction is decided per run, so the "unevaluated"
/// sentinel depends on it.
///
/// Built-in implementations exist for `f64` and `f32`.
pub trait FitnessValue: PartialOrd + Clone + Send + Sync + std::fmt::Debug + 'static {
    /// Returns the sentinel given to individuals that have not been evaluated.
    ///
    /// The sentinel must compare as worse than every real fitness in the
    /// given direction: below everything when maximising, above everything
    /// when minimising.
    fn default_fitness(maximise: bool) -> Self;

    /// Converts the fitness to `f64` for logging and statistics.
    fn to_f64(&self) -> f64;
}

impl FitnessValue for f64 {
    fn default_fitness(maximise: bool) -> Self {
        if maximise {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        }
    }

    fn to_f64(&self) -> f64 {
        *self
    }
}

impl FitnessValue for f32 {
    fn default_fitness(maximise: bool) -> Self {
        if maximise {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        }
    }

    fn to_f64(&self) -> f64 {
        *self as f64
    }
}

/// Which data a training/test aware fitness function scores against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Distribution {
    #[default]
    Training,
    Test,
}

/// How a fitness function wants to be called.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Capability {
    /// Scored from the phenotype alone.
    #[default]
    PhenotypeOnly,
    /// Scored from the phenotype and a [`Distribution`] selector.
    TrainingTest,
}

/// Scores phenotypes of type `P`.
///
/// Implementors provide [`score`](FitnessFunction::score). Functions with
/// separate training and test data also override
/// [`capability`](FitnessFunction::capability) to return
/// [`Capability::TrainingTest`] and implement
/// [`score_on`](FitnessFunction::score_on).
///
/// The phenotype is `None` when mapping failed; the function decides what
/// such an individual is worth.
///
/// # Implementing
///
/// ```
/// use std::convert::Infallible;
/// use u_gevo::fitness::FitnessFunction;
///
/// struct StringMatch {
///     target: String,
/// }
///
/// impl FitnessFunction<String> for StringMatch {
///     type Fitness = f64;
///     type Error = Infallible;
///
///     fn maximise(&self) -> bool {
///         false
///     }
///
///     fn score(&self, phenotype: Option<&String>) -> Result<f64, Infallible> {
///         let Some(guess) = phenotype else {
///             return Ok(f64::INFINITY);
///         };
///         let misses = self
///             .target
///             .chars()
///             .zip(guess.chars())
///             .filter(|(t, g)| t != g)
///             .count();
///         Ok((misses + self.target.len().abs_diff(guess.len())) as f64)
///     }
/// }
/// ```
///
/// # Thread Safety
///
/// `FitnessFunction` must be `Send + Sync` because multicore evaluation
/// scores individuals on rayon workers.
pub trait FitnessFunction<P>: Send + Sync {
    /// The fitness type produced.
    type Fitness: FitnessValue;

    /// Error raised while scoring. Propagated unchanged to the caller of
    /// `evaluate`.
    type Error;

    /// Whether a higher fitness is better.
    fn maximise(&self) -> bool;

    /// Declares whether the function accepts a distribution selector.
    fn capability(&self) -> Capability {
        Capability::PhenotypeOnly
    }

    /// Scores a phenotype.
    fn score(&self, phenotype: Option<&P>) -> Result<Self::Fitness, Self::Error>;

    /// Scores a phenotype against the given distribution.
    ///
    /// Only called when [`capability`](Self::capability) is
    /// [`Capability::TrainingTest`]. The default ignores `dist`.
    fn score_on(
        &self,
        phenotype: Option<&P>,
        _dist: Distribution,
    ) -> Result<Self::Fitness, Self::Error> {
        self.score(phenotype)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::convert::Infallible;

    #[test]
    fn test_f64_sentinel_direction() {
        assert_eq!(f64::default_fitness(true), f64::NEG_INFINITY);
        assert_eq!(f64::default_fitness(false), f64::INFINITY);
    }

    #[test]
    fn test_f32_sentinel_direction() {
        assert_eq!(f32::default_fitness(true), f32::NEG_INFINITY);
        assert_eq!(f32::default_fitness(false), f32::INFINITY);
        assert_eq!(2.5f32.to_f64(), 2.5);
    }

    #[test]
    fn test_sentinel_worse_than_extremes() {
        assert!(f64::default_fitness(true) < f64::MIN);
        assert!(f64::default_fitness(false) > f64::MAX);
    }

    #[test]
    fn test_distribution_defaults_to_training() {
        assert_eq!(Distribution::default(), Distribution::Training);
    }

    struct Length;

    impl FitnessFunction<String> for Length {
        type Fitness = f64;
        type Error = Infallible;

        fn maximise(&self) -> bool {
            true
        }

        fn score(&self, phenotype: Option<&String>) -> Result<f64, Infallible> {
            Ok(phenotype.map_or(0.0, |p| p.len() as f64))
        }
    }

    #[test]
    fn test_default_capability_and_score_on() {
        let f = Length;
        assert_eq!(f.capability(), Capability::PhenotypeOnly);
        let p = "abcd".to_string();
        assert_eq!(f.score_on(Some(&p), Distribution::Test).unwrap(), 4.0);
        assert_eq!(f.score(None).unwrap(), 0.0);
    }
}
