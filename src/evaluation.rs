//! Population evaluation.
//!
//! [`evaluate_population`] scores every individual and hands the
//! population back fully evaluated. With `multicore` off each individual
//! is scored in place. With it on, each individual is moved to a rayon
//! worker, scored there and returned; the coordinator collects the
//! returned individuals in their original order before this function
//! returns, so any ranking that follows sees final fitness values.

use crate::fitness::{Distribution, FitnessFunction, FitnessValue};
use crate::representation::{Individual, RunContext};
use log::debug;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Evaluates every individual in `population`.
///
/// The first error raised by the fitness function is returned unchanged
/// and the population is dropped.
pub fn evaluate_population<P, T, F, M, Ff>(
    mut population: Vec<Individual<P, T, F>>,
    ctx: &RunContext<'_, M, Ff>,
    dist: Distribution,
) -> Result<Vec<Individual<P, T, F>>, Ff::Error>
where
    P: Send,
    T: Send,
    F: FitnessValue,
    Ff: FitnessFunction<P, Fitness = F>,
    Ff::Error: Send,
{
    let fitness_function = ctx.fitness_function;

    if ctx.params.multicore {
        debug!("evaluating {} individuals on workers", population.len());
        hand_off(population, fitness_function, dist)
    } else {
        debug!("evaluating {} individuals in place", population.len());
        for ind in population.iter_mut() {
            ind.evaluate_on(fitness_function, dist)?;
        }
        Ok(population)
    }
}

/// Moves each individual to a worker and collects the scored results.
#[cfg(feature = "parallel")]
fn hand_off<P, T, F, Ff>(
    population: Vec<Individual<P, T, F>>,
    fitness_function: &Ff,
    dist: Distribution,
) -> Result<Vec<Individual<P, T, F>>, Ff::Error>
where
    P: Send,
    T: Send,
    F: FitnessValue,
    Ff: FitnessFunction<P, Fitness = F>,
    Ff::Error: Send,
{
    population
        .into_par_iter()
        .map(|ind| ind.evaluate_owned(fitness_function, dist))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn hand_off<P, T, F, Ff>(
    population: Vec<Individual<P, T, F>>,
    fitness_function: &Ff,
    dist: Distribution,
) -> Result<Vec<Individual<P, T, F>>, Ff::Error>
where
    F: FitnessValue,
    Ff: FitnessFunction<P, Fitness = F>,
{
    population
        .into_iter()
        .map(|ind| ind.evaluate_owned(fitness_function, dist))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::Capability;
    use crate::representation::{Genome, Mapper, Mapping, Ranking};
    use crate::Params;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Phenotype is the sum of the codons.
    struct SumMapper;

    impl Mapper for SumMapper {
        type Phenotype = u64;
        type Tree = Vec<u32>;

        fn map(&self, genome: Genome, _tree: Option<Vec<u32>>) -> Mapping<u64, Vec<u32>> {
            Mapping {
                phenotype: Some(genome.iter().map(|&c| c as u64).sum()),
                tree: Some(genome.clone()),
                nodes: genome.len() + 1,
                invalid: false,
                depth: 1,
                used_codons: genome.len(),
                genome,
            }
        }
    }

    /// Scores the phenotype itself; the test set scores ten times higher.
    /// Refuses phenotypes above `limit`.
    struct Identity {
        maximise: bool,
        capability: Capability,
        limit: u64,
        calls: AtomicUsize,
    }

    impl Identity {
        fn new(maximise: bool) -> Self {
            Self {
                maximise,
                capability: Capability::PhenotypeOnly,
                limit: u64::MAX,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl FitnessFunction<u64> for Identity {
        type Fitness = f64;
        type Error = String;

        fn maximise(&self) -> bool {
            self.maximise
        }

        fn capability(&self) -> Capability {
            self.capability
        }

        fn score(&self, phenotype: Option<&u64>) -> Result<f64, String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match phenotype {
                Some(&p) if p > self.limit => Err(format!("phenotype {p} over limit")),
                Some(&p) => Ok(p as f64),
                None => Ok(0.0),
            }
        }

        fn score_on(&self, phenotype: Option<&u64>, dist: Distribution) -> Result<f64, String> {
            let base = self.score(phenotype)?;
            Ok(match dist {
                Distribution::Training => base,
                Distribution::Test => base * 10.0,
            })
        }
    }

    fn population(ctx: &RunContext<'_, SumMapper, Identity>) -> Vec<Individual<u64, Vec<u32>, f64>> {
        (0..20u32)
            .map(|i| Individual::new(vec![i, i % 3, 1], None, ctx))
            .collect()
    }

    #[test]
    fn test_single_core_evaluates_all_in_order() {
        let params = Params::default();
        let ff = Identity::new(true);
        let ctx = RunContext::new(&params, &SumMapper, &ff);

        let evaluated = evaluate_population(population(&ctx), &ctx, Distribution::Training).unwrap();

        assert_eq!(evaluated.len(), 20);
        for (i, ind) in evaluated.iter().enumerate() {
            let i = i as u32;
            assert_eq!(ind.genome, vec![i, i % 3, 1]);
            assert_eq!(ind.fitness, (i + i % 3 + 1) as f64);
        }
        assert_eq!(ff.calls.load(Ordering::SeqCst), 20);
    }

    #[test]
    fn test_multicore_matches_single_core() {
        let single = Params::default();
        let multi = Params::default().with_multicore(true);
        let ff = Identity::new(false);

        let single_ctx = RunContext::new(&single, &SumMapper, &ff);
        let multi_ctx = RunContext::new(&multi, &SumMapper, &ff);

        let a = evaluate_population(population(&single_ctx), &single_ctx, Distribution::Training).unwrap();
        let b = evaluate_population(population(&multi_ctx), &multi_ctx, Distribution::Training).unwrap();

        assert_eq!(a, b);
        assert!(b.iter().all(|ind| ind.is_evaluated(false)));
    }

    #[test]
    fn test_distribution_reaches_training_test_functions() {
        let params = Params::default().with_multicore(true);
        let ff = Identity {
            capability: Capability::TrainingTest,
            ..Identity::new(true)
        };
        let ctx = RunContext::new(&params, &SumMapper, &ff);

        let evaluated = evaluate_population(population(&ctx), &ctx, Distribution::Test).unwrap();

        assert_eq!(evaluated[2].fitness, 50.0);
    }

    #[test]
    fn test_error_propagates_single_core() {
        let params = Params::default();
        let ff = Identity {
            limit: 10,
            ..Identity::new(true)
        };
        let ctx = RunContext::new(&params, &SumMapper, &ff);

        let err = evaluate_population(population(&ctx), &ctx, Distribution::Training).unwrap_err();

        assert!(err.contains("over limit"));
    }

    #[test]
    fn test_error_propagates_multicore() {
        let params = Params::default().with_multicore(true);
        let ff = Identity {
            limit: 10,
            ..Identity::new(true)
        };
        let ctx = RunContext::new(&params, &SumMapper, &ff);

        let result = evaluate_population(population(&ctx), &ctx, Distribution::Training);

        assert!(result.is_err());
    }

    #[test]
    fn test_ranking_after_multicore_rejoin() {
        let params = Params::default().with_multicore(true);
        let ff = Identity::new(true);
        let ctx = RunContext::new(&params, &SumMapper, &ff);

        let mut evaluated = evaluate_population(population(&ctx), &ctx, Distribution::Training).unwrap();
        let ranking = Ranking::new(ctx.maximise());
        ranking.sort_population(&mut evaluated);

        assert_eq!(evaluated.last().unwrap().genome, vec![19, 1, 1]);
        assert_eq!(ranking.best(&evaluated).unwrap().fitness, 21.0);
    }

    #[test]
    fn test_empty_population() {
        let params = Params::default().with_multicore(true);
        let ff = Identity::new(true);
        let ctx = RunContext::new(&params, &SumMapper, &ff);

        let evaluated = evaluate_population(Vec::<Individual<u64, Vec<u32>, f64>>::new(), &ctx, Distribution::Training).unwrap();

        assert!(evaluated.is_empty());
    }
}
