//! The grammatical evolution individual.
//!
//! An [`Individual`] owns a genome, the derivation tree and metadata the
//! mapper produced for it, and a fitness. It is created either by mapping a
//! genome or by [`deep_copy`](Individual::deep_copy) of an existing
//! individual, and is scored through a [`FitnessFunction`].

use super::ranking::less_than_fitness;
use super::types::{Genome, Mapper, Mapping};
use crate::fitness::{Capability, Distribution, FitnessFunction, FitnessValue};
use crate::params::Params;
use log::trace;
use std::fmt;

/// Read-only view of everything an individual needs from the run.
///
/// Built once per run and passed by reference; replaces any global
/// settings lookup.
pub struct RunContext<'a, M, Ff> {
    pub params: &'a Params,
    pub mapper: &'a M,
    pub fitness_function: &'a Ff,
}

impl<M, Ff> Clone for RunContext<'_, M, Ff> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M, Ff> Copy for RunContext<'_, M, Ff> {}

impl<'a, M, Ff> RunContext<'a, M, Ff>
where
    M: Mapper,
    Ff: FitnessFunction<M::Phenotype>,
{
    pub fn new(params: &'a Params, mapper: &'a M, fitness_function: &'a Ff) -> Self {
        Self {
            params,
            mapper,
            fitness_function,
        }
    }

    /// Run-wide optimisation direction, as declared by the fitness function.
    pub fn maximise(&self) -> bool {
        self.fitness_function.maximise()
    }
}

/// The individual type produced by a given mapper and fitness function.
pub type IndividualOf<M, Ff> = Individual<
    <M as Mapper>::Phenotype,
    <M as Mapper>::Tree,
    <Ff as FitnessFunction<<M as Mapper>::Phenotype>>::Fitness,
>;

/// A candidate solution.
///
/// `P` is the phenotype, `T` the derivation tree and `F` the fitness type.
///
/// Always check [`invalid`](Self::invalid) before trusting
/// [`phenotype`](Self::phenotype).
///
/// `Clone` produces an exact replica, fitness included, and is meant for
/// archiving or handing an individual to a worker. Genetic operators copy
/// parents with [`deep_copy`](Self::deep_copy), which resets fitness.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual<P, T, F> {
    /// Codons, possibly normalised by the mapper.
    pub genome: Genome,
    /// Derivation tree. `None` under genome-only operations.
    pub tree: Option<T>,
    /// Mapped output. `None` when mapping failed or was skipped.
    pub phenotype: Option<P>,
    /// True when the phenotype cannot be trusted.
    pub invalid: bool,
    pub depth: usize,
    pub nodes: usize,
    pub used_codons: usize,
    /// Last evaluation result, or the unevaluated sentinel.
    pub fitness: F,
    pub name: Option<String>,
}

impl<P, T, F: FitnessValue> Individual<P, T, F> {
    /// Creates an individual by mapping `genome`.
    pub fn new<M, Ff>(genome: Genome, tree: Option<T>, ctx: &RunContext<'_, M, Ff>) -> Self
    where
        M: Mapper<Phenotype = P, Tree = T>,
        Ff: FitnessFunction<P, Fitness = F>,
    {
        Self::with_mapping(genome, tree, true, ctx)
    }

    /// Creates an individual, mapping the genome only if `map_ind` is set.
    ///
    /// Without mapping, `genome` and `tree` are stored verbatim and the
    /// derivation metadata is left unset (see [`unmapped`](Self::unmapped)).
    pub fn with_mapping<M, Ff>(
        genome: Genome,
        tree: Option<T>,
        map_ind: bool,
        ctx: &RunContext<'_, M, Ff>,
    ) -> Self
    where
        M: Mapper<Phenotype = P, Tree = T>,
        Ff: FitnessFunction<P, Fitness = F>,
    {
        let maximise = ctx.fitness_function.maximise();
        if map_ind {
            Self::from_mapping(ctx.mapper.map(genome, tree), maximise)
        } else {
            Self::unmapped(genome, tree, maximise)
        }
    }

    /// Wraps a finished mapping.
    pub fn from_mapping(mapping: Mapping<P, T>, maximise: bool) -> Self {
        if mapping.invalid {
            trace!(
                "invalid mapping after {} of {} codons",
                mapping.used_codons,
                mapping.genome.len()
            );
        }
        Self {
            genome: mapping.genome,
            tree: mapping.tree,
            phenotype: mapping.phenotype,
            invalid: mapping.invalid,
            depth: mapping.depth,
            nodes: mapping.nodes,
            used_codons: mapping.used_codons,
            fitness: F::default_fitness(maximise),
            name: None,
        }
    }

    /// Stores `genome` and `tree` without mapping.
    ///
    /// The phenotype is absent and the individual reports `invalid` with
    /// zeroed shape metadata until the caller fills them in.
    pub fn unmapped(genome: Genome, tree: Option<T>, maximise: bool) -> Self {
        Self {
            genome,
            tree,
            phenotype: None,
            invalid: true,
            depth: 0,
            nodes: 0,
            used_codons: 0,
            fitness: F::default_fitness(maximise),
            name: None,
        }
    }

    /// Whether `self` ranks below `other` under the given direction.
    ///
    /// Depends on the two fitness values only, so an ascending sort puts
    /// the worst individual first and the best last in either direction.
    pub fn less_than(&self, other: &Self, maximise: bool) -> bool {
        less_than_fitness(&self.fitness, &other.fitness, maximise)
    }

    pub fn has_tree(&self) -> bool {
        self.tree.is_some()
    }

    /// False while the fitness equals the unevaluated sentinel.
    ///
    /// This is a value check, not a record of scoring: a fitness function
    /// that returns the sentinel itself (`+inf` when minimising, `-inf`
    /// when maximising for floats) leaves the individual reading as not
    /// evaluated.
    pub fn is_evaluated(&self, maximise: bool) -> bool {
        self.fitness != F::default_fitness(maximise)
    }

    /// Returns an independent copy for genetic operators to modify.
    ///
    /// The genome is copied, and the tree too unless the run uses
    /// genome-only operations, in which case the copy has no tree. The
    /// genome is not mapped again: phenotype, validity and shape metadata
    /// are carried over from `self`.
    ///
    /// Fitness is *not* carried over. The copy starts at the unevaluated
    /// sentinel and must be evaluated again.
    pub fn deep_copy<M, Ff>(&self, ctx: &RunContext<'_, M, Ff>) -> Self
    where
        P: Clone,
        T: Clone,
        M: Mapper<Phenotype = P, Tree = T>,
        Ff: FitnessFunction<P, Fitness = F>,
    {
        let tree = if ctx.params.genome_operations {
            None
        } else {
            self.tree.clone()
        };

        let mut copy = Self::with_mapping(self.genome.clone(), tree, false, ctx);
        copy.phenotype = self.phenotype.clone();
        copy.invalid = self.invalid;
        copy.depth = self.depth;
        copy.nodes = self.nodes;
        copy.used_codons = self.used_codons;
        copy
    }

    /// Scores the phenotype on the training distribution, in place.
    pub fn evaluate<Ff>(&mut self, fitness_function: &Ff) -> Result<(), Ff::Error>
    where
        Ff: FitnessFunction<P, Fitness = F>,
    {
        self.evaluate_on(fitness_function, Distribution::Training)
    }

    /// Scores the phenotype in place.
    ///
    /// `dist` is only passed on when the function declares
    /// [`Capability::TrainingTest`]. Errors from the function are returned
    /// unchanged and leave the previous fitness in place.
    pub fn evaluate_on<Ff>(&mut self, fitness_function: &Ff, dist: Distribution) -> Result<(), Ff::Error>
    where
        Ff: FitnessFunction<P, Fitness = F>,
    {
        self.fitness = match fitness_function.capability() {
            Capability::TrainingTest => fitness_function.score_on(self.phenotype.as_ref(), dist)?,
            Capability::PhenotypeOnly => fitness_function.score(self.phenotype.as_ref())?,
        };
        Ok(())
    }

    /// Scores the individual on a worker and hands it back.
    ///
    /// Used by multicore evaluation, where the worker owns the individual
    /// and the coordinator merges the returned value into its population.
    pub fn evaluate_owned<Ff>(mut self, fitness_function: &Ff, dist: Distribution) -> Result<Self, Ff::Error>
    where
        Ff: FitnessFunction<P, Fitness = F>,
    {
        self.evaluate_on(fitness_function, dist)?;
        Ok(self)
    }
}

impl<P: fmt::Display, T, F: fmt::Debug> fmt::Display for Individual<P, T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.phenotype {
            Some(p) => write!(f, "Individual: {}; {:?}", p, self.fitness),
            None => write!(f, "Individual: None; {:?}", self.fitness),
        }
    }
}
