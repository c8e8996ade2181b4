//! Genome and mapper definitions.
//!
//! A genome is a flat sequence of codons. The [`Mapper`] turns it into a
//! phenotype through a grammar and reports the shape of the derivation it
//! built. The mapper itself lives outside this crate.

use rand::Rng;

/// One unit of a genome, consumed to choose a grammar production.
pub type Codon = u32;

/// Ordered sequence of codons.
pub type Genome = Vec<Codon>;

/// Everything a mapper reports for one genome.
#[derive(Debug, Clone, PartialEq)]
pub struct Mapping<P, T> {
    /// Mapped output, `None` when the derivation did not complete.
    pub phenotype: Option<P>,
    /// Genome as normalised by the mapper (for example truncated to the
    /// codons it consumed). Replaces the genome that was passed in.
    pub genome: Genome,
    /// Derivation tree built during mapping.
    pub tree: Option<T>,
    /// Number of nodes in the derivation tree.
    pub nodes: usize,
    /// True when no valid phenotype could be produced.
    pub invalid: bool,
    /// Depth of the derivation tree.
    pub depth: usize,
    /// Codons consumed by the derivation.
    pub used_codons: usize,
}

/// Maps genomes to phenotypes through a grammar.
///
/// Must be deterministic for a given genome and grammar. A genome that
/// runs out before the derivation completes is not an error: the mapper
/// returns a [`Mapping`] with `invalid` set.
///
/// # Implementing
///
/// ```
/// use u_gevo::representation::{Genome, Mapper, Mapping};
///
/// /// Picks one of four letters per codon.
/// struct Letters;
///
/// impl Mapper for Letters {
///     type Phenotype = String;
///     type Tree = Vec<usize>;
///
///     fn map(&self, genome: Genome, _tree: Option<Vec<usize>>) -> Mapping<String, Vec<usize>> {
///         let picks: Vec<usize> = genome.iter().map(|&c| c as usize % 4).collect();
///         let phenotype: String = picks.iter().map(|&i| b"abcd"[i] as char).collect();
///         Mapping {
///             phenotype: Some(phenotype),
///             nodes: picks.len() + 1,
///             depth: 2,
///             used_codons: genome.len(),
///             invalid: false,
///             tree: Some(picks),
///             genome,
///         }
///     }
/// }
/// ```
pub trait Mapper: Send + Sync {
    /// Mapped output.
    type Phenotype: Clone + Send + Sync;
    /// Derivation tree representation.
    type Tree: Clone + Send + Sync;

    /// Maps `genome`, optionally reusing an existing derivation tree.
    fn map(
        &self,
        genome: Genome,
        tree: Option<Self::Tree>,
    ) -> Mapping<Self::Phenotype, Self::Tree>;
}

/// Generates a random genome of `length` codons in `[0, codon_size)`.
///
/// # Panics
/// Panics if `codon_size` is 0 (rejected earlier by
/// [`Params::validate`](crate::Params::validate)).
pub fn generate_genome<R: Rng>(rng: &mut R, length: usize, codon_size: u32) -> Genome {
    assert!(codon_size > 0, "codon_size must be positive");
    (0..length).map(|_| rng.random_range(0..codon_size)).collect()
}
