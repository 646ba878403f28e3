//! Single-point splice recombination for [`SeedGenotype`].

use super::genotype::SeedGenotype;
use crate::evolve::Crossover;
use rand::Rng;
use std::borrow::Cow;

/// Head of `parent1` joined to a tail of `parent2`.
///
/// The head is `parent1[..i]` with `i` in `1..=len1`, the tail is
/// `parent2[j..]` with `j` in `0..=len2`. The result is cut back to
/// `MAX_LEN` when the join is too long.
///
/// Opt-in alternative to [`FirstParent`](crate::evolve::FirstParent); it
/// consumes two extra draws per offspring, so seeded runs diverge from the
/// single-parent policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinglePointSplice;

impl<const CAP: usize> Crossover<SeedGenotype<CAP>> for SinglePointSplice {
    fn recombine<'a, R: Rng>(
        &self,
        parent1: &'a SeedGenotype<CAP>,
        parent2: &'a SeedGenotype<CAP>,
        rng: &mut R,
    ) -> Cow<'a, SeedGenotype<CAP>> {
        let head = rng.random_range(1..=parent1.len());
        let tail = rng.random_range(0..=parent2.len());

        let mut bytes = Vec::with_capacity(SeedGenotype::<CAP>::MAX_LEN);
        bytes.extend_from_slice(&parent1.as_bytes()[..head]);
        bytes.extend_from_slice(&parent2.as_bytes()[tail..]);
        bytes.truncate(SeedGenotype::<CAP>::MAX_LEN);

        Cow::Owned(SeedGenotype::from_vec(bytes))
    }
}
