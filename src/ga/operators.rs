//! Recombination and mutation operators for tours.
//!
//! # Recombination
//!
//! Every ordered arrangement of `mixing_number` parents produces one child.
//! The child starts as a copy of the first parent of the arrangement; each
//! following parent is then spliced in at its own cut point. Cut points are
//! drawn once per [`Recombination::recombine`] call and shared by all
//! arrangements.
//!
//! - [`Recombination::Splice`]: positional splice. The donor's suffix
//!   overwrites the child from the cut point on, but only if the suffix
//!   holds a location the child lacks. Between two permutations of the same
//!   location set that never happens, so children of valid parents are
//!   copies of their first parent. Invalid sequences are not repaired.
//! - [`Recombination::OrderedSplice`]: keeps the child's prefix and fills
//!   the rest with the donor's remaining locations in donor order (one-point
//!   order crossover). Children of permutations are permutations.
//!
//! # Mutation
//!
//! [`swap_mutation`] exchanges two distinct positions. [`MutationPolicy`]
//! decides whether every child is mutated or only a `mutation_rate` share.

use super::tour::Tour;
use crate::error::{Result, TspError};
use itertools::Itertools;
use rand::seq::index;
use rand::Rng;
use std::collections::HashSet;
use std::hash::Hash;

/// Crossover strategy used by [`Recombination::recombine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Recombination {
    /// Positional splice; may yield repeated locations from invalid parents.
    #[default]
    Splice,

    /// Prefix from the child, remainder in donor order.
    OrderedSplice,
}

impl Recombination {
    /// Produces one child per ordered group of `mixing_number` parents.
    ///
    /// With `P` parents this yields `P! / (P - mixing_number)!` children.
    /// Fewer than `mixing_number` parents is not an error: the result is
    /// empty and no randomness is consumed.
    ///
    /// # Errors
    /// - [`TspError::InvalidConfig`] if `mixing_number < 2`.
    /// - [`TspError::NotEnoughCutPoints`] if `mixing_number - 1` distinct cut
    ///   points cannot be drawn from `[1, N - 1]`.
    pub fn recombine<L, R>(
        &self,
        parents: &[&Tour<L>],
        mixing_number: usize,
        rng: &mut R,
    ) -> Result<Vec<Tour<L>>>
    where
        L: Clone + Eq + Hash,
        R: Rng,
    {
        if mixing_number < 2 {
            return Err(TspError::InvalidConfig(format!(
                "mixing_number must be at least 2, got {mixing_number}"
            )));
        }
        if parents.len() < mixing_number {
            tracing::trace!(
                parents = parents.len(),
                mixing_number,
                "not enough parents, skipping recombination"
            );
            return Ok(Vec::new());
        }

        let cut_points = draw_cut_points(parents[0].len(), mixing_number, rng)?;

        let children = parents
            .iter()
            .copied()
            .permutations(mixing_number)
            .map(|group| {
                let mut child = group[0].clone();
                for (donor, &cut) in group[1..].iter().zip(&cut_points) {
                    match self {
                        Recombination::Splice => splice(&mut child, donor, cut),
                        Recombination::OrderedSplice => ordered_splice(&mut child, donor, cut),
                    }
                }
                child
            })
            .collect();

        Ok(children)
    }
}

/// Draws `mixing_number - 1` distinct positions from `[1, n - 1]`, in draw
/// order.
pub fn draw_cut_points<R: Rng>(n: usize, mixing_number: usize, rng: &mut R) -> Result<Vec<usize>> {
    let wanted = mixing_number.saturating_sub(1);
    let available = n.saturating_sub(1);
    if wanted > available {
        return Err(TspError::NotEnoughCutPoints {
            mixing_number,
            locations: n,
        });
    }
    Ok(index::sample(rng, available, wanted)
        .into_iter()
        .map(|i| i + 1)
        .collect())
}

/// Overwrites `child[cut..]` with `donor[cut..]` if the donor's suffix
/// contains a location missing from `child`.
pub fn splice<L: Clone + PartialEq>(child: &mut Tour<L>, donor: &Tour<L>, cut: usize) {
    let Some(suffix) = donor.stops().get(cut..) else {
        return;
    };
    if suffix.iter().any(|stop| !child.stops().contains(stop)) {
        let stops = child.stops_mut();
        stops.truncate(cut);
        stops.extend_from_slice(suffix);
    }
}

/// Keeps `child[..cut]` and appends the donor's other locations in donor
/// order.
pub fn ordered_splice<L: Clone + Eq + Hash>(child: &mut Tour<L>, donor: &Tour<L>, cut: usize) {
    let stops = child.stops_mut();
    stops.truncate(cut);
    let kept: HashSet<L> = stops.iter().cloned().collect();
    stops.extend(donor.stops().iter().filter(|s| !kept.contains(*s)).cloned());
}

/// Mutation gating policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MutationPolicy {
    /// Every child is mutated; `mutation_rate` is ignored.
    #[default]
    Always,

    /// Each child is mutated with probability `mutation_rate`.
    Gated,
}

impl MutationPolicy {
    /// Applies the policy to `tour`. Returns whether it was mutated.
    ///
    /// `Always` consumes exactly the draws of [`swap_mutation`]; `Gated`
    /// consumes one extra draw for the coin flip.
    pub fn apply<L, R: Rng>(&self, tour: &mut Tour<L>, mutation_rate: f64, rng: &mut R) -> bool {
        let mutate = match self {
            MutationPolicy::Always => true,
            MutationPolicy::Gated => rng.random::<f64>() < mutation_rate,
        };
        if mutate {
            swap_mutation(tour, rng);
        }
        mutate
    }
}

/// Swaps the stops at two distinct, uniformly drawn positions.
///
/// Tours shorter than two stops are left unchanged.
pub fn swap_mutation<L, R: Rng>(tour: &mut Tour<L>, rng: &mut R) {
    let n = tour.len();
    if n < 2 {
        return;
    }
    let picked = index::sample(rng, n, 2);
    tour.stops_mut().swap(picked.index(0), picked.index(1));
}
