use std::cmp::Reverse;
use std::collections::HashSet;

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::debug;

use super::models::{DifficultyTier, Round, CANDIDATES_PER_ROUND};
use crate::catalog::{Catalog, Item};

/// Uniformly picks a target among items that have not been a target yet.
/// Returns `None` once every catalog item has been used.
pub fn pick_target<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    used_targets: &HashSet<String>,
    rng: &mut R,
) -> Option<&'a Item> {
    let available: Vec<&Item> = catalog
        .items()
        .iter()
        .filter(|item| !used_targets.contains(&item.id))
        .collect();

    available.choose(rng).copied()
}

/// Builds the shuffled candidate list for `target` in the given round.
///
/// Distractors are drawn from every other catalog item. The round's tier sets
/// how many of them must share a tag with the target; the rest come from items
/// sharing none. Short pools are backfilled at random from whatever is left.
/// The result holds the target exactly once and at most
/// [`CANDIDATES_PER_ROUND`] distinct items.
pub fn select_candidates<R: Rng + ?Sized>(
    target: &Item,
    round: u32,
    catalog: &Catalog,
    rng: &mut R,
) -> Vec<Item> {
    let distractor_slots = CANDIDATES_PER_ROUND - 1;
    let similar_quota = DifficultyTier::for_round(round)
        .similar_quota()
        .min(distractor_slots);

    let mut scored: Vec<(&Item, u8)> = catalog
        .items()
        .iter()
        .filter(|item| item.id != target.id)
        .map(|item| (item, target.similarity(item)))
        .collect();

    // Stable: equal scores keep catalog order
    scored.sort_by_key(|(_, similarity)| Reverse(*similarity));

    let similar = scored
        .iter()
        .filter(|(_, similarity)| *similarity >= 1)
        .map(|(item, _)| *item);
    let different = scored
        .iter()
        .filter(|(_, similarity)| *similarity == 0)
        .map(|(item, _)| *item);

    let mut distractors: Vec<&Item> = similar.take(similar_quota).collect();
    distractors.extend(different.take(distractor_slots - similar_quota));

    if distractors.len() < distractor_slots {
        let mut remaining: Vec<&Item> = scored
            .iter()
            .map(|(item, _)| *item)
            .filter(|item| !distractors.iter().any(|chosen| chosen.id == item.id))
            .collect();

        while distractors.len() < distractor_slots && !remaining.is_empty() {
            let index = rng.random_range(0..remaining.len());
            distractors.push(remaining.swap_remove(index));
        }
    }

    let mut candidates: Vec<Item> = std::iter::once(target)
        .chain(distractors)
        .cloned()
        .collect();
    candidates.shuffle(rng);

    debug!(
        round,
        target = %target.id,
        candidate_count = candidates.len(),
        "Candidates selected"
    );

    candidates
}

/// Picks an unused target and builds its round, or `None` when the catalog
/// has no untargeted item left.
pub fn next_round<R: Rng + ?Sized>(
    number: u32,
    used_targets: &HashSet<String>,
    catalog: &Catalog,
    rng: &mut R,
) -> Option<Round> {
    let target = pick_target(catalog, used_targets, rng)?;
    let candidates = select_candidates(target, number, catalog, rng);
    Some(Round::new(number, target.clone(), candidates))
}
