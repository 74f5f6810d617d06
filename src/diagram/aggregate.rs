use std::collections::{BTreeMap, HashSet};

use crate::model::mutation::MutationRecord;
use crate::model::pileup::Pileup;
use crate::model::types;

/// Collapses raw mutation records into position-grouped pileups.
///
/// Records are deduplicated by `mutation_sid` before anything else:
/// only the first record per sid survives, later ones are dropped
/// whole, never merged. Surviving records without a resolvable protein
/// position, and fusions, are excluded from the diagram entirely.
/// Returned pileups are ordered by descending count, ties by
/// descending location; downstream code relies on `pileups[0]` being
/// the maximal cluster.
pub fn aggregate(mutations: &[MutationRecord]) -> Vec<Pileup> {
    let mut seen_sids: HashSet<&str> = HashSet::new();
    let mut groups: BTreeMap<u32, Vec<MutationRecord>> = BTreeMap::new();
    let mut duplicates = 0usize;
    let mut unplaced = 0usize;
    let mut fusions = 0usize;

    for m in mutations {
        // Dedup happens before the exclusion filter: an excluded first
        // record still consumes its sid.
        if !seen_sids.insert(m.mutation_sid.as_str()) {
            duplicates += 1;
            continue;
        }
        let Some(location) = m.resolved_position() else {
            unplaced += 1;
            continue;
        };
        if types::is_fusion(&m.mutation_type) {
            fusions += 1;
            continue;
        }
        groups.entry(location).or_default().push(m.clone());
    }

    if duplicates + unplaced + fusions > 0 {
        tracing::debug!(
            duplicates,
            unplaced,
            fusions,
            "records excluded from aggregation"
        );
    }

    let mut pileups: Vec<Pileup> = groups
        .into_iter()
        .map(|(location, members)| Pileup::new(location, members))
        .collect();
    pileups.sort_by(|a, b| b.count.cmp(&a.count).then(b.location.cmp(&a.location)));
    pileups
}

/// Total number of mutations represented across a pileup set. This is
/// the filter comparison key; several mutations can collapse into one
/// pileup, so the pileup count itself is not it.
pub fn total_mutation_count(pileups: &[Pileup]) -> usize {
    pileups.iter().map(|p| p.count).sum()
}

/// Count of the largest cluster, or None for an empty set.
pub fn max_cluster_count(pileups: &[Pileup]) -> Option<usize> {
    pileups.first().map(|p| p.count)
}

#[cfg(test)]
#[path = "../../tests/src_inline/diagram/aggregate.rs"]
mod tests;
