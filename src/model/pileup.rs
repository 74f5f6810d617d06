use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

use crate::model::mutation::MutationRecord;
use crate::model::types::{self, MainType};

static NEXT_PILEUP_ID: AtomicU64 = AtomicU64::new(0);

fn next_pileup_id() -> u64 {
    NEXT_PILEUP_ID.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CancerTypeCount {
    pub cancer_type: String,
    pub count: usize,
}

/// Member mutations of one pileup partitioned by main type; produced
/// already sorted for palette selection.
#[derive(Debug, Clone)]
pub struct MainTypeGroup<'a> {
    pub main_type: MainType,
    /// Minimum concrete-type priority among the members; the tie-break
    /// key when groups have equal size.
    pub priority: u8,
    pub members: Vec<&'a MutationRecord>,
}

/// All mutations collapsed onto one protein position. Immutable once
/// constructed; a membership change always produces a replacement
/// pileup with a fresh id.
#[derive(Debug, Clone, Serialize)]
pub struct Pileup {
    /// Monotonically increasing and never reused for the lifetime of
    /// the process. Not stable across aggregation runs; callers that
    /// need cross-run continuity key by `location` instead.
    pub pileup_id: u64,
    pub location: u32,
    pub count: usize,
    pub label: String,
    pub stats: Vec<CancerTypeCount>,
    pub mutations: Vec<MutationRecord>,
}

impl Pileup {
    pub fn new(location: u32, mutations: Vec<MutationRecord>) -> Self {
        let label = pileup_label(&mutations);
        let stats = cancer_type_stats(&mutations);
        Pileup {
            pileup_id: next_pileup_id(),
            location,
            count: mutations.len(),
            label,
            stats,
            mutations,
        }
    }

    /// Partition members by main type, largest group first; equal-size
    /// groups are ordered by ascending priority so the winner is
    /// deterministic.
    pub fn group_by_main_type(&self) -> Vec<MainTypeGroup<'_>> {
        let mut groups: Vec<MainTypeGroup<'_>> = Vec::new();
        for m in &self.mutations {
            let style = types::classify(&m.mutation_type);
            match groups.iter_mut().find(|g| g.main_type == style.main_type) {
                Some(g) => {
                    g.members.push(m);
                    g.priority = g.priority.min(style.priority);
                }
                None => groups.push(MainTypeGroup {
                    main_type: style.main_type,
                    priority: style.priority,
                    members: vec![m],
                }),
            }
        }
        groups.sort_by(|a, b| {
            b.members
                .len()
                .cmp(&a.members.len())
                .then(a.priority.cmp(&b.priority))
        });
        groups
    }
}

/// Builds the display label from the distinct protein changes in the
/// pileup. For several values, the shared prefix is taken from the two
/// sort extremes only: ["V600E", "V600K"] -> "V600E/K". Blank changes
/// contribute nothing (the mutation still counts toward `count`).
pub fn pileup_label(mutations: &[MutationRecord]) -> String {
    let changes: BTreeSet<&str> = mutations
        .iter()
        .map(|m| m.protein_change.as_str())
        .filter(|c| !c.trim().is_empty())
        .collect();
    let changes: Vec<&str> = changes.into_iter().collect();

    match changes.len() {
        0 => String::new(),
        1 => changes[0].to_string(),
        _ => {
            let first = changes[0];
            let last = changes[changes.len() - 1];
            let prefix = common_starting_substring(first, last);
            let mut label = prefix.to_string();
            for change in &changes {
                label.push_str(&change[prefix.len()..]);
                label.push('/');
            }
            label.pop();
            label
        }
    }
}

fn common_starting_substring<'a>(a: &'a str, b: &str) -> &'a str {
    let mut len = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        len += ca.len_utf8();
    }
    &a[..len]
}

/// Per-cancer-type member counts, descending; ties keep the encounter
/// order of each type's first occurrence.
pub fn cancer_type_stats(mutations: &[MutationRecord]) -> Vec<CancerTypeCount> {
    let mut stats: Vec<CancerTypeCount> = Vec::new();
    for m in mutations {
        match stats.iter_mut().find(|s| s.cancer_type == m.cancer_type) {
            Some(s) => s.count += 1,
            None => stats.push(CancerTypeCount {
                cancer_type: m.cancer_type.clone(),
                count: 1,
            }),
        }
    }
    // Stable sort preserves first-occurrence order on equal counts.
    stats.sort_by(|a, b| b.count.cmp(&a.count));
    stats
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/pileup.rs"]
mod tests;
