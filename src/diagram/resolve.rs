use std::collections::{HashMap, HashSet};

use crate::model::config::{DiagramConfig, FillStyle};
use crate::model::pileup::Pileup;

/// A leading tie wider than this suppresses all labels; labeling one
/// of three equally tall clusters would imply a false winner.
pub const MAX_ALLOWED_TIE: usize = 2;

/// Resolves one fill color per pileup and caches it for every member
/// mutation by id, so other components can later query a single
/// mutation without re-running group resolution.
pub fn assign_colors(pileups: &[Pileup], fill: &FillStyle) -> HashMap<String, String> {
    let mut colors = HashMap::new();
    for pileup in pileups {
        let color = match fill {
            FillStyle::Constant(c) => c.clone(),
            FillStyle::PerPileup(f) => f(pileup),
            FillStyle::ByMainType(palette) => match pileup.group_by_main_type().first() {
                Some(top) => palette.color_for(top.main_type).to_string(),
                None => palette.default_tie.clone(),
            },
        };
        for m in &pileup.mutations {
            colors.insert(m.mutation_id.clone(), color.clone());
        }
    }
    colors
}

/// Chooses which pileups get a text label. Input must already carry
/// the aggregator's descending-count order.
pub fn plan_labels(pileups: &[Pileup], config: &DiagramConfig) -> HashSet<u64> {
    let mut plan = HashSet::new();
    let Some(top) = pileups.first() else {
        return plan;
    };

    // A lone pileup cannot ambiguously tie with anything; it is always
    // labeled, threshold notwithstanding.
    if pileups.len() == 1 {
        plan.insert(top.pileup_id);
        return plan;
    }

    let number_of_ties = pileups.iter().take_while(|p| p.count == top.count).count();
    if config.lollipop_label_count < number_of_ties && number_of_ties > MAX_ALLOWED_TIE {
        tracing::debug!(number_of_ties, "leading tie too wide, suppressing labels");
        return plan;
    }

    for pileup in pileups.iter().take(config.lollipop_label_count) {
        // Sorted input: everything after the first miss is below too.
        if pileup.count < config.lollipop_label_threshold {
            break;
        }
        plan.insert(pileup.pileup_id);
    }
    plan
}

#[cfg(test)]
#[path = "../../tests/src_inline/diagram/resolve.rs"]
mod tests;
