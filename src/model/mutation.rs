use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static FIRST_INTEGER_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

/// One point-mutation observation as delivered by an upstream parser.
/// Read-only to the diagram core; updates always replace the working
/// collection wholesale.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MutationRecord {
    pub gene: String,
    /// Stable per-record identifier.
    pub mutation_id: String,
    /// Grouping identifier shared by records that report the same
    /// underlying event across samples; the dedup key.
    pub mutation_sid: String,
    pub protein_pos_start: Option<i64>,
    pub protein_pos_end: Option<i64>,
    pub protein_change: String,
    pub mutation_type: String,
    pub cancer_type: String,
    pub sample_id: String,
}

impl MutationRecord {
    /// Protein position used for pileup grouping. `protein_pos_start`
    /// wins when present and positive; otherwise the first integer run
    /// in the protein-change string (e.g. the 600 of "V600E") is used.
    /// Records with neither are unplaceable and excluded upstream.
    pub fn resolved_position(&self) -> Option<u32> {
        if let Some(pos) = self.protein_pos_start {
            if pos > 0 {
                return u32::try_from(pos).ok();
            }
        }
        let m = FIRST_INTEGER_RUN.find(&self.protein_change)?;
        m.as_str().parse::<u32>().ok()
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/mutation.rs"]
mod tests;
