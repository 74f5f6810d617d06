use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use thiserror::Error;

use crate::model::mutation::MutationRecord;

pub mod maf;
pub mod records;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn BufRead>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(GzDecoder::new(file))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Loads mutation records, dispatching on the file name: `.json` is a
/// serde array of records, `.maf`/`.tsv`/`.txt` is header-driven
/// tab-separated text. A trailing `.gz` on either is handled
/// transparently.
pub fn load_mutations(path: &Path) -> Result<Vec<MutationRecord>, InputError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| InputError::InvalidInput(format!("unusable path {}", path.display())))?;
    let stem = name.strip_suffix(".gz").unwrap_or(name);

    let mut loaded = if stem.ends_with(".json") {
        records::load_records_json(path)?
    } else if stem.ends_with(".maf") || stem.ends_with(".tsv") || stem.ends_with(".txt") {
        maf::load_records_maf(path)?
    } else {
        return Err(InputError::InvalidInput(format!(
            "unrecognized mutation file extension: {name}"
        )));
    };

    ensure_identities(&mut loaded);
    tracing::info!(records = loaded.len(), input = %path.display(), "mutation records loaded");
    Ok(loaded)
}

/// Backfills missing identifiers so dedup still works for inputs
/// without explicit id columns: the id falls back to the record index,
/// the sid to the event identity (gene/position/change/sample).
pub fn ensure_identities(records: &mut [MutationRecord]) {
    for (idx, record) in records.iter_mut().enumerate() {
        if record.mutation_id.is_empty() {
            record.mutation_id = format!("mut_{idx}");
        }
        if record.mutation_sid.is_empty() {
            record.mutation_sid = format!(
                "{}:{}:{}:{}",
                record.gene,
                record.protein_pos_start.unwrap_or(-1),
                record.protein_change,
                record.sample_id
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
