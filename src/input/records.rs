use std::path::Path;

use crate::input::{InputError, open_maybe_gz};
use crate::model::mutation::MutationRecord;

/// JSON input: a top-level array of records with the camelCase field
/// names the serde derive on `MutationRecord` expects.
pub fn load_records_json(path: &Path) -> Result<Vec<MutationRecord>, InputError> {
    let reader = open_maybe_gz(path)?;
    let records: Vec<MutationRecord> = serde_json::from_reader(reader)?;
    Ok(records)
}
