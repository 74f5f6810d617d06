use std::io::BufRead;
use std::path::Path;

use crate::input::{InputError, open_maybe_gz};
use crate::model::mutation::MutationRecord;

#[derive(Debug, Default)]
struct ColumnMap {
    gene: Option<usize>,
    mutation_id: Option<usize>,
    mutation_sid: Option<usize>,
    protein_change: Option<usize>,
    protein_pos_start: Option<usize>,
    protein_pos_end: Option<usize>,
    mutation_type: Option<usize>,
    cancer_type: Option<usize>,
    sample_id: Option<usize>,
}

impl ColumnMap {
    fn from_header(header_cols: &[String]) -> Self {
        let mut map = ColumnMap::default();
        for (idx, name) in header_cols.iter().enumerate() {
            match name.to_ascii_lowercase().as_str() {
                "hugo_symbol" | "gene" | "gene_symbol" => map.gene = Some(idx),
                "mutation_id" => map.mutation_id = Some(idx),
                "mutation_sid" => map.mutation_sid = Some(idx),
                "protein_change" | "hgvsp_short" | "amino_acid_change" => {
                    map.protein_change = Some(idx)
                }
                "protein_pos_start" | "protein_position" => map.protein_pos_start = Some(idx),
                "protein_pos_end" => map.protein_pos_end = Some(idx),
                "variant_classification" | "mutation_type" => map.mutation_type = Some(idx),
                "cancer_type" | "cancer_study" => map.cancer_type = Some(idx),
                "tumor_sample_barcode" | "sample_id" | "sample" => map.sample_id = Some(idx),
                _ => {}
            }
        }
        map
    }

    fn is_usable(&self) -> bool {
        self.gene.is_some() || self.protein_change.is_some()
    }
}

fn field(fields: &[&str], idx: Option<usize>) -> String {
    idx.and_then(|i| fields.get(i))
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}

fn int_field(fields: &[&str], idx: Option<usize>) -> Option<i64> {
    idx.and_then(|i| fields.get(i))
        .and_then(|s| s.trim().parse::<i64>().ok())
}

/// MAF-style tab-separated input. Columns are located by header name,
/// case-insensitively; malformed lines are skipped with a warning
/// rather than failing the load.
pub fn load_records_maf(path: &Path) -> Result<Vec<MutationRecord>, InputError> {
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();

    let read = reader.read_line(&mut buf)?;
    if read == 0 {
        return Err(InputError::Parse("mutation file is empty".to_string()));
    }
    let header_cols: Vec<String> = buf
        .trim_end()
        .split('\t')
        .map(|s| s.trim().to_string())
        .collect();
    let columns = ColumnMap::from_header(&header_cols);
    if !columns.is_usable() {
        return Err(InputError::Parse(
            "no gene or protein-change column found in header".to_string(),
        ));
    }

    let mut records = Vec::new();
    let mut line_no = 1usize;
    let mut skipped = 0usize;
    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 2 {
            tracing::warn!(line_no, "short mutation line skipped");
            skipped += 1;
            continue;
        }

        records.push(MutationRecord {
            gene: field(&fields, columns.gene),
            mutation_id: field(&fields, columns.mutation_id),
            mutation_sid: field(&fields, columns.mutation_sid),
            protein_pos_start: int_field(&fields, columns.protein_pos_start),
            protein_pos_end: int_field(&fields, columns.protein_pos_end),
            protein_change: field(&fields, columns.protein_change),
            mutation_type: field(&fields, columns.mutation_type),
            cancer_type: field(&fields, columns.cancer_type),
            sample_id: field(&fields, columns.sample_id),
        });
    }

    if skipped > 0 {
        tracing::warn!(skipped, "mutation lines skipped during load");
    }
    Ok(records)
}
