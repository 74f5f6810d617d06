use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::diagram::aggregate::total_mutation_count;
use crate::diagram::scale::{AxisScale, x_tick_label, y_tick_label};
use crate::diagram::state::DiagramController;
use crate::model::pileup::CancerTypeCount;

pub mod text;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct TickMark {
    pub value: f64,
    /// None for unlabeled (minor or suppressed) ticks.
    pub label: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisSnapshot {
    pub domain_max: f64,
    pub tick_interval: f64,
    pub pixel_range: (f64, f64),
    pub ticks: Vec<TickMark>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PileupSummary {
    pub pileup_id: u64,
    pub location: u32,
    pub count: usize,
    pub label: String,
    pub labeled: bool,
    pub color: Option<String>,
    pub stats: Vec<CancerTypeCount>,
}

/// Everything the rendering collaborator consumes, in one serializable
/// value: ordered pileups, both axis scales with label decisions,
/// per-mutation colors and the label plan.
#[derive(Debug, Clone, Serialize)]
pub struct DiagramSnapshot {
    pub tool: String,
    pub tool_version: String,
    pub sequence_length: f64,
    pub filtered: bool,
    pub total_mutation_count: usize,
    pub visible_mutation_count: usize,
    pub x_axis: AxisSnapshot,
    pub y_axis: AxisSnapshot,
    pub pileups: Vec<PileupSummary>,
    pub mutation_colors: HashMap<String, String>,
    pub highlighted_locations: Vec<u32>,
    pub multi_select: bool,
}

pub fn snapshot(controller: &DiagramController) -> DiagramSnapshot {
    let x_scale = controller.x_scale();
    let y_scale = controller.y_scale();
    let true_max = controller.max_cluster_count().unwrap_or(0) as f64;

    let x_axis = axis_snapshot(x_scale, |v| x_tick_label(v, x_scale));
    let y_axis = axis_snapshot(y_scale, |v| y_tick_label(v, y_scale, true_max));

    let pileups = controller
        .current_pileups()
        .iter()
        .map(|p| PileupSummary {
            pileup_id: p.pileup_id,
            location: p.location,
            count: p.count,
            label: p.label.clone(),
            labeled: controller.is_labeled(p.pileup_id),
            color: p
                .mutations
                .first()
                .and_then(|m| controller.color_of(&m.mutation_id))
                .map(str::to_string),
            stats: p.stats.clone(),
        })
        .collect();

    DiagramSnapshot {
        tool: "lollipop-engine".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
        sequence_length: controller.sequence_length(),
        filtered: controller.is_filtered(),
        total_mutation_count: total_mutation_count(controller.initial_pileups()),
        visible_mutation_count: total_mutation_count(controller.current_pileups()),
        x_axis,
        y_axis,
        pileups,
        mutation_colors: controller.color_assignment().clone(),
        highlighted_locations: controller.highlighted_locations(),
        multi_select: controller.multi_select(),
    }
}

fn axis_snapshot(scale: &AxisScale, label_for: impl Fn(f64) -> Option<String>) -> AxisSnapshot {
    AxisSnapshot {
        domain_max: scale.domain_max,
        tick_interval: scale.tick_interval,
        pixel_range: scale.pixel_range,
        ticks: scale
            .tick_values
            .iter()
            .map(|&v| TickMark {
                value: v,
                label: label_for(v),
            })
            .collect(),
    }
}

/// Writes `diagram.json` and `summary.txt` into `out_dir`, creating it
/// if needed.
pub fn write_reports(controller: &DiagramController, out_dir: &Path) -> Result<(), ReportError> {
    fs::create_dir_all(out_dir)?;
    let snap = snapshot(controller);

    let json_path = out_dir.join("diagram.json");
    let file = fs::File::create(&json_path)?;
    serde_json::to_writer_pretty(file, &snap)?;

    let text_path = out_dir.join("summary.txt");
    fs::write(&text_path, text::render_summary_text(&snap))?;

    tracing::info!(out = %out_dir.display(), "reports written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/tests.rs"]
mod tests;
