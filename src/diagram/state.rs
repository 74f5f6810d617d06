use std::collections::{BTreeMap, HashMap, HashSet};

use crate::diagram::aggregate::{aggregate, max_cluster_count, total_mutation_count};
use crate::diagram::resolve::{assign_colors, plan_labels};
use crate::diagram::scale::{AxisScale, x_axis_scale, y_axis_scale};
use crate::model::config::{ConfigError, DiagramConfig};
use crate::model::mutation::MutationRecord;
use crate::model::pileup::Pileup;

/// Raw y extent when there is nothing to plot; clamps up to the
/// configured minimum instead of producing a zero-height axis.
const EMPTY_Y_SENTINEL: f64 = -1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagramEventKind {
    PlotUpdated,
    PlotReset,
    SelectionChanged,
}

/// Owned snapshot emitted once per completed state transition. Carries
/// the new state, not a diff.
#[derive(Debug, Clone)]
pub struct DiagramEvent {
    pub kind: DiagramEventKind,
    pub filtered: bool,
    pub visible_mutation_count: usize,
    pub pileup_count: usize,
    pub highlighted_locations: Vec<u32>,
}

type Observer = Box<dyn FnMut(&DiagramEvent)>;

/// Owns the working pileup set and everything derived from it. All
/// transitions are synchronous and leave the controller fully derived;
/// collaborating views (table, 3D viewer) read through the accessors
/// and subscribe for change notifications.
pub struct DiagramController {
    config: DiagramConfig,
    sequence_length: f64,
    original_mutations: Vec<MutationRecord>,
    initial_pileups: Vec<Pileup>,
    current_pileups: Vec<Pileup>,
    initial_total: usize,
    x_scale: AxisScale,
    y_scale: AxisScale,
    /// Y derived at construction; reused while auto-adjust is off.
    initial_y_scale: AxisScale,
    color_assignment: HashMap<String, String>,
    label_plan: HashSet<u64>,
    highlighted: BTreeMap<u32, Pileup>,
    multi_select: bool,
    observers: Vec<Observer>,
}

impl DiagramController {
    pub fn new(
        mutations: Vec<MutationRecord>,
        sequence_length: f64,
        config: DiagramConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let initial_pileups = aggregate(&mutations);
        let initial_total = total_mutation_count(&initial_pileups);
        let x_scale = x_axis_scale(sequence_length, &config)?;
        let y_scale = y_axis_scale(raw_y_extent(&initial_pileups), &config)?;
        let color_assignment = assign_colors(&initial_pileups, &config.fill);
        let label_plan = plan_labels(&initial_pileups, &config);

        tracing::info!(
            pileups = initial_pileups.len(),
            mutations = initial_total,
            "diagram state initialized"
        );

        Ok(DiagramController {
            current_pileups: initial_pileups.clone(),
            initial_pileups,
            initial_total,
            x_scale,
            initial_y_scale: y_scale.clone(),
            y_scale,
            color_assignment,
            label_plan,
            highlighted: BTreeMap::new(),
            multi_select: false,
            observers: Vec::new(),
            original_mutations: mutations,
            sequence_length,
            config,
        })
    }

    /// Replaces the working set with an aggregation of `subset` and
    /// re-derives everything downstream. Highlights are a separate
    /// overlay and survive; the y domain only moves when auto-adjust
    /// is on.
    pub fn filter(&mut self, subset: &[MutationRecord]) -> Result<(), ConfigError> {
        self.current_pileups = aggregate(subset);
        self.rederive()?;
        self.emit(DiagramEventKind::PlotUpdated);
        Ok(())
    }

    /// Replays the full original collection and clears highlights.
    pub fn reset(&mut self) -> Result<(), ConfigError> {
        self.current_pileups = aggregate(&self.original_mutations);
        self.rederive()?;
        self.highlighted.clear();
        self.emit(DiagramEventKind::PlotReset);
        Ok(())
    }

    fn rederive(&mut self) -> Result<(), ConfigError> {
        self.y_scale = if self.config.y_axis_auto_adjust {
            y_axis_scale(raw_y_extent(&self.current_pileups), &self.config)?
        } else {
            self.initial_y_scale.clone()
        };
        self.color_assignment = assign_colors(&self.current_pileups, &self.config.fill);
        self.label_plan = plan_labels(&self.current_pileups, &self.config);
        Ok(())
    }

    /// True iff the working set represents fewer mutations than the
    /// unfiltered one. The sum of pileup counts is compared, not the
    /// pileup count, since mutations collapse into shared clusters.
    pub fn is_filtered(&self) -> bool {
        total_mutation_count(&self.current_pileups) < self.initial_total
    }

    /// Adds the pileup at `location` to the highlight overlay. A miss
    /// is a no-op: nothing changed, so no event fires.
    pub fn highlight(&mut self, location: u32) {
        let Some(pileup) = self
            .current_pileups
            .iter()
            .find(|p| p.location == location)
            .cloned()
        else {
            tracing::debug!(location, "highlight requested for absent location");
            return;
        };
        self.highlighted.insert(location, pileup);
        self.emit(DiagramEventKind::SelectionChanged);
    }

    pub fn unhighlight(&mut self, location: u32) {
        if self.highlighted.remove(&location).is_some() {
            self.emit(DiagramEventKind::SelectionChanged);
        }
    }

    pub fn clear_highlights(&mut self) {
        self.highlighted.clear();
        self.emit(DiagramEventKind::SelectionChanged);
    }

    pub fn is_highlighted(&self, location: u32) -> bool {
        self.highlighted.contains_key(&location)
    }

    pub fn highlighted_locations(&self) -> Vec<u32> {
        self.highlighted.keys().copied().collect()
    }

    /// Stored verbatim; whether a selection replaces or extends the
    /// current one under this flag is the caller's interpretation.
    pub fn set_multi_select(&mut self, active: bool) {
        self.multi_select = active;
    }

    pub fn multi_select(&self) -> bool {
        self.multi_select
    }

    pub fn initial_pileups(&self) -> &[Pileup] {
        &self.initial_pileups
    }

    pub fn current_pileups(&self) -> &[Pileup] {
        &self.current_pileups
    }

    pub fn x_scale(&self) -> &AxisScale {
        &self.x_scale
    }

    pub fn y_scale(&self) -> &AxisScale {
        &self.y_scale
    }

    pub fn sequence_length(&self) -> f64 {
        self.sequence_length
    }

    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    pub fn color_of(&self, mutation_id: &str) -> Option<&str> {
        self.color_assignment.get(mutation_id).map(String::as_str)
    }

    pub fn color_assignment(&self) -> &HashMap<String, String> {
        &self.color_assignment
    }

    pub fn label_plan(&self) -> &HashSet<u64> {
        &self.label_plan
    }

    pub fn is_labeled(&self, pileup_id: u64) -> bool {
        self.label_plan.contains(&pileup_id)
    }

    /// Count of the largest currently visible cluster; the y label
    /// rule uses it to decide on the greater-than marker.
    pub fn max_cluster_count(&self) -> Option<usize> {
        max_cluster_count(&self.current_pileups)
    }

    pub fn subscribe(&mut self, observer: impl FnMut(&DiagramEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    fn emit(&mut self, kind: DiagramEventKind) {
        let event = DiagramEvent {
            kind,
            filtered: self.is_filtered(),
            visible_mutation_count: total_mutation_count(&self.current_pileups),
            pileup_count: self.current_pileups.len(),
            highlighted_locations: self.highlighted_locations(),
        };
        for observer in &mut self.observers {
            observer(&event);
        }
    }
}

fn raw_y_extent(pileups: &[Pileup]) -> f64 {
    match max_cluster_count(pileups) {
        Some(count) => count as f64,
        None => EMPTY_Y_SENTINEL,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/diagram/state.rs"]
mod tests;
