use super::*;

use std::cell::RefCell;
use std::rc::Rc;

fn record(sid: &str, pos: i64, change: &str) -> MutationRecord {
    MutationRecord {
        gene: "BRAF".to_string(),
        mutation_id: format!("id_{sid}"),
        mutation_sid: sid.to_string(),
        protein_pos_start: Some(pos),
        protein_pos_end: None,
        protein_change: change.to_string(),
        mutation_type: "missense_mutation".to_string(),
        cancer_type: "melanoma".to_string(),
        sample_id: "sample1".to_string(),
    }
}

fn sample_mutations() -> Vec<MutationRecord> {
    vec![
        record("s1", 600, "V600E"),
        record("s2", 600, "V600K"),
        record("s3", 600, "V600E"),
        record("s4", 100, "A100T"),
        record("s5", 200, "B200C"),
    ]
}

fn controller() -> DiagramController {
    DiagramController::new(sample_mutations(), 766.0, DiagramConfig::default()).unwrap()
}

fn content_equal(a: &[Pileup], b: &[Pileup]) -> bool {
    a.len() == b.len()
        && a.iter().zip(b.iter()).all(|(x, y)| {
            x.location == y.location && x.count == y.count && x.mutations == y.mutations
        })
}

#[test]
fn test_invalid_config_rejected_at_construction() {
    let mut config = DiagramConfig::default();
    config.x_axis_tick_intervals.clear();
    match DiagramController::new(sample_mutations(), 766.0, config) {
        Err(err) => assert_eq!(err, ConfigError::EmptyTickIntervals { axis: "x" }),
        Ok(_) => panic!("expected a config error"),
    }
}

#[test]
fn test_initial_state_not_filtered() {
    let c = controller();
    assert!(!c.is_filtered());
    assert_eq!(c.current_pileups().len(), 3);
    assert_eq!(c.current_pileups()[0].location, 600);
    assert_eq!(c.current_pileups()[0].count, 3);
}

#[test]
fn test_filter_with_full_set_is_idempotent() {
    let mut c = controller();
    c.filter(&sample_mutations()).unwrap();
    assert!(!c.is_filtered());
    assert!(content_equal(c.current_pileups(), c.initial_pileups()));
}

#[test]
fn test_filter_subset_sets_filtered() {
    let mut c = controller();
    let subset: Vec<MutationRecord> = sample_mutations().into_iter().take(2).collect();
    c.filter(&subset).unwrap();
    assert!(c.is_filtered());
    assert_eq!(c.current_pileups().len(), 1);
    // The unfiltered snapshot is untouched.
    assert_eq!(c.initial_pileups().len(), 3);
}

#[test]
fn test_filtered_compares_mutation_totals_not_pileup_counts() {
    // Subset with the same number of pileups but fewer mutations.
    let mut c = controller();
    let subset = vec![
        record("s1", 600, "V600E"),
        record("s4", 100, "A100T"),
        record("s5", 200, "B200C"),
    ];
    c.filter(&subset).unwrap();
    assert_eq!(c.current_pileups().len(), 3);
    assert!(c.is_filtered());
}

#[test]
fn test_reset_round_trip() {
    let mut c = controller();
    c.filter(&[record("s1", 600, "V600E")]).unwrap();
    c.highlight(600);
    c.reset().unwrap();
    assert!(!c.is_filtered());
    assert!(content_equal(c.current_pileups(), c.initial_pileups()));
    assert!(c.highlighted_locations().is_empty());
}

#[test]
fn test_y_domain_fixed_without_auto_adjust() {
    let mut c = controller();
    let initial_domain = c.y_scale().domain_max;
    c.filter(&[record("s4", 100, "A100T")]).unwrap();
    assert_eq!(c.y_scale().domain_max, initial_domain);
}

#[test]
fn test_y_domain_recomputed_with_auto_adjust() {
    let mut config = DiagramConfig::default();
    config.y_axis_auto_adjust = true;
    config.min_length_y = 1.0;
    let mut c = DiagramController::new(sample_mutations(), 766.0, config).unwrap();
    assert_eq!(c.y_scale().domain_max, 3.0);
    c.filter(&[record("s4", 100, "A100T")]).unwrap();
    assert_eq!(c.y_scale().domain_max, 1.0);
}

#[test]
fn test_highlight_is_pure_overlay() {
    let mut c = controller();
    let before = c.current_pileups().to_vec();
    c.highlight(600);
    assert!(c.is_highlighted(600));
    assert!(content_equal(c.current_pileups(), &before));
    c.unhighlight(600);
    assert!(!c.is_highlighted(600));
}

#[test]
fn test_highlight_absent_location_is_noop() {
    let mut c = controller();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    c.subscribe(move |ev| sink.borrow_mut().push(ev.kind));
    c.highlight(9999);
    assert!(!c.is_highlighted(9999));
    assert!(events.borrow().is_empty());
}

#[test]
fn test_clear_highlights() {
    let mut c = controller();
    c.highlight(600);
    c.highlight(100);
    assert_eq!(c.highlighted_locations(), vec![100, 600]);
    c.clear_highlights();
    assert!(c.highlighted_locations().is_empty());
}

#[test]
fn test_one_event_per_completed_transition() {
    let mut c = controller();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    c.subscribe(move |ev| sink.borrow_mut().push((ev.kind, ev.filtered)));

    c.filter(&[record("s1", 600, "V600E")]).unwrap();
    c.highlight(600);
    c.reset().unwrap();

    let seen = events.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0], (DiagramEventKind::PlotUpdated, true));
    assert_eq!(seen[1].0, DiagramEventKind::SelectionChanged);
    // The reset event carries the restored, unfiltered state.
    assert_eq!(seen[2], (DiagramEventKind::PlotReset, false));
}

#[test]
fn test_event_carries_new_state_snapshot() {
    let mut c = controller();
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    c.subscribe(move |ev| {
        sink.borrow_mut()
            .push((ev.visible_mutation_count, ev.pileup_count))
    });
    c.filter(&[record("s1", 600, "V600E"), record("s4", 100, "A100T")])
        .unwrap();
    assert_eq!(events.borrow()[0], (2, 2));
}

#[test]
fn test_multi_select_is_stored_verbatim() {
    let mut c = controller();
    assert!(!c.multi_select());
    c.set_multi_select(true);
    assert!(c.multi_select());
    c.set_multi_select(false);
    assert!(!c.multi_select());
}

#[test]
fn test_colors_and_labels_follow_working_set() {
    let mut c = controller();
    assert!(c.color_of("id_s1").is_some());
    let initial_top = c.current_pileups()[0].pileup_id;
    assert!(c.is_labeled(initial_top));

    c.filter(&[record("s4", 100, "A100T")]).unwrap();
    // Colors are re-derived for the working set only.
    assert!(c.color_of("id_s1").is_none());
    assert!(c.color_of("id_s4").is_some());
    let new_top = c.current_pileups()[0].pileup_id;
    assert!(c.is_labeled(new_top));
}
