use super::*;

#[test]
fn test_domain_max_clamps_both_ways() {
    assert_eq!(domain_max(766.0, 0.0, 10000.0), 766.0);
    assert_eq!(domain_max(3.0, 5.0, 10000.0), 5.0);
    assert_eq!(domain_max(50000.0, 0.0, 10000.0), 10000.0);
    // Empty-set sentinel clamps up to the minimum bound.
    assert_eq!(domain_max(-1.0, 5.0, 10000.0), 5.0);
}

#[test]
fn test_tick_interval_selects_first_fitting_candidate() {
    let candidates = [100.0, 200.0, 400.0, 500.0, 1000.0];
    // 766/100 = 7.66 >= 7 rejected; 766/200 = 3.83 < 7 accepted.
    assert_eq!(tick_interval(&candidates, 766.0, 8, "x").unwrap(), 200.0);
}

#[test]
fn test_tick_interval_falls_back_to_last_candidate() {
    let candidates = [1.0, 2.0, 5.0];
    assert_eq!(tick_interval(&candidates, 1000.0, 4, "y").unwrap(), 5.0);
}

#[test]
fn test_tick_interval_zero_domain_takes_smallest() {
    let candidates = [1.0, 2.0, 5.0];
    assert_eq!(tick_interval(&candidates, 0.0, 6, "y").unwrap(), 1.0);
}

#[test]
fn test_tick_interval_contract_violations() {
    assert_eq!(
        tick_interval(&[], 100.0, 8, "x"),
        Err(ConfigError::EmptyTickIntervals { axis: "x" })
    );
    assert_eq!(
        tick_interval(&[100.0], 100.0, 0, "x"),
        Err(ConfigError::NonPositiveTickCount { axis: "x" })
    );
}

#[test]
fn test_tick_values_step_and_append_max() {
    assert_eq!(
        tick_values(766.0, 100.0),
        vec![0.0, 100.0, 200.0, 300.0, 400.0, 500.0, 600.0, 700.0, 766.0]
    );
}

#[test]
fn test_tick_values_zero_domain() {
    assert_eq!(tick_values(0.0, 100.0), vec![0.0]);
}

#[test]
fn test_tick_values_aligned_boundary() {
    assert_eq!(tick_values(400.0, 100.0), vec![0.0, 100.0, 200.0, 300.0, 400.0]);
}

#[test]
fn test_tick_values_degenerate_step() {
    assert_eq!(tick_values(100.0, 0.0), vec![0.0, 100.0]);
}

#[test]
fn test_x_axis_scale_typical_protein() {
    let config = DiagramConfig::default();
    let scale = x_axis_scale(766.0, &config).unwrap();
    assert_eq!(scale.domain_max, 766.0);
    assert_eq!(scale.tick_interval, 200.0);
    // Half-step minor ticks at interval/2 = 100.
    assert_eq!(scale.tick_values[1], 100.0);
    assert_eq!(*scale.tick_values.last().unwrap(), 766.0);
}

#[test]
fn test_y_axis_scale_empty_set_sentinel() {
    let config = DiagramConfig::default();
    let scale = y_axis_scale(-1.0, &config).unwrap();
    assert_eq!(scale.domain_max, config.min_length_y);
}

#[test]
fn test_y_axis_double_interval_steps() {
    let config = DiagramConfig::default();
    let scale = y_axis_scale(25.0, &config).unwrap();
    // 25/1=25, 25/2=12.5, 25/5=5 all >= 5; 25/10=2.5 < 5 accepted.
    assert_eq!(scale.tick_interval, 10.0);
    assert_eq!(scale.tick_values, vec![0.0, 20.0, 25.0]);
}

#[test]
fn test_x_tick_label_rules() {
    let scale = AxisScale {
        domain_max: 766.0,
        tick_interval: 200.0,
        tick_values: tick_values(766.0, 100.0),
        pixel_range: (0.0, 1.0),
    };
    // Domain max always labeled with the unit suffix.
    assert_eq!(x_tick_label(766.0, &scale), Some("766 aa".to_string()));
    // Exact multiple, far from the max.
    assert_eq!(x_tick_label(400.0, &scale), Some("400".to_string()));
    // Half-step minor tick: not an interval multiple.
    assert_eq!(x_tick_label(300.0, &scale), None);
    // Multiple but within interval/3 of the max: 766-700=66 <= 66.6.
    assert_eq!(x_tick_label(700.0, &scale), None);
}

#[test]
fn test_y_tick_label_rules() {
    let scale = AxisScale {
        domain_max: 25.0,
        tick_interval: 10.0,
        tick_values: tick_values(25.0, 20.0),
        pixel_range: (0.0, 1.0),
    };
    assert_eq!(y_tick_label(0.0, &scale, 25.0), Some("0".to_string()));
    assert_eq!(y_tick_label(20.0, &scale, 25.0), None);
    assert_eq!(y_tick_label(25.0, &scale, 25.0), Some("25".to_string()));
    // Clamped below the true maximum: greater-than marker.
    assert_eq!(y_tick_label(25.0, &scale, 80.0), Some(">25".to_string()));
}
