use serde::Serialize;

use crate::model::config::{ConfigError, DiagramConfig};

const MULTIPLE_EPSILON: f64 = 1e-9;

/// Derived axis geometry. Recomputed as a whole whenever the
/// underlying data range changes, never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisScale {
    pub domain_max: f64,
    pub tick_interval: f64,
    pub tick_values: Vec<f64>,
    pub pixel_range: (f64, f64),
}

/// Clamps a raw data extent into the configured bounds.
pub fn domain_max(raw: f64, min_bound: f64, max_bound: f64) -> f64 {
    max_bound.min(raw.max(min_bound))
}

/// Walks the ascending candidate list and picks the first interval
/// whose resulting tick count fits; the last candidate is the coarse
/// fallback for arbitrarily large domains. A zero domain trivially
/// satisfies the first candidate, so there is no division hazard.
pub fn tick_interval(
    candidates: &[f64],
    domain_max: f64,
    max_tick_count: usize,
    axis: &'static str,
) -> Result<f64, ConfigError> {
    if candidates.is_empty() {
        return Err(ConfigError::EmptyTickIntervals { axis });
    }
    if max_tick_count == 0 {
        return Err(ConfigError::NonPositiveTickCount { axis });
    }
    for &candidate in candidates {
        if domain_max / candidate < (max_tick_count - 1) as f64 {
            return Ok(candidate);
        }
    }
    Ok(candidates[candidates.len() - 1])
}

/// Steps from 0 while below `domain_max`, then always appends
/// `domain_max` itself. The boundary may duplicate the last stepped
/// value; callers tolerate or dedupe it.
pub fn tick_values(domain_max: f64, step: f64) -> Vec<f64> {
    let mut values = Vec::new();
    if step > 0.0 {
        let mut v = 0.0;
        while v < domain_max {
            values.push(v);
            v += step;
        }
    } else if domain_max > 0.0 {
        // Degenerate step: endpoints only.
        values.push(0.0);
    }
    values.push(domain_max);
    values
}

/// Position axis: raw extent is the protein sequence length; minor
/// ticks at half-interval steps.
pub fn x_axis_scale(sequence_length: f64, config: &DiagramConfig) -> Result<AxisScale, ConfigError> {
    let dm = domain_max(sequence_length, config.min_length_x, config.max_length_x);
    let interval = tick_interval(&config.x_axis_tick_intervals, dm, config.x_axis_ticks, "x")?;
    Ok(AxisScale {
        domain_max: dm,
        tick_interval: interval,
        tick_values: tick_values(dm, interval / 2.0),
        pixel_range: config.x_pixel_range,
    })
}

/// Count axis: raw extent is the maximal cluster count (a negative
/// sentinel for the empty set clamps up to the configured minimum);
/// double-interval steps keep the ticks integral.
pub fn y_axis_scale(max_count: f64, config: &DiagramConfig) -> Result<AxisScale, ConfigError> {
    let dm = domain_max(max_count, config.min_length_y, config.max_length_y);
    let interval = tick_interval(&config.y_axis_tick_intervals, dm, config.y_axis_ticks, "y")?;
    Ok(AxisScale {
        domain_max: dm,
        tick_interval: interval,
        tick_values: tick_values(dm, interval * 2.0),
        pixel_range: config.y_pixel_range,
    })
}

/// X tick labels: the domain max always shows, suffixed with the
/// amino-acid unit; other ticks show only on exact interval multiples
/// far enough from the max to avoid a crowded near-duplicate.
pub fn x_tick_label(value: f64, scale: &AxisScale) -> Option<String> {
    if value == scale.domain_max {
        return Some(format!("{} aa", format_axis_value(value)));
    }
    if is_multiple_of(value, scale.tick_interval)
        && scale.domain_max - value > scale.tick_interval / 3.0
    {
        return Some(format_axis_value(value));
    }
    None
}

/// Y tick labels: only 0 and the domain max. The max label carries a
/// greater-than marker when the clamp hides a larger true count.
pub fn y_tick_label(value: f64, scale: &AxisScale, true_max: f64) -> Option<String> {
    if value == 0.0 {
        return Some("0".to_string());
    }
    if value == scale.domain_max {
        let marker = if true_max > scale.domain_max { ">" } else { "" };
        return Some(format!("{}{}", marker, format_axis_value(value)));
    }
    None
}

fn is_multiple_of(value: f64, interval: f64) -> bool {
    if interval <= 0.0 {
        return false;
    }
    let remainder = value % interval;
    remainder.abs() < MULTIPLE_EPSILON || (interval - remainder).abs() < MULTIPLE_EPSILON
}

fn format_axis_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/diagram/scale.rs"]
mod tests;
