use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::pileup::Pileup;
use crate::model::types::MainType;

/// Configuration contract violations. Everything else irregular
/// (ties, empty inputs, degenerate domains) is absorbed by
/// deterministic fallback rules instead of being signaled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("empty tick interval candidate list for {axis} axis")]
    EmptyTickIntervals { axis: &'static str },
    #[error("max tick count for {axis} axis must be positive")]
    NonPositiveTickCount { axis: &'static str },
}

/// Palette keyed by the dominant main-type group of a pileup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MainTypePalette {
    pub missense: String,
    pub in_frame: String,
    pub truncating: String,
    pub fusion: String,
    pub other: String,
    /// Reserved fallback for the degenerate empty-grouping case.
    pub default_tie: String,
}

impl Default for MainTypePalette {
    fn default() -> Self {
        MainTypePalette {
            missense: "#008000".to_string(),
            in_frame: "#8B4513".to_string(),
            truncating: "#000000".to_string(),
            fusion: "#8B00C9".to_string(),
            other: "#C0C0C0".to_string(),
            default_tie: "#BB0000".to_string(),
        }
    }
}

impl MainTypePalette {
    pub fn color_for(&self, main_type: MainType) -> &str {
        match main_type {
            MainType::Missense => &self.missense,
            MainType::InFrame => &self.in_frame,
            MainType::Truncating => &self.truncating,
            MainType::Fusion => &self.fusion,
            MainType::Other => &self.other,
        }
    }
}

/// How pileups are filled: one constant color, full delegation per
/// pileup, or the structured main-type palette.
#[derive(Clone)]
pub enum FillStyle {
    Constant(String),
    PerPileup(Arc<dyn Fn(&Pileup) -> String + Send + Sync>),
    ByMainType(MainTypePalette),
}

impl Default for FillStyle {
    fn default() -> Self {
        FillStyle::ByMainType(MainTypePalette::default())
    }
}

impl fmt::Debug for FillStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FillStyle::Constant(c) => f.debug_tuple("Constant").field(c).finish(),
            FillStyle::PerPileup(_) => f.write_str("PerPileup(..)"),
            FillStyle::ByMainType(p) => f.debug_tuple("ByMainType").field(p).finish(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiagramConfig {
    pub min_length_x: f64,
    pub max_length_x: f64,
    pub min_length_y: f64,
    pub max_length_y: f64,
    /// Ascending candidate tick intervals per axis; the selector walks
    /// them until the tick density fits.
    pub x_axis_tick_intervals: Vec<f64>,
    pub y_axis_tick_intervals: Vec<f64>,
    /// Maximum visible tick counts.
    pub x_axis_ticks: usize,
    pub y_axis_ticks: usize,
    pub lollipop_label_count: usize,
    pub lollipop_label_threshold: usize,
    pub y_axis_auto_adjust: bool,
    /// Renderer coordinate spans carried through on AxisScale. The
    /// default unit span leaves rescaling to the rendering layer.
    pub x_pixel_range: (f64, f64),
    pub y_pixel_range: (f64, f64),
    #[serde(skip)]
    pub fill: FillStyle,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        DiagramConfig {
            min_length_x: 0.0,
            max_length_x: f64::MAX,
            min_length_y: 5.0,
            max_length_y: f64::MAX,
            x_axis_tick_intervals: vec![
                100.0, 200.0, 400.0, 500.0, 1000.0, 2000.0, 5000.0, 10000.0,
            ],
            y_axis_tick_intervals: vec![1.0, 2.0, 5.0, 10.0, 20.0, 50.0, 100.0, 200.0, 500.0],
            x_axis_ticks: 8,
            y_axis_ticks: 6,
            lollipop_label_count: 1,
            lollipop_label_threshold: 0,
            y_axis_auto_adjust: false,
            x_pixel_range: (0.0, 1.0),
            y_pixel_range: (0.0, 1.0),
            fill: FillStyle::default(),
        }
    }
}

impl DiagramConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.x_axis_tick_intervals.is_empty() {
            return Err(ConfigError::EmptyTickIntervals { axis: "x" });
        }
        if self.y_axis_tick_intervals.is_empty() {
            return Err(ConfigError::EmptyTickIntervals { axis: "y" });
        }
        if self.x_axis_ticks == 0 {
            return Err(ConfigError::NonPositiveTickCount { axis: "x" });
        }
        if self.y_axis_ticks == 0 {
            return Err(ConfigError::NonPositiveTickCount { axis: "y" });
        }
        Ok(())
    }
}
