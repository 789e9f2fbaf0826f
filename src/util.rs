//! Utility functions for colors and geometry.
//!
//! This module provides:
//! - Color name lookup used by the configuration file
//! - Point and rectangle value types
//! - Evenly spaced step calculation for grids

use crate::draw::{Color, color::*};
use serde::{Deserialize, Serialize};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black", "transparent"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle, always stored with `min <= max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    /// Builds a rectangle from two opposite corners given in any order.
    pub fn from_corners(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            min: Point::new(x0.min(x1), y0.min(y1)),
            max: Point::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Builds a rectangle from its minimum corner and a size.
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_corners(x, y, x + width, y + height)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width() > 0.0 && self.height() > 0.0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }
}

/// Positions `0, step, 2*step, ...` up to and including `extent`, with
/// `step = extent / intervals`.
///
/// Each position is `i * step` so rounding never accumulates. The count is
/// `floor(intervals)` steps past 0, widened by a relative epsilon so the closing
/// position survives when `intervals` is integral but the division is inexact.
/// A zero extent yields the single position 0; a negative extent yields none.
/// Callers validate `intervals` (finite, positive and bounded).
pub fn grid_steps(extent: f64, intervals: f64) -> Vec<f64> {
    if extent < 0.0 {
        return Vec::new();
    }
    if extent == 0.0 {
        return vec![0.0];
    }

    let step = extent / intervals;
    let count = (intervals * (1.0 + 1e-9)).floor() as usize;
    (0..=count)
        .map(|i| (i as f64 * step).min(extent))
        .collect()
}
