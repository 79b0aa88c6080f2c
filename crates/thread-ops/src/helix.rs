//! Helical rail construction.

use thread_types::{Axis3, Helix};

/// Constant-radius cylindrical helix advancing one pitch per revolution.
/// The start point sits at the reference radius in the plane containing
/// the axis.
pub fn build_helix(axis: Axis3, radius: f64, pitch: f64, turns: f64) -> Helix {
    Helix {
        axis,
        radius,
        pitch,
        turns,
    }
}
