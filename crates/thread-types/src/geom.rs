//! Curve value types spoken across the geometry-kernel boundary.
//!
//! These are plain data: construction logic lives in the ops layer, heavy
//! geometry (sweeping, booleans) lives behind the kernel traits. Points and
//! vectors are raw `[f64; 3]` to keep the boundary free of math-library
//! types.

use serde::{Deserialize, Serialize};

/// Free-function vector math over raw `[f64; 3]` values.
pub mod vec3 {
    pub fn add(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    pub fn sub(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    pub fn scale(a: [f64; 3], s: f64) -> [f64; 3] {
        [a[0] * s, a[1] * s, a[2] * s]
    }

    pub fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    pub fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
        [
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]
    }

    pub fn norm(a: [f64; 3]) -> f64 {
        dot(a, a).sqrt()
    }

    pub fn distance(a: [f64; 3], b: [f64; 3]) -> f64 {
        norm(sub(a, b))
    }

    /// Unit vector in the direction of `a`; zero-length input yields +X so
    /// degenerate axes stay finite for the caller to reject.
    pub fn normalize(a: [f64; 3]) -> [f64; 3] {
        let len = norm(a);
        if len < 1e-12 {
            [1.0, 0.0, 0.0]
        } else {
            scale(a, 1.0 / len)
        }
    }
}

/// An oriented axis: origin plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Axis3 {
    pub origin: [f64; 3],
    pub direction: [f64; 3],
}

impl Axis3 {
    pub fn new(origin: [f64; 3], direction: [f64; 3]) -> Self {
        Self { origin, direction }
    }

    /// The global +X axis through the origin (the screw axis of the
    /// reference frame).
    pub fn x() -> Self {
        Self {
            origin: [0.0; 3],
            direction: [1.0, 0.0, 0.0],
        }
    }

    pub fn unit_direction(&self) -> [f64; 3] {
        vec3::normalize(self.direction)
    }

    /// Signed coordinate of `p` along the axis, measured from the origin.
    pub fn axial_coord(&self, p: [f64; 3]) -> f64 {
        vec3::dot(vec3::sub(p, self.origin), self.unit_direction())
    }

    /// Distance from `p` to the axis line.
    pub fn radial_distance(&self, p: [f64; 3]) -> f64 {
        let d = self.unit_direction();
        let v = vec3::sub(p, self.origin);
        let along = vec3::scale(d, vec3::dot(v, d));
        vec3::norm(vec3::sub(v, along))
    }

    /// Point on the axis at axial coordinate `t`.
    pub fn point_at(&self, t: f64) -> [f64; 3] {
        vec3::add(self.origin, vec3::scale(self.unit_direction(), t))
    }
}

/// A circular arc through three points: start, an interior point on the
/// arc, and end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcThrough {
    pub start: [f64; 3],
    pub interior: [f64; 3],
    pub end: [f64; 3],
}

impl ArcThrough {
    pub fn translated(&self, offset: [f64; 3]) -> Self {
        Self {
            start: vec3::add(self.start, offset),
            interior: vec3::add(self.interior, offset),
            end: vec3::add(self.end, offset),
        }
    }
}

/// An open or closed polyline with at least two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline3 {
    pub points: Vec<[f64; 3]>,
}

impl Polyline3 {
    pub fn new(points: Vec<[f64; 3]>) -> Self {
        Self { points }
    }

    /// Number of straight spans between consecutive points.
    pub fn span_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn is_closed(&self, tolerance: f64) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(&a), Some(&b)) => vec3::distance(a, b) <= tolerance,
            _ => false,
        }
    }

    pub fn translated(&self, offset: [f64; 3]) -> Self {
        Self {
            points: self.points.iter().map(|&p| vec3::add(p, offset)).collect(),
        }
    }
}

/// One segment of a composite profile path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ProfileSegment {
    Arc(ArcThrough),
    Polyline(Polyline3),
}

impl ProfileSegment {
    pub fn start(&self) -> [f64; 3] {
        match self {
            ProfileSegment::Arc(a) => a.start,
            ProfileSegment::Polyline(p) => p.points[0],
        }
    }

    pub fn end(&self) -> [f64; 3] {
        match self {
            ProfileSegment::Arc(a) => a.end,
            ProfileSegment::Polyline(p) => p.points[p.points.len() - 1],
        }
    }

    /// Kink candidates after sweeping: an arc is one smooth span, each
    /// polyline span is one.
    pub fn span_count(&self) -> usize {
        match self {
            ProfileSegment::Arc(_) => 1,
            ProfileSegment::Polyline(p) => p.span_count(),
        }
    }

    pub fn translated(&self, offset: [f64; 3]) -> Self {
        match self {
            ProfileSegment::Arc(a) => ProfileSegment::Arc(a.translated(offset)),
            ProfileSegment::Polyline(p) => ProfileSegment::Polyline(p.translated(offset)),
        }
    }
}

/// An ordered open path of curve segments forming one thread period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePath {
    pub segments: Vec<ProfileSegment>,
}

impl ProfilePath {
    pub fn new(segments: Vec<ProfileSegment>) -> Self {
        Self { segments }
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True when every segment ends where the next begins, within
    /// `tolerance`.
    pub fn is_continuous(&self, tolerance: f64) -> bool {
        self.segments
            .windows(2)
            .all(|w| vec3::distance(w[0].end(), w[1].start()) <= tolerance)
    }

    /// True when the path loops back onto its own start. A thread profile
    /// must never close — it is swept, not extruded.
    pub fn is_closed(&self, tolerance: f64) -> bool {
        match (self.segments.first(), self.segments.last()) {
            (Some(first), Some(last)) => vec3::distance(first.start(), last.end()) <= tolerance,
            _ => false,
        }
    }

    /// Total smooth spans across all segments.
    pub fn span_count(&self) -> usize {
        self.segments.iter().map(|s| s.span_count()).sum()
    }

    /// Every defining point of every segment, in path order.
    pub fn points(&self) -> Vec<[f64; 3]> {
        let mut out = Vec::new();
        for seg in &self.segments {
            match seg {
                ProfileSegment::Arc(a) => out.extend([a.start, a.interior, a.end]),
                ProfileSegment::Polyline(p) => out.extend(p.points.iter().copied()),
            }
        }
        out
    }

    pub fn translated(&self, offset: [f64; 3]) -> Self {
        Self {
            segments: self.segments.iter().map(|s| s.translated(offset)).collect(),
        }
    }
}

/// A constant-radius cylindrical helix: advances `pitch` along the axis per
/// revolution, spanning `turns` full revolutions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Helix {
    pub axis: Axis3,
    pub radius: f64,
    pub pitch: f64,
    pub turns: f64,
}

impl Helix {
    /// Total axial travel over the full turn span.
    pub fn axial_advance(&self) -> f64 {
        self.pitch * self.turns
    }
}

/// A planar circular disk, used for capping open shells.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Disk {
    pub center: [f64; 3],
    pub normal: [f64; 3],
    pub radius: f64,
}
