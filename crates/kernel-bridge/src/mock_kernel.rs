//! MockKernel — deterministic test double implementing Kernel + KernelIntrospect.
//!
//! Bodies are modeled as axisymmetric regions: closed outlines in the
//! (axial, radial) half-plane, sliced per axial station into radial interval
//! sets. Volume comes from numerically revolving the intervals, boolean
//! intersection from per-station interval intersection. The model has no
//! knowledge of threads — ridges are ignored, a capped sweep is simply the
//! cylinder of its outer radius — but volumes and extents respond
//! monotonically and deterministically to the inputs, which is what the
//! scenario tests assert.

use std::collections::HashMap;

use crate::traits::{Kernel, KernelIntrospect};
use crate::types::*;
use thread_types::{vec3, Axis3, Disk, Helix, Polyline3, ProfilePath};

/// Axial stations used for slicing and volume integration.
const STATIONS: usize = 2048;

/// An open swept ribbon with known extents.
#[derive(Debug, Clone)]
struct SweptSheet {
    axis: Axis3,
    axial_min: f64,
    axial_max: f64,
    radial_min: f64,
    radial_max: f64,
    /// Smooth spans in one profile period; fixed at sweep time.
    spans_per_period: usize,
    turns: f64,
    face_count: usize,
}

/// A planar capping disk.
#[derive(Debug, Clone)]
struct DiskSheet {
    center: [f64; 3],
    radius: f64,
}

#[derive(Debug, Clone)]
enum MockSheet {
    Swept(SweptSheet),
    Disk(DiskSheet),
}

/// Axisymmetric solid geometry: either the closed generating outline, or a
/// per-station sampling produced by a boolean.
#[derive(Debug, Clone)]
enum SolidGeom {
    Outline(Vec<(f64, f64)>),
    Sampled {
        x0: f64,
        x1: f64,
        intervals: Vec<Vec<(f64, f64)>>,
    },
}

#[derive(Debug, Clone)]
struct MockSolid {
    axis: Axis3,
    geom: SolidGeom,
    face_count: usize,
}

/// Deterministic test double for the geometry kernel.
pub struct MockKernel {
    next_handle: u64,
    sheets: HashMap<u64, MockSheet>,
    solids: HashMap<u64, MockSolid>,
    operations: usize,
}

impl MockKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            sheets: HashMap::new(),
            solids: HashMap::new(),
            operations: 0,
        }
    }

    /// Number of kernel operations performed so far. Lets callers assert
    /// that validation failures never reach the kernel.
    pub fn operations(&self) -> usize {
        self.operations
    }

    fn alloc(&mut self) -> u64 {
        let id = self.next_handle;
        self.next_handle += 1;
        id
    }

    fn store_sheet(&mut self, sheet: MockSheet) -> SheetHandle {
        let id = self.alloc();
        self.sheets.insert(id, sheet);
        SheetHandle(id)
    }

    fn store_solid(&mut self, solid: MockSolid) -> SolidHandle {
        let id = self.alloc();
        self.solids.insert(id, solid);
        SolidHandle(id)
    }

    fn sheet(&self, handle: &SheetHandle) -> Result<&MockSheet, KernelError> {
        self.sheets
            .get(&handle.id())
            .ok_or(KernelError::BodyNotFound { id: handle.id() })
    }

    fn solid(&self, handle: &SolidHandle) -> Result<&MockSolid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or(KernelError::BodyNotFound { id: handle.id() })
    }
}

impl Default for MockKernel {
    fn default() -> Self {
        Self::new()
    }
}

/// Radial intervals covered by the outline's enclosed region at axial
/// station `x`, via even-odd edge crossings. Edges parallel to the radial
/// direction have zero axial measure and are skipped; the half-open span
/// rule keeps shared vertices from double-counting.
fn slice_outline(outline: &[(f64, f64)], x: f64) -> Vec<(f64, f64)> {
    let n = outline.len();
    let mut crossings: Vec<f64> = Vec::new();
    for i in 0..n {
        let (xa, ra) = outline[i];
        let (xb, rb) = outline[(i + 1) % n];
        if (xa - xb).abs() < 1e-15 {
            continue;
        }
        let (lo, hi) = if xa < xb { (xa, xb) } else { (xb, xa) };
        if x >= lo && x < hi {
            let t = (x - xa) / (xb - xa);
            crossings.push(ra + t * (rb - ra));
        }
    }
    crossings.sort_by(|a, b| a.partial_cmp(b).expect("finite radii"));
    crossings
        .chunks(2)
        .filter(|c| c.len() == 2)
        .map(|c| (c[0], c[1]))
        .collect()
}

fn intersect_interval_sets(a: &[(f64, f64)], b: &[(f64, f64)]) -> Vec<(f64, f64)> {
    let mut out = Vec::new();
    for &(a0, a1) in a {
        for &(b0, b1) in b {
            let lo = a0.max(b0);
            let hi = a1.min(b1);
            if hi > lo {
                out.push((lo, hi));
            }
        }
    }
    out.sort_by(|p, q| p.0.partial_cmp(&q.0).expect("finite radii"));
    out
}

impl SolidGeom {
    fn axial_range(&self) -> (f64, f64) {
        match self {
            SolidGeom::Outline(pts) => {
                let mut lo = f64::MAX;
                let mut hi = f64::MIN;
                for &(x, _) in pts {
                    lo = lo.min(x);
                    hi = hi.max(x);
                }
                (lo, hi)
            }
            SolidGeom::Sampled { x0, x1, .. } => (*x0, *x1),
        }
    }

    fn intervals_at(&self, x: f64) -> Vec<(f64, f64)> {
        match self {
            SolidGeom::Outline(pts) => slice_outline(pts, x),
            SolidGeom::Sampled { x0, x1, intervals } => {
                if intervals.is_empty() || x < *x0 || x > *x1 {
                    return Vec::new();
                }
                let dx = (x1 - x0) / intervals.len() as f64;
                let idx = (((x - x0) / dx - 0.5).round().max(0.0) as usize)
                    .min(intervals.len() - 1);
                intervals[idx].clone()
            }
        }
    }

    /// Volume of the revolved region, midpoint rule over the axial range.
    fn volume(&self) -> f64 {
        let (x0, x1) = self.axial_range();
        if x1 <= x0 {
            return 0.0;
        }
        let dx = (x1 - x0) / STATIONS as f64;
        let mut v = 0.0;
        for i in 0..STATIONS {
            let x = x0 + (i as f64 + 0.5) * dx;
            for (lo, hi) in self.intervals_at(x) {
                v += std::f64::consts::PI * (hi * hi - lo * lo) * dx;
            }
        }
        v
    }

    fn max_radius(&self) -> f64 {
        let (x0, x1) = self.axial_range();
        let dx = (x1 - x0) / STATIONS as f64;
        let mut r = 0.0_f64;
        for i in 0..STATIONS {
            let x = x0 + (i as f64 + 0.5) * dx;
            for (_, hi) in self.intervals_at(x) {
                r = r.max(hi);
            }
        }
        r
    }

    fn translated(&self, t: f64) -> SolidGeom {
        match self {
            SolidGeom::Outline(pts) => {
                SolidGeom::Outline(pts.iter().map(|&(x, r)| (x + t, r)).collect())
            }
            SolidGeom::Sampled { x0, x1, intervals } => SolidGeom::Sampled {
                x0: x0 + t,
                x1: x1 + t,
                intervals: intervals.clone(),
            },
        }
    }
}

/// Axis-aligned bounding box of a cylinder-bounded region of revolution:
/// extent along the axis between `a` and `b`, radius `r` perpendicular.
fn revolution_bbox(axis: &Axis3, a: f64, b: f64, r: f64) -> [f64; 6] {
    let d = axis.unit_direction();
    let c0 = axis.point_at(a);
    let c1 = axis.point_at(b);
    let mut bbox = [0.0; 6];
    for i in 0..3 {
        let s = r * (1.0 - d[i] * d[i]).max(0.0).sqrt();
        bbox[i] = c0[i].min(c1[i]) - s;
        bbox[i + 3] = c0[i].max(c1[i]) + s;
    }
    bbox
}

impl Kernel for MockKernel {
    fn rail_revolve(
        &mut self,
        profile: &ProfilePath,
        rail: &Helix,
        axis: &Axis3,
    ) -> Result<SheetHandle, KernelError> {
        self.operations += 1;
        if profile.is_empty() {
            return Err(KernelError::DegenerateInput {
                reason: "profile path has no segments".to_string(),
            });
        }
        if rail.radius <= 0.0 || rail.turns <= 0.0 || rail.pitch <= 0.0 {
            return Err(KernelError::DegenerateInput {
                reason: "helix rail must have positive radius, pitch and turns".to_string(),
            });
        }

        let mut axial_min = f64::MAX;
        let mut axial_max = f64::MIN;
        let mut radial_min = f64::MAX;
        let mut radial_max = f64::MIN;
        for p in profile.points() {
            let ax = axis.axial_coord(p);
            let rad = axis.radial_distance(p);
            axial_min = axial_min.min(ax);
            axial_max = axial_max.max(ax);
            radial_min = radial_min.min(rad);
            radial_max = radial_max.max(rad);
        }

        Ok(self.store_sheet(MockSheet::Swept(SweptSheet {
            axis: *axis,
            axial_min,
            axial_max: axial_max + rail.axial_advance(),
            radial_min,
            radial_max,
            spans_per_period: profile.span_count(),
            turns: rail.turns,
            face_count: 1,
        })))
    }

    fn split_kinked_faces(&mut self, sheet: &SheetHandle) -> Result<SheetHandle, KernelError> {
        self.operations += 1;
        match self.sheet(sheet)?.clone() {
            MockSheet::Swept(mut s) => {
                s.face_count = s.spans_per_period * (s.turns.ceil() as usize).max(1);
                Ok(self.store_sheet(MockSheet::Swept(s)))
            }
            MockSheet::Disk(_) => Err(KernelError::DegenerateInput {
                reason: "planar disk has no kinked faces to split".to_string(),
            }),
        }
    }

    fn explode_faces(&mut self, sheet: &SheetHandle) -> Result<Vec<SheetHandle>, KernelError> {
        self.operations += 1;
        match self.sheet(sheet)?.clone() {
            MockSheet::Swept(s) => {
                let mut pieces = Vec::with_capacity(s.face_count);
                for _ in 0..s.face_count {
                    let mut piece = s.clone();
                    piece.face_count = 1;
                    pieces.push(self.store_sheet(MockSheet::Swept(piece)));
                }
                Ok(pieces)
            }
            MockSheet::Disk(d) => Ok(vec![self.store_sheet(MockSheet::Disk(d))]),
        }
    }

    fn join_sheets(
        &mut self,
        sheets: &[SheetHandle],
        tolerance: f64,
    ) -> Result<Vec<SheetHandle>, KernelError> {
        self.operations += 1;
        if tolerance <= 0.0 {
            return Err(KernelError::DegenerateInput {
                reason: "join tolerance must be positive".to_string(),
            });
        }
        if sheets.is_empty() {
            return Ok(Vec::new());
        }
        let mut merged: Option<SweptSheet> = None;
        for h in sheets {
            match self.sheet(h)? {
                MockSheet::Swept(s) => match &mut merged {
                    None => merged = Some(s.clone()),
                    Some(m) => {
                        m.axial_min = m.axial_min.min(s.axial_min);
                        m.axial_max = m.axial_max.max(s.axial_max);
                        m.radial_min = m.radial_min.min(s.radial_min);
                        m.radial_max = m.radial_max.max(s.radial_max);
                        m.face_count += s.face_count;
                    }
                },
                MockSheet::Disk(_) => {
                    return Err(KernelError::DegenerateInput {
                        reason: "join expects swept sheet pieces".to_string(),
                    })
                }
            }
        }
        match merged {
            Some(m) => Ok(vec![self.store_sheet(MockSheet::Swept(m))]),
            None => Ok(Vec::new()),
        }
    }

    fn planar_disk(&mut self, disk: &Disk, tolerance: f64) -> Result<SheetHandle, KernelError> {
        self.operations += 1;
        if disk.radius <= 0.0 || tolerance <= 0.0 {
            return Err(KernelError::DegenerateInput {
                reason: "disk radius and tolerance must be positive".to_string(),
            });
        }
        if vec3::norm(disk.normal) < 1e-12 {
            return Err(KernelError::DegenerateInput {
                reason: "disk normal has zero length".to_string(),
            });
        }
        Ok(self.store_sheet(MockSheet::Disk(DiskSheet {
            center: disk.center,
            radius: disk.radius,
        })))
    }

    fn solidify(
        &mut self,
        sheets: &[SheetHandle],
        tolerance: f64,
    ) -> Result<Vec<SolidHandle>, KernelError> {
        self.operations += 1;
        if tolerance <= 0.0 {
            return Err(KernelError::DegenerateInput {
                reason: "solidify tolerance must be positive".to_string(),
            });
        }

        let mut swept: Vec<SweptSheet> = Vec::new();
        let mut disks: Vec<DiskSheet> = Vec::new();
        for h in sheets {
            match self.sheet(h)? {
                MockSheet::Swept(s) => swept.push(s.clone()),
                MockSheet::Disk(d) => disks.push(d.clone()),
            }
        }
        // A swept ribbon needs two caps to bound a volume.
        if swept.is_empty() || disks.len() < 2 {
            return Ok(Vec::new());
        }

        let axis = swept[0].axis;
        let mut cap_lo = f64::MAX;
        let mut cap_hi = f64::MIN;
        for d in &disks {
            let x = axis.axial_coord(d.center);
            cap_lo = cap_lo.min(x);
            cap_hi = cap_hi.max(x);
        }
        if cap_hi <= cap_lo {
            return Ok(Vec::new());
        }

        // Caps must reach down to the ribbon's inner edge to seal it.
        let inner = swept
            .iter()
            .fold(f64::MAX, |r, s| r.min(s.radial_min));
        if disks.iter().any(|d| d.radius < inner) {
            return Ok(Vec::new());
        }

        let radius = swept
            .iter()
            .fold(0.0_f64, |r, s| r.max(s.radial_max));
        let faces: usize = swept.iter().map(|s| s.face_count).sum::<usize>() + disks.len();

        let outline = vec![
            (cap_lo, 0.0),
            (cap_lo, radius),
            (cap_hi, radius),
            (cap_hi, 0.0),
        ];
        Ok(vec![self.store_solid(MockSolid {
            axis,
            geom: SolidGeom::Outline(outline),
            face_count: faces,
        })])
    }

    fn revolve_outline(
        &mut self,
        outline: &Polyline3,
        axis: &Axis3,
    ) -> Result<SolidHandle, KernelError> {
        self.operations += 1;
        let mut pts: Vec<(f64, f64)> = outline
            .points
            .iter()
            .map(|&p| (axis.axial_coord(p), axis.radial_distance(p)))
            .collect();
        // Drop an explicit closing point; closure is implicit.
        if pts.len() > 1 {
            let first = pts[0];
            let last = pts[pts.len() - 1];
            if (first.0 - last.0).abs() < 1e-12 && (first.1 - last.1).abs() < 1e-12 {
                pts.pop();
            }
        }
        if pts.len() < 3 {
            return Err(KernelError::DegenerateInput {
                reason: "revolve outline needs at least three distinct points".to_string(),
            });
        }
        let (lo, hi) = pts
            .iter()
            .fold((f64::MAX, f64::MIN), |(lo, hi), &(x, _)| {
                (lo.min(x), hi.max(x))
            });
        if hi - lo < 1e-12 {
            return Err(KernelError::DegenerateInput {
                reason: "revolve outline has no axial extent".to_string(),
            });
        }
        let face_count = pts.len();
        Ok(self.store_solid(MockSolid {
            axis: *axis,
            geom: SolidGeom::Outline(pts),
            face_count,
        }))
    }

    fn boolean_intersect(
        &mut self,
        a: &SolidHandle,
        b: &SolidHandle,
        tolerance: f64,
    ) -> Result<Vec<SolidHandle>, KernelError> {
        self.operations += 1;
        if tolerance <= 0.0 {
            return Err(KernelError::DegenerateInput {
                reason: "boolean tolerance must be positive".to_string(),
            });
        }
        let sa = self.solid(a)?.clone();
        let sb = self.solid(b)?.clone();

        let (a0, a1) = sa.geom.axial_range();
        let (b0, b1) = sb.geom.axial_range();
        let x0 = a0.max(b0);
        let x1 = a1.min(b1);
        if x1 <= x0 {
            return Ok(Vec::new());
        }

        let dx = (x1 - x0) / STATIONS as f64;
        let mut intervals = Vec::with_capacity(STATIONS);
        let mut any = false;
        for i in 0..STATIONS {
            let x = x0 + (i as f64 + 0.5) * dx;
            let cut = intersect_interval_sets(&sa.geom.intervals_at(x), &sb.geom.intervals_at(x));
            any |= !cut.is_empty();
            intervals.push(cut);
        }
        if !any {
            return Ok(Vec::new());
        }

        Ok(vec![self.store_solid(MockSolid {
            axis: sa.axis,
            geom: SolidGeom::Sampled { x0, x1, intervals },
            face_count: sa.face_count + 1,
        })])
    }

    fn translate_solid(
        &mut self,
        solid: &SolidHandle,
        offset: [f64; 3],
    ) -> Result<SolidHandle, KernelError> {
        self.operations += 1;
        let s = self.solid(solid)?.clone();
        let d = s.axis.unit_direction();
        let along = vec3::dot(offset, d);
        let residual = vec3::norm(vec3::sub(offset, vec3::scale(d, along)));
        if residual > 1e-9 * (1.0 + along.abs()) {
            return Err(KernelError::NotSupported {
                operation: "translate_solid off the revolution axis".to_string(),
            });
        }
        Ok(self.store_solid(MockSolid {
            axis: s.axis,
            geom: s.geom.translated(along),
            face_count: s.face_count,
        }))
    }
}

impl KernelIntrospect for MockKernel {
    fn sheet_face_count(&self, sheet: &SheetHandle) -> usize {
        match self.sheets.get(&sheet.id()) {
            Some(MockSheet::Swept(s)) => s.face_count,
            Some(MockSheet::Disk(_)) => 1,
            None => 0,
        }
    }

    fn solid_properties(&self, solid: &SolidHandle) -> Result<SolidProperties, KernelError> {
        let s = self.solid(solid)?;
        let (x0, x1) = s.geom.axial_range();
        Ok(SolidProperties {
            volume: s.geom.volume(),
            bounding_box: revolution_bbox(&s.axis, x0, x1, s.geom.max_radius()),
            face_count: s.face_count,
            is_closed: true,
        })
    }
}
