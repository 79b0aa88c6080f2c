use crate::types::*;
use thread_types::{Axis3, Disk, Helix, Polyline3, ProfilePath};

/// Core geometry kernel trait: every heavy geometric operation the thread
/// pipeline orchestrates. Implemented by TruckKernel (wraps the truck B-rep
/// stack) and MockKernel (deterministic axisymmetric test double).
///
/// A backend that cannot express an operation reports
/// `KernelError::NotSupported` instead of approximating.
pub trait Kernel {
    /// Revolve a profile path about an axis while advancing it along a
    /// helical rail, producing a single open swept sheet.
    fn rail_revolve(
        &mut self,
        profile: &ProfilePath,
        rail: &Helix,
        axis: &Axis3,
    ) -> Result<SheetHandle, KernelError>;

    /// Split any face containing a tangency discontinuity into smooth
    /// sub-faces so downstream booleans are reliable.
    fn split_kinked_faces(&mut self, sheet: &SheetHandle) -> Result<SheetHandle, KernelError>;

    /// Decompose a sheet into single-face sheet bodies.
    fn explode_faces(&mut self, sheet: &SheetHandle) -> Result<Vec<SheetHandle>, KernelError>;

    /// Re-join sheet bodies into as few shells as possible at the given
    /// tolerance. An empty result means the join produced nothing usable.
    fn join_sheets(
        &mut self,
        sheets: &[SheetHandle],
        tolerance: f64,
    ) -> Result<Vec<SheetHandle>, KernelError>;

    /// Create a planar circular disk sheet.
    fn planar_disk(&mut self, disk: &Disk, tolerance: f64) -> Result<SheetHandle, KernelError>;

    /// Cap and union a collection of sheets into closed solids. Zero
    /// results means the collection did not bound a volume.
    fn solidify(
        &mut self,
        sheets: &[SheetHandle],
        tolerance: f64,
    ) -> Result<Vec<SolidHandle>, KernelError>;

    /// Revolve a closed outline in a plane containing `axis` one full turn
    /// about it, producing the solid of revolution of the enclosed region.
    fn revolve_outline(
        &mut self,
        outline: &Polyline3,
        axis: &Axis3,
    ) -> Result<SolidHandle, KernelError>;

    /// Boolean intersection of two solids.
    fn boolean_intersect(
        &mut self,
        a: &SolidHandle,
        b: &SolidHandle,
        tolerance: f64,
    ) -> Result<Vec<SolidHandle>, KernelError>;

    /// Rigid translation of a solid.
    fn translate_solid(
        &mut self,
        solid: &SolidHandle,
        offset: [f64; 3],
    ) -> Result<SolidHandle, KernelError>;
}

/// Read-only queries on kernel bodies.
pub trait KernelIntrospect {
    /// Number of faces in a sheet body; 0 for unknown handles.
    fn sheet_face_count(&self, sheet: &SheetHandle) -> usize;

    /// Volume, bounding box, face count and closedness of a solid.
    fn solid_properties(&self, solid: &SolidHandle) -> Result<SolidProperties, KernelError>;
}
