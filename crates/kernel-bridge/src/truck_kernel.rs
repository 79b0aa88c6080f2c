//! TruckKernel — geometry kernel backend wrapping the truck B-rep stack.
//!
//! Covers the operation subset truck can express: planar disks, full-turn
//! revolved outlines, boolean intersection, rigid translation, and mass
//! properties. truck has no helical rail sweep and no face-repair toolkit,
//! so `rail_revolve` and the split/explode/join/solidify family answer
//! `NotSupported` rather than approximating.

use std::collections::HashMap;

use truck_modeling::builder;
use truck_modeling::topology::{Face, Solid};
use truck_modeling::Vector3;

use crate::mesh_props;
use crate::traits::{Kernel, KernelIntrospect};
use crate::truck_shapes;
use crate::types::*;
use thread_types::{Axis3, Disk, Helix, Polyline3, ProfilePath};

/// Tessellation tolerance for mass-property queries.
const MESH_TOLERANCE: f64 = 0.01;

/// Geometry kernel backed by the truck B-rep library.
pub struct TruckKernel {
    next_handle: u64,
    sheets: HashMap<u64, Face>,
    solids: HashMap<u64, Solid>,
}

impl TruckKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            sheets: HashMap::new(),
            solids: HashMap::new(),
        }
    }

    fn alloc(&mut self) -> u64 {
        let id = self.next_handle;
        self.next_handle += 1;
        id
    }

    pub(crate) fn store_solid(&mut self, solid: Solid) -> SolidHandle {
        let id = self.alloc();
        self.solids.insert(id, solid);
        SolidHandle(id)
    }

    fn store_sheet(&mut self, face: Face) -> SheetHandle {
        let id = self.alloc();
        self.sheets.insert(id, face);
        SheetHandle(id)
    }

    pub(crate) fn get_solid(&self, handle: &SolidHandle) -> Option<&Solid> {
        self.solids.get(&handle.id())
    }
}

impl Default for TruckKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for TruckKernel {
    fn rail_revolve(
        &mut self,
        _profile: &ProfilePath,
        _rail: &Helix,
        _axis: &Axis3,
    ) -> Result<SheetHandle, KernelError> {
        Err(KernelError::NotSupported {
            operation: "rail_revolve (truck has no helical sweep)".to_string(),
        })
    }

    fn split_kinked_faces(&mut self, _sheet: &SheetHandle) -> Result<SheetHandle, KernelError> {
        Err(KernelError::NotSupported {
            operation: "split_kinked_faces".to_string(),
        })
    }

    fn explode_faces(&mut self, _sheet: &SheetHandle) -> Result<Vec<SheetHandle>, KernelError> {
        Err(KernelError::NotSupported {
            operation: "explode_faces".to_string(),
        })
    }

    fn join_sheets(
        &mut self,
        _sheets: &[SheetHandle],
        _tolerance: f64,
    ) -> Result<Vec<SheetHandle>, KernelError> {
        Err(KernelError::NotSupported {
            operation: "join_sheets".to_string(),
        })
    }

    fn planar_disk(&mut self, disk: &Disk, _tolerance: f64) -> Result<SheetHandle, KernelError> {
        let face = truck_shapes::disk_face(disk.center, disk.normal, disk.radius)?;
        Ok(self.store_sheet(face))
    }

    fn solidify(
        &mut self,
        _sheets: &[SheetHandle],
        _tolerance: f64,
    ) -> Result<Vec<SolidHandle>, KernelError> {
        Err(KernelError::NotSupported {
            operation: "solidify".to_string(),
        })
    }

    fn revolve_outline(
        &mut self,
        outline: &Polyline3,
        axis: &Axis3,
    ) -> Result<SolidHandle, KernelError> {
        // Drop an explicit closing point; closed_wire closes implicitly.
        let mut points = outline.points.clone();
        if points.len() > 1 && outline.is_closed(1e-12) {
            points.pop();
        }
        let wire = truck_shapes::closed_wire(&points)?;
        let face = truck_shapes::planar_face(wire)?;
        let solid = truck_shapes::revolve_full_turn(&face, axis.origin, axis.unit_direction());
        Ok(self.store_solid(solid))
    }

    fn boolean_intersect(
        &mut self,
        a: &SolidHandle,
        b: &SolidHandle,
        tolerance: f64,
    ) -> Result<Vec<SolidHandle>, KernelError> {
        let solid_a = self
            .solids
            .get(&a.id())
            .ok_or(KernelError::BodyNotFound { id: a.id() })?
            .clone();
        let solid_b = self
            .solids
            .get(&b.id())
            .ok_or(KernelError::BodyNotFound { id: b.id() })?
            .clone();

        let result = truck_shapeops::and(&solid_a, &solid_b, tolerance).ok_or_else(|| {
            KernelError::BooleanFailed {
                reason: "truck and() returned None".to_string(),
            }
        })?;
        Ok(vec![self.store_solid(result)])
    }

    fn translate_solid(
        &mut self,
        solid: &SolidHandle,
        offset: [f64; 3],
    ) -> Result<SolidHandle, KernelError> {
        let source = self
            .solids
            .get(&solid.id())
            .ok_or(KernelError::BodyNotFound { id: solid.id() })?;
        let moved = builder::translated(source, Vector3::new(offset[0], offset[1], offset[2]));
        Ok(self.store_solid(moved))
    }
}

impl KernelIntrospect for TruckKernel {
    fn sheet_face_count(&self, sheet: &SheetHandle) -> usize {
        usize::from(self.sheets.contains_key(&sheet.id()))
    }

    fn solid_properties(&self, solid: &SolidHandle) -> Result<SolidProperties, KernelError> {
        let truck_solid = self
            .solids
            .get(&solid.id())
            .ok_or(KernelError::BodyNotFound { id: solid.id() })?;
        mesh_props::solid_properties(truck_solid, MESH_TOLERANCE)
    }
}
