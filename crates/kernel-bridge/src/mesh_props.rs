//! Mass properties for truck solids via triangulation.
//!
//! Volume is the divergence-theorem sum over the triangle soup; the bounding
//! box comes from the mesh positions. Accuracy follows the tessellation
//! tolerance.

use truck_meshalgo::prelude::*;
use truck_meshalgo::tessellation::{MeshableShape, MeshedShape};

use crate::types::{KernelError, SolidProperties};

type TruckSolid = truck_modeling::Solid;

pub fn solid_properties(
    solid: &TruckSolid,
    tolerance: f64,
) -> Result<SolidProperties, KernelError> {
    let meshed = solid.triangulation(tolerance);
    let mesh = meshed.to_polygon();

    let positions = mesh.positions();
    let tri_faces = mesh.tri_faces();
    if positions.is_empty() || tri_faces.is_empty() {
        return Err(KernelError::Other {
            message: "tessellation produced no triangles".to_string(),
        });
    }

    let mut volume = 0.0;
    for tri in tri_faces {
        let idx: Vec<usize> = tri.iter().map(|v| v.pos).collect();
        let p0 = positions[idx[0]];
        let p1 = positions[idx[1]];
        let p2 = positions[idx[2]];
        let cx = p1[1] * p2[2] - p1[2] * p2[1];
        let cy = p1[2] * p2[0] - p1[0] * p2[2];
        let cz = p1[0] * p2[1] - p1[1] * p2[0];
        volume += (p0[0] * cx + p0[1] * cy + p0[2] * cz) / 6.0;
    }

    let mut bbox = [f64::MAX, f64::MAX, f64::MAX, f64::MIN, f64::MIN, f64::MIN];
    for p in positions {
        for i in 0..3 {
            bbox[i] = bbox[i].min(p[i]);
            bbox[i + 3] = bbox[i + 3].max(p[i]);
        }
    }

    let face_count = solid
        .boundaries()
        .iter()
        .map(|shell| shell.face_iter().count())
        .sum();

    Ok(SolidProperties {
        volume: volume.abs(),
        bounding_box: bbox,
        face_count,
        is_closed: true,
    })
}
