//! Shell capping and solid assembly.
//!
//! Closes the open helical shell with two planar disks — one past the
//! sweep's lead-in transient, one before the run-out — then solidifies the
//! collection and shifts the result back by one pitch so the usable thread
//! start sits at the nominal origin.

use kernel_bridge::{SheetHandle, SolidHandle};
use thread_types::{vec3, Axis3, Disk};

use crate::kernel_ext::KernelBundle;
use crate::settings::ProfileGeometry;
use crate::types::{expect_single, Stage, ThreadError};

/// Axial station of the start cap: one pitch in, past the lead-in.
pub fn start_cap_station(geometry: &ProfileGeometry) -> f64 {
    geometry.pitch()
}

/// Axial station of the end cap, before the run-out turns.
pub fn end_cap_station(geometry: &ProfileGeometry) -> f64 {
    geometry.height() * (geometry.turn_count() - 1.0)
}

/// Cap the repaired shell pieces into a single closed solid at the origin.
pub fn execute_cap(
    kb: &mut dyn KernelBundle,
    shell: &[SheetHandle],
    geometry: &ProfileGeometry,
    axis: &Axis3,
) -> Result<SolidHandle, ThreadError> {
    // Both disks share the negative axis normal so the union sees a
    // consistent orientation.
    let normal = vec3::scale(axis.unit_direction(), -1.0);
    let radius = geometry.radius();

    let start = Disk {
        center: axis.point_at(start_cap_station(geometry)),
        normal,
        radius,
    };
    let end = Disk {
        center: axis.point_at(end_cap_station(geometry)),
        normal,
        radius,
    };
    let cap1 = kb.planar_disk(&start, geometry.tolerance())?;
    let cap2 = kb.planar_disk(&end, geometry.tolerance())?;

    let mut sheets: Vec<SheetHandle> = shell.to_vec();
    sheets.push(cap1);
    sheets.push(cap2);

    let solids = kb.solidify(&sheets, geometry.tolerance())?;
    let solid = expect_single(solids, Stage::Cap)?;

    // Compensate for the lead-in margin baked into the turn count.
    let shift = vec3::scale(axis.unit_direction(), -geometry.pitch());
    Ok(kb.translate_solid(&solid, shift)?)
}
