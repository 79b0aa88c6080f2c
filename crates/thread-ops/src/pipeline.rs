//! The thread generation pipeline.
//!
//! parameters → derived geometry → {profile curve, helix rail} → swept and
//! repaired shell → capped solid → optional chamfer → finished solid.
//! Synchronous and single-threaded: each stage's output is the next stage's
//! sole input, the one modeling tolerance threads through every stage, and
//! every intermediate body is owned by this invocation alone.

use thread_types::{Axis3, ThreadParameters};

use crate::assemble::execute_cap;
use crate::chamfer::execute_chamfer;
use crate::helix::build_helix;
use crate::kernel_ext::KernelBundle;
use crate::profile::build_profile;
use crate::settings::ProfileGeometry;
use crate::sweep::execute_sweep;
use crate::types::{GeneratedThread, ThreadError};

/// Generate one screw-thread solid.
///
/// Validation happens before any kernel call; afterwards the pipeline runs
/// to completion or to the first fatal construction error. On success the
/// solid lies along the global +X axis with its start face at axial
/// coordinate 0; placing it into document coordinates is the caller's job.
pub fn generate_thread_solid(
    kb: &mut dyn KernelBundle,
    params: &ThreadParameters,
) -> Result<GeneratedThread, ThreadError> {
    let geometry = ProfileGeometry::derive(params)?;
    let axis = Axis3::x();

    let profile = build_profile(params.variant, [0.0; 3], &geometry);
    let rail = build_helix(axis, geometry.radius(), geometry.pitch(), geometry.turn_count());

    let shell = execute_sweep(kb, &profile, &rail, &axis, geometry.tolerance())?;
    let capped = execute_cap(kb, &shell, &geometry, &axis)?;
    let solid = execute_chamfer(kb, &capped, &geometry, &axis, params.chamfer)?;

    let properties = kb.as_introspect().solid_properties(&solid)?;
    Ok(GeneratedThread {
        solid,
        geometry,
        properties,
    })
}
