//! Surface sweep and repair.
//!
//! Rail-revolves the profile along the helix, then normalizes the result:
//! faces with tangency kinks are split into smooth sub-faces, the shell is
//! exploded into single-face bodies and re-joined at the modeling
//! tolerance. Rail-revolved surfaces of kinked cross-sections (the female
//! profile especially) come out of kernels with face parameterization that
//! defeats direct boolean use; explode+rejoin normalizes the topology
//! before capping.

use kernel_bridge::SheetHandle;
use thread_types::{Axis3, Helix, ProfilePath};

use crate::kernel_ext::KernelBundle;
use crate::types::{Stage, ThreadError};

/// Sweep the profile along the rail and repair the resulting shell.
///
/// Returns the repaired shell pieces; several pieces are legal and all of
/// them feed the capping stage. Zero faces anywhere is fatal — there is no
/// partial-thread fallback.
pub fn execute_sweep(
    kb: &mut dyn KernelBundle,
    profile: &ProfilePath,
    rail: &Helix,
    axis: &Axis3,
    tolerance: f64,
) -> Result<Vec<SheetHandle>, ThreadError> {
    let raw = kb.rail_revolve(profile, rail, axis)?;
    let split = kb.split_kinked_faces(&raw)?;

    let pieces = kb.explode_faces(&split)?;
    if pieces.is_empty() {
        return Err(ThreadError::EmptyResult { stage: Stage::Sweep });
    }

    let joined = kb.join_sheets(&pieces, tolerance)?;
    if joined.is_empty() {
        return Err(ThreadError::EmptyResult {
            stage: Stage::Repair,
        });
    }
    Ok(joined)
}
