//! End chamfering.
//!
//! Trims one or both thread ends with a revolved conical cutter. The cutter
//! outline starts at the apex Pc1 with two flank lines rising at the
//! chamfer angle, continues axially outward at a radial ceiling above the
//! crest, and closes through the axis — its full-turn revolution is the
//! solid region kept by the boolean intersection, so the cut leaves a 45°
//! cone on the selected end.
//!
//! Mode is fixed for the whole run: None passes through, Left and Right cut
//! once (Right with the cutter translated to the far end), Both cuts
//! sequentially.

use kernel_bridge::SolidHandle;
use thread_types::{vec3, Axis3, ChamferMode, Polyline3};

use crate::kernel_ext::KernelBundle;
use crate::settings::ProfileGeometry;
use crate::types::{expect_single, Stage, ThreadError};

/// Closed cutter outline in the axial/radial plane of the reference frame.
///
/// Symmetric about the apex so the same body serves both ends; the axial
/// reach of one pitch·turn_count per side covers any thread the pipeline
/// produces.
pub fn cutter_outline(geometry: &ProfileGeometry) -> Polyline3 {
    let apex = geometry.pc1();
    let ceiling = geometry.radius() + geometry.pitch();
    // Flank run for the given chamfer angle; 45° makes it equal the rise.
    let run = (ceiling - apex[2]) / geometry.chamfer_angle_rad().tan();
    let reach = geometry.pitch() * geometry.turn_count();

    Polyline3::new(vec![
        [apex[0] - reach, 0.0, 0.0],
        [apex[0] - reach, 0.0, ceiling],
        [apex[0] - run, 0.0, ceiling],
        apex,
        [apex[0] + run, 0.0, ceiling],
        [apex[0] + reach, 0.0, ceiling],
        [apex[0] + reach, 0.0, 0.0],
    ])
}

/// Axial translation that brings the cutter apex to the far end of the
/// assembled (origin-shifted) solid.
pub fn far_end_offset(geometry: &ProfileGeometry) -> f64 {
    geometry.height() * (geometry.turn_count() - 1.0) - geometry.pitch()
}

/// Trim the selected thread ends. `ChamferMode::None` passes the solid
/// through untouched.
pub fn execute_chamfer(
    kb: &mut dyn KernelBundle,
    solid: &SolidHandle,
    geometry: &ProfileGeometry,
    axis: &Axis3,
    mode: ChamferMode,
) -> Result<SolidHandle, ThreadError> {
    if mode == ChamferMode::None {
        return Ok(solid.clone());
    }

    let cutter = kb.revolve_outline(&cutter_outline(geometry), axis)?;
    let far_shift = vec3::scale(axis.unit_direction(), far_end_offset(geometry));
    let tolerance = geometry.tolerance();

    match mode {
        ChamferMode::None => Ok(solid.clone()),
        ChamferMode::Left => intersect_once(kb, solid, &cutter, tolerance),
        ChamferMode::Right => {
            let far_cutter = kb.translate_solid(&cutter, far_shift)?;
            intersect_once(kb, solid, &far_cutter, tolerance)
        }
        ChamferMode::Both => {
            let near = intersect_once(kb, solid, &cutter, tolerance)?;
            let far_cutter = kb.translate_solid(&cutter, far_shift)?;
            intersect_once(kb, &near, &far_cutter, tolerance)
        }
    }
}

fn intersect_once(
    kb: &mut dyn KernelBundle,
    solid: &SolidHandle,
    cutter: &SolidHandle,
    tolerance: f64,
) -> Result<SolidHandle, ThreadError> {
    let results = kb.boolean_intersect(solid, cutter, tolerance)?;
    expect_single(results, Stage::Chamfer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use thread_types::ThreadParameters;

    fn geometry() -> ProfileGeometry {
        ProfileGeometry::derive(&ThreadParameters::new(6.0, 64.0, 200.0, 1e-4)).unwrap()
    }

    #[test]
    fn test_cutter_outline_apex_and_flanks() {
        let g = geometry();
        let outline = cutter_outline(&g);
        let pts = &outline.points;
        assert_eq!(pts[3], g.pc1());

        // Flanks rise at 45°: equal axial run and radial rise.
        let run = pts[4][0] - pts[3][0];
        let rise = pts[4][2] - pts[3][2];
        assert!((run - rise).abs() < 1e-12);

        // Symmetric about the apex plane.
        assert!((pts[2][0] + pts[4][0]).abs() < 1e-12);
        assert!((pts[0][0] + pts[6][0]).abs() < 1e-12);
    }

    #[test]
    fn test_cutter_reach_covers_assembled_solid() {
        let g = geometry();
        let outline = cutter_outline(&g);
        let reach = outline.points.last().unwrap()[0];
        let solid_span = g.height() * (g.turn_count() - 1.0) - g.pitch();
        assert!(reach > solid_span);
    }

    #[test]
    fn test_cutter_ceiling_clears_crest_bulge() {
        let g = geometry();
        let outline = cutter_outline(&g);
        let ceiling = outline.points[1][2];
        assert!(ceiling > g.p3e()[2]);
    }

    #[test]
    fn test_far_end_offset_matches_assembled_extent() {
        let g = geometry();
        let expected = g.height() * (g.turn_count() - 1.0) - g.pitch();
        assert!((far_end_offset(&g) - expected).abs() < 1e-12);
    }
}
