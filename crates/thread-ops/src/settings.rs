//! Derived thread geometry.
//!
//! Pure function of the input parameters: validates them, then computes the
//! quantities every later stage reads — thread height, turn count with the
//! capping margin, and the named profile key points of the ISO metric
//! cross-section (https://en.wikipedia.org/wiki/ISO_metric_screw_thread).
//!
//! Points live in the reference frame of the pipeline: screw axis along
//! global +X, radial coordinate on +Z, so a point is [axial, 0, radial].

use serde::{Deserialize, Serialize};
use thread_types::ThreadParameters;

use crate::types::ThreadError;

/// Extra whole turns beyond length/pitch, so the sweep's lead-in transient
/// and run-out can be cut away by the capping planes.
const TURN_MARGIN: f64 = 4.0;

/// Chamfer flank angle in degrees.
const CHAMFER_ANGLE_DEG: f64 = 45.0;

fn to_radians(angle: f64) -> f64 {
    std::f64::consts::PI * angle / 180.0
}

/// All derived geometric quantities for one thread generation run.
///
/// Recomputed from scratch whenever any input changes; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileGeometry {
    params: ThreadParameters,
    height: f64,
    turn_count: f64,
    radius: f64,
    f1: f64,
    f2: f64,
    f3: f64,
    f4: f64,
}

impl ProfileGeometry {
    /// Validate parameters and compute the derived quantities.
    ///
    /// Validation runs before any kernel interaction: non-positive pitch,
    /// diameter or tolerance, a length shorter than one pitch, or a thread
    /// angle outside (0, 90) degrees are rejected here.
    pub fn derive(params: &ThreadParameters) -> Result<Self, ThreadError> {
        validate(params)?;

        let radius = params.major_diameter / 2.0;
        let height = params.pitch / (2.0 * to_radians(params.thread_angle_deg).tan());
        let turn_count = params.length / params.pitch + TURN_MARGIN;

        let f1 = radius - height * 5.0 / 8.0;
        let f2 = f1 - params.pitch * params.pitch / (16.0 * height);
        let f3 = radius + params.pitch * params.pitch / (32.0 * height);
        let f4 = f1 - height / 8.0;

        Ok(Self {
            params: *params,
            height,
            turn_count,
            radius,
            f1,
            f2,
            f3,
            f4,
        })
    }

    pub fn parameters(&self) -> &ThreadParameters {
        &self.params
    }

    pub fn pitch(&self) -> f64 {
        self.params.pitch
    }

    pub fn tolerance(&self) -> f64 {
        self.params.tolerance
    }

    /// Radial depth of one thread flank from the pitch/angle relation
    /// height = pitch / (2·tan(half-angle)).
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Helical revolutions swept, margin included.
    pub fn turn_count(&self) -> f64 {
        self.turn_count
    }

    /// Major radius (half the major diameter).
    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn chamfer_angle_rad(&self) -> f64 {
        to_radians(CHAMFER_ANGLE_DEG)
    }

    /// Minor diameter: major minus twice the 5/8-height root depth.
    pub fn minor_diameter(&self) -> f64 {
        self.params.major_diameter - 2.0 * (5.0 / 8.0) * self.height
    }

    /// Pitch diameter: major minus twice the 3/8-height flank midpoint.
    pub fn pitch_diameter(&self) -> f64 {
        self.params.major_diameter - 2.0 * (3.0 / 8.0) * self.height
    }

    /// Start of the thread root.
    pub fn p1(&self) -> [f64; 3] {
        [0.0, 0.0, self.f1]
    }

    /// Interior point of the root arc.
    pub fn p1e(&self) -> [f64; 3] {
        [self.params.pitch / 8.0, 0.0, self.f2]
    }

    /// End of the root arc.
    pub fn p2(&self) -> [f64; 3] {
        [self.params.pitch / 4.0, 0.0, self.f1]
    }

    /// Start of the crest flat.
    pub fn p3(&self) -> [f64; 3] {
        [9.0 * self.params.pitch / 16.0, 0.0, self.radius]
    }

    /// Interior point of the crest arc (female profile).
    pub fn p3e(&self) -> [f64; 3] {
        [5.0 * self.params.pitch / 8.0, 0.0, self.f3]
    }

    /// End of the crest flat.
    pub fn p4(&self) -> [f64; 3] {
        [11.0 * self.params.pitch / 16.0, 0.0, self.radius]
    }

    /// Root of the next turn, one pitch along the axis from P1.
    pub fn p5(&self) -> [f64; 3] {
        [self.params.pitch, 0.0, self.f1]
    }

    /// Chamfer cutter apex: on the start plane, one eighth of a height
    /// below the root radius.
    pub fn pc1(&self) -> [f64; 3] {
        [0.0, 0.0, self.f4]
    }
}

fn validate(params: &ThreadParameters) -> Result<(), ThreadError> {
    let invalid = |reason: &str| {
        Err(ThreadError::InvalidParameter {
            reason: reason.to_string(),
        })
    };
    if !(params.pitch > 0.0) {
        return invalid("pitch must be positive");
    }
    if !(params.major_diameter > 0.0) {
        return invalid("diameter must be positive");
    }
    if !(params.tolerance > 0.0) {
        return invalid("tolerance must be positive");
    }
    if !(params.length >= params.pitch) {
        return invalid("length must span at least one pitch");
    }
    if !(params.thread_angle_deg > 0.0 && params.thread_angle_deg < 90.0) {
        return invalid("thread angle must be between 0 and 90 degrees");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ProfileGeometry {
        ProfileGeometry::derive(&ThreadParameters::new(6.0, 64.0, 200.0, 1e-4)).unwrap()
    }

    #[test]
    fn test_height_matches_iso_relation() {
        let g = reference();
        // For the 30° half-angle, height = pitch * sqrt(3)/2.
        let expected = 6.0 * 3.0_f64.sqrt() / 2.0;
        assert!((g.height() - expected).abs() < 1e-12);
        assert!(g.height() > 0.0);
    }

    #[test]
    fn test_height_monotonic_in_pitch() {
        let coarse = ProfileGeometry::derive(&ThreadParameters::new(6.0, 64.0, 200.0, 1e-4))
            .unwrap();
        let fine =
            ProfileGeometry::derive(&ThreadParameters::new(2.0, 64.0, 200.0, 1e-4)).unwrap();
        assert!(fine.height() < coarse.height());
    }

    #[test]
    fn test_turn_count_includes_margin() {
        let g = reference();
        assert!((g.turn_count() - (200.0 / 6.0 + 4.0)).abs() < 1e-12);
    }

    #[test]
    fn test_turn_count_independent_of_diameter() {
        let narrow = reference();
        let wide =
            ProfileGeometry::derive(&ThreadParameters::new(6.0, 128.0, 200.0, 1e-4)).unwrap();
        assert_eq!(narrow.turn_count(), wide.turn_count());
        assert!((wide.radius() - 2.0 * narrow.radius()).abs() < 1e-12);
    }

    #[test]
    fn test_radial_offsets_ordering() {
        let g = reference();
        // Chamfer apex < root arc dip < root < crest < crest arc bulge.
        assert!(g.pc1()[2] < g.p1e()[2]);
        assert!(g.p1e()[2] < g.p1()[2]);
        assert!(g.p1()[2] < g.radius());
        assert!(g.radius() < g.p3e()[2]);
    }

    #[test]
    fn test_profile_period_is_one_pitch() {
        let g = reference();
        assert!((g.p5()[0] - g.p1()[0] - 6.0).abs() < 1e-12);
        assert_eq!(g.p5()[2], g.p1()[2]);
    }

    #[test]
    fn test_crest_flat_is_eighth_pitch() {
        let g = reference();
        assert!((g.p4()[0] - g.p3()[0] - 6.0 / 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_diameter_helpers() {
        let g = reference();
        assert!((g.minor_diameter() - (64.0 - 1.25 * g.height())).abs() < 1e-12);
        assert!((g.pitch_diameter() - (64.0 - 0.75 * g.height())).abs() < 1e-12);
        assert!(g.minor_diameter() < g.pitch_diameter());
        assert!(g.pitch_diameter() < 64.0);
    }

    #[test]
    fn test_rejects_bad_parameters() {
        let cases = [
            ThreadParameters::new(0.0, 64.0, 200.0, 1e-4),
            ThreadParameters::new(-1.0, 64.0, 200.0, 1e-4),
            ThreadParameters::new(6.0, 0.0, 200.0, 1e-4),
            ThreadParameters::new(6.0, 64.0, 5.0, 1e-4),
            ThreadParameters::new(6.0, 64.0, 200.0, 0.0),
            ThreadParameters::new(6.0, 64.0, 200.0, 1e-4).with_thread_angle(0.0),
            ThreadParameters::new(6.0, 64.0, 200.0, 1e-4).with_thread_angle(90.0),
            ThreadParameters::new(f64::NAN, 64.0, 200.0, 1e-4),
        ];
        for params in cases {
            assert!(matches!(
                ProfileGeometry::derive(&params),
                Err(ThreadError::InvalidParameter { .. })
            ));
        }
    }

    #[test]
    fn test_length_of_exactly_one_pitch_is_valid() {
        let params = ThreadParameters::new(6.0, 64.0, 6.0, 1e-4);
        assert!(ProfileGeometry::derive(&params).is_ok());
    }
}
