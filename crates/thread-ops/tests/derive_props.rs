//! Property-based tests for derived thread geometry using the `proptest` crate.

use proptest::prelude::*;

use thread_ops::{build_profile, ProfileGeometry};
use thread_types::{ProfileVariant, ThreadParameters};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Pitch range covering fine instrument threads up to coarse lead screws.
fn arb_pitch() -> impl Strategy<Value = f64> {
    0.25f64..25.0
}

/// Length as a multiple of pitch, so the length >= pitch precondition holds.
fn arb_length_factor() -> impl Strategy<Value = f64> {
    1.0f64..80.0
}

fn arb_diameter() -> impl Strategy<Value = f64> {
    1.0f64..500.0
}

/// Half-angle away from the degenerate ends of (0, 90).
fn arb_angle() -> impl Strategy<Value = f64> {
    5.0f64..85.0
}

fn params(pitch: f64, diameter: f64, length_factor: f64, angle: f64) -> ThreadParameters {
    ThreadParameters::new(pitch, diameter, pitch * length_factor, 1e-4)
        .with_thread_angle(angle)
}

// ---------------------------------------------------------------------------
// 1. Height is positive and monotonic in pitch at fixed angle
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn height_positive_and_monotonic_in_pitch(
        pitch in arb_pitch(),
        diameter in arb_diameter(),
        length_factor in arb_length_factor(),
        angle in arb_angle(),
    ) {
        let coarse = ProfileGeometry::derive(&params(pitch, diameter, length_factor, angle))
            .unwrap();
        let fine = ProfileGeometry::derive(&params(pitch / 2.0, diameter, length_factor, angle))
            .unwrap();
        prop_assert!(coarse.height() > 0.0);
        prop_assert!(fine.height() < coarse.height(),
            "halving pitch must lower height: {} !< {}", fine.height(), coarse.height());
    }
}

// ---------------------------------------------------------------------------
// 2. Turn count always exceeds length/pitch by the whole-turn margin
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn turn_count_carries_margin(
        pitch in arb_pitch(),
        diameter in arb_diameter(),
        length_factor in arb_length_factor(),
        angle in arb_angle(),
    ) {
        let p = params(pitch, diameter, length_factor, angle);
        let g = ProfileGeometry::derive(&p).unwrap();
        prop_assert!(g.turn_count() >= p.length / p.pitch + 4.0 - 1e-9);
    }
}

// ---------------------------------------------------------------------------
// 3. Both profile variants are continuous, open paths one pitch long
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn profiles_are_continuous_open_paths(
        pitch in arb_pitch(),
        diameter in arb_diameter(),
        length_factor in arb_length_factor(),
        angle in arb_angle(),
    ) {
        let p = params(pitch, diameter, length_factor, angle);
        let g = ProfileGeometry::derive(&p).unwrap();
        for variant in [ProfileVariant::Male, ProfileVariant::Female] {
            let path = build_profile(variant, [0.0; 3], &g);
            prop_assert!(path.is_continuous(p.tolerance));
            prop_assert!(!path.is_closed(p.tolerance));
            let span = path.segments.last().unwrap().end()[0]
                - path.segments.first().unwrap().start()[0];
            prop_assert!((span - pitch).abs() < 1e-9 * pitch.max(1.0));
        }
    }
}

// ---------------------------------------------------------------------------
// 4. Derivation is a pure function: same input, same output
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn derivation_is_deterministic(
        pitch in arb_pitch(),
        diameter in arb_diameter(),
        length_factor in arb_length_factor(),
        angle in arb_angle(),
    ) {
        let p = params(pitch, diameter, length_factor, angle);
        let a = ProfileGeometry::derive(&p).unwrap();
        let b = ProfileGeometry::derive(&p).unwrap();
        prop_assert_eq!(a, b);
    }
}
