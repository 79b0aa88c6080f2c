//! End-to-end pipeline scenarios on the mock kernel, checked through the
//! oracles.

use test_harness::{oracle, ThreadScenario};
use thread_types::{ChamferMode, ProfileVariant, ThreadParameters};

#[test]
fn reference_thread_is_a_closed_solid_at_the_origin() {
    let result = ThreadScenario::reference().run().unwrap();

    let closed = oracle::check_closed_solid(&result.properties);
    assert!(closed.passed, "{}", closed.detail);

    let g = &result.geometry;
    let expected_end = g.height() * (g.turn_count() - 1.0) - g.pitch();
    let extent = oracle::check_axial_extent(
        &result.properties,
        0,
        0.0,
        expected_end,
        g.pitch(),
    );
    assert!(extent.passed, "{}", extent.detail);
}

#[test]
fn chamfer_volume_ordering_holds() {
    let none = ThreadScenario::reference().run().unwrap().volume();
    let left = ThreadScenario::reference()
        .chamfer(ChamferMode::Left)
        .run()
        .unwrap()
        .volume();
    let right = ThreadScenario::reference()
        .chamfer(ChamferMode::Right)
        .run()
        .unwrap()
        .volume();
    let both = ThreadScenario::reference()
        .chamfer(ChamferMode::Both)
        .run()
        .unwrap()
        .volume();

    for (smaller, larger) in [(left, none), (right, none), (both, left), (both, right)] {
        let verdict = oracle::check_volume_below(smaller, larger);
        assert!(verdict.passed, "{}", verdict.detail);
    }
}

#[test]
fn identical_runs_are_deterministic() {
    let a = ThreadScenario::reference().run().unwrap();
    let b = ThreadScenario::reference().run().unwrap();
    let verdict = oracle::check_deterministic(&a.properties, &b.properties);
    assert!(verdict.passed, "{}", verdict.detail);
}

#[test]
fn doubled_diameter_doubles_radial_extent() {
    let narrow = ThreadScenario::reference().run().unwrap();
    let wide = ThreadScenario::reference().diameter(128.0).run().unwrap();

    assert_eq!(
        narrow.geometry.turn_count(),
        wide.geometry.turn_count(),
        "turn count is independent of diameter"
    );

    let narrow_radius = narrow.properties.extent(1) / 2.0;
    let wide_radius = wide.properties.extent(1) / 2.0;
    let ratio = wide_radius / narrow_radius;
    assert!((ratio - 2.0).abs() < 0.01, "radial ratio {}", ratio);
}

#[test]
fn both_variants_generate_with_and_without_chamfer() {
    for variant in [ProfileVariant::Male, ProfileVariant::Female] {
        for chamfer in [ChamferMode::None, ChamferMode::Both] {
            let result = ThreadScenario::reference()
                .variant(variant)
                .chamfer(chamfer)
                .run()
                .unwrap();
            let verdict = oracle::check_closed_solid(&result.properties);
            assert!(verdict.passed, "{:?}/{:?}: {}", variant, chamfer, verdict.detail);
        }
    }
}

#[test]
fn invalid_length_fails_without_kernel_work() {
    let scenario =
        ThreadScenario::with_params(ThreadParameters::new(6.0, 64.0, 2.0, 1e-4));
    let result = scenario.run();
    assert!(result.is_err());
}

#[test]
fn fine_pitch_thread_generates() {
    // A fine-pitch thread on the same diameter: more turns, same extent
    // semantics.
    let result = ThreadScenario::with_params(ThreadParameters::new(2.0, 64.0, 200.0, 1e-4))
        .run()
        .unwrap();
    let closed = oracle::check_closed_solid(&result.properties);
    assert!(closed.passed, "{}", closed.detail);
    assert!(result.geometry.turn_count() > 100.0);
}
