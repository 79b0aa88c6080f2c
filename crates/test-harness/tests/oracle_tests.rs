use kernel_bridge::SolidProperties;
use test_harness::oracle;

fn closed_props(volume: f64) -> SolidProperties {
    SolidProperties {
        volume,
        bounding_box: [0.0, -5.0, -5.0, 10.0, 5.0, 5.0],
        face_count: 8,
        is_closed: true,
    }
}

#[test]
fn closed_solid_passes_for_positive_volume() {
    let verdict = oracle::check_closed_solid(&closed_props(42.0));
    assert!(verdict.passed, "{}", verdict.detail);
    assert_eq!(verdict.value, Some(42.0));
}

#[test]
fn closed_solid_fails_for_open_body() {
    let mut props = closed_props(42.0);
    props.is_closed = false;
    assert!(!oracle::check_closed_solid(&props).passed);
}

#[test]
fn closed_solid_fails_for_zero_volume() {
    assert!(!oracle::check_closed_solid(&closed_props(0.0)).passed);
}

#[test]
fn axial_extent_respects_slack() {
    let props = closed_props(1.0);
    assert!(oracle::check_axial_extent(&props, 0, 0.0, 10.0, 1e-6).passed);
    assert!(oracle::check_axial_extent(&props, 0, 0.5, 9.5, 1.0).passed);
    assert!(!oracle::check_axial_extent(&props, 0, 0.0, 20.0, 1.0).passed);
}

#[test]
fn volume_below_is_strict() {
    assert!(oracle::check_volume_below(1.0, 2.0).passed);
    assert!(!oracle::check_volume_below(2.0, 2.0).passed);
    assert!(!oracle::check_volume_below(3.0, 2.0).passed);
}

#[test]
fn deterministic_detects_differences() {
    let a = closed_props(1.0);
    let b = closed_props(1.0);
    assert!(oracle::check_deterministic(&a, &b).passed);

    let mut c = closed_props(1.0);
    c.volume = 1.0000001;
    assert!(!oracle::check_deterministic(&a, &c).passed);
}
