//! Verification oracles — pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not
//! panics, so a scenario can collect every failure in one pass.

use kernel_bridge::SolidProperties;

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: Some(value),
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn fail_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: Some(value),
        }
    }
}

// ── Solid Oracles ───────────────────────────────────────────────────────────

/// Check that a solid is closed with positive volume.
pub fn check_closed_solid(props: &SolidProperties) -> OracleVerdict {
    if !props.is_closed {
        return OracleVerdict::fail("closed_solid", "body is not closed".to_string());
    }
    if props.volume <= 0.0 {
        return OracleVerdict::fail_val(
            "closed_solid",
            format!("volume {} is not positive", props.volume),
            props.volume,
        );
    }
    OracleVerdict::pass_val(
        "closed_solid",
        format!("closed, volume {:.3}", props.volume),
        props.volume,
    )
}

/// Check that the axial extent along coordinate `axis_index` lies within
/// `slack` of `[expected_start, expected_end]`.
pub fn check_axial_extent(
    props: &SolidProperties,
    axis_index: usize,
    expected_start: f64,
    expected_end: f64,
    slack: f64,
) -> OracleVerdict {
    let start = props.bounding_box[axis_index];
    let end = props.bounding_box[axis_index + 3];
    let start_err = (start - expected_start).abs();
    let end_err = (end - expected_end).abs();
    if start_err <= slack && end_err <= slack {
        OracleVerdict::pass(
            "axial_extent",
            format!("extent [{:.3}, {:.3}] within {} of expectation", start, end, slack),
        )
    } else {
        OracleVerdict::fail(
            "axial_extent",
            format!(
                "extent [{:.3}, {:.3}], expected [{:.3}, {:.3}] ± {}",
                start, end, expected_start, expected_end, slack
            ),
        )
    }
}

/// Check strict volume ordering: `smaller` < `larger`.
pub fn check_volume_below(smaller: f64, larger: f64) -> OracleVerdict {
    if smaller < larger {
        OracleVerdict::pass_val(
            "volume_below",
            format!("{:.3} < {:.3}", smaller, larger),
            larger - smaller,
        )
    } else {
        OracleVerdict::fail_val(
            "volume_below",
            format!("{:.3} is not below {:.3}", smaller, larger),
            larger - smaller,
        )
    }
}

/// Check that two runs produced identical volume and bounding box.
pub fn check_deterministic(a: &SolidProperties, b: &SolidProperties) -> OracleVerdict {
    if a.volume == b.volume && a.bounding_box == b.bounding_box {
        OracleVerdict::pass("deterministic", "volume and bounding box identical".to_string())
    } else {
        OracleVerdict::fail(
            "deterministic",
            format!(
                "volume {} vs {}, bbox {:?} vs {:?}",
                a.volume, b.volume, a.bounding_box, b.bounding_box
            ),
        )
    }
}
