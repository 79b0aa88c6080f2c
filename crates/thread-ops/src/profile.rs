//! Thread cross-section construction.
//!
//! One sawtooth period of the profile, assembled from the derived key
//! points. The male profile runs arc-then-polyline from root to the next
//! root; the female profile leads in with a polyline, bulges through the
//! crest arc, and tails off with a short polyline, giving the inverted
//! valley-first section.
//!
//! Every builder takes a translation offset so repeated calls can place
//! copies without mutating the canonical points.

use thread_types::{ArcThrough, Polyline3, ProfilePath, ProfileSegment, ProfileVariant};

use crate::settings::ProfileGeometry;

/// Root arc of the male profile: P1 → P1e → P2.
pub fn male_arc(offset: [f64; 3], geometry: &ProfileGeometry) -> ArcThrough {
    ArcThrough {
        start: geometry.p1(),
        interior: geometry.p1e(),
        end: geometry.p2(),
    }
    .translated(offset)
}

/// Flank-crest-flank polyline of the male profile: P2 → P3 → P4 → P5.
pub fn male_polyline(offset: [f64; 3], geometry: &ProfileGeometry) -> Polyline3 {
    Polyline3::new(vec![
        geometry.p2(),
        geometry.p3(),
        geometry.p4(),
        geometry.p5(),
    ])
    .translated(offset)
}

/// Leading polyline of the female profile: P1 → P2 → P3.
pub fn female_lead_polyline(offset: [f64; 3], geometry: &ProfileGeometry) -> Polyline3 {
    Polyline3::new(vec![geometry.p1(), geometry.p2(), geometry.p3()]).translated(offset)
}

/// Crest arc of the female profile: P3 → P3e → P4.
pub fn female_arc(offset: [f64; 3], geometry: &ProfileGeometry) -> ArcThrough {
    ArcThrough {
        start: geometry.p3(),
        interior: geometry.p3e(),
        end: geometry.p4(),
    }
    .translated(offset)
}

/// Trailing polyline of the female profile: P4 → P5.
pub fn female_tail_polyline(offset: [f64; 3], geometry: &ProfileGeometry) -> Polyline3 {
    Polyline3::new(vec![geometry.p4(), geometry.p5()]).translated(offset)
}

/// One full profile period for the given variant.
pub fn build_profile(
    variant: ProfileVariant,
    offset: [f64; 3],
    geometry: &ProfileGeometry,
) -> ProfilePath {
    match variant {
        ProfileVariant::Male => ProfilePath::new(vec![
            ProfileSegment::Arc(male_arc(offset, geometry)),
            ProfileSegment::Polyline(male_polyline(offset, geometry)),
        ]),
        ProfileVariant::Female => ProfilePath::new(vec![
            ProfileSegment::Polyline(female_lead_polyline(offset, geometry)),
            ProfileSegment::Arc(female_arc(offset, geometry)),
            ProfileSegment::Polyline(female_tail_polyline(offset, geometry)),
        ]),
    }
}
