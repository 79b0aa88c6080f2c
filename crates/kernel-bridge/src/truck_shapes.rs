//! Wire and face builders on top of truck's sweep API.
//!
//! truck has no built-in disk or revolved-outline primitive — everything is
//! vertices swept into wires, wires attached to planes, faces swept into
//! solids.

use std::f64::consts::PI;

use truck_modeling::builder;
use truck_modeling::topology::{Edge, Face, Solid, Wire};
use truck_modeling::{Point3, Rad, Vector3};

use crate::types::KernelError;
use thread_types::vec3;

/// Closed wire through the given points; consecutive edges share vertices
/// so the wire is watertight for plane attachment.
pub fn closed_wire(points: &[[f64; 3]]) -> Result<Wire, KernelError> {
    if points.len() < 3 {
        return Err(KernelError::DegenerateInput {
            reason: "closed wire needs at least three points".to_string(),
        });
    }
    let pts: Vec<Point3> = points
        .iter()
        .map(|p| Point3::new(p[0], p[1], p[2]))
        .collect();
    let vertices: Vec<_> = pts.iter().map(|&p| builder::vertex(p)).collect();
    let n = pts.len();
    let mut wire_edges: Vec<Edge> = Vec::new();
    for i in 0..n {
        let j = (i + 1) % n;
        let edge = Edge::new(
            &vertices[i],
            &vertices[j],
            truck_modeling::geometry::Curve::Line(truck_modeling::geometry::Line(
                pts[i], pts[j],
            )),
        );
        wire_edges.push(edge);
    }
    Ok(Wire::from_iter(wire_edges))
}

/// Attach a plane to a closed wire, producing a planar face.
pub fn planar_face(wire: Wire) -> Result<Face, KernelError> {
    builder::try_attach_plane(&[wire]).map_err(|e| KernelError::Other {
        message: format!("failed to create planar face: {}", e),
    })
}

/// Circular planar face: a vertex on the rim revolved one full turn around
/// the disk normal, then attached to a plane.
pub fn disk_face(center: [f64; 3], normal: [f64; 3], radius: f64) -> Result<Face, KernelError> {
    if radius <= 0.0 {
        return Err(KernelError::DegenerateInput {
            reason: "disk radius must be positive".to_string(),
        });
    }
    let n = vec3::normalize(normal);
    let rim_dir = perpendicular_to(n);
    let rim = vec3::add(center, vec3::scale(rim_dir, radius));

    let v = builder::vertex(Point3::new(rim[0], rim[1], rim[2]));
    let wire: Wire = builder::rsweep(
        &v,
        Point3::new(center[0], center[1], center[2]),
        Vector3::new(n[0], n[1], n[2]),
        Rad(2.0 * PI),
    );
    planar_face(wire)
}

/// Revolve a planar face one full turn about an axis.
pub fn revolve_full_turn(face: &Face, axis_origin: [f64; 3], axis_direction: [f64; 3]) -> Solid {
    builder::rsweep(
        face,
        Point3::new(axis_origin[0], axis_origin[1], axis_origin[2]),
        Vector3::new(axis_direction[0], axis_direction[1], axis_direction[2]),
        Rad(2.0 * PI),
    )
}

/// A unit vector perpendicular to `n`.
fn perpendicular_to(n: [f64; 3]) -> [f64; 3] {
    let up = if n[0].abs() < 0.9 {
        [1.0, 0.0, 0.0]
    } else {
        [0.0, 1.0, 0.0]
    };
    vec3::normalize(vec3::cross(up, n))
}
