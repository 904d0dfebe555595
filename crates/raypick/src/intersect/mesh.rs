//! Ray-mesh picking.
//!
//! The ray is moved into object space once per mesh, then every face is
//! tested against its cached plane (centroid + normal) followed by a
//! barycentric point-in-face test.

use log::debug;
use raypick_math::{Point3, Vec3};

use crate::geometry::Face;
use crate::object::{Mesh, SceneObject, Side};
use crate::trim::point_in_face;
use crate::{Intersection, Ray};

/// Intersect a ray with every face of a mesh.
///
/// Returns hits in face order. The whole mesh is skipped when the ray's
/// line misses the mesh's world-space bounding sphere, or when the mesh
/// transform cannot be inverted.
pub fn intersect_mesh<'a>(
    ray: &Ray,
    object: &'a SceneObject,
    mesh: &'a Mesh,
) -> Vec<Intersection<'a>> {
    let mut hits = Vec::new();
    let transform = &mesh.transform;

    let distance = ray.nearest_approach(&transform.position());
    let bound = mesh.bounding_radius() * transform.max_scale();
    if distance > bound {
        debug!("bounding sphere rejected mesh ({distance} > {bound})");
        return hits;
    }

    let Some(inverse) = transform.inverse() else {
        debug!("skipping mesh with singular transform");
        return hits;
    };
    let origin = inverse.apply_point(&ray.origin);
    let direction = inverse.rotate_axis(ray.direction.as_ref());

    let vertices = mesh.geometry.vertices();
    for (index, face) in mesh.geometry.faces().iter().enumerate() {
        let Some(local) = plane_hit(&origin, &direction, face, mesh.side, ray.precision()) else {
            continue;
        };

        if !point_in_face(&local, &face.kind, vertices) {
            continue;
        }

        let point = transform.apply_point(&local);
        hits.push(Intersection {
            distance: (point - ray.origin).norm(),
            point,
            face: Some(face),
            face_index: Some(index),
            object,
        });
    }

    hits
}

/// Object-space point where the ray meets the face's plane.
///
/// `None` if the ray is parallel within `precision`, the plane is behind
/// the origin, or the side policy culls the face.
fn plane_hit(
    origin: &Point3,
    direction: &Vec3,
    face: &Face,
    side: Side,
    precision: f64,
) -> Option<Point3> {
    let dot = direction.dot(&face.normal);
    if dot.abs() < precision {
        return None;
    }

    let scalar = face.normal.dot(&(face.centroid - origin)) / dot;
    if scalar < 0.0 {
        return None;
    }

    if !side.accepts(dot) {
        return None;
    }

    Some(origin + direction * scalar)
}
