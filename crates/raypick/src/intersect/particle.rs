//! Ray-particle picking.

use crate::object::{Particle, SceneObject};
use crate::{Intersection, Ray};

/// Pick a particle as a disc of radius `scale` facing the ray.
///
/// The reported distance is the nearest-approach distance between the
/// particle and the ray's line, not a distance along the ray. Particles
/// exactly `scale` away still count as hit.
pub fn intersect_particle<'a>(
    ray: &Ray,
    object: &'a SceneObject,
    particle: &Particle,
) -> Option<Intersection<'a>> {
    let distance = ray.nearest_approach(&particle.position);

    if distance > particle.scale {
        return None;
    }

    Some(Intersection {
        distance,
        point: particle.position,
        face: None,
        face_index: None,
        object,
    })
}
