//! Ray-object intersection.
//!
//! Each object variant has a dedicated routine; [`intersect_object`]
//! dispatches on the variant.

mod mesh;
mod particle;

pub use mesh::intersect_mesh;
pub use particle::intersect_particle;

use crate::object::SceneObject;
use crate::{Intersection, Ray};

/// Intersect a ray with one scene object.
///
/// Meshes may contribute several hits, in face order. Helpers never hit.
pub fn intersect_object<'a>(ray: &Ray, object: &'a SceneObject) -> Vec<Intersection<'a>> {
    match object {
        SceneObject::Particle(particle) => intersect_particle(ray, object, particle)
            .into_iter()
            .collect(),
        SceneObject::Mesh(mesh) => intersect_mesh(ray, object, mesh),
        SceneObject::Helper => Vec::new(),
    }
}
