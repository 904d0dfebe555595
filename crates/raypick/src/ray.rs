//! Ray representation and picking queries.

use log::trace;
use raypick_math::{Dir3, Point3, Vec3};
use rayon::prelude::*;

use crate::geometry::Face;
use crate::intersect::intersect_object;
use crate::object::SceneObject;

/// Default epsilon below which a ray counts as parallel to a face plane.
pub const DEFAULT_PRECISION: f64 = 1e-4;

/// A picking ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Origin point of the ray.
    pub origin: Point3,
    /// Unit direction of the ray.
    pub direction: Dir3,
    precision: f64,
}

impl Ray {
    /// Create a ray with [`DEFAULT_PRECISION`].
    ///
    /// The direction will be normalized. A zero direction stays zero, so the
    /// ray can only pick particles around its origin.
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        let direction = Dir3::try_new(direction, 0.0)
            .unwrap_or_else(|| Dir3::new_unchecked(Vec3::zeros()));
        Self {
            origin,
            direction,
            precision: DEFAULT_PRECISION,
        }
    }

    /// Return a copy using `precision` for parallel-plane rejection.
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    /// Change the parallel-plane epsilon for subsequent queries.
    pub fn set_precision(&mut self, precision: f64) {
        self.precision = precision;
    }

    /// Parallel-plane epsilon.
    pub fn precision(&self) -> f64 {
        self.precision
    }

    /// Evaluate the ray at parameter `t`: `origin + t * direction`.
    #[inline]
    pub fn at(&self, t: f64) -> Point3 {
        self.origin + t * self.direction.as_ref()
    }

    /// Distance from `point` to the closest point on the infinite line
    /// through this ray.
    #[inline]
    pub fn nearest_approach(&self, point: &Point3) -> f64 {
        let t = (point - self.origin).dot(self.direction.as_ref());
        (point - self.at(t)).norm()
    }

    /// Intersect a single object. Results are in face order, unsorted.
    pub fn intersect_object<'a>(&self, object: &'a SceneObject) -> Vec<Intersection<'a>> {
        intersect_object(self, object)
    }

    /// Intersect every object and sort the hits by ascending distance.
    ///
    /// Hits at equal distance keep their encounter order.
    pub fn intersect_objects<'a>(&self, objects: &'a [SceneObject]) -> Vec<Intersection<'a>> {
        let mut hits: Vec<Intersection<'a>> = objects
            .iter()
            .flat_map(|object| self.intersect_object(object))
            .collect();
        sort_by_distance(&mut hits);
        trace!("{} hits across {} objects", hits.len(), objects.len());
        hits
    }

    /// Same as [`Ray::intersect_objects`], testing objects in parallel.
    pub fn intersect_objects_par<'a>(&self, objects: &'a [SceneObject]) -> Vec<Intersection<'a>> {
        let per_object: Vec<Vec<Intersection<'a>>> = objects
            .par_iter()
            .map(|object| self.intersect_object(object))
            .collect();
        let mut hits: Vec<Intersection<'a>> = per_object.into_iter().flatten().collect();
        sort_by_distance(&mut hits);
        trace!("{} hits across {} objects (parallel)", hits.len(), objects.len());
        hits
    }

    /// The closest hit, if any.
    pub fn intersect_nearest<'a>(&self, objects: &'a [SceneObject]) -> Option<Intersection<'a>> {
        self.intersect_objects(objects).into_iter().next()
    }
}

fn sort_by_distance(hits: &mut [Intersection<'_>]) {
    hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
}

/// A single ray hit.
#[derive(Debug, Clone, Copy)]
pub struct Intersection<'a> {
    /// World-space distance from the ray origin. For particles this is the
    /// nearest-approach distance to the line instead.
    pub distance: f64,
    /// World-space hit point (the particle position for particles).
    pub point: Point3,
    /// Face that was hit, `None` for particles.
    pub face: Option<&'a Face>,
    /// Index of the face within its geometry.
    pub face_index: Option<usize>,
    /// Object that was hit.
    pub object: &'a SceneObject,
}
