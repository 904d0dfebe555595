#![warn(missing_docs)]

//! Ray picking against particles and polygon meshes.
//!
//! Given a ray and a list of scene objects, compute every intersection
//! with its distance, world-space point, face and object, sorted by
//! ascending distance.
//!
//! # Architecture
//!
//! - [`Ray`] - origin, direction and parallel-plane precision; query entry point
//! - [`Intersection`] - a single hit
//! - [`SceneObject`] - particle, mesh or non-pickable helper
//! - [`Geometry`] - shared vertices plus faces with cached centroid/normal
//! - [`intersect`] - per-variant intersection routines
//! - [`trim`] - barycentric point-in-face tests
//!
//! Queries allocate only their result vector and share no mutable state, so
//! a scene can be picked from several threads at once.
//!
//! # Example
//!
//! ```
//! use raypick::{Geometry, Mesh, Ray, SceneObject, Side};
//! use raypick_math::{Point3, Transform, Vec3};
//!
//! let crate_box: SceneObject = Mesh::new(Geometry::cube(2.0, 2.0, 2.0))
//!     .with_transform(Transform::translation(0.0, 0.0, -10.0))
//!     .with_side(Side::Double)
//!     .into();
//! let objects = vec![crate_box];
//!
//! let ray = Ray::new(Point3::new(0.2, -0.3, 0.0), Vec3::new(0.0, 0.0, -1.0));
//! let hits = ray.intersect_objects(&objects);
//! assert_eq!(hits.len(), 2);
//! assert!((hits[0].distance - 9.0).abs() < 1e-9);
//! ```

pub mod error;
pub mod geometry;
pub mod intersect;
pub mod object;
mod primitives;
mod ray;
pub mod trim;

pub use error::{PickError, Result};
pub use geometry::{Face, FaceKind, Geometry};
pub use object::{Mesh, Particle, SceneObject, Side};
pub use ray::{Intersection, Ray, DEFAULT_PRECISION};
