//! Pickable scene objects.

use raypick_math::{Point3, Transform};

use crate::geometry::Geometry;

/// Which side of a face is testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    /// One-sided; only faces whose normal points toward the ray are hit.
    #[default]
    Front,
    /// One-sided with flipped winding; only back faces are hit.
    Back,
    /// Both sides are hit.
    Double,
}

impl Side {
    /// Whether a face is testable given `dot(direction, normal)`.
    #[inline]
    pub fn accepts(self, dot: f64) -> bool {
        match self {
            Side::Double => true,
            Side::Back => dot > 0.0,
            Side::Front => dot < 0.0,
        }
    }
}

/// A point-like object (particle, sprite) picked as a disc facing the ray.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// World position.
    pub position: Point3,
    /// World-space pick radius.
    pub scale: f64,
}

impl Particle {
    /// Create a particle.
    pub fn new(position: Point3, scale: f64) -> Self {
        Self { position, scale }
    }
}

/// A polygon mesh placed in the world by a transform.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    /// Object-to-world transform.
    pub transform: Transform,
    /// Object-space geometry.
    pub geometry: Geometry,
    /// Face culling policy.
    pub side: Side,
}

impl Mesh {
    /// Create a one-sided mesh with an identity transform.
    pub fn new(geometry: Geometry) -> Self {
        Self {
            transform: Transform::identity(),
            geometry,
            side: Side::Front,
        }
    }

    /// Replace the transform.
    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    /// Replace the culling policy.
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// Object-space bounding sphere radius.
    pub fn bounding_radius(&self) -> f64 {
        self.geometry.bounding_radius()
    }
}

/// Anything that can be handed to a ray query.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneObject {
    /// Point object.
    Particle(Particle),
    /// Polygon mesh.
    Mesh(Mesh),
    /// Non-pickable node (camera, light, group). Never intersected.
    Helper,
}

impl From<Particle> for SceneObject {
    fn from(p: Particle) -> Self {
        SceneObject::Particle(p)
    }
}

impl From<Mesh> for SceneObject {
    fn from(m: Mesh) -> Self {
        SceneObject::Mesh(m)
    }
}
