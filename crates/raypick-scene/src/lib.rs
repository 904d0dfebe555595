#![warn(missing_docs)]

//! Serializable scene documents for raypick.
//!
//! A document is a flat list of named objects plus pick settings, stored
//! as JSON. [`Document::build`] validates it and produces a [`Scene`] of
//! `raypick` objects ready for ray queries.

pub mod error;
mod scene;

pub use error::{Result, SceneError};
pub use scene::{Pick, Scene, SceneStats};

use serde::{Deserialize, Serialize};

/// 3D vector with f64 components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Create a new Vec3.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    fn one() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl From<Vec3> for raypick_math::Point3 {
    fn from(v: Vec3) -> Self {
        raypick_math::Point3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for raypick_math::Vec3 {
    fn from(v: Vec3) -> Self {
        raypick_math::Vec3::new(v.x, v.y, v.z)
    }
}

/// Query settings stored with the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickSettings {
    /// Epsilon below which a ray counts as parallel to a face.
    pub precision: f64,
    /// Test objects on the rayon thread pool.
    pub parallel: bool,
}

impl Default for PickSettings {
    fn default() -> Self {
        Self {
            precision: raypick::DEFAULT_PRECISION,
            parallel: false,
        }
    }
}

impl PickSettings {
    /// Validate settings.
    pub fn validate(&self) -> Result<()> {
        if !self.precision.is_finite() || self.precision < 0.0 {
            return Err(SceneError::InvalidSettings(format!(
                "precision must be finite and non-negative, got {}",
                self.precision
            )));
        }
        Ok(())
    }
}

/// Object placement: scale, then rotation (Euler degrees, X then Y then Z),
/// then translation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformDef {
    /// Translation.
    #[serde(default = "Vec3::zero")]
    pub translation: Vec3,
    /// Rotation angles in degrees.
    #[serde(default = "Vec3::zero")]
    pub rotation: Vec3,
    /// Scale factors per axis.
    #[serde(default = "Vec3::one")]
    pub scale: Vec3,
}

impl Default for TransformDef {
    fn default() -> Self {
        Self {
            translation: Vec3::zero(),
            rotation: Vec3::zero(),
            scale: Vec3::one(),
        }
    }
}

impl TransformDef {
    /// Build the object-to-world matrix.
    pub fn to_transform(&self) -> raypick_math::Transform {
        use raypick_math::Transform;

        let t = self.translation;
        let r = self.rotation;
        let s = self.scale;
        Transform::translation(t.x, t.y, t.z)
            .then(&Transform::rotation_z(r.z.to_radians()))
            .then(&Transform::rotation_y(r.y.to_radians()))
            .then(&Transform::rotation_x(r.x.to_radians()))
            .then(&Transform::scale(s.x, s.y, s.z))
    }
}

/// Which face sides are pickable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideDef {
    /// Front faces only.
    #[default]
    Front,
    /// Back faces only.
    Back,
    /// Both sides.
    Double,
}

impl From<SideDef> for raypick::Side {
    fn from(side: SideDef) -> Self {
        match side {
            SideDef::Front => raypick::Side::Front,
            SideDef::Back => raypick::Side::Back,
            SideDef::Double => raypick::Side::Double,
        }
    }
}

/// Mesh geometry description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeometryDef {
    /// Explicit vertices and faces. Each face lists 3 or 4 vertex indices.
    Indexed {
        /// Object-space vertex positions.
        vertices: Vec<Vec3>,
        /// Vertex indices per face.
        faces: Vec<Vec<usize>>,
    },
    /// Quad in the XY plane facing +Z, centred at the origin.
    Plane {
        /// Size along X.
        width: f64,
        /// Size along Y.
        height: f64,
    },
    /// Box centred at the origin.
    Cube {
        /// Size along X.
        width: f64,
        /// Size along Y.
        height: f64,
        /// Size along Z.
        depth: f64,
    },
}

/// What an object is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ObjectKind {
    /// Point object picked as a disc of radius `scale`.
    Particle {
        /// World position.
        position: Vec3,
        /// Pick radius.
        scale: f64,
    },
    /// Polygon mesh.
    Mesh {
        /// Object-to-world placement.
        #[serde(default)]
        transform: TransformDef,
        /// Pickable sides.
        #[serde(default)]
        side: SideDef,
        /// Geometry.
        geometry: GeometryDef,
    },
    /// Non-pickable node.
    Helper,
}

/// A named object in the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDef {
    /// Display name.
    pub name: String,
    /// Object payload.
    #[serde(flatten)]
    pub kind: ObjectKind,
}

/// A scene document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Pick settings.
    #[serde(default)]
    pub settings: PickSettings,
    /// Objects in pick order.
    #[serde(default)]
    pub objects: Vec<ObjectDef>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deserialize from JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Validate the document and build pickable objects.
    pub fn build(&self) -> Result<Scene> {
        Scene::from_document(self)
    }
}
