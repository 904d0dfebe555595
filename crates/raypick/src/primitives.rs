//! Ready-made pickable geometry.
//!
//! All primitives are centred on the object-space origin and wound
//! counter-clockwise when viewed from outside, so their normals point out.

use raypick_math::Point3;

use crate::geometry::{FaceKind, Geometry};

impl Geometry {
    /// A single triangle.
    pub fn triangle(a: Point3, b: Point3, c: Point3) -> Self {
        Self::from_valid(vec![a, b, c], vec![FaceKind::Triangle([0, 1, 2])])
    }

    /// A `width` x `height` quad in the XY plane facing +Z.
    pub fn plane(width: f64, height: f64) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Self::from_valid(
            vec![
                Point3::new(-hw, -hh, 0.0),
                Point3::new(hw, -hh, 0.0),
                Point3::new(hw, hh, 0.0),
                Point3::new(-hw, hh, 0.0),
            ],
            vec![FaceKind::Quad([0, 1, 2, 3])],
        )
    }

    /// A box of six quads.
    ///
    /// Vertex layout:
    /// ```text
    ///     v7----v6
    ///    /|    /|
    ///   v4----v5|    y
    ///   | v3--|-v2   | -z
    ///   |/    |/     |/
    ///   v0----v1     +---x
    /// ```
    pub fn cube(width: f64, height: f64, depth: f64) -> Self {
        let (hw, hh, hd) = (width / 2.0, height / 2.0, depth / 2.0);
        let vertices = vec![
            Point3::new(-hw, -hh, -hd),
            Point3::new(hw, -hh, -hd),
            Point3::new(hw, hh, -hd),
            Point3::new(-hw, hh, -hd),
            Point3::new(-hw, -hh, hd),
            Point3::new(hw, -hh, hd),
            Point3::new(hw, hh, hd),
            Point3::new(-hw, hh, hd),
        ];
        let faces = vec![
            FaceKind::Quad([4, 5, 6, 7]), // +Z
            FaceKind::Quad([1, 0, 3, 2]), // -Z
            FaceKind::Quad([1, 2, 6, 5]), // +X
            FaceKind::Quad([0, 4, 7, 3]), // -X
            FaceKind::Quad([3, 7, 6, 2]), // +Y
            FaceKind::Quad([0, 1, 5, 4]), // -Y
        ];
        Self::from_valid(vertices, faces)
    }
}
