#![warn(missing_docs)]

//! Math types for raypick.
//!
//! Thin wrappers around nalgebra: points, vectors, directions and the
//! 4x4 affine transform used for object-to-world placement.

use nalgebra::{Matrix4, Unit, Vector3, Vector4};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A unit (normalized) direction vector in 3D space.
pub type Dir3 = Unit<Vector3<f64>>;

/// A 4x4 affine transformation matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    /// The underlying 4x4 matrix.
    pub matrix: Matrix4<f64>,
}

impl Transform {
    /// Identity transform.
    pub fn identity() -> Self {
        Self {
            matrix: Matrix4::identity(),
        }
    }

    /// Translation by `(dx, dy, dz)`.
    pub fn translation(dx: f64, dy: f64, dz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 3)] = dx;
        m[(1, 3)] = dy;
        m[(2, 3)] = dz;
        Self { matrix: m }
    }

    /// Non-uniform scale by `(sx, sy, sz)`.
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Self {
        let mut m = Matrix4::identity();
        m[(0, 0)] = sx;
        m[(1, 1)] = sy;
        m[(2, 2)] = sz;
        Self { matrix: m }
    }

    /// Rotation about the X axis by `angle` radians.
    pub fn rotation_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(1, 1)] = c;
        m[(1, 2)] = -s;
        m[(2, 1)] = s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Y axis by `angle` radians.
    pub fn rotation_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 2)] = s;
        m[(2, 0)] = -s;
        m[(2, 2)] = c;
        Self { matrix: m }
    }

    /// Rotation about the Z axis by `angle` radians.
    pub fn rotation_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        let mut m = Matrix4::identity();
        m[(0, 0)] = c;
        m[(0, 1)] = -s;
        m[(1, 0)] = s;
        m[(1, 1)] = c;
        Self { matrix: m }
    }

    /// Compose: `self * other`, i.e. `other` is applied first.
    pub fn then(&self, other: &Transform) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Transform a point.
    pub fn apply_point(&self, p: &Point3) -> Point3 {
        let v = self.matrix * Vector4::new(p.x, p.y, p.z, 1.0);
        Point3::new(v.x, v.y, v.z)
    }

    /// Transform a direction vector (ignores translation, applies rotation/scale).
    pub fn apply_vec(&self, v: &Vec3) -> Vec3 {
        let r = self.matrix * Vector4::new(v.x, v.y, v.z, 0.0);
        Vec3::new(r.x, r.y, r.z)
    }

    /// Transform an axis and renormalize it.
    ///
    /// Zero-length results are returned as the zero vector.
    pub fn rotate_axis(&self, v: &Vec3) -> Vec3 {
        let r = self.apply_vec(v);
        r.try_normalize(0.0).unwrap_or_else(Vec3::zeros)
    }

    /// Inverse of this transform, if it exists.
    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }

    /// World position encoded in the translation column.
    pub fn position(&self) -> Point3 {
        Point3::new(
            self.matrix[(0, 3)],
            self.matrix[(1, 3)],
            self.matrix[(2, 3)],
        )
    }

    /// Lengths of the X, Y and Z basis columns.
    pub fn basis_scale(&self) -> Vec3 {
        Vec3::new(
            self.matrix.fixed_view::<3, 1>(0, 0).norm(),
            self.matrix.fixed_view::<3, 1>(0, 1).norm(),
            self.matrix.fixed_view::<3, 1>(0, 2).norm(),
        )
    }

    /// Largest basis column length.
    pub fn max_scale(&self) -> f64 {
        self.basis_scale().max()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();
        let p = Point3::new(1.0, 2.0, 3.0);
        let result = t.apply_point(&p);
        assert!((result - p).norm() < 1e-12);
    }

    #[test]
    fn test_translation_moves_points_not_vectors() {
        let t = Transform::translation(10.0, 20.0, 30.0);
        let p = t.apply_point(&Point3::new(1.0, 2.0, 3.0));
        assert!((p.x - 11.0).abs() < 1e-12);
        assert!((p.y - 22.0).abs() < 1e-12);
        assert!((p.z - 33.0).abs() < 1e-12);

        let v = t.apply_vec(&Vec3::new(1.0, 2.0, 3.0));
        assert!((v - Vec3::new(1.0, 2.0, 3.0)).norm() < 1e-12);
    }

    #[test]
    fn test_rotation_z_90() {
        let t = Transform::rotation_z(PI / 2.0);
        let result = t.apply_point(&Point3::new(1.0, 0.0, 0.0));
        assert!(result.x.abs() < 1e-12);
        assert!((result.y - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_compose_applies_right_operand_first() {
        let translate = Transform::translation(1.0, 0.0, 0.0);
        let scale = Transform::scale(2.0, 2.0, 2.0);
        // scale(translate(origin)) = (2, 0, 0)
        let result = scale.then(&translate).apply_point(&Point3::origin());
        assert!((result.x - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_inverse_round_trip() {
        let t = Transform::translation(1.0, 2.0, 3.0)
            .then(&Transform::rotation_y(0.3))
            .then(&Transform::scale(2.0, 0.5, 4.0));
        let inv = t.inverse().unwrap();
        let p = Point3::new(5.0, 6.0, 7.0);
        let result = inv.apply_point(&t.apply_point(&p));
        assert!((result - p).norm() < 1e-9);
    }

    #[test]
    fn test_singular_has_no_inverse() {
        assert!(Transform::scale(1.0, 0.0, 1.0).inverse().is_none());
    }

    #[test]
    fn test_rotate_axis_normalizes() {
        let t = Transform::scale(3.0, 3.0, 3.0).then(&Transform::rotation_x(PI / 2.0));
        let v = t.rotate_axis(&Vec3::new(0.0, 1.0, 0.0));
        assert!((v.norm() - 1.0).abs() < 1e-12);
        assert!((v.z - 1.0).abs() < 1e-12);

        let zero = Transform::identity().rotate_axis(&Vec3::zeros());
        assert_eq!(zero, Vec3::zeros());
    }

    #[test]
    fn test_position_and_scale() {
        let t = Transform::translation(4.0, -2.0, 9.0)
            .then(&Transform::rotation_z(0.7))
            .then(&Transform::scale(2.0, 3.0, 0.5));
        let pos = t.position();
        assert!((pos - Point3::new(4.0, -2.0, 9.0)).norm() < 1e-12);

        let s = t.basis_scale();
        assert!((s.x - 2.0).abs() < 1e-12);
        assert!((s.y - 3.0).abs() < 1e-12);
        assert!((s.z - 0.5).abs() < 1e-12);
        assert!((t.max_scale() - 3.0).abs() < 1e-12);
    }
}
