//! Indexed polygon geometry with precomputed face data.
//!
//! Faces carry an object-space centroid and unit normal computed once when
//! the geometry is built. Picking reads them as-is; if vertices are moved
//! through [`Geometry::vertices_mut`] the caller must recompute them.

use raypick_math::{Point3, Vec3};

use crate::error::{PickError, Result};

/// Vertex indices of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceKind {
    /// Three vertex indices `a, b, c`.
    Triangle([usize; 3]),
    /// Four vertex indices `a, b, c, d`.
    Quad([usize; 4]),
}

impl FaceKind {
    /// The vertex indices of this face.
    pub fn indices(&self) -> &[usize] {
        match self {
            FaceKind::Triangle(idx) => &idx[..],
            FaceKind::Quad(idx) => &idx[..],
        }
    }
}

/// A face with its cached centroid and normal (object space).
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    /// Vertex indices.
    pub kind: FaceKind,
    /// Mean of the face's vertices.
    pub centroid: Point3,
    /// Unit normal, or zero for degenerate faces.
    pub normal: Vec3,
}

impl Face {
    fn new(kind: FaceKind) -> Self {
        Self {
            kind,
            centroid: Point3::origin(),
            normal: Vec3::zeros(),
        }
    }
}

/// Shared vertex storage plus the faces indexing into it.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    vertices: Vec<Point3>,
    faces: Vec<Face>,
    bounding_radius: f64,
}

impl Geometry {
    /// Build geometry from vertices and face index lists.
    ///
    /// Fails if any index is out of range. Centroids, normals and the
    /// bounding sphere are computed before returning.
    pub fn new(vertices: Vec<Point3>, faces: Vec<FaceKind>) -> Result<Self> {
        let vertex_count = vertices.len();
        for (face, kind) in faces.iter().enumerate() {
            check_indices(face, kind, vertex_count)?;
        }
        Ok(Self::from_valid(vertices, faces))
    }

    /// Build from faces whose indices are known to be in range.
    pub(crate) fn from_valid(vertices: Vec<Point3>, faces: Vec<FaceKind>) -> Self {
        let mut geometry = Self {
            vertices,
            faces: faces.into_iter().map(Face::new).collect(),
            bounding_radius: 0.0,
        };
        geometry.compute_centroids();
        geometry.compute_face_normals();
        geometry.compute_bounding_sphere();
        geometry
    }

    /// Append a face, returning its index.
    pub fn push_face(&mut self, kind: FaceKind) -> Result<usize> {
        let index = self.faces.len();
        check_indices(index, &kind, self.vertices.len())?;
        let mut face = Face::new(kind);
        face.centroid = centroid(&self.vertices, &kind);
        face.normal = face_normal(&self.vertices, &kind);
        self.faces.push(face);
        Ok(index)
    }

    /// Object-space vertex positions.
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Mutable vertex positions. The vertex count cannot change, so face
    /// indices stay valid; cached face data does go stale.
    pub fn vertices_mut(&mut self) -> &mut [Point3] {
        &mut self.vertices
    }

    /// All faces.
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Radius of the origin-centred sphere enclosing every vertex.
    pub fn bounding_radius(&self) -> f64 {
        self.bounding_radius
    }

    /// Recompute every face centroid.
    pub fn compute_centroids(&mut self) {
        for face in &mut self.faces {
            face.centroid = centroid(&self.vertices, &face.kind);
        }
    }

    /// Recompute every face normal.
    pub fn compute_face_normals(&mut self) {
        for face in &mut self.faces {
            face.normal = face_normal(&self.vertices, &face.kind);
        }
    }

    /// Recompute the bounding sphere radius.
    pub fn compute_bounding_sphere(&mut self) {
        self.bounding_radius = self
            .vertices
            .iter()
            .map(|v| v.coords.norm())
            .fold(0.0, f64::max);
    }
}

fn check_indices(face: usize, kind: &FaceKind, vertex_count: usize) -> Result<()> {
    match kind.indices().iter().find(|&&i| i >= vertex_count) {
        Some(&index) => Err(PickError::VertexIndexOutOfRange {
            face,
            index,
            vertex_count,
        }),
        None => Ok(()),
    }
}

fn centroid(vertices: &[Point3], kind: &FaceKind) -> Point3 {
    let indices = kind.indices();
    let sum = indices
        .iter()
        .fold(Vec3::zeros(), |acc, &i| acc + vertices[i].coords);
    Point3::from(sum / indices.len() as f64)
}

/// Counter-clockwise winding faces the viewer; quads use their first three vertices.
fn face_normal(vertices: &[Point3], kind: &FaceKind) -> Vec3 {
    let idx = kind.indices();
    let (a, b, c) = (vertices[idx[0]], vertices[idx[1]], vertices[idx[2]]);
    let n = (c - b).cross(&(a - b));
    n.try_normalize(0.0).unwrap_or_else(Vec3::zeros)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri() -> Geometry {
        Geometry::new(
            vec![
                Point3::new(-1.0, -1.0, -5.0),
                Point3::new(1.0, -1.0, -5.0),
                Point3::new(0.0, 1.0, -5.0),
            ],
            vec![FaceKind::Triangle([0, 1, 2])],
        )
        .unwrap()
    }

    #[test]
    fn test_ccw_triangle_faces_positive_z() {
        let g = tri();
        let n = g.faces()[0].normal;
        assert!((n - Vec3::new(0.0, 0.0, 1.0)).norm() < 1e-12);
    }

    #[test]
    fn test_centroid() {
        let g = tri();
        let c = g.faces()[0].centroid;
        assert!(c.x.abs() < 1e-12);
        assert!((c.y + 1.0 / 3.0).abs() < 1e-12);
        assert!((c.z + 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_bounding_radius_is_farthest_vertex() {
        let g = tri();
        assert!((g.bounding_radius() - 27.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_out_of_range_index_rejected() {
        let err = Geometry::new(
            vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)],
            vec![FaceKind::Triangle([0, 1, 2])],
        )
        .unwrap_err();
        assert_eq!(
            err,
            PickError::VertexIndexOutOfRange {
                face: 0,
                index: 2,
                vertex_count: 2
            }
        );
    }

    #[test]
    fn test_push_face_validates_and_caches() {
        let mut g = tri();
        assert!(g.push_face(FaceKind::Quad([0, 1, 2, 7])).is_err());
        assert_eq!(g.faces().len(), 1);

        let idx = g.push_face(FaceKind::Triangle([2, 1, 0])).unwrap();
        assert_eq!(idx, 1);
        // Reversed winding flips the normal.
        assert!((g.faces()[1].normal - Vec3::new(0.0, 0.0, -1.0)).norm() < 1e-12);
    }

    #[test]
    fn test_degenerate_face_has_zero_normal() {
        let g = Geometry::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
            ],
            vec![FaceKind::Triangle([0, 1, 2])],
        )
        .unwrap();
        assert_eq!(g.faces()[0].normal, Vec3::zeros());
    }

    #[test]
    fn test_cached_data_is_stale_until_recomputed() {
        let mut g = tri();
        for v in g.vertices_mut() {
            v.z += 2.0;
        }
        assert!((g.faces()[0].centroid.z + 5.0).abs() < 1e-12);

        g.compute_centroids();
        g.compute_bounding_sphere();
        assert!((g.faces()[0].centroid.z + 3.0).abs() < 1e-12);
        assert!((g.bounding_radius() - 11.0_f64.sqrt()).abs() < 1e-12);
    }
}
