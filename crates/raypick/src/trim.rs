//! Point-in-face testing for plane hits.
//!
//! Uses the barycentric formulation from
//! <http://www.blackpawn.com/texts/pointinpoly/default.html>. The upper edge
//! is exclusive (`u + v < 1`), the two edges through `a` are inclusive.

use raypick_math::Point3;

use crate::geometry::FaceKind;

/// Test whether `p` (assumed on the triangle's plane) lies inside `a, b, c`.
///
/// Degenerate triangles produce non-finite coordinates and always test false.
#[inline]
pub fn point_in_triangle(p: &Point3, a: &Point3, b: &Point3, c: &Point3) -> bool {
    let e0 = c - a;
    let e1 = b - a;
    let e2 = p - a;

    let dot00 = e0.dot(&e0);
    let dot01 = e0.dot(&e1);
    let dot02 = e0.dot(&e2);
    let dot11 = e1.dot(&e1);
    let dot12 = e1.dot(&e2);

    let inv_denom = 1.0 / (dot00 * dot11 - dot01 * dot01);
    let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
    let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;

    u >= 0.0 && v >= 0.0 && u + v < 1.0
}

/// Test a quad as the two triangles `a, b, c` and `a, b, d`.
///
/// Both triangles share the edge `a, b`, so together they do not cover the
/// wedge of the quad beyond both diagonals.
#[inline]
pub fn point_in_quad(p: &Point3, a: &Point3, b: &Point3, c: &Point3, d: &Point3) -> bool {
    point_in_triangle(p, a, b, c) || point_in_triangle(p, a, b, d)
}

/// Test `p` against a face of `vertices`.
pub fn point_in_face(p: &Point3, kind: &FaceKind, vertices: &[Point3]) -> bool {
    match *kind {
        FaceKind::Triangle([a, b, c]) => {
            point_in_triangle(p, &vertices[a], &vertices[b], &vertices[c])
        }
        FaceKind::Quad([a, b, c, d]) => point_in_quad(
            p,
            &vertices[a],
            &vertices[b],
            &vertices[c],
            &vertices[d],
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64) -> Point3 {
        Point3::new(x, y, 0.0)
    }

    // a at the origin, c along +x, b along +y, so (u, v) == (x, y).
    fn unit() -> (Point3, Point3, Point3) {
        (p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0))
    }

    #[test]
    fn test_interior_point() {
        let (a, b, c) = unit();
        assert!(point_in_triangle(&p(0.25, 0.25), &a, &b, &c));
    }

    #[test]
    fn test_outside_point() {
        let (a, b, c) = unit();
        assert!(!point_in_triangle(&p(-0.1, 0.5), &a, &b, &c));
        assert!(!point_in_triangle(&p(0.8, 0.8), &a, &b, &c));
    }

    #[test]
    fn test_edges_through_a_are_inclusive() {
        let (a, b, c) = unit();
        // u == 0
        assert!(point_in_triangle(&p(0.0, 0.5), &a, &b, &c));
        // v == 0
        assert!(point_in_triangle(&p(0.5, 0.0), &a, &b, &c));
        assert!(point_in_triangle(&a, &a, &b, &c));
    }

    #[test]
    fn test_far_edge_is_exclusive() {
        let (a, b, c) = unit();
        // u + v == 1 exactly
        assert!(!point_in_triangle(&p(0.5, 0.5), &a, &b, &c));
        assert!(!point_in_triangle(&b, &a, &b, &c));
        assert!(!point_in_triangle(&c, &a, &b, &c));
    }

    #[test]
    fn test_degenerate_triangle_never_contains() {
        let a = p(0.0, 0.0);
        let b = p(1.0, 0.0);
        let c = p(2.0, 0.0);
        assert!(!point_in_triangle(&p(0.5, 0.0), &a, &b, &c));
        assert!(!point_in_triangle(&a, &a, &a, &a));
    }

    #[test]
    fn test_quad_halves() {
        let (a, b, c, d) = (p(-0.5, -0.5), p(0.5, -0.5), p(0.5, 0.5), p(-0.5, 0.5));
        // Covered by a, b, c only.
        assert!(point_in_quad(&p(0.3, -0.2), &a, &b, &c, &d));
        // Covered by a, b, d only.
        assert!(point_in_quad(&p(-0.3, -0.2), &a, &b, &c, &d));
        assert!(point_in_quad(&p(0.0, 0.0), &a, &b, &c, &d));
    }

    #[test]
    fn test_quad_upper_wedge_is_not_covered() {
        let (a, b, c, d) = (p(-0.5, -0.5), p(0.5, -0.5), p(0.5, 0.5), p(-0.5, 0.5));
        assert!(!point_in_quad(&p(0.0, 0.4), &a, &b, &c, &d));
    }

    #[test]
    fn test_point_in_face_dispatch() {
        let vertices = vec![p(0.0, 0.0), p(0.0, 1.0), p(1.0, 0.0), p(1.0, 1.0)];
        assert!(point_in_face(
            &p(0.2, 0.2),
            &FaceKind::Triangle([0, 1, 2]),
            &vertices
        ));
        assert!(!point_in_face(
            &p(0.9, 0.9),
            &FaceKind::Triangle([0, 1, 2]),
            &vertices
        ));
    }
}
