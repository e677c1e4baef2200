use glam::{DMat3, DVec3};

pub const FACE_CORNER_COUNT: usize = 4;

/// A planar quad with an outward unit normal. Corners are wound anti-clockwise when viewed
/// from the side the normal points to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Face {
    pub corners: [DVec3; FACE_CORNER_COUNT],
    pub normal: DVec3,
}

impl Face {
    /// Computes the normal from the winding of `corners`
    pub fn new(corners: [DVec3; FACE_CORNER_COUNT]) -> Self {
        let normal = compute_normal(&corners);
        Self { corners, normal }
    }

    #[cfg(test)]
    pub fn centroid(&self) -> DVec3 {
        self.corners.iter().sum::<DVec3>() / FACE_CORNER_COUNT as f64
    }

    /// Applies `matrix` to the corners and the normal
    pub fn transformed(&self, matrix: &DMat3) -> Self {
        Self {
            corners: self.corners.map(|corner| *matrix * corner),
            normal: *matrix * self.normal,
        }
    }

    /// Smallest coordinate of any corner along the `axis_index` component
    pub fn min_component(&self, axis_index: usize) -> f64 {
        self.corners
            .iter()
            .map(|corner| corner[axis_index])
            .fold(f64::INFINITY, f64::min)
    }
}

/// Unit normal of a flat surface of at least three points, right-handed to the winding order.
///
/// Uses the edges from the first point to the second and to the last point. If the points are
/// collinear (or there are fewer than 3) the result is NaN in every component. Callers passing
/// arbitrary polygons must check [`DVec3::is_finite`] on the result.
pub fn compute_normal(points: &[DVec3]) -> DVec3 {
    if points.len() < 3 {
        return DVec3::NAN;
    }
    let first = points[0];
    let edge_a = points[1] - first;
    let edge_b = points[points.len() - 1] - first;
    let normal = edge_a.cross(edge_b);
    // not `normalize()` which asserts on zero length with debug-glam-assert
    normal / normal.length()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn anti_clockwise_square_points_up() {
        let square = [
            DVec3::new(0., 0., 0.),
            DVec3::new(2., 0., 0.),
            DVec3::new(2., 2., 0.),
            DVec3::new(0., 2., 0.),
        ];
        let normal = compute_normal(&square);
        assert_relative_eq!(normal.z, 1.);
        assert_relative_eq!(normal.length(), 1.);
    }

    #[test]
    fn reversed_winding_flips_normal() {
        let square = [
            DVec3::new(0., 2., 0.),
            DVec3::new(2., 2., 0.),
            DVec3::new(2., 0., 0.),
            DVec3::new(0., 0., 0.),
        ];
        assert_relative_eq!(compute_normal(&square).z, -1.);
    }

    #[test]
    fn collinear_points_give_nan() {
        let line = [
            DVec3::new(0., 0., 0.),
            DVec3::new(1., 1., 1.),
            DVec3::new(2., 2., 2.),
        ];
        let normal = compute_normal(&line);
        assert!(normal.is_nan());
        assert!(compute_normal(&line[..2]).is_nan());
    }

    #[test]
    fn min_component_picks_closest_corner() {
        let face = Face::new([
            DVec3::new(0., 3., 0.),
            DVec3::new(1., 5., 0.),
            DVec3::new(1., 5., 1.),
            DVec3::new(0., 3., 1.),
        ]);
        assert_eq!(face.min_component(1), 3.);
        assert_relative_eq!(face.centroid().y, 4.);
    }
}
