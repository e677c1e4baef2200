use super::face::Face;
use glam::{DMat3, DVec3};

pub const BOX_FACE_COUNT: usize = 6;
pub const SKELETON_CORNER_COUNT: usize = 8;

/// Common interface of the shape kinds a [`super::shape_batch::ShapeBatch`] can hold.
pub trait Shape: Clone {
    /// Every corner point of the shape. For a full box these are the face corners, so shared
    /// corners repeat.
    fn corners(&self) -> impl Iterator<Item = DVec3> + '_;

    /// Applies a linear transform to every point (and normal) of the shape
    fn transformed(&self, matrix: &DMat3) -> Self;

    /// Applies `f` to every point coordinate. Normals are left untouched.
    fn map_coordinates(&mut self, f: impl Fn(f64) -> f64);
}

// ~~ Box ~~

/// Axis-aligned box made of 6 quad faces with outward normals
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxShape {
    pub faces: [Face; BOX_FACE_COUNT],
}

impl BoxShape {
    #[cfg(test)]
    pub fn centroid(&self) -> DVec3 {
        self.faces.iter().map(|face| face.centroid()).sum::<DVec3>() / BOX_FACE_COUNT as f64
    }
}

impl Shape for BoxShape {
    fn corners(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.faces.iter().flat_map(|face| face.corners.iter().copied())
    }

    fn transformed(&self, matrix: &DMat3) -> Self {
        Self {
            faces: self.faces.map(|face| face.transformed(matrix)),
        }
    }

    fn map_coordinates(&mut self, f: impl Fn(f64) -> f64) {
        for face in self.faces.iter_mut() {
            for corner in face.corners.iter_mut() {
                *corner = DVec3::from_array(corner.to_array().map(&f));
            }
        }
    }
}

// ~~ Skeleton Box ~~

/// Corner-only version of [`BoxShape`] for cheap partition tests. Never rasterized.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SkeletonBox {
    pub corners: [DVec3; SKELETON_CORNER_COUNT],
}

impl Shape for SkeletonBox {
    fn corners(&self) -> impl Iterator<Item = DVec3> + '_ {
        self.corners.iter().copied()
    }

    fn transformed(&self, matrix: &DMat3) -> Self {
        Self {
            corners: self.corners.map(|corner| *matrix * corner),
        }
    }

    fn map_coordinates(&mut self, f: impl Fn(f64) -> f64) {
        for corner in self.corners.iter_mut() {
            *corner = DVec3::from_array(corner.to_array().map(&f));
        }
    }
}
