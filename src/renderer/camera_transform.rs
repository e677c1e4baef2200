use crate::geometry::{shape::Shape, shape_batch::ShapeBatch};
use glam::DMat3;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

/// Rotation taking world space into camera space for the given orbit angles.
///
/// Yaw turns the world about the z axis, then pitch tilts it about the x axis of the turned
/// frame: `R = pitch * yaw`. In camera space x points right, z up and y away from the viewer.
pub fn rotation_matrix(yaw: f64, pitch: f64) -> DMat3 {
    // rows [1, 0, 0], [0, cos, sin], [0, -sin, cos]
    let pitch_matrix = DMat3::from_rotation_x(-pitch);
    // rows [cos, -sin, 0], [sin, cos, 0], [0, 0, 1]
    let yaw_matrix = DMat3::from_rotation_z(yaw);
    pitch_matrix * yaw_matrix
}

/// Rotates batches into camera space, remembering the matrix of the most recent angle pair so
/// frames without camera movement don't rebuild it.
#[derive(Clone, Debug, Default)]
pub struct CameraTransform {
    last_angles: Option<(f64, f64)>,
    last_matrix: DMat3,
}

impl CameraTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotation_matrix(&mut self, yaw: f64, pitch: f64) -> DMat3 {
        if self.last_angles == Some((yaw, pitch)) {
            return self.last_matrix;
        }
        trace!("rebuilding rotation matrix for yaw {yaw} pitch {pitch}");
        self.last_matrix = rotation_matrix(yaw, pitch);
        self.last_angles = Some((yaw, pitch));
        self.last_matrix
    }

    /// Rotates every point and normal of `batch` about the world origin
    pub fn rotate<S: Shape>(
        &mut self,
        batch: &ShapeBatch<S>,
        yaw: f64,
        pitch: f64,
    ) -> ShapeBatch<S> {
        let matrix = self.rotation_matrix(yaw, pitch);
        batch.transformed(&matrix)
    }

    /// The angle pair currently cached, if any
    #[cfg(test)]
    pub fn cached_angles(&self) -> Option<(f64, f64)> {
        self.last_angles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::box_gen::{make_box, make_box_batch};
    use approx::assert_relative_eq;
    use glam::DVec3;
    use std::f64::consts::{FRAC_PI_2, TAU};

    const ANGLES: [(f64, f64); 5] = [
        (0., 0.),
        (1., 0.),
        (0., -0.7),
        (-TAU / 16., -TAU / 16.),
        (5.5, FRAC_PI_2),
    ];

    #[test]
    fn rotation_preserves_length() {
        let vectors = [
            DVec3::new(1., 2., 3.),
            DVec3::new(-10., 0.5, 7.),
            DVec3::new(0., 0., -1.),
        ];
        for (yaw, pitch) in ANGLES {
            let matrix = rotation_matrix(yaw, pitch);
            for v in vectors {
                assert_relative_eq!((matrix * v).length(), v.length(), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn zero_angles_are_identity() {
        assert!(rotation_matrix(0., 0.).abs_diff_eq(DMat3::IDENTITY, 1e-15));
    }

    #[test]
    fn matches_explicit_matrices() {
        let (yaw, pitch) = (0.3_f64, -0.8_f64);
        let yaw_matrix = DMat3::from_cols_array_2d(&[
            [yaw.cos(), -yaw.sin(), 0.],
            [yaw.sin(), yaw.cos(), 0.],
            [0., 0., 1.],
        ])
        .transpose();
        let pitch_matrix = DMat3::from_cols_array_2d(&[
            [1., 0., 0.],
            [0., pitch.cos(), pitch.sin()],
            [0., -pitch.sin(), pitch.cos()],
        ])
        .transpose();
        assert!(rotation_matrix(yaw, pitch).abs_diff_eq(pitch_matrix * yaw_matrix, 1e-12));
    }

    #[test]
    fn positive_pitch_tilts_up_vector_away_from_viewer() {
        // with rows [0, cos, sin] the world z axis gains depth
        let up = rotation_matrix(0., 0.5) * DVec3::Z;
        assert!(up.y > 0.);
    }

    #[test]
    fn cache_holds_most_recent_pair() {
        let mut transform = CameraTransform::new();
        assert_eq!(transform.cached_angles(), None);
        let first = transform.rotation_matrix(0.1, 0.2);
        assert_eq!(transform.cached_angles(), Some((0.1, 0.2)));
        transform.rotation_matrix(0.3, 0.4);
        assert_eq!(transform.cached_angles(), Some((0.3, 0.4)));
        assert_eq!(transform.rotation_matrix(0.1, 0.2), first);
    }

    #[test]
    fn rotates_normals_with_corners() {
        let batch = make_box_batch(&[DVec3::ZERO], None).unwrap();
        let mut transform = CameraTransform::new();
        let rotated = transform.rotate(&batch, 1.1, -0.4);
        let shape = rotated.get(0).unwrap();
        let center = shape.centroid();
        for face in shape.faces {
            assert!(face.normal.dot(face.centroid() - center) > 0.);
        }
        // rotation is about the world origin, not the box center
        let original_center = make_box(DVec3::ZERO, DVec3::ONE).unwrap().centroid();
        assert_relative_eq!(center.length(), original_center.length(), epsilon = 1e-12);
        assert!(center.distance(original_center) > 0.1);
    }
}
