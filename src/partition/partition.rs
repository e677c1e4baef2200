use super::mask::Mask;
use crate::{
    geometry::{shape::Shape, shape_batch::ShapeBatch},
    helper::axis::CartesianAxis,
};
use glam::DVec3;

/// Masks the shapes on either side of the plane `axis = distance`.
///
/// `near[i]` is true if any corner of shape `i` lies below the plane and `far[i]` if any corner
/// lies above it. Shapes crossing the plane are in both masks, so `near & !far` is strictly
/// near, `far & !near` strictly far and `near & far` straddling. A shape lying exactly in the
/// plane is in neither.
pub fn half_space_masks<S: Shape>(
    batch: &ShapeBatch<S>,
    axis: CartesianAxis,
    distance: f64,
) -> (Mask, Mask) {
    batch
        .iter()
        .map(|shape| {
            any_below_any_above(shape.corners().map(|corner| axis.component(corner)), distance)
        })
        .unzip()
}

/// Masks the shapes inside and outside a sphere, the same way as [`half_space_masks`] using the
/// squared distance of each corner from `center`.
///
/// A shape with every corner exactly on the sphere is in neither mask.
pub fn sphere_masks<S: Shape>(batch: &ShapeBatch<S>, center: DVec3, radius: f64) -> (Mask, Mask) {
    let radius_squared = radius * radius;
    batch
        .iter()
        .map(|shape| {
            any_below_any_above(
                shape.corners().map(|corner| corner.distance_squared(center)),
                radius_squared,
            )
        })
        .unzip()
}

/// Shapes with at least one corner coordinate (on any axis) equal to `±bound`, i.e. touching
/// the boundary of the `[-bound, bound]` cube.
pub fn boundary_mask<S: Shape>(batch: &ShapeBatch<S>, bound: f64) -> Mask {
    batch
        .iter()
        .map(|shape| {
            shape
                .corners()
                .any(|corner| corner.abs().to_array().contains(&bound.abs()))
        })
        .collect()
}

fn any_below_any_above(values: impl Iterator<Item = f64>, threshold: f64) -> (bool, bool) {
    values.fold((false, false), |(below, above), value| {
        (below || value < threshold, above || value > threshold)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{
        box_gen::{make_box_batch, make_skeleton_batch, unit_cube_grid},
        shape::SkeletonBox,
    };

    fn skeletons(mins: &[DVec3], maxs: &[DVec3]) -> ShapeBatch<SkeletonBox> {
        make_skeleton_batch(mins, Some(maxs)).unwrap()
    }

    #[test]
    fn half_space_far_and_straddling() {
        let batch = skeletons(
            &[DVec3::new(0., 2., 0.), DVec3::new(0., -0.5, 0.), DVec3::new(0., -3., 0.)],
            &[DVec3::new(1., 3., 1.), DVec3::new(1., 0.5, 1.), DVec3::new(1., -2., 1.)],
        );
        let (near, far) = half_space_masks(&batch, CartesianAxis::Y, 0.);
        assert_eq!(near, Mask::from(vec![false, true, true]));
        assert_eq!(far, Mask::from(vec![true, true, false]));
    }

    #[test]
    fn half_space_touching_plane_is_not_straddling() {
        // spans y in [0, 1] so only touches the plane from the far side
        let batch = skeletons(&[DVec3::ZERO], &[DVec3::ONE]);
        let (near, far) = half_space_masks(&batch, CartesianAxis::Y, 0.);
        assert_eq!(near.get(0), Some(false));
        assert_eq!(far.get(0), Some(true));

        let (near, far) = half_space_masks(&batch, CartesianAxis::X, 0.5);
        assert_eq!((near.get(0), far.get(0)), (Some(true), Some(true)));
    }

    #[test]
    fn full_boxes_and_skeletons_agree() {
        let mins = unit_cube_grid(-2, 4);
        let full = make_box_batch(&mins, None).unwrap();
        let skeleton = make_skeleton_batch(&mins, None).unwrap();
        assert_eq!(
            half_space_masks(&full, CartesianAxis::Z, 0.5),
            half_space_masks(&skeleton, CartesianAxis::Z, 0.5)
        );
        assert_eq!(
            sphere_masks(&full, DVec3::ZERO, 1.5),
            sphere_masks(&skeleton, DVec3::ZERO, 1.5)
        );
        assert_eq!(boundary_mask(&full, 2.), boundary_mask(&skeleton, 2.));
    }

    #[test]
    fn sphere_inside_outside_and_straddling() {
        let batch = skeletons(
            &[DVec3::splat(-0.25), DVec3::splat(5.), DVec3::splat(-0.5)],
            &[DVec3::splat(0.25), DVec3::splat(6.), DVec3::splat(1.)],
        );
        let (inside, outside) = sphere_masks(&batch, DVec3::ZERO, 1.);
        assert_eq!(inside, Mask::from(vec![true, false, true]));
        assert_eq!(outside, Mask::from(vec![false, true, true]));
    }

    #[test]
    fn shape_on_sphere_is_in_neither_mask() {
        // all 8 corners at distance 3 from the origin
        let batch = skeletons(&[DVec3::new(-1., -2., -2.)], &[DVec3::new(1., 2., 2.)]);
        let (inside, outside) = sphere_masks(&batch, DVec3::ZERO, 3.);
        assert_eq!(inside.count() + outside.count(), 0);
    }

    #[test]
    fn sphere_center_offset() {
        let batch = skeletons(&[DVec3::new(10., 0., 0.)], &[DVec3::new(10.5, 0.5, 0.5)]);
        let (inside, outside) = sphere_masks(&batch, DVec3::new(10., 0., 0.), 1.);
        assert_eq!((inside.get(0), outside.get(0)), (Some(true), Some(false)));
    }

    #[test]
    fn boundary_cubes_of_grid() {
        let mins = unit_cube_grid(-2, 4);
        let batch = make_skeleton_batch(&mins, None).unwrap();
        let boundary = boundary_mask(&batch, 2.);
        // 4^3 cubes minus the 2^3 interior
        assert_eq!(boundary.count(), 64 - 8);
    }
}
