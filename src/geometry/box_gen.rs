use super::{
    error::{GeometryError, GeometryResult},
    face::{Face, FACE_CORNER_COUNT},
    shape::{BoxShape, SkeletonBox, BOX_FACE_COUNT, SKELETON_CORNER_COUNT},
    shape_batch::ShapeBatch,
};
use glam::{BVec3, DVec3};

/// For each face corner, which axes take their coordinate from the max corner (the rest come
/// from the min corner). Each face is wound anti-clockwise seen from outside the box, so the
/// normals computed from it point outwards.
const BOX_FACE_TEMPLATE: [[[bool; 3]; FACE_CORNER_COUNT]; BOX_FACE_COUNT] = [
    // -z
    [
        [false, false, false],
        [false, true, false],
        [true, true, false],
        [true, false, false],
    ],
    // -y
    [
        [false, false, false],
        [true, false, false],
        [true, false, true],
        [false, false, true],
    ],
    // -x
    [
        [false, false, false],
        [false, false, true],
        [false, true, true],
        [false, true, false],
    ],
    // +z
    [
        [true, true, true],
        [false, true, true],
        [false, false, true],
        [true, false, true],
    ],
    // +y
    [
        [true, true, true],
        [true, true, false],
        [false, true, false],
        [false, true, true],
    ],
    // +x
    [
        [true, true, true],
        [true, false, true],
        [true, false, false],
        [true, true, false],
    ],
];

/// Corner order of [`SkeletonBox`]: the -z ring followed by the +z ring.
const SKELETON_TEMPLATE: [[bool; 3]; SKELETON_CORNER_COUNT] = [
    [false, false, false],
    [false, true, false],
    [true, true, false],
    [true, false, false],
    [false, false, true],
    [false, true, true],
    [true, true, true],
    [true, false, true],
];

/// Box spanning `min_corner` to `max_corner` with 6 outward facing quads.
///
/// `max_corner` may equal `min_corner` on some axes, in which case the box is flat on that axis
/// and the faces with no area get NaN normals (which are never front facing).
pub fn make_box(min_corner: DVec3, max_corner: DVec3) -> GeometryResult<BoxShape> {
    validate_corners(min_corner, max_corner)?;
    let faces = BOX_FACE_TEMPLATE
        .map(|face| Face::new(face.map(|axes| pick_corner(axes, min_corner, max_corner))));
    Ok(BoxShape { faces })
}

/// The 8 corners of the box [`make_box`] would generate for the same arguments
pub fn make_skeleton_box(min_corner: DVec3, max_corner: DVec3) -> GeometryResult<SkeletonBox> {
    validate_corners(min_corner, max_corner)?;
    let corners = SKELETON_TEMPLATE.map(|axes| pick_corner(axes, min_corner, max_corner));
    Ok(SkeletonBox { corners })
}

/// Boxes from pairs of min/max corners. With `max_corners` set to `None` every box is a unit
/// cube starting at its min corner.
pub fn make_box_batch(
    min_corners: &[DVec3],
    max_corners: Option<&[DVec3]>,
) -> GeometryResult<ShapeBatch<BoxShape>> {
    batch_from_corners(min_corners, max_corners, make_box)
}

/// Skeleton version of [`make_box_batch`]. Given the same arguments, index `i` of both batches
/// describes the same box.
pub fn make_skeleton_batch(
    min_corners: &[DVec3],
    max_corners: Option<&[DVec3]>,
) -> GeometryResult<ShapeBatch<SkeletonBox>> {
    batch_from_corners(min_corners, max_corners, make_skeleton_box)
}

/// Min corners of a `size`^3 grid of unit cubes starting at `start` on every axis. The x index
/// changes slowest.
pub fn unit_cube_grid(start: i32, size: u32) -> Vec<DVec3> {
    let range = start..start + size as i32;
    let mut corners = Vec::with_capacity((size as usize).pow(3));
    for x in range.clone() {
        for y in range.clone() {
            for z in range.clone() {
                corners.push(DVec3::new(x as f64, y as f64, z as f64));
            }
        }
    }
    corners
}

/// Shifts unit cube min corners so the volume they cover is centered on the origin
pub fn center_unit_cubes(min_corners: &[DVec3]) -> Vec<DVec3> {
    if min_corners.is_empty() {
        return Vec::new();
    }
    let lowest = min_corners.iter().copied().fold(DVec3::INFINITY, DVec3::min);
    let highest = min_corners.iter().copied().fold(DVec3::NEG_INFINITY, DVec3::max) + DVec3::ONE;
    let half_extent = (highest - lowest) / 2.;
    min_corners
        .iter()
        .map(|corner| *corner - lowest - half_extent)
        .collect()
}

// ~~ Private ~~

fn batch_from_corners<S: super::shape::Shape>(
    min_corners: &[DVec3],
    max_corners: Option<&[DVec3]>,
    make: impl Fn(DVec3, DVec3) -> GeometryResult<S>,
) -> GeometryResult<ShapeBatch<S>> {
    match max_corners {
        Some(max_corners) => {
            if max_corners.len() != min_corners.len() {
                return Err(GeometryError::MismatchedCorners {
                    min_count: min_corners.len(),
                    max_count: max_corners.len(),
                });
            }
            min_corners
                .iter()
                .zip(max_corners)
                .map(|(min, max)| make(*min, *max))
                .collect()
        }
        None => min_corners
            .iter()
            .map(|min| make(*min, *min + DVec3::ONE))
            .collect(),
    }
}

fn validate_corners(min_corner: DVec3, max_corner: DVec3) -> GeometryResult<()> {
    if !min_corner.is_finite() {
        return Err(GeometryError::NonFinite(min_corner));
    }
    if !max_corner.is_finite() {
        return Err(GeometryError::NonFinite(max_corner));
    }
    if !max_corner.cmpge(min_corner).all() {
        return Err(GeometryError::InvertedCorners {
            min: min_corner,
            max: max_corner,
        });
    }
    Ok(())
}

#[inline]
fn pick_corner(use_max: [bool; 3], min_corner: DVec3, max_corner: DVec3) -> DVec3 {
    DVec3::select(
        BVec3::new(use_max[0], use_max[1], use_max[2]),
        max_corner,
        min_corner,
    )
}
