use super::visualization::{FrameContext, Layer, Visualization};
use crate::{
    config,
    geometry::{
        box_gen::{center_unit_cubes, make_box_batch, make_skeleton_batch},
        error::GeometryResult,
        shape::{BoxShape, SkeletonBox},
        shape_batch::ShapeBatch,
    },
    partition::partition::half_space_masks,
};
use glam::DVec3;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

pub const LAYER_LAVA: &str = "lava";

/// Unit cube positions of a small lava droplet
const DROPLET: [[i32; 3]; 13] = [
    [2, 2, 2],
    [1, 2, 2],
    [3, 2, 2],
    [2, 1, 2],
    [2, 3, 2],
    [2, 2, 1],
    [2, 2, 3],
    [2, 2, 4],
    [2, 2, 6],
    [1, 2, 5],
    [3, 2, 5],
    [2, 1, 5],
    [2, 3, 5],
];

/// A shape made of unit cubes, cut in half by the camera plane so its inside is visible.
pub struct LavaDrop {
    cubes: ShapeBatch<BoxShape>,
    test_cubes: ShapeBatch<SkeletonBox>,
}

impl LavaDrop {
    pub fn new() -> GeometryResult<Self> {
        let positions: Vec<DVec3> = DROPLET
            .iter()
            .map(|p| DVec3::new(p[0] as f64, p[1] as f64, p[2] as f64))
            .collect();
        Self::from_unit_cubes(&positions)
    }

    /// Centers the cubes on the origin so the camera orbits around their middle
    pub fn from_unit_cubes(min_corners: &[DVec3]) -> GeometryResult<Self> {
        let centered = center_unit_cubes(min_corners);
        let cubes = make_box_batch(&centered, None)?;
        let test_cubes = make_skeleton_batch(&centered, None)?;
        info!("built lava drop from {} cubes", cubes.len());
        Ok(Self { cubes, test_cubes })
    }
}

impl Visualization for LavaDrop {
    fn name(&self) -> &'static str {
        "lava drop"
    }

    fn toggle_names(&self) -> &'static [&'static str] {
        &[]
    }

    fn layers(&self, context: &mut FrameContext) -> Vec<Layer> {
        let rotated = context
            .transform
            .rotate(&self.test_cubes, context.camera.yaw(), context.camera.pitch());
        let (_, far) = half_space_masks(&rotated, config::DEPTH_AXIS, 0.);
        let visible = self.cubes.select(&far);
        vec![context.draw(LAYER_LAVA, &visible, config::LAVA_COLOR)]
    }
}
