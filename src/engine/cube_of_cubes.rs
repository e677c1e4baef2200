use super::visualization::{FrameContext, Layer, Visualization};
use crate::{
    config,
    geometry::{
        box_gen::{make_box, make_box_batch, make_skeleton_batch, unit_cube_grid},
        error::GeometryResult,
        shape::{BoxShape, SkeletonBox},
        shape_batch::ShapeBatch,
    },
    partition::{
        mask::Mask,
        partition::{boundary_mask, half_space_masks, sphere_masks},
    },
};
use glam::DVec3;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

pub const LAYER_BIG_BOX: &str = "big box";
pub const LAYER_CUT_AWAY: &str = "cut-away";
pub const LAYER_SPHERE_SHELL: &str = "sphere shell";
pub const LAYER_PLANE_SLICE: &str = "plane slice";

const TOGGLE_NAMES: &[&str] = &[LAYER_CUT_AWAY, LAYER_SPHERE_SHELL, LAYER_PLANE_SLICE];

/// Cross-section of the unit cubes inside a larger cube volume, e.g. for seeing which blocks a
/// spherical blast of radius 7 reaches.
///
/// The big box is drawn solid first. On top of it:
/// 1. boundary cubes strictly in front of the camera plane through the origin are drawn fully
///    transparent, cutting the front half away
/// 2. cubes behind the plane that cross the sphere: `far & inside & outside`
/// 3. cubes crossing the plane that aren't strictly inside the sphere:
///    `near & far & !(inside & !outside)`
pub struct CubeOfCubes {
    big_box: ShapeBatch<BoxShape>,
    small_cubes: ShapeBatch<BoxShape>,
    test_cubes: ShapeBatch<SkeletonBox>,
    /// Boundary cubes, expanded to cover the big box's edges
    sides: ShapeBatch<BoxShape>,
    test_sides: ShapeBatch<SkeletonBox>,
    sphere_inside: Mask,
    sphere_outside: Mask,
}

impl CubeOfCubes {
    pub fn new() -> GeometryResult<Self> {
        Self::with_size(config::CUBE_OF_CUBES_HALF_EXTENT, config::PARTITION_SPHERE_RADIUS)
    }

    /// Cubes filling `[-half_extent, half_extent]^3`, partitioned by a sphere of `radius`
    pub fn with_size(half_extent: i32, radius: f64) -> GeometryResult<Self> {
        let bound = half_extent as f64;
        let big_box = ShapeBatch::new(vec![make_box(DVec3::splat(-bound), DVec3::splat(bound))?]);

        let min_corners = unit_cube_grid(-half_extent, 2 * half_extent.unsigned_abs());
        let small_cubes = make_box_batch(&min_corners, None)?;
        let test_cubes = make_skeleton_batch(&min_corners, None)?;

        let boundary = boundary_mask(&test_cubes, bound);
        let mut sides = small_cubes.select(&boundary);
        sides.expand_boundary(bound, config::BOUNDARY_EXPANSION);
        let test_sides = test_cubes.select(&boundary);

        let (sphere_inside, sphere_outside) = sphere_masks(&test_cubes, DVec3::ZERO, radius);

        info!(
            "built cube of cubes: {} cubes, {} on the boundary, {} crossing the sphere",
            small_cubes.len(),
            sides.len(),
            (&sphere_inside & &sphere_outside).count()
        );
        debug!(
            "cut-away plane is perpendicular to the camera space {} axis",
            config::DEPTH_AXIS
        );

        Ok(Self {
            big_box,
            small_cubes,
            test_cubes,
            sides,
            test_sides,
            sphere_inside,
            sphere_outside,
        })
    }
}

impl Visualization for CubeOfCubes {
    fn name(&self) -> &'static str {
        "cube of cubes"
    }

    fn toggle_names(&self) -> &'static [&'static str] {
        TOGGLE_NAMES
    }

    fn layers(&self, context: &mut FrameContext) -> Vec<Layer> {
        let (yaw, pitch) = (context.camera.yaw(), context.camera.pitch());

        // the plane is in camera space so these change with every camera move
        let rotated_cubes = context.transform.rotate(&self.test_cubes, yaw, pitch);
        let (cubes_near, cubes_far) = half_space_masks(&rotated_cubes, config::DEPTH_AXIS, 0.);
        let rotated_sides = context.transform.rotate(&self.test_sides, yaw, pitch);
        let (sides_near, sides_far) = half_space_masks(&rotated_sides, config::DEPTH_AXIS, 0.);

        let mut layers = vec![context.draw(LAYER_BIG_BOX, &self.big_box, config::CUBE_COLOR)];

        if context.toggles.is_enabled(0) {
            let cut_away = self.sides.select(&(&sides_near & &!&sides_far));
            layers.push(context.draw(LAYER_CUT_AWAY, &cut_away, config::ERASE_COLOR));
        }
        if context.toggles.is_enabled(1) {
            let shell_mask = &(&cubes_far & &self.sphere_inside) & &self.sphere_outside;
            let shell = self.small_cubes.select(&shell_mask);
            layers.push(context.draw(LAYER_SPHERE_SHELL, &shell, config::CUBE_COLOR));
        }
        if context.toggles.is_enabled(2) {
            let strictly_inside = &self.sphere_inside & &!&self.sphere_outside;
            let slice_mask = &(&cubes_near & &cubes_far) & &!&strictly_inside;
            let slice = self.small_cubes.select(&slice_mask);
            layers.push(context.draw(LAYER_PLANE_SLICE, &slice, config::CUBE_COLOR));
        }

        layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        engine::{
            view_state::VisibilityToggles,
            visualization::frame_draw_calls,
        },
        renderer::{camera_transform::CameraTransform, pipeline::Rasterizer},
        user_interface::camera::CameraState,
    };

    fn render(scene: &CubeOfCubes, toggles: &VisibilityToggles) -> Vec<Layer> {
        let camera = CameraState::default();
        let mut transform = CameraTransform::new();
        let rasterizer = Rasterizer::default();
        scene.layers(&mut FrameContext {
            camera: &camera,
            toggles,
            transform: &mut transform,
            rasterizer: &rasterizer,
        })
    }

    #[test]
    fn scene_statistics() {
        let scene = CubeOfCubes::with_size(4, 3.).unwrap();
        assert_eq!(scene.small_cubes.len(), 512);
        assert_eq!(scene.test_cubes.len(), 512);
        assert_eq!(scene.sides.len(), 512 - 216);
        assert_eq!(scene.sides.len(), scene.test_sides.len());
        assert_eq!(scene.sphere_inside.len(), 512);
    }

    #[test]
    fn sides_are_expanded_outwards() {
        let scene = CubeOfCubes::with_size(2, 1.).unwrap();
        let max = scene
            .sides
            .iter()
            .flat_map(|s| s.faces)
            .flat_map(|f| f.corners)
            .map(|c| c.x)
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(max, 2. * config::BOUNDARY_EXPANSION);
    }

    #[test]
    fn every_layer_draws_at_initial_camera() {
        let scene = CubeOfCubes::with_size(6, 4.).unwrap();
        let toggles = VisibilityToggles::new(scene.toggle_names());
        let layers = render(&scene, &toggles);
        let names: Vec<&str> = layers.iter().map(|l| l.name).collect();
        assert_eq!(
            names,
            vec![LAYER_BIG_BOX, LAYER_CUT_AWAY, LAYER_SPHERE_SHELL, LAYER_PLANE_SLICE]
        );
        for layer in &layers {
            assert!(!layer.draw_calls.is_empty(), "layer {} is empty", layer.name);
        }
        // big box shows 3 faces from a corner view
        assert_eq!(layers[0].draw_calls.len(), 3);
        assert!(layers[1]
            .draw_calls
            .iter()
            .all(|d| d.color == config::ERASE_COLOR));
    }

    #[test]
    fn toggle_removes_only_its_layer() {
        let scene = CubeOfCubes::with_size(6, 4.).unwrap();
        let all_on = VisibilityToggles::new(scene.toggle_names());
        let mut sphere_off = all_on.clone();
        // digit key 2
        sphere_off.toggle(1);

        let full = render(&scene, &all_on);
        let reduced = render(&scene, &sphere_off);

        let expected: Vec<_> = full
            .iter()
            .filter(|layer| layer.name != LAYER_SPHERE_SHELL)
            .cloned()
            .collect();
        assert_eq!(reduced, expected);

        let full_calls = frame_draw_calls(&full).count();
        let reduced_calls = frame_draw_calls(&reduced).count();
        assert_eq!(full_calls - reduced_calls, full[2].draw_calls.len());
    }
}
