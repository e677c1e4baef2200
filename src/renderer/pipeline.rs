use super::{color::Color, surface::DrawCall};
use crate::{
    config,
    geometry::{face::Face, shape::BoxShape, shape_batch::ShapeBatch},
    partition::mask::Mask,
};
use glam::{DVec2, DVec3};
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};

// ~~ Shading ~~

/// Maps `dot(normal, light)` in [-1, 1] to a brightness weight via `(dot + bias) / range`,
/// clamped to [0, 1]. A bias above 1 keeps faces turned away from the light visible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadeParams {
    pub bias: f64,
    pub range: f64,
}

impl Default for ShadeParams {
    fn default() -> Self {
        Self {
            bias: config::SHADE_BIAS,
            range: config::SHADE_RANGE,
        }
    }
}

pub fn shade(base_color: Color, normal: DVec3, light_direction: DVec3, params: ShadeParams) -> Color {
    let weight = ((normal.dot(light_direction) + params.bias) / params.range).clamp(0., 1.);
    base_color.scaled(weight)
}

// ~~ Culling, Ordering & Projection ~~

/// Whether a camera space normal points towards the viewer
#[inline]
pub fn is_front_facing(normal: DVec3) -> bool {
    config::DEPTH_AXIS.component(normal) < 0.
}

/// Back face culling for orthogonal projection. NaN normals are never front facing.
pub fn front_face_mask(normals: impl IntoIterator<Item = DVec3>) -> Mask {
    normals.into_iter().map(is_front_facing).collect()
}

/// Indices of `faces` sorted by the depth of each face's closest corner, farthest first.
///
/// This is the painter's algorithm and only gives correct overlap for convex shapes that don't
/// intersect each other, which axis-aligned unit cubes satisfy.
pub fn draw_order(faces: &[Face]) -> Vec<usize> {
    let depth_index = config::DEPTH_AXIS.index();
    let closest: Vec<f64> = faces
        .iter()
        .map(|face| face.min_component(depth_index))
        .collect();
    let mut order: Vec<usize> = (0..faces.len()).collect();
    order.sort_by(|a, b| closest[*b].total_cmp(&closest[*a]));
    order
}

/// Orthogonal projection of a camera space point onto the screen. The two axes orthogonal to
/// depth are scaled by `zoom`, up is flipped to match screen rows and the origin lands in the
/// middle.
pub fn project_point(point: DVec3, zoom: f64, screen_size: [u32; 2]) -> DVec2 {
    let screen_center = DVec2::new((screen_size[0] / 2) as f64, (screen_size[1] / 2) as f64);
    let right = config::SCREEN_RIGHT_AXIS.component(point);
    let up = config::SCREEN_UP_AXIS.component(point);
    DVec2::new(right, -up) * zoom + screen_center
}

pub fn project(face: &Face, zoom: f64, screen_size: [u32; 2]) -> [DVec2; 4] {
    face.corners
        .map(|corner| project_point(corner, zoom, screen_size))
}

// ~~ Rasterizer ~~

/// Turns camera space boxes into an ordered list of shaded screen polygons
#[derive(Clone, Copy, Debug)]
pub struct Rasterizer {
    pub screen_size: [u32; 2],
    pub light_direction: DVec3,
    pub shade_params: ShadeParams,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self {
            screen_size: config::SCREEN_SIZE,
            light_direction: config::LIGHT_DIRECTION,
            shade_params: ShadeParams::default(),
        }
    }
}

impl Rasterizer {
    /// Culls, shades, depth sorts and projects the faces of `rotated` (already in camera space).
    /// Draw calls are returned in the order they must be painted. Degenerate faces are passed
    /// through.
    pub fn draw_calls(&self, rotated: &ShapeBatch<BoxShape>, base_color: Color, zoom: f64) -> Vec<DrawCall> {
        if rotated.is_empty() {
            return Vec::new();
        }
        let faces: Vec<Face> = rotated
            .iter()
            .flat_map(|shape| shape.faces.iter().copied())
            .collect();

        let front_faces = front_face_mask(faces.iter().map(|face| face.normal));
        let visible: Vec<Face> = faces
            .into_iter()
            .zip(front_faces.iter())
            .filter_map(|(face, front)| front.then_some(face))
            .collect();

        let colors: Vec<Color> = visible
            .iter()
            .map(|face| shade(base_color, face.normal, self.light_direction, self.shade_params))
            .collect();

        let draw_calls: Vec<DrawCall> = draw_order(&visible)
            .into_iter()
            .map(|i| DrawCall {
                polygon: project(&visible[i], zoom, self.screen_size),
                color: colors[i],
            })
            .collect();

        trace!(
            "rasterized {} shapes into {} draw calls",
            rotated.len(),
            draw_calls.len()
        );
        draw_calls
    }
}
