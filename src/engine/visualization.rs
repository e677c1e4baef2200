use super::view_state::VisibilityToggles;
use crate::{
    geometry::{shape::BoxShape, shape_batch::ShapeBatch},
    renderer::{
        camera_transform::CameraTransform, color::Color, pipeline::Rasterizer, surface::DrawCall,
    },
    user_interface::camera::CameraState,
};

/// Draw calls of one named subset of a scene
#[derive(Clone, Debug, PartialEq)]
pub struct Layer {
    pub name: &'static str,
    pub draw_calls: Vec<DrawCall>,
}

/// Flattens layers into the order they are drawn
pub fn frame_draw_calls(layers: &[Layer]) -> impl Iterator<Item = &DrawCall> {
    layers.iter().flat_map(|layer| layer.draw_calls.iter())
}

/// Per frame inputs shared by every layer of a visualization
pub struct FrameContext<'a> {
    pub camera: &'a CameraState,
    pub toggles: &'a VisibilityToggles,
    pub transform: &'a mut CameraTransform,
    pub rasterizer: &'a Rasterizer,
}

impl FrameContext<'_> {
    /// Rotates `batch` into camera space and rasterizes it
    pub fn draw(&mut self, name: &'static str, batch: &ShapeBatch<BoxShape>, color: Color) -> Layer {
        let rotated = self
            .transform
            .rotate(batch, self.camera.yaw(), self.camera.pitch());
        Layer {
            name,
            draw_calls: self.rasterizer.draw_calls(&rotated, color, self.camera.zoom()),
        }
    }
}

/// A scene built from shape batches and partition masks.
///
/// Layers are drawn in the order returned, each one painting over the previous ones. Layers
/// whose toggle is disabled are left out.
pub trait Visualization {
    fn name(&self) -> &'static str;

    /// Names of the toggleable layers. Toggle `i` is switched by digit key `i + 1`.
    fn toggle_names(&self) -> &'static [&'static str];

    fn layers(&self, context: &mut FrameContext) -> Vec<Layer>;
}
