use super::color::Color;
use glam::DVec2;

/// A filled polygon in screen pixels, ready for a [`DisplaySurface`]
#[derive(Clone, Debug, PartialEq)]
pub struct DrawCall {
    pub polygon: [DVec2; 4],
    pub color: Color,
}

/// Somewhere frames can be drawn to. Calls for one frame arrive as `fill_background`, the
/// polygons in painter's order, then `present`.
pub trait DisplaySurface {
    /// Sets the color shown wherever no polygon has been drawn and clears the previous frame
    fn fill_background(&mut self, color: Color);

    /// Fills the convex polygon with corners `points`. Later calls paint over earlier ones.
    fn draw_filled_polygon(&mut self, points: &[DVec2], color: Color);

    fn present(&mut self) -> anyhow::Result<()>;
}

/// Draws one complete frame
pub fn present_frame<'a>(
    surface: &mut impl DisplaySurface,
    background: Color,
    draw_calls: impl IntoIterator<Item = &'a DrawCall>,
) -> anyhow::Result<()> {
    surface.fill_background(background);
    for draw_call in draw_calls {
        surface.draw_filled_polygon(&draw_call.polygon, draw_call.color);
    }
    surface.present()
}
