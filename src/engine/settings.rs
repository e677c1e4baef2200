use crate::{config, renderer::color::Color};

// ~~ Settings Struct ~~

/// Tunables read by the interaction loop
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    /// Pointer pixels per radian of camera rotation
    pub look_sensitivity: f64,
    /// Zoom factor change per scroll click
    pub scroll_zoom_sensitivity: f64,
    pub background_color: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            look_sensitivity: config::DEFAULT_LOOK_SENSITIVITY,
            scroll_zoom_sensitivity: config::DEFAULT_SCROLL_ZOOM_SENSITIVITY,
            background_color: config::BACKGROUND_COLOR,
        }
    }
}
