use crate::config;
use glam::DVec2;
#[allow(unused_imports)]
use log::{debug, error, info, trace, warn};
use std::f64::consts::{FRAC_PI_2, TAU};

/// Orbit camera looking at the world origin from a fixed direction given by yaw and pitch.
/// Zoom scales the orthogonal projection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraState {
    zoom: f64,
    /// Radians in [0, TAU)
    yaw: f64,
    /// Radians in [-PI/2, PI/2]
    pitch: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(config::INITIAL_ZOOM, config::INITIAL_YAW, config::INITIAL_PITCH)
    }
}

// Public functions
impl CameraState {
    /// Yaw is wrapped, pitch clamped. A non-positive or non-finite zoom falls back to
    /// [`config::INITIAL_ZOOM`].
    pub fn new(zoom: f64, yaw: f64, pitch: f64) -> Self {
        let zoom = if zoom.is_finite() && zoom > 0. {
            zoom
        } else {
            config::INITIAL_ZOOM
        };
        Self {
            zoom,
            yaw: wrap_yaw(yaw),
            pitch: clamp_pitch(pitch),
        }
    }

    /// Changes the viewing angles based on the pixel amount the pointer has moved.
    /// `sensitivity` is pixels per radian.
    pub fn rotate(&mut self, delta_cursor_position: DVec2, sensitivity: f64) {
        let delta_angle = delta_cursor_position / sensitivity;
        if !delta_angle.is_finite() {
            debug!("ignoring non-finite camera rotation {delta_angle}");
            return;
        }
        self.yaw = wrap_yaw(self.yaw + delta_angle.x);
        self.pitch = clamp_pitch(self.pitch - delta_angle.y);
    }

    /// Multiplies zoom by `1 + scroll_delta * sensitivity`. Returns false without changing
    /// anything if that factor isn't positive or the clamped zoom ends up unchanged.
    pub fn scroll_zoom(&mut self, scroll_delta: f64, sensitivity: f64) -> bool {
        let factor = 1. + scroll_delta * sensitivity;
        if !factor.is_finite() || factor <= 0. {
            debug!("rejecting zoom factor {factor} from scroll delta {scroll_delta}");
            return false;
        }
        let new_zoom = (self.zoom * factor).clamp(config::MIN_ZOOM, config::MAX_ZOOM);
        if new_zoom == self.zoom {
            return false;
        }
        self.zoom = new_zoom;
        true
    }

    // Getters

    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn yaw(&self) -> f64 {
        self.yaw
    }

    pub fn pitch(&self) -> f64 {
        self.pitch
    }
}

fn wrap_yaw(yaw: f64) -> f64 {
    if yaw.is_finite() {
        yaw.rem_euclid(TAU)
    } else {
        0.
    }
}

fn clamp_pitch(pitch: f64) -> f64 {
    if pitch.is_finite() {
        pitch.clamp(-FRAC_PI_2, FRAC_PI_2)
    } else {
        0.
    }
}
