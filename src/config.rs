use crate::{helper::axis::CartesianAxis, renderer::color::Color};
use glam::DVec3;
use log::LevelFilter;
use std::f64::consts::TAU;

pub const APP_NAME: &str = "Cubeslice";

/// Environment variables that can be used to configure the app
#[allow(non_snake_case)]
pub mod ENV {
    /// Selects the visualization. See [`super::SceneKind::from_env_value`]
    pub const SCENE: &str = "CUBESLICE_SCENE";
    /// Set to a file path to render one frame to a png instead of opening a window
    pub const SNAPSHOT: &str = "CUBESLICE_SNAPSHOT";
    /// Overrides [`super::DEFAULT_LOG_LEVEL`] e.g. "trace"
    pub const LOG_LEVEL: &str = "CUBESLICE_LOG";
}

/// Log level filter. Log messages with lower levels than this will not be displayed.
#[cfg(debug_assertions)]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;
#[cfg(not(debug_assertions))]
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

// ~~ Window ~~

/// Window and framebuffer size in pixels
pub const SCREEN_SIZE: [u32; 2] = [1200, 900];
pub const BACKGROUND_COLOR: Color = Color::rgb(240., 240., 240.);
/// How often the window is polled for input while waiting for the next event
pub const INPUT_POLL_HZ: u64 = 120;

// ~~ Camera ~~

/// Camera space axis pointing right on the screen
pub const SCREEN_RIGHT_AXIS: CartesianAxis = CartesianAxis::X;
/// Camera space axis pointing up the screen. Matches world space up when pitch is 0.
pub const SCREEN_UP_AXIS: CartesianAxis = CartesianAxis::Z;
/// Camera space axis pointing away from the viewer. Larger values are farther away.
pub const DEPTH_AXIS: CartesianAxis = CartesianAxis::Y;

pub const INITIAL_ZOOM: f64 = 30.;
pub const INITIAL_YAW: f64 = -TAU / 16.;
pub const INITIAL_PITCH: f64 = -TAU / 16.;

/// Pointer pixels per radian of yaw/pitch
pub const DEFAULT_LOOK_SENSITIVITY: f64 = TAU * 20.;
/// Zoom factor change per scroll wheel click
pub const DEFAULT_SCROLL_ZOOM_SENSITIVITY: f64 = 0.15;
pub const MIN_ZOOM: f64 = 0.5;
pub const MAX_ZOOM: f64 = 2000.;

// ~~ Shading ~~

/// Direction the light shines *from*, normalized
pub const LIGHT_DIRECTION: DVec3 = DVec3::new(
    1. / 1.445683229480096,
    -0.3 / 1.445683229480096,
    1. / 1.445683229480096,
);
/// Added to `dot(normal, light)` before dividing by [`SHADE_RANGE`]
pub const SHADE_BIAS: f64 = 1.2;
pub const SHADE_RANGE: f64 = 2.2;

// ~~ Scenes ~~

pub const CUBE_COLOR: Color = Color::rgb(160., 200., 255.);
pub const LAVA_COLOR: Color = Color::rgb(150., 200., 230.);
/// Fully transparent, erases canvas pixels it is drawn over
pub const ERASE_COLOR: Color = Color::rgba(0., 0., 0., 0.);

/// Half the edge length of the cube of cubes volume
pub const CUBE_OF_CUBES_HALF_EXTENT: i32 = 10;
pub const PARTITION_SPHERE_RADIUS: f64 = 7.;
/// Boundary cubes are scaled outwards by this much so they cover the big cube's edges
pub const BOUNDARY_EXPANSION: f64 = 1.003;

/// Which visualization to run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SceneKind {
    #[default]
    CubeOfCubes,
    LavaDrop,
}

impl SceneKind {
    pub fn from_env_value(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "cube-of-cubes" | "cubes" => Some(Self::CubeOfCubes),
            "lava-drop" | "lava" => Some(Self::LavaDrop),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn light_direction_is_normalized() {
        assert_relative_eq!(LIGHT_DIRECTION.length(), 1., epsilon = 1e-12);
        let expected = DVec3::new(1., -0.3, 1.) / 2.09_f64.sqrt();
        assert_relative_eq!(LIGHT_DIRECTION.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(LIGHT_DIRECTION.y, expected.y, epsilon = 1e-12);
    }

    #[test]
    fn scene_kind_parsing() {
        assert_eq!(SceneKind::from_env_value("lava"), Some(SceneKind::LavaDrop));
        assert_eq!(
            SceneKind::from_env_value(" Cube-Of-Cubes "),
            Some(SceneKind::CubeOfCubes)
        );
        assert_eq!(SceneKind::from_env_value("teapot"), None);
    }
}
