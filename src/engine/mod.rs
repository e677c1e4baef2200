use crate::{config::SceneKind, geometry::error::GeometryResult};
use visualization::Visualization;

pub mod cube_of_cubes;
/// Interaction loop entry point
pub mod engine;
pub mod lava_drop;
pub mod settings;
pub mod view_state;
pub mod visualization;

/// Builds the geometry of the chosen scene
pub fn new_visualization(kind: SceneKind) -> GeometryResult<Box<dyn Visualization>> {
    let visualization: Box<dyn Visualization> = match kind {
        SceneKind::CubeOfCubes => Box::new(cube_of_cubes::CubeOfCubes::new()?),
        SceneKind::LavaDrop => Box::new(lava_drop::LavaDrop::new()?),
    };
    Ok(visualization)
}
