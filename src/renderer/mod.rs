pub mod camera_transform;
pub mod color;
pub mod framebuffer;
/// Shading, culling, depth ordering and projection of box faces
pub mod pipeline;
pub mod surface;
