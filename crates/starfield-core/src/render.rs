//! The seam to whatever rasterizes the field.

use crate::constants::{FOG_COLOR, FOG_DENSITY, POINT_SIZE};
use crate::field::ParticleField;
use crate::viewport::Viewport;
use crate::visual::Appearance;
use glam::Mat4;

/// Everything a renderer needs to draw one frame besides the positions.
#[derive(Clone, Copy, Debug)]
pub struct FrameView {
    pub view: Mat4,
    pub projection: Mat4,
    pub model: Mat4,
    pub appearance: Appearance,
    pub point_size: f32,
    pub fog_color: [f32; 3],
    pub fog_density: f32,
}

impl FrameView {
    pub fn new(view: Mat4, projection: Mat4, model: Mat4, appearance: Appearance) -> Self {
        Self {
            view,
            projection,
            model,
            appearance,
            point_size: POINT_SIZE,
            fog_color: FOG_COLOR,
            fog_density: FOG_DENSITY,
        }
    }
}

pub trait Renderer {
    type Error;

    /// Match the render surface to a new viewport.
    fn resize(&mut self, viewport: &Viewport);

    /// Replace the GPU-side copy of the star positions.
    fn upload_positions(&mut self, field: &ParticleField);

    fn render(&mut self, frame: &FrameView) -> Result<(), Self::Error>;
}
