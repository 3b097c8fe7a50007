use glam::Vec2;

/// Render-surface size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// `None` while either side is collapsed (minimized window, hidden tab).
    pub fn aspect_ratio(&self) -> Option<f32> {
        (self.width > 0.0 && self.height > 0.0).then(|| self.width / self.height)
    }

    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Offset of a client-space point from the center of the viewport.
    #[inline]
    pub fn center_offset(&self, client_x: f32, client_y: f32) -> Vec2 {
        Vec2::new(client_x, client_y) - self.half_extents()
    }
}
