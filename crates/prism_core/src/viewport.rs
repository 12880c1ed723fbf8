//! Viewport configuration: the window in pixels and the projection plane in
//! world units.

use crate::scene::{SceneError, SceneResult};

/// Window and projection-plane setup, fixed for a rendering session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportConfig {
    /// Output width in pixels
    pub window_width: u32,
    /// Output height in pixels
    pub window_height: u32,
    /// Projection plane width in world units
    pub viewport_width: f32,
    /// Projection plane height in world units
    pub viewport_height: f32,
    /// Distance from the eye to the projection plane
    pub distance: f32,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            window_width: 640,
            window_height: 640,
            viewport_width: 1.0,
            viewport_height: 1.0,
            distance: 1.0,
        }
    }
}

impl ViewportConfig {
    /// Set window resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.window_width = width;
        self.window_height = height;
        self
    }

    /// Set the projection plane size and its distance from the eye.
    pub fn with_plane(mut self, width: f32, height: f32, distance: f32) -> Self {
        self.viewport_width = width;
        self.viewport_height = height;
        self.distance = distance;
        self
    }

    /// Total pixel count.
    pub fn pixel_count(&self) -> usize {
        self.window_width as usize * self.window_height as usize
    }

    /// Reject empty windows and degenerate projection planes.
    pub fn validate(&self) -> SceneResult<()> {
        if self.window_width == 0 || self.window_height == 0 {
            return Err(SceneError::InvalidViewport(format!(
                "window is {}x{}",
                self.window_width, self.window_height
            )));
        }

        let plane = [
            ("viewport width", self.viewport_width),
            ("viewport height", self.viewport_height),
            ("distance", self.distance),
        ];
        for (name, value) in plane {
            if value <= 0.0 || !value.is_finite() {
                return Err(SceneError::InvalidViewport(format!("{} is {}", name, value)));
            }
        }

        Ok(())
    }
}
