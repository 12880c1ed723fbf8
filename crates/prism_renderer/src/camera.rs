//! Camera mapping from pixels to primary rays.
//!
//! The eye sits at a fixed point looking down +Z. Pixels are addressed two
//! ways:
//! - **screen** coordinates: `(0, 0)` top-left, y grows downward, what a
//!   [`crate::PixelSink`] receives
//! - **canvas** coordinates: offsets from the image center, y grows upward,
//!   what the projection works in

use prism_core::ViewportConfig;
use prism_math::{Ray, Vec3};

/// Pinhole camera casting rays through a [`ViewportConfig`] plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    /// Eye position; every primary ray starts here
    pub origin: Vec3,
    /// Window and projection plane
    pub viewport: ViewportConfig,
}

impl Camera {
    /// Create a camera at the world origin.
    pub fn new(viewport: ViewportConfig) -> Self {
        Self {
            origin: Vec3::ZERO,
            viewport,
        }
    }

    /// Set the eye position.
    pub fn with_origin(mut self, origin: Vec3) -> Self {
        self.origin = origin;
        self
    }

    #[inline]
    pub fn image_width(&self) -> u32 {
        self.viewport.window_width
    }

    #[inline]
    pub fn image_height(&self) -> u32 {
        self.viewport.window_height
    }

    /// Direction from the eye through canvas pixel `(x, y)`.
    ///
    /// Not normalized: the z component is always the viewport distance.
    pub fn canvas_to_viewport(&self, x: i32, y: i32) -> Vec3 {
        let vp = &self.viewport;
        Vec3::new(
            x as f32 * vp.viewport_width / vp.window_width as f32,
            y as f32 * vp.viewport_height / vp.window_height as f32,
            vp.distance,
        )
    }

    /// Convert screen pixel `(sx, sy)` to canvas offsets.
    ///
    /// Screen `(w/2, h/2)` is canvas `(0, 0)`; the canvas x range is
    /// `[-w/2, w - 1 - w/2]` and y runs from `h/2` down to `h/2 - (h - 1)`.
    pub fn screen_to_canvas(&self, sx: u32, sy: u32) -> (i32, i32) {
        let half_w = (self.image_width() / 2) as i32;
        let half_h = (self.image_height() / 2) as i32;
        (sx as i32 - half_w, half_h - sy as i32)
    }

    /// Primary ray for screen pixel `(sx, sy)`.
    pub fn primary_ray(&self, sx: u32, sy: u32) -> Ray {
        let (x, y) = self.screen_to_canvas(sx, sy);
        Ray::new(self.origin, self.canvas_to_viewport(x, y))
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(ViewportConfig::default())
    }
}
