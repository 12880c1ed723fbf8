//! Frame driver.
//!
//! Walks the image in raster order, traces one primary ray per pixel and
//! hands each color to a [`PixelSink`]. Also provides the in-memory
//! [`ImageBuffer`] sink and PNG export.

use std::path::Path;
use std::time::Instant;

use image::{ColorType, ImageFormat};
use prism_core::{Color, Scene, SceneError};
use prism_math::Interval;
use thiserror::Error;

use crate::camera::Camera;
use crate::tracer::trace_ray;

/// Errors that can occur while rendering or saving a frame.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Invalid scene: {0}")]
    Scene(#[from] SceneError),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image is {actual_width}x{actual_height}, camera expects {expected_width}x{expected_height}")]
    DimensionMismatch {
        expected_width: u32,
        expected_height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}

pub type RenderResult<T> = Result<T, RenderError>;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Maximum number of mirror bounces per primary ray
    pub max_depth: u32,
    /// Color returned when a ray hits nothing
    pub background: Color,
    /// Tile edge length for parallel rendering
    pub bucket_size: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            background: Color::WHITE,
            bucket_size: crate::bucket::DEFAULT_BUCKET_SIZE,
        }
    }
}

/// Receives traced pixels.
///
/// Coordinates are screen space: `(0, 0)` is the top-left corner. A frame
/// delivers every pixel exactly once, in raster order.
pub trait PixelSink {
    fn put_pixel(&mut self, x: u32, y: u32, color: Color);
}

/// Trace the primary ray for screen pixel `(x, y)`.
///
/// Primary rays start at the viewport plane (`t_min` = viewport distance),
/// so geometry between the eye and the plane is not visible.
pub fn render_pixel(camera: &Camera, scene: &Scene, x: u32, y: u32, config: &RenderConfig) -> Color {
    let ray = camera.primary_ray(x, y);
    let ray_t = Interval::from_min(camera.viewport.distance);
    trace_ray(&ray, scene, ray_t, config.max_depth, config)
}

/// Render one frame into `sink`, row by row.
///
/// This is the single-threaded renderer; see [`crate::render_parallel`]
/// for the bucketed version.
pub fn render_frame(camera: &Camera, scene: &Scene, config: &RenderConfig, sink: &mut impl PixelSink) {
    let start = Instant::now();

    for y in 0..camera.image_height() {
        for x in 0..camera.image_width() {
            let color = render_pixel(camera, scene, x, y, config);
            sink.put_pixel(x, y, color);
        }
    }

    log::debug!(
        "Rendered {}x{} frame of '{}' in {:?}",
        camera.image_width(),
        camera.image_height(),
        scene.name,
        start.elapsed()
    );
}

/// Render one frame into an existing buffer, which must match the camera.
pub fn render_into(
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    image: &mut ImageBuffer,
) -> RenderResult<()> {
    image.check_dimensions(camera)?;
    render_frame(camera, scene, config, image);
    Ok(())
}

/// Render the entire scene to a new image buffer.
pub fn render(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let mut image = ImageBuffer::new(camera.image_width(), camera.image_height());
    render_frame(camera, scene, config, &mut image);
    image
}

/// Simple image buffer for storing render output.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with opaque black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        let i = self.index(x, y);
        self.pixels[i] = color;
    }

    /// View the pixels as packed RGBA bytes.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Write the buffer to `path` as an RGBA PNG.
    pub fn save_png(&self, path: impl AsRef<Path>) -> RenderResult<()> {
        let path = path.as_ref();
        image::save_buffer_with_format(
            path,
            self.as_bytes(),
            self.width,
            self.height,
            ColorType::Rgba8,
            ImageFormat::Png,
        )?;
        log::info!("Saved {}x{} image to {}", self.width, self.height, path.display());
        Ok(())
    }

    fn check_dimensions(&self, camera: &Camera) -> RenderResult<()> {
        if self.width != camera.image_width() || self.height != camera.image_height() {
            return Err(RenderError::DimensionMismatch {
                expected_width: camera.image_width(),
                expected_height: camera.image_height(),
                actual_width: self.width,
                actual_height: self.height,
            });
        }
        Ok(())
    }
}

impl PixelSink for ImageBuffer {
    fn put_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.set(x, y, color);
    }
}
