//! Bucket-based parallel rendering.
//!
//! The image is cut into square tiles (buckets). Each bucket is traced on
//! the rayon pool into its own pixel vector; the calling thread then copies
//! the finished buckets into the image, so no two workers ever share
//! mutable state.

use std::time::Instant;

use prism_core::{Color, Scene};
use rayon::prelude::*;

use crate::camera::Camera;
use crate::renderer::{render_pixel, ImageBuffer, RenderConfig};

/// Default bucket edge length in pixels.
pub const DEFAULT_BUCKET_SIZE: u32 = 64;

/// A rectangular region of the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bucket {
    /// Left column
    pub x: u32,
    /// Top row
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// Position in render order
    pub index: usize,
}

impl Bucket {
    pub fn new(x: u32, y: u32, width: u32, height: u32, index: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
            index,
        }
    }

    pub fn pixel_count(&self) -> u32 {
        self.width * self.height
    }

    /// Squared distance from this bucket's center to `(cx, cy)`.
    fn distance_sq_to(&self, cx: f32, cy: f32) -> f32 {
        let dx = self.x as f32 + self.width as f32 / 2.0 - cx;
        let dy = self.y as f32 + self.height as f32 / 2.0 - cy;
        dx * dx + dy * dy
    }
}

/// Tile a `width x height` image, ordered from the center outward.
///
/// Edge buckets are clipped to the image, so the buckets cover every pixel
/// exactly once. A `bucket_size` of 0 is treated as 1.
pub fn generate_buckets(width: u32, height: u32, bucket_size: u32) -> Vec<Bucket> {
    let size = bucket_size.max(1);

    let mut buckets: Vec<Bucket> = (0..height)
        .step_by(size as usize)
        .flat_map(|y| {
            (0..width).step_by(size as usize).map(move |x| {
                Bucket::new(x, y, size.min(width - x), size.min(height - y), 0)
            })
        })
        .collect();

    // Stable sort keeps raster order among equidistant buckets
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    buckets.sort_by(|a, b| a.distance_sq_to(cx, cy).total_cmp(&b.distance_sq_to(cx, cy)));

    for (i, bucket) in buckets.iter_mut().enumerate() {
        bucket.index = i;
    }

    buckets
}

/// Trace every pixel of a bucket, row-major within the bucket.
pub fn render_bucket(bucket: &Bucket, camera: &Camera, scene: &Scene, config: &RenderConfig) -> Vec<Color> {
    let mut pixels = Vec::with_capacity(bucket.pixel_count() as usize);

    for y in bucket.y..bucket.y + bucket.height {
        for x in bucket.x..bucket.x + bucket.width {
            pixels.push(render_pixel(camera, scene, x, y, config));
        }
    }

    pixels
}

/// A finished bucket.
#[derive(Debug, Clone)]
pub struct BucketResult {
    pub bucket: Bucket,
    /// Row-major within the bucket
    pub pixels: Vec<Color>,
}

impl BucketResult {
    pub fn new(bucket: Bucket, pixels: Vec<Color>) -> Self {
        Self { bucket, pixels }
    }

    /// Copy this bucket's pixels into their place in `image`.
    pub fn write_to(&self, image: &mut ImageBuffer) {
        let rows = self.pixels.chunks(self.bucket.width as usize);
        for (dy, row) in (0..self.bucket.height).zip(rows) {
            for (dx, &color) in (0..self.bucket.width).zip(row) {
                image.set(self.bucket.x + dx, self.bucket.y + dy, color);
            }
        }
    }
}

/// Render the scene across the rayon thread pool.
///
/// Produces exactly the same image as [`crate::render`].
pub fn render_parallel(camera: &Camera, scene: &Scene, config: &RenderConfig) -> ImageBuffer {
    let start = Instant::now();
    let (width, height) = (camera.image_width(), camera.image_height());
    let buckets = generate_buckets(width, height, config.bucket_size);

    log::debug!(
        "Rendering {}x{} in {} buckets of {}px on {} threads",
        width,
        height,
        buckets.len(),
        config.bucket_size,
        rayon::current_num_threads()
    );

    let results: Vec<BucketResult> = buckets
        .par_iter()
        .map(|bucket| BucketResult::new(*bucket, render_bucket(bucket, camera, scene, config)))
        .collect();

    let mut image = ImageBuffer::new(width, height);
    for result in &results {
        result.write_to(&mut image);
    }

    log::debug!("Parallel render of '{}' took {:?}", scene.name, start.elapsed());
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;
    use prism_core::ViewportConfig;

    fn coverage(buckets: &[Bucket], width: u32, height: u32) -> Vec<u32> {
        let mut hits = vec![0u32; (width * height) as usize];
        for b in buckets {
            for y in b.y..b.y + b.height {
                for x in b.x..b.x + b.width {
                    hits[(y * width + x) as usize] += 1;
                }
            }
        }
        hits
    }

    #[test]
    fn test_generate_buckets_exact_fit() {
        let buckets = generate_buckets(128, 128, 64);
        assert_eq!(buckets.len(), 4);

        let total: u32 = buckets.iter().map(|b| b.pixel_count()).sum();
        assert_eq!(total, 128 * 128);
    }

    #[test]
    fn test_generate_buckets_cover_each_pixel_once() {
        let buckets = generate_buckets(100, 37, 16);
        assert!(coverage(&buckets, 100, 37).iter().all(|&n| n == 1));

        // Edge buckets are clipped
        assert!(buckets.iter().any(|b| b.width == 4 && b.height == 5));
    }

    #[test]
    fn test_center_bucket_first() {
        let buckets = generate_buckets(192, 192, 64);
        assert_eq!(buckets.len(), 9);
        assert_eq!((buckets[0].x, buckets[0].y), (64, 64));

        let indices: Vec<usize> = buckets.iter().map(|b| b.index).collect();
        assert_eq!(indices, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn test_zero_bucket_size() {
        let buckets = generate_buckets(3, 2, 0);
        assert_eq!(buckets.len(), 6);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let camera = Camera::new(ViewportConfig::default().with_resolution(50, 30));
        let scene = Scene::demo();
        let config = RenderConfig {
            bucket_size: 7,
            ..Default::default()
        };

        assert_eq!(render_parallel(&camera, &scene, &config), render(&camera, &scene, &config));
    }
}
