//! Prism Renderer - CPU ray tracing for sphere scenes.
//!
//! A recursive (Whitted-style) ray tracer: every pixel casts one ray
//! through the viewport plane, the nearest sphere is shaded with ambient,
//! diffuse and specular light plus hard shadows, and reflective surfaces
//! blend in a recursively traced mirror ray up to a fixed depth.
//!
//! Tracing is a pure function of the scene, camera and pixel, so frames can
//! be rendered sequentially into any [`PixelSink`] or in parallel buckets
//! with rayon.

mod bucket;
mod camera;
mod intersect;
mod lighting;
mod renderer;
mod tracer;

pub use bucket::{generate_buckets, render_bucket, render_parallel, Bucket, BucketResult, DEFAULT_BUCKET_SIZE};
pub use camera::Camera;
pub use intersect::{closest_intersection, Hit, Intersect};
pub use lighting::compute_lighting;
pub use renderer::{
    render, render_frame, render_into, render_pixel, ImageBuffer, PixelSink, RenderConfig,
    RenderError, RenderResult,
};
pub use tracer::{trace_ray, SURFACE_EPSILON};

/// Re-export scene and math types so callers need only this crate
pub use prism_core::{Color, Light, Scene, SceneError, Sphere, ViewportConfig};
pub use prism_math::{Interval, Ray, Vec3};
