//! Prism Core - Scene model for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Surface and light types**: `Sphere`, `Light`, `Color`
//! - **Scene container**: `Scene`, with validation run once before rendering
//! - **Viewport setup**: `ViewportConfig`, the projection plane the camera casts through
//!
//! # Example
//!
//! ```
//! use prism_core::{Color, Light, Scene, Sphere};
//! use prism_math::Vec3;
//!
//! let mut scene = Scene::new("single");
//! scene.add_sphere(Sphere::new(Vec3::new(0.0, 0.0, 4.0), 1.0, Color::RED));
//! scene.add_light(Light::ambient(1.0));
//! scene.validate().unwrap();
//! ```

pub mod color;
pub mod scene;
pub mod viewport;

// Re-export commonly used types
pub use color::Color;
pub use scene::{Light, Scene, SceneError, SceneResult, Sphere};
pub use viewport::ViewportConfig;
