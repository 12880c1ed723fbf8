//! Scene types for Prism.
//!
//! A scene is an ordered list of spheres and an ordered list of lights.
//! It is built once, validated, then only read while a frame renders.

use prism_math::{Interval, Vec3};
use thiserror::Error;

use crate::color::Color;

/// Errors raised when a scene is rejected before rendering.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Sphere {index} has non-positive radius {radius}")]
    InvalidRadius { index: usize, radius: f32 },

    #[error("Sphere {index} has reflectivity {reflectivity} outside [0, 1]")]
    InvalidReflectivity { index: usize, reflectivity: f32 },

    #[error("Sphere {index} has non-finite specular exponent {exponent}")]
    InvalidSpecular { index: usize, exponent: f32 },

    #[error("Light {index} has invalid intensity {intensity}")]
    InvalidIntensity { index: usize, intensity: f32 },

    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),

    #[error("No light at index {0}")]
    LightNotFound(usize),

    #[error("Light {0} is not a point light")]
    NotAPointLight(usize),
}

pub type SceneResult<T> = Result<T, SceneError>;

/// A sphere with flat color and Phong-style surface parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct Sphere {
    /// Center in world space
    pub center: Vec3,

    /// Radius, must be > 0
    pub radius: f32,

    /// Base color, multiplied by the light intensity at the hit point
    pub color: Color,

    /// Specular exponent (shininess), `None` for a matte surface
    pub specular: Option<f32>,

    /// Mirror fraction in [0, 1] (0 = fully diffuse, 1 = perfect mirror)
    pub reflectivity: f32,
}

impl Sphere {
    /// Create a matte, non-reflective sphere.
    pub fn new(center: Vec3, radius: f32, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
            specular: None,
            reflectivity: 0.0,
        }
    }

    /// Set the specular exponent.
    pub fn with_specular(mut self, exponent: f32) -> Self {
        self.specular = Some(exponent);
        self
    }

    /// Set the reflectivity.
    pub fn with_reflectivity(mut self, reflectivity: f32) -> Self {
        self.reflectivity = reflectivity;
        self
    }

    /// True if traced rays bounce off this surface.
    pub fn is_reflective(&self) -> bool {
        self.reflectivity > 0.0
    }
}

/// A light source.
///
/// Each kind carries only the fields it uses.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Light {
    /// Uniform light reaching every point regardless of geometry.
    Ambient { intensity: f32 },

    /// Light emitted from a position; casts shadows only from occluders
    /// between the shading point and the light.
    Point { intensity: f32, position: Vec3 },

    /// Light arriving from infinitely far away along `direction`.
    ///
    /// `direction` points from the surface toward the light.
    Directional { intensity: f32, direction: Vec3 },
}

impl Light {
    pub fn ambient(intensity: f32) -> Self {
        Light::Ambient { intensity }
    }

    pub fn point(intensity: f32, position: Vec3) -> Self {
        Light::Point {
            intensity,
            position,
        }
    }

    pub fn directional(intensity: f32, direction: Vec3) -> Self {
        Light::Directional {
            intensity,
            direction,
        }
    }

    /// Intensity of the light, whatever its kind.
    pub fn intensity(&self) -> f32 {
        match *self {
            Light::Ambient { intensity }
            | Light::Point { intensity, .. }
            | Light::Directional { intensity, .. } => intensity,
        }
    }
}

/// A complete scene: spheres and lights.
///
/// Order matters only for tie-breaking: when two spheres are hit at exactly
/// the same distance the one added first wins.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Spheres in insertion order
    pub spheres: Vec<Sphere>,

    /// Lights in insertion order
    pub lights: Vec<Light>,

    /// Scene name, for logging
    pub name: String,
}

impl Scene {
    /// Create an empty scene.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a sphere and return its index.
    pub fn add_sphere(&mut self, sphere: Sphere) -> usize {
        self.spheres.push(sphere);
        self.spheres.len() - 1
    }

    /// Add a light and return its index.
    pub fn add_light(&mut self, light: Light) -> usize {
        self.lights.push(light);
        self.lights.len() - 1
    }

    /// Get sphere count.
    pub fn sphere_count(&self) -> usize {
        self.spheres.len()
    }

    /// Get light count.
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }

    /// Check every sphere and light once, so the tracer never has to.
    ///
    /// Rejects radii <= 0, reflectivity outside [0, 1], non-finite
    /// specular exponents and negative or non-finite intensities.
    pub fn validate(&self) -> SceneResult<()> {
        for (index, sphere) in self.spheres.iter().enumerate() {
            if sphere.radius <= 0.0 || !sphere.radius.is_finite() {
                return Err(SceneError::InvalidRadius {
                    index,
                    radius: sphere.radius,
                });
            }
            if !Interval::UNIT.contains(sphere.reflectivity) {
                return Err(SceneError::InvalidReflectivity {
                    index,
                    reflectivity: sphere.reflectivity,
                });
            }
            if let Some(exponent) = sphere.specular {
                if !exponent.is_finite() {
                    return Err(SceneError::InvalidSpecular { index, exponent });
                }
            }
        }

        for (index, light) in self.lights.iter().enumerate() {
            let intensity = light.intensity();
            if intensity < 0.0 || !intensity.is_finite() {
                return Err(SceneError::InvalidIntensity { index, intensity });
            }
        }

        log::debug!(
            "Scene '{}' validated: {} spheres, {} lights",
            self.name,
            self.sphere_count(),
            self.light_count()
        );
        Ok(())
    }

    /// Move a point light by `offset`.
    ///
    /// Takes `&mut self`, so it can only run between frames, never while a
    /// render holds the scene.
    pub fn translate_light(&mut self, index: usize, offset: Vec3) -> SceneResult<()> {
        match self.lights.get_mut(index) {
            Some(Light::Point { position, .. }) => {
                *position += offset;
                Ok(())
            }
            Some(_) => Err(SceneError::NotAPointLight(index)),
            None => Err(SceneError::LightNotFound(index)),
        }
    }

    /// Three glossy spheres on a large yellow floor, lit by ambient, point
    /// and directional lights.
    pub fn demo() -> Self {
        let mut scene = Scene::new("demo");

        scene.add_sphere(
            Sphere::new(Vec3::new(0.0, -1.0, 3.0), 1.0, Color::RED)
                .with_specular(500.0)
                .with_reflectivity(0.2),
        );
        scene.add_sphere(
            Sphere::new(Vec3::new(2.0, 0.0, 4.0), 1.0, Color::BLUE)
                .with_specular(500.0)
                .with_reflectivity(0.3),
        );
        scene.add_sphere(
            Sphere::new(Vec3::new(-2.0, 0.0, 4.0), 1.0, Color::GREEN)
                .with_specular(10.0)
                .with_reflectivity(0.4),
        );
        // Floor
        scene.add_sphere(
            Sphere::new(Vec3::new(0.0, -5001.0, 0.0), 5000.0, Color::YELLOW)
                .with_specular(1000.0)
                .with_reflectivity(0.5),
        );

        scene.add_light(Light::ambient(0.2));
        scene.add_light(Light::point(0.6, Vec3::new(0.0, 1.0, 2.0)));
        scene.add_light(Light::directional(0.2, Vec3::new(1.0, 4.0, 4.0)));

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_creation() {
        let mut scene = Scene::new("test");

        let first = scene.add_sphere(Sphere::new(Vec3::Z, 1.0, Color::RED));
        let second = scene.add_sphere(Sphere::new(Vec3::X, 0.5, Color::BLUE));
        let light = scene.add_light(Light::ambient(0.5));

        assert_eq!((first, second, light), (0, 1, 0));
        assert_eq!(scene.sphere_count(), 2);
        assert_eq!(scene.light_count(), 1);
        assert_eq!(scene.name, "test");
    }

    #[test]
    fn test_sphere_builders() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, Color::GREEN)
            .with_specular(10.0)
            .with_reflectivity(0.25);

        assert_eq!(sphere.specular, Some(10.0));
        assert_eq!(sphere.reflectivity, 0.25);
        assert!(sphere.is_reflective());
        assert!(!Sphere::new(Vec3::ZERO, 1.0, Color::RED).is_reflective());
    }

    #[test]
    fn test_light_intensity() {
        assert_eq!(Light::ambient(0.2).intensity(), 0.2);
        assert_eq!(Light::point(0.6, Vec3::ONE).intensity(), 0.6);
        assert_eq!(Light::directional(0.1, Vec3::Y).intensity(), 0.1);
    }

    #[test]
    fn test_demo_scene_is_valid() {
        let scene = Scene::demo();
        assert_eq!(scene.sphere_count(), 4);
        assert_eq!(scene.light_count(), 3);
        assert_eq!(scene.validate(), Ok(()));

        let total: f32 = scene.lights.iter().map(Light::intensity).sum();
        assert!((total - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_validate_rejects_bad_radius() {
        for radius in [0.0, -1.0, f32::NAN] {
            let mut scene = Scene::new("bad");
            scene.add_sphere(Sphere::new(Vec3::Z, 1.0, Color::RED));
            scene.add_sphere(Sphere::new(Vec3::Z, radius, Color::RED));

            match scene.validate() {
                Err(SceneError::InvalidRadius { index, .. }) => assert_eq!(index, 1),
                other => panic!("expected InvalidRadius, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_validate_rejects_bad_reflectivity() {
        let mut scene = Scene::new("bad");
        scene.add_sphere(Sphere::new(Vec3::Z, 1.0, Color::RED).with_reflectivity(1.5));
        assert_eq!(
            scene.validate(),
            Err(SceneError::InvalidReflectivity {
                index: 0,
                reflectivity: 1.5
            })
        );

        scene.spheres[0].reflectivity = -0.1;
        assert!(scene.validate().is_err());

        // Both ends of the range are fine
        scene.spheres[0].reflectivity = 1.0;
        assert!(scene.validate().is_ok());
        scene.spheres[0].reflectivity = 0.0;
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_specular() {
        let mut scene = Scene::new("bad");
        scene.add_sphere(Sphere::new(Vec3::Z, 1.0, Color::RED).with_specular(f32::INFINITY));
        assert!(matches!(
            scene.validate(),
            Err(SceneError::InvalidSpecular { index: 0, .. })
        ));

        // -1 is a legitimate exponent now that "no specular" is None
        scene.spheres[0].specular = Some(-1.0);
        assert!(scene.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_intensity() {
        let mut scene = Scene::new("bad");
        scene.add_light(Light::ambient(0.3));
        scene.add_light(Light::point(-0.5, Vec3::ZERO));

        assert_eq!(
            scene.validate(),
            Err(SceneError::InvalidIntensity {
                index: 1,
                intensity: -0.5
            })
        );
    }

    #[test]
    fn test_translate_point_light() {
        let mut scene = Scene::demo();
        scene.translate_light(1, Vec3::new(0.0, 0.5, 0.0)).unwrap();

        assert_eq!(scene.lights[1], Light::point(0.6, Vec3::new(0.0, 1.5, 2.0)));
    }

    #[test]
    fn test_translate_non_point_light() {
        let mut scene = Scene::demo();
        assert_eq!(
            scene.translate_light(0, Vec3::Y),
            Err(SceneError::NotAPointLight(0))
        );
        assert_eq!(
            scene.translate_light(9, Vec3::Y),
            Err(SceneError::LightNotFound(9))
        );
    }

    #[test]
    fn test_error_messages() {
        let err = SceneError::InvalidRadius {
            index: 2,
            radius: -1.0,
        };
        assert_eq!(err.to_string(), "Sphere 2 has non-positive radius -1");
    }
}
