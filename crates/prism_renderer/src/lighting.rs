//! Light accumulation at a shading point.
//!
//! Ambient, Lambertian diffuse and Phong specular terms are summed over
//! every light. Non-ambient lights are tested for shadows first and skipped
//! entirely when an occluder is found.

use prism_core::{Light, Scene};
use prism_math::{reflect, Interval, Ray, Vec3};

use crate::intersect::closest_intersection;
use crate::tracer::SURFACE_EPSILON;

/// Total light intensity arriving at `point`.
///
/// - `normal`: unit surface normal at `point`
/// - `view`: vector from `point` toward the viewer
/// - `specular`: shininess exponent, `None` for matte surfaces
///
/// The result is not clamped and may exceed 1.
pub fn compute_lighting(
    scene: &Scene,
    point: Vec3,
    normal: Vec3,
    view: Vec3,
    specular: Option<f32>,
) -> f32 {
    let mut total = 0.0;

    for light in &scene.lights {
        let (light_intensity, to_light, t_max) = match *light {
            Light::Ambient { intensity } => {
                total += intensity;
                continue;
            }
            // t = 1 is the light itself
            Light::Point {
                intensity,
                position,
            } => (intensity, position - point, 1.0),
            Light::Directional {
                intensity,
                direction,
            } => (intensity, direction, f32::INFINITY),
        };

        if in_shadow(scene, point, to_light, t_max) {
            continue;
        }

        // Diffuse
        let n_dot_l = normal.dot(to_light);
        if n_dot_l > 0.0 {
            total += light_intensity * n_dot_l / (normal.length() * to_light.length());
        }

        // Specular
        if let Some(exponent) = specular {
            let r = reflect(to_light, normal);
            let r_dot_v = r.dot(view);
            if r_dot_v > 0.0 {
                total += light_intensity * (r_dot_v / (r.length() * view.length())).powf(exponent);
            }
        }
    }

    total
}

/// True if any sphere sits between `point` and the light along `to_light`.
fn in_shadow(scene: &Scene, point: Vec3, to_light: Vec3, t_max: f32) -> bool {
    let shadow_ray = Ray::new(point, to_light);
    let window = Interval::from_min(SURFACE_EPSILON).with_max(t_max);
    closest_intersection(&shadow_ray, scene, window).is_some()
}
