//! Recursive ray tracing: nearest hit, local shading, mirror bounces.

use prism_core::{Color, Scene};
use prism_math::{reflect, Interval, Ray};

use crate::intersect::closest_intersection;
use crate::lighting::compute_lighting;
use crate::renderer::RenderConfig;

/// Offset applied to secondary rays so a surface does not hit itself at
/// the point the ray leaves from.
pub const SURFACE_EPSILON: f32 = 0.001;

/// Compute the color seen along a ray.
///
/// Finds the nearest sphere inside `ray_t`, shades it, and if the sphere is
/// reflective and `depth > 0`, blends in the color traced along the mirror
/// direction with `depth - 1`. Rays that escape return
/// `config.background`.
///
/// Stack depth is bounded by `depth + 1` frames.
pub fn trace_ray(ray: &Ray, scene: &Scene, ray_t: Interval, depth: u32, config: &RenderConfig) -> Color {
    let Some(hit) = closest_intersection(ray, scene, ray_t) else {
        return config.background;
    };
    let sphere = hit.sphere;

    let point = ray.at(hit.t);
    let normal = (point - sphere.center).normalize();
    let intensity = compute_lighting(scene, point, normal, -ray.direction, sphere.specular);
    let local = sphere.color.scale(intensity);

    let r = sphere.reflectivity;
    if depth == 0 || r <= 0.0 {
        return local;
    }

    let bounce = Ray::new(point, reflect(-ray.direction, normal));
    let reflected = trace_ray(&bounce, scene, Interval::from_min(SURFACE_EPSILON), depth - 1, config);

    local.blend(reflected, r)
}
