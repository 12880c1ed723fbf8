//! Ray/sphere intersection and the nearest-hit query over a scene.

use prism_core::{Scene, Sphere};
use prism_math::{Interval, Ray};

/// Types that can be tested for intersection with a ray.
pub trait Intersect: Send + Sync {
    /// Both parametric distances where the ray crosses the surface, or
    /// `None` if it never does.
    ///
    /// Roots are not filtered by any window; that is the caller's job.
    fn intersect(&self, ray: &Ray) -> Option<(f32, f32)>;
}

impl Intersect for Sphere {
    /// Solve `a·t² + b·t + c = 0` for the ray against the sphere.
    ///
    /// Returns `(t1, t2)` with `t1 = (−b + √disc) / 2a` and
    /// `t2 = (−b − √disc) / 2a`. A zero-length direction (`a == 0`) or a
    /// negative discriminant means no intersection.
    fn intersect(&self, ray: &Ray) -> Option<(f32, f32)> {
        let co = ray.origin - self.center;

        let a = ray.direction.dot(ray.direction);
        if a == 0.0 {
            return None;
        }
        let b = 2.0 * co.dot(ray.direction);
        let c = co.dot(co) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let t1 = (-b + sqrtd) / (2.0 * a);
        let t2 = (-b - sqrtd) / (2.0 * a);
        Some((t1, t2))
    }
}

/// The nearest surface a ray hits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit<'a> {
    /// Sphere that was hit
    pub sphere: &'a Sphere,
    /// Position of the sphere in the scene
    pub index: usize,
    /// Ray parameter of the hit point
    pub t: f32,
}

/// Find the closest sphere whose intersection lies strictly inside `ray_t`.
///
/// Both roots of every sphere are considered. A root only replaces the
/// current best if it is strictly smaller, so on exact ties the sphere
/// that comes first in the scene wins.
pub fn closest_intersection<'a>(ray: &Ray, scene: &'a Scene, ray_t: Interval) -> Option<Hit<'a>> {
    let mut closest: Option<Hit<'a>> = None;
    let mut closest_so_far = ray_t.max;

    for (index, sphere) in scene.spheres.iter().enumerate() {
        let Some((t1, t2)) = sphere.intersect(ray) else {
            continue;
        };

        for t in [t1, t2] {
            if ray_t.surrounds(t) && t < closest_so_far {
                closest_so_far = t;
                closest = Some(Hit { sphere, index, t });
            }
        }
    }

    closest
}
