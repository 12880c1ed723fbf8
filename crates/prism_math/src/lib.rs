// Re-export glam for convenience
pub use glam::*;

// Prism math types
mod interval;
mod ray;
pub use interval::Interval;
pub use ray::Ray;

/// Reflect `v` about the normal `n`: `2·n·(n·v) − v`.
///
/// `v` points away from the surface, so the result does too. Shading uses
/// this with the light vector (specular highlight) and with the reversed
/// incoming direction (mirror bounce).
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    2.0 * n * n.dot(v) - v
}
