//! 8-bit RGBA color.
//!
//! Channels are stored as bytes, but every arithmetic operation happens in
//! `f32` and is clamped back into `[0, 255]` before storage.

use bytemuck::{Pod, Zeroable};
use prism_math::Interval;

/// An 8-bit per channel RGBA color.
///
/// `#[repr(C)]` and `Pod` so a slice of colors can be viewed as raw RGBA
/// bytes without copying.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);

    /// Create a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Multiply r/g/b by a light intensity. Alpha is left untouched.
    pub fn scale(self, intensity: f32) -> Self {
        Self {
            r: to_channel(self.r as f32 * intensity),
            g: to_channel(self.g as f32 * intensity),
            b: to_channel(self.b as f32 * intensity),
            a: self.a,
        }
    }

    /// Linear mix `self * (1 - t) + other * t` on r/g/b.
    ///
    /// `t = 0` returns `self`, `t = 1` returns `other`'s channels with
    /// `self`'s alpha.
    pub fn blend(self, other: Color, t: f32) -> Self {
        let mix = |a: u8, b: u8| to_channel(a as f32 * (1.0 - t) + b as f32 * t);
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: self.a,
        }
    }

    /// Channels as `[r, g, b, a]`.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Color {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

/// Clamp a float channel to [0, 255] and truncate to a byte.
#[inline]
fn to_channel(value: f32) -> u8 {
    // NaN falls through clamp and casts to 0
    Interval::CHANNEL.clamp(value) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_unit_intensity_is_identity() {
        let c = Color::new(12, 200, 255, 128);
        assert_eq!(c.scale(1.0), c);
    }

    #[test]
    fn test_scale_clamps() {
        let c = Color::rgb(200, 100, 0);
        assert_eq!(c.scale(10.0), Color::rgb(255, 255, 0));
        assert_eq!(c.scale(-3.0), Color::rgb(0, 0, 0));
        assert_eq!(c.scale(0.0), Color::BLACK);
        assert_eq!(c.scale(f32::NAN), Color::BLACK);
    }

    #[test]
    fn test_scale_truncates() {
        // 255 * 0.5 = 127.5
        assert_eq!(Color::WHITE.scale(0.5), Color::rgb(127, 127, 127));
    }

    #[test]
    fn test_blend_endpoints() {
        let local = Color::new(255, 0, 0, 255);
        let reflected = Color::new(0, 0, 255, 10);

        assert_eq!(local.blend(reflected, 0.0), local);
        assert_eq!(local.blend(reflected, 1.0), Color::new(0, 0, 255, 255));
    }

    #[test]
    fn test_blend_midpoint() {
        let mixed = Color::rgb(200, 0, 100).blend(Color::rgb(0, 200, 100), 0.5);
        assert_eq!(mixed, Color::rgb(100, 100, 100));
    }

    #[test]
    fn test_pod_layout() {
        let pixels = [Color::new(1, 2, 3, 4), Color::new(5, 6, 7, 8)];
        let bytes: &[u8] = bytemuck::cast_slice(&pixels);
        assert_eq!(bytes, &[1, 2, 3, 4, 5, 6, 7, 8]);
    }
}
