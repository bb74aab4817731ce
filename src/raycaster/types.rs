//! Core types for the raycaster

use serde::{Deserialize, Serialize};

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color { r: 0, g: 0, b: 0, a: 255 };
    pub const WHITE: Color = Color { r: 255, g: 255, b: 255, a: 255 };
    /// Ceiling fill
    pub const SKY: Color = Color { r: 135, g: 206, b: 235, a: 255 };
    /// Floor fill
    pub const GROUND: Color = Color { r: 60, g: 60, b: 60, a: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Opaque gray with all channels set to `v`
    pub const fn gray(v: u8) -> Self {
        Self::new(v, v, v)
    }

    /// Convert to [u8; 4] for framebuffer
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Ray marching strategy used by `cast`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RayMarch {
    /// Unit steps along the ray (one world unit per step)
    #[default]
    Fixed,
    /// Exact grid traversal (cell boundary to cell boundary)
    Dda,
}

/// Per-frame projection settings, derived once from the config
#[derive(Debug, Clone)]
pub struct RenderSettings {
    /// Total horizontal field of view in radians
    pub fov: f32,
    /// Rays (columns) cast per frame
    pub num_rays: usize,
    /// Ray length cap in world units
    pub max_depth: u32,
    /// Wall height in world units
    pub wall_height: f32,
    /// How rays are marched
    pub march: RayMarch,
    pub sky: Color,
    pub ground: Color,
}

impl RenderSettings {
    pub fn half_fov(&self) -> f32 {
        self.fov / 2.0
    }

    /// Scalar turning planar depth into on-screen column height
    pub fn projection_coefficient(&self) -> f32 {
        let dist = self.num_rays as f32 / (2.0 * self.half_fov().tan());
        dist * self.wall_height
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            fov: std::f32::consts::FRAC_PI_3,
            num_rays: 300,
            max_depth: 1200,
            wall_height: 60.0,
            march: RayMarch::Fixed,
            sky: Color::SKY,
            ground: Color::GROUND,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_coefficient_default() {
        let settings = RenderSettings::default();
        // 300 / (2 * tan(30deg)) * 60
        let expected = 300.0 / (2.0 * (std::f32::consts::PI / 6.0).tan()) * 60.0;
        assert!((settings.projection_coefficient() - expected).abs() < 0.01);
    }

    #[test]
    fn test_gray() {
        assert_eq!(Color::gray(7).to_bytes(), [7, 7, 7, 255]);
    }
}
