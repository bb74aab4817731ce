//! Column renderer
//! One ray per screen strip, fisheye corrected, flat gray shading by depth.

use crate::player::Pose;
use crate::world::TileMap;
use super::cast::cast_ray;
use super::framebuffer::Framebuffer;
use super::types::{Color, RenderSettings};

/// Keeps the projection finite when a ray hits at zero depth
pub const DEPTH_EPSILON: f32 = 0.0001;

/// One projected wall column
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub angle: f32,
    /// Radial distance returned by the cast
    pub raw_depth: f32,
    /// Planar (fisheye corrected) distance
    pub depth: f32,
    /// On-screen wall height in pixels
    pub height: f32,
    pub shade: u8,
}

/// World angle of ray `ray` for a viewer facing `facing`
pub fn ray_angle(facing: f32, ray: usize, settings: &RenderSettings) -> f32 {
    facing - settings.half_fov() + ray as f32 * settings.fov / settings.num_rays as f32
}

/// Cosine of the ray's offset from the view direction
pub fn fisheye_factor(facing: f32, angle: f32) -> f32 {
    (facing - angle).cos()
}

/// Projected wall height for a corrected depth
pub fn wall_height(depth: f32, settings: &RenderSettings) -> f32 {
    settings.projection_coefficient() / (depth + DEPTH_EPSILON)
}

/// Near walls bright, far walls dark
pub fn depth_shade(depth: f32, max_depth: u32) -> u8 {
    let v = 255.0 - depth / max_depth as f32 * 255.0;
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, 255.0) as u8
}

/// Cast every ray for the current pose, left to right
pub fn cast_columns(map: &TileMap, pose: &Pose, settings: &RenderSettings) -> Vec<Column> {
    let origin = pose.position();
    (0..settings.num_rays)
        .map(|ray| {
            let angle = ray_angle(pose.angle, ray, settings);
            let raw_depth = cast_ray(map, origin, angle, settings.max_depth, settings.march);
            let depth = raw_depth * fisheye_factor(pose.angle, angle);
            Column {
                angle,
                raw_depth,
                depth,
                height: wall_height(depth, settings),
                shade: depth_shade(depth, settings.max_depth),
            }
        })
        .collect()
}

/// Horizontal pixel span `[x0, x1)` covered by strip `ray`
pub fn strip_span(ray: usize, num_rays: usize, width: usize) -> (usize, usize) {
    if num_rays == 0 {
        return (0, 0);
    }
    (ray * width / num_rays, (ray + 1) * width / num_rays)
}

/// Draw the background and wall strips into the framebuffer
pub fn render_frame(fb: &mut Framebuffer, map: &TileMap, pose: &Pose, settings: &RenderSettings) {
    let horizon = fb.height / 2;
    fb.fill_rect(0, 0, fb.width, horizon, settings.sky);
    fb.fill_rect(0, horizon, fb.width, fb.height, settings.ground);

    let columns = cast_columns(map, pose, settings);
    for (ray, column) in columns.iter().enumerate() {
        let (x0, x1) = strip_span(ray, settings.num_rays, fb.width);
        fb.draw_centered_strip(x0, x1, column.height, Color::gray(column.shade));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn settings(num_rays: usize) -> RenderSettings {
        RenderSettings { num_rays, ..RenderSettings::default() }
    }

    #[test]
    fn test_ray_angles_span_fov() {
        let s = settings(4);
        let first = ray_angle(1.0, 0, &s);
        let last = ray_angle(1.0, 3, &s);
        assert!((first - (1.0 - s.half_fov())).abs() < 1e-6);
        assert!((last - (1.0 - s.half_fov() + 3.0 * s.fov / 4.0)).abs() < 1e-6);
    }

    #[test]
    fn test_fisheye_identity_on_axis() {
        assert_eq!(fisheye_factor(0.7, 0.7), 1.0);
    }

    #[test]
    fn test_wall_height_finite_at_zero_depth() {
        let s = settings(300);
        let h = wall_height(0.0, &s);
        assert!(h.is_finite() && h > 0.0);
        assert!(wall_height(10.0, &s) > wall_height(100.0, &s));
    }

    #[test]
    fn test_depth_shade() {
        assert_eq!(depth_shade(0.0, 1200), 255);
        assert_eq!(depth_shade(1200.0, 1200), 0);
        assert_eq!(depth_shade(5000.0, 1200), 0);
        assert_eq!(depth_shade(-10.0, 1200), 255);
        assert!(depth_shade(100.0, 1200) > depth_shade(600.0, 1200));
        assert_eq!(depth_shade(f32::NAN, 1200), 0);
    }

    #[test]
    fn test_strip_span_covers_width() {
        let mut covered = 0;
        for ray in 0..300 {
            let (x0, x1) = strip_span(ray, 300, 800);
            assert_eq!(x0, covered);
            covered = x1;
        }
        assert_eq!(covered, 800);
    }

    #[test]
    fn test_center_column_uses_facing_direction() {
        let map = TileMap::parse(&vec!["....."; 5].join("\n"));
        let pose = Pose::new(150.0, 150.0, 0.0);
        let s = settings(2);
        // Ray 1 of 2 points exactly along the facing angle
        let columns = cast_columns(&map, &pose, &s);
        assert_eq!(columns.len(), 2);
        assert!((columns[1].angle - 0.0).abs() < 1e-6);
        assert!((columns[1].depth - 150.0).abs() <= 1.0);
        assert!(columns[0].depth <= columns[0].raw_depth);
    }

    #[test]
    fn test_render_frame_background_and_wall() {
        let map = TileMap::parse("#####\n#...#\n#...#\n#...#\n#####");
        let pose = Pose::new(150.0, 150.0, 0.0);
        let s = settings(40);
        let mut fb = Framebuffer::new(80, 60);
        fb.clear(Color::BLACK);
        render_frame(&mut fb, &map, &pose, &s);

        // Center pixel lands on the wall strip
        let wall = fb.get_pixel(40, 30).unwrap();
        assert_eq!(wall.r, wall.g);
        assert_eq!(wall.g, wall.b);
        assert!(fb.pixels.chunks_exact(4).all(|p| p[3] == 255));
    }

    #[test]
    fn test_render_frame_far_wall_shows_sky_and_ground() {
        let row = format!("#{}#", ".".repeat(18));
        let mut rows = vec!["#".repeat(20)];
        rows.extend(std::iter::repeat(row).take(3));
        rows.push("#".repeat(20));
        let map = TileMap::parse(&rows.join("\n"));
        let pose = Pose::new(90.0, 150.0, 0.0);
        let s = settings(10);
        let mut fb = Framebuffer::new(100, 400);
        render_frame(&mut fb, &map, &pose, &s);

        // Far wall projects to a short strip: corners remain background
        assert_eq!(fb.get_pixel(50, 0), Some(s.sky));
        assert_eq!(fb.get_pixel(50, 399), Some(s.ground));
        assert_eq!(fb.get_pixel(50, 199), Some(Color::gray(31)));
    }

    proptest! {
        #[test]
        fn prop_fisheye_factor_in_unit_range(
            facing in -20.0f32..20.0,
            offset in -0.5f32..0.5,
        ) {
            let s = RenderSettings::default();
            let offset = offset * s.fov * 0.999;
            let factor = fisheye_factor(facing, facing + offset);
            prop_assert!(factor > 0.0);
            prop_assert!(factor <= 1.0);
        }
    }
}
