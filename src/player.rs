//! Player pose and collision-checked movement

use std::f32::consts::FRAC_PI_2;
use crate::world::TileMap;

/// Player position in world units plus facing angle in radians.
///
/// The angle is never normalized; trig functions wrap it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub angle: f32,
}

impl Pose {
    pub fn new(x: f32, y: f32, angle: f32) -> Self {
        Self { x, y, angle }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    /// Unit vector along the facing direction
    pub fn forward(&self) -> (f32, f32) {
        (self.angle.cos(), self.angle.sin())
    }

    /// Unit vector 90 degrees clockwise on screen (the strafe-right direction)
    pub fn right(&self) -> (f32, f32) {
        let a = self.angle + FRAC_PI_2;
        (a.cos(), a.sin())
    }
}

/// Held movement keys for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveIntents {
    pub forward: bool,
    pub backward: bool,
    pub strafe_left: bool,
    pub strafe_right: bool,
}

/// Applies look and movement input to a pose
#[derive(Debug, Clone)]
pub struct PlayerController {
    /// World units per frame for each held direction
    pub speed: f32,
    /// Radians per pixel of horizontal pointer motion
    pub mouse_sensitivity: f32,
}

impl Default for PlayerController {
    fn default() -> Self {
        Self { speed: 5.0, mouse_sensitivity: 0.005 }
    }
}

impl PlayerController {
    pub fn new(speed: f32, mouse_sensitivity: f32) -> Self {
        Self { speed, mouse_sensitivity }
    }

    /// Turn by pointer motion; rotation never collides
    pub fn rotate(&self, pose: &mut Pose, mouse_dx: f32) {
        pose.angle += mouse_dx * self.mouse_sensitivity;
    }

    /// Move by `(dx, dy)` if the destination cell is passable.
    /// Returns whether the move was accepted.
    pub fn try_move(&self, map: &TileMap, pose: &mut Pose, dx: f32, dy: f32) -> bool {
        let nx = pose.x + dx;
        let ny = pose.y + dy;
        if map.is_blocking_at(nx, ny) {
            return false;
        }
        pose.x = nx;
        pose.y = ny;
        true
    }

    /// Forward and strafe displacement in the pose's own frame.
    ///
    /// Each component is collision-checked on its own, forward first, so the
    /// player can slide along a wall when only one component is blocked.
    pub fn step(&self, map: &TileMap, pose: &Pose, forward_delta: f32, strafe_delta: f32) -> Pose {
        let mut next = *pose;
        let (fx, fy) = pose.forward();
        let (rx, ry) = pose.right();
        if forward_delta != 0.0 {
            self.try_move(map, &mut next, fx * forward_delta, fy * forward_delta);
        }
        if strafe_delta != 0.0 {
            self.try_move(map, &mut next, rx * strafe_delta, ry * strafe_delta);
        }
        next
    }

    /// Frame update: rotation, then each held direction in turn
    pub fn update(&self, map: &TileMap, pose: &mut Pose, mouse_dx: f32, intents: MoveIntents) {
        self.rotate(pose, mouse_dx);

        let (fx, fy) = pose.forward();
        let (rx, ry) = pose.right();
        let s = self.speed;
        if intents.forward {
            self.try_move(map, pose, fx * s, fy * s);
        }
        if intents.backward {
            self.try_move(map, pose, -fx * s, -fy * s);
        }
        if intents.strafe_right {
            self.try_move(map, pose, rx * s, ry * s);
        }
        if intents.strafe_left {
            self.try_move(map, pose, -rx * s, -ry * s);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::PI;

    fn cell_map() -> TileMap {
        TileMap::parse("###\n#S#\n###\n")
    }

    fn start_pose(map: &TileMap) -> Pose {
        let (x, y) = map.start_position().unwrap();
        Pose::new(x, y, 0.0)
    }

    #[test]
    fn test_single_cell_rejects_long_moves() {
        let map = cell_map();
        let ctl = PlayerController::default();
        for &(dx, dy) in &[(31.0, 0.0), (-31.0, 0.0), (0.0, 31.0), (0.0, -31.0)] {
            let mut pose = start_pose(&map);
            assert!(!ctl.try_move(&map, &mut pose, dx, dy));
            assert_eq!(pose.position(), (90.0, 90.0));
        }
    }

    #[test]
    fn test_single_cell_allows_short_moves() {
        let map = cell_map();
        let ctl = PlayerController::default();
        let mut pose = start_pose(&map);
        assert!(ctl.try_move(&map, &mut pose, 29.0, 0.0));
        assert_eq!(pose.position(), (119.0, 90.0));
    }

    #[test]
    fn test_rotation_ignores_walls() {
        let map = cell_map();
        let ctl = PlayerController::new(5.0, 0.01);
        let mut pose = start_pose(&map);
        ctl.update(&map, &mut pose, 100.0, MoveIntents::default());
        assert!((pose.angle - 1.0).abs() < 1e-6);
        assert_eq!(pose.position(), (90.0, 90.0));
    }

    #[test]
    fn test_update_moves_forward_and_back() {
        let map = TileMap::parse("#####\n#...#\n#.S.#\n#...#\n#####");
        let ctl = PlayerController::default();
        let mut pose = start_pose(&map);
        ctl.update(&map, &mut pose, 0.0, MoveIntents { forward: true, ..Default::default() });
        assert!((pose.x - 155.0).abs() < 1e-4);

        ctl.update(&map, &mut pose, 0.0, MoveIntents { backward: true, ..Default::default() });
        assert!((pose.x - 150.0).abs() < 1e-4);
    }

    #[test]
    fn test_strafe_directions() {
        let map = TileMap::parse("#####\n#...#\n#.S.#\n#...#\n#####");
        let ctl = PlayerController::default();
        let mut pose = start_pose(&map);
        // Facing +x, strafe right moves toward +y (screen down)
        ctl.update(&map, &mut pose, 0.0, MoveIntents { strafe_right: true, ..Default::default() });
        assert!((pose.y - 155.0).abs() < 1e-4);
        ctl.update(&map, &mut pose, 0.0, MoveIntents { strafe_left: true, ..Default::default() });
        assert!((pose.y - 150.0).abs() < 1e-4);
    }

    #[test]
    fn test_step_slides_along_wall() {
        // Corridor along x, wall directly below
        let map = TileMap::parse("#####\n#...#\n#####");
        let ctl = PlayerController::default();
        let pose = Pose::new(90.0, 80.0, 0.0);
        // Strafe into the wall is rejected, forward part still applies
        let next = ctl.step(&map, &pose, 20.0, 40.0);
        assert!((next.x - 110.0).abs() < 1e-4);
        assert!((next.y - 80.0).abs() < 1e-4);
    }

    #[test]
    fn test_step_does_not_mutate_input() {
        let map = TileMap::parse("#####\n#...#\n#####");
        let ctl = PlayerController::default();
        let pose = Pose::new(90.0, 90.0, PI);
        let next = ctl.step(&map, &pose, 10.0, 0.0);
        assert_eq!(pose.position(), (90.0, 90.0));
        assert!((next.x - 80.0).abs() < 1e-4);
    }

    fn intents_strategy() -> impl Strategy<Value = (f32, MoveIntents)> {
        (-200.0f32..200.0, any::<[bool; 4]>()).prop_map(|(dx, k)| {
            (dx, MoveIntents { forward: k[0], backward: k[1], strafe_left: k[2], strafe_right: k[3] })
        })
    }

    proptest! {
        #[test]
        fn prop_never_enters_blocking_cell(
            speed in 1.0f32..90.0,
            frames in prop::collection::vec(intents_strategy(), 1..60),
        ) {
            let map = TileMap::parse("#######\n#..#..#\n#.S...#\n#..#.##\n#######");
            let ctl = PlayerController::new(speed, 0.01);
            let mut pose = start_pose(&map);
            for (dx, intents) in frames {
                ctl.update(&map, &mut pose, dx, intents);
                prop_assert!(!map.is_blocking_at(pose.x, pose.y));
            }
        }
    }
}
