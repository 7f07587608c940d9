//=========================================================================
// Spatial Types
//=========================================================================
//
// Minimal vector and pose types exchanged with the movement root and
// camera collaborators. No arithmetic beyond what the transition needs.
//
//=========================================================================

/// Three-component vector (world units or Euler degrees).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Position and orientation of the player-controlled entity.
///
/// Orientation is stored as Euler angles in degrees, matching what the
/// camera rig expects from `adjust_target`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Vec3,
}

impl Pose {
    pub const fn new(position: Vec3, orientation: Vec3) -> Self {
        Self { position, orientation }
    }
}
