//=========================================================================
// Pose Cache
//=========================================================================
//
// Holds the player's pose across a scene reload.
//
// Flow:
//   reload signal → capture(root) → [scene loads] → restore(root)
//
// One snapshot, not a history. Restoring consumes it.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::math::Pose;
use crate::error::{TransitionError, TransitionResult};

//=== MovementRoot Trait ==================================================

/// The player entity whose pose survives a transition.
///
/// Physics and velocity composition stay with the implementor; the
/// transition only reads and writes the pose.
pub trait MovementRoot: Send {
    fn pose(&self) -> Pose;

    fn set_pose(&mut self, pose: Pose);
}

//=== PoseCache ===========================================================

/// Single-slot pose snapshot.
#[derive(Debug, Default)]
pub struct PoseCache {
    snapshot: Option<Pose>,
}

impl PoseCache {
    pub fn new() -> Self {
        Self { snapshot: None }
    }

    /// Stores the root's current pose, overwriting any earlier snapshot.
    pub fn capture(&mut self, from: &dyn MovementRoot) -> Pose {
        let pose = from.pose();
        if self.snapshot.replace(pose).is_some() {
            debug!("Overwriting unrestored pose snapshot");
        }
        debug!("Captured pose {:?}", pose);
        pose
    }

    /// Writes the snapshot onto `to` and discards it.
    pub fn restore(&mut self, to: &mut dyn MovementRoot) -> TransitionResult<Pose> {
        let pose = self
            .snapshot
            .take()
            .ok_or_else(|| TransitionError::precondition("pose restored before capture"))?;

        to.set_pose(pose);
        debug!("Restored pose {:?}", pose);
        Ok(pose)
    }

    /// The stored snapshot, left in place.
    pub fn peek(&self) -> Option<Pose> {
        self.snapshot
    }

    /// Drops a snapshot that will never be restored.
    pub fn discard(&mut self) -> Option<Pose> {
        self.snapshot.take()
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_some()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Vec3;

    struct Player {
        pose: Pose,
    }

    impl MovementRoot for Player {
        fn pose(&self) -> Pose {
            self.pose
        }

        fn set_pose(&mut self, pose: Pose) {
            self.pose = pose;
        }
    }

    fn sample_pose() -> Pose {
        Pose::new(Vec3::new(12.5, -3.25, 0.1), Vec3::new(0.0, 271.3, 4.0))
    }

    #[test]
    fn capture_then_restore_round_trips_exactly() {
        let mut cache = PoseCache::new();
        let mut player = Player { pose: sample_pose() };

        cache.capture(&player);
        player.pose = Pose::default();

        let restored = cache.restore(&mut player).unwrap();
        assert_eq!(restored, sample_pose());
        assert_eq!(player.pose, sample_pose());
    }

    #[test]
    fn restore_without_capture_is_a_precondition_violation() {
        let mut cache = PoseCache::new();
        let mut player = Player { pose: sample_pose() };

        let err = cache.restore(&mut player).unwrap_err();
        assert!(matches!(err, TransitionError::PreconditionViolation(_)));
        assert_eq!(player.pose, sample_pose());
    }

    #[test]
    fn snapshot_is_consumed_by_restore() {
        let mut cache = PoseCache::new();
        let mut player = Player { pose: sample_pose() };

        cache.capture(&player);
        cache.restore(&mut player).unwrap();

        assert!(!cache.has_snapshot());
        assert!(cache.restore(&mut player).is_err());
    }

    #[test]
    fn capture_overwrites_previous_snapshot() {
        let mut cache = PoseCache::new();
        let mut player = Player { pose: Pose::default() };
        cache.capture(&player);

        player.pose = sample_pose();
        cache.capture(&player);

        player.pose = Pose::default();
        assert_eq!(cache.restore(&mut player).unwrap(), sample_pose());
    }

    #[test]
    fn peek_leaves_snapshot_in_place() {
        let mut cache = PoseCache::new();
        assert_eq!(cache.peek(), None);

        cache.capture(&Player { pose: sample_pose() });
        assert_eq!(cache.peek(), Some(sample_pose()));
        assert!(cache.has_snapshot());
    }

    #[test]
    fn discard_clears_snapshot() {
        let mut cache = PoseCache::new();
        cache.capture(&Player { pose: sample_pose() });
        assert_eq!(cache.discard(), Some(sample_pose()));
        assert!(!cache.has_snapshot());
    }
}
