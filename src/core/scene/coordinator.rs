//=========================================================================
// Scene Load Coordinator
//=========================================================================
//
// Saves the player's pose before a reload and puts it back afterwards.
//
// Collaborators are injected references, re-attachable after a reload
// when the host recreates the player or camera.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::SceneLoader;
use crate::core::math::{Pose, Vec3};
use crate::core::pose::{MovementRoot, PoseCache};
use crate::core::selection::Selection;
use crate::error::{TransitionError, TransitionResult};

//=== CameraRig Trait =====================================================

/// Camera that follows the player and must be re-aimed after a reload.
pub trait CameraRig: Send {
    fn adjust_target(&mut self, orientation: Vec3);
}

//=== SceneLoadCoordinator ================================================

/// Carries the player's pose across a scene reload.
pub struct SceneLoadCoordinator {
    poses: PoseCache,
    loader: Box<dyn SceneLoader>,
    movement_root: Option<Box<dyn MovementRoot>>,
    camera: Option<Box<dyn CameraRig>>,
    loading: Option<Selection>,
}

impl SceneLoadCoordinator {
    pub fn new(loader: Box<dyn SceneLoader>) -> Self {
        Self {
            poses: PoseCache::new(),
            loader,
            movement_root: None,
            camera: None,
            loading: None,
        }
    }

    //--- Collaborators ----------------------------------------------------

    /// Attaches the player, replacing any previously attached one.
    pub fn attach_movement_root(&mut self, root: Box<dyn MovementRoot>) {
        if self.movement_root.replace(root).is_some() {
            info!("Movement root replaced");
        }
    }

    pub fn detach_movement_root(&mut self) -> Option<Box<dyn MovementRoot>> {
        self.movement_root.take()
    }

    /// Attaches the camera, replacing any previously attached one.
    pub fn attach_camera(&mut self, camera: Box<dyn CameraRig>) {
        if self.camera.replace(camera).is_some() {
            info!("Camera rig replaced");
        }
    }

    pub fn detach_camera(&mut self) -> Option<Box<dyn CameraRig>> {
        self.camera.take()
    }

    //--- Reload Handling --------------------------------------------------

    /// Captures the player's pose and requests the load of `active`.
    ///
    /// On loader failure the captured pose is discarded again.
    pub fn on_reload(&mut self, active: &Selection) -> TransitionResult<()> {
        let root = self
            .movement_root
            .as_deref()
            .ok_or_else(|| TransitionError::precondition("no movement root attached at reload"))?;

        let pose = self.poses.capture(root);
        info!("Storing pose {:?} before loading '{}'", pose, active.name());

        if let Err(e) = self.loader.load_scene(active.scene()) {
            self.poses.discard();
            return Err(e);
        }

        self.loading = Some(active.clone());
        Ok(())
    }

    /// Restores the stored pose once the new scene is ready.
    ///
    /// The camera is re-aimed before the player is moved. A missing camera
    /// is logged and skipped.
    pub fn on_scene_loaded(&mut self) -> TransitionResult<Pose> {
        let root = self.movement_root.as_deref_mut().ok_or_else(|| {
            TransitionError::precondition("no movement root attached after scene load")
        })?;

        let pending = self
            .poses
            .peek()
            .ok_or_else(|| TransitionError::precondition("scene loaded without a stored pose"))?;

        match self.camera.as_deref_mut() {
            Some(camera) => camera.adjust_target(pending.orientation),
            None => warn!("No camera rig attached, skipping re-target"),
        }

        let pose = self.poses.restore(root)?;

        if let Some(stage) = self.loading.take() {
            info!("Stage '{}' loaded, pose restored to {:?}", stage.name(), pose);
        }

        Ok(pose)
    }

    //--- Query API --------------------------------------------------------

    /// Stage whose load was requested but not yet confirmed.
    pub fn loading(&self) -> Option<&Selection> {
        self.loading.as_ref()
    }

    pub fn has_pending_pose(&self) -> bool {
        self.poses.has_snapshot()
    }

    pub fn has_movement_root(&self) -> bool {
        self.movement_root.is_some()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::selection::SceneRef;
    use std::sync::{Arc, Mutex};

    //--- Fakes ------------------------------------------------------------

    #[derive(Clone, Default)]
    struct Log(Arc<Mutex<Vec<String>>>);

    impl Log {
        fn push(&self, entry: String) {
            self.0.lock().unwrap().push(entry);
        }

        fn entries(&self) -> Vec<String> {
            self.0.lock().unwrap().clone()
        }
    }

    struct Player {
        pose: Arc<Mutex<Pose>>,
        log: Log,
    }

    impl MovementRoot for Player {
        fn pose(&self) -> Pose {
            *self.pose.lock().unwrap()
        }

        fn set_pose(&mut self, pose: Pose) {
            self.log.push("player.set_pose".to_string());
            *self.pose.lock().unwrap() = pose;
        }
    }

    struct Camera {
        log: Log,
    }

    impl CameraRig for Camera {
        fn adjust_target(&mut self, orientation: Vec3) {
            self.log.push(format!("camera.adjust_target({})", orientation.y));
        }
    }

    struct Loader {
        fail: bool,
        log: Log,
    }

    impl SceneLoader for Loader {
        fn load_scene(&mut self, scene: &SceneRef) -> TransitionResult<()> {
            if self.fail {
                return Err(TransitionError::SceneLoad {
                    scene: scene.to_string(),
                    reason: "rejected".to_string(),
                });
            }
            self.log.push(format!("load({})", scene));
            Ok(())
        }
    }

    fn stage() -> Selection {
        Selection::new("dusk", SceneRef::new("stages/dusk"))
    }

    fn pose() -> Pose {
        Pose::new(Vec3::new(4.0, 1.5, -9.0), Vec3::new(0.0, 135.0, 0.0))
    }

    fn coordinator(fail: bool, log: &Log) -> (SceneLoadCoordinator, Arc<Mutex<Pose>>) {
        let shared = Arc::new(Mutex::new(pose()));
        let mut coord = SceneLoadCoordinator::new(Box::new(Loader {
            fail,
            log: log.clone(),
        }));
        coord.attach_movement_root(Box::new(Player {
            pose: shared.clone(),
            log: log.clone(),
        }));
        coord.attach_camera(Box::new(Camera { log: log.clone() }));
        (coord, shared)
    }

    //--- Tests ------------------------------------------------------------

    #[test]
    fn reload_then_scene_loaded_restores_pose() {
        let log = Log::default();
        let (mut coord, shared) = coordinator(false, &log);

        coord.on_reload(&stage()).unwrap();
        assert_eq!(coord.loading(), Some(&stage()));

        // New scene spawns the player at its own origin
        *shared.lock().unwrap() = Pose::default();

        let restored = coord.on_scene_loaded().unwrap();
        assert_eq!(restored, pose());
        assert_eq!(*shared.lock().unwrap(), pose());
        assert!(coord.loading().is_none());

        assert_eq!(
            log.entries(),
            vec![
                "load(stages/dusk)".to_string(),
                "camera.adjust_target(135)".to_string(),
                "player.set_pose".to_string(),
            ]
        );
    }

    #[test]
    fn camera_is_aimed_before_player_moves() {
        let log = Log::default();
        let (mut coord, _) = coordinator(false, &log);

        coord.on_reload(&stage()).unwrap();
        coord.on_scene_loaded().unwrap();

        let order: Vec<String> = log
            .entries()
            .into_iter()
            .filter(|e| !e.starts_with("load("))
            .collect();
        assert_eq!(order, vec!["camera.adjust_target(135)", "player.set_pose"]);
    }

    #[test]
    fn scene_loaded_without_reload_leaves_camera_alone() {
        let log = Log::default();
        let (mut coord, _) = coordinator(false, &log);

        assert!(coord.on_scene_loaded().is_err());
        assert!(!log.entries().iter().any(|e| e.starts_with("camera")));
    }

    #[test]
    fn reload_without_movement_root_is_a_precondition_violation() {
        let log = Log::default();
        let (mut coord, _) = coordinator(false, &log);
        coord.detach_movement_root();

        let err = coord.on_reload(&stage()).unwrap_err();
        assert!(matches!(err, TransitionError::PreconditionViolation(_)));
        assert!(log.entries().is_empty());
    }

    #[test]
    fn loader_failure_discards_captured_pose() {
        let log = Log::default();
        let (mut coord, _) = coordinator(true, &log);

        assert!(matches!(
            coord.on_reload(&stage()),
            Err(TransitionError::SceneLoad { .. })
        ));
        assert!(!coord.has_pending_pose());
        assert!(coord.loading().is_none());
    }

    #[test]
    fn scene_loaded_without_reload_fails() {
        let log = Log::default();
        let (mut coord, shared) = coordinator(false, &log);

        let err = coord.on_scene_loaded().unwrap_err();
        assert!(matches!(err, TransitionError::PreconditionViolation(_)));
        assert_eq!(*shared.lock().unwrap(), pose());
        assert!(log.entries().is_empty());
    }

    #[test]
    fn missing_camera_still_restores_pose() {
        let log = Log::default();
        let (mut coord, shared) = coordinator(false, &log);
        coord.detach_camera();

        coord.on_reload(&stage()).unwrap();
        *shared.lock().unwrap() = Pose::default();
        coord.on_scene_loaded().unwrap();

        assert_eq!(*shared.lock().unwrap(), pose());
    }
}
