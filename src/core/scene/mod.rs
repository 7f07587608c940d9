//=========================================================================
// Scene Loading
//=========================================================================
//
// Consumes the reload signal and carries the player across the load.
//
// Flow:
//   StageReload → on_reload(active)  → capture pose → SceneLoader::load_scene
//   [host loads scene]
//   scene loaded → on_scene_loaded() → CameraRig::adjust_target → restore pose
//
//=========================================================================

//=== Module Declarations =================================================

mod coordinator;
mod loader;

//=== Public API ==========================================================

pub use coordinator::{CameraRig, SceneLoadCoordinator};
pub use loader::{ChannelSceneLoader, SceneLoader, SceneRequest};
