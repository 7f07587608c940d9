//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use aetheric_transition::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine host
pub use crate::engine::{Engine, EngineBuilder, HostCommand};

// Configuration and errors
pub use crate::config::TransitionConfig;
pub use crate::error::{TransitionError, TransitionResult};

// Session
pub use crate::core::session::{Adoption, Session, SessionGuard};

// Collaborator seams
pub use crate::core::pose::MovementRoot;
pub use crate::core::scene::{CameraRig, ChannelSceneLoader, SceneLoader, SceneRequest};
pub use crate::core::selection::{SceneRef, Selection, SelectionSource, StagePool};

// Values and events
pub use crate::core::input::KeyCode;
pub use crate::core::math::{Pose, Vec3};
pub use crate::core::transition::{TransitionEvent, TransitionOutcome};
