//=========================================================================
// Core Systems
//
// Everything the stage transition needs, independent of the host loop.
//
// Dependency order (leaves first):
//   timing, math, signal_bus
//     → fade, pose, selection
//       → transition (orchestrator)
//         → scene (load coordinator), pause, input
//           → session (composition + guard)
//
// Notes:
// Nothing in here owns a thread or reads a clock. Time enters only as the
// `dt` passed to each `tick`.
//
//=========================================================================

//=== Public Modules ======================================================

pub mod fade;
pub mod input;
pub mod math;
pub mod pause;
pub mod pose;
pub mod scene;
pub mod selection;
pub mod session;
pub mod signal_bus;
pub mod timing;
pub mod transition;

//=== Persistence =========================================================

/// Whether an object survives a scene reload.
///
/// The crate only records the flag. The host reads it when it tears down a
/// scene and keeps `Persistent` objects alive across the load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Persistence {
    /// Destroyed with the scene that created it.
    SceneLocal,
    /// Carried across reloads by the live session.
    Persistent,
}

//=== Re-exports ==========================================================

pub use input::KeyCode;
pub use math::{Pose, Vec3};
pub use session::{Adoption, Session, SessionGuard, SessionId};
pub use transition::{TransitionEvent, TransitionOutcome};
