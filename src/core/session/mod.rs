//=========================================================================
// Session
//=========================================================================
//
// Composition of the transition subsystems for one running game, and the
// guard that keeps exactly one of them alive.
//
// Architecture:
//   SessionGuard (owned by Engine)
//     └─ Session
//          ├─ TransitionOrchestrator  (countdown, fade, selection)
//          ├─ SceneLoadCoordinator    (pose across reload)
//          ├─ PauseSurface            (time scale)
//          ├─ InputFrame              (escape poll)
//          └─ SignalBus               (StageReload, TransitionEvent)
//
//=========================================================================

//=== Module Declarations =================================================

mod guard;
mod session;

//=== Public API ==========================================================

pub use guard::{Adoption, SessionGuard};
pub use session::{Session, SessionId};
