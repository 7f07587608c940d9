//=========================================================================
// Stage Transition
//=========================================================================
//
// The countdown/fade state machine and the signals it raises.
//
// States:
//   Idle ──begin_transition()──► CountingDown ──countdown expiry──► Idle
//                                     │
//                                     └─ re-entrant begin: Ignored
//
// Timeline (defaults):
//   0.0s  begin: advance selection, schedule fade, start countdown
//   1.8s  FadeToWhite starts   (total_delay − fade_to_white)
//   2.0s  overlay opaque → FadeToLevel starts; StageReload published
//   3.0s  overlay transparent
//
//=========================================================================

//=== Module Declarations =================================================

mod events;
mod orchestrator;

//=== Public API ==========================================================

pub use events::{FadePhase, StageReload, TransitionEvent, TransitionHandle};
pub use orchestrator::{TransitionOrchestrator, TransitionOutcome, TransitionState};
