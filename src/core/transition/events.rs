//=========================================================================
// Transition Signals
//=========================================================================
//
// Signals published on the SignalBus by the orchestrator and session.
//
//   StageReload      the reload signal itself (no payload)
//   TransitionEvent  diagnostics with timestamps, forwarded to the host
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::math::Pose;
use crate::core::selection::Selection;

//=== TransitionHandle ====================================================

/// Token for the transition currently counting down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionHandle(pub(crate) u64);

impl TransitionHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

//=== FadePhase ===========================================================

/// The two legs of the transition fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FadePhase {
    /// Overlay goes opaque ahead of the reload.
    ToWhite,
    /// Overlay clears to reveal the new stage.
    ToLevel,
}

//=== StageReload =========================================================

/// Broadcast when a transition's countdown expires.
///
/// Observed by the scene load coordinator, which reads the active
/// selection itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageReload;

//=== TransitionEvent =====================================================

/// Diagnostic record of what a transition did and when.
///
/// Timestamps are the orchestrator's accumulated (time-scaled) tick time.
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionEvent {
    Started {
        handle: TransitionHandle,
        next: Selection,
        at: Duration,
    },
    /// A begin request arrived while `handle` was still counting down.
    Ignored {
        handle: TransitionHandle,
        at: Duration,
    },
    FadeStarted {
        phase: FadePhase,
        at: Duration,
    },
    FadeCompleted {
        phase: FadePhase,
        at: Duration,
    },
    ReloadRequested {
        handle: TransitionHandle,
        selection: Selection,
        at: Duration,
    },
    /// The reload could not be carried out; the selection was rolled back.
    ReloadFailed {
        reason: String,
    },
    PoseRestored {
        pose: Pose,
    },
    PauseToggled {
        paused: bool,
    },
}
