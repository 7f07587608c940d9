//=========================================================================
// Host Commands
//=========================================================================
//
// Commands sent from the host (game code, other threads) to the engine
// loop, and the collector that drains them once per tick.
//
// Architecture:
//   Sender<HostCommand> → collect_frame() → pending commands → TickControl
//
// Bounded draining keeps one noisy producer from starving the tick.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::{info, warn};

//=== Internal Dependencies ===============================================

use crate::core::input::KeyCode;

//=== HostCommand =========================================================

/// Requests the host can make of the running engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostCommand {
    /// Transition to a random stage other than the current one.
    BeginTransition,
    /// Transition to the stage with this name.
    BeginTransitionTo(String),
    /// The scene requested by the last reload has finished loading.
    SceneLoaded,
    /// A key went down this frame.
    KeyPressed(KeyCode),
    /// Stop the engine loop.
    Shutdown,
}

//=== TickControl =========================================================

/// Update loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TickControl {
    Continue,
    Exit,
}

//=== CommandCollector ====================================================

/// Drains host commands with a per-frame bound.
pub(crate) struct CommandCollector {
    receiver: Receiver<HostCommand>,
    pending: Vec<HostCommand>,
}

impl CommandCollector {
    const MAX_COMMANDS_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<HostCommand>) -> Self {
        Self {
            receiver,
            pending: Vec::with_capacity(8),
        }
    }

    /// Collects queued commands. `Shutdown` or a disconnect ends the loop.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.pending.clear();

        while self.pending.len() < Self::MAX_COMMANDS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(HostCommand::Shutdown) => {
                    info!("Shutdown requested");
                    return TickControl::Exit;
                }
                Ok(command) => self.pending.push(command),
                Err(TryRecvError::Disconnected) => {
                    info!("All command senders dropped");
                    return TickControl::Exit;
                }
                Err(TryRecvError::Empty) => break,
            }
        }

        if self.pending.len() >= Self::MAX_COMMANDS_PER_FRAME {
            warn!("Command backlog: deferring the rest to the next frame");
        }

        TickControl::Continue
    }

    /// Takes this frame's commands, leaving the buffer empty.
    pub(crate) fn take_commands(&mut self) -> Vec<HostCommand> {
        std::mem::take(&mut self.pending)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
