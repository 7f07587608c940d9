//=========================================================================
// Transition Orchestrator
//=========================================================================
//
// Owns the countdown, the deferred fade start and the fade phases, and
// advances the stage selection when a transition begins.
//
// Tick order:
//   1. fade driver      (completion of ToWhite chains ToLevel)
//   2. deferred tasks   (ToWhite cue)
//   3. countdown        (expiry publishes StageReload, returns to Idle)
//
// The countdown never waits on the fade. With fade_to_white greater
// than total_delay the reload fires while the overlay is still fading.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{FadePhase, StageReload, TransitionEvent, TransitionHandle};
use crate::config::TransitionConfig;
use crate::core::fade::{FadeCompleted, FadeOverlay, FadeRequest, FadeRequestId, FadeTarget};
use crate::core::selection::{Selection, SelectionPolicy, SelectionSource, SessionState};
use crate::core::signal_bus::SignalBus;
use crate::core::timing::{Countdown, DeferredScheduler, TaskHandle};
use crate::error::{TransitionError, TransitionResult};

//=== TransitionState =====================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    Idle,
    CountingDown,
}

//=== TransitionOutcome ===================================================

/// Result of a begin request that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// A new transition is counting down.
    Started(TransitionHandle),
    /// Another transition was already in flight; nothing changed.
    Ignored(TransitionHandle),
}

//--- Internal Types ------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FadeCue {
    ToWhite(TransitionHandle),
}

#[derive(Debug, Clone, Copy)]
struct ActivePhase {
    phase: FadePhase,
    request: FadeRequestId,
}

//=== TransitionOrchestrator ==============================================

/// Stage transition state machine.
///
/// Driven entirely by [`tick`](Self::tick); nothing here reads a clock.
pub struct TransitionOrchestrator {
    config: TransitionConfig,
    state: TransitionState,
    handle: Option<TransitionHandle>,
    next_handle: u64,

    countdown: Option<Countdown>,
    scheduler: DeferredScheduler<FadeCue>,
    fade_cue: Option<TaskHandle>,
    fade: FadeOverlay,
    phase: Option<ActivePhase>,

    policy: SelectionPolicy,
    source: Box<dyn SelectionSource>,
    rollback: Option<SessionState>,

    elapsed: Duration,
}

impl TransitionOrchestrator {
    //--- Construction -----------------------------------------------------

    /// Creates an idle orchestrator starting on the source's first stage.
    ///
    /// Fails with `InvalidConfiguration` when the source has no stages.
    pub fn new(
        config: TransitionConfig,
        mut source: Box<dyn SelectionSource>,
    ) -> TransitionResult<Self> {
        config.validate();
        let policy = SelectionPolicy::from_source(source.as_mut())?;

        Ok(Self {
            config,
            state: TransitionState::Idle,
            handle: None,
            next_handle: 0,
            countdown: None,
            scheduler: DeferredScheduler::new(),
            fade_cue: None,
            fade: FadeOverlay::new(),
            phase: None,
            policy,
            source,
            rollback: None,
            elapsed: Duration::ZERO,
        })
    }

    //--- Trigger Surface --------------------------------------------------

    /// Begins a transition to `explicit`, or to a random other stage.
    ///
    /// Ignored while another transition is counting down. On error the
    /// orchestrator stays idle and the selection is unchanged.
    pub fn begin_transition(
        &mut self,
        explicit: Option<Selection>,
        bus: &mut SignalBus,
    ) -> TransitionResult<TransitionOutcome> {
        if let Some(live) = self.handle {
            return Ok(self.ignore(live, bus));
        }

        //--- Step 1: Resolve and commit the next stage -------------------
        let prior = self.policy.state().clone();
        let next = match explicit {
            Some(selection) => self.policy.advance_to(selection).clone(),
            None => self.policy.advance_random(self.source.as_mut())?.clone(),
        };
        self.rollback = Some(prior);

        //--- Step 2: Enter CountingDown ----------------------------------
        let handle = TransitionHandle(self.next_handle);
        self.next_handle += 1;
        self.handle = Some(handle);
        self.state = TransitionState::CountingDown;

        //--- Step 3: Schedule fade and countdown -------------------------
        let offset = self.config.fade_start_offset();
        self.fade_cue = Some(self.scheduler.schedule(offset, FadeCue::ToWhite(handle)));
        self.countdown = Some(Countdown::new(self.config.total_delay()));

        info!(
            "Transition {:?} to '{}' started (reload in {:?}, fade in {:?})",
            handle,
            next.name(),
            self.config.total_delay(),
            offset
        );

        bus.publish(TransitionEvent::Started {
            handle,
            next,
            at: self.elapsed,
        });

        Ok(TransitionOutcome::Started(handle))
    }

    /// Begins a transition to the stage called `name`.
    pub fn begin_transition_named(
        &mut self,
        name: &str,
        bus: &mut SignalBus,
    ) -> TransitionResult<TransitionOutcome> {
        if let Some(live) = self.handle {
            return Ok(self.ignore(live, bus));
        }

        let selection = self
            .source
            .find(name)
            .cloned()
            .ok_or_else(|| TransitionError::invalid_config(format!("unknown stage '{}'", name)))?;

        self.begin_transition(Some(selection), bus)
    }

    fn ignore(&self, live: TransitionHandle, bus: &mut SignalBus) -> TransitionOutcome {
        debug!("Transition {:?} in flight, ignoring begin request", live);
        bus.publish(TransitionEvent::Ignored {
            handle: live,
            at: self.elapsed,
        });
        TransitionOutcome::Ignored(live)
    }

    //--- Update Loop ------------------------------------------------------

    /// Advances the fade, the deferred fade start and the countdown by `dt`.
    pub fn tick(&mut self, dt: Duration, bus: &mut SignalBus) {
        self.elapsed = self.elapsed.saturating_add(dt);

        //--- 1. Fade driver ----------------------------------------------
        if let Some(done) = self.fade.tick(dt) {
            self.on_fade_completed(done, bus);
        }

        //--- 2. Deferred tasks -------------------------------------------
        for due in self.scheduler.advance(dt) {
            match due.task {
                FadeCue::ToWhite(handle) => {
                    debug!("Fade cue for {:?} fired {:?} late", handle, due.overdue);
                    self.fade_cue = None;
                    self.start_phase(FadePhase::ToWhite, due.overdue, bus);
                }
            }
        }

        //--- 3. Countdown ------------------------------------------------
        let expired = self
            .countdown
            .as_mut()
            .map_or(false, |countdown| countdown.tick(dt));

        if expired {
            self.fire_reload(bus);
        }
    }

    //--- Fade Phases ------------------------------------------------------

    /// Starts `phase` with `late_by` of it already elapsed, so a cue that
    /// lands between ticks keeps the fade on its configured timeline.
    fn start_phase(&mut self, phase: FadePhase, late_by: Duration, bus: &mut SignalBus) {
        let request = match phase {
            FadePhase::ToWhite => FadeRequest::new(self.config.fade_to_white(), FadeTarget::Opaque),
            FadePhase::ToLevel => {
                FadeRequest::new(self.config.fade_to_level(), FadeTarget::Transparent)
            }
        };

        let id = self.fade.fade_over_seconds_from(request, late_by);
        self.phase = Some(ActivePhase { phase, request: id });

        debug!("Fade phase {:?} started at {:?}", phase, self.elapsed);
        bus.publish(TransitionEvent::FadeStarted {
            phase,
            at: self.elapsed,
        });
    }

    fn on_fade_completed(&mut self, done: FadeCompleted, bus: &mut SignalBus) {
        let Some(active) = self.phase.filter(|p| p.request == done.request) else {
            debug!("Ignoring completion of untracked fade {:?}", done.request);
            return;
        };
        self.phase = None;

        debug!("Fade phase {:?} completed at {:?}", active.phase, self.elapsed);
        bus.publish(TransitionEvent::FadeCompleted {
            phase: active.phase,
            at: self.elapsed,
        });

        if active.phase == FadePhase::ToWhite {
            self.start_phase(FadePhase::ToLevel, Duration::ZERO, bus);
        }
    }

    //--- Reload -----------------------------------------------------------

    fn fire_reload(&mut self, bus: &mut SignalBus) {
        self.countdown = None;
        self.state = TransitionState::Idle;

        let Some(handle) = self.handle.take() else {
            return;
        };

        let selection = self.policy.active().clone();
        info!(
            "Transition {:?} countdown expired at {:?}, reloading '{}'",
            handle,
            self.elapsed,
            selection.name()
        );

        bus.publish(StageReload);
        bus.publish(TransitionEvent::ReloadRequested {
            handle,
            selection,
            at: self.elapsed,
        });
    }

    /// Rolls the selection back to where it was before the last transition.
    ///
    /// Returns false when there is nothing to roll back.
    pub fn revert_selection(&mut self) -> bool {
        match self.rollback.take() {
            Some(prior) => {
                self.policy.restore(prior);
                true
            }
            None => false,
        }
    }

    /// Drops the rollback snapshot once the reload has been handed off.
    pub fn confirm_selection(&mut self) {
        self.rollback = None;
    }

    //--- Query API --------------------------------------------------------

    pub fn state(&self) -> TransitionState {
        self.state
    }

    pub fn handle(&self) -> Option<TransitionHandle> {
        self.handle
    }

    pub fn is_transitioning(&self) -> bool {
        self.handle.is_some()
    }

    pub fn active(&self) -> &Selection {
        self.policy.active()
    }

    pub fn previous(&self) -> &Selection {
        self.policy.previous()
    }

    pub fn session_state(&self) -> &SessionState {
        self.policy.state()
    }

    pub fn config(&self) -> &TransitionConfig {
        &self.config
    }

    pub fn overlay(&self) -> &FadeOverlay {
        &self.fade
    }

    pub(crate) fn overlay_mut(&mut self) -> &mut FadeOverlay {
        &mut self.fade
    }

    /// Time left until the reload fires, while counting down.
    pub fn time_until_reload(&self) -> Option<Duration> {
        self.countdown.as_ref().map(Countdown::remaining)
    }

    /// Time left until the fade to white starts, if it is still pending.
    pub fn time_until_fade(&self) -> Option<Duration> {
        self.fade_cue.and_then(|cue| self.scheduler.time_until(cue))
    }

    /// Accumulated tick time.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
