//=========================================================================
// Session
//=========================================================================
//
// Per-tick pipeline:
//   1. Escape poll      → toggle pause
//   2. Scale dt         → time scale 0 freezes every timer
//   3. Orchestrator     → fade, deferred fade start, countdown
//   4. StageReload      → coordinator captures pose and requests load
//   5. Drain events     → returned to the caller
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use log::{error, info};

//=== Internal Dependencies ===============================================

use crate::config::TransitionConfig;
use crate::core::input::{InputFrame, KeyCode};
use crate::core::math::Pose;
use crate::core::pause::PauseSurface;
use crate::core::pose::MovementRoot;
use crate::core::scene::{CameraRig, SceneLoadCoordinator, SceneLoader};
use crate::core::selection::{Selection, SelectionSource};
use crate::core::signal_bus::SignalBus;
use crate::core::transition::{
    StageReload, TransitionEvent, TransitionOrchestrator, TransitionOutcome,
};
use crate::core::Persistence;
use crate::error::TransitionResult;

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(0);

//=== SessionId ===========================================================

/// Process-unique session identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

//=== Session =============================================================

/// One game's transition stack: orchestrator, scene coordinator and pause.
pub struct Session {
    id: SessionId,
    orchestrator: TransitionOrchestrator,
    coordinator: SceneLoadCoordinator,
    pause: PauseSurface,
    input: InputFrame,
    bus: SignalBus,
}

impl Session {
    //--- Construction -----------------------------------------------------

    /// Builds a session starting on the source's first stage.
    ///
    /// Fails with `InvalidConfiguration` when the source is empty.
    pub fn new(
        config: TransitionConfig,
        source: Box<dyn SelectionSource>,
        loader: Box<dyn SceneLoader>,
    ) -> TransitionResult<Self> {
        let orchestrator = TransitionOrchestrator::new(config, source)?;
        let id = SessionId(NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed));

        info!("Session {:?} created", id);
        Ok(Self {
            id,
            orchestrator,
            coordinator: SceneLoadCoordinator::new(loader),
            pause: PauseSurface::new(),
            input: InputFrame::new(),
            bus: SignalBus::new(),
        })
    }

    pub fn with_movement_root(mut self, root: Box<dyn MovementRoot>) -> Self {
        self.attach_movement_root(root);
        self
    }

    pub fn with_camera(mut self, camera: Box<dyn CameraRig>) -> Self {
        self.attach_camera(camera);
        self
    }

    pub fn attach_movement_root(&mut self, root: Box<dyn MovementRoot>) {
        self.coordinator.attach_movement_root(root);
    }

    pub fn attach_camera(&mut self, camera: Box<dyn CameraRig>) {
        self.coordinator.attach_camera(camera);
    }

    //--- Trigger Surface --------------------------------------------------

    /// Starts a transition to a random stage other than the current one.
    pub fn begin_transition(&mut self) -> TransitionResult<TransitionOutcome> {
        self.orchestrator.begin_transition(None, &mut self.bus)
    }

    /// Starts a transition to `selection`.
    pub fn begin_transition_to(
        &mut self,
        selection: Selection,
    ) -> TransitionResult<TransitionOutcome> {
        self.orchestrator.begin_transition(Some(selection), &mut self.bus)
    }

    /// Starts a transition to the stage called `name`.
    pub fn begin_transition_named(&mut self, name: &str) -> TransitionResult<TransitionOutcome> {
        self.orchestrator.begin_transition_named(name, &mut self.bus)
    }

    //--- Input & Pause ----------------------------------------------------

    /// Records a key press for the next tick's poll.
    pub fn press_key(&mut self, key: KeyCode) {
        self.input.press(key);
    }

    pub fn open_pause_menu(&mut self) {
        self.pause.open();
    }

    pub fn close_pause_menu(&mut self) {
        self.pause.close();
    }

    //--- Scene Notifications ----------------------------------------------

    /// Host notification that the requested scene finished loading.
    pub fn scene_loaded(&mut self) -> TransitionResult<Pose> {
        let pose = self.coordinator.on_scene_loaded()?;
        self.bus.publish(TransitionEvent::PoseRestored { pose });
        Ok(pose)
    }

    //--- Update Loop ------------------------------------------------------

    /// Runs one tick and returns every event raised since the last one.
    pub fn tick(&mut self, dt: Duration) -> Vec<TransitionEvent> {
        //--- 1. Escape poll ----------------------------------------------
        if self.input.was_pressed(KeyCode::Escape) {
            let paused = self.pause.toggle();
            self.bus.publish(TransitionEvent::PauseToggled { paused });
        }
        self.input.clear();

        //--- 2-3. Scaled orchestrator tick -------------------------------
        let scaled = scale_dt(dt, self.pause.time_scale());
        self.orchestrator.tick(scaled, &mut self.bus);

        //--- 4. Reload signal --------------------------------------------
        for StageReload in self.bus.drain::<StageReload>() {
            self.handle_reload();
        }

        //--- 5. Drain events ---------------------------------------------
        self.bus.drain::<TransitionEvent>()
    }

    fn handle_reload(&mut self) {
        let active = self.orchestrator.active().clone();

        match self.coordinator.on_reload(&active) {
            Ok(()) => self.orchestrator.confirm_selection(),
            Err(e) => {
                error!("Reload of '{}' failed: {}", active.name(), e);
                self.orchestrator.revert_selection();
                self.bus.publish(TransitionEvent::ReloadFailed {
                    reason: e.to_string(),
                });
            }
        }
    }

    //--- Lifecycle --------------------------------------------------------

    /// Marks the overlay and pause surface as surviving scene reloads.
    pub(crate) fn make_persistent(&mut self) {
        self.orchestrator
            .overlay_mut()
            .set_persistence(Persistence::Persistent);
        self.pause.set_persistence(Persistence::Persistent);
    }

    /// Destroys this session together with its overlay and pause surface.
    ///
    /// Both are owned by the session, so dropping it is the teardown.
    pub(crate) fn teardown(self) -> SessionId {
        info!(
            "Destroying session {:?} with its fade overlay and pause surface",
            self.id
        );
        self.id
    }

    //--- Query API --------------------------------------------------------

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn orchestrator(&self) -> &TransitionOrchestrator {
        &self.orchestrator
    }

    pub fn coordinator(&self) -> &SceneLoadCoordinator {
        &self.coordinator
    }

    pub fn pause(&self) -> &PauseSurface {
        &self.pause
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_open()
    }
}

fn scale_dt(dt: Duration, scale: f32) -> Duration {
    if scale <= 0.0 {
        Duration::ZERO
    } else if scale == 1.0 {
        dt
    } else {
        dt.mul_f64(f64::from(scale))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
