//=========================================================================
// Engine Host
//
// Fixed-timestep loop around the single live session.
//
// Architecture:
// ```text
//     EngineBuilder  ──build()──>  Engine  ──run()──>  [loop @ TPS]
//         │                          │
//         ├─ with_tps()              ├─ commands() → Sender<HostCommand>
//         └─ with_channel_capacity() ├─ events()   → Receiver<TransitionEvent>
//                                    └─ init(|guard| guard.adopt(session))
// ```
//
// Each tick: drain host commands → apply to session → session.tick(dt)
// → forward events → sleep out the rest of the frame.
//
//=========================================================================

//=== Submodules ==========================================================

mod command;

pub use command::HostCommand;

//=== External Dependencies ===============================================

use std::thread;
use std::time::{Duration, Instant};

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use log::{debug, error, info, warn};

//=== Internal Dependencies ===============================================

use crate::core::session::SessionGuard;
use crate::core::transition::TransitionEvent;
use crate::error::TransitionResult;
use command::{CommandCollector, TickControl};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **TPS**: 60.0 (ticks per second)
/// - **Channel capacity**: 128 commands / events
///
/// # Examples
///
/// ```no_run
/// use aetheric_transition::EngineBuilder;
///
/// EngineBuilder::new()
///     .with_tps(120.0)
///     .with_channel_capacity(256)
///     .build()
///     .run();
/// ```
pub struct EngineBuilder {
    tps: f64,
    channel_capacity: usize,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            tps: 60.0,
            channel_capacity: 128,
        }
    }

    /// Sets the fixed tick rate. Each tick advances the session by `1 / tps`.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of both the command and the event channel.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    pub fn build(self) -> Engine {
        info!(
            "Building engine (TPS: {}, channel: {})",
            self.tps, self.channel_capacity
        );

        let (command_tx, command_rx) = bounded(self.channel_capacity);
        let (event_tx, event_rx) = bounded(self.channel_capacity);

        Engine {
            host: SessionHost {
                guard: SessionGuard::new(),
                collector: CommandCollector::new(command_rx),
                events: event_tx,
            },
            command_tx,
            event_rx,
            tps: self.tps,
            channel_capacity: self.channel_capacity,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Composition root: owns the [`SessionGuard`] and drives it at a fixed rate.
///
/// The loop runs on the calling thread. Hosts talk to it through the
/// channels returned by [`commands`](Engine::commands) and
/// [`events`](Engine::events), taken before calling [`run`](Engine::run).
pub struct Engine {
    host: SessionHost,
    command_tx: Sender<HostCommand>,
    event_rx: Receiver<TransitionEvent>,
    tps: f64,
    channel_capacity: usize,
}

impl Engine {
    //--- Wiring -----------------------------------------------------------

    /// Command sender for the host. Clone freely.
    pub fn commands(&self) -> Sender<HostCommand> {
        self.command_tx.clone()
    }

    /// Receiver for every event the live session raises.
    pub fn events(&self) -> Receiver<TransitionEvent> {
        self.event_rx.clone()
    }

    //--- Initialization ---------------------------------------------------

    /// Gives `init_fn` the guard so it can adopt the game's session.
    ///
    /// ```no_run
    /// # use aetheric_transition::EngineBuilder;
    /// # use aetheric_transition::core::Session;
    /// # fn make_session() -> Session { unimplemented!() }
    /// EngineBuilder::new()
    ///     .build()
    ///     .init(|guard| {
    ///         guard.adopt(make_session());
    ///     })
    ///     .run();
    /// ```
    pub fn init<F>(mut self, init_fn: F) -> Self
    where
        F: FnOnce(&mut SessionGuard),
    {
        info!("Initializing engine session");
        init_fn(&mut self.host.guard);

        if !self.host.guard.is_installed() {
            warn!("No session installed after init, commands will be dropped");
        }
        self
    }

    //--- Execution --------------------------------------------------------

    /// Runs the loop until a [`HostCommand::Shutdown`] arrives or every
    /// command sender has been dropped.
    pub fn run(self) {
        let Engine {
            mut host,
            command_tx,
            tps,
            ..
        } = self;

        // Only host-held senders keep the loop alive from here on
        drop(command_tx);

        let frame_duration = Duration::from_secs_f64(1.0 / tps);
        info!("Starting engine loop (TPS: {})", tps);

        loop {
            let frame_start = Instant::now();

            if let TickControl::Exit = host.step(frame_duration) {
                break;
            }

            let elapsed = frame_start.elapsed();
            if elapsed < frame_duration {
                thread::sleep(frame_duration - elapsed);
            }
        }

        info!("Engine shutdown complete");
    }
}

//=== SessionHost =========================================================

/// Per-tick work of the engine, separated from the pacing loop.
struct SessionHost {
    guard: SessionGuard,
    collector: CommandCollector,
    events: Sender<TransitionEvent>,
}

impl SessionHost {
    fn step(&mut self, dt: Duration) -> TickControl {
        //--- 1. Gather host commands -------------------------------------
        if let TickControl::Exit = self.collector.collect_frame() {
            return TickControl::Exit;
        }

        //--- 2. Apply them to the session --------------------------------
        for command in self.collector.take_commands() {
            if let Err(e) = self.apply(command) {
                error!("Host command failed: {}", e);
            }
        }

        //--- 3. Advance and forward --------------------------------------
        let events = match self.guard.session_mut() {
            Some(session) => session.tick(dt),
            None => Vec::new(),
        };

        for event in events {
            self.forward(event);
        }

        TickControl::Continue
    }

    fn apply(&mut self, command: HostCommand) -> TransitionResult<()> {
        let Some(session) = self.guard.session_mut() else {
            warn!("No live session, dropping {:?}", command);
            return Ok(());
        };

        match command {
            HostCommand::BeginTransition => session.begin_transition().map(drop),
            HostCommand::BeginTransitionTo(name) => session.begin_transition_named(&name).map(drop),
            HostCommand::SceneLoaded => session.scene_loaded().map(drop),
            HostCommand::KeyPressed(key) => {
                session.press_key(key);
                Ok(())
            }
            // Consumed by the collector
            HostCommand::Shutdown => Ok(()),
        }
    }

    fn forward(&self, event: TransitionEvent) {
        match self.events.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => warn!("Event channel full, dropping {:?}", event),
            Err(TrySendError::Disconnected(_)) => debug!("No event listener"),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
