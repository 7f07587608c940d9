//=========================================================================
// Fade Overlay Driver
//=========================================================================
//
// Linear opacity animation for the full-screen transition overlay.
//
// Architecture:
//   fade_over_seconds(request) → FadeRequestId   (starts / restarts)
//                                     ↓
//   tick(dt) ──────────────────→ Option<FadeCompleted>  (once per id)
//
// Only the most recent request can complete. Restarting abandons the
// in-flight interpolation and begins from the current opacity.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::Persistence;

//=== Fade Types ==========================================================

/// Opacity the overlay animates toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadeTarget {
    /// Fully covering the stage (opacity 1.0).
    Opaque,
    /// Fully clear (opacity 0.0).
    Transparent,
}

impl FadeTarget {
    pub fn opacity(self) -> f32 {
        match self {
            Self::Opaque => 1.0,
            Self::Transparent => 0.0,
        }
    }
}

/// A single fade instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeRequest {
    pub duration: Duration,
    pub target: FadeTarget,
}

impl FadeRequest {
    pub fn new(duration: Duration, target: FadeTarget) -> Self {
        Self { duration, target }
    }
}

/// Identifies one accepted fade request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FadeRequestId(u64);

/// Completion notice, produced exactly once for the request it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeCompleted {
    pub request: FadeRequestId,
    pub target: FadeTarget,
}

struct ActiveFade {
    id: FadeRequestId,
    from: f32,
    target: FadeTarget,
    duration: Duration,
    elapsed: Duration,
}

//=== FadeOverlay =========================================================

/// Drives the transition overlay's opacity.
pub struct FadeOverlay {
    opacity: f32,
    active: Option<ActiveFade>,
    next_id: u64,
    persistence: Persistence,
}

impl FadeOverlay {
    /// Creates a fully transparent, idle overlay.
    pub fn new() -> Self {
        Self {
            opacity: 0.0,
            active: None,
            next_id: 0,
            persistence: Persistence::SceneLocal,
        }
    }

    //--- Requests ---------------------------------------------------------

    /// Starts a fade toward `request.target`, replacing any fade in flight.
    ///
    /// The abandoned request will never report completion.
    pub fn fade_over_seconds(&mut self, request: FadeRequest) -> FadeRequestId {
        self.fade_over_seconds_from(request, Duration::ZERO)
    }

    /// Like [`fade_over_seconds`](Self::fade_over_seconds), but with `elapsed`
    /// of the fade already behind it.
    ///
    /// Opacity jumps to where the fade would be by now. Completion is still
    /// reported by the next [`tick`](Self::tick), even when `elapsed` already
    /// covers the whole duration.
    pub fn fade_over_seconds_from(
        &mut self,
        request: FadeRequest,
        elapsed: Duration,
    ) -> FadeRequestId {
        let id = FadeRequestId(self.next_id);
        self.next_id += 1;

        if let Some(stale) = self.active.take() {
            debug!("Fade {:?} preempted by {:?}", stale.id, id);
        }

        debug!(
            "Fade {:?}: {:.2} → {:?} over {:?} ({:?} in)",
            id, self.opacity, request.target, request.duration, elapsed
        );

        self.active = Some(ActiveFade {
            id,
            from: self.opacity,
            target: request.target,
            duration: request.duration,
            elapsed,
        });

        if !elapsed.is_zero() {
            self.sample();
        }

        id
    }

    //--- Update Loop ------------------------------------------------------

    /// Advances the active fade. Returns its completion on the finishing tick.
    pub fn tick(&mut self, dt: Duration) -> Option<FadeCompleted> {
        let fade = self.active.as_mut()?;
        fade.elapsed = fade.elapsed.saturating_add(dt);

        if fade.elapsed >= fade.duration {
            let done = FadeCompleted {
                request: fade.id,
                target: fade.target,
            };
            self.opacity = fade.target.opacity();
            self.active = None;
            return Some(done);
        }

        self.sample();
        None
    }

    fn sample(&mut self) {
        let Some(fade) = &self.active else {
            return;
        };

        let goal = fade.target.opacity();
        self.opacity = if fade.elapsed >= fade.duration {
            goal
        } else {
            let t = fade.elapsed.as_secs_f32() / fade.duration.as_secs_f32();
            fade.from + (goal - fade.from) * t
        };
    }

    //--- Query API --------------------------------------------------------

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Sets opacity directly, abandoning any fade in flight.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.active = None;
        self.opacity = opacity.clamp(0.0, 1.0);
    }

    pub fn is_fading(&self) -> bool {
        self.active.is_some()
    }

    /// Id of the request currently animating, if any.
    pub fn active_request(&self) -> Option<FadeRequestId> {
        self.active.as_ref().map(|f| f.id)
    }

    pub fn persistence(&self) -> Persistence {
        self.persistence
    }

    pub(crate) fn set_persistence(&mut self, persistence: Persistence) {
        self.persistence = persistence;
    }
}

impl Default for FadeOverlay {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
