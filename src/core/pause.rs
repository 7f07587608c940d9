//=========================================================================
// Pause Surface
//=========================================================================
//
// Pause menu visibility plus the global time scale it controls.
//
//   open()  → menu shown,  time scale 0, cursor shown
//   close() → menu hidden, time scale 1, cursor hidden
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use crate::core::Persistence;

//=== PauseSurface ========================================================

/// Pause menu state. Closed and running at full speed by default.
#[derive(Debug, Clone)]
pub struct PauseSurface {
    open: bool,
    time_scale: f32,
    cursor_visible: bool,
    persistence: Persistence,
}

impl PauseSurface {
    pub fn new() -> Self {
        Self {
            open: false,
            time_scale: 1.0,
            cursor_visible: false,
            persistence: Persistence::SceneLocal,
        }
    }

    pub fn open(&mut self) {
        self.open = true;
        self.time_scale = 0.0;
        self.cursor_visible = true;
        info!("Paused");
    }

    pub fn close(&mut self) {
        self.open = false;
        self.time_scale = 1.0;
        self.cursor_visible = false;
        info!("Resumed");
    }

    /// Flips between open and closed. Returns true when now paused.
    pub fn toggle(&mut self) -> bool {
        if self.open {
            self.close();
        } else {
            self.open();
        }
        self.open
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Multiplier applied to every tick's `dt`.
    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    pub fn persistence(&self) -> Persistence {
        self.persistence
    }

    pub(crate) fn set_persistence(&mut self, persistence: Persistence) {
        self.persistence = persistence;
    }
}

impl Default for PauseSurface {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_at_full_speed() {
        let pause = PauseSurface::new();
        assert!(!pause.is_open());
        assert_eq!(pause.time_scale(), 1.0);
        assert!(!pause.cursor_visible());
    }

    #[test]
    fn toggle_freezes_and_resumes_time() {
        let mut pause = PauseSurface::new();

        assert!(pause.toggle());
        assert_eq!(pause.time_scale(), 0.0);
        assert!(pause.cursor_visible());

        assert!(!pause.toggle());
        assert_eq!(pause.time_scale(), 1.0);
        assert!(!pause.cursor_visible());
    }
}
