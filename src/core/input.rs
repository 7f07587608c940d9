//=========================================================================
// Input Frame
//=========================================================================
//
// Keys pressed since the last tick. The session polls this once per
// tick and clears it afterwards.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashSet;

//=== KeyCode =============================================================

/// Keys the transition layer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Opens or closes the pause menu.
    Escape,
    Enter,
    Space,
    /// Any other key, by host scan code.
    Other(u32),
}

//=== InputFrame ==========================================================

/// Presses recorded during one frame.
#[derive(Debug, Default)]
pub struct InputFrame {
    pressed: HashSet<KeyCode>,
}

impl InputFrame {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a press. Repeated presses within a frame count once.
    pub fn press(&mut self, key: KeyCode) {
        self.pressed.insert(key);
    }

    pub fn was_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presses_last_until_cleared() {
        let mut frame = InputFrame::new();
        frame.press(KeyCode::Escape);
        frame.press(KeyCode::Escape);

        assert!(frame.was_pressed(KeyCode::Escape));
        assert!(!frame.was_pressed(KeyCode::Space));

        frame.clear();
        assert!(!frame.was_pressed(KeyCode::Escape));
    }
}
