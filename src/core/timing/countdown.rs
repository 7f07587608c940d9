//=========================================================================
// Countdown
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Countdown ===========================================================

/// One-shot timer that reports expiry exactly once.
///
/// A zero-length countdown expires on the first `tick`, never at
/// construction.
#[derive(Debug, Clone)]
pub struct Countdown {
    total: Duration,
    remaining: Duration,
    fired: bool,
}

impl Countdown {
    pub fn new(total: Duration) -> Self {
        Self {
            total,
            remaining: total,
            fired: false,
        }
    }

    /// Advances the timer. Returns true on the tick that reaches zero.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.fired {
            return false;
        }

        self.remaining = self.remaining.saturating_sub(dt);
        if self.remaining.is_zero() {
            self.fired = true;
            return true;
        }

        false
    }

    pub fn remaining(&self) -> Duration {
        self.remaining
    }

    pub fn elapsed(&self) -> Duration {
        self.total - self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.fired
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(100);

    #[test]
    fn fires_once_after_full_duration() {
        let mut countdown = Countdown::new(Duration::from_millis(300));

        assert!(!countdown.tick(STEP));
        assert!(!countdown.tick(STEP));
        assert_eq!(countdown.remaining(), STEP);
        assert!(countdown.tick(STEP));
        assert!(countdown.is_expired());

        // Never fires again
        assert!(!countdown.tick(STEP));
        assert_eq!(countdown.elapsed(), Duration::from_millis(300));
    }

    #[test]
    fn zero_length_fires_on_first_tick() {
        let mut countdown = Countdown::new(Duration::ZERO);
        assert!(!countdown.is_expired());
        assert!(countdown.tick(Duration::ZERO));
    }

    #[test]
    fn overshooting_tick_still_fires() {
        let mut countdown = Countdown::new(Duration::from_millis(250));
        assert!(!countdown.tick(STEP));
        assert!(!countdown.tick(STEP));
        assert!(countdown.tick(STEP));
    }
}
