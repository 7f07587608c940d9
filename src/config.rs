//=========================================================================
// Transition Configuration
//=========================================================================
//
// Timing parameters for a stage transition.
//
//   0 ─────────────── offset ──────────── total_delay ────────────►
//   begin            fade_to_white starts  reload fires
//                    └── fade_to_white ──┘└── fade_to_level ──┘
//
// offset = max(0, total_delay − fade_to_white)
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::warn;

//=== TransitionConfig ====================================================

/// Timing configuration for the stage transition orchestrator.
///
/// # Default Values
///
/// - **total_delay**: 2.0s (countdown until the reload signal)
/// - **fade_to_white**: 0.2s (overlay goes opaque)
/// - **fade_to_level**: 1.0s (overlay clears over the new stage)
///
/// Durations given in seconds are clamped to zero when negative and to
/// [`Duration::MAX`] when too large to represent.
///
/// # Example
///
/// ```
/// use aetheric_transition::TransitionConfig;
/// use std::time::Duration;
///
/// let config = TransitionConfig::new()
///     .with_total_delay_secs(3.0)
///     .with_fade_to_white_secs(0.5);
///
/// assert_eq!(config.fade_start_offset(), Duration::from_millis(2500));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionConfig {
    total_delay: Duration,
    fade_to_white: Duration,
    fade_to_level: Duration,
}

impl TransitionConfig {
    /// Creates a configuration with the default timings.
    pub fn new() -> Self {
        Self {
            total_delay: Duration::from_millis(2000),
            fade_to_white: Duration::from_millis(200),
            fade_to_level: Duration::from_millis(1000),
        }
    }

    //--- Builder ----------------------------------------------------------

    /// Sets the countdown length.
    pub fn with_total_delay(mut self, delay: Duration) -> Self {
        self.total_delay = delay;
        self
    }

    /// Sets the countdown length in seconds. Negative values clamp to 0.
    pub fn with_total_delay_secs(self, secs: f32) -> Self {
        self.with_total_delay(clamped_secs("total_delay", secs))
    }

    /// Sets the duration of the fade to full opacity.
    pub fn with_fade_to_white(mut self, duration: Duration) -> Self {
        self.fade_to_white = duration;
        self
    }

    /// Sets the fade-to-white duration in seconds. Negative values clamp to 0.
    pub fn with_fade_to_white_secs(self, secs: f32) -> Self {
        self.with_fade_to_white(clamped_secs("fade_to_white", secs))
    }

    /// Sets the duration of the fade back to the stage.
    pub fn with_fade_to_level(mut self, duration: Duration) -> Self {
        self.fade_to_level = duration;
        self
    }

    /// Sets the fade-to-level duration in seconds. Negative values clamp to 0.
    pub fn with_fade_to_level_secs(self, secs: f32) -> Self {
        self.with_fade_to_level(clamped_secs("fade_to_level", secs))
    }

    //--- Accessors --------------------------------------------------------

    pub fn total_delay(&self) -> Duration {
        self.total_delay
    }

    pub fn fade_to_white(&self) -> Duration {
        self.fade_to_white
    }

    pub fn fade_to_level(&self) -> Duration {
        self.fade_to_level
    }

    /// Delay between `begin_transition` and the start of the fade to white.
    ///
    /// Saturates at zero when the fade is longer than the countdown.
    pub fn fade_start_offset(&self) -> Duration {
        self.total_delay.saturating_sub(self.fade_to_white)
    }

    /// Returns true when the overlay cannot reach full opacity before the
    /// reload fires.
    pub fn is_fade_overlong(&self) -> bool {
        self.fade_to_white > self.total_delay
    }

    /// Logs a warning for timings that are accepted but visually broken.
    pub(crate) fn validate(&self) {
        if self.is_fade_overlong() {
            warn!(
                "fade_to_white ({:?}) exceeds total_delay ({:?}); fade starts immediately \
                 and the reload fires before the overlay is opaque",
                self.fade_to_white, self.total_delay
            );
        }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn clamped_secs(field: &str, secs: f32) -> Duration {
    if secs.is_nan() || secs < 0.0 {
        warn!("{} = {} is negative, clamping to 0", field, secs);
        return Duration::ZERO;
    }

    Duration::try_from_secs_f32(secs).unwrap_or_else(|e| {
        warn!("{} = {} is out of range ({}), clamping to {:?}", field, secs, e, Duration::MAX);
        Duration::MAX
    })
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TransitionConfig::default();
        assert_eq!(config.total_delay(), Duration::from_secs(2));
        assert_eq!(config.fade_to_white(), Duration::from_millis(200));
        assert_eq!(config.fade_to_level(), Duration::from_secs(1));
        assert_eq!(config.fade_start_offset(), Duration::from_millis(1800));
        assert!(!config.is_fade_overlong());
    }

    #[test]
    fn negative_total_delay_clamps_to_zero() {
        let config = TransitionConfig::new().with_total_delay_secs(-1.5);
        assert_eq!(config.total_delay(), Duration::ZERO);
    }

    #[test]
    fn negative_fades_clamp_to_zero() {
        let config = TransitionConfig::new()
            .with_fade_to_white_secs(-0.2)
            .with_fade_to_level_secs(f32::NAN);
        assert_eq!(config.fade_to_white(), Duration::ZERO);
        assert_eq!(config.fade_to_level(), Duration::ZERO);
    }

    #[test]
    fn unrepresentable_secs_clamp_to_max() {
        let config = TransitionConfig::new()
            .with_total_delay_secs(f32::INFINITY)
            .with_fade_to_white_secs(1e30)
            .with_fade_to_level_secs(1e30);
        assert_eq!(config.total_delay(), Duration::MAX);
        assert_eq!(config.fade_to_white(), Duration::MAX);
        assert_eq!(config.fade_to_level(), Duration::MAX);
        assert_eq!(config.fade_start_offset(), Duration::ZERO);
    }

    #[test]
    fn overlong_fade_offset_saturates() {
        let config = TransitionConfig::new()
            .with_total_delay(Duration::from_millis(500))
            .with_fade_to_white(Duration::from_secs(1));
        assert!(config.is_fade_overlong());
        assert_eq!(config.fade_start_offset(), Duration::ZERO);
    }
}
