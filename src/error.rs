//=========================================================================
// Transition Errors
//=========================================================================
//
// Error taxonomy shared by every transition subsystem.
//
// Re-entrant transition requests are NOT errors; they surface as
// `TransitionOutcome::Ignored` instead.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== TransitionError =====================================================

/// Failures raised by the transition core.
///
/// Every variant is fatal to the call that produced it, never to the
/// session: state that was already committed stays consistent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// An operation ran before its required setup (restore without a
    /// captured pose, missing movement root, ...).
    #[error("precondition violated: {0}")]
    PreconditionViolation(String),

    /// The session was configured in a way that cannot be honored
    /// (empty selection pool, no alternative stage, unknown name).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The scene loader refused to load the requested content.
    #[error("scene load failed for '{scene}': {reason}")]
    SceneLoad { scene: String, reason: String },
}

impl TransitionError {
    pub(crate) fn precondition(msg: impl Into<String>) -> Self {
        Self::PreconditionViolation(msg.into())
    }

    pub(crate) fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type TransitionResult<T> = Result<T, TransitionError>;

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = TransitionError::precondition("pose restored before capture");
        assert_eq!(
            err.to_string(),
            "precondition violated: pose restored before capture"
        );

        let err = TransitionError::SceneLoad {
            scene: "stages/autumn".to_string(),
            reason: "missing bundle".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "scene load failed for 'stages/autumn': missing bundle"
        );
    }
}
