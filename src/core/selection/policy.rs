//=========================================================================
// Selection Policy
//=========================================================================
//
// Owns the active/previous stage pair.
//
// Every advance resolves the next stage before touching state, so a
// failed advance leaves the pair exactly as it was.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::info;

//=== Internal Dependencies ===============================================

use super::{Selection, SelectionSource};
use crate::error::{TransitionError, TransitionResult};

//=== SessionState ========================================================

/// Active and previous stage selections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub active: Selection,
    pub previous: Selection,
}

//=== SelectionPolicy =====================================================

/// Holds the session's stage pair and applies the next-stage rule.
#[derive(Debug, Clone)]
pub struct SelectionPolicy {
    state: SessionState,
}

impl SelectionPolicy {
    /// Starts both active and previous on `pool[0]`.
    pub fn initialize(pool: &[Selection]) -> TransitionResult<Self> {
        let first = pool
            .first()
            .cloned()
            .ok_or_else(|| TransitionError::invalid_config("selection pool is empty"))?;

        Ok(Self::starting_at(first))
    }

    /// Starts on the source's initial selection.
    pub fn from_source(source: &mut dyn SelectionSource) -> TransitionResult<Self> {
        Ok(Self::starting_at(source.generate_initial_selection()?))
    }

    fn starting_at(first: Selection) -> Self {
        info!("Session starts on stage '{}'", first.name());
        Self {
            state: SessionState {
                active: first.clone(),
                previous: first,
            },
        }
    }

    //--- Advance ----------------------------------------------------------

    /// Moves to an explicitly chosen stage.
    pub fn advance_to(&mut self, next: Selection) -> &Selection {
        let prior = std::mem::replace(&mut self.state.active, next);
        self.state.previous = prior;
        info!("Next stage is '{}'", self.state.active.name());
        &self.state.active
    }

    /// Moves to a random stage other than the current one.
    ///
    /// Requires the source to hold at least one stage with a different name;
    /// otherwise fails with `InvalidConfiguration` and changes nothing.
    pub fn advance_random(
        &mut self,
        source: &mut dyn SelectionSource,
    ) -> TransitionResult<&Selection> {
        let next = source.pick_random_excluding(&self.state.active)?;
        Ok(self.advance_to(next))
    }

    /// Puts back a state captured earlier (failed reload rollback).
    pub(crate) fn restore(&mut self, state: SessionState) {
        info!(
            "Rolling stage back to '{}' (previous '{}')",
            state.active.name(),
            state.previous.name()
        );
        self.state = state;
    }

    //--- Query API --------------------------------------------------------

    pub fn active(&self) -> &Selection {
        &self.state.active
    }

    pub fn previous(&self) -> &Selection {
        &self.state.previous
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::selection::{SceneRef, StagePool};

    fn stage(name: &str) -> Selection {
        Selection::new(name, SceneRef::new(format!("stages/{}", name)))
    }

    fn stages(names: &[&str]) -> Vec<Selection> {
        names.iter().map(|n| stage(n)).collect()
    }

    #[test]
    fn initialize_sets_both_to_first() {
        let policy = SelectionPolicy::initialize(&stages(&["dawn", "dusk"])).unwrap();
        assert_eq!(policy.active(), &stage("dawn"));
        assert_eq!(policy.previous(), &stage("dawn"));
    }

    #[test]
    fn initialize_rejects_empty_pool() {
        let err = SelectionPolicy::initialize(&[]).unwrap_err();
        assert!(matches!(err, TransitionError::InvalidConfiguration(_)));
    }

    #[test]
    fn advance_to_shifts_active_into_previous() {
        let mut policy = SelectionPolicy::initialize(&stages(&["dawn", "dusk"])).unwrap();
        policy.advance_to(stage("dusk"));
        assert_eq!(policy.active(), &stage("dusk"));
        assert_eq!(policy.previous(), &stage("dawn"));

        policy.advance_to(stage("frost"));
        assert_eq!(policy.active(), &stage("frost"));
        assert_eq!(policy.previous(), &stage("dusk"));
    }

    #[test]
    fn advance_random_keeps_active_and_previous_distinct() {
        let mut source = StagePool::with_seed(stages(&["dawn", "dusk", "frost"]), 11);
        let mut policy = SelectionPolicy::from_source(&mut source).unwrap();

        for _ in 0..50 {
            policy.advance_random(&mut source).unwrap();
            assert_ne!(policy.active().name(), policy.previous().name());
        }
    }

    #[test]
    fn failed_random_advance_leaves_state_untouched() {
        let mut source = StagePool::with_seed(stages(&["dawn"]), 5);
        let mut policy = SelectionPolicy::from_source(&mut source).unwrap();
        let before = policy.state().clone();

        assert!(policy.advance_random(&mut source).is_err());
        assert_eq!(policy.state(), &before);
    }

    #[test]
    fn restore_puts_back_snapshot() {
        let mut policy = SelectionPolicy::initialize(&stages(&["dawn", "dusk"])).unwrap();
        let snapshot = policy.state().clone();
        policy.advance_to(stage("dusk"));

        policy.restore(snapshot.clone());
        assert_eq!(policy.state(), &snapshot);
    }
}
