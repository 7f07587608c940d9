//=========================================================================
// Selection Source
//=========================================================================
//
// Content database interface plus the bundled `StagePool` implementation.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

//=== Internal Dependencies ===============================================

use super::Selection;
use crate::error::{TransitionError, TransitionResult};

//=== SelectionSource Trait ===============================================

/// Enumerates selectable stages and produces random picks.
pub trait SelectionSource: Send {
    /// All selectable stages, in their canonical order.
    fn selections(&self) -> &[Selection];

    /// Uniformly picks a stage whose name differs from `current`.
    ///
    /// Fails with `InvalidConfiguration` when no such stage exists.
    fn pick_random_excluding(&mut self, current: &Selection) -> TransitionResult<Selection>;

    /// The stage a fresh session starts on.
    fn generate_initial_selection(&mut self) -> TransitionResult<Selection> {
        self.selections()
            .first()
            .cloned()
            .ok_or_else(|| TransitionError::invalid_config("selection pool is empty"))
    }

    /// Looks a stage up by name.
    fn find(&self, name: &str) -> Option<&Selection> {
        self.selections().iter().find(|s| s.name() == name)
    }
}

//=== StagePool ===========================================================

/// Fixed stage list with a seedable random picker.
///
/// The same seed and call sequence yields the same stage order.
pub struct StagePool {
    stages: Vec<Selection>,
    rng: ChaCha8Rng,
}

impl StagePool {
    /// Creates a pool seeded from OS entropy.
    pub fn new(stages: Vec<Selection>) -> Self {
        Self {
            stages,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates a pool with a fixed seed for reproducible picks.
    pub fn with_seed(stages: Vec<Selection>, seed: u64) -> Self {
        Self {
            stages,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl SelectionSource for StagePool {
    fn selections(&self) -> &[Selection] {
        &self.stages
    }

    fn pick_random_excluding(&mut self, current: &Selection) -> TransitionResult<Selection> {
        let candidates: Vec<&Selection> = self
            .stages
            .iter()
            .filter(|s| !s.same_stage(current))
            .collect();

        let pick = candidates.choose(&mut self.rng).ok_or_else(|| {
            TransitionError::invalid_config(format!(
                "no stage other than '{}' in a pool of {}",
                current.name(),
                self.stages.len()
            ))
        })?;

        debug!("Picked stage '{}' from {} candidates", pick.name(), candidates.len());
        Ok((*pick).clone())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
