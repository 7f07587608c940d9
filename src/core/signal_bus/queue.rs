//=========================================================================
// Signal Queue
//=========================================================================
//
// Type-erased view over `Vec<S>` so the bus can hold queues of
// different signal types in one map.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::Any;

//=== Internal Dependencies ===============================================

use super::Signal;

//=========================================================================

/// Type-erased signal queue.
pub(super) trait SignalQueue: Send {
    /// Drops queued signals, keeping the allocation.
    fn clear_queue(&mut self);

    fn pending(&self) -> usize;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

impl<S: Signal> SignalQueue for Vec<S> {
    fn clear_queue(&mut self) {
        self.clear();
    }

    fn pending(&self) -> usize {
        self.len()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

//=========================================================================
// Tests
//=========================================================================
