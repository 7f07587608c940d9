//=========================================================================
// Signal Bus
//=========================================================================
//
// Architecture:
//   publisher → publish<S>() → HashMap<TypeId, Vec<S>>
//                                   ↓
//   observers ← read<S>()  (shared, any number of readers)
//                                   ↓
//   owner ────→ drain<S>() / clear_all() at tick boundary
//
//=========================================================================

//=== External Dependencies ===============================================

use std::any::TypeId;
use std::collections::HashMap;

use log::error;

//=== Internal Dependencies ===============================================

use super::queue::SignalQueue;

//=== Public API ==========================================================

/// Marker trait for anything that can travel on the [`SignalBus`].
pub trait Signal: Send + 'static {}

impl<T: Send + 'static> Signal for T {}

//=========================================================================

/// Per-type signal queues.
///
/// Publishers never know who observes a signal. The bus owner decides
/// when queued signals are consumed.
pub struct SignalBus {
    queues: HashMap<TypeId, Box<dyn SignalQueue>>,
}

impl SignalBus {
    pub fn new() -> Self {
        Self {
            queues: HashMap::new(),
        }
    }

    //--- Publishing -------------------------------------------------------

    /// Queues a signal behind any others of its type.
    pub fn publish<S: Signal>(&mut self, signal: S) {
        let queue = self
            .queues
            .entry(TypeId::of::<S>())
            .or_insert_with(|| Box::new(Vec::<S>::new()));

        match queue.as_any_mut().downcast_mut::<Vec<S>>() {
            Some(vec) => vec.push(signal),
            // Unreachable: entries are keyed by their own TypeId
            None => error!("Signal queue type mismatch for {}", std::any::type_name::<S>()),
        }
    }

    //--- Observation ------------------------------------------------------

    /// All queued signals of type `S`, oldest first.
    pub fn read<S: Signal>(&self) -> &[S] {
        self.typed::<S>().map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn count<S: Signal>(&self) -> usize {
        self.typed::<S>().map_or(0, Vec::len)
    }

    pub fn has<S: Signal>(&self) -> bool {
        self.count::<S>() > 0
    }

    /// Total signals queued across all types.
    pub fn total(&self) -> usize {
        self.queues.values().map(|q| q.pending()).sum()
    }

    //--- Consumption ------------------------------------------------------

    /// Removes and returns all queued signals of type `S`.
    pub fn drain<S: Signal>(&mut self) -> Vec<S> {
        self.queues
            .get_mut(&TypeId::of::<S>())
            .and_then(|q| q.as_any_mut().downcast_mut::<Vec<S>>())
            .map(std::mem::take)
            .unwrap_or_default()
    }

    /// Drops every queued signal, keeping queue allocations.
    pub fn clear_all(&mut self) {
        for queue in self.queues.values_mut() {
            queue.clear_queue();
        }
    }

    fn typed<S: Signal>(&self) -> Option<&Vec<S>> {
        self.queues
            .get(&TypeId::of::<S>())
            .and_then(|q| q.as_any().downcast_ref::<Vec<S>>())
    }
}

impl Default for SignalBus {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Clone, Copy)]
    struct Reload;

    #[derive(Debug, PartialEq, Clone)]
    struct Note(&'static str);

    #[test]
    fn empty_bus_reads_nothing() {
        let bus = SignalBus::new();
        assert!(!bus.has::<Reload>());
        assert!(bus.read::<Note>().is_empty());
        assert_eq!(bus.total(), 0);
    }

    #[test]
    fn signals_are_queued_per_type_in_order() {
        let mut bus = SignalBus::new();
        bus.publish(Note("a"));
        bus.publish(Reload);
        bus.publish(Note("b"));

        assert_eq!(bus.read::<Note>(), &[Note("a"), Note("b")]);
        assert_eq!(bus.count::<Reload>(), 1);
        assert_eq!(bus.total(), 3);
    }

    #[test]
    fn read_is_shared_until_drained() {
        let mut bus = SignalBus::new();
        bus.publish(Reload);

        // Two observers see the same signal
        assert_eq!(bus.read::<Reload>().len(), 1);
        assert_eq!(bus.read::<Reload>().len(), 1);

        assert_eq!(bus.drain::<Reload>(), vec![Reload]);
        assert!(!bus.has::<Reload>());
        assert!(bus.drain::<Reload>().is_empty());
    }

    #[test]
    fn drain_leaves_other_types_alone() {
        let mut bus = SignalBus::new();
        bus.publish(Reload);
        bus.publish(Note("kept"));

        bus.drain::<Reload>();
        assert_eq!(bus.read::<Note>(), &[Note("kept")]);
    }

    #[test]
    fn clear_all_empties_every_queue() {
        let mut bus = SignalBus::new();
        bus.publish(Reload);
        bus.publish(Note("x"));

        bus.clear_all();
        assert_eq!(bus.total(), 0);

        bus.publish(Reload);
        assert_eq!(bus.count::<Reload>(), 1);
    }
}
