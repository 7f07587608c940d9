//=========================================================================
// Deferred Scheduler
//=========================================================================
//
// Typed delayed tasks keyed by handle.
//
// Architecture:
//   schedule(delay, task) → TaskHandle
//                              ↓
//   advance(dt) ──────────→ Vec<DueTask<T>>  (due order, FIFO on ties)
//                              ↓
//   cancel(handle) / time_until(handle)  (introspection)
//
// Tasks never run inside `schedule`; a zero delay fires on the next
// `advance`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::debug;

//=== TaskHandle ==========================================================

/// Identifies a scheduled task for cancellation and introspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskHandle(u64);

//=== DueTask =============================================================

/// A task whose delay has elapsed, handed back by [`DeferredScheduler::advance`].
#[derive(Debug, Clone, PartialEq)]
pub struct DueTask<T> {
    pub handle: TaskHandle,
    pub task: T,
    /// How far past its due time the task was collected.
    pub overdue: Duration,
}

struct Scheduled<T> {
    handle: TaskHandle,
    due: Duration,
    task: T,
}

//=== DeferredScheduler ===================================================

/// Holds typed tasks until their delay has elapsed.
pub struct DeferredScheduler<T> {
    now: Duration,
    next_handle: u64,
    pending: Vec<Scheduled<T>>,
}

impl<T> DeferredScheduler<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_handle: 0,
            pending: Vec::new(),
        }
    }

    //--- Scheduling -------------------------------------------------------

    /// Schedules `task` to come due after `delay` of advanced time.
    pub fn schedule(&mut self, delay: Duration, task: T) -> TaskHandle {
        let handle = TaskHandle(self.next_handle);
        self.next_handle += 1;

        debug!("Scheduled task {:?} in {:?}", handle, delay);
        self.pending.push(Scheduled {
            handle,
            due: self.now.saturating_add(delay),
            task,
        });

        handle
    }

    /// Removes a pending task. Returns it if it had not fired yet.
    pub fn cancel(&mut self, handle: TaskHandle) -> Option<T> {
        let pos = self.pending.iter().position(|s| s.handle == handle)?;
        debug!("Cancelled task {:?}", handle);
        Some(self.pending.remove(pos).task)
    }

    //--- Time Advance -----------------------------------------------------

    /// Advances scheduler time and returns every task that came due.
    pub fn advance(&mut self, dt: Duration) -> Vec<DueTask<T>> {
        self.now = self.now.saturating_add(dt);

        let now = self.now;
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|s| s.due <= now);
        self.pending = pending;

        // Handles are monotonic, so they break ties in scheduling order
        due.sort_by_key(|s| (s.due, s.handle));

        due.into_iter()
            .map(|s| DueTask {
                handle: s.handle,
                task: s.task,
                overdue: now - s.due,
            })
            .collect()
    }

    //--- Query API --------------------------------------------------------

    pub fn is_pending(&self, handle: TaskHandle) -> bool {
        self.pending.iter().any(|s| s.handle == handle)
    }

    /// Remaining delay for a pending task.
    pub fn time_until(&self, handle: TaskHandle) -> Option<Duration> {
        self.pending
            .iter()
            .find(|s| s.handle == handle)
            .map(|s| s.due.saturating_sub(self.now))
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Total time advanced since construction.
    pub fn now(&self) -> Duration {
        self.now
    }
}

impl<T> Default for DeferredScheduler<T> {
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

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Cue {
        Fade,
        Chime,
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn task_fires_after_delay() {
        let mut scheduler = DeferredScheduler::new();
        let handle = scheduler.schedule(ms(300), Cue::Fade);

        assert!(scheduler.advance(ms(100)).is_empty());
        assert!(scheduler.advance(ms(100)).is_empty());
        assert_eq!(scheduler.time_until(handle), Some(ms(100)));

        let due = scheduler.advance(ms(100));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].handle, handle);
        assert_eq!(due[0].task, Cue::Fade);
        assert_eq!(due[0].overdue, Duration::ZERO);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn unbounded_delay_saturates_instead_of_overflowing() {
        let mut scheduler = DeferredScheduler::new();
        scheduler.advance(ms(500));
        let handle = scheduler.schedule(Duration::MAX, Cue::Chime);

        assert!(scheduler.advance(ms(100)).is_empty());
        assert!(scheduler.is_pending(handle));
    }

    #[test]
    fn zero_delay_waits_for_next_advance() {
        let mut scheduler = DeferredScheduler::new();
        let handle = scheduler.schedule(Duration::ZERO, Cue::Fade);

        assert!(scheduler.is_pending(handle));
        let due = scheduler.advance(ms(16));
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].overdue, ms(16));
    }

    #[test]
    fn due_tasks_are_ordered_by_due_time_then_schedule_order() {
        let mut scheduler = DeferredScheduler::new();
        let late = scheduler.schedule(ms(200), Cue::Chime);
        let early = scheduler.schedule(ms(100), Cue::Fade);
        let tie = scheduler.schedule(ms(200), Cue::Fade);

        let due = scheduler.advance(ms(500));
        let order: Vec<_> = due.iter().map(|d| d.handle).collect();
        assert_eq!(order, vec![early, late, tie]);
    }

    #[test]
    fn cancelled_task_never_fires() {
        let mut scheduler = DeferredScheduler::new();
        let handle = scheduler.schedule(ms(100), Cue::Chime);

        assert_eq!(scheduler.cancel(handle), Some(Cue::Chime));
        assert_eq!(scheduler.cancel(handle), None);
        assert!(!scheduler.is_pending(handle));
        assert!(scheduler.advance(ms(200)).is_empty());
    }

    #[test]
    fn handles_are_unique() {
        let mut scheduler = DeferredScheduler::new();
        let a = scheduler.schedule(ms(1), Cue::Fade);
        let b = scheduler.schedule(ms(1), Cue::Fade);
        assert_ne!(a, b);
        assert_eq!(scheduler.len(), 2);
    }
}
