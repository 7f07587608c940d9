//=========================================================================
// Timing
//=========================================================================
//
// Tick-driven timers used by the transition orchestrator.
//
//   Countdown          one-shot timer, fires once when it reaches zero
//   DeferredScheduler  typed delayed tasks keyed by TaskHandle
//
// Neither owns a clock: both advance only by the `dt` they are handed,
// so two timers fed the same ticks stay in step without sharing state.
//
//=========================================================================

//=== Module Declarations =================================================

mod countdown;
mod deferred;

//=== Public API ==========================================================

pub use countdown::Countdown;
pub use deferred::{DeferredScheduler, DueTask, TaskHandle};
