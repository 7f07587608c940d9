//=========================================================================
// Signal Bus
//=========================================================================
//
// Typed broadcast queues for signals raised during a tick.
//
// Pattern: publish → read (N observers) → drain / clear at tick boundary
//
//=========================================================================

//=== Module Declarations =================================================

mod bus;
mod queue;

//=== Public API ==========================================================

pub use bus::{Signal, SignalBus};
