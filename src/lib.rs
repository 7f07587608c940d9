//=========================================================================
// Aetheric Transition: Library Root
//
// Timed stage transitions for a game session: countdown, fade to white,
// scene reload with the player's pose carried across, fade back in.
//
// Responsibilities:
// - Expose the engine host (`Engine`, `EngineBuilder`, `HostCommand`)
// - Expose the session building blocks under `core`
// - Keep configuration and error types at the crate root
//
// Typical usage:
// ```no_run
// use aetheric_transition::EngineBuilder;
//
// fn main() {
//     EngineBuilder::new().build().init(|guard| { /* adopt session */ }).run();
// }
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the transition systems themselves. It is public so hosts
// can assemble a `Session` from their own selection source, scene loader
// and player.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------

mod config;
mod engine;
mod error;

//--- Public Exports ------------------------------------------------------

pub use config::TransitionConfig;
pub use engine::{Engine, EngineBuilder, HostCommand};
pub use error::{TransitionError, TransitionResult};
