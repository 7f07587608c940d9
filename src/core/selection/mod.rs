//=========================================================================
// Stage Selection
//=========================================================================
//
// Which stage is loaded next, and which one was loaded before it.
//
// Architecture:
//   SelectionSource (content database, e.g. StagePool)
//     └─ pick_random_excluding(current)
//   SelectionPolicy
//     └─ SessionState { active, previous }
//
//=========================================================================

//=== Module Declarations =================================================

mod policy;
mod source;
mod stage;

//=== Public API ==========================================================

pub use policy::{SelectionPolicy, SessionState};
pub use source::{SelectionSource, StagePool};
pub use stage::{SceneRef, Selection};
