//=========================================================================
// Selection
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

//=== SceneRef ============================================================

/// Opaque handle to loadable scene content.
///
/// Interpreted only by the [`SceneLoader`](crate::core::scene::SceneLoader).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneRef(String);

impl SceneRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//=== Selection ===========================================================

/// A selectable stage: stable name plus the scene it loads.
///
/// Immutable once created. Two selections are the same stage when their
/// names match.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    name: String,
    scene: SceneRef,
}

impl Selection {
    pub fn new(name: impl Into<String>, scene: SceneRef) -> Self {
        Self {
            name: name.into(),
            scene,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scene(&self) -> &SceneRef {
        &self.scene
    }

    pub fn same_stage(&self, other: &Selection) -> bool {
        self.name == other.name
    }
}
