//=========================================================================
// Scene Loader
//=========================================================================
//
// Hand-off point between the transition core and whatever actually
// loads scene content.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Sender, TrySendError};
use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::selection::SceneRef;
use crate::error::{TransitionError, TransitionResult};

//=== SceneLoader Trait ===================================================

/// Performs (or schedules) a scene load.
///
/// Implementors report completion later through the session's
/// `scene_loaded` notification, never from inside `load_scene`.
pub trait SceneLoader: Send {
    fn load_scene(&mut self, scene: &SceneRef) -> TransitionResult<()>;
}

//=== SceneRequest ========================================================

/// A load request forwarded to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneRequest {
    pub scene: SceneRef,
}

//=== ChannelSceneLoader ==================================================

/// Forwards load requests to the host over a channel.
///
/// A full or disconnected channel is reported as a load failure.
pub struct ChannelSceneLoader {
    sender: Sender<SceneRequest>,
}

impl ChannelSceneLoader {
    pub fn new(sender: Sender<SceneRequest>) -> Self {
        Self { sender }
    }
}

impl SceneLoader for ChannelSceneLoader {
    fn load_scene(&mut self, scene: &SceneRef) -> TransitionResult<()> {
        let request = SceneRequest {
            scene: scene.clone(),
        };

        self.sender.try_send(request).map_err(|e| {
            let reason = match e {
                TrySendError::Full(_) => "load queue full",
                TrySendError::Disconnected(_) => "scene host disconnected",
            };
            TransitionError::SceneLoad {
                scene: scene.to_string(),
                reason: reason.to_string(),
            }
        })?;

        debug!("Forwarded load request for '{}'", scene);
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::{bounded, unbounded};

    #[test]
    fn forwards_requests_in_order() {
        let (tx, rx) = unbounded();
        let mut loader = ChannelSceneLoader::new(tx);

        loader.load_scene(&SceneRef::new("stages/dawn")).unwrap();
        loader.load_scene(&SceneRef::new("stages/dusk")).unwrap();

        let received: Vec<_> = rx.try_iter().map(|r| r.scene).collect();
        assert_eq!(
            received,
            vec![SceneRef::new("stages/dawn"), SceneRef::new("stages/dusk")]
        );
    }

    #[test]
    fn full_channel_is_a_load_failure() {
        let (tx, _rx) = bounded(1);
        let mut loader = ChannelSceneLoader::new(tx);

        loader.load_scene(&SceneRef::new("stages/dawn")).unwrap();
        let err = loader.load_scene(&SceneRef::new("stages/dusk")).unwrap_err();

        assert_eq!(
            err,
            TransitionError::SceneLoad {
                scene: "stages/dusk".to_string(),
                reason: "load queue full".to_string(),
            }
        );
    }

    #[test]
    fn disconnected_host_is_a_load_failure() {
        let (tx, rx) = unbounded::<SceneRequest>();
        drop(rx);
        let mut loader = ChannelSceneLoader::new(tx);

        let err = loader.load_scene(&SceneRef::new("stages/dawn")).unwrap_err();
        assert!(matches!(err, TransitionError::SceneLoad { .. }));
    }
}
