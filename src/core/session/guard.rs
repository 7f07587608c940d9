//=========================================================================
// Session Guard
//=========================================================================
//
// Keeps exactly one session alive for the lifetime of its owner.
//
//   adopt(first)  → Installed, overlay + pause surface made persistent
//   adopt(other)  → Discarded, `other` torn down, installed one untouched
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{info, warn};

//=== Internal Dependencies ===============================================

use super::{Session, SessionId};

//=== Adoption ============================================================

/// What happened to a session handed to [`SessionGuard::adopt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Adoption {
    /// The session is now the live one.
    Installed(SessionId),
    /// A session was already live; the candidate was destroyed.
    Discarded { kept: SessionId, discarded: SessionId },
}

//=== SessionGuard ========================================================

/// Owner of the single live [`Session`].
///
/// Held by the composition root (the [`Engine`](crate::Engine)). Once a
/// session is installed it is never replaced.
#[derive(Default)]
pub struct SessionGuard {
    session: Option<Session>,
}

impl SessionGuard {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// Installs `candidate` if no session is live, otherwise destroys it.
    pub fn adopt(&mut self, mut candidate: Session) -> Adoption {
        if let Some(live) = &self.session {
            let kept = live.id();
            warn!(
                "Session {:?} already live, discarding duplicate {:?}",
                kept,
                candidate.id()
            );
            let discarded = candidate.teardown();
            return Adoption::Discarded { kept, discarded };
        }

        candidate.make_persistent();
        let id = candidate.id();
        info!("Session {:?} installed", id);
        self.session = Some(candidate);

        Adoption::Installed(id)
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut Session> {
        self.session.as_mut()
    }

    pub fn is_installed(&self) -> bool {
        self.session.is_some()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
