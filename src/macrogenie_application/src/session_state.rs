//! Session state machine.
//!
//! ```text
//!            valid result                      profile completed
//! LoggedOut ─────────────► LoggedInIncomplete ─────────────────► LoggedInComplete
//!     ▲      (by profile_complete flag)                                  │
//!     └──────────── invalid result / logout (from any state) ────────────┘
//! ```
//!
//! `email_unverified` is orthogonal to the phase. The machine publishes a
//! [`SessionSnapshot`] through a `watch` channel so every screen can observe it.

use std::sync::Arc;

use macrogenie_core::{SessionPhase, SessionResult, SessionSnapshot, SessionState};
use tokio::sync::watch;

#[derive(Clone)]
pub struct SessionStateMachine {
    sender: Arc<watch::Sender<SessionSnapshot>>,
}

impl Default for SessionStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStateMachine {
    pub fn new() -> Self {
        let (sender, _) = watch::channel(SessionSnapshot::default());
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn state(&self) -> SessionState {
        self.sender.borrow().state()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.sender.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.sender.subscribe()
    }

    /// Replace the snapshot wholesale with the one derived from `result`.
    pub fn apply(&self, result: &SessionResult) {
        self.transition(SessionSnapshot::from_result(result));
    }

    /// Onboarding finished; only meaningful while logged in with an
    /// incomplete profile.
    pub fn profile_completed(&self) {
        self.sender.send_if_modified(|snapshot| {
            if snapshot.phase != SessionPhase::LoggedInIncomplete {
                tracing::debug!(phase = ?snapshot.phase, "Ignoring profile completion");
                return false;
            }
            snapshot.phase = SessionPhase::LoggedInComplete;
            tracing::debug!("Session transition LoggedInIncomplete -> LoggedInComplete");
            true
        });
    }

    pub fn email_verified(&self) {
        self.sender.send_if_modified(|snapshot| {
            std::mem::replace(&mut snapshot.email_unverified, false)
        });
    }

    pub fn logged_out(&self) {
        self.transition(SessionSnapshot::default());
    }

    fn transition(&self, next: SessionSnapshot) {
        self.sender.send_if_modified(|current| {
            if *current == next {
                return false;
            }
            if current.phase != next.phase {
                tracing::debug!(from = ?current.phase, to = ?next.phase, "Session transition");
            }
            *current = next;
            true
        });
    }
}
