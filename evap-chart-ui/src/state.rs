//! Application state managed via Dioxus context.
//!
//! `AppState` wraps the whole `SessionState` in one signal, provided via
//! `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`, read it freely, and write it only through
//! the `evap_core` transitions (`SessionStore::update`, `reset`, form edits).

use dioxus::prelude::*;
use evap_core::session::{SessionState, SessionStore};

#[derive(Clone, Copy)]
pub struct AppState {
    pub session: Signal<SessionState>,
}

impl AppState {
    /// Create a new AppState with an empty session.
    pub fn new() -> Self {
        Self {
            session: Signal::new(SessionState::new()),
        }
    }

    /// Clear the form and results, keeping history.
    pub fn reset(&mut self) {
        self.session.write().reset();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore for AppState {
    fn update<R>(&mut self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        let mut session = self.session.write();
        f(&mut *session)
    }
}
