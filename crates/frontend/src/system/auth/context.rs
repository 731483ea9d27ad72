//! Explicit session object, provided through Leptos context.
//!
//! Replaces the legacy pattern of reading the token ambiently from
//! localStorage in every view: the token is loaded once at startup, views
//! receive the session by context and go through `login`/`logout`.

use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    pub token: Option<String>,
}

#[derive(Clone, Copy)]
pub struct Session {
    state: RwSignal<SessionState>,
}

impl Session {
    /// Initialise from durable storage.
    fn init_from_storage() -> Self {
        Self {
            state: RwSignal::new(SessionState {
                token: storage::get_token(),
            }),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.get().token.is_some()
    }

    pub fn token(&self) -> Option<String> {
        self.state.get().token
    }

    /// Persist a freshly issued token and unlock the application.
    pub fn login(&self, token: String) {
        storage::save_token(&token);
        self.state.set(SessionState { token: Some(token) });
    }

    /// Drop the token; the auth gate falls back to the login page.
    pub fn logout(&self) {
        storage::clear_token();
        self.state.set(SessionState::default());
    }
}

/// Provide the session to the component tree. Called once from `App`.
pub fn provide_session() {
    provide_context(Session::init_from_storage());
}

/// Hook to access the session
pub fn use_session() -> Session {
    use_context::<Session>().expect("session not provided in component tree")
}
