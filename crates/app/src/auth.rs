use dioxus::prelude::*;
use shared_types::{AuthUser, SessionRole};

/// Global authentication state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AuthState {
    pub current_user: Signal<Option<AuthUser>>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            current_user: Signal::new(None),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_user.read().is_some()
    }

    pub fn set_user(&mut self, user: AuthUser) {
        self.current_user.set(Some(user));
    }

    pub fn clear_auth(&mut self) {
        self.current_user.set(None);
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// The session role resolved at login. Anonymous visitors read as `User`;
/// pages that need the distinction gate on authentication separately.
pub fn use_session_role() -> SessionRole {
    let auth = use_auth();
    let binding = auth.current_user.read();
    binding
        .as_ref()
        .map(|u| u.session_role.clone())
        .unwrap_or_default()
}
