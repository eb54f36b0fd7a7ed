//! Authentication state and its transition function

use serde::{Deserialize, Serialize};
use std::cell::RefCell;

/// Signed-in administrator, persisted as JSON under `currentUser`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub email: String,
    pub role: String,
    pub access_scope: String,
}

/// Loading covers both the mount-time bootstrap and the post-login hotel lookup
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Ready,
}

/// Process-wide authentication state
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub current_user: Option<User>,
    pub hotel_id: Option<String>,
    pub is_loading: bool,
}

/// Authentication state transitions
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    /// Bootstrap finished: logged out and ready
    Reset,
    Login(User),
    LookupStarted,
    HotelSelected(String),
    LookupFinished,
    Logout,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            is_authenticated: false,
            current_user: None,
            hotel_id: None,
            is_loading: true, // Nothing renders until the bootstrap has run
        }
    }
}

impl AuthState {
    /// Logged out with nothing pending
    pub fn logged_out() -> Self {
        Self {
            is_loading: false,
            ..Self::default()
        }
    }

    pub const fn phase(&self) -> Phase {
        if self.is_loading {
            Phase::Loading
        } else {
            Phase::Ready
        }
    }

    /// Apply `action` and return the next state
    #[must_use]
    pub fn reduce(&self, action: AuthAction) -> Self {
        match action {
            AuthAction::Reset | AuthAction::Logout => Self::logged_out(),
            AuthAction::Login(user) => Self {
                is_authenticated: true,
                current_user: Some(user),
                hotel_id: None,
                is_loading: self.is_loading,
            },
            AuthAction::LookupStarted => Self {
                is_loading: true,
                ..self.clone()
            },
            AuthAction::HotelSelected(hotel_id) => Self {
                hotel_id: Some(hotel_id),
                ..self.clone()
            },
            AuthAction::LookupFinished => Self {
                is_loading: false,
                ..self.clone()
            },
        }
    }
}

/// Sink for auth transitions.
///
/// The session flow only ever pushes actions; whoever owns the state decides
/// how to store and publish it.
pub trait AuthDispatch {
    fn dispatch(&self, action: AuthAction);
}

/// Plain owned store for hosts without a UI framework
#[derive(Debug, Default)]
pub struct AuthStore {
    state: RefCell<AuthState>,
}

impl AuthStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the current state
    pub fn state(&self) -> AuthState {
        self.state.borrow().clone()
    }
}

impl AuthDispatch for AuthStore {
    fn dispatch(&self, action: AuthAction) {
        let next = self.state.borrow().reduce(action);
        *self.state.borrow_mut() = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            username: "ana".to_string(),
            email: "ana@example.com".to_string(),
            role: "admin".to_string(),
            access_scope: "hotel".to_string(),
        }
    }

    #[test]
    fn test_default_is_loading_and_logged_out() {
        let state = AuthState::default();
        assert_eq!(state.phase(), Phase::Loading);
        assert!(!state.is_authenticated);
        assert!(state.current_user.is_none());
    }

    #[test]
    fn test_reset_reaches_ready() {
        let state = AuthState::default().reduce(AuthAction::Reset);
        assert_eq!(state, AuthState::logged_out());
        assert_eq!(state.phase(), Phase::Ready);
    }

    #[test]
    fn test_login_lookup_sequence() {
        let store = AuthStore::new();
        store.dispatch(AuthAction::Reset);
        store.dispatch(AuthAction::Login(user()));
        assert!(store.state().is_authenticated);
        assert_eq!(store.state().phase(), Phase::Ready);

        store.dispatch(AuthAction::LookupStarted);
        assert_eq!(store.state().phase(), Phase::Loading);

        store.dispatch(AuthAction::HotelSelected("H1".to_string()));
        store.dispatch(AuthAction::LookupFinished);

        let state = store.state();
        assert_eq!(state.phase(), Phase::Ready);
        assert_eq!(state.hotel_id.as_deref(), Some("H1"));
        assert_eq!(state.current_user, Some(user()));
    }

    #[test]
    fn test_logout_drops_user_and_hotel() {
        let state = AuthState::logged_out()
            .reduce(AuthAction::Login(user()))
            .reduce(AuthAction::HotelSelected("H1".to_string()))
            .reduce(AuthAction::Logout);
        assert_eq!(state, AuthState::logged_out());
    }

    #[test]
    fn test_user_serializes_camel_case() {
        let json = serde_json::to_value(user()).unwrap();
        assert_eq!(json["accessScope"], "hotel");
        assert!(json.get("access_scope").is_none());
    }
}
