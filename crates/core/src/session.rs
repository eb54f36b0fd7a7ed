//! Auth bootstrap, login and logout flows
//!
//! [`Session`] owns the collaborators (browser storages, credential holder,
//! hotel lookup) and drives the auth store and the router through the
//! [`AuthDispatch`] and [`Navigate`] handles passed to each call.

use crate::auth::{AuthAction, AuthDispatch, User};
use crate::hotel::{CredentialStore, HotelCheck, HotelLookup};
use crate::routes::{Navigate, CREATE_HOTEL_PATH, SIGN_IN_PATH};
use crate::storage::{keys, KeyValueStore};
use crate::{Error, Result};
use futures::future::{self, Either, LocalBoxFuture};
use std::rc::Rc;
use std::time::Duration;
use tracing::{error, info, warn};

/// Default bound on the post-login hotel lookup
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(15);

/// Source of delays for the lookup deadline
pub trait Timer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

#[derive(Clone)]
pub struct Session {
    local: Rc<dyn KeyValueStore>,
    session: Rc<dyn KeyValueStore>,
    credentials: Rc<dyn CredentialStore>,
    hotels: Rc<dyn HotelLookup>,
    timer: Option<Rc<dyn Timer>>,
    lookup_timeout: Option<Duration>,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::default()
    }

    /// Effective lookup bound; `None` when no timer is installed
    pub fn lookup_timeout(&self) -> Option<Duration> {
        self.timer.as_ref().and(self.lookup_timeout)
    }

    /// Mount-time reset.
    ///
    /// Wipes local and session storage and the stored credential, then marks
    /// the store ready and logged out. Storage failures are logged; the state
    /// still becomes ready so the sign-in screen can render.
    pub fn bootstrap(&self, auth: &dyn AuthDispatch) {
        if let Err(e) = self.local.clear() {
            error!(error = %e, "Failed to clear local storage");
        }
        if let Err(e) = self.session.clear() {
            error!(error = %e, "Failed to clear session storage");
        }
        self.credentials.clear_token();

        auth.dispatch(AuthAction::Reset);
        info!("Cleared all authentication data, starting fresh");
    }

    /// Record the signed-in user and route to the admin's hotel.
    ///
    /// Lookup failures (including a timeout) are logged and fall back to the
    /// hotel-creation screen; nothing is returned to the caller.
    pub async fn handle_login(
        &self,
        user: User,
        auth: &dyn AuthDispatch,
        navigator: &dyn Navigate,
    ) {
        info!(username = %user.username, "Handling login");

        if let Err(e) = self.persist_user(&user) {
            warn!(error = %e, "Failed to persist signed-in user");
        }
        auth.dispatch(AuthAction::Login(user));
        auth.dispatch(AuthAction::LookupStarted);

        match self.lookup_hotels().await {
            Ok(check) => {
                if let Some(hotel_id) = check.selected_hotel_id() {
                    info!(hotel_id, "Redirecting to hotel dashboard");
                    auth.dispatch(AuthAction::HotelSelected(hotel_id.to_string()));
                } else {
                    info!("No hotel found, redirecting to hotel creation");
                }
                navigator.replace(&check.redirect_path);
            }
            Err(e) => {
                error!(error = %e, "Hotel check failed during login");
                navigator.replace(CREATE_HOTEL_PATH);
            }
        }

        auth.dispatch(AuthAction::LookupFinished);
    }

    /// Drop the session and return to sign-in
    pub fn handle_logout(&self, auth: &dyn AuthDispatch, navigator: &dyn Navigate) {
        auth.dispatch(AuthAction::Logout);

        for key in [
            keys::IS_AUTHENTICATED,
            keys::CURRENT_USER,
            keys::CURRENT_USER_ID,
        ] {
            if let Err(e) = self.local.remove(key) {
                warn!(key, error = %e, "Failed to remove key on logout");
            }
        }
        self.credentials.clear_token();

        info!("Logged out");
        navigator.replace(SIGN_IN_PATH);
    }

    fn persist_user(&self, user: &User) -> Result<()> {
        self.local.set(keys::IS_AUTHENTICATED, "true")?;
        self.local
            .set(keys::CURRENT_USER, &serde_json::to_string(user)?)
    }

    async fn lookup_hotels(&self) -> Result<HotelCheck> {
        let lookup = self.hotels.check_admin_hotels();

        match (&self.timer, self.lookup_timeout) {
            (Some(timer), Some(limit)) => {
                match future::select(lookup, timer.sleep(limit)).await {
                    Either::Left((result, _)) => result,
                    Either::Right(((), _)) => Err(Error::LookupTimedOut(limit)),
                }
            }
            _ => lookup.await,
        }
    }
}

/// Builder for [`Session`]
pub struct SessionBuilder {
    local: Option<Rc<dyn KeyValueStore>>,
    session: Option<Rc<dyn KeyValueStore>>,
    credentials: Option<Rc<dyn CredentialStore>>,
    hotels: Option<Rc<dyn HotelLookup>>,
    timer: Option<Rc<dyn Timer>>,
    lookup_timeout: Option<Duration>,
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self {
            local: None,
            session: None,
            credentials: None,
            hotels: None,
            timer: None,
            lookup_timeout: Some(DEFAULT_LOOKUP_TIMEOUT),
        }
    }
}

impl SessionBuilder {
    /// Persistent storage (`localStorage` in the browser)
    pub fn local_storage(mut self, store: Rc<dyn KeyValueStore>) -> Self {
        self.local = Some(store);
        self
    }

    /// Per-tab storage (`sessionStorage` in the browser)
    pub fn session_storage(mut self, store: Rc<dyn KeyValueStore>) -> Self {
        self.session = Some(store);
        self
    }

    pub fn credentials(mut self, credentials: Rc<dyn CredentialStore>) -> Self {
        self.credentials = Some(credentials);
        self
    }

    pub fn hotel_lookup(mut self, hotels: Rc<dyn HotelLookup>) -> Self {
        self.hotels = Some(hotels);
        self
    }

    /// Timer used to enforce the lookup timeout. Without one the lookup is
    /// awaited indefinitely.
    pub fn timer(mut self, timer: Rc<dyn Timer>) -> Self {
        self.timer = Some(timer);
        self
    }

    /// `None` disables the bound
    pub fn lookup_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    pub fn build(self) -> Result<Session> {
        Ok(Session {
            local: self
                .local
                .ok_or_else(|| Error::configuration("local storage is required"))?,
            session: self
                .session
                .ok_or_else(|| Error::configuration("session storage is required"))?,
            credentials: self
                .credentials
                .ok_or_else(|| Error::configuration("credential store is required"))?,
            hotels: self
                .hotels
                .ok_or_else(|| Error::configuration("hotel lookup is required"))?,
            timer: self.timer,
            lookup_timeout: self.lookup_timeout,
        })
    }
}
