//! Bootstrap, login and logout flows against in-memory collaborators

use async_trait::async_trait;
use futures::future::{self, LocalBoxFuture};
use hotel_console_core::storage::{keys, AUTH_STORAGE_KEYS};
use hotel_console_core::{
    AuthStore, CredentialStore, Error, HotelCheck, HotelLookup, HotelRef, KeyValueStore,
    MemoryStore, Navigate, Phase, Result, Session, Timer, User,
};
use mockall::mock;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

mock! {
    pub Credentials {}

    impl CredentialStore for Credentials {
        fn clear_token(&self);
    }
}

mock! {
    pub Hotels {}

    #[async_trait(?Send)]
    impl HotelLookup for Hotels {
        async fn check_admin_hotels(&self) -> Result<HotelCheck>;
    }
}

#[derive(Default)]
struct RecordingNavigator {
    paths: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    fn last(&self) -> Option<String> {
        self.paths.borrow().last().cloned()
    }
}

impl Navigate for RecordingNavigator {
    fn replace(&self, path: &str) {
        self.paths.borrow_mut().push(path.to_string());
    }
}

/// Lookup that never resolves
struct StalledLookup;

#[async_trait(?Send)]
impl HotelLookup for StalledLookup {
    async fn check_admin_hotels(&self) -> Result<HotelCheck> {
        future::pending().await
    }
}

struct ImmediateTimer;

impl Timer for ImmediateTimer {
    fn sleep(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(future::ready(()))
    }
}

struct NeverTimer;

impl Timer for NeverTimer {
    fn sleep(&self, _duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(future::pending())
    }
}

/// Storage whose writes all fail, like a browser with storage disabled
struct BrokenStore;

impl KeyValueStore for BrokenStore {
    fn get(&self, _key: &str) -> Result<Option<String>> {
        Err(Error::StorageUnavailable)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<()> {
        Err(Error::StorageUnavailable)
    }

    fn remove(&self, _key: &str) -> Result<()> {
        Err(Error::StorageUnavailable)
    }

    fn clear(&self) -> Result<()> {
        Err(Error::StorageUnavailable)
    }
}

fn user() -> User {
    User {
        username: "maria".to_string(),
        email: "maria@hotel.example".to_string(),
        role: "admin".to_string(),
        access_scope: "full".to_string(),
    }
}

fn credentials(clear_calls: usize) -> Rc<MockCredentials> {
    let mut credentials = MockCredentials::new();
    credentials
        .expect_clear_token()
        .times(clear_calls)
        .return_const(());
    Rc::new(credentials)
}

fn hotels(result: fn() -> Result<HotelCheck>) -> Rc<MockHotels> {
    let mut hotels = MockHotels::new();
    hotels
        .expect_check_admin_hotels()
        .times(1)
        .returning(move || result());
    Rc::new(hotels)
}

fn session(
    local: &Rc<MemoryStore>,
    credentials: Rc<dyn CredentialStore>,
    hotels: Rc<dyn HotelLookup>,
) -> Session {
    Session::builder()
        .local_storage(local.clone())
        .session_storage(Rc::new(MemoryStore::new()))
        .credentials(credentials)
        .hotel_lookup(hotels)
        .build()
        .unwrap()
}

#[test]
fn test_bootstrap_clears_everything() {
    let local = Rc::new(MemoryStore::new());
    for key in AUTH_STORAGE_KEYS {
        local.set(key, "stale").unwrap();
    }
    let tab = Rc::new(MemoryStore::new());
    tab.set("auth_state", "{}").unwrap();

    let session = Session::builder()
        .local_storage(local.clone())
        .session_storage(tab.clone())
        .credentials(credentials(1))
        .hotel_lookup(Rc::new(StalledLookup))
        .build()
        .unwrap();

    let auth = AuthStore::new();
    assert_eq!(auth.state().phase(), Phase::Loading);

    session.bootstrap(&auth);

    let state = auth.state();
    assert_eq!(state.phase(), Phase::Ready);
    assert!(!state.is_authenticated);
    assert!(state.current_user.is_none());
    assert!(state.hotel_id.is_none());
    for key in AUTH_STORAGE_KEYS {
        assert!(!local.contains(key), "{key} survived bootstrap");
    }
    assert!(tab.is_empty());
}

#[test]
fn test_bootstrap_with_broken_storage_still_ready() {
    let session = Session::builder()
        .local_storage(Rc::new(BrokenStore))
        .session_storage(Rc::new(BrokenStore))
        .credentials(credentials(1))
        .hotel_lookup(Rc::new(StalledLookup))
        .build()
        .unwrap();

    let auth = AuthStore::new();
    session.bootstrap(&auth);

    assert_eq!(auth.state().phase(), Phase::Ready);
    assert!(!auth.state().is_authenticated);
}

#[tokio::test]
async fn test_login_with_hotel_goes_to_dashboard() {
    let local = Rc::new(MemoryStore::new());
    let session = session(
        &local,
        credentials(0),
        hotels(|| {
            Ok(HotelCheck {
                has_hotel: true,
                selected_hotel: Some(HotelRef {
                    id: "H1".to_string(),
                }),
                redirect_path: "/hotel/H1/dashboard".to_string(),
            })
        }),
    );
    let auth = AuthStore::new();
    let navigator = RecordingNavigator::default();

    session.handle_login(user(), &auth, &navigator).await;

    assert_eq!(navigator.last().as_deref(), Some("/hotel/H1/dashboard"));
    let state = auth.state();
    assert_eq!(state.hotel_id.as_deref(), Some("H1"));
    assert!(state.is_authenticated);
    assert_eq!(state.current_user, Some(user()));
    assert_eq!(state.phase(), Phase::Ready);

    assert_eq!(
        local.get(keys::IS_AUTHENTICATED).unwrap().as_deref(),
        Some("true")
    );
    let stored: User =
        serde_json::from_str(&local.get(keys::CURRENT_USER).unwrap().unwrap()).unwrap();
    assert_eq!(stored, user());
}

#[tokio::test]
async fn test_login_without_hotel_goes_to_create() {
    let local = Rc::new(MemoryStore::new());
    let session = session(&local, credentials(0), hotels(|| Ok(HotelCheck::missing())));
    let auth = AuthStore::new();
    let navigator = RecordingNavigator::default();

    session.handle_login(user(), &auth, &navigator).await;

    assert_eq!(navigator.last().as_deref(), Some("/create-hotel"));
    assert!(auth.state().hotel_id.is_none());
    assert!(auth.state().is_authenticated);
}

#[tokio::test]
async fn test_login_lookup_failure_falls_back_to_create() {
    let local = Rc::new(MemoryStore::new());
    let session = session(
        &local,
        credentials(0),
        hotels(|| Err(Error::lookup_failed("502 Bad Gateway"))),
    );
    let auth = AuthStore::new();
    let navigator = RecordingNavigator::default();

    session.handle_login(user(), &auth, &navigator).await;

    assert_eq!(*navigator.paths.borrow(), vec!["/create-hotel".to_string()]);
    assert!(auth.state().is_authenticated);
    assert_eq!(auth.state().phase(), Phase::Ready);
}

#[tokio::test]
async fn test_login_lookup_timeout_falls_back_to_create() {
    let local = Rc::new(MemoryStore::new());
    let session = Session::builder()
        .local_storage(local.clone())
        .session_storage(Rc::new(MemoryStore::new()))
        .credentials(credentials(0))
        .hotel_lookup(Rc::new(StalledLookup))
        .timer(Rc::new(ImmediateTimer))
        .lookup_timeout(Some(Duration::from_secs(1)))
        .build()
        .unwrap();
    let auth = AuthStore::new();
    let navigator = RecordingNavigator::default();

    session.handle_login(user(), &auth, &navigator).await;

    assert_eq!(navigator.last().as_deref(), Some("/create-hotel"));
    assert_eq!(auth.state().phase(), Phase::Ready);
}

#[tokio::test]
async fn test_lookup_wins_over_pending_timer() {
    let local = Rc::new(MemoryStore::new());
    let session = Session::builder()
        .local_storage(local.clone())
        .session_storage(Rc::new(MemoryStore::new()))
        .credentials(credentials(0))
        .hotel_lookup(hotels(|| Ok(HotelCheck::found("H7"))))
        .timer(Rc::new(NeverTimer))
        .build()
        .unwrap();
    let auth = AuthStore::new();
    let navigator = RecordingNavigator::default();

    session.handle_login(user(), &auth, &navigator).await;

    assert_eq!(navigator.last().as_deref(), Some("/hotel/H7/dashboard"));
    assert_eq!(auth.state().hotel_id.as_deref(), Some("H7"));
}

#[tokio::test]
async fn test_logout_clears_session() {
    let local = Rc::new(MemoryStore::new());
    let session = session(&local, credentials(1), hotels(|| Ok(HotelCheck::found("H1"))));
    let auth = AuthStore::new();
    let navigator = RecordingNavigator::default();

    session.handle_login(user(), &auth, &navigator).await;
    local.set(keys::CURRENT_USER_ID, "42").unwrap();

    session.handle_logout(&auth, &navigator);

    let state = auth.state();
    assert!(!state.is_authenticated);
    assert!(state.current_user.is_none());
    assert!(!local.contains(keys::IS_AUTHENTICATED));
    assert!(!local.contains(keys::CURRENT_USER));
    assert!(!local.contains(keys::CURRENT_USER_ID));
    assert_eq!(navigator.last().as_deref(), Some("/sign-in"));
}

#[test]
fn test_timeout_requires_timer() {
    let without_timer = Session::builder()
        .local_storage(Rc::new(MemoryStore::new()))
        .session_storage(Rc::new(MemoryStore::new()))
        .credentials(credentials(0))
        .hotel_lookup(Rc::new(StalledLookup))
        .build()
        .unwrap();
    assert_eq!(without_timer.lookup_timeout(), None);

    let with_timer = Session::builder()
        .local_storage(Rc::new(MemoryStore::new()))
        .session_storage(Rc::new(MemoryStore::new()))
        .credentials(credentials(0))
        .hotel_lookup(Rc::new(StalledLookup))
        .timer(Rc::new(NeverTimer))
        .build()
        .unwrap();
    assert_eq!(with_timer.lookup_timeout(), Some(Duration::from_secs(15)));
}

#[test]
fn test_builder_requires_collaborators() {
    let result = Session::builder()
        .local_storage(Rc::new(MemoryStore::new()))
        .build();
    assert!(matches!(result, Err(Error::Configuration(_))));
}
