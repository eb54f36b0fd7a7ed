//! Wiring of the core session flow to browser collaborators

use crate::client::AdminApi;
use crate::services::HotelService;
use crate::storage;
use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;
use hotel_console_core::{KeyValueStore, Result, Session, Timer};
use std::rc::Rc;
use std::time::Duration;

/// `setTimeout`-backed timer
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        let millis = u32::try_from(duration.as_millis()).unwrap_or(u32::MAX);
        Box::pin(TimeoutFuture::new(millis))
    }
}

/// Build the session against the browser storages and the admin API
pub fn browser_session(api: &AdminApi, local: Rc<dyn KeyValueStore>) -> Result<Session> {
    Session::builder()
        .local_storage(local.clone())
        .session_storage(storage::or_memory(storage::session_storage()))
        .credentials(Rc::new(api.clone()))
        .hotel_lookup(Rc::new(HotelService::new(api.clone(), local)))
        .timer(Rc::new(BrowserTimer))
        .build()
}
