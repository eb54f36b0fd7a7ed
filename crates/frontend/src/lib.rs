//! Browser shell of the hotel admin console

pub mod app;
pub mod auth;
pub mod clear_auth;
pub mod client;
pub mod components;
pub mod config;
pub mod logging;
pub mod pages;
pub mod router;
pub mod services;
pub mod session;
pub mod storage;

use app::{App, AppProps};
use client::AdminApi;
use config::CONFIG;
use std::rc::Rc;

/// Install logging, resolve configuration and mount the app on `<body>`
pub fn run() -> hotel_console_core::Result<()> {
    console_error_panic_hook::set_once();
    logging::init();

    let config = &*CONFIG;
    tracing::info!(api_base_url = %config.api_base_url, "Starting hotel console");

    let local = storage::or_memory(storage::local_storage());
    let api = AdminApi::new(&config.api_base_url, local.clone())?;
    let session = session::browser_session(&api, local)?;

    yew::Renderer::<App>::with_props(AppProps {
        session: Rc::new(session),
        api,
    })
    .render();

    Ok(())
}
