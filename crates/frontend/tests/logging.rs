#![cfg(target_arch = "wasm32")]

use hotel_console_frontend::logging;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_init_twice_keeps_first_subscriber() {
    logging::init();
    logging::init();
    assert!(tracing::dispatcher::has_been_set());
    tracing::info!("still logging after a second init");
}
