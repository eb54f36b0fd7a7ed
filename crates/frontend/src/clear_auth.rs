//! Standalone credential reset callable from page scripts

use crate::storage;
use hotel_console_core::storage::clear_auth_keys;
use hotel_console_core::{ClearOutcome, KeyValueStore};
use wasm_bindgen::prelude::*;

/// Remove every auth-related key from `localStorage` and return how many
/// removals failed, or `-1` when storage is unavailable.
#[wasm_bindgen(js_name = clearAuth)]
pub fn clear_auth() -> i32 {
    let local = storage::local_storage();
    match clear_auth_keys(local.as_ref().map(|s| s as &dyn KeyValueStore)) {
        ClearOutcome::Cleared { failures } => i32::try_from(failures).unwrap_or(i32::MAX),
        ClearOutcome::Unavailable => -1,
    }
}
