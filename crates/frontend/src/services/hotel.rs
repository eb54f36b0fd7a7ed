//! Hotel lookup against the admin API

use crate::client::AdminApi;
use async_trait::async_trait;
use hotel_console_core::storage::keys;
use hotel_console_core::{Error, HotelCheck, HotelLookup, KeyValueStore, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

/// Hotels owned by the signed-in admin
pub const ADMIN_HOTELS_PATH: &str = "/api/admin/hotels";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelSummary {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Answers the post-login "does this admin have a hotel" question
#[derive(Clone)]
pub struct HotelService {
    api: AdminApi,
    storage: Rc<dyn KeyValueStore>,
}

impl HotelService {
    pub fn new(api: AdminApi, storage: Rc<dyn KeyValueStore>) -> Self {
        Self { api, storage }
    }

    /// List the admin's hotels
    pub async fn list_hotels(&self) -> Result<Vec<HotelSummary>> {
        let request = self.api.request(Method::GET, ADMIN_HOTELS_PATH);
        self.api
            .execute(request)
            .await
            .map_err(|e| Error::lookup_failed(e.to_string()))
    }
}

#[async_trait(?Send)]
impl HotelLookup for HotelService {
    async fn check_admin_hotels(&self) -> Result<HotelCheck> {
        let hotels = self.list_hotels().await?;

        let Some(hotel) = hotels.into_iter().next() else {
            return Ok(HotelCheck::missing());
        };

        if let Err(e) = self.storage.set(keys::CURRENT_HOTEL_ID, &hotel.id) {
            tracing::warn!(error = %e, "Failed to persist selected hotel");
        }
        Ok(HotelCheck::found(hotel.id))
    }
}
