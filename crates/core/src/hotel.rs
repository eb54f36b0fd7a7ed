//! Collaborator contracts used after sign-in

use crate::Result;
use crate::routes::{HotelPage, Route, CREATE_HOTEL_PATH};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Reference to a hotel owned by the signed-in admin
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HotelRef {
    pub id: String,
}

/// Outcome of the post-login hotel lookup
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelCheck {
    pub has_hotel: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_hotel: Option<HotelRef>,
    pub redirect_path: String,
}

impl HotelCheck {
    /// The admin owns `hotel_id`; continue to its dashboard
    pub fn found(hotel_id: impl Into<String>) -> Self {
        let id = hotel_id.into();
        Self {
            has_hotel: true,
            redirect_path: Route::hotel(id.clone(), HotelPage::Dashboard).path(),
            selected_hotel: Some(HotelRef { id }),
        }
    }

    /// The admin has no hotel yet
    pub fn missing() -> Self {
        Self {
            has_hotel: false,
            selected_hotel: None,
            redirect_path: CREATE_HOTEL_PATH.to_string(),
        }
    }

    /// Hotel to remember, only when the lookup reported one
    pub fn selected_hotel_id(&self) -> Option<&str> {
        if self.has_hotel {
            self.selected_hotel.as_ref().map(|hotel| hotel.id.as_str())
        } else {
            None
        }
    }
}

/// Determines whether the current admin already owns a hotel
#[async_trait(?Send)]
pub trait HotelLookup {
    async fn check_admin_hotels(&self) -> Result<HotelCheck>;
}

/// Holder of the admin API credential
pub trait CredentialStore {
    /// Forget any stored credential token
    fn clear_token(&self);
}
