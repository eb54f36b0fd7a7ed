//! Hotel creation entry point

use crate::auth::use_auth;
use yew::prelude::*;
use yew_router::prelude::*;

/// Landing screen for admins without a hotel. The creation form itself is
/// served by the hotel management screens.
#[function_component(CreateHotel)]
pub fn create_hotel() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    let on_logout = Callback::from(move |_: MouseEvent| {
        if let Some(navigator) = navigator.clone() {
            auth.logout(navigator);
        }
    });

    html! {
        <div class="min-h-screen flex items-center justify-center bg-white dark:bg-gray-900 px-4">
            <div class="max-w-lg text-center space-y-4">
                <h1 class="text-2xl font-bold text-gray-900 dark:text-white">{"Create your hotel"}</h1>
                <p class="text-gray-600 dark:text-gray-300">
                    {"Your account is not linked to a hotel yet. Create one to open its dashboard."}
                </p>
                <button
                    onclick={on_logout}
                    class="px-4 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 bg-gray-100 dark:bg-gray-700 hover:bg-gray-200 dark:hover:bg-gray-600 rounded-lg transition-colors"
                >
                    {"Logout"}
                </button>
            </div>
        </div>
    }
}
