//! Per-hotel management screen

use hotel_console_core::HotelPage;
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct HotelScreenProps {
    pub hotel_id: AttrValue,
    pub page: HotelPage,
}

/// Mount point for a per-hotel management screen
#[function_component(HotelScreen)]
pub fn hotel_screen(props: &HotelScreenProps) -> Html {
    html! {
        <section data-page={props.page.slug()}>
            <h2 class="text-2xl font-bold text-gray-900 dark:text-white mb-2">{props.page.title()}</h2>
            <p class="text-sm text-gray-500 dark:text-gray-400">{format!("Hotel {}", props.hotel_id)}</p>
        </section>
    }
}
