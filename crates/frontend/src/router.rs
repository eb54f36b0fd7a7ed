//! Browser route table

use hotel_console_core::routes::resolve;
use hotel_console_core::{HotelPage, Navigate, Resolution, Route};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Debug, PartialEq, Routable)]
pub enum AppRoute {
    #[at("/sign-in")]
    SignIn,
    #[at("/")]
    Root,
    #[at("/create-hotel")]
    CreateHotel,
    #[at("/hotel/:hotel_id/:page")]
    Hotel { hotel_id: String, page: HotelPage },
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl From<AppRoute> for Route {
    fn from(route: AppRoute) -> Self {
        match route {
            AppRoute::SignIn => Self::SignIn,
            AppRoute::Root => Self::Root,
            AppRoute::CreateHotel => Self::CreateHotel,
            AppRoute::Hotel { hotel_id, page } => Self::Hotel { hotel_id, page },
            AppRoute::NotFound => Self::NotFound,
        }
    }
}

impl From<Route> for AppRoute {
    fn from(route: Route) -> Self {
        match route {
            Route::SignIn => Self::SignIn,
            Route::Root => Self::Root,
            Route::CreateHotel => Self::CreateHotel,
            Route::Hotel { hotel_id, page } => Self::Hotel { hotel_id, page },
            Route::NotFound => Self::NotFound,
        }
    }
}

/// What the outlet does for a matched route, given the auth state
pub fn resolve_route(route: &AppRoute, authenticated: bool) -> Resolution {
    resolve(&Route::from(route.clone()), authenticated)
}

/// History-replacing navigator handed to the session flow
pub struct RouterNavigator(Navigator);

impl RouterNavigator {
    pub const fn new(navigator: Navigator) -> Self {
        Self(navigator)
    }
}

impl Navigate for RouterNavigator {
    fn replace(&self, path: &str) {
        tracing::debug!(path, "Replacing history entry");
        self.0.replace(&AppRoute::from(Route::parse(path)));
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct ReplaceProps {
    pub to: AppRoute,
}

/// Redirect that replaces the current history entry instead of pushing
#[function_component(Replace)]
pub fn replace(props: &ReplaceProps) -> Html {
    let navigator = use_navigator();

    use_effect_with(props.to.clone(), move |to| {
        if let Some(navigator) = navigator {
            navigator.replace(to);
        }
    });

    html! {}
}
