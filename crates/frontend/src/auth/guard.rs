//! Protected-route gate

use super::use_is_authenticated;
use crate::router::{AppRoute, Replace};
use hotel_console_core::routes::guard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub children: Children,
}

/// Renders its children for signed-in admins, otherwise replaces the
/// current history entry with the sign-in screen
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let authenticated = use_is_authenticated();

    match guard(authenticated) {
        Some(redirect) => html! { <Replace to={AppRoute::from(redirect)} /> },
        None => html! { <>{ props.children.clone() }</> },
    }
}
