//! Application root and route outlet

use crate::auth::{AuthProvider, ProtectedRoute, use_auth};
use crate::client::AdminApi;
use crate::components::{Layout, LoadingScreen};
use crate::pages::{CreateHotel, HotelScreen, SignIn};
use crate::router::{AppRoute, Replace, resolve_route};
use hotel_console_core::{Resolution, Screen, Session};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties)]
pub struct AppProps {
    pub session: Rc<Session>,
    pub api: AdminApi,
}

impl PartialEq for AppProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.session, &other.session) && self.api == other.api
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider session={props.session.clone()} api={props.api.clone()}>
                <AppContent />
            </AuthProvider>
        </BrowserRouter>
    }
}

#[function_component(AppContent)]
fn app_content() -> Html {
    let auth = use_auth();

    // Hold every route back until the session wipe and any hotel lookup settle
    if auth.is_loading() {
        return html! { <LoadingScreen /> };
    }

    html! { <Switch<AppRoute> render={switch} /> }
}

fn switch(route: AppRoute) -> Html {
    html! { <RouteOutlet {route} /> }
}

#[derive(Properties, Clone, PartialEq)]
struct RouteOutletProps {
    route: AppRoute,
}

#[function_component(RouteOutlet)]
fn route_outlet(props: &RouteOutletProps) -> Html {
    let auth = use_auth();

    match resolve_route(&props.route, auth.is_authenticated()) {
        Resolution::Redirect(to) => html! { <Replace to={AppRoute::from(to)} /> },
        Resolution::Render(Screen::SignIn) => html! { <SignIn /> },
        // Protected screens keep their own gate so a logout re-renders them away
        Resolution::Render(Screen::CreateHotel) => html! {
            <ProtectedRoute>
                <CreateHotel />
            </ProtectedRoute>
        },
        Resolution::Render(Screen::Hotel { hotel_id, page }) => {
            let hotel_id = AttrValue::from(hotel_id);
            html! {
                <ProtectedRoute>
                    <Layout hotel_id={hotel_id.clone()} active={page}>
                        <HotelScreen {hotel_id} {page} />
                    </Layout>
                </ProtectedRoute>
            }
        }
    }
}
