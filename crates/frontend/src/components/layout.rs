//! Shared layout for the per-hotel screens

use crate::auth::use_auth;
use crate::router::AppRoute;
use hotel_console_core::HotelPage;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub hotel_id: AttrValue,
    pub active: HotelPage,
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator();

    let on_logout = {
        let auth = auth.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = navigator.clone() {
                auth.logout(navigator);
            }
        })
    };

    let user_label = auth
        .current_user()
        .map(|user| format!("{} ({})", user.username, user.role))
        .unwrap_or_default();

    html! {
        <div class="min-h-screen flex bg-white dark:bg-gray-900">
            <nav class="w-60 bg-gray-50 dark:bg-gray-800 border-r border-gray-200 dark:border-gray-700 p-4 flex flex-col gap-1">
                <h1 class="text-xl font-bold text-gray-900 dark:text-white mb-4">{"Hotel Console"}</h1>
                { for HotelPage::ALL.into_iter().map(|page| {
                    let class = if page == props.active {
                        "px-3 py-2 rounded-lg text-sm font-medium bg-blue-600 text-white"
                    } else {
                        "px-3 py-2 rounded-lg text-sm font-medium text-gray-700 dark:text-gray-300 hover:bg-gray-200 dark:hover:bg-gray-700"
                    };
                    html! {
                        <Link<AppRoute>
                            classes={classes!(class)}
                            to={AppRoute::Hotel { hotel_id: props.hotel_id.to_string(), page }}
                        >
                            {page.title()}
                        </Link<AppRoute>>
                    }
                }) }
            </nav>
            <div class="flex-1 flex flex-col">
                <header class="p-4 border-b border-gray-200 dark:border-gray-700 flex justify-between items-center">
                    <span class="text-sm text-gray-500 dark:text-gray-400">{user_label}</span>
                    <button
                        onclick={on_logout}
                        class="px-4 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 bg-gray-100 dark:bg-gray-700 hover:bg-gray-200 dark:hover:bg-gray-600 rounded-lg transition-colors"
                    >
                        {"Logout"}
                    </button>
                </header>
                <main class="flex-1 overflow-auto p-6">
                    {props.children.clone()}
                </main>
            </div>
        </div>
    }
}
